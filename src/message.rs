use std::convert::TryFrom;
use std::fmt;

use crate::error::DnsError;
use crate::header::Header;
use crate::question::Question;
use crate::rdata::Edns;
use crate::resource::ResourceRecord;
use crate::{decoder, encoder, MAX_MESSAGE_SIZE};

/// Represents a complete DNS message.
/// A message is divided into five sections, some of which are empty in certain cases.
///
/// In wire-format a message has the following representation:
///     +---------------------+
///     |        Header       |
///     +---------------------+
///     |       Question      | the question for the name server
///     +---------------------+
///     |        Answer       | RRs answering the question
///     +---------------------+
///     |      Authority      | RRs pointing toward an authority
///     +---------------------+
///     |      Additional     | RRs holding additional information
///     +---------------------+
///
/// Exactly one question is encoded and decoded. EDNS data is kept in `edns` and travels as an
/// OPT record in front of the additional records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub header: Header,

    /// Contains fields that each describe a question to a name server.
    pub questions: Vec<Question>,

    /// Contains resource records that answer the questions.
    pub answers: Vec<ResourceRecord>,

    /// Contains resource records that point toward a authoritative name server.
    pub authorities: Vec<ResourceRecord>,

    /// Contains resource records which relate to the query, but are not strictly
    /// anwsers for the questions. Never holds the OPT pseudo record: decoding moves it into
    /// `edns` and encoding rejects it here with `MisplacedOptRecord`.
    pub additionals: Vec<ResourceRecord>,

    /// `Some` exactly when the message uses EDNS.
    pub edns: Option<Edns>,
}

impl Message {
    /// Create a new message configured as a recursive query for `question`.
    pub fn new_query(id: u16, question: Question) -> Self {
        Self {
            header: Header::new_query(id, true),
            questions: vec![question],
            ..Default::default()
        }
    }

    /// Create a new message configured as a reply. The question still has to be added.
    pub fn new_reply(id: u16) -> Self {
        Self {
            header: Header::new_reply(id),
            ..Default::default()
        }
    }

    /// The single question of the message, if any.
    pub fn question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Encodes into `buffer`, whose length is the capacity. Returns the number of bytes written,
    /// which is smaller than the full message if it had to be truncated.
    pub fn encode_into(&self, buffer: &mut [u8]) -> Result<usize, DnsError> {
        encoder::encode(self, buffer)
    }

    /// Encodes into a buffer of `capacity` bytes and returns the written part.
    pub fn to_bytes_with_capacity(&self, capacity: usize) -> Result<Vec<u8>, DnsError> {
        let mut buffer = vec![0u8; capacity];
        let len = self.encode_into(&mut buffer)?;
        buffer.truncate(len);
        Ok(buffer)
    }

    /// Encodes with the largest capacity a message can have.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DnsError> {
        self.to_bytes_with_capacity(MAX_MESSAGE_SIZE)
    }
}

impl TryFrom<&[u8]> for Message {
    type Error = DnsError;

    fn try_from(buffer: &[u8]) -> Result<Self, Self::Error> {
        decoder::decode(buffer)
    }
}

/// Zone file like dump of the message, one line per question and record.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.header;
        writeln!(
            f,
            ";; id {} opcode {} rcode {} qr {} aa {} tc {} rd {} ra {}",
            header.id,
            header.opcode,
            header.response_code,
            header.query_response as u8,
            header.authoritative_answer as u8,
            header.truncation as u8,
            header.recursion_desired as u8,
            header.recursion_available as u8
        )?;

        if let Some(edns) = &self.edns {
            writeln!(
                f,
                ";; EDNS version {} udp {} do {}",
                edns.version, edns.udp_payload_size, edns.dnssec_ok as u8
            )?;
        }

        for question in self.questions.iter() {
            writeln!(f, ";{question}")?;
        }

        for record in self
            .answers
            .iter()
            .chain(self.authorities.iter())
            .chain(self.additionals.iter())
        {
            writeln!(f, "{record}")?;
        }

        Ok(())
    }
}
