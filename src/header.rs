use modular_bitfield::prelude::{bitfield, B1, B3, B4};

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::error::DnsError;

/// Header section of a message is always present and includes fields that specify
/// which of the remaining sections are present, and also specifiy wether the
/// message is a query or a reponse to some query or something else.
///
/// The wire-format of a header has the following representation:
///                                   1  1  1  1  1  1
///     0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     |                      ID                       |
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     |                    QDCOUNT                    |
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     |                    ANCOUNT                    |
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     |                    NSCOUNT                    |
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///     |                    ARCOUNT                    |
///     +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
///
/// The section counts are not part of this struct: they are derived from the message sections
/// when writing and drive the section parsing when reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    /// The identification field is used to match responses with queries.
    pub id: u16,

    /// Query/Response bit, set for responses.
    pub query_response: bool,

    /// Kind of query, four bits (0 to 15). Encoding rejects larger values.
    pub opcode: u8,

    /// Set by a server that is authoritative for the queried name.
    pub authoritative_answer: bool,

    /// Set when the message was cut to fit the transport.
    pub truncation: bool,

    /// Set by a client that wants the server to resolve recursively.
    pub recursion_desired: bool,

    /// Set by a server able to resolve recursively.
    pub recursion_available: bool,

    /// The three Z bits, stored as they appear on the wire (0x4 is the most significant one).
    /// Encoding rejects values above 7.
    pub reserved: u8,

    /// Response code. The header carries the low four bits; with EDNS in use the OPT record
    /// carries the eight bits above them. Encoding rejects values above 15 without EDNS and
    /// above 4095 with it.
    pub response_code: u16,
}

/// Offset of the flag word inside the header.
pub(crate) const FLAGS_OFFSET: usize = 2;

impl Header {
    /// The number of bytes to represent a dns header.
    pub const SIZE: usize = 12;

    /// Create a new header for a query.
    pub fn new_query(id: u16, recursion_desired: bool) -> Self {
        Self {
            id,
            recursion_desired,
            ..Default::default()
        }
    }

    /// Create a new header for a reply to the query with the given id.
    pub fn new_reply(id: u16) -> Self {
        Self {
            id,
            query_response: true,
            ..Default::default()
        }
    }

    pub(crate) fn flags(&self) -> FlagBitfield {
        FlagBitfield::new()
            .with_qr(self.query_response as u8)
            .with_opcode(self.opcode & 0x0F)
            .with_aa(self.authoritative_answer as u8)
            .with_tc(self.truncation as u8)
            .with_rd(self.recursion_desired as u8)
            .with_ra(self.recursion_available as u8)
            .with_z(self.reserved & 0x07)
            .with_rcode((self.response_code & 0x0F) as u8)
    }

    pub(crate) fn from_flags(id: u16, flags: FlagBitfield) -> Self {
        Self {
            id,
            query_response: flags.qr() != 0,
            opcode: flags.opcode(),
            authoritative_answer: flags.aa() != 0,
            truncation: flags.tc() != 0,
            recursion_desired: flags.rd() != 0,
            recursion_available: flags.ra() != 0,
            reserved: flags.z(),
            response_code: flags.rcode() as u16,
        }
    }

    /// Writes id and flag word. The four section counts follow and are written by the caller.
    pub(crate) fn write(&self, writer: &mut DnsWriter<'_>) -> Result<(), DnsError> {
        writer.write_u16(self.id)?;
        writer.write_bytes(&self.flags().into_bytes())
    }

    /// Reads id and flag word, leaving the buffer in front of the section counts.
    pub(crate) fn read(buffer: &mut DnsBuffer<'_>) -> Result<Self, DnsError> {
        let id = buffer.extract_u16()?;
        let flags = buffer.extract_bytes(2)?;
        Ok(Self::from_flags(id, FlagBitfield::from_bytes([flags[0], flags[1]])))
    }
}

/// Representation of the bitflags that are present in the header of a dns message.
#[bitfield]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FlagBitfield {
    /// Recursion desired
    pub(crate) rd: B1,
    /// Truncation
    pub(crate) tc: B1,
    /// Authoritative answer
    pub(crate) aa: B1,
    /// Kind of query
    pub(crate) opcode: B4,
    /// Query (0) or response (1)
    pub(crate) qr: B1,
    /// Response code, low four bits
    pub(crate) rcode: B4,
    /// Reserved, transported unchanged
    pub(crate) z: B3,
    /// Recursion available
    pub(crate) ra: B1,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag_word(header: &Header) -> u16 {
        u16::from_be_bytes(header.flags().into_bytes())
    }

    #[test]
    fn flag_word_layout() {
        let header = Header {
            id: 0,
            query_response: true,
            opcode: 0b1010,
            authoritative_answer: true,
            truncation: false,
            recursion_desired: true,
            recursion_available: true,
            reserved: 0b101,
            response_code: 0x3,
        };

        assert_eq!(flag_word(&header), 0b1_1010_1_0_1_1_101_0011);
    }

    #[test]
    fn single_bits() {
        let mut header = Header::default();
        header.truncation = true;
        assert_eq!(flag_word(&header), 0x0200);

        let header = Header::new_query(1, true);
        assert_eq!(flag_word(&header), 0x0100);

        let header = Header::new_reply(1);
        assert_eq!(flag_word(&header), 0x8000);

        let header = Header {
            reserved: 0b100,
            ..Default::default()
        };
        assert_eq!(flag_word(&header), 0x0040);
    }

    #[test]
    fn response_code_keeps_low_bits_only() {
        let header = Header {
            response_code: 0x1F3,
            ..Default::default()
        };
        assert_eq!(flag_word(&header), 0x0003);
    }

    #[test]
    fn read_every_bit_back() {
        for word in [0x0000u16, 0xFFFF, 0x8180, 0x0210, 0x0070, 0x7800] {
            let bytes = [0x12, 0x34, (word >> 8) as u8, word as u8];
            let mut buffer = DnsBuffer::from(&bytes[..]);
            let header = Header::read(&mut buffer).unwrap();

            assert_eq!(header.id, 0x1234);
            assert_eq!(flag_word(&header), word);
        }
    }

    #[test]
    fn write_id_and_flags() {
        let mut storage = [0u8; Header::SIZE];
        let mut writer = DnsWriter::new(&mut storage);

        Header::new_reply(57900).write(&mut writer).unwrap();
        assert_eq!(writer.as_slice(), &[226, 44, 0x80, 0]);
    }
}
