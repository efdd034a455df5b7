use std::convert::TryFrom;

use tracing::trace;

use crate::buffer::DnsBuffer;
use crate::error::DnsError;
use crate::header::Header;
use crate::message::Message;
use crate::question::Question;
use crate::rdata::{Edns, RecordData, RecordType};
use crate::resource::ResourceRecord;

/// Parses a complete message. Any malformed part fails the whole call; bytes after the last
/// record are ignored.
pub fn decode(data: &[u8]) -> Result<Message, DnsError> {
    let mut buffer = DnsBuffer::from(data);

    let mut header = Header::read(&mut buffer)?;
    let question_count = buffer.extract_u16()?;
    let answer_count = buffer.extract_u16()?;
    let authority_count = buffer.extract_u16()?;
    let additional_count = buffer.extract_u16()?;

    match question_count {
        0 => return Err(DnsError::MissingQuestion),
        1 => {}
        count => return Err(DnsError::UnsupportedQuestionCount(count)),
    }
    let question = Question::try_from(&mut buffer)?;

    let answers = read_section(&mut buffer, answer_count)?;
    let authorities = read_section(&mut buffer, authority_count)?;

    let mut additionals = Vec::new();
    let mut edns = None;
    for _ in 0..additional_count {
        match ResourceRecord::try_from(&mut buffer)? {
            ResourceRecord {
                class,
                ttl,
                data: RecordData::OPT(opt),
                ..
            } => {
                if edns.is_some() {
                    return Err(DnsError::MultipleOptRecords);
                }
                let (value, extended_rcode) = Edns::from_record(class, ttl, opt);
                header.response_code |= (extended_rcode as u16) << 4;
                trace!(
                    udp_payload_size = value.udp_payload_size,
                    version = value.version,
                    dnssec_ok = value.dnssec_ok,
                    options = value.options.len(),
                    "hoisted OPT record"
                );
                edns = Some(value);
            }
            record => additionals.push(record),
        }
    }

    trace!(
        id = header.id,
        answers = answers.len(),
        authorities = authorities.len(),
        additionals = additionals.len(),
        edns = edns.is_some(),
        trailing = buffer.remaining(),
        "decoded message"
    );

    Ok(Message {
        header,
        questions: vec![question],
        answers,
        authorities,
        additionals,
        edns,
    })
}

/// Reads an answer or authority section, where OPT records are not allowed.
fn read_section(buffer: &mut DnsBuffer<'_>, count: u16) -> Result<Vec<ResourceRecord>, DnsError> {
    let mut records = Vec::new();
    for _ in 0..count {
        let record = ResourceRecord::try_from(&mut *buffer)?;
        if record.record_type() == RecordType::OPT {
            return Err(DnsError::MisplacedOptRecord);
        }
        records.push(record);
    }
    Ok(records)
}
