use tracing::debug;

use crate::buffer::DnsWriter;
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::NameIndex;
use crate::header::{FlagBitfield, Header, FLAGS_OFFSET};
use crate::message::Message;
use crate::question::Question;
use crate::rdata::RecordType;
use crate::resource::ResourceRecord;

/// Record sections of a message, in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Section {
    Answer,
    Authority,
    Additional,
}

impl Section {
    /// Offset of the section's record count inside the header.
    pub(crate) fn count_offset(self) -> usize {
        match self {
            Section::Answer => 6,
            Section::Authority => 8,
            Section::Additional => 10,
        }
    }
}

/// Writes `message` into `buffer` and returns the number of bytes written.
///
/// If a record does not fit, the message is cut before that record: the truncation flag is set,
/// the current section keeps the count of records written so far and all later sections are
/// emptied. Only when not even the header and question fit is an error returned.
pub fn encode(message: &Message, buffer: &mut [u8]) -> Result<usize, DnsError> {
    let capacity = buffer.len();
    let question = single_question(message)?;
    check_header(&message.header, message.edns.is_some())?;
    check_opt_records(message)?;

    let edns_record = message
        .edns
        .as_ref()
        .map(|edns| edns.to_record(message.header.response_code));

    let sections = [
        (Section::Answer, message.answers.iter().collect::<Vec<_>>()),
        (Section::Authority, message.authorities.iter().collect()),
        (
            Section::Additional,
            edns_record
                .iter()
                .chain(message.additionals.iter())
                .collect(),
        ),
    ];

    let mut writer = DnsWriter::new(buffer);
    let mut names = NameIndex::new();

    write_preamble(&mut writer, &mut names, &message.header, question, &sections).map_err(
        |err| match err {
            DnsError::BufferOverflow { .. } => DnsError::InsufficientCapacity(capacity),
            err => err,
        },
    )?;

    for (index, (section, records)) in sections.iter().enumerate() {
        for (written, record) in records.iter().enumerate() {
            let record_start = writer.position();
            match record.write_compressed(&mut writer, &mut names) {
                Ok(()) => {}
                Err(err) if err.is_overflow() => {
                    truncate(&mut writer, record_start, &sections[index..], written)?;
                    debug!(
                        ?section,
                        kept = written,
                        dropped = records.len() - written,
                        offset = record_start,
                        capacity,
                        "message truncated"
                    );
                    return Ok(record_start);
                }
                Err(err) => return Err(err),
            }
        }
    }

    Ok(writer.position())
}

fn single_question(message: &Message) -> Result<&Question, DnsError> {
    match message.questions.as_slice() {
        [question] => Ok(question),
        [] => Err(DnsError::MissingQuestion),
        questions => Err(DnsError::UnsupportedQuestionCount(
            u16::try_from(questions.len()).unwrap_or(u16::MAX),
        )),
    }
}

/// Every header field has to fit its wire width. Above the low four bits, the response code
/// travels in the OPT record and so needs EDNS.
fn check_header(header: &Header, edns: bool) -> Result<(), DnsError> {
    let rcode_max = if edns { 0x0FFF } else { 0x0F };
    let fields = [
        ("opcode", header.opcode as u16, 0x0F),
        ("reserved", header.reserved as u16, 0x07),
        ("response_code", header.response_code, rcode_max),
    ];
    for (field, value, max) in fields {
        if value > max {
            return Err(DnsError::HeaderFieldOutOfRange { field, value, max });
        }
    }
    Ok(())
}

/// The only OPT record on the wire is the one built from `Message::edns`.
fn check_opt_records(message: &Message) -> Result<(), DnsError> {
    let explicit_opt = message
        .answers
        .iter()
        .chain(message.authorities.iter())
        .chain(message.additionals.iter())
        .any(|record| record.record_type() == RecordType::OPT);
    if explicit_opt {
        return Err(DnsError::MisplacedOptRecord);
    }
    Ok(())
}

fn write_preamble(
    writer: &mut DnsWriter<'_>,
    names: &mut NameIndex,
    header: &Header,
    question: &Question,
    sections: &[(Section, Vec<&ResourceRecord>)],
) -> Result<(), DnsError> {
    header.write(writer)?;
    writer.write_u16(1)?;
    for (_, records) in sections.iter() {
        let count =
            u16::try_from(records.len()).map_err(|_| DnsError::SectionTooLarge(records.len()))?;
        writer.write_u16(count)?;
    }
    question.write_compressed(writer, names)
}

/// Cuts the message at `record_start`. `sections` starts with the section that overflowed, of
/// which `written` records made it into the buffer.
fn truncate(
    writer: &mut DnsWriter<'_>,
    record_start: usize,
    sections: &[(Section, Vec<&ResourceRecord>)],
    written: usize,
) -> Result<(), DnsError> {
    writer.set_position(record_start)?;

    let flags = writer.u16_at(FLAGS_OFFSET)?.to_be_bytes();
    let flags = FlagBitfield::from_bytes(flags).with_tc(1).into_bytes();
    writer.patch_u16(FLAGS_OFFSET, u16::from_be_bytes(flags))?;

    for (i, (section, _)) in sections.iter().enumerate() {
        let count = if i == 0 { written as u16 } else { 0 };
        writer.patch_u16(section.count_offset(), count)?;
    }

    Ok(())
}
