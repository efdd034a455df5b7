use std::convert::TryFrom;
use std::fmt;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::{pack_name, NameIndex};
use crate::resource::{RecordClass, RecordType};
use crate::util::presentation_name;

/// Describes a question to a name server. Types and classes that only make sense in a question,
/// like `ANY` or `AXFR`, are valid here.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// A domain name of the requested resource.
    pub name: String,
    /// Type of the record data of the expected response.
    pub qtype: RecordType,
    /// Class of the record of the expected response.
    pub qclass: RecordClass,
}

impl Question {
    /// Create a new `Question` instance with a given domain name, type and class.
    pub fn new(name: impl Into<String>, qtype: RecordType, qclass: RecordClass) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass,
        }
    }
}

impl<'a> TryFrom<&mut DnsBuffer<'a>> for Question {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        Ok(Self {
            name: buffer.extract_fqdn()?,
            qtype: RecordType::from(buffer.extract_u16()?),
            qclass: RecordClass::from(buffer.extract_u16()?),
        })
    }
}

impl CompressedByteConvertible for Question {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        pack_name(&self.name, writer, names)?;
        writer.write_u16(self.qtype.into())?;
        writer.write_u16(self.qclass.into())
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            presentation_name(&self.name),
            self.qclass,
            self.qtype
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_and_read() {
        let question = Question::new("example.com", RecordType::AAAA, RecordClass::IN);

        let mut storage = [0u8; 64];
        let mut writer = DnsWriter::new(&mut storage);
        question
            .write_compressed(&mut writer, &mut NameIndex::new())
            .unwrap();
        let len = writer.position();

        assert_eq!(len, 17);
        assert_eq!(&storage[13..17], &[0, 28, 0, 1]);

        let mut buffer = DnsBuffer::from(&storage[..len]);
        assert_eq!(Question::try_from(&mut buffer).unwrap(), question);
        assert_eq!(question.to_string(), "example.com.\tIN\tAAAA");
    }

    #[test]
    fn question_only_type() {
        const BUFFER: &[u8] = &[0, 0, 255, 0, 255];
        let mut buffer = DnsBuffer::from(BUFFER);

        assert_eq!(
            Question::try_from(&mut buffer).unwrap(),
            Question::new("", RecordType::ANY, RecordClass::ANY)
        );
    }
}
