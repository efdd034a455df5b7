use std::convert::TryFrom;
use std::fmt;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::NameIndex;
use crate::rdata::{RData, RecordData, RecordType};
use crate::util::quote_character_string;

/// Descriptive text. The value is written as one <character-string>, so it is limited to 255
/// bytes; on read every <character-string> of the rdata is concatenated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Txt(pub String);

impl Txt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

pub(super) fn read_text(buffer: &mut DnsBuffer<'_>) -> Result<String, DnsError> {
    let mut text = String::new();
    while !buffer.is_empty() {
        text.push_str(&buffer.extract_string()?);
    }
    Ok(text)
}

impl<'a> TryFrom<&mut DnsBuffer<'a>> for Txt {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        Ok(Self(read_text(buffer)?))
    }
}

impl RData for Txt {
    fn record_type(&self) -> RecordType {
        RecordType::TXT
    }

    fn into_record_data(self) -> RecordData {
        RecordData::TXT(self)
    }
}

impl CompressedByteConvertible for Txt {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        _names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        writer.write_character_string(self.0.as_bytes())
    }
}

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote_character_string(&self.0))
    }
}
