use std::convert::TryFrom;
use std::fmt;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::NameIndex;
use crate::rdata::txt::read_text;
use crate::rdata::{RData, RecordData, RecordType};
use crate::util::quote_character_string;

/// Sender policy, laid out exactly like TXT.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spf(pub String);

impl Spf {
    pub fn new(policy: impl Into<String>) -> Self {
        Self(policy.into())
    }

    pub fn policy(&self) -> &str {
        &self.0
    }
}

impl<'a> TryFrom<&mut DnsBuffer<'a>> for Spf {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        Ok(Self(read_text(buffer)?))
    }
}

impl RData for Spf {
    fn record_type(&self) -> RecordType {
        RecordType::SPF
    }

    fn into_record_data(self) -> RecordData {
        RecordData::SPF(self)
    }
}

impl CompressedByteConvertible for Spf {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        _names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        writer.write_character_string(self.0.as_bytes())
    }
}

impl fmt::Display for Spf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&quote_character_string(&self.0))
    }
}
