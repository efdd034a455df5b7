use std::convert::TryFrom;
use std::fmt;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::{pack_name, NameIndex};
use crate::rdata::{RData, RecordData, RecordType};
use crate::util::presentation_name;

/// Mail exchange for the owner name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mx {
    /// Lower values are preferred.
    pub priority: u16,

    /// Host willing to act as a mail exchange.
    pub exchange: String,
}

impl Mx {
    pub fn new(priority: u16, exchange: impl Into<String>) -> Self {
        Self {
            priority,
            exchange: exchange.into(),
        }
    }
}

impl<'a> TryFrom<&mut DnsBuffer<'a>> for Mx {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        Ok(Self {
            priority: buffer.extract_u16()?,
            exchange: buffer.extract_fqdn()?,
        })
    }
}

impl RData for Mx {
    fn record_type(&self) -> RecordType {
        RecordType::MX
    }

    fn into_record_data(self) -> RecordData {
        RecordData::MX(self)
    }
}

impl CompressedByteConvertible for Mx {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        writer.write_u16(self.priority)?;
        pack_name(&self.exchange, writer, names)
    }
}

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.priority, presentation_name(&self.exchange))
    }
}
