use std::convert::TryFrom;
use std::fmt;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::{pack_name, NameIndex};
use crate::rdata::{RData, RecordData, RecordType};
use crate::util::presentation_name;

/// Location of a service, see RFC 2782.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Srv {
    /// Targets with the lowest priority are contacted first.
    pub priority: u16,

    /// Relative weight among targets of the same priority.
    pub weight: u16,

    pub port: u16,

    /// Host providing the service. Never compressed by RFC 2782 senders, but compressed names
    /// are accepted on read and this codec compresses it like every other name.
    pub target: String,
}

impl Srv {
    pub fn new(priority: u16, weight: u16, port: u16, target: impl Into<String>) -> Self {
        Self {
            priority,
            weight,
            port,
            target: target.into(),
        }
    }
}

impl<'a> TryFrom<&mut DnsBuffer<'a>> for Srv {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        Ok(Self {
            priority: buffer.extract_u16()?,
            weight: buffer.extract_u16()?,
            port: buffer.extract_u16()?,
            target: buffer.extract_fqdn()?,
        })
    }
}

impl RData for Srv {
    fn record_type(&self) -> RecordType {
        RecordType::SRV
    }

    fn into_record_data(self) -> RecordData {
        RecordData::SRV(self)
    }
}

impl CompressedByteConvertible for Srv {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        writer.write_u16(self.priority)?;
        writer.write_u16(self.weight)?;
        writer.write_u16(self.port)?;
        pack_name(&self.target, writer, names)
    }
}

impl fmt::Display for Srv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.priority,
            self.weight,
            self.port,
            presentation_name(&self.target)
        )
    }
}
