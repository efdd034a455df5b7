use std::convert::{From, TryFrom};
use std::fmt;
use std::net::Ipv4Addr;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::NameIndex;
use crate::rdata::{RData, RecordData, RecordType};

/// A single IPv4 host address, four bytes on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct A(pub Ipv4Addr);

impl A {
    pub fn new(addr: Ipv4Addr) -> Self {
        Self(addr)
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.0
    }
}

impl<'a> TryFrom<&mut DnsBuffer<'a>> for A {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        Ok(Self(Ipv4Addr::from(buffer.extract_u32()?)))
    }
}

impl RData for A {
    fn record_type(&self) -> RecordType {
        RecordType::A
    }

    fn into_record_data(self) -> RecordData {
        RecordData::A(self)
    }
}

impl CompressedByteConvertible for A {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        _names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        writer.write_bytes(&self.0.octets())
    }
}

impl From<Ipv4Addr> for A {
    fn from(value: Ipv4Addr) -> Self {
        Self(value)
    }
}

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
