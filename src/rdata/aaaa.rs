use std::convert::{From, TryFrom};
use std::fmt;
use std::net::Ipv6Addr;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::NameIndex;
use crate::rdata::{RData, RecordData, RecordType};
use crate::util::expanded_ipv6;

/// A single IPv6 host address stored as eight big endian 16 bit groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aaaa(pub Ipv6Addr);

impl Aaaa {
    pub fn new(addr: Ipv6Addr) -> Self {
        Self(addr)
    }

    pub fn addr(&self) -> Ipv6Addr {
        self.0
    }
}

impl<'a> TryFrom<&mut DnsBuffer<'a>> for Aaaa {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        let mut segments = [0u16; 8];
        for segment in segments.iter_mut() {
            *segment = buffer.extract_u16()?;
        }
        Ok(Self(Ipv6Addr::from(segments)))
    }
}

impl RData for Aaaa {
    fn record_type(&self) -> RecordType {
        RecordType::AAAA
    }

    fn into_record_data(self) -> RecordData {
        RecordData::AAAA(self)
    }
}

impl CompressedByteConvertible for Aaaa {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        _names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        self.0
            .segments()
            .iter()
            .try_for_each(|segment| writer.write_u16(*segment))
    }
}

impl From<Ipv6Addr> for Aaaa {
    fn from(value: Ipv6Addr) -> Self {
        Self(value)
    }
}

/// Presentation form keeps every group, `::` is never used.
impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&expanded_ipv6(&self.0))
    }
}
