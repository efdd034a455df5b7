use std::convert::TryFrom;
use std::fmt;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::{pack_name, NameIndex};
use crate::rdata::{RData, RecordData, RecordType};
use crate::util::presentation_name;

/// An authoritative name server for the owner name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ns(pub String);

impl Ns {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<'a> TryFrom<&mut DnsBuffer<'a>> for Ns {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        Ok(Self(buffer.extract_fqdn()?))
    }
}

impl RData for Ns {
    fn record_type(&self) -> RecordType {
        RecordType::NS
    }

    fn into_record_data(self) -> RecordData {
        RecordData::NS(self)
    }
}

impl CompressedByteConvertible for Ns {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        pack_name(&self.0, writer, names)
    }
}

impl fmt::Display for Ns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&presentation_name(&self.0))
    }
}
