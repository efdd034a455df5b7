use std::convert::TryFrom;
use std::fmt;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::{pack_name, NameIndex};
use crate::rdata::{RData, RecordData, RecordType};
use crate::util::presentation_name;

/// The canonical name the owner name is an alias of. Answers for other types at the owner
/// name are to be looked up at this target instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cname(pub String);

impl Cname {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl<'a> TryFrom<&mut DnsBuffer<'a>> for Cname {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        Ok(Self(buffer.extract_fqdn()?))
    }
}

impl RData for Cname {
    fn record_type(&self) -> RecordType {
        RecordType::CNAME
    }

    fn into_record_data(self) -> RecordData {
        RecordData::CNAME(self)
    }
}

impl CompressedByteConvertible for Cname {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        pack_name(&self.0, writer, names)
    }
}

impl fmt::Display for Cname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&presentation_name(&self.0))
    }
}
