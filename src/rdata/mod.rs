mod a;
mod aaaa;
mod cname;
mod mx;
mod naptr;
mod ns;
mod opt;
mod ptr;
mod soa;
mod spf;
mod srv;
mod txt;

pub use self::a::A;
pub use self::aaaa::Aaaa;
pub use self::cname::Cname;
pub use self::mx::Mx;
pub use self::naptr::Naptr;
pub use self::ns::Ns;
pub use self::opt::{Edns, EdnsOption, Opt};
pub use self::ptr::Ptr;
pub use self::soa::Soa;
pub use self::spf::Spf;
pub use self::srv::Srv;
pub use self::txt::Txt;

use std::convert::TryFrom;
use std::fmt;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::NameIndex;
pub use crate::resource::RecordType;

/// Common behaviour of the per type record data structs.
pub trait RData {
    fn record_type(&self) -> RecordType;

    fn into_record_data(self) -> RecordData;
}

/// Payload of a resource record, one variant per record type this codec can lay out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordData {
    A(A),
    AAAA(Aaaa),
    NS(Ns),
    CNAME(Cname),
    PTR(Ptr),
    TXT(Txt),
    SPF(Spf),
    MX(Mx),
    SRV(Srv),
    SOA(Soa),
    OPT(Opt),
    NAPTR(Naptr),
}

impl RecordData {
    /// Reads the rdata of a record of type `record_type`. `buffer` is bounded to the rdata
    /// region but still addresses the whole message.
    pub fn from_buffer(
        record_type: RecordType,
        buffer: &mut DnsBuffer<'_>,
    ) -> Result<Self, DnsError> {
        Ok(match record_type {
            RecordType::A => Self::A(A::try_from(buffer)?),
            RecordType::AAAA => Self::AAAA(Aaaa::try_from(buffer)?),
            RecordType::NS => Self::NS(Ns::try_from(buffer)?),
            RecordType::CNAME => Self::CNAME(Cname::try_from(buffer)?),
            RecordType::PTR => Self::PTR(Ptr::try_from(buffer)?),
            RecordType::TXT => Self::TXT(Txt::try_from(buffer)?),
            RecordType::SPF => Self::SPF(Spf::try_from(buffer)?),
            RecordType::MX => Self::MX(Mx::try_from(buffer)?),
            RecordType::SRV => Self::SRV(Srv::try_from(buffer)?),
            RecordType::SOA => Self::SOA(Soa::try_from(buffer)?),
            RecordType::OPT => Self::OPT(Opt::try_from(buffer)?),
            RecordType::NAPTR => Self::NAPTR(Naptr::try_from(buffer)?),
            other => return Err(DnsError::UnsupportedRecordType(other.into())),
        })
    }
}

impl RData for RecordData {
    fn record_type(&self) -> RecordType {
        match self {
            Self::A(_) => RecordType::A,
            Self::AAAA(_) => RecordType::AAAA,
            Self::NS(_) => RecordType::NS,
            Self::CNAME(_) => RecordType::CNAME,
            Self::PTR(_) => RecordType::PTR,
            Self::TXT(_) => RecordType::TXT,
            Self::SPF(_) => RecordType::SPF,
            Self::MX(_) => RecordType::MX,
            Self::SRV(_) => RecordType::SRV,
            Self::SOA(_) => RecordType::SOA,
            Self::OPT(_) => RecordType::OPT,
            Self::NAPTR(_) => RecordType::NAPTR,
        }
    }

    fn into_record_data(self) -> RecordData {
        self
    }
}

impl CompressedByteConvertible for RecordData {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        match self {
            Self::A(data) => data.write_compressed(writer, names),
            Self::AAAA(data) => data.write_compressed(writer, names),
            Self::NS(data) => data.write_compressed(writer, names),
            Self::CNAME(data) => data.write_compressed(writer, names),
            Self::PTR(data) => data.write_compressed(writer, names),
            Self::TXT(data) => data.write_compressed(writer, names),
            Self::SPF(data) => data.write_compressed(writer, names),
            Self::MX(data) => data.write_compressed(writer, names),
            Self::SRV(data) => data.write_compressed(writer, names),
            Self::SOA(data) => data.write_compressed(writer, names),
            Self::OPT(data) => data.write_compressed(writer, names),
            Self::NAPTR(data) => data.write_compressed(writer, names),
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A(data) => fmt::Display::fmt(data, f),
            Self::AAAA(data) => fmt::Display::fmt(data, f),
            Self::NS(data) => fmt::Display::fmt(data, f),
            Self::CNAME(data) => fmt::Display::fmt(data, f),
            Self::PTR(data) => fmt::Display::fmt(data, f),
            Self::TXT(data) => fmt::Display::fmt(data, f),
            Self::SPF(data) => fmt::Display::fmt(data, f),
            Self::MX(data) => fmt::Display::fmt(data, f),
            Self::SRV(data) => fmt::Display::fmt(data, f),
            Self::SOA(data) => fmt::Display::fmt(data, f),
            Self::OPT(data) => fmt::Display::fmt(data, f),
            Self::NAPTR(data) => fmt::Display::fmt(data, f),
        }
    }
}
