use std::convert::{From, TryFrom};
use std::fmt;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::{pack_name, NameIndex};
use crate::rdata::{RData, RecordData};
use crate::util::presentation_name;

/// Class of a record or question. Codes without a name of their own are kept as `Unknown` so
/// the mapping is total in both directions; the OPT pseudo record reuses the field for its
/// UDP payload size and ends up here as well.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordClass {
    /// Internet
    IN,
    /// CSNET (obsolete)
    CS,
    /// CHAOS
    CH,
    /// Hesiod
    HS,
    NONE,
    ANY,
    Unknown(u16),
}

impl From<u16> for RecordClass {
    fn from(number: u16) -> Self {
        match number {
            1 => Self::IN,
            2 => Self::CS,
            3 => Self::CH,
            4 => Self::HS,
            254 => Self::NONE,
            255 => Self::ANY,
            _ => Self::Unknown(number),
        }
    }
}

impl From<RecordClass> for u16 {
    fn from(class: RecordClass) -> u16 {
        match class {
            RecordClass::IN => 1,
            RecordClass::CS => 2,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::NONE => 254,
            RecordClass::ANY => 255,
            RecordClass::Unknown(number) => number,
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IN => f.write_str("IN"),
            Self::CS => f.write_str("CS"),
            Self::CH => f.write_str("CH"),
            Self::HS => f.write_str("HS"),
            Self::NONE => f.write_str("NONE"),
            Self::ANY => f.write_str("ANY"),
            Self::Unknown(number) => write!(f, "CLASS{number}"),
        }
    }
}

/// Record Type Table. Every u16 maps to a variant; only the types with an rdata layout in
/// `crate::rdata` can be encoded or decoded as records, the others are valid in questions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordType {
    A,     // RFC 1035
    NS,    // RFC 1035
    CNAME, // RFC 1035
    SOA,   // RFC 1035
    PTR,   // RFC 1035
    MX,    // RFC 1035
    TXT,   // RFC 1035
    AAAA,  // RFC 3596
    SRV,   // RFC 2782
    NAPTR, // RFC 3403
    OPT,   // RFC 6891
    SPF,   // RFC 4408
    AXFR,
    ANY,
    Unknown(u16),
}

impl From<u16> for RecordType {
    fn from(number: u16) -> Self {
        match number {
            1 => Self::A,
            2 => Self::NS,
            5 => Self::CNAME,
            6 => Self::SOA,
            12 => Self::PTR,
            15 => Self::MX,
            16 => Self::TXT,
            28 => Self::AAAA,
            33 => Self::SRV,
            35 => Self::NAPTR,
            41 => Self::OPT,
            99 => Self::SPF,
            252 => Self::AXFR,
            255 => Self::ANY,
            _ => Self::Unknown(number),
        }
    }
}

impl From<RecordType> for u16 {
    fn from(record_type: RecordType) -> Self {
        match record_type {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::NAPTR => 35,
            RecordType::OPT => 41,
            RecordType::SPF => 99,
            RecordType::AXFR => 252,
            RecordType::ANY => 255,
            RecordType::Unknown(number) => number,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::NS => "NS",
            Self::CNAME => "CNAME",
            Self::SOA => "SOA",
            Self::PTR => "PTR",
            Self::MX => "MX",
            Self::TXT => "TXT",
            Self::AAAA => "AAAA",
            Self::SRV => "SRV",
            Self::NAPTR => "NAPTR",
            Self::OPT => "OPT",
            Self::SPF => "SPF",
            Self::AXFR => "AXFR",
            Self::ANY => "ANY",
            Self::Unknown(number) => return write!(f, "TYPE{number}"),
        };
        f.write_str(name)
    }
}

/// A resource record of the answer, authority or additional section. The record type is not
/// stored separately; it always follows from the variant of `data`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceRecord {
    /// Owner name in presentation form without the trailing dot.
    pub name: String,
    pub class: RecordClass,
    /// Time to live in seconds.
    pub ttl: u32,
    pub data: RecordData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, class: RecordClass, ttl: u32, data: impl RData) -> Self {
        Self {
            name: name.into(),
            class,
            ttl,
            data: data.into_record_data(),
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}

impl<'a> TryFrom<&mut DnsBuffer<'a>> for ResourceRecord {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        let name = buffer.extract_fqdn()?;
        let record_type = RecordType::from(buffer.extract_u16()?);
        let class = RecordClass::from(buffer.extract_u16()?);
        let ttl = buffer.extract_u32()?;
        let data_len = buffer.extract_u16()? as usize;

        let mut sub_buffer = buffer.sub_buffer(data_len)?;
        let data = RecordData::from_buffer(record_type, &mut sub_buffer)?;

        if !sub_buffer.is_empty() {
            return Err(DnsError::RdataLengthMismatch {
                declared: data_len,
                consumed: sub_buffer.position() - buffer.position(),
            });
        }

        buffer.advance(data_len)?;

        Ok(Self {
            name,
            class,
            ttl,
            data,
        })
    }
}

impl CompressedByteConvertible for ResourceRecord {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        pack_name(&self.name, writer, names)?;
        writer.write_u16(self.record_type().into())?;
        writer.write_u16(self.class.into())?;
        writer.write_u32(self.ttl)?;

        // Placeholder for the rdata length, patched once the rdata is written
        let length_offset = writer.position();
        writer.write_u16(0)?;

        self.data.write_compressed(writer, names)?;

        let data_len = writer.position() - length_offset - 2;
        let data_len = u16::try_from(data_len).map_err(|_| DnsError::RdataTooLong(data_len))?;
        writer.patch_u16(length_offset, data_len)
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            presentation_name(&self.name),
            self.ttl,
            self.class,
            self.record_type(),
            self.data
        )
    }
}
