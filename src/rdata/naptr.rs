use std::convert::TryFrom;
use std::fmt;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::NameIndex;
use crate::rdata::{RData, RecordData, RecordType};
use crate::util::quote_character_string;

/// Naming authority pointer, a rewrite rule used by dynamic delegation discovery (RFC 3403).
///
/// All four text fields are carried as length prefixed <character-string>s of at most 255 bytes,
/// `replacement` included; it is not written as a domain name and never compressed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Naptr {
    /// Rules with lower order are processed first; once one matches, higher orders are ignored.
    pub order: u16,

    /// Tie breaker between rules of the same order.
    pub preference: u16,

    /// Single character flags from `[A-Z0-9]` controlling the rewrite.
    pub flags: String,

    /// Service and protocol available down this rewrite path.
    pub service: String,

    /// Substitution expression applied to the client's string.
    pub regexp: String,

    /// Next name to query when `regexp` is empty.
    pub replacement: String,
}

impl<'a> TryFrom<&mut DnsBuffer<'a>> for Naptr {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        Ok(Self {
            order: buffer.extract_u16()?,
            preference: buffer.extract_u16()?,
            flags: buffer.extract_string()?,
            service: buffer.extract_string()?,
            regexp: buffer.extract_string()?,
            replacement: buffer.extract_string()?,
        })
    }
}

impl RData for Naptr {
    fn record_type(&self) -> RecordType {
        RecordType::NAPTR
    }

    fn into_record_data(self) -> RecordData {
        RecordData::NAPTR(self)
    }
}

impl CompressedByteConvertible for Naptr {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        _names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        writer.write_u16(self.order)?;
        writer.write_u16(self.preference)?;
        for field in [&self.flags, &self.service, &self.regexp, &self.replacement] {
            writer.write_character_string(field.as_bytes())?;
        }
        Ok(())
    }
}

impl fmt::Display for Naptr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.order,
            self.preference,
            quote_character_string(&self.flags),
            quote_character_string(&self.service),
            quote_character_string(&self.regexp),
            quote_character_string(&self.replacement)
        )
    }
}
