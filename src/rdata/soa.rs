use std::convert::TryFrom;
use std::fmt;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::{pack_name, NameIndex};
use crate::rdata::{RData, RecordData, RecordType};
use crate::util::presentation_name;

/// Start of authority of a zone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Soa {
    /// Name server that was the original or primary source of data for this zone.
    pub primary: String,

    /// Mailbox of the person responsible for this zone, encoded as a domain name.
    pub admin: String,

    /// Version number of the original copy of the zone. Wraps around.
    pub serial: u32,

    /// Seconds before the zone should be refreshed.
    pub refresh: u32,

    /// Seconds before a failed refresh should be retried.
    pub retry: u32,

    /// Seconds after which the zone is no longer authoritative.
    pub expiration: u32,

    /// Minimum TTL for records of this zone, also the negative caching TTL.
    pub minimum: u32,
}

impl<'a> TryFrom<&mut DnsBuffer<'a>> for Soa {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        Ok(Self {
            primary: buffer.extract_fqdn()?,
            admin: buffer.extract_fqdn()?,
            serial: buffer.extract_u32()?,
            refresh: buffer.extract_u32()?,
            retry: buffer.extract_u32()?,
            expiration: buffer.extract_u32()?,
            minimum: buffer.extract_u32()?,
        })
    }
}

impl RData for Soa {
    fn record_type(&self) -> RecordType {
        RecordType::SOA
    }

    fn into_record_data(self) -> RecordData {
        RecordData::SOA(self)
    }
}

impl CompressedByteConvertible for Soa {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        pack_name(&self.primary, writer, names)?;
        pack_name(&self.admin, writer, names)?;
        for value in [
            self.serial,
            self.refresh,
            self.retry,
            self.expiration,
            self.minimum,
        ] {
            writer.write_u32(value)?;
        }
        Ok(())
    }
}

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            presentation_name(&self.primary),
            presentation_name(&self.admin),
            self.serial,
            self.refresh,
            self.retry,
            self.expiration,
            self.minimum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_compresses_against_primary() {
        let soa = Soa {
            primary: String::from("ns1.example.com"),
            admin: String::from("hostmaster.example.com"),
            serial: 2024010101,
            refresh: 7200,
            retry: 3600,
            expiration: 1209600,
            minimum: 300,
        };

        let mut storage = [0u8; 128];
        let mut writer = DnsWriter::new(&mut storage);
        soa.write_compressed(&mut writer, &mut NameIndex::new())
            .unwrap();
        let len = writer.position();

        // ns1.example.com is 17 bytes, hostmaster label plus pointer 13, five u32 fields 20
        assert_eq!(len, 17 + 13 + 20);
        assert_eq!(&storage[28..30], &[0xC0, 4]);

        let mut buffer = DnsBuffer::from(&storage[..len]);
        assert_eq!(Soa::try_from(&mut buffer).unwrap(), soa);
        assert_eq!(
            soa.to_string(),
            "ns1.example.com. hostmaster.example.com. 2024010101 7200 3600 1209600 300"
        );
    }
}
