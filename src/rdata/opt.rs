use std::convert::TryFrom;
use std::fmt;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::byteconvertible::CompressedByteConvertible;
use crate::error::DnsError;
use crate::fqdn::NameIndex;
use crate::rdata::{RData, RecordData, RecordType};
use crate::resource::{RecordClass, ResourceRecord};
use crate::DEFAULT_UDP_PAYLOAD_SIZE;

/// DO bit inside the low 16 bits of the OPT record's TTL.
const DNSSEC_OK_FLAG: u32 = 0x8000;

/// A single EDNS option, an opaque value tagged with its option code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdnsOption {
    pub code: u16,
    pub data: Vec<u8>,
}

impl EdnsOption {
    pub fn new(code: u16, data: impl Into<Vec<u8>>) -> Self {
        Self {
            code,
            data: data.into(),
        }
    }
}

/// Rdata of the OPT pseudo record (RFC 6891): a sequence of options filling the whole rdata.
/// Options keep their order in both directions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opt(pub Vec<EdnsOption>);

impl<'a> TryFrom<&mut DnsBuffer<'a>> for Opt {
    type Error = DnsError;

    fn try_from(buffer: &mut DnsBuffer<'a>) -> Result<Self, Self::Error> {
        let mut options = Vec::new();
        while !buffer.is_empty() {
            let code = buffer.extract_u16()?;
            let len = buffer.extract_u16()?;
            let data = buffer.extract_bytes(len as usize)?;
            options.push(EdnsOption::new(code, data));
        }
        Ok(Self(options))
    }
}

impl RData for Opt {
    fn record_type(&self) -> RecordType {
        RecordType::OPT
    }

    fn into_record_data(self) -> RecordData {
        RecordData::OPT(self)
    }
}

impl CompressedByteConvertible for Opt {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        _names: &mut NameIndex,
    ) -> Result<(), DnsError> {
        for option in self.0.iter() {
            let len = u16::try_from(option.data.len()).map_err(|_| DnsError::OptionDataTooLong {
                code: option.code,
                len: option.data.len(),
            })?;
            writer.write_u16(option.code)?;
            writer.write_u16(len)?;
            writer.write_bytes(&option.data)?;
        }
        Ok(())
    }
}

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, option) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:", option.code)?;
            for byte in option.data.iter() {
                write!(f, "{byte:02x}")?;
            }
        }
        Ok(())
    }
}

/// EDNS metadata of a message. On the wire it travels as an OPT pseudo record in the additional
/// section; in a `Message` it lives beside the sections and the OPT record never shows up in
/// them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edns {
    /// Largest UDP payload the sender can reassemble. Carried in the record's class field.
    pub udp_payload_size: u16,
    pub version: u8,
    /// DNSSEC OK
    pub dnssec_ok: bool,
    pub options: Vec<EdnsOption>,
}

impl Edns {
    pub fn new(udp_payload_size: u16) -> Self {
        Self {
            udp_payload_size,
            version: 0,
            dnssec_ok: false,
            options: Vec::new(),
        }
    }

    /// Builds the OPT pseudo record. The TTL carries the response code bits above the four the
    /// header holds in its top byte, the version below them and the DO flag in bit 15.
    pub(crate) fn to_record(&self, response_code: u16) -> ResourceRecord {
        let extended_rcode = ((response_code >> 4) & 0xFF) as u32;
        let mut ttl = (extended_rcode << 24) | ((self.version as u32) << 16);
        if self.dnssec_ok {
            ttl |= DNSSEC_OK_FLAG;
        }

        ResourceRecord {
            name: String::new(),
            class: RecordClass::from(self.udp_payload_size),
            ttl,
            data: RecordData::OPT(Opt(self.options.clone())),
        }
    }

    /// Inverse of `to_record`, returns the EDNS values and the extended response code bits.
    pub(crate) fn from_record(class: RecordClass, ttl: u32, opt: Opt) -> (Self, u8) {
        let edns = Self {
            udp_payload_size: class.into(),
            version: (ttl >> 16) as u8,
            dnssec_ok: ttl & DNSSEC_OK_FLAG != 0,
            options: opt.0,
        };
        (edns, (ttl >> 24) as u8)
    }
}

impl Default for Edns {
    fn default() -> Self {
        Self::new(DEFAULT_UDP_PAYLOAD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttl_packing() {
        let edns = Edns {
            udp_payload_size: 4096,
            version: 1,
            dnssec_ok: true,
            options: Vec::new(),
        };

        let record = edns.to_record(0x2B3);
        assert_eq!(record.ttl, 0x2B01_8000);
        assert_eq!(u16::from(record.class), 4096);
        assert_eq!(record.name, "");

        let opt = match record.data {
            RecordData::OPT(opt) => opt,
            other => panic!("unexpected rdata {other:?}"),
        };
        let (read, extended_rcode) = Edns::from_record(record.class, record.ttl, opt);
        assert_eq!(read, edns);
        assert_eq!(extended_rcode, 0x2B);
    }

    #[test]
    fn options_keep_their_order() {
        let opt = Opt(vec![
            EdnsOption::new(10, vec![1, 2, 3, 4, 5, 6, 7, 8]),
            EdnsOption::new(8, Vec::new()),
        ]);

        let mut storage = [0u8; 64];
        let mut writer = DnsWriter::new(&mut storage);
        opt.write_compressed(&mut writer, &mut NameIndex::new())
            .unwrap();
        let len = writer.position();

        assert_eq!(&storage[..4], &[0, 10, 0, 8]);
        assert_eq!(&storage[12..len], &[0, 8, 0, 0]);

        let mut buffer = DnsBuffer::from(&storage[..len]);
        assert_eq!(Opt::try_from(&mut buffer).unwrap(), opt);
        assert_eq!(opt.to_string(), "10:0102030405060708 8:");
    }

    #[test]
    fn truncated_option_is_rejected() {
        const BUFFER: &[u8] = &[0, 10, 0, 8, 1, 2];
        let mut buffer = DnsBuffer::from(BUFFER);

        assert!(matches!(
            Opt::try_from(&mut buffer),
            Err(DnsError::LengthViolation { .. })
        ));
    }
}
