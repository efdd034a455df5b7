use std::convert::From;

use crate::error::DnsError;
use crate::fqdn::unpack_name;

/// Helper struct used for creation of DNS messages and its parts from binary data.
/// A pointer called pos marks the current reading position. Positions are always absolute
/// offsets into the message, also for sub buffers, so compression pointers found inside record
/// data resolve against the full message.
#[derive(Clone, Debug)]
pub struct DnsBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> DnsBuffer<'a> {
    /// Creates a view on the next `len` bytes. The view keeps every byte before the current
    /// position so names inside it can follow pointers backwards, but it ends after `len` bytes.
    pub fn sub_buffer(&self, len: usize) -> Result<DnsBuffer<'a>, DnsError> {
        self.check_bounds(len)?;
        Ok(Self {
            data: &self.data[..self.pos + len],
            pos: self.pos,
        })
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn set_position(&mut self, pos: usize) -> Result<(), DnsError> {
        if pos > self.data.len() {
            return Err(DnsError::LengthViolation {
                offset: pos,
                len: 0,
                end: self.data.len(),
            });
        }
        self.pos = pos;
        Ok(())
    }

    pub fn advance(&mut self, len: usize) -> Result<(), DnsError> {
        self.check_bounds(len)?;
        self.pos += len;
        Ok(())
    }

    pub fn extract_bytes(&mut self, len: usize) -> Result<&'a [u8], DnsError> {
        self.check_bounds(len)?;
        let data = self.data;
        self.pos += len;
        Ok(&data[self.pos - len..self.pos])
    }

    pub fn extract_u8(&mut self) -> Result<u8, DnsError> {
        Ok(self.extract_bytes(1)?[0])
    }

    pub fn extract_u16(&mut self) -> Result<u16, DnsError> {
        let bytes = self.extract_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn extract_u32(&mut self) -> Result<u32, DnsError> {
        let bytes = self.extract_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads a single length prefixed <character-string>.
    pub fn extract_character_string(&mut self) -> Result<&'a [u8], DnsError> {
        let len = self.extract_u8()? as usize;
        self.extract_bytes(len)
    }

    pub fn extract_string(&mut self) -> Result<String, DnsError> {
        Ok(String::from_utf8_lossy(self.extract_character_string()?).into_owned())
    }

    pub fn extract_fqdn(&mut self) -> Result<String, DnsError> {
        unpack_name(self)
    }

    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    fn check_bounds(&self, len: usize) -> Result<(), DnsError> {
        if self.pos + len > self.data.len() {
            return Err(DnsError::LengthViolation {
                offset: self.pos,
                len,
                end: self.data.len(),
            });
        }
        Ok(())
    }
}

impl<'a> From<&'a [u8]> for DnsBuffer<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self {
            data: value,
            pos: 0,
        }
    }
}

/// Write side counterpart of `DnsBuffer`. The length of the wrapped slice is the capacity of the
/// message; every write that would cross it fails with `DnsError::BufferOverflow` and leaves
/// the position untouched.
#[derive(Debug)]
pub struct DnsWriter<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> DnsWriter<'a> {
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn set_position(&mut self, pos: usize) -> Result<(), DnsError> {
        if pos > self.data.len() {
            return Err(self.overflow_at(pos, 0));
        }
        self.pos = pos;
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), DnsError> {
        if self.pos + bytes.len() > self.data.len() {
            return Err(self.overflow_at(self.pos, bytes.len()));
        }
        self.data[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), DnsError> {
        self.write_bytes(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), DnsError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), DnsError> {
        self.write_bytes(&value.to_be_bytes())
    }

    /// Writes a single length prefixed <character-string>.
    pub fn write_character_string(&mut self, bytes: &[u8]) -> Result<(), DnsError> {
        let len =
            u8::try_from(bytes.len()).map_err(|_| DnsError::CharacterStringTooLong(bytes.len()))?;
        self.write_u8(len)?;
        self.write_bytes(bytes)
    }

    /// Reads back a big endian u16 that was written earlier.
    pub fn u16_at(&self, offset: usize) -> Result<u16, DnsError> {
        if offset + 2 > self.pos {
            return Err(DnsError::LengthViolation {
                offset,
                len: 2,
                end: self.pos,
            });
        }
        Ok(u16::from_be_bytes([self.data[offset], self.data[offset + 1]]))
    }

    /// Overwrites a big endian u16 that was written earlier without moving the position.
    pub fn patch_u16(&mut self, offset: usize, value: u16) -> Result<(), DnsError> {
        if offset + 2 > self.pos {
            return Err(DnsError::LengthViolation {
                offset,
                len: 2,
                end: self.pos,
            });
        }
        self.data[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.pos]
    }

    fn overflow_at(&self, offset: usize, len: usize) -> DnsError {
        DnsError::BufferOverflow {
            offset,
            len,
            capacity: self.data.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DnsBuffer, DnsWriter};
    use crate::error::DnsError;

    const ARR: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

    #[test]
    fn slice_range() {
        let mut buffer = DnsBuffer::from(&ARR[..]);

        buffer.advance(2).unwrap();
        assert_eq!(buffer.extract_bytes(3).unwrap(), &ARR[2..5]);
        assert_eq!(buffer.extract_u16().unwrap(), 0x0607);
        assert_eq!(buffer.remaining(), 3);
        assert!(buffer.extract_u32().is_err());
    }

    #[test]
    fn read_past_end() {
        let mut buffer = DnsBuffer::from(&ARR[..]);
        buffer.set_position(8).unwrap();

        assert_eq!(
            buffer.extract_u32(),
            Err(DnsError::LengthViolation {
                offset: 8,
                len: 4,
                end: 10
            })
        );
        assert_eq!(buffer.position(), 8);
    }

    #[test]
    fn sub_buffer_keeps_absolute_positions() {
        let mut buffer = DnsBuffer::from(&ARR[..]);
        buffer.advance(4).unwrap();

        let mut sub = buffer.sub_buffer(2).unwrap();
        assert_eq!(sub.position(), 4);
        assert_eq!(sub.extract_u16().unwrap(), 0x0506);
        assert!(sub.is_empty());
        assert!(sub.extract_u8().is_err());

        // Earlier bytes stay reachable for compression pointers
        sub.set_position(0).unwrap();
        assert_eq!(sub.extract_u8().unwrap(), 1);

        assert!(buffer.sub_buffer(7).is_err());
    }

    #[test]
    fn writer_overflow_keeps_position() {
        let mut storage = [0u8; 5];
        let mut writer = DnsWriter::new(&mut storage);

        writer.write_u32(0xdead_beef).unwrap();
        let err = writer.write_u16(1).unwrap_err();

        assert!(err.is_overflow());
        assert_eq!(writer.position(), 4);
        writer.write_u8(7).unwrap();
        assert_eq!(writer.as_slice(), &[0xde, 0xad, 0xbe, 0xef, 7]);
    }

    #[test]
    fn writer_patch_and_read_back() {
        let mut storage = [0u8; 8];
        let mut writer = DnsWriter::new(&mut storage);

        writer.write_u16(0).unwrap();
        writer.write_bytes(b"abc").unwrap();
        writer.patch_u16(0, 3).unwrap();

        assert_eq!(writer.u16_at(0).unwrap(), 3);
        assert_eq!(writer.position(), 5);
        assert!(writer.patch_u16(4, 1).is_err());
    }

    #[test]
    fn character_string_limit() {
        let mut storage = [0u8; 300];
        let mut writer = DnsWriter::new(&mut storage);

        assert_eq!(
            writer.write_character_string(&[b'x'; 256]),
            Err(DnsError::CharacterStringTooLong(256))
        );
        writer.write_character_string(&[b'x'; 255]).unwrap();
        assert_eq!(writer.position(), 256);
    }
}
