use std::collections::HashMap;

use crate::buffer::{DnsBuffer, DnsWriter};
use crate::error::DnsError;
use crate::{COMPRESSION_MASK, COMPRESSION_MASK_U16};

/// Maximum number of bytes in a single label.
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum number of bytes of an encoded domain name, length bytes and root label included.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum number of compression pointers followed while reading a single name.
pub const MAX_POINTER_HOPS: usize = 127;

/// Offsets of every name suffix written during one encode call. Scoped to that call.
pub type NameIndex = HashMap<String, usize>;

/// Checks a domain name in presentation form and returns it without its trailing dot.
/// The empty string and a single dot both stand for the root.
fn normalize(name: &str) -> Result<&str, DnsError> {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() {
        return Ok(name);
    }

    let mut encoded_len = 1;
    for label in name.split('.') {
        if label.is_empty() {
            return Err(DnsError::EmptyLabel(name.to_owned()));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DnsError::LabelTooLong(label.to_owned()));
        }
        encoded_len += label.len() + 1;
    }

    if encoded_len > MAX_NAME_LEN {
        return Err(DnsError::NameTooLong(name.to_owned()));
    }

    Ok(name)
}

/// Writes `name` as a sequence of length prefixed labels. As soon as the remaining suffix was
/// already written in this message a compression pointer to it ends the name instead.
pub fn pack_name(
    name: &str,
    writer: &mut DnsWriter<'_>,
    names: &mut NameIndex,
) -> Result<(), DnsError> {
    let mut remaining = normalize(name)?;

    while !remaining.is_empty() {
        if let Some(&offset) = names.get(remaining) {
            // Offsets past 14 bits wrap; pointers can only address the first 16K of a message.
            return writer.write_u16(COMPRESSION_MASK_U16 | (offset as u16 & !COMPRESSION_MASK_U16));
        }

        names.insert(remaining.to_owned(), writer.position());

        let (label, rest) = remaining.split_once('.').unwrap_or((remaining, ""));
        writer.write_u8(label.len() as u8)?;
        writer.write_bytes(label.as_bytes())?;
        remaining = rest;
    }

    writer.write_u8(0)
}

/// Reads a possibly compressed domain name and leaves the buffer right behind it.
///
/// The first pointer fixes the resume position; pointers must target an offset before
/// themselves and at most `MAX_POINTER_HOPS` are followed.
pub fn unpack_name(buffer: &mut DnsBuffer<'_>) -> Result<String, DnsError> {
    let start = buffer.position();
    let mut labels = Vec::<String>::new();
    let mut resume = None;
    let mut hops = 0;
    let mut encoded_len = 1;

    loop {
        let at = buffer.position();
        let len = buffer.extract_u8()?;

        if len & COMPRESSION_MASK == COMPRESSION_MASK {
            let target = (((len & !COMPRESSION_MASK) as usize) << 8) | buffer.extract_u8()? as usize;
            if target >= at {
                return Err(DnsError::InvalidCompressionPointer { at, target });
            }

            hops += 1;
            if hops > MAX_POINTER_HOPS {
                return Err(DnsError::CompressionLoop(start));
            }

            resume.get_or_insert(buffer.position());
            buffer.set_position(target)?;
            continue;
        }

        if len & COMPRESSION_MASK != 0 {
            return Err(DnsError::UnsupportedLabelType(len));
        }

        if len == 0 {
            break;
        }

        let label = buffer.extract_bytes(len as usize)?;
        encoded_len += label.len() + 1;
        if encoded_len > MAX_NAME_LEN {
            return Err(DnsError::NameTooLong(labels.join(".")));
        }
        labels.push(String::from_utf8_lossy(label).into_owned());
    }

    if let Some(resume) = resume {
        buffer.set_position(resume)?;
    }

    Ok(labels.join("."))
}
