use crate::buffer::DnsWriter;
use crate::error::DnsError;
use crate::fqdn::NameIndex;

/// Trait to serialize parts of DNS messages with name compression.
///
/// `names` maps every name suffix written so far in the current message to the offset where it
/// starts, so later occurrences can be replaced by a compression pointer. A write that runs out
/// of capacity returns `DnsError::BufferOverflow`; the caller decides how to recover.
pub trait CompressedByteConvertible {
    fn write_compressed(
        &self,
        writer: &mut DnsWriter<'_>,
        names: &mut NameIndex,
    ) -> Result<(), DnsError>;
}
