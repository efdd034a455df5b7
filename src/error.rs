use thiserror::Error;

/// Enum collection of errors raised while encoding or decoding DNS messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DnsError {
    /// A message needs exactly one question to be written.
    #[error("message requires a question")]
    MissingQuestion,

    /// A domain name contains an empty label between two dots.
    #[error("domain name `{0}` contains an empty label")]
    EmptyLabel(String),

    /// A label is longer than the 63 bytes a length byte can express.
    #[error("label `{0}` exceeds 63 bytes")]
    LabelTooLong(String),

    /// The encoded form of a domain name exceeds 255 bytes.
    #[error("domain name `{0}` exceeds 255 bytes")]
    NameTooLong(String),

    /// A character-string is longer than its single length byte can express.
    #[error("character string of {0} bytes exceeds 255 bytes")]
    CharacterStringTooLong(usize),

    /// An EDNS option carries more data than its 16 bit length field can express.
    #[error("EDNS option {code} carries {len} bytes")]
    OptionDataTooLong { code: u16, len: usize },

    /// Record data grew beyond the 16 bit rdata length field.
    #[error("record data of {0} bytes exceeds 65535 bytes")]
    RdataTooLong(usize),

    /// A section holds more records than its 16 bit count field can express.
    #[error("section holds {0} records")]
    SectionTooLarge(usize),

    /// The destination cannot even hold the header and the question, so no truncated message
    /// can be produced.
    #[error("capacity of {0} bytes cannot hold the header and question")]
    InsufficientCapacity(usize),

    /// A write would run past the end of the destination buffer.
    #[error("write of {len} bytes at offset {offset} exceeds capacity of {capacity} bytes")]
    BufferOverflow {
        offset: usize,
        len: usize,
        capacity: usize,
    },

    /// A read would run past the end of the message or of the current rdata region.
    #[error("read of {len} bytes at offset {offset} runs past the end at {end}")]
    LengthViolation { offset: usize, len: usize, end: usize },

    /// Pointer used in DNS compression does not point backwards into the message.
    #[error("compression pointer at offset {at} targets offset {target}")]
    InvalidCompressionPointer { at: usize, target: usize },

    /// Following compression pointers did not terminate within the hop limit.
    #[error("compression pointers at offset {0} exceed the hop limit")]
    CompressionLoop(usize),

    /// A label length byte uses one of the reserved label types.
    #[error("unsupported label type {0:#04x}")]
    UnsupportedLabelType(u8),

    /// The u16 does not map to a record type this codec can lay out.
    #[error("unsupported record type {0}")]
    UnsupportedRecordType(u16),

    /// Only messages with exactly one question are handled.
    #[error("message declares {0} questions")]
    UnsupportedQuestionCount(u16),

    /// A header field holds a value wider than its bits on the wire.
    #[error("header field {field} value {value:#x} exceeds {max:#x}")]
    HeaderFieldOutOfRange {
        field: &'static str,
        value: u16,
        max: u16,
    },

    /// An OPT pseudo record was found outside the additional section on decode, or in any
    /// record list on encode, where `Message::edns` is the only way to send one.
    #[error("OPT record outside the additional section")]
    MisplacedOptRecord,

    /// A message may carry a single OPT pseudo record only.
    #[error("message carries more than one OPT record")]
    MultipleOptRecords,

    /// The record data reader did not consume exactly the declared rdata length.
    #[error("record data declares {declared} bytes but {consumed} were read")]
    RdataLengthMismatch { declared: usize, consumed: usize },
}

impl DnsError {
    /// Returns true for the capacity family, the only one the encoder recovers from.
    pub fn is_overflow(&self) -> bool {
        matches!(self, DnsError::BufferOverflow { .. })
    }
}
