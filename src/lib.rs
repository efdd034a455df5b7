//! Encoder and decoder for the DNS wire format.
//!
//! ```
//! use dnscodec::{decode, Message, Question, RecordClass, RecordType};
//!
//! let query = Message::new_query(
//!     0x1234,
//!     Question::new("example.com", RecordType::A, RecordClass::IN),
//! );
//!
//! let mut buffer = [0u8; 512];
//! let len = dnscodec::encode(&query, &mut buffer).unwrap();
//! assert_eq!(decode(&buffer[..len]).unwrap(), query);
//! ```

pub mod buffer;
pub mod byteconvertible;
pub mod error;
pub mod fqdn;
pub mod header;
pub mod message;
pub mod question;
pub mod rdata;
pub mod resource;
pub mod util;

mod decoder;
mod encoder;

pub use decoder::decode;
pub use encoder::encode;
pub use error::DnsError;
pub use fqdn::{NameIndex, MAX_LABEL_LEN, MAX_NAME_LEN, MAX_POINTER_HOPS};
pub use header::Header;
pub use message::Message;
pub use question::Question;
pub use rdata::{
    Aaaa, Cname, Edns, EdnsOption, Mx, Naptr, Ns, Opt, Ptr, RData, RecordData, Soa, Spf, Srv,
    Txt, A,
};
pub use resource::{RecordClass, RecordType, ResourceRecord};

/// Largest message the 16 bit length of DNS over TCP can frame.
pub const MAX_MESSAGE_SIZE: usize = 65_535;

/// UDP payload size every resolver has to accept, used when EDNS does not announce another.
pub const DEFAULT_UDP_PAYLOAD_SIZE: u16 = 512;

pub(crate) const COMPRESSION_MASK: u8 = 0b1100_0000;
pub(crate) const COMPRESSION_MASK_U16: u16 = 0b1100_0000_0000_0000;
