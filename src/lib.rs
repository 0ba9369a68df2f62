//! Unpadded RFC 4648 base32.
//!
//! ```
//! use console_base32::{decode, encode};
//!
//! let encoded = encode(b"foobar");
//! assert_eq!(encoded, "MZXW6YTBOI");
//! assert_eq!(decode(&encoded).unwrap(), b"foobar");
//! ```

mod base32;
pub mod config;
pub mod digest;
mod error;

pub use base32::{ALPHABET, decode, decoded_len, encode, encoded_len, try_decode, try_encode};
pub use error::Base32Error;
