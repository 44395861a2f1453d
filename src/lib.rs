//! `nanoparse` decodes and encodes the wire format of a Nano node's JSON-RPC
//! interface: `xrb_` account addresses, ledger blocks, and the small scalar
//! responses a light wallet needs.
//!
//! # Convert between public keys and addresses
//! ```
//! use nanoparse::address;
//! let address = "xrb_3tw77cfpwfnkqrjb988sh91tzerwu5dfnzxy8b3u76r7a7xwnkawm37ctcsb";
//! let public_key = address::decode(address).unwrap();
//! assert_eq!(address::encode(&public_key), address);
//! ```
//!
//! # Read node responses
//! ```
//! let response = r#"{"frontiers": {"xrb_3tw77cfpwfnkqrjb988sh91tzerwu5dfnzxy8b3u76r7a7xwnkawm37ctcsb": "33832030C4F99FD37C8CD8399911D47150FCB90AE3A791970DBC8D05DFF93B8B"}}"#;
//! let frontier = nanoparse::scalar::account_frontier(response).unwrap();
//! assert_eq!(
//!     hex::encode_upper(frontier),
//!     "33832030C4F99FD37C8CD8399911D47150FCB90AE3A791970DBC8D05DFF93B8B"
//! );
//!
//! let work = nanoparse::scalar::work(r#"{"work": "bf0dc663d15668b6"}"#).unwrap();
//! assert_eq!(work, 0xbf0d_c663_d156_68b6);
//! ```
//!
//! # Decode a block and submit it again
//!
//! Whatever its variant, a block is submitted in the `state` shape.
//! ```
//! use nanoparse::block::BlockType;
//! let response = r#"{"contents": "{\n    \"type\": \"receive\",\n    \"previous\": \"33832030C4F99FD37C8CD8399911D47150FCB90AE3A791970DBC8D05DFF93B8B\",\n    \"source\": \"E89208DD038FBB269987689621D52292AE9C35941A7484756ECCED92A65093BA\",\n    \"work\": \"62f05417dd3fb691\"\n}\n"}"#;
//! let block = nanoparse::block::decode(response).unwrap();
//! assert_eq!(block.block_type(), BlockType::Receive);
//!
//! let request = nanoparse::process::encode(&block, 1024).unwrap();
//! assert!(request.contains(r#"\"link\":\"E89208DD038FBB269987689621D52292AE9C35941A7484756ECCED92A65093BA\""#));
//! assert!(matches!(
//!     nanoparse::process::encode(&block, 64),
//!     Err(nanoparse::Error::InsufficientBuffer { capacity: 64, .. })
//! ));
//! ```

pub mod address;
pub mod block;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod fields;
pub mod process;
pub mod request;
pub mod scalar;
#[cfg(test)]
mod xoshiro;

pub use self::block::Block;
pub use self::client::{Client, Transport};
pub use self::config::ClientConfig;
pub use self::error::{Error, ParseError};

/// 256-bit account identity.
pub type PublicKey = [u8; 32];
/// 256-bit block hash.
pub type Hash256 = [u8; 32];
pub type Signature = [u8; 64];
/// Proof-of-work nonce.
pub type Work = u64;
/// Amount in raw units.
pub type Balance = primitive_types::U128;
