//! Text codecs for the individual values carried in RPC payloads.

use crate::constants::{HASH_HEX_LEN, SIGNATURE_HEX_LEN, WORK_HEX_LEN};
use crate::error::{ParseError, Result};
use crate::{Balance, Hash256, PublicKey, Signature, Work};

/// Numeric base of a balance string. Legacy `send` blocks carry hex,
/// everything else decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hex,
}

impl Radix {
    fn accepts(self, digit: u8) -> bool {
        match self {
            Self::Decimal => digit.is_ascii_digit(),
            Self::Hex => digit.is_ascii_hexdigit(),
        }
    }
}

/// Decodes a 64-character hex hash.
///
/// # Errors
///
/// Fails unless `text` is exactly 64 hex digits.
pub fn decode_hash(text: &str) -> Result<Hash256> {
    let mut hash = [0; 32];
    hex::decode_to_slice(text, &mut hash)?;
    Ok(hash)
}

/// Decodes a 128-character hex signature.
///
/// # Errors
///
/// Fails unless `text` is exactly 128 hex digits.
pub fn decode_signature(text: &str) -> Result<Signature> {
    let mut signature = [0; 64];
    hex::decode_to_slice(text, &mut signature)?;
    Ok(signature)
}

/// Decodes an `xrb_` address field into its public key.
///
/// # Errors
///
/// See [`crate::address::decode`].
pub fn decode_account(text: &str) -> Result<PublicKey> {
    Ok(crate::address::decode(text)?)
}

/// Decodes a proof-of-work nonce.
///
/// ```
/// use nanoparse::fields::decode_work;
/// assert_eq!(decode_work("bf0dc663d15668b6").unwrap(), 0xbf0d_c663_d156_68b6);
/// assert!(decode_work("bf0dc663d15668b").is_err());
/// ```
///
/// # Errors
///
/// Fails unless `text` is exactly 16 hex digits.
pub fn decode_work(text: &str) -> Result<Work> {
    if text.len() != WORK_HEX_LEN || !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::Work(text.to_owned()).into());
    }
    Work::from_str_radix(text, 16).map_err(|_| ParseError::Work(text.to_owned()).into())
}

/// Parses a balance written in the given base.
///
/// # Errors
///
/// Fails on an empty string, a digit outside the base, or a value that does
/// not fit in 128 bits. Leading zeros never count against the width.
pub fn decode_balance(text: &str, radix: Radix) -> Result<Balance> {
    if text.is_empty() || !text.bytes().all(|b| radix.accepts(b)) {
        return Err(ParseError::Balance(text.to_owned()).into());
    }
    let digits = match text.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    };
    let parsed = match radix {
        Radix::Decimal => Balance::from_dec_str(digits).ok(),
        Radix::Hex => Balance::from_str_radix(digits, 16).ok(),
    };
    parsed.ok_or_else(|| ParseError::Balance(text.to_owned()).into())
}

#[must_use]
pub fn encode_hash(hash: &Hash256) -> String {
    let encoded = hex::encode_upper(hash);
    debug_assert_eq!(encoded.len(), HASH_HEX_LEN);
    encoded
}

#[must_use]
pub fn encode_signature(signature: &Signature) -> String {
    let encoded = hex::encode_upper(signature);
    debug_assert_eq!(encoded.len(), SIGNATURE_HEX_LEN);
    encoded
}

/// Inverse of [`decode_work`]: 16 lowercase, zero-padded hex digits.
#[must_use]
pub fn encode_work(work: Work) -> String {
    format!("{work:016x}")
}
