//! Convert between 256-bit public keys and checksummed `xrb_` account addresses.
//!
//! An address is the [`PREFIX`] followed by sixty base-32 characters. The
//! first 52 characters carry the public key, the last 8 carry a 5-byte
//! BLAKE2b checksum of that key.
//!
//! ```
//! use nanoparse::address::{decode, encode};
//! let address = "xrb_3t6k35gi95xu6tergt6p69ck76ogmitsa8mnijtpxm9fkcm736xtoncuohr3";
//! let public_key = decode(address).unwrap();
//! assert_eq!(
//!     hex::encode_upper(public_key),
//!     "E89208DD038FBB269987689621D52292AE9C35941A7484756ECCED92A65093BA"
//! );
//! assert_eq!(encode(&public_key), address);
//! ```

use blake2::{digest::consts::U5, Blake2b, Digest};

use crate::constants::{ADDRESS_DATA_LEN, ADDRESS_LEN, ALPHABET, CHECKSUM_LEN, PREFIX, SYMBOLS};
use crate::PublicKey;

/// Checksum bytes followed by the key bytes reversed, plus one byte of
/// headroom for the 4 padding bits above bit 296.
const PACKED_LEN: usize = CHECKSUM_LEN + 32 + 1;

/// The ways an address can fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The address is not exactly 64 bytes long.
    #[error("invalid address length")]
    InvalidLength,
    /// The address does not start with `xrb_`.
    #[error("invalid address prefix")]
    InvalidPrefix,
    /// A character is outside the alphabet, or the first data character
    /// sets the padding bits.
    #[error("invalid address character")]
    InvalidCharacter,
    /// The embedded checksum does not match the decoded public key.
    #[error("invalid address checksum")]
    InvalidChecksum,
}

fn checksum(public_key: &PublicKey) -> [u8; CHECKSUM_LEN] {
    let mut hasher = Blake2b::<U5>::new();
    hasher.update(public_key);
    let mut checksum = [0; CHECKSUM_LEN];
    checksum.copy_from_slice(&hasher.finalize());
    checksum
}

/// Encodes a public key as a lowercase `xrb_` address.
///
/// # Examples
///
/// ```
/// use nanoparse::address::encode;
/// assert_eq!(
///     encode(&[0; 32]),
///     "xrb_1111111111111111111111111111111111111111111111111111hifc8npp"
/// );
/// ```
#[must_use]
pub fn encode(public_key: &PublicKey) -> String {
    // little-endian bit string: checksum in the low 40 bits, then the key
    let mut packed = [0_u8; PACKED_LEN];
    packed[..CHECKSUM_LEN].copy_from_slice(&checksum(public_key));
    let key = &mut packed[CHECKSUM_LEN..PACKED_LEN - 1];
    key.copy_from_slice(public_key);
    key.reverse();

    let mut data = [0_u8; ADDRESS_DATA_LEN];
    for group in 0..ADDRESS_DATA_LEN {
        let offset = group * 5;
        let byte = offset / 8;
        let window = u16::from(packed[byte]) | u16::from(packed[byte + 1]) << 8;
        let symbol = (window >> (offset % 8)) & 0x1f;
        data[ADDRESS_DATA_LEN - 1 - group] = ALPHABET[usize::from(symbol)];
    }

    let mut address = String::with_capacity(ADDRESS_LEN);
    address.push_str(PREFIX);
    address.extend(data.iter().copied().map(char::from));
    address
}

/// Decodes an `xrb_` address back into its public key, verifying the
/// embedded checksum.
///
/// # Examples
///
/// ```
/// use nanoparse::address::{decode, Error};
/// assert_eq!(
///     decode("xrb_1111111111111111111111111111111111111111111111111111hifc8npp").unwrap(),
///     [0; 32]
/// );
/// assert_eq!(
///     decode("xrb_1111111111111111111111111111111111111111111111111111hifc8npq"),
///     Err(Error::InvalidChecksum)
/// );
/// ```
///
/// # Errors
///
/// Fails on a wrong length, a wrong prefix, a character outside the
/// alphabet or a checksum mismatch.
pub fn decode(address: &str) -> Result<PublicKey, Error> {
    if address.len() != ADDRESS_LEN {
        return Err(Error::InvalidLength);
    }
    let data = address.strip_prefix(PREFIX).ok_or(Error::InvalidPrefix)?;

    let mut packed = [0_u8; PACKED_LEN];
    for (index, c) in data.chars().enumerate() {
        let symbol = SYMBOLS.get(&c).copied().ok_or(Error::InvalidCharacter)?;
        let offset = (ADDRESS_DATA_LEN - 1 - index) * 5;
        let byte = offset / 8;
        let window = u16::from(symbol) << (offset % 8);
        packed[byte] |= window.to_le_bytes()[0];
        packed[byte + 1] |= window.to_le_bytes()[1];
    }
    if packed[PACKED_LEN - 1] != 0 {
        return Err(Error::InvalidCharacter);
    }

    let mut public_key = [0_u8; 32];
    public_key.copy_from_slice(&packed[CHECKSUM_LEN..PACKED_LEN - 1]);
    public_key.reverse();
    if checksum(&public_key) == packed[..CHECKSUM_LEN] {
        Ok(public_key)
    } else {
        Err(Error::InvalidChecksum)
    }
}
