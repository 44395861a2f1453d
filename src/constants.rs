/// Every account address starts with this prefix.
pub const PREFIX: &str = "xrb_";

/// Number of base-32 characters following [`PREFIX`].
pub const ADDRESS_DATA_LEN: usize = 60;

/// Total address length in bytes.
pub const ADDRESS_LEN: usize = PREFIX.len() + ADDRESS_DATA_LEN;

/// Length of the BLAKE2b digest embedded in an address.
pub const CHECKSUM_LEN: usize = 5;

pub const HASH_HEX_LEN: usize = 64;
pub const SIGNATURE_HEX_LEN: usize = 128;
pub const WORK_HEX_LEN: usize = 16;

/// The 32 address symbols, indexed by their 5-bit value.
pub const ALPHABET: [u8; 32] = *b"13456789abcdefghijkmnopqrstuwxyz";

/// Reverse lookup of [`ALPHABET`].
pub static SYMBOLS: phf::Map<char, u8> = phf::phf_map! {
    '1' => 0,
    '3' => 1,
    '4' => 2,
    '5' => 3,
    '6' => 4,
    '7' => 5,
    '8' => 6,
    '9' => 7,
    'a' => 8,
    'b' => 9,
    'c' => 10,
    'd' => 11,
    'e' => 12,
    'f' => 13,
    'g' => 14,
    'h' => 15,
    'i' => 16,
    'j' => 17,
    'k' => 18,
    'm' => 19,
    'n' => 20,
    'o' => 21,
    'p' => 22,
    'q' => 23,
    'r' => 24,
    's' => 25,
    't' => 26,
    'u' => 27,
    'w' => 28,
    'x' => 29,
    'y' => 30,
    'z' => 31,
};
