//! Typed ledger blocks and the decoder for `block` RPC responses.
//!
//! A node answers a `block` query with the block JSON escaped into the string
//! field `contents`. [`decode`] accepts that shape as well as a bare block
//! object.
//!
//! ```
//! use nanoparse::block::{decode, Block, BlockType};
//! let response = r#"{"contents": "{\n    \"type\": \"change\",\n    \"previous\": \"33832030C4F99FD37C8CD8399911D47150FCB90AE3A791970DBC8D05DFF93B8B\",\n    \"representative\": \"xrb_3tw77cfpwfnkqrjb988sh91tzerwu5dfnzxy8b3u76r7a7xwnkawm37ctcsb\",\n    \"work\": \"bf0dc663d15668b6\"\n}\n"}"#;
//! let block = decode(response).unwrap();
//! assert_eq!(block.block_type(), BlockType::Change);
//! assert_eq!(block.work(), 0xbf0d_c663_d156_68b6);
//! assert_eq!(block.link(), [0; 32]);
//! ```

use serde_json::{Map, Value};

use crate::error::{ParseError, Result};
use crate::fields::{self, Radix};
use crate::{Balance, Hash256, PublicKey, Signature, Work};

/// The five block variants a node can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    State,
    Send,
    Receive,
    Open,
    Change,
}

impl BlockType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Send => "send",
            Self::Receive => "receive",
            Self::Open => "open",
            Self::Change => "change",
        }
    }

    /// Number of fields a well-formed block of this type must carry,
    /// not counting `type` and `signature`.
    #[must_use]
    pub const fn mandatory_fields(self) -> usize {
        match self {
            Self::State => 6,
            Self::Send | Self::Open => 4,
            Self::Receive | Self::Change => 3,
        }
    }
}

impl core::fmt::Display for BlockType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for BlockType {
    type Err = ParseError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "state" => Ok(Self::State),
            "send" => Ok(Self::Send),
            "receive" => Ok(Self::Receive),
            "open" => Ok(Self::Open),
            "change" => Ok(Self::Change),
            other => Err(ParseError::UnknownBlockType(other.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateBlock {
    pub account: PublicKey,
    pub previous: Hash256,
    pub representative: PublicKey,
    pub balance: Balance,
    pub link: Hash256,
    pub work: Work,
    pub signature: Option<Signature>,
}

/// Legacy send. The balance left after sending travels as hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendBlock {
    pub previous: Hash256,
    pub destination: PublicKey,
    pub balance: Balance,
    pub work: Work,
    pub signature: Option<Signature>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveBlock {
    pub previous: Hash256,
    pub source: Hash256,
    pub work: Work,
    pub signature: Option<Signature>,
}

/// First block of an account chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenBlock {
    pub account: PublicKey,
    pub source: Hash256,
    pub representative: PublicKey,
    pub work: Work,
    pub signature: Option<Signature>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeBlock {
    pub previous: Hash256,
    pub representative: PublicKey,
    pub work: Work,
    pub signature: Option<Signature>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    State(StateBlock),
    Send(SendBlock),
    Receive(ReceiveBlock),
    Open(OpenBlock),
    Change(ChangeBlock),
}

impl Block {
    #[must_use]
    pub const fn block_type(&self) -> BlockType {
        match self {
            Self::State(_) => BlockType::State,
            Self::Send(_) => BlockType::Send,
            Self::Receive(_) => BlockType::Receive,
            Self::Open(_) => BlockType::Open,
            Self::Change(_) => BlockType::Change,
        }
    }

    #[must_use]
    pub const fn account(&self) -> Option<&PublicKey> {
        match self {
            Self::State(b) => Some(&b.account),
            Self::Open(b) => Some(&b.account),
            Self::Send(_) | Self::Receive(_) | Self::Change(_) => None,
        }
    }

    #[must_use]
    pub const fn previous(&self) -> Option<&Hash256> {
        match self {
            Self::State(b) => Some(&b.previous),
            Self::Send(b) => Some(&b.previous),
            Self::Receive(b) => Some(&b.previous),
            Self::Change(b) => Some(&b.previous),
            Self::Open(_) => None,
        }
    }

    #[must_use]
    pub const fn representative(&self) -> Option<&PublicKey> {
        match self {
            Self::State(b) => Some(&b.representative),
            Self::Open(b) => Some(&b.representative),
            Self::Change(b) => Some(&b.representative),
            Self::Send(_) | Self::Receive(_) => None,
        }
    }

    #[must_use]
    pub const fn balance(&self) -> Option<Balance> {
        match self {
            Self::State(b) => Some(b.balance),
            Self::Send(b) => Some(b.balance),
            Self::Receive(_) | Self::Open(_) | Self::Change(_) => None,
        }
    }

    /// The variant's 256-bit link: the state `link`, the send destination
    /// key, the receive/open source hash, or zero for change blocks.
    #[must_use]
    pub const fn link(&self) -> Hash256 {
        match self {
            Self::State(b) => b.link,
            Self::Send(b) => b.destination,
            Self::Receive(b) => b.source,
            Self::Open(b) => b.source,
            Self::Change(_) => [0; 32],
        }
    }

    #[must_use]
    pub const fn work(&self) -> Work {
        match self {
            Self::State(b) => b.work,
            Self::Send(b) => b.work,
            Self::Receive(b) => b.work,
            Self::Open(b) => b.work,
            Self::Change(b) => b.work,
        }
    }

    #[must_use]
    pub const fn signature(&self) -> Option<&Signature> {
        match self {
            Self::State(b) => b.signature.as_ref(),
            Self::Send(b) => b.signature.as_ref(),
            Self::Receive(b) => b.signature.as_ref(),
            Self::Open(b) => b.signature.as_ref(),
            Self::Change(b) => b.signature.as_ref(),
        }
    }
}

/// Reads the block fields of one JSON object, counting every mandatory
/// field that decodes.
struct Fields<'a> {
    object: &'a Map<String, Value>,
    decoded: usize,
}

impl<'a> Fields<'a> {
    fn new(object: &'a Map<String, Value>) -> Self {
        Self { object, decoded: 0 }
    }

    /// A field that is absent or malformed is not counted and reads as
    /// zero; [`Self::check_count`] rejects the block afterwards.
    fn mandatory<T: Default>(
        &mut self,
        name: &'static str,
        decode: impl FnOnce(&str) -> Result<T>,
    ) -> T {
        let Some(text) = self.object.get(name).and_then(Value::as_str) else {
            return T::default();
        };
        match decode(text) {
            Ok(value) => {
                self.decoded += 1;
                value
            }
            Err(err) => {
                tracing::debug!(field = name, %err, "discarding malformed block field");
                T::default()
            }
        }
    }

    fn signature(&self) -> Result<Option<Signature>> {
        match self.object.get("signature") {
            None => Ok(None),
            Some(Value::String(text)) => fields::decode_signature(text).map(Some),
            Some(_) => Err(ParseError::NotAString("signature").into()),
        }
    }

    fn check_count(&self, block_type: BlockType) -> Result<()> {
        let expected = block_type.mandatory_fields();
        if self.decoded == expected {
            return Ok(());
        }
        let mismatch = ParseError::FieldCount {
            block_type,
            expected,
            decoded: self.decoded,
        };
        Err(mismatch.into())
    }
}

fn decimal_balance(text: &str) -> Result<Balance> {
    fields::decode_balance(text, Radix::Decimal)
}

fn hex_balance(text: &str) -> Result<Balance> {
    fields::decode_balance(text, Radix::Hex)
}

/// Pulls the block object out of a response, undoing the string escaping
/// of `contents` when present.
fn unwrap_contents(response: &str) -> Result<Value> {
    let mut value: Value = serde_json::from_str(response)?;
    let Some(contents) = value.get_mut("contents").map(Value::take) else {
        return Ok(value);
    };
    match contents {
        Value::String(escaped) => match serde_json::from_str(&escaped)? {
            // doubly encoded
            Value::String(inner) => Ok(serde_json::from_str(&inner)?),
            block => Ok(block),
        },
        block @ Value::Object(_) => Ok(block),
        _ => Err(ParseError::NotAString("contents").into()),
    }
}

/// Decodes a `block` RPC response into a [`Block`].
///
/// # Errors
///
/// Fails with [`crate::Error::Parse`] when the JSON is malformed, `type` is not one
/// of the five variants, a signature is malformed, or fewer than the
/// variant's mandatory fields decode. Any failure leaves nothing behind.
pub fn decode(response: &str) -> Result<Block> {
    let contents = unwrap_contents(response)?;
    let object = contents
        .as_object()
        .ok_or(ParseError::MissingField("type"))?;
    let block_type: BlockType = object
        .get("type")
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingField("type"))?
        .parse()?;

    let mut reader = Fields::new(object);
    let signature = reader.signature()?;
    let block = match block_type {
        BlockType::State => Block::State(StateBlock {
            account: reader.mandatory("account", fields::decode_account),
            previous: reader.mandatory("previous", fields::decode_hash),
            representative: reader.mandatory("representative", fields::decode_account),
            balance: reader.mandatory("balance", decimal_balance),
            link: reader.mandatory("link", fields::decode_hash),
            work: reader.mandatory("work", fields::decode_work),
            signature,
        }),
        BlockType::Send => Block::Send(SendBlock {
            previous: reader.mandatory("previous", fields::decode_hash),
            destination: reader.mandatory("destination", fields::decode_account),
            balance: reader.mandatory("balance", hex_balance),
            work: reader.mandatory("work", fields::decode_work),
            signature,
        }),
        BlockType::Receive => Block::Receive(ReceiveBlock {
            previous: reader.mandatory("previous", fields::decode_hash),
            source: reader.mandatory("source", fields::decode_hash),
            work: reader.mandatory("work", fields::decode_work),
            signature,
        }),
        BlockType::Open => Block::Open(OpenBlock {
            account: reader.mandatory("account", fields::decode_account),
            source: reader.mandatory("source", fields::decode_hash),
            representative: reader.mandatory("representative", fields::decode_account),
            work: reader.mandatory("work", fields::decode_work),
            signature,
        }),
        BlockType::Change => Block::Change(ChangeBlock {
            previous: reader.mandatory("previous", fields::decode_hash),
            representative: reader.mandatory("representative", fields::decode_account),
            work: reader.mandatory("work", fields::decode_work),
            signature,
        }),
    };
    reader.check_count(block_type)?;
    Ok(block)
}
