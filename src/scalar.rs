//! Extractors for single values in small RPC responses.
//!
//! [`account_frontier`] and [`pending_hash`] take the *first* entry of a JSON
//! object. Only call them on responses to queries scoped to one account and
//! at most one pending block; "first" is document order.

use serde_json::{Map, Value};

use crate::error::{ParseError, Result};
use crate::fields::{self, Radix};
use crate::{Balance, Hash256, PublicKey, Work};

/// One receivable block from an `accounts_pending` response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pending {
    pub hash: Hash256,
    pub amount: Balance,
    /// Sending account, present when the query asked for `source`.
    pub source: Option<PublicKey>,
}

fn object<'a>(value: &'a Value, name: &'static str) -> Result<&'a Map<String, Value>> {
    value
        .get(name)
        .and_then(Value::as_object)
        .ok_or_else(|| ParseError::MissingField(name).into())
}

fn first<'a>(map: &'a Map<String, Value>, name: &'static str) -> Result<(&'a String, &'a Value)> {
    map.iter()
        .next()
        .ok_or_else(|| ParseError::EmptyCollection(name).into())
}

/// `atoi`-style conversion: leading whitespace and one `+` skipped, then as
/// many decimal digits as there are.
fn leading_decimal(text: &str) -> u64 {
    let text = text.trim_start();
    let digits = text.strip_prefix('+').unwrap_or(text);
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0, |count: u64, digit| {
            let digit = u64::from(digit - b'0');
            count.saturating_mul(10).saturating_add(digit)
        })
}

/// Reads the node's processed block count.
///
/// A response without a string `count` yields 0 rather than an error.
///
/// ```
/// use nanoparse::scalar::block_count;
/// assert_eq!(block_count(r#"{"count": "9493688", "unchecked": "18360"}"#).unwrap(), 9_493_688);
/// assert_eq!(block_count(r#"{"unchecked": "18360"}"#).unwrap(), 0);
/// ```
///
/// # Errors
///
/// Fails only when `response` is not JSON.
pub fn block_count(response: &str) -> Result<u64> {
    let value: Value = serde_json::from_str(response)?;
    Ok(value
        .get("count")
        .and_then(Value::as_str)
        .map_or(0, leading_decimal))
}

/// Reads the nonce of a `work_generate` response.
///
/// # Errors
///
/// Fails when `work` is absent or not 16 hex digits.
pub fn work(response: &str) -> Result<Work> {
    let value: Value = serde_json::from_str(response)?;
    let work = value
        .get("work")
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingField("work"))?;
    fields::decode_work(work)
}

/// Reads the frontier hash of the first account in an `accounts_frontiers`
/// response.
///
/// # Errors
///
/// Fails when `frontiers` is absent or empty, or its first value is not a
/// 64-digit hex string.
pub fn account_frontier(response: &str) -> Result<Hash256> {
    let value: Value = serde_json::from_str(response)?;
    let (_, frontier) = first(object(&value, "frontiers")?, "frontiers")?;
    let frontier = frontier
        .as_str()
        .ok_or(ParseError::MissingField("frontiers"))?;
    fields::decode_hash(frontier)
}

/// Like [`account_frontier`], but picks the entry keyed by `address`.
///
/// # Errors
///
/// Fails when `address` has no string entry under `frontiers`, or the entry
/// is not a 64-digit hex string.
pub fn account_frontier_for(response: &str, address: &str) -> Result<Hash256> {
    let value: Value = serde_json::from_str(response)?;
    let frontier = object(&value, "frontiers")?
        .get(address)
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingField("frontiers"))?;
    fields::decode_hash(frontier)
}

/// Reads the first pending block of the first account in an
/// `accounts_pending` response.
///
/// Entries may be `{"amount": .., "source": ..}` objects (the query asked
/// for `source`) or a bare amount string.
///
/// # Errors
///
/// Fails when any level is absent or empty, or the hash, amount or source is
/// malformed.
pub fn pending_hash(response: &str) -> Result<Pending> {
    let value: Value = serde_json::from_str(response)?;
    let (_, account) = first(object(&value, "blocks")?, "blocks")?;
    let account = account
        .as_object()
        .ok_or(ParseError::EmptyCollection("blocks"))?;
    let (hash, entry) = first(account, "blocks")?;
    let hash = fields::decode_hash(hash)?;

    let (amount, source) = match entry {
        Value::String(amount) => (amount.as_str(), None),
        Value::Object(entry) => (
            entry
                .get("amount")
                .and_then(Value::as_str)
                .ok_or(ParseError::MissingField("amount"))?,
            entry.get("source").and_then(Value::as_str),
        ),
        _ => return Err(ParseError::MissingField("amount").into()),
    };
    Ok(Pending {
        hash,
        amount: fields::decode_balance(amount, Radix::Decimal)?,
        source: source.map(fields::decode_account).transpose()?,
    })
}
