//! Request texts for the RPC actions whose responses this crate parses.

use serde_json::json;

use crate::{fields, Hash256, PublicKey};

#[must_use]
pub fn block_count() -> String {
    json!({ "action": "block_count" }).to_string()
}

#[must_use]
pub fn work_generate(hash: &Hash256) -> String {
    json!({
        "action": "work_generate",
        "hash": fields::encode_hash(hash),
    })
    .to_string()
}

#[must_use]
pub fn accounts_frontiers(account: &PublicKey) -> String {
    json!({
        "action": "accounts_frontiers",
        "accounts": [crate::address::encode(account)],
    })
    .to_string()
}

#[must_use]
pub fn block(hash: &Hash256) -> String {
    json!({
        "action": "block",
        "hash": fields::encode_hash(hash),
    })
    .to_string()
}

/// Asks for at most one pending block, with its source account, so that
/// [`crate::scalar::pending_hash`] is unambiguous.
#[must_use]
pub fn accounts_pending(account: &PublicKey) -> String {
    json!({
        "action": "accounts_pending",
        "count": 1,
        "source": "true",
        "accounts": [crate::address::encode(account)],
    })
    .to_string()
}
