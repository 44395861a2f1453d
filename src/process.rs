//! Serialize a [`Block`] into the request text of the node's `process` action.
//!
//! The node takes the block as an escaped JSON string inside the request, and
//! every variant goes out in the `state` shape.

use serde::Serialize;

use crate::block::Block;
use crate::error::{Error, Result};
use crate::fields;

#[derive(Serialize)]
struct StateBody {
    #[serde(rename = "type")]
    kind: &'static str,
    account: String,
    previous: String,
    representative: String,
    balance: String,
    link: String,
    work: String,
    signature: String,
}

impl From<&Block> for StateBody {
    fn from(block: &Block) -> Self {
        Self {
            kind: "state",
            account: crate::address::encode(block.account().unwrap_or(&[0; 32])),
            previous: fields::encode_hash(block.previous().unwrap_or(&[0; 32])),
            representative: crate::address::encode(block.representative().unwrap_or(&[0; 32])),
            balance: block.balance().unwrap_or_default().to_string(),
            link: fields::encode_hash(&block.link()),
            work: fields::encode_work(block.work()),
            signature: fields::encode_signature(block.signature().unwrap_or(&[0; 64])),
        }
    }
}

#[derive(Serialize)]
struct ProcessRequest<'a> {
    action: &'static str,
    block: &'a str,
}

/// Renders the `process` request for `block`, refusing to produce more than
/// `capacity` bytes.
///
/// # Examples
///
/// ```
/// use nanoparse::block::{Block, ChangeBlock};
/// let block = Block::Change(ChangeBlock {
///     previous: [0x33; 32],
///     representative: [0; 32],
///     work: 0xbf0d_c663_d156_68b6,
///     signature: None,
/// });
/// let request = nanoparse::process::encode(&block, 1024).unwrap();
/// assert!(request.starts_with(r#"{"action":"process","block":"{\"type\":\"state\","#));
/// assert!(request.contains(r#"\"work\":\"bf0dc663d15668b6\""#));
/// assert!(nanoparse::process::encode(&block, 128).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InsufficientBuffer`] when the request is longer than
/// `capacity`.
pub fn encode(block: &Block, capacity: usize) -> Result<String> {
    let body = serde_json::to_string(&StateBody::from(block)).map_err(Error::Serialize)?;
    let request = serde_json::to_string(&ProcessRequest {
        action: "process",
        block: &body,
    })
    .map_err(Error::Serialize)?;
    if request.len() > capacity {
        return Err(Error::InsufficientBuffer {
            required: request.len(),
            capacity,
        });
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::tests::{
        open_response, state_object, wrap, FRONTIER_ACCOUNT, FRONTIER_HASH, GENESIS_ACCOUNT,
        GENESIS_KEY, SIGNATURE,
    };
    use crate::block::{self, BlockType, ChangeBlock, ReceiveBlock, SendBlock};
    use serde_json::Value;

    const ZERO_ACCOUNT: &str = "xrb_1111111111111111111111111111111111111111111111111111hifc8npp";
    const ZERO_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

    fn inner(request: &str) -> Value {
        let outer: Value = serde_json::from_str(request).unwrap();
        assert_eq!(outer["action"], "process");
        serde_json::from_str(outer["block"].as_str().unwrap()).unwrap()
    }

    fn blocks() -> Vec<Block> {
        let state = block::decode(&wrap(&state_object())).unwrap();
        let open = block::decode(&open_response()).unwrap();
        let previous = fields::decode_hash(FRONTIER_HASH).unwrap();
        let key = fields::decode_hash(GENESIS_KEY).unwrap();
        vec![
            state,
            open,
            Block::Send(SendBlock {
                previous,
                destination: key,
                balance: crate::Balance::from(5_u64),
                work: 1,
                signature: None,
            }),
            Block::Receive(ReceiveBlock {
                previous,
                source: key,
                work: 2,
                signature: None,
            }),
            Block::Change(ChangeBlock {
                previous,
                representative: key,
                work: 3,
                signature: None,
            }),
        ]
    }

    #[test]
    fn test_state_block() {
        let block = block::decode(&wrap(&state_object())).unwrap();
        let request = encode(&block, 1024).unwrap();
        let expected = format!(
            "{{\"action\":\"process\",\"block\":\"{{\
             \\\"type\\\":\\\"state\\\",\
             \\\"account\\\":\\\"{FRONTIER_ACCOUNT}\\\",\
             \\\"previous\\\":\\\"{FRONTIER_HASH}\\\",\
             \\\"representative\\\":\\\"{GENESIS_ACCOUNT}\\\",\
             \\\"balance\\\":\\\"1000000000000000000000000000000\\\",\
             \\\"link\\\":\\\"{GENESIS_KEY}\\\",\
             \\\"work\\\":\\\"bf0dc663d15668b6\\\",\
             \\\"signature\\\":\\\"{SIGNATURE}\\\"\
             }}\"}}"
        );
        assert_eq!(request, expected);
        // what goes out decodes back to the same block
        assert_eq!(block::decode(&inner(&request).to_string()).unwrap(), block);
    }

    #[test]
    fn test_variants_go_out_as_state() {
        for block in blocks() {
            let body = inner(&encode(&block, 1024).unwrap());
            assert_eq!(body["type"], "state");
            assert_eq!(body["link"], fields::encode_hash(&block.link()));
            assert_eq!(body["work"], fields::encode_work(block.work()));
            let decoded = block::decode(&body.to_string()).unwrap();
            assert_eq!(decoded.block_type(), BlockType::State);
        }
    }

    #[test]
    fn test_missing_fields_are_zero() {
        let blocks = blocks();

        let open = inner(&encode(&blocks[1], 1024).unwrap());
        assert_eq!(open["previous"], ZERO_HASH);
        assert_eq!(open["balance"], "0");
        assert_eq!(open["account"], GENESIS_ACCOUNT);

        let send = inner(&encode(&blocks[2], 1024).unwrap());
        assert_eq!(send["account"], ZERO_ACCOUNT);
        assert_eq!(send["representative"], ZERO_ACCOUNT);
        // decimal on the way out, whatever base it came in
        assert_eq!(send["balance"], "5");
        assert_eq!(send["signature"], "0".repeat(128));

        let change = inner(&encode(&blocks[4], 1024).unwrap());
        assert_eq!(change["link"], ZERO_HASH);
        assert_eq!(change["work"], "0000000000000003");
    }

    #[test]
    fn test_insufficient_buffer() {
        for block in blocks() {
            let required = encode(&block, usize::MAX).unwrap().len();
            assert!(encode(&block, required).is_ok());
            match encode(&block, required - 1) {
                Err(Error::InsufficientBuffer {
                    required: r,
                    capacity,
                }) => {
                    assert_eq!(r, required);
                    assert_eq!(capacity, required - 1);
                }
                other => panic!("expected an insufficient buffer, got {other:?}"),
            }
            assert!(matches!(
                encode(&block, 0),
                Err(Error::InsufficientBuffer { .. })
            ));
        }
    }
}
