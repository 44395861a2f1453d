//! Convenience wrappers that pair each request with its parser over a
//! caller-supplied [`Transport`].

use crate::block::Block;
use crate::config::{ClientConfig, ConfigError};
use crate::error::{Error, Result};
use crate::scalar::Pending;
use crate::{Hash256, PublicKey, Work};

/// Sends one request text to a node and returns its response text.
///
/// Timeouts, retries and cancellation are the implementor's business; the
/// client never retries.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Whatever the underlying channel reports.
    fn exchange(&mut self, request: &str) -> core::result::Result<String, Self::Error>;
}

pub struct Client<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> Client<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            config: ClientConfig::default(),
        }
    }

    /// # Errors
    ///
    /// Fails when `config` does not validate.
    pub fn with_config(
        transport: T,
        config: ClientConfig,
    ) -> core::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { transport, config })
    }

    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    fn exchange(&mut self, request: &str) -> Result<String> {
        if request.len() > self.config.request_capacity {
            return Err(Error::InsufficientBuffer {
                required: request.len(),
                capacity: self.config.request_capacity,
            });
        }
        tracing::debug!(%request, "sending rpc request");
        let response = self
            .transport
            .exchange(request)
            .map_err(|err| Error::Transport(Box::new(err)))?;
        if response.len() > self.config.response_capacity {
            return Err(Error::InsufficientBuffer {
                required: response.len(),
                capacity: self.config.response_capacity,
            });
        }
        tracing::debug!(%response, "received rpc response");
        Ok(response)
    }

    /// # Errors
    ///
    /// Transport and buffer failures, or a response that is not JSON.
    pub fn block_count(&mut self) -> Result<u64> {
        let response = self.exchange(&crate::request::block_count())?;
        crate::scalar::block_count(&response)
    }

    /// # Errors
    ///
    /// Transport and buffer failures, or see [`crate::scalar::work`].
    pub fn work_generate(&mut self, hash: &Hash256) -> Result<Work> {
        let response = self.exchange(&crate::request::work_generate(hash))?;
        crate::scalar::work(&response)
    }

    /// # Errors
    ///
    /// Transport and buffer failures, or see
    /// [`crate::scalar::account_frontier_for`].
    pub fn account_frontier(&mut self, account: &PublicKey) -> Result<Hash256> {
        let response = self.exchange(&crate::request::accounts_frontiers(account))?;
        crate::scalar::account_frontier_for(&response, &crate::address::encode(account))
    }

    /// # Errors
    ///
    /// Transport and buffer failures, or see [`crate::block::decode`].
    pub fn block(&mut self, hash: &Hash256) -> Result<Block> {
        let response = self.exchange(&crate::request::block(hash))?;
        crate::block::decode(&response)
    }

    /// # Errors
    ///
    /// Transport and buffer failures, or see [`crate::scalar::pending_hash`].
    pub fn pending(&mut self, account: &PublicKey) -> Result<Pending> {
        let response = self.exchange(&crate::request::accounts_pending(account))?;
        crate::scalar::pending_hash(&response)
    }

    /// Fetches the head block of `account`: its frontier hash first, then
    /// that block.
    ///
    /// # Errors
    ///
    /// Any failure of [`Self::account_frontier`] or [`Self::block`].
    pub fn frontier_block(&mut self, account: &PublicKey) -> Result<Block> {
        let frontier = self.account_frontier(account)?;
        tracing::info!(
            account = %crate::address::encode(account),
            frontier = %crate::fields::encode_hash(&frontier),
            "resolved frontier block"
        );
        self.block(&frontier)
    }

    /// Submits `block` and returns the node's acknowledgement untouched.
    ///
    /// # Errors
    ///
    /// Encoding, transport and buffer failures.
    pub fn process(&mut self, block: &Block) -> Result<String> {
        let request = crate::process::encode(block, self.config.request_capacity)?;
        self.exchange(&request)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::convert::Infallible;
    use std::io;

    use super::*;
    use crate::block::tests::{
        open_response, state_object, wrap, FRONTIER_ACCOUNT, FRONTIER_HASH, GENESIS_KEY,
    };
    use crate::block::BlockType;
    use crate::fields;

    #[derive(Default)]
    struct MockTransport {
        responses: VecDeque<String>,
        requests: Vec<String>,
    }

    impl MockTransport {
        fn replying(responses: &[&str]) -> Self {
            Self {
                responses: responses.iter().map(|&r| r.to_owned()).collect(),
                requests: Vec::new(),
            }
        }
    }

    impl Transport for MockTransport {
        type Error = Infallible;

        fn exchange(&mut self, request: &str) -> core::result::Result<String, Infallible> {
            self.requests.push(request.to_owned());
            Ok(self.responses.pop_front().unwrap_or_default())
        }
    }

    struct Offline;

    impl Transport for Offline {
        type Error = io::Error;

        fn exchange(&mut self, _request: &str) -> core::result::Result<String, io::Error> {
            Err(io::ErrorKind::NotConnected.into())
        }
    }

    fn account() -> PublicKey {
        crate::address::decode(FRONTIER_ACCOUNT).unwrap()
    }

    #[test]
    fn test_block_count() {
        let mut client = Client::new(MockTransport::replying(&[
            r#"{"count": "9493688", "unchecked": "18360"}"#,
        ]));
        assert_eq!(client.block_count().unwrap(), 9_493_688);
        assert_eq!(
            client.into_inner().requests,
            vec![crate::request::block_count()]
        );
    }

    #[test]
    fn test_work_generate() {
        let response = r#"{"work": "bf0dc663d15668b6"}"#;
        let mut client = Client::new(MockTransport::replying(&[response]));
        let hash = fields::decode_hash(FRONTIER_HASH).unwrap();
        assert_eq!(client.work_generate(&hash).unwrap(), 0xbf0d_c663_d156_68b6);
        assert!(client.into_inner().requests[0].contains(FRONTIER_HASH));
    }

    #[test]
    fn test_frontier_block() {
        let frontiers = format!(r#"{{"frontiers": {{"{FRONTIER_ACCOUNT}": "{FRONTIER_HASH}"}}}}"#);
        let block = wrap(&state_object());
        let transport = MockTransport::replying(&[frontiers.as_str(), block.as_str()]);
        let mut client = Client::new(transport);

        let decoded = client.frontier_block(&account()).unwrap();
        assert_eq!(decoded.block_type(), BlockType::State);

        let requests = client.into_inner().requests;
        assert_eq!(requests[0], crate::request::accounts_frontiers(&account()));
        assert_eq!(
            requests[1],
            crate::request::block(&fields::decode_hash(FRONTIER_HASH).unwrap())
        );
    }

    #[test]
    fn test_pending() {
        let response = format!(
            r#"{{"blocks": {{"{FRONTIER_ACCOUNT}": {{"{GENESIS_KEY}": {{"amount": "1", "source": "{FRONTIER_ACCOUNT}"}}}}}}}}"#
        );
        let mut client = Client::new(MockTransport::replying(&[response.as_str()]));
        let pending = client.pending(&account()).unwrap();
        assert_eq!(pending.hash, fields::decode_hash(GENESIS_KEY).unwrap());
        assert_eq!(pending.source, Some(account()));
        assert!(client.into_inner().requests[0].contains("\"count\":1"));
    }

    #[test]
    fn test_process() {
        let block = crate::block::decode(&open_response()).unwrap();
        let mut client = Client::new(MockTransport::replying(&[r#"{"hash": "ACK"}"#]));
        assert_eq!(client.process(&block).unwrap(), r#"{"hash": "ACK"}"#);
        let expected = crate::process::encode(&block, 1024).unwrap();
        assert_eq!(client.into_inner().requests, vec![expected]);
    }

    #[test]
    fn test_capacity_limits() {
        let block = crate::block::decode(&open_response()).unwrap();
        let config = ClientConfig {
            request_capacity: 100,
            response_capacity: 16,
        };
        let transport = MockTransport::replying(&[r#"{"count": "9493688"}"#]);
        let mut client = Client::with_config(transport, config).unwrap();

        // nothing is sent when the request does not fit
        assert!(matches!(
            client.process(&block),
            Err(Error::InsufficientBuffer { capacity: 100, .. })
        ));
        assert!(matches!(
            client.block_count(),
            Err(Error::InsufficientBuffer {
                required: 20,
                capacity: 16
            })
        ));
        assert_eq!(client.into_inner().requests.len(), 1);

        assert!(Client::with_config(
            MockTransport::default(),
            ClientConfig {
                request_capacity: 0,
                response_capacity: 1,
            }
        )
        .is_err());
    }

    #[test]
    fn test_transport_failure() {
        let mut client = Client::new(Offline);
        assert!(matches!(client.block_count(), Err(Error::Transport(_))));
        assert!(matches!(
            client.frontier_block(&account()),
            Err(Error::Transport(_))
        ));
    }

    #[test]
    fn test_parse_failure_surfaces() {
        let response = r#"{"error": "Block not found"}"#;
        let mut client = Client::new(MockTransport::replying(&[response]));
        assert!(matches!(client.block(&[0; 32]), Err(Error::Parse(_))));
    }
}
