use super::{Reply, Transport};
use crate::auth::Token;
use crate::error::{DrugaiError, Result};
use std::cell::RefCell;
use std::collections::VecDeque;

/// A request as seen by [`CannedTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub path: String,
    pub token: Token,
    pub body: serde_json::Value,
}

/// In-memory transport that answers from a queue of scripted replies.
///
/// Running out of replies is reported as an [`DrugaiError::Api`] error so a
/// test that makes an unexpected call fails loudly.
#[derive(Debug, Default)]
pub struct CannedTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl CannedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, status: u16, body: impl Into<String>) -> Self {
        self.replies.borrow_mut().push_back(Reply::new(status, body));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for CannedTransport {
    fn post_json(&self, path: &str, token: &Token, body: &serde_json::Value) -> Result<Reply> {
        self.requests.borrow_mut().push(RecordedRequest {
            path: path.to_string(),
            token: token.clone(),
            body: body.clone(),
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| DrugaiError::Api(format!("no canned reply left for {}", path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replays_in_order_and_records() {
        let transport = CannedTransport::new()
            .with_reply(200, "first")
            .with_reply(500, "second");
        let token = Token::new("t");

        let a = transport.post_json("/a", &token, &json!({"n": 1})).unwrap();
        let b = transport.post_json("/b", &token, &json!({"n": 2})).unwrap();
        assert_eq!(a, Reply::new(200, "first"));
        assert_eq!(b, Reply::new(500, "second"));

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].path, "/b");
        assert_eq!(requests[1].body, json!({"n": 2}));
    }

    #[test]
    fn exhausted_queue_is_an_error() {
        let transport = CannedTransport::new();
        let err = transport.post_json("/x", &Token::new("t"), &json!({}));
        assert!(matches!(err, Err(DrugaiError::Api(_))));
    }
}
