//! Scripted [`HTTPClient`] for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use hyper::body::Bytes;
use hyper::{header, Body, Method, Request, Response};

use crate::client::HTTPClient;
use crate::error::TransportError;

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) content_type: Option<String>,
    pub(crate) body: String,
}

#[derive(Debug)]
enum Reply {
    Status(u16, String),
    Fail(TransportError),
}

/// Replays canned replies in order and records every request it sees.
#[derive(Debug)]
pub(crate) struct MockClient {
    url: String,
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockClient {
    pub(crate) fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Status(status, body.to_string()));
        self
    }

    pub(crate) fn fail(self, err: TransportError) -> Self {
        self.replies.lock().unwrap().push_back(Reply::Fail(err));
        self
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Panics if a scripted reply was never consumed.
    pub(crate) fn assert_expectations(&self) {
        let left = self.replies.lock().unwrap().len();
        assert_eq!(left, 0, "{} scripted replies were not used", left);
    }
}

#[async_trait]
impl HTTPClient for MockClient {
    fn url(&self) -> &str {
        &self.url
    }

    async fn send_request(
        &self,
        request: Request<Body>,
    ) -> Result<Response<Bytes>, TransportError> {
        let (parts, body) = request.into_parts();
        let body = hyper::body::to_bytes(body)
            .await
            .map_err(TransportError::Hyper)?;

        self.requests.lock().unwrap().push(RecordedRequest {
            method: parts.method,
            url: parts.uri.to_string(),
            content_type: parts
                .headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: String::from_utf8_lossy(&body).into_owned(),
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("request without a scripted reply");

        match reply {
            Reply::Status(status, body) => Ok(Response::builder()
                .status(status)
                .body(Bytes::from(body))
                .unwrap()),
            Reply::Fail(err) => Err(err),
        }
    }
}
