use crate::Result;
use pluglist_types::{AttributionPayload, ClientError};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::future::Future;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Platform attribution client
pub trait AttributionClient {
    fn request_details(
        &self,
    ) -> impl Future<Output = std::result::Result<AttributionPayload, ClientError>> + Send;
}

impl<T: AttributionClient + Send + Sync + ?Sized> AttributionClient for Arc<T> {
    fn request_details(
        &self,
    ) -> impl Future<Output = std::result::Result<AttributionPayload, ClientError>> + Send {
        (**self).request_details()
    }
}

/// Error code the platform uses when ad tracking is limited
pub const LIMIT_AD_TRACKING: &str = "limit_ad_tracking";

/// One recorded client response: `{"details": {...}}` or `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordedResponse {
    Details { details: AttributionPayload },
    Failure { error: String },
}

impl RecordedResponse {
    pub fn limited() -> Self {
        RecordedResponse::Failure {
            error: LIMIT_AD_TRACKING.to_string(),
        }
    }

    pub fn transient(reason: impl Into<String>) -> Self {
        RecordedResponse::Failure {
            error: reason.into(),
        }
    }

    fn into_result(self) -> std::result::Result<AttributionPayload, ClientError> {
        match self {
            RecordedResponse::Details { details } => Ok(details),
            RecordedResponse::Failure { error } if error == LIMIT_AD_TRACKING => {
                Err(ClientError::TrackingLimited)
            }
            RecordedResponse::Failure { error } => Err(ClientError::Transient(error)),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReplayFile {
    Many(Vec<RecordedResponse>),
    One(RecordedResponse),
}

#[derive(Default)]
struct ReplayState {
    pending: VecDeque<RecordedResponse>,
    last: Option<RecordedResponse>,
}

/// Client that answers from recorded responses, one per request, in order.
/// Once the recording is exhausted the last response repeats.
#[derive(Default)]
pub struct ReplayClient {
    state: Mutex<ReplayState>,
    requests: AtomicUsize,
}

impl ReplayClient {
    pub fn new(responses: impl IntoIterator<Item = RecordedResponse>) -> Self {
        Self {
            state: Mutex::new(ReplayState {
                pending: responses.into_iter().collect(),
                last: None,
            }),
            requests: AtomicUsize::new(0),
        }
    }

    /// Load a recording: a single response object or an array of them
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let responses = match serde_json::from_str::<ReplayFile>(&content)? {
            ReplayFile::Many(responses) => responses,
            ReplayFile::One(response) => vec![response],
        };
        Ok(Self::new(responses))
    }

    /// Number of requests issued so far
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> Option<RecordedResponse> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(response) = state.pending.pop_front() {
            state.last = Some(response.clone());
            return Some(response);
        }
        state.last.clone()
    }
}

impl AttributionClient for ReplayClient {
    async fn request_details(&self) -> std::result::Result<AttributionPayload, ClientError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        match self.next_response() {
            Some(response) => response.into_result(),
            None => Err(ClientError::Transient("no recorded response".to_string())),
        }
    }
}
