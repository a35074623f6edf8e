use serde::Deserialize;

/// Failure of a single backend call.
///
/// Carries the message the user should see: the backend's `error` field when
/// the response had one, otherwise the operation's generic fallback. Network
/// and decode failures have no status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RequestError {
    pub status: Option<u16>,
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
}

impl RequestError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Build the error for a non-success response from its raw body.
    pub fn from_response(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.error)
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self::new(Some(status), message)
    }

    pub fn transport(fallback: &str, err: &reqwest::Error) -> Self {
        tracing::debug!("transport failure: {err}");
        Self::new(None, format!("{fallback}: {err}"))
    }
}
