use std::time::Duration;

use url::Url;

use crate::models::MeetingId;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {what} {value:?}: {source}")]
    InvalidUrl {
        what: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base URL {0:?} cannot carry a path")]
    OpaqueBase(String),
}

/// Periods of the client's timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Re-fetch of the meeting being waited on.
    pub poll: Duration,
    /// Refresh of the meeting list while it is on screen.
    pub refresh: Duration,
    pub error: Duration,
    pub notification: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            poll: Duration::from_secs(10),
            refresh: Duration::from_secs(30),
            error: Duration::from_secs(5),
            notification: Duration::from_secs(3),
        }
    }
}

/// What the client was opened with: the `project_id` and `meeting_id`
/// query parameters of the page URL, or their CLI equivalents.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaunchParams {
    pub project_id: Option<String>,
    pub meeting_id: Option<MeetingId>,
}

impl LaunchParams {
    pub fn from_page_url(url: &Url) -> Self {
        let mut params = Self::default();
        for (key, value) in url.query_pairs() {
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "project_id" if params.project_id.is_none() => {
                    params.project_id = Some(value.into_owned())
                }
                "meeting_id" if params.meeting_id.is_none() => {
                    params.meeting_id = Some(MeetingId::new(value.into_owned()))
                }
                _ => {}
            }
        }
        params
    }

    /// Explicit values win over those taken from a page URL.
    pub fn with_overrides(mut self, project_id: Option<String>, meeting_id: Option<String>) -> Self {
        if let Some(project_id) = project_id.filter(|p| !p.is_empty()) {
            self.project_id = Some(project_id);
        }
        if let Some(meeting_id) = meeting_id.filter(|m| !m.is_empty()) {
            self.meeting_id = Some(MeetingId::new(meeting_id));
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    pub launch: LaunchParams,
    pub timings: Timings,
}

impl Config {
    pub fn new(api_base: &str, launch: LaunchParams) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base: parse_api_base(api_base)?,
            launch,
            timings: Timings::default(),
        })
    }
}

pub fn parse_api_base(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl {
        what: "API base URL",
        value: value.to_string(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::OpaqueBase(value.to_string()));
    }
    Ok(url)
}

pub fn parse_page_url(value: &str) -> Result<LaunchParams, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|source| ConfigError::InvalidUrl {
        what: "page URL",
        value: value.to_string(),
        source,
    })?;
    Ok(LaunchParams::from_page_url(&url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_query_params() {
        let params =
            parse_page_url("http://localhost:5000/?project_id=P1&meeting_id=12").unwrap();
        assert_eq!(params.project_id.as_deref(), Some("P1"));
        assert_eq!(params.meeting_id, Some(MeetingId::new("12")));
    }

    #[test]
    fn test_empty_query_values_are_absent() {
        let params = parse_page_url("http://localhost/?project_id=&meeting_id=").unwrap();
        assert_eq!(params, LaunchParams::default());
    }

    #[test]
    fn test_overrides_win() {
        let params = parse_page_url("http://localhost/?project_id=P1")
            .unwrap()
            .with_overrides(Some("P2".into()), None);
        assert_eq!(params.project_id.as_deref(), Some("P2"));
        assert!(params.meeting_id.is_none());
    }

    #[test]
    fn test_api_base_validation() {
        assert!(parse_api_base(DEFAULT_API_BASE).is_ok());
        assert!(matches!(parse_api_base("not a url"), Err(ConfigError::InvalidUrl { .. })));
        assert!(matches!(parse_api_base("mailto:x@y.z"), Err(ConfigError::OpaqueBase(_))));
    }

    #[test]
    fn test_default_timings() {
        let t = Timings::default();
        assert_eq!(t.poll, Duration::from_secs(10));
        assert_eq!(t.refresh, Duration::from_secs(30));
        assert_eq!(t.error, Duration::from_secs(5));
    }
}
