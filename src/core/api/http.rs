use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use super::{
    CREATE_MEETING_FAILED, GET_MEETING_FAILED, GET_PROJECT_FAILED, LIST_MEETINGS_FAILED,
    MeetingApi, RequestError,
};
use crate::models::{Meeting, NewMeeting, Project};

/// `MeetingApi` over the backend's REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base: Url,
}

impl HttpApi {
    pub fn new(base: Url) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }

    /// Append percent-encoded path segments to the base URL, keeping any
    /// path prefix the base carries.
    fn endpoint(&self, segments: &[&str], fallback: &str) -> Result<Url, RequestError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| RequestError::new(None, format!("{fallback}: invalid API base URL {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> Result<T, RequestError> {
        let response = request
            .send()
            .await
            .map_err(|e| RequestError::transport(fallback, &e))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::from_response(status.as_u16(), &body, fallback));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| RequestError::transport(fallback, &e))
    }
}

impl MeetingApi for HttpApi {
    async fn create_meeting(
        &self,
        project_id: &str,
        meeting: &NewMeeting,
    ) -> Result<Meeting, RequestError> {
        let url = self.endpoint(&["projects", project_id, "meetings"], CREATE_MEETING_FAILED)?;
        tracing::debug!(%url, "creating meeting");
        self.send(self.client.post(url).json(meeting), CREATE_MEETING_FAILED)
            .await
    }

    async fn get_meeting(&self, project_id: &str, meeting_id: &str) -> Result<Meeting, RequestError> {
        let url = self.endpoint(
            &["projects", project_id, "meetings", meeting_id],
            GET_MEETING_FAILED,
        )?;
        tracing::debug!(%url, "fetching meeting");
        self.send(self.client.get(url), GET_MEETING_FAILED).await
    }

    async fn list_meetings(&self, project_id: &str) -> Result<Vec<Meeting>, RequestError> {
        let url = self.endpoint(&["projects", project_id, "meetings"], LIST_MEETINGS_FAILED)?;
        tracing::debug!(%url, "listing meetings");
        self.send(self.client.get(url), LIST_MEETINGS_FAILED).await
    }

    async fn get_project(&self, project_id: &str) -> Result<Project, RequestError> {
        let url = self.endpoint(&["projects", project_id], GET_PROJECT_FAILED)?;
        tracing::debug!(%url, "fetching project");
        self.send(self.client.get(url), GET_PROJECT_FAILED).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpApi {
        HttpApi::new(Url::parse(base).unwrap())
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let url = api("http://localhost:5000").endpoint(&["projects", "P1", "meetings"], "x").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/projects/P1/meetings");
    }

    #[test]
    fn test_endpoint_keeps_prefix_and_encodes() {
        let url = api("https://example.com/api/").endpoint(&["projects", "a b/c"], "x").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/projects/a%20b%2Fc");
    }

    #[test]
    fn test_endpoint_rejects_opaque_base() {
        let err = api("mailto:someone@example.com").endpoint(&["projects"], "Failed").unwrap_err();
        assert!(err.message.starts_with("Failed"));
    }
}
