mod error;
mod http;

use crate::models::{Meeting, NewMeeting, Project};

pub use error::RequestError;
pub use http::HttpApi;

pub const CREATE_MEETING_FAILED: &str = "Failed to create meeting";
pub const GET_MEETING_FAILED: &str = "Failed to retrieve meeting";
pub const LIST_MEETINGS_FAILED: &str = "Failed to retrieve meetings for project";
pub const GET_PROJECT_FAILED: &str = "Failed to retrieve project details";

/// The four backend calls the client makes. Only `create_meeting` mutates.
pub trait MeetingApi: Send + Sync + 'static {
    fn create_meeting(
        &self,
        project_id: &str,
        meeting: &NewMeeting,
    ) -> impl Future<Output = Result<Meeting, RequestError>> + Send;

    fn get_meeting(
        &self,
        project_id: &str,
        meeting_id: &str,
    ) -> impl Future<Output = Result<Meeting, RequestError>> + Send;

    fn list_meetings(
        &self,
        project_id: &str,
    ) -> impl Future<Output = Result<Vec<Meeting>, RequestError>> + Send;

    fn get_project(&self, project_id: &str)
    -> impl Future<Output = Result<Project, RequestError>> + Send;
}
