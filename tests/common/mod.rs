#![allow(dead_code)]

pub mod fixtures;

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use meetscribe::core::{Effect, Event, execute};
use meetscribe::models::NewMeeting;
use meetscribe::{Controller, Meeting, MeetingApi, MeetingId, Project, RequestError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

#[derive(Default)]
struct FakeState {
    project: Option<Project>,
    meetings: Vec<Meeting>,
    /// Meeting id -> (polls before the transcript lands, transcript text).
    pending: HashMap<MeetingId, (usize, String)>,
    fetches: HashMap<MeetingId, usize>,
    calls: Vec<String>,
    next_id: u64,
}

/// In-memory backend. Records every call as `op:arg`.
#[derive(Default)]
pub struct FakeApi {
    inner: Mutex<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.inner.lock().unwrap().next_id = 100;
        api
    }

    pub fn with_project(self, project: Project) -> Self {
        self.inner.lock().unwrap().project = Some(project);
        self
    }

    pub fn with_meetings(self, meetings: Vec<Meeting>) -> Self {
        self.inner.lock().unwrap().meetings = meetings;
        self
    }

    /// Fill in `text` as the transcript of `id` on its `fetches`-th fetch.
    pub fn transcribe_after(self, id: &str, fetches: usize, text: &str) -> Self {
        self.inner
            .lock()
            .unwrap()
            .pending
            .insert(MeetingId::new(id), (fetches, text.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls().iter().filter(|c| c.split(':').next() == Some(op)).count()
    }
}

impl MeetingApi for FakeApi {
    async fn create_meeting(
        &self,
        project_id: &str,
        meeting: &NewMeeting,
    ) -> Result<Meeting, RequestError> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(format!("create_meeting:{project_id}"));
        let id = MeetingId::new(state.next_id.to_string());
        state.next_id += 1;
        let created = Meeting {
            id,
            project_id: project_id.to_string(),
            meeting_url: meeting.google_meet_url.clone(),
            meeting_datetime: None,
            transcription: None,
            meeting_id: None,
        };
        state.meetings.push(created.clone());
        Ok(created)
    }

    async fn get_meeting(&self, project_id: &str, meeting_id: &str) -> Result<Meeting, RequestError> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(format!("get_meeting:{meeting_id}"));
        let id = MeetingId::new(meeting_id);
        let fetches = {
            let n = state.fetches.entry(id.clone()).or_default();
            *n += 1;
            *n
        };
        if let Some((after, text)) = state.pending.get(&id).cloned() {
            if fetches >= after {
                if let Some(m) = state.meetings.iter_mut().find(|m| m.id == id) {
                    m.transcription = Some(text);
                }
            }
        }
        state
            .meetings
            .iter()
            .find(|m| m.id == id && m.project_id == project_id)
            .cloned()
            .ok_or_else(|| RequestError::new(Some(404), "Meeting not found"))
    }

    async fn list_meetings(&self, project_id: &str) -> Result<Vec<Meeting>, RequestError> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(format!("list_meetings:{project_id}"));
        Ok(state
            .meetings
            .iter()
            .filter(|m| m.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn get_project(&self, project_id: &str) -> Result<Project, RequestError> {
        let mut state = self.inner.lock().unwrap();
        state.calls.push(format!("get_project:{project_id}"));
        state
            .project
            .clone()
            .filter(|p| p.id == project_id)
            .ok_or_else(|| RequestError::new(Some(404), "Failed to retrieve project data"))
    }
}

/// Feed `event` to the controller and run every call it asks for until the
/// queue drains. Expiry timers are ignored.
pub async fn pump<A: MeetingApi>(controller: &mut Controller, api: &A, event: Event) {
    let mut queue = VecDeque::from([event]);
    while let Some(event) = queue.pop_front() {
        for effect in controller.handle(event) {
            if let Effect::Call(call) = effect {
                queue.push_back(execute(api, call).await);
            }
        }
    }
}

/// A request as seen by `serve`.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Answer one HTTP request per entry of `responses`, in order, then stop.
pub async fn serve(responses: Vec<(u16, String)>) -> (Url, Arc<Mutex<Vec<Recorded>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let log = recorded.clone();

    tokio::spawn(async move {
        for (status, body) in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            let (head_end, content_length) = loop {
                let n = socket.read(&mut chunk).await.unwrap_or(0);
                if n == 0 {
                    return;
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    let head = String::from_utf8_lossy(&buf[..pos]).to_ascii_lowercase();
                    let length = head
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    break (pos + 4, length);
                }
            };
            while buf.len() < head_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
            let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
            log.lock().unwrap().push(Recorded {
                method: request_line.next().unwrap_or_default().to_string(),
                path: request_line.next().unwrap_or_default().to_string(),
                body: String::from_utf8_lossy(&buf[head_end..]).to_string(),
            });

            let response = format!(
                "HTTP/1.1 {status} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    let base = Url::parse(&format!("http://{addr}")).unwrap();
    (base, recorded)
}
