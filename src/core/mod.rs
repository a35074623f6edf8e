pub mod api;
pub mod controller;
pub mod poll;
pub mod state;

pub use api::{HttpApi, MeetingApi, RequestError};
pub use controller::{Call, Controller, Effect, Event, RefreshReason, execute};
pub use poll::{PollState, PollTicket, Poller};
pub use state::{Notice, ViewState};
