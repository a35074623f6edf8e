pub mod config;
pub mod core;
pub mod headless;
pub mod models;
pub mod view;

pub use config::{Config, LaunchParams, Timings};
pub use crate::core::{Controller, Event, HttpApi, MeetingApi, RequestError};
pub use models::{Filter, Meeting, MeetingId, Project, Screen};

#[cfg(feature = "gui")]
pub mod gui;
