mod app;
mod message;
mod screens;
mod state;
mod widgets;

pub use app::MeetscribeApp;
pub use message::Message;
pub use state::{AppState, PanelState};

use crate::config::Config;

/// Open the client window and block until it is closed.
pub fn run(config: Config) -> iced::Result {
    iced::application(
        move || MeetscribeApp::boot(config.clone()),
        MeetscribeApp::update,
        MeetscribeApp::view,
    )
    .title(MeetscribeApp::title)
    .subscription(MeetscribeApp::subscription)
    .run()
}
