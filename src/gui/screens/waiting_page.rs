use iced::{
    Element,
    widget::{button, column, row, text},
};

use crate::core::Event;
use crate::gui::Message;
use crate::view::WaitingView;

pub fn view<'a>(view: WaitingView) -> Element<'a, Message> {
    column![
        text("Transcription in progress").size(24),
        text(format!("Meeting: {}", view.meeting_url)),
        text(format!("Project: {}", view.project_id)),
        text("The transcript appears here once the meeting has been processed. Checking every few seconds."),
        row![
            button("Check status").on_press(Message::Core(Event::CheckStatus)),
            button("Back to list")
                .on_press(Message::Core(Event::BackToList))
                .style(button::secondary),
            button("Start new")
                .on_press(Message::Core(Event::StartNew))
                .style(button::secondary),
        ]
        .spacing(12),
    ]
    .spacing(12)
    .padding(20)
    .into()
}
