use iced::{
    Color, Element, Length,
    widget::{Column, button, column, row, scrollable, text},
};

use crate::core::Event;
use crate::gui::Message;
use crate::view::{TranscriptBody, TranscriptView};

fn speaker_color() -> Color {
    Color::from_rgb(0.35, 0.55, 0.95)
}

pub fn view<'a>(view: TranscriptView) -> Element<'a, Message> {
    let body: Element<'a, Message> = match view.body {
        TranscriptBody::Placeholder(placeholder) => text(placeholder).into(),
        TranscriptBody::Lines(lines) => Column::with_children(lines.into_iter().map(|line| -> Element<'a, Message> {
            match line.speaker_label() {
                Some(speaker) => row![text(speaker).color(speaker_color()), text(line.text().to_string())]
                    .spacing(6)
                    .into(),
                None => text(line.text().to_string()).into(),
            }
        }))
        .spacing(6)
        .into(),
    };

    column![
        text("Transcript").size(24),
        text(format!("Meeting: {}", view.meeting_url)),
        text(format!("Project: {}", view.project_id)),
        text(format!("Date: {}", view.date)),
        scrollable(body).height(Length::Fill),
        row![
            button("Back to list").on_press(Message::Core(Event::BackToList)),
            button("New transcription")
                .on_press(Message::Core(Event::StartNew))
                .style(button::secondary),
        ]
        .spacing(12),
    ]
    .spacing(12)
    .padding(20)
    .into()
}
