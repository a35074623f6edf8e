use iced::{
    Element,
    widget::{button, column, text, text_input},
};

use crate::core::Event;
use crate::gui::Message;

/// Text typed into the submission form. Kept across screen changes so a
/// rejected submission can be corrected.
#[derive(Debug, Clone, Default)]
pub struct InputForm {
    pub meeting_url: String,
    pub title: String,
}

#[derive(Debug, Clone)]
pub enum FormMessage {
    UrlChanged(String),
    TitleChanged(String),
}

impl InputForm {
    pub fn update(&mut self, message: FormMessage) {
        match message {
            FormMessage::UrlChanged(url) => self.meeting_url = url,
            FormMessage::TitleChanged(title) => self.title = title,
        }
    }

    pub fn submission(&self) -> Event {
        Event::Submit {
            meeting_url: self.meeting_url.clone(),
            title: self.title.clone(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![
            text("Start a meeting transcription").size(24),
            text("Google Meet URL"),
            text_input("https://meet.google.com/abc-defg-hij", &self.meeting_url)
                .on_input(|url| Message::Form(FormMessage::UrlChanged(url)))
                .on_submit(Message::SubmitForm)
                .padding(8),
            text("Meeting title (optional)"),
            text_input("Weekly sync", &self.title)
                .on_input(|title| Message::Form(FormMessage::TitleChanged(title)))
                .on_submit(Message::SubmitForm)
                .padding(8),
            button("Start transcription").on_press(Message::SubmitForm),
        ]
        .spacing(12)
        .padding(20)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_carries_raw_input() {
        let mut form = InputForm::default();
        form.update(FormMessage::UrlChanged(" https://meet.google.com/abc ".into()));
        form.update(FormMessage::TitleChanged("Kickoff".into()));
        match form.submission() {
            Event::Submit { meeting_url, title } => {
                assert_eq!(meeting_url, " https://meet.google.com/abc ");
                assert_eq!(title, "Kickoff");
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
}
