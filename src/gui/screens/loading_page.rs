use iced::{
    Element,
    widget::{container, text},
};

use crate::gui::Message;

pub fn view<'a>() -> Element<'a, Message> {
    container(text("Loading..."))
        .center_x(iced::Length::Fill)
        .center_y(iced::Length::Fill)
        .into()
}
