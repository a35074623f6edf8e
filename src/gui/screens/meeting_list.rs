use iced::{
    Color, Element, Length,
    widget::{Column, button, column, row, scrollable, text},
};

use crate::core::Event;
use crate::gui::Message;
use crate::models::{Filter, MeetingStatus};
use crate::view::{MeetingCard, MeetingListView};

fn status_color(status: MeetingStatus) -> Color {
    match status {
        MeetingStatus::Completed => Color::from_rgb8(0x2e, 0xa0, 0x43),
        MeetingStatus::Pending => Color::from_rgb8(0xd2, 0x99, 0x22),
    }
}

fn card<'a>(card: MeetingCard) -> Element<'a, Message> {
    let content = column![
        row![
            text(card.title).size(18).width(Length::Fill),
            text(card.status.label()).color(status_color(card.status)),
        ],
        text(format!("Date: {}", card.date)),
        text(format!("URL: {}", card.url)),
    ]
    .spacing(4);

    button(content)
        .on_press(Message::Core(Event::OpenMeeting(card.id)))
        .style(button::secondary)
        .width(Length::Fill)
        .padding(12)
        .into()
}

pub fn view<'a>(view: MeetingListView) -> Element<'a, Message> {
    let summary = row![
        text(format!("Total Meetings: {}", view.summary.total)),
        text(format!("Completed: {}", view.summary.completed))
            .color(status_color(MeetingStatus::Completed)),
        text(format!("Pending: {}", view.summary.pending))
            .color(status_color(MeetingStatus::Pending)),
    ]
    .spacing(20);

    let active = view.filter;
    let filters = row(Filter::ALL.into_iter().map(|filter| -> Element<'a, Message> {
        let style = if filter == active {
            button::primary
        } else {
            button::secondary
        };
        button(filter.label())
            .on_press(Message::Core(Event::SetFilter(filter)))
            .style(style)
            .into()
    }))
    .spacing(8);

    let empty = view.empty_message();
    let cards: Element<'a, Message> = match empty {
        Some(message) => text(message).into(),
        None => Column::with_children(view.cards.into_iter().map(card))
            .spacing(10)
            .into(),
    };

    column![
        row![
            text(format!("Meetings for project {}", view.project_id))
                .size(24)
                .width(Length::Fill),
            button("Start new").on_press(Message::Core(Event::StartNew)),
        ],
        summary,
        filters,
        scrollable(cards).height(Length::Fill),
    ]
    .spacing(12)
    .padding(20)
    .into()
}
