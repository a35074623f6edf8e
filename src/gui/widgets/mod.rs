use iced::{
    Color, Element, Font, Length, Theme, border,
    widget::{Column, button, column, container, container::Style, row, scrollable, text},
};
use iced_widget::container::bordered_box;

use crate::core::{Event, Notice};
use crate::gui::{Message, state::PanelState};
use crate::models::Screen;
use crate::view::{Block, ProjectDetailsView, SectionView};

/// Where the user is in the submit → wait → read flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Submit,
    Wait,
    Read,
}

impl Step {
    pub fn for_screen(screen: Screen) -> Option<Self> {
        match screen {
            Screen::InputForm => Some(Step::Submit),
            Screen::Waiting => Some(Step::Wait),
            Screen::Transcript => Some(Step::Read),
            Screen::Loading | Screen::MeetingList => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Step::Submit => "Submit meeting",
            Step::Wait => "Transcribing",
            Step::Read => "Transcript",
        }
    }

    fn style(current: Option<Self>, step: Self) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            let style = bordered_box(theme).border(border::width(2));
            // steps already passed are grayed out
            if current.is_some_and(|current| current > step) {
                let mut color_rgba = theme.palette().background.into_rgba8();
                color_rgba[0] /= 2;
                color_rgba[1] /= 2;
                color_rgba[2] /= 2;
                style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
            } else {
                style.background(theme.palette().background)
            }
        }
    }
}

fn block<'a>(block: Block) -> Element<'a, Message> {
    match block {
        Block::Heading { level, text: heading } => {
            text(heading).size(match level { 1 => 20, 2 => 18, _ => 16 }).into()
        }
        Block::Paragraph(paragraph) => text(paragraph).into(),
        Block::Item { depth, marker, text: item } => text(format!(
            "{}{marker} {item}",
            "    ".repeat(depth.saturating_sub(1))
        ))
        .into(),
        Block::Code(code) => text(code).font(Font::MONOSPACE).into(),
        Block::Rule => text("―――").into(),
    }
}

fn section<'a>(view: SectionView, collapsed: bool) -> Element<'a, Message> {
    let header = row![
        text(view.section.heading()).size(18).width(Length::Fill),
        button(if collapsed { "Show" } else { "Hide" })
            .on_press(Message::ToggleSection(view.section))
            .style(button::text),
    ];
    if collapsed {
        return header.into();
    }
    column![
        header,
        Column::with_children(view.blocks.into_iter().map(block)).spacing(6),
    ]
    .spacing(8)
    .into()
}

/// Requirements and follow-up questions of the current project.
pub fn project_panel<'a>(view: ProjectDetailsView, panel: &PanelState) -> Element<'a, Message> {
    match view {
        ProjectDetailsView::Loading => text("Loading project details...").into(),
        ProjectDetailsView::Loaded(sections) => scrollable(
            Column::with_children(sections.into_iter().map(|view| {
                let collapsed = panel.is_collapsed(view.section);
                section(view, collapsed)
            }))
            .spacing(16),
        )
        .into(),
    }
}

/// Error banner and notification toast, if any are showing.
pub fn notices<'a>(error: Option<&Notice>, notification: Option<&Notice>) -> Element<'a, Message> {
    let mut bar = Column::new().spacing(6);
    if let Some(error) = error {
        bar = bar.push(
            container(
                row![
                    text(error.text.clone())
                        .color(Color::from_rgb8(0xf8, 0x51, 0x49))
                        .width(Length::Fill),
                    button("Dismiss")
                        .on_press(Message::Core(Event::DismissError))
                        .style(button::text),
                ]
                .spacing(10),
            )
            .style(bordered_box)
            .padding(8)
            .width(Length::Fill),
        );
    }
    if let Some(notification) = notification {
        bar = bar.push(
            container(text(notification.text.clone()))
                .style(bordered_box)
                .padding(8)
                .width(Length::Fill),
        );
    }
    bar.into()
}

pub fn layout<'a>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
    banner: impl Into<Element<'a, Message>>,
    step: Option<Step>,
) -> Element<'a, Message> {
    let steps = row([Step::Submit, Step::Wait, Step::Read].into_iter().map(
        |s| -> Element<'a, Message> {
            container(text(s.label()))
                .style(Step::style(step, s))
                .padding(10)
                .into()
        },
    ))
    .spacing(6);

    container(row![
        container(sidebar.into())
            .padding(16)
            .width(Length::FillPortion(2))
            .height(Length::Fill),
        container(column![steps, banner.into(), main_content.into()].spacing(10))
            .padding(10)
            .width(Length::FillPortion(5)),
    ])
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order_follows_flow() {
        assert!(Step::Submit < Step::Wait && Step::Wait < Step::Read);
        assert_eq!(Step::for_screen(Screen::Waiting), Some(Step::Wait));
        assert_eq!(Step::for_screen(Screen::MeetingList), None);
    }
}
