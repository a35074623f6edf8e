pub mod input_form;
pub mod loading_page;
pub mod meeting_list;
pub mod transcript_page;
pub mod waiting_page;

use iced::Element;

use crate::gui::{AppState, Message};
use crate::models::Screen;
use crate::view::{MeetingListView, TranscriptView, WaitingView};

/// Main content for whichever screen the controller has active.
pub fn view(state: &AppState) -> Element<'_, Message> {
    let view_state = state.controller.state();
    match view_state.screen() {
        Screen::Loading => loading_page::view(),
        Screen::InputForm => state.form.view(),
        Screen::Waiting => waiting_page::view(WaitingView::from_state(view_state)),
        Screen::Transcript => transcript_page::view(TranscriptView::from_state(view_state)),
        Screen::MeetingList => meeting_list::view(MeetingListView::from_state(view_state)),
    }
}
