use std::sync::Arc;

use iced::{Element, Subscription, Task, time};

use super::{AppState, Message, screens, widgets};
use crate::config::{Config, Timings};
use crate::core::{Effect, Event, HttpApi, execute};
use crate::view::ProjectDetailsView;

pub struct MeetscribeApp {
    api: Arc<HttpApi>,
    timings: Timings,
    state: AppState,
}

impl MeetscribeApp {
    pub fn boot(config: Config) -> (Self, Task<Message>) {
        let mut app = Self {
            api: Arc::new(HttpApi::new(config.api_base)),
            timings: config.timings,
            state: AppState::new(config.timings),
        };
        let task = app.apply(Event::Boot(config.launch));
        (app, task)
    }

    pub fn title(&self) -> String {
        match &self.state.controller.state().project_id {
            Some(project_id) => format!("Meetscribe - {project_id}"),
            None => "Meetscribe - Meeting Transcripts".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Core(event) => self.apply(event),
            Message::Form(msg) => {
                self.state.form.update(msg);
                Task::none()
            }
            Message::SubmitForm => {
                let submission = self.state.form.submission();
                self.apply(submission)
            }
            Message::ToggleSection(section) => {
                self.state.panel.toggle(section);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let view_state = self.state.controller.state();
        widgets::layout(
            widgets::project_panel(
                ProjectDetailsView::from_project(view_state.project.as_ref()),
                &self.state.panel,
            ),
            screens::view(&self.state),
            widgets::notices(view_state.error.as_ref(), view_state.notification.as_ref()),
            widgets::Step::for_screen(view_state.screen()),
        )
    }

    /// The list refresh tick runs for the whole session; the poll tick only
    /// while a meeting is being waited on.
    pub fn subscription(&self) -> Subscription<Message> {
        let refresh = time::every(self.timings.refresh).map(|_| Message::Core(Event::RefreshTick));
        if self.state.controller.state().poller().is_polling() {
            let poll = time::every(self.timings.poll).map(|_| Message::Core(Event::PollTick));
            Subscription::batch([refresh, poll])
        } else {
            refresh
        }
    }

    fn apply(&mut self, event: Event) -> Task<Message> {
        let effects = self.state.controller.handle(event);
        self.state.sync_screen();
        Task::batch(effects.into_iter().map(|effect| self.perform(effect)))
    }

    fn perform(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Call(call) => {
                let api = self.api.clone();
                Task::perform(async move { execute(&*api, call).await }, Message::Core)
            }
            Effect::ExpireError { id, after } => Task::perform(tokio::time::sleep(after), move |_| {
                Message::Core(Event::ErrorExpired(id))
            }),
            Effect::ExpireNotification { id, after } => {
                Task::perform(tokio::time::sleep(after), move |_| {
                    Message::Core(Event::NotificationExpired(id))
                })
            }
        }
    }
}
