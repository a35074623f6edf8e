//! Terminal driver for the controller.
//!
//! Runs the same state machine as the GUI with tokio timers, printing each
//! screen as plain text. It stops once it reaches a screen that would need
//! further user input: the transcript, the meeting list, or the input form
//! (after submitting `--submit` once, if given).

use std::io::Write;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at};

use crate::config::{LaunchParams, Timings};
use crate::core::{Controller, Effect, Event, MeetingApi, execute};
use crate::models::{Filter, Screen};
use crate::view::{
    Block, MeetingListView, ProjectDetailsView, TranscriptBody, TranscriptView, WaitingView,
};

#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    /// Meet URL to submit when the input form comes up.
    pub submit: Option<String>,
    pub title: Option<String>,
    pub filter: Option<Filter>,
}

/// Screen the driver stopped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Transcript,
    MeetingList,
    InputForm,
}

struct Driver<A: MeetingApi> {
    api: Arc<A>,
    tx: mpsc::UnboundedSender<Event>,
}

impl<A: MeetingApi> Driver<A> {
    fn dispatch(&self, effects: Vec<Effect>) {
        for effect in effects {
            let tx = self.tx.clone();
            match effect {
                Effect::Call(call) => {
                    let api = self.api.clone();
                    tokio::spawn(async move {
                        let _ = tx.send(execute(&*api, call).await);
                    });
                }
                Effect::ExpireError { id, after } => {
                    tokio::spawn(async move {
                        tokio::time::sleep(after).await;
                        let _ = tx.send(Event::ErrorExpired(id));
                    });
                }
                Effect::ExpireNotification { id, after } => {
                    tokio::spawn(async move {
                        tokio::time::sleep(after).await;
                        let _ = tx.send(Event::NotificationExpired(id));
                    });
                }
            }
        }
    }
}

pub async fn run<A: MeetingApi, W: Write>(
    api: Arc<A>,
    launch: LaunchParams,
    timings: Timings,
    options: HeadlessOptions,
    out: &mut W,
) -> anyhow::Result<Outcome> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let driver = Driver { api, tx };
    let mut controller = Controller::new(timings);
    let mut submit = options.submit;

    let start = Instant::now();
    let mut poll = interval_at(start + timings.poll, timings.poll);
    let mut refresh = interval_at(start + timings.refresh, timings.refresh);

    let mut last_screen = None;
    let mut last_error = None;
    let mut last_notification = None;

    driver.dispatch(controller.handle(Event::Boot(launch)));
    if let Some(filter) = options.filter {
        controller.handle(Event::SetFilter(filter));
    }

    loop {
        let state = controller.state();
        if let Some(error) = state.error.as_ref().filter(|e| Some(e.id) != last_error) {
            writeln!(out, "error: {}", error.text)?;
            last_error = Some(error.id);
        }
        if let Some(note) = state.notification.as_ref().filter(|n| Some(n.id) != last_notification) {
            writeln!(out, "{}", note.text)?;
            last_notification = Some(note.id);
        }

        let screen = state.screen();
        if last_screen != Some(screen) {
            last_screen = Some(screen);
            match screen {
                Screen::Loading => {}
                Screen::Waiting => {
                    let view = WaitingView::from_state(state);
                    writeln!(
                        out,
                        "Waiting for transcript of {} (project {})...",
                        view.meeting_url, view.project_id
                    )?;
                }
                Screen::Transcript => {
                    write_project(out, &ProjectDetailsView::from_project(state.project.as_ref()))?;
                    write_transcript(out, &TranscriptView::from_state(state))?;
                    return Ok(Outcome::Transcript);
                }
                Screen::MeetingList => {
                    write_project(out, &ProjectDetailsView::from_project(state.project.as_ref()))?;
                    write_meeting_list(out, &MeetingListView::from_state(state))?;
                    return Ok(Outcome::MeetingList);
                }
                Screen::InputForm => match submit.take() {
                    Some(meeting_url) => {
                        let title = options.title.clone().unwrap_or_default();
                        driver.dispatch(controller.handle(Event::Submit { meeting_url, title }));
                        // A rejected submit stays on the form; re-render it.
                        last_screen = None;
                        continue;
                    }
                    None => {
                        writeln!(out, "Nothing to show. Pass --submit <meet url> to start a transcription.")?;
                        return Ok(Outcome::InputForm);
                    }
                },
            }
        }

        let event = tokio::select! {
            Some(event) = rx.recv() => event,
            _ = poll.tick() => Event::PollTick,
            _ = refresh.tick() => Event::RefreshTick,
        };
        driver.dispatch(controller.handle(event));
    }
}

fn write_project<W: Write>(out: &mut W, view: &ProjectDetailsView) -> std::io::Result<()> {
    let ProjectDetailsView::Loaded(sections) = view else {
        return Ok(());
    };
    for section in sections {
        writeln!(out, "== {} ==", section.section.heading())?;
        for block in &section.blocks {
            match block {
                Block::Heading { text, .. } => writeln!(out, "{text}")?,
                Block::Paragraph(text) => writeln!(out, "{text}")?,
                Block::Item { depth, marker, text } => {
                    writeln!(out, "{}{marker} {text}", "  ".repeat(depth.saturating_sub(1)))?
                }
                Block::Code(code) => writeln!(out, "{code}")?,
                Block::Rule => writeln!(out, "----")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_transcript<W: Write>(out: &mut W, view: &TranscriptView) -> std::io::Result<()> {
    writeln!(out, "Meeting: {}", view.meeting_url)?;
    writeln!(out, "Project: {}", view.project_id)?;
    writeln!(out, "Date: {}", view.date)?;
    writeln!(out)?;
    match &view.body {
        TranscriptBody::Placeholder(text) => writeln!(out, "{text}")?,
        TranscriptBody::Lines(lines) => {
            for line in lines {
                match line.speaker_label() {
                    Some(speaker) => writeln!(out, "{speaker} {}", line.text())?,
                    None => writeln!(out, "{}", line.text())?,
                }
            }
        }
    }
    Ok(())
}

fn write_meeting_list<W: Write>(out: &mut W, view: &MeetingListView) -> std::io::Result<()> {
    writeln!(out, "Project {}", view.project_id)?;
    writeln!(
        out,
        "Total: {}  Completed: {}  Pending: {}  (showing {})",
        view.summary.total, view.summary.completed, view.summary.pending, view.filter
    )?;
    if let Some(message) = view.empty_message() {
        writeln!(out, "{message}")?;
    }
    for card in &view.cards {
        writeln!(out, "[{}] {} ({})", card.status.label(), card.title, card.id)?;
        writeln!(out, "    {}  {}", card.date, card.url)?;
    }
    Ok(())
}
