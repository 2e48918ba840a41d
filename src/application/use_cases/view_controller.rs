//! The forecaster's state machine.
//!
//! `Idle -> Loading -> (Success | Failed)`, with the theme as an orthogonal
//! flag. [`transition`] is pure: side effects (the network request, applying
//! the theme to the screen) come back as [`Effect`] values for the caller to
//! run, and their outcomes re-enter as [`Message`]s.

use tracing::debug;

use crate::domain::{
    DomainError, Prediction, Theme, ViewState, FETCH_FAILED_MESSAGE, VALIDATION_MESSAGE,
};

#[derive(Debug)]
pub enum Message {
    Insert(char),
    Backspace,
    ClearInput,
    SetInput(String),
    Submit,
    FetchCompleted {
        request_id: u64,
        outcome: Result<Vec<Prediction>, DomainError>,
    },
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch { request_id: u64, topic: String },
    ApplyTheme(Theme),
}

pub fn transition(state: &ViewState, message: Message) -> (ViewState, Vec<Effect>) {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match message {
        Message::Insert(_) | Message::Backspace | Message::ClearInput | Message::SetInput(_)
            if state.is_loading() =>
        {
            // The input field is disabled while a request is in flight.
        }
        Message::Insert(c) => next.push_char(c),
        Message::Backspace => next.pop_char(),
        Message::ClearInput => next.set_input(String::new()),
        Message::SetInput(text) => next.set_input(text),

        Message::Submit if state.is_loading() => {
            debug!("Ignoring submit while request {} is in flight", state.request_id());
        }
        Message::Submit => match state.submittable_topic().map(str::to_string) {
            Some(topic) => {
                let request_id = next.begin_request();
                effects.push(Effect::Fetch { request_id, topic });
            }
            None => next.fail(VALIDATION_MESSAGE),
        },

        Message::FetchCompleted { request_id, .. }
            if !state.is_loading() || request_id != state.request_id() =>
        {
            debug!(
                "Discarding stale completion for request {} (current {})",
                request_id,
                state.request_id()
            );
        }
        Message::FetchCompleted { outcome, .. } => match outcome {
            Ok(predictions) => next.succeed(predictions),
            Err(_) => next.fail(FETCH_FAILED_MESSAGE),
        },

        Message::ToggleTheme => {
            let theme = state.theme().toggled();
            next.set_theme(theme);
            effects.push(Effect::ApplyTheme(theme));
        }
    }

    (next, effects)
}

/// Owns the current [`ViewState`] and advances it through [`transition`].
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    pub fn new(theme: Theme) -> Self {
        Self {
            state: ViewState::new(theme),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Effects to run once before the first render.
    pub fn initial_effects(&self) -> Vec<Effect> {
        vec![Effect::ApplyTheme(self.state.theme())]
    }

    pub fn dispatch(&mut self, message: Message) -> Vec<Effect> {
        let (next, effects) = transition(&self.state, message);
        self.state = next;
        effects
    }
}
