use super::{Card, Prediction, Theme};

/// Shown when the user submits an empty or whitespace-only topic.
pub const VALIDATION_MESSAGE: &str = "Please enter an industry, platform, or niche.";
/// Shown for every request/parse failure; the cause only goes to the logs.
pub const FETCH_FAILED_MESSAGE: &str = "An error occurred while forecasting. Please try again.";
/// Caption under the progress indicator while a request is in flight.
pub const LOADING_CAPTION: &str = "Forecasting the future...";

/// Everything the forecaster view renders from.
///
/// The result area is always in exactly one of four shapes, see [`ResultArea`].
/// `request_id` identifies the latest dispatched request so that late
/// completions from superseded requests can be recognised and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    input_text: String,
    predictions: Option<Vec<Prediction>>,
    is_loading: bool,
    error_message: Option<String>,
    theme: Theme,
    request_id: u64,
}

impl ViewState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn predictions(&self) -> Option<&[Prediction]> {
        self.predictions.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn request_id(&self) -> u64 {
        self.request_id
    }

    /// Trimmed topic, or `None` when there is nothing to submit.
    pub fn submittable_topic(&self) -> Option<&str> {
        let trimmed = self.input_text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input_text.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input_text.pop();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Enter the loading state and return the id of the new request.
    pub fn begin_request(&mut self) -> u64 {
        self.request_id += 1;
        self.is_loading = true;
        self.predictions = None;
        self.error_message = None;
        self.request_id
    }

    pub fn succeed(&mut self, predictions: Vec<Prediction>) {
        self.is_loading = false;
        self.predictions = Some(predictions);
        self.error_message = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.is_loading = false;
        self.predictions = None;
        self.error_message = Some(message.into());
    }

    pub fn result_area(&self) -> ResultArea {
        if self.is_loading {
            ResultArea::Loading {
                caption: LOADING_CAPTION,
            }
        } else if let Some(message) = &self.error_message {
            ResultArea::Failed {
                message: message.clone(),
            }
        } else if let Some(predictions) = &self.predictions {
            ResultArea::Cards(Card::from_predictions(predictions))
        } else {
            ResultArea::Empty
        }
    }
}

/// What the area below the input shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultArea {
    Empty,
    Loading { caption: &'static str },
    Failed { message: String },
    Cards(Vec<Card>),
}

impl ResultArea {
    pub fn cards(&self) -> &[Card] {
        match self {
            ResultArea::Cards(cards) => cards,
            _ => &[],
        }
    }
}
