use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;

use crate::application::{Effect, Message, ViewController};
use crate::cli::OutputFormat;
use crate::connector::tui::render::{APP_TITLE, FOOTER};
use crate::domain::{Card, ResultArea, LOADING_CAPTION};

use super::super::Container;

/// Runs one forecast through the same state machine as the interactive view
/// and prints the outcome.
pub struct PredictController<'a> {
    container: &'a Container,
}

impl<'a> PredictController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn predict(&self, topic: String, format: OutputFormat) -> Result<String> {
        let use_case = self.container.fetch_use_case();
        let mut controller = ViewController::new(self.container.theme());
        controller.dispatch(Message::SetInput(topic));

        for effect in controller.dispatch(Message::Submit) {
            if let Effect::Fetch { request_id, topic } = effect {
                let spinner = loading_spinner();
                let outcome = use_case.execute(&topic).await;
                spinner.finish_and_clear();
                controller.dispatch(Message::FetchCompleted {
                    request_id,
                    outcome,
                });
            }
        }

        match controller.state().result_area() {
            ResultArea::Cards(cards) => match format {
                OutputFormat::Text => Ok(format_cards(
                    controller.state().input_text().trim(),
                    &cards,
                )),
                OutputFormat::Json => {
                    let value = json!({
                        "topic": controller.state().input_text().trim(),
                        "predictions": controller.state().predictions().unwrap_or_default(),
                    });
                    Ok(serde_json::to_string_pretty(&value)?)
                }
            },
            ResultArea::Failed { message } => Err(anyhow!(message)),
            other => bail!("Forecast did not complete: {:?}", other),
        }
    }
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(LOADING_CAPTION);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn format_cards(topic: &str, cards: &[Card]) -> String {
    let mut output = format!("{}: {}\n\n", APP_TITLE, topic);

    for card in cards {
        output.push_str(&format!("{}. {}\n", card.ordinal(), card.title()));
        for line in card.description().lines() {
            output.push_str(&format!("   {}\n", line));
        }
        output.push('\n');
    }

    output.push_str(FOOTER);
    output
}
