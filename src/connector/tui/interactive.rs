use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info};

use super::keys::{key_action, KeyAction};
use super::palette::TerminalSurface;
use super::render;
use crate::application::{Effect, FetchPredictionsUseCase, Message, ThemeSink, ViewController};
use crate::domain::Theme;

const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Runs [`Effect`]s for the interactive view.
///
/// Fetches are spawned onto the runtime and report back through `tx`, so the
/// UI keeps redrawing while a request is in flight.
pub struct EffectRunner {
    use_case: Arc<FetchPredictionsUseCase>,
    tx: mpsc::UnboundedSender<Message>,
}

impl EffectRunner {
    pub fn new(use_case: Arc<FetchPredictionsUseCase>, tx: mpsc::UnboundedSender<Message>) -> Self {
        Self { use_case, tx }
    }

    pub fn run(&self, effects: Vec<Effect>, sink: &mut dyn ThemeSink) {
        for effect in effects {
            match effect {
                Effect::Fetch { request_id, topic } => {
                    debug!("Dispatching request {} for {}", request_id, topic);
                    let use_case = Arc::clone(&self.use_case);
                    let tx = self.tx.clone();
                    tokio::spawn(async move {
                        let outcome = use_case.execute(&topic).await;
                        // The receiver is gone once the UI has quit.
                        let _ = tx.send(Message::FetchCompleted {
                            request_id,
                            outcome,
                        });
                    });
                }
                Effect::ApplyTheme(theme) => sink.apply_theme(theme),
            }
        }
    }
}

/// Puts the terminal back into cooked mode on the main screen when dropped,
/// including when the event loop returns early or panics.
pub struct TerminalGuard {
    restore: Option<Box<dyn FnOnce() + Send>>,
}

impl TerminalGuard {
    /// Enable raw mode and switch to the alternate screen.
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self::with_restore(restore_terminal);
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(guard)
    }

    pub fn with_restore(restore: impl FnOnce() + Send + 'static) -> Self {
        Self {
            restore: Some(Box::new(restore)),
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

fn restore_terminal() {
    // Best effort: there is nowhere left to report a failure to.
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
}

/// Take over the terminal and run the forecaster until the user quits.
pub async fn run_interactive(use_case: Arc<FetchPredictionsUseCase>, theme: Theme) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    event_loop(&mut terminal, use_case, theme).await
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    use_case: Arc<FetchPredictionsUseCase>,
    theme: Theme,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let runner = EffectRunner::new(use_case, tx);
    let mut controller = ViewController::new(theme);
    let mut surface = TerminalSurface::new(theme);
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    let mut tick: usize = 0;

    runner.run(controller.initial_effects(), &mut surface);
    info!("Interactive forecaster started (theme={})", theme);

    loop {
        terminal.draw(|f| render::draw(f, controller.state(), surface.palette(), tick))?;

        tokio::select! {
            _ = ticker.tick() => {
                tick = tick.wrapping_add(1);
            }
            Some(message) = rx.recv() => {
                let effects = controller.dispatch(message);
                runner.run(effects, &mut surface);
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) => match key_action(key) {
                    KeyAction::Quit => break,
                    KeyAction::Dispatch(message) => {
                        let effects = controller.dispatch(message);
                        runner.run(effects, &mut surface);
                    }
                    KeyAction::Ignore => {}
                },
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },
        }
    }

    info!("Interactive forecaster stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::adapter::MockPredictionClient;
    use crate::domain::Prediction;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct RecordingSink {
        applied: Vec<Theme>,
    }

    impl ThemeSink for RecordingSink {
        fn apply_theme(&mut self, theme: Theme) {
            self.applied.push(theme);
        }
    }

    #[tokio::test]
    async fn test_fetch_effect_reports_completion_with_request_id() {
        let predictions = vec![Prediction::new("A", "B")];
        let client = Arc::new(MockPredictionClient::with_predictions(predictions));
        let use_case = Arc::new(FetchPredictionsUseCase::new(client.clone()));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let runner = EffectRunner::new(use_case, tx);
        let mut sink = RecordingSink::default();

        runner.run(
            vec![Effect::Fetch {
                request_id: 7,
                topic: "creator economy".to_string(),
            }],
            &mut sink,
        );

        match rx.recv().await {
            Some(Message::FetchCompleted {
                request_id,
                outcome,
            }) => {
                assert_eq!(request_id, 7);
                assert_eq!(outcome.unwrap(), vec![Prediction::new("A", "B")]);
            }
            other => panic!("unexpected message: {other:?}"),
        }
        assert_eq!(client.topics(), vec!["creator economy".to_string()]);
        assert!(sink.applied.is_empty());
    }

    #[test]
    fn test_terminal_guard_restores_on_drop() {
        let restored = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&restored);

        drop(TerminalGuard::with_restore(move || flag.store(true, Ordering::SeqCst)));

        assert!(restored.load(Ordering::SeqCst));
    }

    #[test]
    fn test_terminal_guard_restores_on_panic() {
        let restored = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&restored);

        let result = std::panic::catch_unwind(move || {
            let _guard = TerminalGuard::with_restore(move || flag.store(true, Ordering::SeqCst));
            panic!("event loop blew up");
        });

        assert!(result.is_err());
        assert!(restored.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_apply_theme_effect_reaches_sink() {
        let use_case = Arc::new(FetchPredictionsUseCase::new(Arc::new(MockPredictionClient::new())));
        let (tx, _rx) = mpsc::unbounded_channel();
        let runner = EffectRunner::new(use_case, tx);
        let mut sink = RecordingSink::default();

        runner.run(vec![Effect::ApplyTheme(Theme::Light)], &mut sink);

        assert_eq!(sink.applied, vec![Theme::Light]);
    }
}
