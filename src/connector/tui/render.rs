//! Draws the forecaster view from a [`ViewState`].
//!
//! Layout, top to bottom: header with theme indicator, headline, topic input,
//! result area (hint, progress indicator, error banner or card grid), footer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::palette::Palette;
use crate::domain::{Card, ResultArea, ViewState};

pub const APP_TITLE: &str = "Future Trend Forecaster";
pub const HEADLINE: &str = "Predict What Comes Next";
pub const TAGLINE: &str = "Analyze the trajectory of any industry, platform, or niche. Get 3 strategic moves to stay ahead of the curve.";
pub const PLACEHOLDER: &str = "e.g., 'creator economy', 'quantum computing', 'fast fashion'";
pub const FOOTER: &str = "Powered by Gemini. For informational purposes only.";
const KEY_HINT: &str = "Enter: predict  ·  Ctrl+T: toggle theme  ·  Esc: quit";
const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub fn draw(frame: &mut Frame, state: &ViewState, palette: &Palette, tick: usize) {
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.root()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(frame, state, palette, chunks[0]);
    render_headline(frame, palette, chunks[1]);
    render_input(frame, state, palette, chunks[2]);
    render_result_area(frame, &state.result_area(), palette, tick, chunks[3]);
    render_footer(frame, palette, chunks[4]);
}

fn render_header(frame: &mut Frame, state: &ViewState, palette: &Palette, area: Rect) {
    // Shows what the toggle switches to.
    let indicator = if state.theme().is_dark() {
        Span::styled(" ☀ light ", Style::default().fg(palette.highlight))
    } else {
        Span::styled(" ☾ dark ", Style::default().fg(palette.highlight))
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(palette.border())
        .title(Line::from(indicator).alignment(Alignment::Right));

    let title = Line::from(vec![
        Span::styled("Future Trend ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled("Forecaster", palette.accent()),
    ]);

    frame.render_widget(
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_headline(frame: &mut Frame, palette: &Palette, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(HEADLINE, palette.accent())),
        Line::from(Span::styled(TAGLINE, palette.muted())),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_input(frame: &mut Frame, state: &ViewState, palette: &Palette, area: Rect) {
    let disabled = state.is_loading();
    let border_style = if disabled {
        palette.muted()
    } else {
        Style::default().fg(palette.accent)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Topic ")
        .title(Line::from(" [Enter] Predict ").alignment(Alignment::Right));

    // One column stays free for the cursor; longer input scrolls left.
    let inner_width = area.width.saturating_sub(2);
    let visible = visible_tail(state.input_text(), inner_width.saturating_sub(1));

    let content = if state.input_text().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, palette.muted()))
    } else if disabled {
        Line::from(Span::styled(visible, palette.muted()))
    } else {
        Line::from(visible)
    };

    frame.render_widget(Paragraph::new(content).block(block), area);

    if !disabled {
        let typed = u16::try_from(visible.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(typed)
            .min(area.x.saturating_add(inner_width));
        frame.set_cursor_position((x, area.y.saturating_add(1)));
    }
}

/// The longest suffix of `text` that fits in `width` columns.
fn visible_tail(text: &str, width: u16) -> &str {
    let width = usize::from(width);
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    match text.char_indices().nth(count - width) {
        Some((start, _)) => &text[start..],
        None => "",
    }
}

fn render_result_area(
    frame: &mut Frame,
    result: &ResultArea,
    palette: &Palette,
    tick: usize,
    area: Rect,
) {
    match result {
        ResultArea::Empty => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(KEY_HINT, palette.muted())))
                    .alignment(Alignment::Center),
                centered_rows(area, 1),
            );
        }
        ResultArea::Loading { caption } => {
            let frame_glyph = SPINNER[tick % SPINNER.len()];
            let lines = vec![
                Line::from(Span::styled(frame_glyph, palette.accent())),
                Line::from(""),
                Line::from(Span::styled(*caption, palette.muted())),
            ];
            frame.render_widget(
                Paragraph::new(lines).alignment(Alignment::Center),
                centered_rows(area, 3),
            );
        }
        ResultArea::Failed { message } => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(palette.error());
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(message.as_str(), palette.error())))
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(block),
                centered_rows(area, 3),
            );
        }
        ResultArea::Cards(cards) => render_cards(frame, cards, palette, area),
    }
}

fn render_cards(frame: &mut Frame, cards: &[Card], palette: &Palette, area: Rect) {
    if cards.is_empty() {
        return;
    }

    let count = cards.len() as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (card, column) in cards.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border())
            .title(Span::styled(format!(" #{} ", card.ordinal()), palette.accent()));

        let lines = vec![
            Line::from(Span::styled(
                card.title(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(card.description(), palette.muted())),
        ];

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            *column,
        );
    }
}

fn render_footer(frame: &mut Frame, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(palette.border());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(FOOTER, palette.muted())))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// A band of `rows` lines vertically centred in `area`.
fn centered_rows(area: Rect, rows: u16) -> Rect {
    let height = rows.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{Message, ViewController};
    use crate::domain::{Prediction, Theme, FETCH_FAILED_MESSAGE, LOADING_CAPTION};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(state: &ViewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(150, 30)).unwrap();
        let palette = Palette::for_theme(state.theme());
        terminal.draw(|f| draw(f, state, &palette, 0)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn submitted(topic: &str) -> (ViewController, u64) {
        let mut controller = ViewController::new(Theme::Dark);
        controller.dispatch(Message::SetInput(topic.to_string()));
        controller.dispatch(Message::Submit);
        let request_id = controller.state().request_id();
        (controller, request_id)
    }

    #[test]
    fn test_visible_tail_keeps_end_of_long_input() {
        assert_eq!(visible_tail("fast fashion", 20), "fast fashion");
        assert_eq!(visible_tail("fast fashion", 7), "fashion");
        assert_eq!(visible_tail("crème brûlée", 5), "rûlée");
        assert_eq!(visible_tail("anything", 0), "");
    }

    #[test]
    fn test_very_long_input_scrolls_to_its_tail() {
        let mut state = ViewState::new(Theme::Dark);
        let topic = format!("{}END-OF-TOPIC", "x".repeat(70_000));
        state.set_input(topic);

        let screen = render_to_string(&state);

        assert!(screen.contains("END-OF-TOPIC"));
    }

    #[test]
    fn test_idle_view_shows_chrome_and_placeholder() {
        let screen = render_to_string(&ViewState::new(Theme::Dark));

        assert!(screen.contains("Forecaster"));
        assert!(screen.contains(HEADLINE));
        assert!(screen.contains(PLACEHOLDER));
        assert!(screen.contains(FOOTER));
    }

    #[test]
    fn test_loading_view_shows_caption() {
        let (controller, _) = submitted("quantum computing");

        let screen = render_to_string(controller.state());

        assert!(screen.contains(LOADING_CAPTION));
    }

    #[test]
    fn test_failed_view_shows_banner() {
        let (mut controller, request_id) = submitted("quantum computing");
        controller.dispatch(Message::FetchCompleted {
            request_id,
            outcome: Err(crate::domain::DomainError::EmptyPredictions),
        });

        let screen = render_to_string(controller.state());

        assert!(screen.contains(FETCH_FAILED_MESSAGE));
        assert!(!screen.contains(LOADING_CAPTION));
    }

    #[test]
    fn test_cards_render_in_order_with_ordinals() {
        let (mut controller, request_id) = submitted("quantum computing");
        controller.dispatch(Message::FetchCompleted {
            request_id,
            outcome: Ok(vec![
                Prediction::new("Alpha move", "B"),
                Prediction::new("Charlie move", "D"),
                Prediction::new("Echo move", "F"),
            ]),
        });

        let screen = render_to_string(controller.state());

        let positions: Vec<usize> = ["#1", "#2", "#3"]
            .iter()
            .map(|badge| screen.find(badge).expect("badge rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let alpha = screen.find("Alpha move").unwrap();
        let charlie = screen.find("Charlie move").unwrap();
        let echo = screen.find("Echo move").unwrap();
        assert!(alpha < charlie && charlie < echo);
        assert!(!screen.contains("#4"));
    }
}
