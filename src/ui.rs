use keysprint::{app::App, clock::Clock, session::Outcome, util::format_decimal};
use rand::Rng;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

pub fn draw<C: Clock, R: Rng>(app: &App<C, R>, f: &mut Frame) {
    let trainer = &app.trainer;
    let area = f.area();

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let green_bold_style = bold_style.fg(Color::Green);
    let red_bold_style = bold_style.fg(Color::Red);
    let dim_bold_style = bold_style.add_modifier(Modifier::DIM);
    let underlined_dim_bold_style = dim_bold_style.add_modifier(Modifier::UNDERLINED);

    let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
    let challenge = trainer.challenge_text();
    let prompt_lines = ((challenge.width() as f64 / max_chars_per_line as f64).ceil() as u16).max(1);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2),                // headline
            Constraint::Length(prompt_lines + 1), // challenge
            Constraint::Length(3),                // input field
            Constraint::Length(2),                // difficulty
            Constraint::Length(1),                // records
            Constraint::Length(1),                // accuracy
            Constraint::Length(2),                // feedback
            Constraint::Length(3),                // time remaining
            Constraint::Min(0),
            Constraint::Length(1), // legend
        ])
        .split(area);

    let headline = match trainer.last_result() {
        Some(result) if !trainer.is_active() => result.to_string(),
        _ => "Type the challenge below and press Enter:".to_string(),
    };
    f.render_widget(
        Paragraph::new(Span::styled(headline, bold_style.fg(Color::Blue)))
            .alignment(Alignment::Center),
        chunks[0],
    );

    // challenge, colored position by position against what has been typed
    let typed: Vec<char> = trainer.typed_text().chars().collect();
    let cursor = typed.len();
    let spans = challenge
        .chars()
        .enumerate()
        .map(|(idx, expected)| {
            let style = if !trainer.is_active() {
                dim_bold_style
            } else if idx < cursor {
                if typed[idx] == expected {
                    green_bold_style
                } else {
                    red_bold_style
                }
            } else if idx == cursor {
                underlined_dim_bold_style
            } else {
                dim_bold_style
            };
            Span::styled(expected.to_string(), style)
        })
        .collect::<Vec<Span>>();
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(if prompt_lines == 1 {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let input_style = match trainer.last_outcome() {
        Some(Outcome::Correct) => green_bold_style,
        Some(Outcome::Incorrect) => red_bold_style,
        None => bold_style,
    };
    f.render_widget(
        Paragraph::new(Span::styled(app.input.as_str(), input_style))
            .block(Block::default().borders(Borders::ALL)),
        chunks[2],
    );

    f.render_widget(
        Paragraph::new(format!(
            "Difficulty: {} ({}s)",
            trainer.selected_difficulty(),
            trainer.selected_difficulty().time_limit_secs()
        )),
        chunks[3],
    );

    let records = trainer.records();
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(
                "Highest typing speed: {} CPM / {} WPM",
                format_decimal(records.highest_cpm),
                format_decimal(records.highest_wpm)
            ),
            bold_style.fg(Color::Red),
        )),
        chunks[4],
    );

    let accuracy = match trainer.last_result() {
        Some(result) if !trainer.is_active() => format_decimal(result.accuracy_percent),
        _ => "100".to_string(),
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("Accuracy: {accuracy}%"),
            bold_style.fg(Color::Green),
        )),
        chunks[5],
    );

    let feedback = trainer.feedback().map(|m| m.to_string()).unwrap_or_default();
    f.render_widget(
        Paragraph::new(feedback).wrap(Wrap { trim: true }),
        chunks[6],
    );

    let limit = trainer.time_limit_secs();
    let ratio = if limit == 0 {
        0.0
    } else {
        (trainer.elapsed_secs() as f64 / limit as f64).clamp(0.0, 1.0)
    };
    f.render_widget(
        Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio)
            .label(format!("Time Remaining: {}s", trainer.remaining_secs())),
        chunks[7],
    );

    let legend = Paragraph::new(Span::styled(
        "(tab) start / (enter) submit / (↑↓) difficulty / (ctrl+l) clear / (esc) quit",
        Style::default().add_modifier(Modifier::ITALIC),
    ));
    f.render_widget(legend, chunks[9]);
}
