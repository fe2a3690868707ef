//! TUI rendering with ratatui
//!
//! Board of colored tiles, miss letters, messages and an input line.

use super::app::{App, MessageStyle};
use crate::core::{Outcome, WORD_LENGTH};
use crate::output::{HELP_TEXT, format_miss_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panel
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_help {
        render_help(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("GUESS MY WORD")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn tile_style(outcome: Outcome) -> Style {
    let bg = match outcome {
        Outcome::Exact => Color::Green,
        Outcome::Misplaced => Color::Yellow,
        Outcome::Miss => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
        Span::raw(" "),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut lines = Vec::with_capacity(session.max_attempts() * 2);

    for row in 0..session.max_attempts() {
        let spans: Vec<Span> = if let Some(turn) = session.history().get(row) {
            turn.guess
                .chars()
                .iter()
                .zip(turn.score.outcomes())
                .flat_map(|(&ch, &outcome)| tile(char::from(ch), tile_style(outcome)))
                .collect()
        } else if row == session.history().len() && !session.is_over() {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..WORD_LENGTH)
                .flat_map(|i| {
                    let letter = typed.get(i).copied().unwrap_or('_');
                    tile(letter, Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                })
                .collect()
        } else {
            (0..WORD_LENGTH)
                .flat_map(|_| tile('·', Style::default().fg(Color::DarkGray)))
                .collect()
        };
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Attempt {}/{} ",
                (session.attempts() + 1).min(session.max_attempts()),
                session.max_attempts()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Miss letters
            Constraint::Length(4), // Stats
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    let misses = Paragraph::new(format_miss_letters(app.session.misses()))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Misses ").borders(Borders::ALL));
    f.render_widget(misses, chunks[0]);

    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let distribution: Vec<String> = stats
        .guess_distribution
        .iter()
        .enumerate()
        .skip(1)
        .filter(|&(_, &count)| count > 0)
        .map(|(attempts, count)| format!("{attempts}:{count}"))
        .collect();

    let content = vec![
        Line::from(format!(
            "Games: {} | Won: {} | Win Rate: {:.0}%",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        )),
        Line::from(format!("Wins by attempts: {}", distribution.join(" "))),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default().title(" Statistics ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = if app.session.is_over() {
        (
            " Game over | n: new game, q: quit ",
            String::new(),
            Color::Green,
        )
    } else {
        (
            " Enter your guess | Enter: submit, ?: help, Ctrl-N: new game, Esc: quit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        )
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status = format!(
        "Attempts left: {} | Dictionary: {} words",
        app.session.attempts_left(),
        app.lists.dictionary.len()
    );
    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(80, 70, area);
    let help = Paragraph::new(HELP_TEXT)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Help | ? to close ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}

/// Rectangle of the given percentage size centered in `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::wordlists::WordLists;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn board_shows_scored_guess_and_misses() {
        let lists = WordLists::new(
            words_from_slice(&["hello", "weird"]),
            words_from_slice(&["weird"]),
        )
        .unwrap();
        let config = GameConfig::new();
        let mut app = App::new(&lists, &config).unwrap();
        app.input_buffer = "hello".to_string();
        app.submit_guess().unwrap();

        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("GUESS MY WORD"));
        assert!(text.contains(" H "));
        assert!(text.contains("['H', 'L', 'O']"));
        assert!(text.contains("Attempts left: 5"));
    }

    #[test]
    fn help_popup_renders() {
        let lists = WordLists::embedded().unwrap();
        let config = GameConfig::new();
        let mut app = App::new(&lists, &config).unwrap();
        app.toggle_help();

        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("Guess-My-Word HELP:"));
    }
}
