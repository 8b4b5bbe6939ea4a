/// Hangman screens drawn with Ratatui - no game logic here
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::games::hangman::game::HangmanGame;
use crate::games::hangman::round::RoundStatus;

const KEYBOARD_ROWS: [&str; 3] = ["ABCDEFGHIJ", "KLMNOPQRST", "UVWXYZ"];

/// One drawing per wrong-guess count, 0 through 6
const GALLOWS: [[&str; 6]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "========="],
    ["  +---+", "  |   |", "  X   |", " /|\\  |", " / \\  |", "========="],
];

pub fn gallows(wrong_guesses: u8) -> &'static [&'static str; 6] {
    let stage = usize::from(wrong_guesses).min(GALLOWS.len() - 1);
    &GALLOWS[stage]
}

pub fn render_categories(f: &mut Frame, game: &HangmanGame, selected: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    f.render_widget(
        Paragraph::new(" HANGTERM ")
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let items: Vec<ListItem> = game.all_categories().iter().enumerate().map(|(i, c)| {
        let style = if i == selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        ListItem::new(format!(" » {} {} ({} words)", c.icon, c.name, c.words.len())).style(style)
    }).collect();

    f.render_widget(
        List::new(items).block(Block::default().title(" CATEGORIES ").borders(Borders::ALL)),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new("[↑/↓] Navigate  [Enter] Play  [R] Random category  [Esc] Quit")
            .alignment(Alignment::Center),
        chunks[2],
    );
}

pub fn render_round(f: &mut Frame, game: &HangmanGame) {
    let round = game.round();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(f.area());

    let title = match game.current_category() {
        Some(c) => format!(" {} {} ", c.icon, c.name),
        None => " HANGMAN ".to_string(),
    };
    let score = game.score();
    f.render_widget(
        Paragraph::new(format!("Wins: {}  Losses: {}", score.wins, score.losses))
            .block(Block::default().title(title).borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[0],
    );

    // Red once the last guess is spent
    let gallows_color = if round.status() == RoundStatus::Lost { Color::Red } else { Color::Yellow };
    let drawing: Vec<Line> = gallows(round.wrong_guess_count())
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(gallows_color))))
        .collect();
    f.render_widget(
        Paragraph::new(drawing)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(round.display_word())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::default().title(" WORD ").borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[2],
    );

    let keyboard: Vec<Line> = KEYBOARD_ROWS.iter().map(|row| {
        let keys: Vec<Span> = row.chars().map(|c| {
            let style = if round.is_hit(c) {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else if round.guessed_letters().contains(&c) {
                Style::default().fg(Color::Black).bg(Color::Red)
            } else {
                Style::default().fg(Color::White).bg(Color::Blue)
            };
            Span::styled(format!(" {} ", c), style)
        }).collect();
        Line::from(keys)
    }).collect();
    f.render_widget(
        Paragraph::new(keyboard)
            .block(Block::default()
                .title(format!(" Errors: {}/{} ", round.wrong_guess_count(), round.max_wrong_guesses()))
                .borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[3],
    );

    let (banner, color) = match round.status() {
        RoundStatus::Won => ("Congratulations! You guessed the word!".to_string(), Color::Green),
        RoundStatus::Lost => (format!("Game over. The word was: {}", round.current_word()), Color::Red),
        RoundStatus::InProgress => (format!("{} guesses left", round.remaining_guesses()), Color::Cyan),
    };
    f.render_widget(
        Paragraph::new(banner)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        chunks[4],
    );

    let help = if round.is_over() {
        "[Enter] New round  [Tab] Categories  [Esc] Quit"
    } else {
        "[A-Z] Guess  [Tab] Categories  [Esc] Quit"
    };
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), chunks[5]);
}
