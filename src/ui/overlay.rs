// Centered dialog boxes: shot results, match results, instructions

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::game::{MatchResult, ShotOutcome};

/// A message to display as an overlay in the center of the screen
#[derive(Debug, Clone)]
pub struct OverlayMessage {
    /// Lines of text to display
    pub lines: Vec<String>,
    /// Optional title for the overlay box
    pub title: Option<String>,
    pub style: OverlayStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayStyle {
    /// Neutral (white on cyan border)
    Info,
    /// Bad news (yellow)
    Warning,
    /// Good news (green)
    Success,
}

impl OverlayMessage {
    pub fn new(lines: Vec<String>, style: OverlayStyle) -> Self {
        Self {
            lines,
            title: None,
            style,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Dialog shown after a shot, until the next one is taken
    pub fn shot(outcome: ShotOutcome) -> Self {
        match outcome {
            ShotOutcome::Save => Self::new(
                vec![
                    "SAVE! Great job!".to_string(),
                    String::new(),
                    "SPACE for the next shot".to_string(),
                ],
                OverlayStyle::Success,
            ),
            ShotOutcome::Goal => Self::new(
                vec![
                    "GOAL! The ball got past you!".to_string(),
                    String::new(),
                    "SPACE for the next shot".to_string(),
                ],
                OverlayStyle::Warning,
            ),
        }
    }

    /// Replay-or-menu prompt at the end of a match
    pub fn match_over(result: MatchResult, leaderboard_note: Option<&str>) -> Self {
        let (headline, title, style) = match result {
            MatchResult::Won => ("Congratulations, you WON!!", "Win!", OverlayStyle::Success),
            MatchResult::Lost => ("Game Over. You lost.", "Lose.", OverlayStyle::Warning),
        };

        let mut lines = vec![headline.to_string(), "Would you like to play again?".to_string()];
        if let Some(note) = leaderboard_note {
            lines.push(note.to_string());
        }
        lines.push(String::new());
        lines.push("R to play again  |  M for menu".to_string());

        Self::new(lines, style).with_title(title)
    }

    fn border_color(&self) -> Color {
        match self.style {
            OverlayStyle::Info => Color::Cyan,
            OverlayStyle::Warning => Color::Yellow,
            OverlayStyle::Success => Color::Green,
        }
    }

    fn text_color(&self) -> Color {
        match self.style {
            OverlayStyle::Info => Color::White,
            OverlayStyle::Warning => Color::Yellow,
            OverlayStyle::Success => Color::LightGreen,
        }
    }
}

/// Render an overlay message in the center of `area`
pub fn render_overlay(frame: &mut Frame, message: &OverlayMessage, area: Rect) {
    let max_line_length = message
        .lines
        .iter()
        .map(|line| line.chars().count())
        .chain(message.title.iter().map(|title| title.chars().count() + 2))
        .max()
        .unwrap_or(0);

    // Borders plus one column / row of breathing room on each side
    let overlay_width = (max_line_length as u16 + 6).min(area.width.saturating_sub(2));
    let overlay_height = (message.lines.len() as u16 + 4).min(area.height.saturating_sub(2));

    let overlay_area = Rect {
        x: area.x + area.width.saturating_sub(overlay_width) / 2,
        y: area.y + area.height.saturating_sub(overlay_height) / 2,
        width: overlay_width,
        height: overlay_height,
    };

    frame.render_widget(Clear, overlay_area);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(message.border_color()))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));

    if let Some(ref title) = message.title {
        block = block.title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(message.border_color())
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(block, overlay_area);

    let text_lines: Vec<Line> = message
        .lines
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                line.clone(),
                Style::default().fg(message.text_color()),
            ))
        })
        .collect();

    let paragraph = Paragraph::new(text_lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, overlay_area.inner(Margin::new(2, 1)));
}
