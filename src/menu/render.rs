// Menu rendering with Ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::state::{MenuScreen, MenuState};
use crate::ui::{render_overlay, OverlayMessage, OverlayStyle};

const PITCH_GREEN: Color = Color::Rgb(50, 142, 40);

pub fn instructions_message() -> OverlayMessage {
    OverlayMessage::new(
        vec![
            "HOW TO PLAY".to_string(),
            String::new(),
            "1. You are the goalkeeper and you're in a penalty shootout.".to_string(),
            "2. To move around, use WASD or your arrow keys.".to_string(),
            "3. Dive: Q top-left, E top-right, Z bottom-left, C bottom-right.".to_string(),
            "4. Use the spacebar to start the striker's shot.".to_string(),
            "5. First to 5 points wins!!".to_string(),
            String::new(),
            "(press any key)".to_string(),
        ],
        OverlayStyle::Info,
    )
    .with_title("Instructions")
}

/// Render the main menu
pub fn render_menu(frame: &mut Frame, menu_state: &MenuState) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(Color::Rgb(0, 0, 0)));
    frame.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Title area
            Constraint::Min(5),    // Menu items
            Constraint::Length(3), // Controls hint
        ])
        .split(area);

    let title_style = Style::default()
        .fg(PITCH_GREEN)
        .add_modifier(Modifier::BOLD);
    let title_text = vec![
        Line::from(""),
        Line::from(Span::styled("██╗  ██╗███████╗███████╗██████╗ ███████╗██████╗ ", title_style)),
        Line::from(Span::styled("██║ ██╔╝██╔════╝██╔════╝██╔══██╗██╔════╝██╔══██╗", title_style)),
        Line::from(Span::styled("█████╔╝ █████╗  █████╗  ██████╔╝█████╗  ██████╔╝", title_style)),
        Line::from(Span::styled("██╔═██╗ ██╔══╝  ██╔══╝  ██╔═══╝ ██╔══╝  ██╔══██╗", title_style)),
        Line::from(Span::styled("██║  ██╗███████╗███████╗██║     ███████╗██║  ██║", title_style)),
        Line::from(Span::styled("╚═╝  ╚═╝╚══════╝╚══════╝╚═╝     ╚══════╝╚═╝  ╚═╝", title_style)),
        Line::from(Span::styled(
            "penalty shootout",
            Style::default().fg(Color::Gray),
        )),
    ];

    let title = Paragraph::new(title_text).alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let menu_items: Vec<Line> = menu_state
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == menu_state.selected_index;
            let prefix = if is_selected { "  > " } else { "    " };
            let text = format!("{}{}", prefix, item.display_text());

            if is_selected {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(text, Style::default().fg(Color::White)))
            }
        })
        .collect();

    let menu = Paragraph::new(menu_items).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);

    let controls = vec![Line::from(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Gray)),
        Span::styled(": Navigate  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Gray)),
        Span::styled(": Select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Q/Esc", Style::default().fg(Color::Gray)),
        Span::styled(": Quit", Style::default().fg(Color::DarkGray)),
    ])];

    let controls_widget = Paragraph::new(controls).alignment(Alignment::Center);
    frame.render_widget(controls_widget, chunks[2]);

    match menu_state.screen {
        MenuScreen::Main => {}
        MenuScreen::NamePrompt => render_name_dialog(frame, &menu_state.name_input),
        MenuScreen::Instructions => render_overlay(frame, &instructions_message(), area),
    }
}

/// "Enter your name" dialog overlay
fn render_name_dialog(frame: &mut Frame, name: &str) {
    let area = frame.area();

    let dialog_width = 44.min(area.width.saturating_sub(4));
    let dialog_height = 6.min(area.height);
    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(dialog_width) / 2,
        y: area.y + area.height.saturating_sub(dialog_height) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(" Player Name ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Rgb(20, 20, 20)));
    frame.render_widget(block, dialog_area);

    let inner = dialog_area.inner(Margin::new(2, 1));
    let dialog_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let input_text = if name.is_empty() {
        Span::styled("Enter your name:", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(format!("{}_", name), Style::default().fg(Color::White))
    };
    frame.render_widget(Paragraph::new(Line::from(input_text)), dialog_chunks[0]);

    let hint = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Gray)),
        Span::styled(": Play  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
        Span::styled(": Cancel", Style::default().fg(Color::DarkGray)),
    ]);
    let hint_widget = Paragraph::new(hint).alignment(Alignment::Center);
    frame.render_widget(hint_widget, dialog_chunks[2]);
}
