use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::braille::BrailleCanvas;
use super::overlay::{render_overlay, OverlayMessage};
use crate::config::DisplayConfig;
use crate::game::goalkeeper::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::game::session::Snapshot;
use crate::game::Phase;

// Goal mouth in virtual coordinates, wide enough to frame every shot target
const GOAL_X: i32 = 280;
const GOAL_Y: i32 = 180;
const GOAL_WIDTH: i32 = 670;
const GOAL_HEIGHT: i32 = 420;
const NET_SPACING: i32 = 40;
const PENALTY_SPOT: (i32, i32) = (640, 765);

const HUD_BG: Color = Color::Rgb(0, 0, 0);

fn rgb(color: [u8; 3]) -> Color {
    Color::Rgb(color[0], color[1], color[2])
}

/// Maps the 1280×800 virtual field onto Braille pixels with one uniform scale,
/// so rotated sprites keep their shape
struct FieldTransform {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl FieldTransform {
    fn fit(canvas: &BrailleCanvas) -> Self {
        let pixel_width = canvas.pixel_width() as f64;
        let pixel_height = canvas.pixel_height() as f64;
        let scale = (pixel_width / FIELD_WIDTH as f64).min(pixel_height / FIELD_HEIGHT as f64);
        Self {
            scale,
            offset_x: (pixel_width - FIELD_WIDTH as f64 * scale) / 2.0,
            offset_y: (pixel_height - FIELD_HEIGHT as f64 * scale) / 2.0,
        }
    }

    fn x(&self, virtual_x: f64) -> f64 {
        self.offset_x + virtual_x * self.scale
    }

    fn y(&self, virtual_y: f64) -> f64 {
        self.offset_y + virtual_y * self.scale
    }

    fn len(&self, virtual_len: f64) -> f64 {
        virtual_len * self.scale
    }

    fn rect(&self, x: i32, y: i32, width: i32, height: i32) -> (i64, i64, i64, i64) {
        (
            self.x(x as f64).round() as i64,
            self.y(y as f64).round() as i64,
            self.len(width as f64).round().max(1.0) as i64,
            self.len(height as f64).round().max(1.0) as i64,
        )
    }
}

pub fn render(
    frame: &mut Frame,
    snapshot: &Snapshot,
    display: &DisplayConfig,
    overlay: Option<&OverlayMessage>,
) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(rgb(display.pitch_color)));
    frame.render_widget(bg, area);

    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);
    let transform = FieldTransform::fit(&canvas);

    draw_goal(&mut canvas, &transform, display);
    draw_keeper(&mut canvas, &transform, snapshot, display);
    draw_ball(&mut canvas, &transform, snapshot, display);

    render_braille_canvas(frame, &canvas, area, rgb(display.pitch_color));

    draw_status(frame, snapshot, area);
    draw_score_panel(frame, snapshot, area);
    draw_record_panel(frame, snapshot, area);
    draw_leaderboard_panel(frame, snapshot, area);

    if let Some(message) = overlay {
        render_overlay(frame, message, area);
    }
}

fn draw_goal(canvas: &mut BrailleCanvas, transform: &FieldTransform, display: &DisplayConfig) {
    canvas.set_pen(rgb(display.goal_color));

    // Net: sparse dots on a grid behind the keeper
    for gy in (GOAL_Y..GOAL_Y + GOAL_HEIGHT).step_by(NET_SPACING as usize) {
        for gx in (GOAL_X..GOAL_X + GOAL_WIDTH).step_by(NET_SPACING as usize) {
            canvas.set_pixel(
                transform.x(gx as f64).round() as i64,
                transform.y(gy as f64).round() as i64,
            );
        }
    }

    // Posts and crossbar, two pixels thick
    let (x, y, width, height) = transform.rect(GOAL_X, GOAL_Y, GOAL_WIDTH, GOAL_HEIGHT);
    canvas.fill_rect(x, y, width, 2);
    canvas.fill_rect(x, y, 2, height);
    canvas.fill_rect(x + width - 2, y, 2, height);

    // Goal line across the whole pitch
    canvas.fill_rect(0, y + height, canvas.pixel_width() as i64, 1);

    canvas.fill_ellipse(
        transform.x(PENALTY_SPOT.0 as f64),
        transform.y(PENALTY_SPOT.1 as f64),
        1.5,
        1.5,
    );
}

fn draw_keeper(
    canvas: &mut BrailleCanvas,
    transform: &FieldTransform,
    snapshot: &Snapshot,
    display: &DisplayConfig,
) {
    let keeper = snapshot.keeper;
    let sprite = snapshot.keeper_sprite;
    canvas.set_pen(rgb(display.keeper_color));

    // Body sized like the hitbox-plus-limbs, not the whole transparent sprite canvas,
    // turned about the center of the rotated sprite
    let body_width = keeper.width as f64 * 0.55;
    let body_height = keeper.height as f64 * 0.8;
    canvas.fill_rotated_rect(
        transform.x(sprite.x as f64 + sprite.width as f64 / 2.0),
        transform.y(sprite.y as f64 + sprite.height as f64 / 2.0),
        transform.len(body_width),
        transform.len(body_height),
        snapshot.keeper_rotation,
    );
}

fn draw_ball(
    canvas: &mut BrailleCanvas,
    transform: &FieldTransform,
    snapshot: &Snapshot,
    display: &DisplayConfig,
) {
    let ball = snapshot.ball;
    canvas.set_pen(rgb(display.ball_color));

    // The ball image fills about half of its square
    let radius = transform.len(ball.width.min(ball.height) as f64 * 0.25);
    canvas.fill_ellipse(
        transform.x(ball.x as f64 + ball.width as f64 / 2.0),
        transform.y(ball.y as f64 + ball.height as f64 / 2.0),
        radius,
        radius,
    );
}

fn render_braille_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Rect, background: Color) {
    for y in 0..canvas.height() {
        let spans: Vec<Span> = (0..canvas.width())
            .map(|x| {
                let fg = canvas.ink(x, y).unwrap_or(Color::White);
                Span::styled(
                    canvas.to_char(x, y).to_string(),
                    Style::default().fg(fg).bg(background),
                )
            })
            .collect();

        let row_area = Rect {
            x: area.x,
            y: area.y + y as u16,
            width: area.width,
            height: 1,
        };

        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

/// Draw a bordered text panel, clipped to the screen
fn draw_panel(frame: &mut Frame, area: Rect, panel: Rect, title: &str, lines: Vec<Line>) {
    let panel = panel.intersection(area);
    if panel.width < 4 || panel.height < 3 {
        return;
    }

    frame.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(HUD_BG));
    frame.render_widget(Paragraph::new(lines).block(block), panel);
}

fn draw_status(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let hint = match snapshot.phase {
        Phase::Idle | Phase::Resolved(_) => "SPACE: Shoot  Esc: Quit",
        Phase::BallInFlight => "Arrows/WASD: Move  Q/E/Z/C: Dive",
        Phase::MatchOver(_) => "R: Play again  M: Menu",
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", snapshot.player_name),
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::styled(format!("  {}", hint), Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Left);

    let status_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width.saturating_sub(26),
        height: 1.min(area.height),
    };
    frame.render_widget(status, status_area);
}

fn draw_score_panel(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines = vec![
        Line::from(format!("Saves: {}", snapshot.saves)),
        Line::from(format!("Goals: {}", snapshot.goals)),
    ];
    let panel = Rect {
        x: area.right().saturating_sub(16),
        y: area.bottom().saturating_sub(4),
        width: 16,
        height: 4,
    };
    let title = format!("First to {}", snapshot.target_score);
    draw_panel(frame, area, panel, &title, lines);
}

fn draw_record_panel(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let lines = vec![
        Line::from(format!("Wins: {}", snapshot.wins)),
        Line::from(format!("Losses: {}", snapshot.losses)),
    ];
    let panel = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(4),
        width: 16,
        height: 4,
    };
    draw_panel(frame, area, panel, "Session", lines);
}

/// Top entries with `---` placeholders for empty slots
pub fn leaderboard_lines(snapshot: &Snapshot, slots: usize) -> Vec<String> {
    (0..slots)
        .map(|i| match snapshot.leaderboard.get(i) {
            Some(entry) => format!("{}. {}: {} wins", i + 1, entry.name, entry.wins),
            None => format!("{}. ---", i + 1),
        })
        .collect()
}

/// Rows to draw: at least 5, never more than fit between the panel borders
fn leaderboard_slots(entries: usize, area_height: u16) -> usize {
    entries
        .max(5)
        .min(usize::from(area_height.saturating_sub(2)))
}

fn draw_leaderboard_panel(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let slots = leaderboard_slots(snapshot.leaderboard.len(), area.height);
    let lines: Vec<Line> = leaderboard_lines(snapshot, slots)
        .into_iter()
        .map(|line| {
            if line.contains(&format!(" {}:", snapshot.player_name)) {
                Line::from(Span::styled(line, Style::default().fg(Color::Yellow)))
            } else {
                Line::from(line)
            }
        })
        .collect();

    let width = 26;
    let panel = Rect {
        x: area.right().saturating_sub(width),
        y: area.y,
        width,
        height: u16::try_from(slots).unwrap_or(u16::MAX).saturating_add(2),
    };
    draw_panel(frame, area, panel, "LEADERBOARD", lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::geometry::Rect as FieldRect;
    use crate::leaderboard::PlayerScore;

    fn snapshot_with(entries: Vec<PlayerScore>) -> Snapshot {
        Snapshot {
            ball: FieldRect::new(580, 705, 120, 120),
            keeper: FieldRect::new(490, 275, 300, 400),
            keeper_sprite: FieldRect::new(490, 275, 300, 400),
            keeper_rotation: 0.0,
            saves: 0,
            goals: 0,
            wins: 0,
            losses: 0,
            target_score: 5,
            phase: Phase::Idle,
            player_name: "Tester".to_string(),
            leaderboard: entries,
        }
    }

    #[test]
    fn test_leaderboard_lines_pad_empty_slots() {
        let snapshot = snapshot_with(vec![PlayerScore::new("ana", 4), PlayerScore::new("ben", 1)]);
        let lines = leaderboard_lines(&snapshot, 5);
        assert_eq!(lines[0], "1. ana: 4 wins");
        assert_eq!(lines[1], "2. ben: 1 wins");
        assert_eq!(lines[2], "3. ---");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_leaderboard_slots_fit_the_screen() {
        assert_eq!(leaderboard_slots(2, 40), 5);
        assert_eq!(leaderboard_slots(8, 40), 8);
        assert_eq!(leaderboard_slots(70_000, 24), 22);
        assert_eq!(leaderboard_slots(70_000, u16::MAX), usize::from(u16::MAX - 2));
        assert_eq!(leaderboard_slots(3, 1), 0);
    }

    #[test]
    fn test_field_transform_keeps_aspect() {
        // 160×50 cells = 320×200 pixels, limited by height
        let canvas = BrailleCanvas::new(160, 50);
        let transform = FieldTransform::fit(&canvas);
        assert!((transform.scale - 0.25).abs() < 1e-9);
        assert_eq!(transform.offset_y, 0.0);
        assert_eq!(transform.x(0.0), (320.0 - 320.0) / 2.0);
        assert_eq!(transform.rect(0, 0, FIELD_WIDTH, FIELD_HEIGHT), (0, 0, 320, 200));
    }
}
