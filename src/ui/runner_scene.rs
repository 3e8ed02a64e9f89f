//! T-Rex Runner scene: play field, status bar, info panel.
//!
//! The play field is drawn into a half-block pixel canvas scaled from the
//! 800x400 world to whatever area the terminal gives us, then the HUD text is
//! stamped on top without touching the background colours.

use super::canvas::{to_color, PixelCanvas};
use super::game_common::{create_scene_layout, render_side_panel_frame, render_status_bar};
use crate::game::sprites::{
    cactus_arms, cloud_ellipse, ground_band, ground_dashes, overlay_lines, runner_sprite,
    score_line, Palette,
};
use crate::game::{GamePhase, GameWorld, LogKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SIDE_PANEL_WIDTH: u16 = 28;

/// Render the whole game screen.
pub fn render_runner_scene(frame: &mut Frame, area: Rect, world: &GameWorld) {
    let layout = create_scene_layout(
        frame,
        area,
        " T-Rex Runner ",
        Color::LightGreen,
        SIDE_PANEL_WIDTH,
    );

    render_play_field(frame, layout.field, world);
    render_status_bar_content(frame, layout.status_bar, world);
    render_info_panel(frame, layout.side_panel, world);
}

fn render_play_field(frame: &mut Frame, area: Rect, world: &GameWorld) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    let palette = Palette::for_world(world);
    let mut canvas = PixelCanvas::new(area.width, area.height, palette.sky);

    // Clouds sit behind the ground
    for cloud in &world.clouds {
        canvas.fill_ellipse(cloud_ellipse(cloud), palette.cloud);
    }

    canvas.fill_rect(ground_band(), palette.ground_fill);
    for dash in ground_dashes(world.ground_offset) {
        canvas.draw_segment(dash, palette.ground_line);
    }

    // ── Runner ────────────────────────────────────────────────────────
    let sprite = runner_sprite(&world.runner);
    let body_color = if sprite.ducking {
        palette.runner_ducking
    } else {
        palette.runner
    };
    canvas.fill_rect(sprite.body, body_color);
    canvas.fill_rect(sprite.head, body_color);
    canvas.fill_circle(sprite.eye, palette.eye);
    canvas.fill_circle(sprite.pupil, palette.pupil);
    for leg in sprite.legs {
        canvas.draw_segment(leg, palette.legs);
    }

    // ── Cacti ─────────────────────────────────────────────────────────
    for obstacle in &world.obstacles {
        canvas.fill_rect(obstacle.rect, palette.cactus);
        if let Some((left, right)) = cactus_arms(obstacle) {
            canvas.fill_rect(left, palette.cactus);
            canvas.fill_rect(right, palette.cactus);
        }
    }

    // Text rows must be computed before the canvas is consumed
    let overlay_rows: Vec<(&str, u16)> = overlay_lines(world.phase)
        .iter()
        .map(|&(text, y)| (text, canvas.term_row(y)))
        .collect();
    let score_row = canvas.term_row(10);

    for (row, line) in canvas.into_lines().into_iter().enumerate() {
        let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
        frame.render_widget(Paragraph::new(line), row_area);
    }

    // ── HUD text ──────────────────────────────────────────────────────
    let text_style = Style::default().fg(to_color(palette.text));

    // Text areas are sized to the text so the half-blocks around it survive
    let score = score_line(world);
    let score_width = (score.len() as u16).min(area.width.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(Span::styled(score, text_style)),
        Rect::new(area.x + 1, area.y + score_row, score_width, 1),
    );

    for (i, (text, row)) in overlay_rows.into_iter().enumerate() {
        if row >= area.height {
            continue;
        }
        // Title line in bold
        let style = if i == 0 {
            text_style.add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        let width = (text.len() as u16).min(area.width);
        let x = area.x + (area.width - width) / 2;
        frame.render_widget(
            Paragraph::new(Span::styled(text, style)),
            Rect::new(x, area.y + row, width, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, world: &GameWorld) {
    match world.phase {
        GamePhase::Start => render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightGreen,
            &[("[Space/Up]", "Start"), ("[Down]", "Duck"), ("[Q]", "Quit")],
        ),
        GamePhase::Play => {
            let duck_hint = if world.runner.ducking {
                "Ducking"
            } else {
                "Duck"
            };
            render_status_bar(
                frame,
                area,
                "Run!",
                Color::LightGreen,
                &[("[Space/Up]", "Jump"), ("[Down]", duck_hint), ("[Q]", "Quit")],
            );
        }
        GamePhase::GameOver => render_status_bar(
            frame,
            area,
            "Crashed!",
            Color::Red,
            &[("[Space/Up]", "Restart"), ("[Q]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, world: &GameWorld) {
    let inner = render_side_panel_frame(frame, area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Phase: ", label),
            Span::styled(world.phase.label(), Style::default().fg(Color::LightGreen)),
        ]),
        Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(
                world.displayed_score().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("High: ", label),
            Span::styled(world.high_score.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", label),
            Span::styled(format!("{} px/tick", world.speed), value),
        ]),
        Line::from(vec![
            Span::styled("Sky: ", label),
            Span::styled(if world.is_night() { "Night" } else { "Day" }, value),
        ]),
        Line::from(vec![
            Span::styled("Cacti: ", label),
            Span::styled(world.obstacles.len().to_string(), value),
            Span::styled("  Clouds: ", label),
            Span::styled(world.clouds.len().to_string(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Log:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    // Newest entries that fit, oldest first
    let room = (inner.height as usize).saturating_sub(lines.len());
    let skip = world.log.len().saturating_sub(room);
    for entry in world.log.iter().skip(skip) {
        let color = match entry.kind {
            LogKind::Info => Color::Gray,
            LogKind::Milestone => Color::LightYellow,
            LogKind::Warning => Color::LightRed,
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", entry.message),
            Style::default().fg(color),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
