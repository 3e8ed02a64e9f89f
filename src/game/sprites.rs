//! Render-side geometry derived from the world, independent of any backend.
//!
//! Everything here is a pure function of game state: the terminal scene
//! rasterises these shapes, and tests can check them without a terminal.

use super::types::{Cloud, GamePhase, GameWorld, Obstacle, Runner};
use crate::core::constants::*;
use crate::core::geometry::Rect;

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colours for one sky mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub sky: Rgb,
    pub ground_fill: Rgb,
    pub ground_line: Rgb,
    pub runner: Rgb,
    pub runner_ducking: Rgb,
    pub cactus: Rgb,
    pub cloud: Rgb,
    pub eye: Rgb,
    pub pupil: Rgb,
    pub legs: Rgb,
    pub text: Rgb,
}

impl Palette {
    pub const DAY: Palette = Palette {
        sky: Rgb(235, 245, 255),
        ground_fill: Rgb(180, 180, 180),
        ground_line: Rgb(60, 60, 60),
        runner: Rgb(50, 180, 50),
        runner_ducking: Rgb(40, 140, 40),
        cactus: Rgb(30, 100, 30),
        cloud: Rgb(230, 230, 230),
        eye: Rgb(255, 255, 255),
        pupil: Rgb(0, 0, 0),
        legs: Rgb(0, 0, 0),
        text: Rgb(0, 0, 0),
    };

    pub const NIGHT: Palette = Palette {
        sky: Rgb(15, 20, 40),
        ground_fill: Rgb(120, 120, 120),
        ground_line: Rgb(200, 200, 200),
        runner: Rgb(50, 180, 50),
        runner_ducking: Rgb(40, 140, 40),
        cactus: Rgb(30, 100, 30),
        cloud: Rgb(180, 180, 200),
        eye: Rgb(220, 220, 220),
        pupil: Rgb(10, 10, 10),
        legs: Rgb(0, 0, 0),
        text: Rgb(230, 230, 230),
    };

    pub fn for_world(world: &GameWorld) -> &'static Palette {
        if world.is_night() {
            &Self::NIGHT
        } else {
            &Self::DAY
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
}

/// Line segment from (x0, y0) to (x1, y1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Segment {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// Body parts of the runner, all relative to its collision rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerSprite {
    pub body: Rect,
    pub head: Rect,
    pub eye: Circle,
    pub pupil: Circle,
    pub legs: [Segment; 2],
    pub ducking: bool,
}

pub fn runner_sprite(runner: &Runner) -> RunnerSprite {
    let body = runner.rect;

    let head = if runner.ducking {
        Rect::new(body.right() - 20, body.top() + 2, 18, body.height - 8)
    } else {
        Rect::new(body.right() - 15, body.top() - 18, 18, 18)
    };

    let eye = Circle {
        cx: head.center_x() + 3,
        cy: head.center_y() - 3,
        radius: 4,
    };
    let pupil = Circle {
        cx: eye.cx + 1,
        cy: eye.cy,
        radius: 2,
    };

    let foot_y = body.bottom();
    let left = body.left();
    let legs = if runner.ducking {
        [
            Segment::new(left + 10, foot_y, left + 20, foot_y),
            Segment::new(left + 30, foot_y, left + 40, foot_y),
        ]
    } else {
        let offset = if runner.leg_frame == 0 { 6 } else { -6 };
        [
            Segment::new(left + 10, foot_y, left + 10 + offset, foot_y + 8),
            Segment::new(left + 25, foot_y, left + 25 - offset, foot_y + 8),
        ]
    };

    RunnerSprite {
        body,
        head,
        eye,
        pupil,
        legs,
        ducking: runner.ducking,
    }
}

/// Side arms for big and double cacti: (left arm, right arm).
pub fn cactus_arms(obstacle: &Obstacle) -> Option<(Rect, Rect)> {
    if !obstacle.kind.has_arms() {
        return None;
    }
    let r = obstacle.rect;
    let arm_height = (r.height as f64 * 0.4) as i32;
    let left = Rect::new(r.left() - 6, r.bottom() - arm_height - 5, 8, arm_height);
    let right = Rect::new(r.right() - 2, r.bottom() - arm_height - 12, 8, arm_height + 5);
    Some((left, right))
}

pub fn cloud_ellipse(cloud: &Cloud) -> Rect {
    cloud.bounds()
}

/// The band below the ground line.
pub fn ground_band() -> Rect {
    Rect::new(0, GROUND_Y, WORLD_WIDTH, WORLD_HEIGHT - GROUND_Y)
}

/// Dashes along the ground line, shifted left by the scroll offset.
pub fn ground_dashes(offset: i32) -> Vec<Segment> {
    (-offset..WORLD_WIDTH)
        .step_by(GROUND_TILE_WIDTH as usize)
        .map(|x| Segment::new(x, GROUND_Y, x + GROUND_DASH_LENGTH, GROUND_Y))
        .collect()
}

/// Persistent score line.
pub fn score_line(world: &GameWorld) -> String {
    format!(
        "Score: {}   High: {}",
        world.displayed_score(),
        world.high_score
    )
}

/// Centered overlay text for the current phase with its world y coordinate.
pub fn overlay_lines(phase: GamePhase) -> &'static [(&'static str, i32)] {
    match phase {
        GamePhase::Start => &[
            ("T-REX RUNNER", 120),
            ("Press SPACE or UP to start", 160),
            ("Press DOWN to duck", 200),
        ],
        GamePhase::GameOver => &[
            ("GAME OVER", 120),
            ("Press SPACE or UP to restart", 160),
            ("Press DOWN to duck", 200),
        ],
        GamePhase::Play => &[],
    }
}
