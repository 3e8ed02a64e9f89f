pub mod canvas;
pub mod game_common;
pub mod runner_scene;

use crate::game::GameWorld;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw(frame: &mut Frame, world: &GameWorld) {
    let area = frame.size();
    runner_scene::render_runner_scene(frame, area, world);
}
