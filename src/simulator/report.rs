//! Simulation report generation.

use super::config::SimConfig;
use super::runner::RunStats;
use serde::Serialize;

/// Aggregated results from a batch of runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub frame_cap: u64,
    pub dt_ms: u64,
    pub crashes: u32,

    // Aggregated stats
    pub mean_score: f64,
    pub max_score: u32,
    pub mean_frames_survived: f64,
    pub total_obstacles_cleared: u64,
    pub total_jumps: u64,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(config: &SimConfig, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let n = num_runs.max(1) as f64;

        Self {
            num_runs,
            frame_cap: config.frames,
            dt_ms: config.dt_ms,
            crashes: runs.iter().filter(|r| r.crashed()).count() as u32,
            mean_score: runs.iter().map(|r| r.final_score as f64).sum::<f64>() / n,
            max_score: runs.iter().map(|r| r.final_score).max().unwrap_or(0),
            mean_frames_survived: runs.iter().map(|r| r.frames_survived as f64).sum::<f64>() / n,
            total_obstacles_cleared: runs.iter().map(|r| r.obstacles_cleared).sum(),
            total_jumps: runs.iter().map(|r| r.jumps).sum(),
            run_stats: runs,
        }
    }

    /// Human-readable report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("============================================================\n");
        report.push_str(&format!(
            "  T-Rex Runner Simulation Report  ({} run(s))\n",
            self.num_runs
        ));
        report.push_str("============================================================\n\n");
        report.push_str(&format!(
            "Frame cap: {}  |  dt: {} ms  |  Game time per run: {}\n\n",
            self.frame_cap,
            self.dt_ms,
            frames_to_time(self.frame_cap, self.dt_ms)
        ));

        report.push_str("--- Runs ---\n");
        for run in &self.run_stats {
            let ending = match &run.crashed_into {
                Some(kind) => format!("hit a {kind}"),
                None => "reached the frame cap".to_string(),
            };
            report.push_str(&format!(
                "  seed {:>6}: score {:>5}  frames {:>6}  jumps {:>4}  cleared {:>4}  checkpoints {:>3}  ({})\n",
                run.seed,
                run.final_score,
                run.frames_survived,
                run.jumps,
                run.obstacles_cleared,
                run.checkpoints,
                ending
            ));
        }
        report.push('\n');

        report.push_str("--- Aggregate ---\n");
        report.push_str(&format!(
            "  Mean score:  {:.1}  |  Max score: {}\n",
            self.mean_score, self.max_score
        ));
        report.push_str(&format!(
            "  Mean frames: {:.1} ({})\n",
            self.mean_frames_survived,
            frames_to_time(self.mean_frames_survived as u64, self.dt_ms)
        ));
        report.push_str(&format!(
            "  Crashes: {}/{}  |  Jumps: {}  |  Cacti cleared: {}\n",
            self.crashes, self.num_runs, self.total_jumps, self.total_obstacles_cleared
        ));

        report
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn frames_to_time(frames: u64, dt_ms: u64) -> String {
    let total_secs = frames * dt_ms / 1000;
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}
