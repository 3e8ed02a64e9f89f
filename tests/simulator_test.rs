//! Integration test: headless simulator determinism and reporting.

use trex_runner::simulator::{run_simulation, SimConfig};

fn config(seed: u64, runs: u32) -> SimConfig {
    SimConfig {
        frames: 3_000,
        seed,
        runs,
        ..SimConfig::default()
    }
}

#[test]
fn test_same_seed_same_report() {
    let a = run_simulation(&config(42, 3));
    let b = run_simulation(&config(42, 3));
    assert_eq!(a, b);
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}

#[test]
fn test_seeds_increment_per_run() {
    let report = run_simulation(&config(10, 3));
    let seeds: Vec<u64> = report.run_stats.iter().map(|r| r.seed).collect();
    assert_eq!(seeds, vec![10, 11, 12]);
}

#[test]
fn test_autopilot_survives_default_look_ahead() {
    let report = run_simulation(&config(42, 2));
    assert_eq!(report.crashes, 0);
    for run in &report.run_stats {
        assert_eq!(run.frames_survived, 3_000);
        // 3000 frames x 16 ms = 480 points
        assert!(run.final_score >= 479);
        assert_eq!(run.checkpoints, 4);
        assert!(run.obstacles_cleared > 0);
    }
}

#[test]
fn test_crashing_autopilot_is_reported() {
    let report = run_simulation(&SimConfig {
        look_ahead: -1,
        ..config(42, 2)
    });
    assert_eq!(report.crashes, 2);
    assert!(report.mean_frames_survived < 3_000.0);
    assert!(report.to_text().contains("Crashes: 2/2"));
}
