//! Simulation configuration.

/// Configuration for a batch of autopilot runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Frame cap per run (36 000 frames = 9.6 minutes at 16 ms)
    pub frames: u64,

    /// Seed of the first run; run N uses seed + N
    pub seed: u64,

    /// Number of runs
    pub runs: u32,

    /// Milliseconds per simulated frame
    pub dt_ms: u64,

    /// Jump when the next cactus is at most this many px ahead
    pub look_ahead: i32,

    /// Print per-frame events
    pub verbose: bool,

    /// Emit the report as JSON instead of text
    pub json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: 36_000,
            seed: 42,
            runs: 1,
            dt_ms: 16,
            look_ahead: 80,
            verbose: false,
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimCommand {
    Run(SimConfig),
    Help,
}

pub fn sim_usage() -> &'static str {
    "T-Rex Runner Headless Simulator\n\
     \n\
     Usage: simulator [OPTIONS]\n\
     \n\
     Options:\n\
     \x20 --frames N      Frame cap per run (default: 36000)\n\
     \x20 --seed N        RNG seed (default: 42)\n\
     \x20 --runs N        Number of runs with incrementing seeds (default: 1)\n\
     \x20 --dt N          Milliseconds per frame (default: 16)\n\
     \x20 --look-ahead N  Autopilot jump distance in px (default: 80)\n\
     \x20 --verbose       Per-frame event logging\n\
     \x20 --json          Print the report as JSON\n\
     \x20 --help, -h      Show this help"
}

fn number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} requires a number"))?;
    value
        .parse()
        .map_err(|_| format!("{flag} requires a number, got '{value}'"))
}

/// Parse simulator arguments (without the program name).
pub fn parse_sim_args<I>(args: I) -> Result<SimCommand, String>
where
    I: IntoIterator<Item = String>,
{
    let mut config = SimConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => config.frames = number("--frames", args.next())?,
            "--seed" => config.seed = number("--seed", args.next())?,
            "--runs" => config.runs = number("--runs", args.next())?,
            "--dt" => config.dt_ms = number("--dt", args.next())?,
            "--look-ahead" => config.look_ahead = number("--look-ahead", args.next())?,
            "--verbose" => config.verbose = true,
            "--json" => config.json = true,
            "--help" | "-h" => return Ok(SimCommand::Help),
            other => return Err(format!("Unknown argument: {other}")),
        }
    }

    if config.runs == 0 {
        return Err("--runs must be at least 1".to_string());
    }
    if config.dt_ms == 0 {
        return Err("--dt must be at least 1".to_string());
    }

    Ok(SimCommand::Run(config))
}
