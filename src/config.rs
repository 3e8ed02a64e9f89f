//! Command-line launch options for the game binary.

use std::path::PathBuf;

/// Options for a play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Fixed RNG seed; entropy when `None`.
    pub seed: Option<u64>,
    /// Directory holding jump.wav, hit.wav and point.wav.
    pub sound_dir: PathBuf,
    /// Skip audio entirely.
    pub mute: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            sound_dir: PathBuf::from("."),
            mute: false,
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(LaunchConfig),
    Help,
    Version,
}

pub fn usage() -> &'static str {
    "T-Rex Runner - terminal endless runner\n\
     \n\
     Usage: trex-runner [OPTIONS]\n\
     \n\
     Options:\n\
     \x20 --seed N        Fixed RNG seed for reproducible runs\n\
     \x20 --sounds DIR    Directory with jump.wav, hit.wav, point.wav (default: .)\n\
     \x20 --mute          Disable sound effects\n\
     \x20 --version, -v   Show version information\n\
     \x20 --help, -h      Show this help\n\
     \n\
     Controls: Space/Up jump, Down duck, q/Esc quit"
}

/// Parse arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut config = LaunchConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed requires a number")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("--seed requires a number, got '{}'", value))?,
                );
            }
            "--sounds" => {
                let value = args.next().ok_or("--sounds requires a directory")?;
                config.sound_dir = PathBuf::from(value);
            }
            "--mute" => config.mute = true,
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Play(config))
}
