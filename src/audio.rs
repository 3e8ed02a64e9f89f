//! Optional sound effects.
//!
//! Each cue is backed by a wav file that may or may not load. A slot that
//! fails to load stays empty for the rest of the process and playing it is a
//! no-op. Without the `audio` feature every slot is empty.

use crate::game::SoundCue;
use std::path::Path;

impl SoundCue {
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundCue::Jump => "jump.wav",
            SoundCue::Hit => "hit.wav",
            SoundCue::Checkpoint => "point.wav",
        }
    }

    fn slot(&self) -> usize {
        match self {
            SoundCue::Jump => 0,
            SoundCue::Hit => 1,
            SoundCue::Checkpoint => 2,
        }
    }
}

/// Loaded clips plus the output they play on.
pub struct SoundBank {
    output: Option<backend::Output>,
    clips: [Option<backend::Clip>; 3],
    played: u64,
}

/// Outcome of `SoundBank::load`, one line per problem or success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: Vec<SoundCue>,
    pub warnings: Vec<String>,
}

impl SoundBank {
    /// A bank with no output and no clips.
    pub fn disabled() -> Self {
        Self {
            output: None,
            clips: [None, None, None],
            played: 0,
        }
    }

    /// Open the default output and load every cue from `dir`.
    /// Never fails: whatever cannot be loaded is reported and left empty.
    pub fn load(dir: &Path) -> (Self, LoadReport) {
        let mut bank = Self::disabled();
        let mut report = LoadReport::default();

        let output = match backend::Output::open() {
            Ok(output) => output,
            Err(e) => {
                report.warnings.push(format!("Sound off: {}", e));
                return (bank, report);
            }
        };

        for cue in SoundCue::ALL {
            let path = dir.join(cue.file_name());
            match output.load(&path) {
                Ok(clip) => {
                    bank.clips[cue.slot()] = Some(clip);
                    report.loaded.push(cue);
                }
                Err(e) => report
                    .warnings
                    .push(format!("{} unavailable: {}", cue.file_name(), e)),
            }
        }

        bank.output = Some(output);
        (bank, report)
    }

    pub fn is_available(&self, cue: SoundCue) -> bool {
        self.output.is_some() && self.clips[cue.slot()].is_some()
    }

    /// Best-effort playback; silently skips missing clips.
    pub fn play(&mut self, cue: SoundCue) {
        let (Some(output), Some(clip)) = (&self.output, &self.clips[cue.slot()]) else {
            return;
        };
        output.play(clip);
        self.played += 1;
    }

    /// Number of cues actually sent to the output device.
    pub fn played(&self) -> u64 {
        self.played
    }
}

#[cfg(feature = "audio")]
mod backend {
    use rodio::source::Buffered;
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Source};
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;

    pub type Clip = Buffered<Decoder<BufReader<File>>>;

    pub struct Output {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl Output {
        pub fn open() -> Result<Self, String> {
            let (stream, handle) = OutputStream::try_default().map_err(|e| e.to_string())?;
            Ok(Self {
                _stream: stream,
                handle,
            })
        }

        pub fn load(&self, path: &Path) -> Result<Clip, String> {
            let file = File::open(path).map_err(|e| e.to_string())?;
            let decoder = Decoder::new(BufReader::new(file)).map_err(|e| e.to_string())?;
            Ok(decoder.buffered())
        }

        pub fn play(&self, clip: &Clip) {
            let _ = self.handle.play_raw(clip.clone().convert_samples());
        }
    }
}

#[cfg(not(feature = "audio"))]
mod backend {
    use std::path::Path;

    pub struct Clip;

    pub struct Output;

    impl Output {
        pub fn open() -> Result<Self, String> {
            Err("built without the `audio` feature".to_string())
        }

        pub fn load(&self, _path: &Path) -> Result<Clip, String> {
            Ok(Clip)
        }

        pub fn play(&self, _clip: &Clip) {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(SoundCue::Jump.file_name(), "jump.wav");
        assert_eq!(SoundCue::Hit.file_name(), "hit.wav");
        assert_eq!(SoundCue::Checkpoint.file_name(), "point.wav");
    }

    #[test]
    fn test_disabled_bank_is_silent() {
        let mut bank = SoundBank::disabled();
        for cue in SoundCue::ALL {
            assert!(!bank.is_available(cue));
            bank.play(cue);
        }
        assert_eq!(bank.played(), 0);
    }

    #[test]
    fn test_missing_assets_degrade_to_silence() {
        let dir = Path::new("/nonexistent/trex-runner-sounds");
        let (mut bank, report) = SoundBank::load(dir);

        assert!(report.loaded.is_empty());
        assert!(!report.warnings.is_empty());
        for cue in SoundCue::ALL {
            assert!(!bank.is_available(cue));
            bank.play(cue);
        }
        assert_eq!(bank.played(), 0);
    }
}
