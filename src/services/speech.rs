//! External speech-engine adapter.
//!
//! Playback goes through the first text-to-speech binary found on PATH.
//! The call blocks until the engine finishes speaking.

use std::io::ErrorKind;
use std::process::{Command, ExitStatus};
use tracing::info;

#[derive(thiserror::Error, Debug)]
pub enum SpeechError {
    #[error("no speech engine available (tried {tried})")]
    EngineUnavailable { tried: String },
    #[error("speech engine {engine} exited with {status}")]
    EngineFailed {
        engine: &'static str,
        status: ExitStatus,
    },
}

const ENGINES: &[(&str, &[&str])] = &[
    ("espeak-ng", &[]),
    ("espeak", &[]),
    ("say", &[]),
    ("spd-say", &["--wait"]),
];

pub fn speak(text: &str) -> anyhow::Result<()> {
    for &(engine, args) in ENGINES {
        match Command::new(engine).args(args).arg(text).status() {
            Ok(status) if status.success() => {
                info!(engine, "playback complete");
                return Ok(());
            }
            Ok(status) => return Err(SpeechError::EngineFailed { engine, status }.into()),
            Err(err) if err.kind() == ErrorKind::NotFound => continue,
            Err(err) => return Err(err.into()),
        }
    }
    let tried = ENGINES
        .iter()
        .map(|(engine, _)| *engine)
        .collect::<Vec<_>>()
        .join(", ");
    Err(SpeechError::EngineUnavailable { tried }.into())
}
