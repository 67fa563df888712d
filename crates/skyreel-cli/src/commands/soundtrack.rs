//! `skyreel soundtrack`: run the capture pipeline once.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use skyreel_soundtrack::{capture_soundtrack, CaptureConfig, PersistOutcome, SoundtrackError};

/// Environment variable consulted when `--api-key` is not given.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

pub fn run(api_key: Option<String>, out_dir: Option<PathBuf>) -> Result<ExitCode> {
    // Resolve the key before touching the network or the filesystem.
    let key = match resolve_api_key(api_key, std::env::var(API_KEY_ENV).ok()) {
        Ok(key) => key,
        Err(err) => {
            eprintln!("{}: {err}", error_tag(&err).red());
            return Ok(ExitCode::from(1));
        }
    };

    let mut config = CaptureConfig::promo(key);
    if let Some(dir) = out_dir {
        config.output_dir = dir;
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build async runtime")?;
    let outcome = match runtime.block_on(capture_soundtrack(&config)) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("{}: {err}", error_tag(&err).red());
            return Ok(ExitCode::from(1));
        }
    };

    match outcome {
        PersistOutcome::Transcoded { mp3, duration_secs } => {
            if let Some(secs) = duration_secs {
                println!("soundtrack ready: {} ({secs:.1}s)", mp3.display());
            } else {
                println!("soundtrack ready: {}", mp3.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        PersistOutcome::WavKept { wav, .. } => {
            println!("MP3 conversion failed; WAV kept at {}", wav.display());
            Ok(ExitCode::from(1))
        }
        PersistOutcome::RawDump { pcm, .. } => {
            println!("WAV write failed; raw PCM kept at {}", pcm.display());
            Ok(ExitCode::from(1))
        }
        PersistOutcome::NoAudio => Ok(ExitCode::from(1)),
    }
}

/// The explicit flag wins over the environment; an empty value counts as
/// unset either way.
fn resolve_api_key(
    flag: Option<String>,
    env_value: Option<String>,
) -> Result<String, SoundtrackError> {
    flag.filter(|k| !k.is_empty())
        .or(env_value.filter(|k| !k.is_empty()))
        .ok_or(SoundtrackError::MissingApiKey)
}

/// Failure prefix carrying the stable error code, e.g. `error[SND_001]`.
fn error_tag(err: &SoundtrackError) -> String {
    format!("error[{}]", err.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_a_coded_error() {
        let err = resolve_api_key(None, None).unwrap_err();
        assert!(matches!(err, SoundtrackError::MissingApiKey));
        assert_eq!(error_tag(&err), "error[SND_001]");
    }

    #[test]
    fn empty_values_count_as_unset() {
        assert!(resolve_api_key(Some(String::new()), Some(String::new())).is_err());
        assert!(resolve_api_key(None, Some(String::new())).is_err());
    }

    #[test]
    fn flag_wins_over_environment() {
        let key = resolve_api_key(Some("flag".into()), Some("env".into())).unwrap();
        assert_eq!(key, "flag");
    }

    #[test]
    fn environment_backstops_the_flag() {
        let key = resolve_api_key(None, Some("env".into())).unwrap();
        assert_eq!(key, "env");
    }

    #[test]
    fn pipeline_errors_are_tagged_with_their_code() {
        let err = SoundtrackError::ProbeParse {
            output: "N/A".to_string(),
        };
        assert_eq!(error_tag(&err), "error[SND_011]");
    }
}
