//! skyreel command line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use skyreel_cli::commands;

#[derive(Parser)]
#[command(name = "skyreel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture the promo soundtrack from the realtime music service
    Soundtrack {
        /// API key; falls back to the GOOGLE_API_KEY environment variable
        #[arg(long)]
        api_key: Option<String>,

        /// Output directory for the audio deliverables
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Render the composition to PNG frames or an animated GIF
    Render {
        /// Output directory
        #[arg(short, long, default_value = "out")]
        out_dir: PathBuf,

        /// Export a looping GIF instead of PNG frames
        #[arg(long)]
        gif: bool,

        /// Render a single frame
        #[arg(short, long)]
        frame: Option<u32>,

        /// Encode every Nth frame
        #[arg(long)]
        every: Option<u32>,

        /// Integer downscale factor for GIF export
        #[arg(long)]
        scale: Option<u32>,
    },

    /// Print the composition manifest as JSON
    Timeline {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Check ffmpeg, the API key, and filesystem prerequisites
    Doctor,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Soundtrack { api_key, out_dir } => commands::soundtrack::run(api_key, out_dir),
        Commands::Render {
            out_dir,
            gif,
            frame,
            every,
            scale,
        } => commands::render::run(&out_dir, gif, frame, every, scale),
        Commands::Timeline { pretty } => commands::timeline::run(pretty),
        Commands::Doctor => commands::doctor::run(),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_soundtrack_command() {
        let cli = Cli::try_parse_from(["skyreel", "soundtrack", "--api-key", "k"]).unwrap();
        match cli.command {
            Commands::Soundtrack { api_key, out_dir } => {
                assert_eq!(api_key.as_deref(), Some("k"));
                assert!(out_dir.is_none());
            }
            _ => panic!("expected soundtrack command"),
        }
    }

    #[test]
    fn parses_render_defaults() {
        let cli = Cli::try_parse_from(["skyreel", "render"]).unwrap();
        match cli.command {
            Commands::Render {
                out_dir,
                gif,
                frame,
                every,
                scale,
            } => {
                assert_eq!(out_dir, PathBuf::from("out"));
                assert!(!gif);
                assert!(frame.is_none());
                assert!(every.is_none());
                assert!(scale.is_none());
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn parses_render_gif_flags() {
        let cli = Cli::try_parse_from([
            "skyreel", "render", "--gif", "--every", "2", "--scale", "4",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                gif, every, scale, ..
            } => {
                assert!(gif);
                assert_eq!(every, Some(2));
                assert_eq!(scale, Some(4));
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn parses_timeline_pretty() {
        let cli = Cli::try_parse_from(["skyreel", "timeline", "--pretty"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Timeline { pretty: true }
        ));
    }

    #[test]
    fn rejects_unknown_command() {
        assert!(Cli::try_parse_from(["skyreel", "transcode"]).is_err());
    }
}
