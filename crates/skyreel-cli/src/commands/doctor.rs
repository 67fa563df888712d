//! `skyreel doctor`: check the local environment.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use skyreel_soundtrack::transcode::{FFMPEG_ENV, FFPROBE_ENV};
use skyreel_soundtrack::Transcoder;

use crate::commands::soundtrack::API_KEY_ENV;

pub fn run() -> Result<ExitCode> {
    let mut problems = 0u32;

    println!("skyreel doctor");
    println!();

    let transcoder = Transcoder::from_env();
    check(
        transcoder.ffmpeg_available(),
        "ffmpeg found",
        &format!("ffmpeg not found (install it or set {FFMPEG_ENV})"),
        &mut problems,
    );
    check(
        transcoder.ffprobe_available(),
        "ffprobe found",
        &format!("ffprobe not found (install it or set {FFPROBE_ENV})"),
        &mut problems,
    );
    check(
        std::env::var_os(API_KEY_ENV).is_some(),
        &format!("{API_KEY_ENV} is set"),
        &format!("{API_KEY_ENV} is not set (soundtrack capture needs it)"),
        &mut problems,
    );
    check(
        cwd_writable(),
        "current directory is writable",
        "current directory is not writable",
        &mut problems,
    );

    println!();
    if problems == 0 {
        println!("{}", "all checks passed".green());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{problems} problem(s) found");
        Ok(ExitCode::from(1))
    }
}

fn check(ok: bool, good: &str, bad: &str, problems: &mut u32) {
    if ok {
        println!("  {} {good}", "ok".green());
    } else {
        println!("  {} {bad}", "!!".yellow());
        *problems += 1;
    }
}

fn cwd_writable() -> bool {
    let probe = std::path::Path::new(".skyreel-doctor-probe");
    match std::fs::write(probe, b"probe") {
        Ok(()) => {
            let _ = std::fs::remove_file(probe);
            true
        }
        Err(_) => false,
    }
}
