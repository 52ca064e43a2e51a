//! Headless driver: loads a resource directory, runs the map for a number of
//! simulated seconds at 60 frames per second and prints the resulting layout.
//!
//! ```text
//! resource-map <resources.json> [--seconds N] [--filter TEXT]
//! ```
//!
//! Logs go to stderr; stdout carries only the JSON report.

mod loader;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use resource_map::catalog::ResourceCatalog;
use resource_map::reflow::ResourceFilter;
use resource_map::ResourceMapPlugin;

use report::{count_moves, MoveCounter, RunReport};

const FRAMES_PER_SECOND: u32 = 60;
const DEFAULT_SECONDS: f32 = 5.0;

#[derive(Debug)]
struct Args {
    path: PathBuf,
    seconds: f32,
    filter: Option<String>,
}

fn usage() -> String {
    "usage: resource-map <resources.json> [--seconds N] [--filter TEXT]".to_string()
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut path = None;
    let mut seconds = DEFAULT_SECONDS;
    let mut filter = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seconds" => {
                let value = args.next().ok_or_else(usage)?;
                seconds = value
                    .parse::<f32>()
                    .ok()
                    .filter(|s| s.is_finite() && *s >= 0.0)
                    .ok_or_else(|| format!("invalid --seconds value: {value}"))?;
            }
            "--filter" => filter = Some(args.next().ok_or_else(usage)?),
            "-h" | "--help" => return Err(usage()),
            other if path.is_none() && !other.starts_with("--") => {
                path = Some(PathBuf::from(other));
            }
            other => return Err(format!("unexpected argument: {other}\n{}", usage())),
        }
    }

    Ok(Args {
        path: path.ok_or_else(usage)?,
        seconds,
        filter,
    })
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    let records = match loader::load_resources(&args.path) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("failed to load {}: {e}", args.path.display());
            return ExitCode::FAILURE;
        }
    };

    let frame = Duration::from_secs(1) / FRAMES_PER_SECOND;
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(TimeUpdateStrategy::ManualDuration(frame))
        .add_plugins(ResourceMapPlugin)
        .init_resource::<MoveCounter>()
        .add_systems(PostUpdate, count_moves);

    info!(
        "loaded {} resources from {}",
        records.len(),
        args.path.display()
    );
    app.insert_resource(ResourceCatalog::live(records));
    if let Some(query) = args.filter {
        app.insert_resource(ResourceFilter::with_query(query));
    }

    let frames = (args.seconds * FRAMES_PER_SECOND as f32).round() as u32;
    // Startup plus the initial placement happen on the first update.
    app.update();
    for _ in 0..frames {
        app.update();
    }
    app.world_mut().send_event(AppExit::Success);
    app.update();

    let report = RunReport::collect(app.world(), frames);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to encode report: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args_defaults() {
        let parsed = args(&["data.json"]).expect("path only");
        assert_eq!(parsed.path, PathBuf::from("data.json"));
        assert_eq!(parsed.seconds, DEFAULT_SECONDS);
        assert!(parsed.filter.is_none());
    }

    #[test]
    fn test_parse_args_all_flags() {
        let parsed = args(&["--seconds", "2.5", "data.json", "--filter", "grant"]).expect("flags");
        assert_eq!(parsed.seconds, 2.5);
        assert_eq!(parsed.filter.as_deref(), Some("grant"));
    }

    #[test]
    fn test_parse_args_rejects_bad_input() {
        assert!(args(&[]).is_err());
        assert!(args(&["data.json", "--seconds"]).is_err());
        assert!(args(&["data.json", "--seconds", "-1"]).is_err());
        assert!(args(&["data.json", "--bogus"]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
    }
}
