//! Headless Dodo simulator CLI.
//!
//! Drives the game from a scripted input timeline and prints what happened.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --script S      Input script, e.g. "right*120,right+jump,right*30"
//!   --frames N      Frames to run (default: script length)
//!   --config FILE   JSON game config
//!   --json          Print frame events and the final scene as JSON lines
//!   --quiet         Only the final summary

use dodo::build_info;
use dodo::simulator::{run_simulation, SimConfig, SimReport};
use dodo::GameConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_SCRIPT: &str = "right*200";

struct CliOptions {
    script: String,
    frames: Option<u64>,
    config_path: Option<PathBuf>,
    json: bool,
    quiet: bool,
}

fn usage() {
    println!("Usage: simulate [OPTIONS]\n");
    println!("Options:");
    println!("  --script S      Input script (default: {})", DEFAULT_SCRIPT);
    println!("                  segments ACTIONS[*N] joined by ',', actions joined by '+'");
    println!("                  actions: left, right, jump, idle");
    println!("  --frames N      Frames to run (default: script length)");
    println!("  --config FILE   JSON game config");
    println!("  --json          Print frame events and the final scene as JSON lines");
    println!("  --quiet         Only the final summary");
    println!("  --version       Show version information");
}

fn fail(msg: &str) -> ! {
    eprintln!("{}", msg);
    eprintln!("Run 'simulate --help' for usage.");
    std::process::exit(1);
}

fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        script: DEFAULT_SCRIPT.to_string(),
        frames: None,
        config_path: None,
        json: false,
        quiet: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--script" => {
                i += 1;
                match args.get(i) {
                    Some(script) => options.script = script.clone(),
                    None => fail("--script requires a value"),
                }
            }
            "--frames" => {
                i += 1;
                match args.get(i).and_then(|n| n.parse().ok()) {
                    Some(n) => options.frames = Some(n),
                    None => fail("--frames requires a number"),
                }
            }
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => options.config_path = Some(PathBuf::from(path)),
                    None => fail("--config requires a file path"),
                }
            }
            "--json" => options.json = true,
            "--quiet" => options.quiet = true,
            "--version" | "-v" => {
                println!("{}", build_info::version_line("simulate"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                usage();
                std::process::exit(0);
            }
            other => fail(&format!("Unknown option: {}", other)),
        }
        i += 1;
    }
    options
}

fn print_json(report: &SimReport) {
    for record in &report.records {
        match serde_json::to_string(record) {
            Ok(line) => println!("{}", line),
            Err(err) => eprintln!("Failed to encode frame {}: {}", record.frame, err),
        }
    }
    match serde_json::to_string(&report.final_scene) {
        Ok(line) => println!("{}", line),
        Err(err) => eprintln!("Failed to encode final scene: {}", err),
    }
}

fn main() {
    let filter = EnvFilter::try_from_env("DODO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = parse_args();

    let game = match GameConfig::load_or_default(options.config_path.as_deref()) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let config = SimConfig {
        game,
        script: options.script,
        frames: options.frames,
        record_frames: !options.quiet || options.json,
    };

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    if options.json {
        print_json(&report);
        return;
    }

    if !options.quiet {
        for record in &report.records {
            println!("{}", record);
        }
        if !report.records.is_empty() {
            println!();
        }
    }
    println!("{}", report);
}
