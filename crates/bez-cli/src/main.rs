//! Bezier studio CLI
//!
//! Evaluates and elevates Bezier curves from the command line and prints
//! the resulting points as JSON.
//!
//! # Usage
//!
//! ```bash
//! # 11 points along a straight line
//! bez curve 10 0,0 10,0
//!
//! # Quadratic curve, unrounded coordinates
//! bez curve --exact 2 0,0 5,10 10,0
//!
//! # One more control point, same shape
//! bez elevate 0,0 10,0
//!
//! # Initial frame of an editing session
//! bez session [config.toml]
//! ```

use std::path::Path;
use std::process;

use anyhow::{bail, Context};
use bez_curve::{elevate, evaluate, evaluate_exact};
use bez_math::{PixelPoint, Point2};
use bez_session::{Session, SessionConfig};

fn print_usage() {
    eprintln!(
        r#"Bezier studio CLI

USAGE:
    bez curve [--exact] <stops> <x,y> <x,y> [<x,y>...]
    bez elevate <x,y> <x,y> [<x,y>...]
    bez session [config.toml]

ARGS:
    <stops>         Samples along the curve; 0 selects the default (20)
    <x,y>           A control point; at least two are required
    [config.toml]   Session configuration (defaults when omitted)

OPTIONS:
    --exact         Print floating-point samples instead of whole pixels
    --help          Show this help message

EXAMPLES:
    # Straight line, 11 samples
    bez curve 10 0,0 10,0

    # Cubic curve
    bez curve 50 0,0 30,90 70,90 100,0

    # Add a control point to a quadratic curve
    bez elevate 0,0 50,100 100,0
"#
    );
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Error: Missing command\n");
        print_usage();
        process::exit(1);
    }

    if args[1] == "--help" || args[1] == "-h" {
        print_usage();
        process::exit(0);
    }

    let result = match args[1].as_str() {
        "curve" => handle_curve(&args[2..]),
        "elevate" => handle_elevate(&args[2..]),
        "session" => handle_session(args.get(2).map(Path::new)),
        other => {
            eprintln!("Error: Unknown command '{}'\n", other);
            print_usage();
            process::exit(1);
        }
    };

    match result {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {:#}\n", e);
            print_usage();
            process::exit(1);
        }
    }
}

fn handle_curve(args: &[String]) -> anyhow::Result<String> {
    let (exact, args) = match args.first().map(String::as_str) {
        Some("--exact") => (true, &args[1..]),
        _ => (false, args),
    };
    let Some((stops, points)) = args.split_first() else {
        bail!("curve requires <stops> and at least two points");
    };
    let stops: usize = stops
        .parse()
        .with_context(|| format!("invalid stops '{}'", stops))?;
    let points = parse_points(points)?;
    log::debug!("Evaluating {} control points at {} stops", points.len(), stops);

    if exact {
        let curve = evaluate_exact(&points, stops)?;
        Ok(serde_json::to_string_pretty(&to_pairs(&curve))?)
    } else {
        let pixels: Vec<PixelPoint> = points.into_iter().map(PixelPoint::truncate).collect();
        let curve = evaluate(&pixels, stops)?;
        Ok(serde_json::to_string_pretty(&curve)?)
    }
}

fn handle_elevate(args: &[String]) -> anyhow::Result<String> {
    let points = parse_points(args)?;
    let elevated = elevate(&points)?;
    Ok(serde_json::to_string_pretty(&to_pairs(&elevated))?)
}

fn handle_session(config_path: Option<&Path>) -> anyhow::Result<String> {
    let config = match config_path {
        Some(path) => SessionConfig::load_from_file(path),
        None => SessionConfig::default(),
    };
    let session = Session::new(config)?;
    Ok(serde_json::to_string_pretty(&session.frame())?)
}

/// Parse `x,y` arguments into points.
fn parse_points(args: &[String]) -> anyhow::Result<Vec<Point2>> {
    args.iter().map(|arg| parse_point(arg)).collect()
}

fn parse_point(arg: &str) -> anyhow::Result<Point2> {
    let Some((x, y)) = arg.split_once(',') else {
        bail!("point '{}' is not in x,y form", arg);
    };
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("invalid x in '{}'", arg))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("invalid y in '{}'", arg))?;
    Ok(Point2::new(x, y))
}

fn to_pairs(points: &[Point2]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}
