//! # Folleto CLI
//!
//! Usage:
//!   folleto productos.csv -o catalogo.pdf
//!   folleto productos.csv --title BOLSAS --color #3AA8FF --images ./imagenes
//!   folleto productos.csv --config folleto.json

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

use folleto::config::LayoutConfig;
use folleto::error::CatalogError;
use folleto::style::Color;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    match run(&args) {
        Ok((output, bytes)) => {
            eprintln!("✓ Written {} bytes to {}", bytes, output.display());
        }
        Err(e) => {
            eprintln!("✗ {e}");
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(PathBuf, usize), CatalogError> {
    let mut input: Option<PathBuf> = None;
    let mut output = PathBuf::from("catalogo.pdf");
    let mut config_path: Option<PathBuf> = None;
    let mut title: Option<String> = None;
    let mut color: Option<String> = None;
    let mut images: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| -> String {
            iter.next().cloned().unwrap_or_else(|| {
                eprintln!("{flag} needs a value");
                process::exit(1);
            })
        };
        match arg.as_str() {
            "-o" | "--output" => output = PathBuf::from(value("-o")),
            "--config" => config_path = Some(PathBuf::from(value("--config"))),
            "--title" => title = Some(value("--title")),
            "--color" => color = Some(value("--color")),
            "--images" => images = Some(PathBuf::from(value("--images"))),
            other if !other.starts_with('-') && input.is_none() => {
                input = Some(PathBuf::from(other));
            }
            other => {
                eprintln!("unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
    }

    let Some(input) = input else {
        print_usage();
        process::exit(1);
    };

    let mut cfg = match config_path {
        Some(path) => {
            let json =
                fs::read_to_string(&path).map_err(|e| CatalogError::io(path.clone(), e))?;
            serde_json::from_str::<LayoutConfig>(&json)?
        }
        None => LayoutConfig::default(),
    };
    if let Some(title) = title {
        cfg.title = title;
    }
    if let Some(color) = color {
        cfg.accent = Color::from_hex(&color)?;
    }
    if let Some(images) = images {
        cfg.image_dir = images;
    }

    let bytes = folleto::generate_from_csv(&input, &cfg)?;
    fs::write(&output, &bytes).map_err(|e| CatalogError::io(output.clone(), e))?;
    Ok((output, bytes.len()))
}

fn print_usage() {
    eprintln!(
        "Usage: folleto <productos.csv> [options]\n\
         \n\
         Options:\n\
           -o, --output <file>   Output PDF path (default: catalogo.pdf)\n\
           --title <text>        Category title for the page headers\n\
           --color <#RRGGBB>     Accent color\n\
           --images <dir>        Directory product photos resolve against\n\
           --config <file>       JSON layout configuration\n\
           -h, --help            Show this help"
    );
}
