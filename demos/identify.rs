//! Command-line front end for munsell_match
//!
//! Names one color, given as hex or as three channel values, against a
//! palette file.

use munsell_match::{
    ColorIdentifier, ColorMatch, DelimitedFormat, IdentifierConfig, MatchError, PaletteFormat,
    PaletteSourceConfig, Rgb, SearchStrategy,
};
use std::{env, path::{Path, PathBuf}, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config_path = None;
    let mut palette_path = None;
    let mut color_args = Vec::new();

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "--palette" if i + 1 >= args.len() => {
                eprintln!("Error: {} needs a path", args[i]);
                process::exit(1);
            }
            "--config" => {
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--palette" => {
                palette_path = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => color_args.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = match (config_path, palette_path) {
        (Some(path), _) => IdentifierConfig::from_json_file(&path).unwrap_or_else(|e| fail(&e)),
        (None, Some(path)) => IdentifierConfig {
            palette: palette_source(&path),
            search: SearchStrategy::default(),
        },
        (None, None) => IdentifierConfig::default(),
    };

    let rgb = match parse_color(&color_args) {
        Ok(rgb) => rgb,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };

    let identifier = ColorIdentifier::from_config(&config).unwrap_or_else(|e| fail(&e));
    match identifier.match_nearest(rgb) {
        Ok(found) => print_result(rgb, &found),
        Err(e) => fail(&e),
    }
}

fn palette_source(path: &Path) -> PaletteSourceConfig {
    let format = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => PaletteFormat::Json,
        Some("tsv") => PaletteFormat::Delimited(DelimitedFormat {
            delimiter: '\t',
            has_header: true,
        }),
        _ => PaletteFormat::default(),
    };
    PaletteSourceConfig {
        path: path.to_path_buf(),
        format,
    }
}

fn parse_color(args: &[String]) -> Result<Rgb, String> {
    match args {
        [hex] => hex.parse().map_err(|e: MatchError| e.user_message()),
        [r, g, b] => {
            let channel = |s: &str| {
                s.parse::<i64>()
                    .map_err(|_| format!("channel value {:?} is not an integer", s))
            };
            Rgb::try_from_channels(channel(r.as_str())?, channel(g.as_str())?, channel(b.as_str())?)
                .map_err(|e| e.user_message())
        }
        _ => {
            print_help("identify");
            process::exit(1);
        }
    }
}

fn fail(error: &MatchError) -> ! {
    eprintln!("Identification failed: {}", error);
    eprintln!("Suggestion: {}", error.user_message());
    process::exit(1);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <#rrggbb | R G B>", program_name);
    eprintln!();
    eprintln!("Find the closest reference color code for an sRGB color.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --palette PATH   Palette file (.csv, .tsv or .json)");
    eprintln!("  --config PATH    JSON identifier configuration");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} --palette munsell.csv '#c0283a'", program_name);
    eprintln!("  {} --config identifier.json 192 40 58", program_name);
}

fn print_result(rgb: Rgb, found: &ColorMatch<'_>) {
    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(found) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }

    // Print summary to stderr for human reading
    eprintln!();
    eprintln!("Match Summary:");
    eprintln!("  Input: {} ({}, {}, {})", rgb, rgb.r, rgb.g, rgb.b);
    eprintln!("  Code: {}", found.code);
    eprintln!("  Reference: {}", found.rgb);
    eprintln!(
        "  Lab Values: L*={:.1}, a*={:.1}, b*={:.1}",
        found.lab.l(),
        found.lab.a(),
        found.lab.b()
    );
    eprintln!("  Delta E: {:.2}", found.distance);
    eprintln!(
        "  Label text: {}",
        if found.rgb.prefers_dark_text() { "dark" } else { "light" }
    );
}
