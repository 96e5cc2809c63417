//! Render command implementation.

use std::fs;

use strung::{DrawOptions, PatternRegistry, Renderer, SvgRenderer};

use super::common::{
    apply_sets, canvas_for, parse_set, parse_size, JsonLine, JsonRender, OutputFormat,
};

/// Execute the render command.
pub fn cmd_render(args: &[String]) {
    let mut pattern_id: Option<&str> = None;
    let mut output_path: Option<&str> = None;
    let mut size_arg: Option<&str> = None;
    let mut position: Option<usize> = None;
    let mut format = OutputFormat::Svg;
    let mut sets: Vec<(String, strung::Value)> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-p" | "--pattern" => {
                i += 1;
                if i < args.len() {
                    pattern_id = Some(&args[i]);
                }
            }
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(&args[i]);
                }
            }
            "-s" | "--size" => {
                i += 1;
                if i < args.len() {
                    size_arg = Some(&args[i]);
                }
            }
            "-n" | "--position" => {
                i += 1;
                if i < args.len() {
                    position = args[i].parse().ok();
                }
            }
            "-f" | "--format" => {
                i += 1;
                if i < args.len() {
                    format = match args[i].as_str() {
                        "json" => OutputFormat::Json,
                        _ => OutputFormat::Svg,
                    };
                }
            }
            "--set" => {
                i += 1;
                if i < args.len() {
                    match parse_set(&args[i]) {
                        Some(pair) => sets.push(pair),
                        None => {
                            eprintln!("Invalid --set value: {} (expected key=value)", args[i]);
                            std::process::exit(1);
                        }
                    }
                }
            }
            "-h" | "--help" => {
                print_usage();
                return;
            }
            _ => {}
        }
        i += 1;
    }

    let pattern_id = pattern_id.unwrap_or_else(|| {
        eprintln!("Error: pattern required");
        print_usage();
        std::process::exit(1);
    });

    let registry = PatternRegistry::with_builtins();
    let mut instance = registry.create(pattern_id).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!("Available patterns: {}", registry.ids().join(", "));
        std::process::exit(1);
    });

    apply_sets(&mut instance, &sets);

    let size = match size_arg {
        Some(arg) => parse_size(arg).unwrap_or_else(|| {
            eprintln!("Invalid size: {} (expected WIDTHxHEIGHT)", arg);
            std::process::exit(1);
        }),
        None => canvas_for(&instance, 1000.0),
    };
    instance.set_size(size);

    let output = match format {
        OutputFormat::Svg => {
            let mut renderer = SvgRenderer::new(size);
            renderer.set_background("#ffffff");
            instance.draw(
                &mut renderer,
                &DrawOptions {
                    position,
                    ..DrawOptions::default()
                },
            );
            renderer.to_svg_string()
        }
        OutputFormat::Json => {
            let step_count = instance.step_count();
            let nail_count = instance.nail_count();
            let limit = position.unwrap_or(step_count).min(step_count);
            let strings: Vec<JsonLine> = instance
                .strings()
                .take(limit)
                .map(JsonLine::from)
                .collect();

            let doc = JsonRender {
                pattern: pattern_id.to_string(),
                width: size.width,
                height: size.height,
                step_count,
                nail_count,
                strings,
            };
            match serde_json::to_string_pretty(&doc) {
                Ok(json) => json,
                Err(e) => {
                    eprintln!("Error serializing JSON: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Wrote {} ({} bytes)", path, output.len());
        }
        None => println!("{}", output),
    }
}

fn print_usage() {
    eprintln!("Usage: strung render -p <pattern> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --pattern <id>      Pattern to render (see 'strung patterns')");
    eprintln!("  -o, --output <file>     Write output to a file (default: stdout)");
    eprintln!("  -s, --size <WxH>        Canvas size (default: aspect-fit at height 1000)");
    eprintln!("  -n, --position <n>      Draw only the first n strings");
    eprintln!("  -f, --format <svg|json> Output format (default: svg)");
    eprintln!("  --set <key=value>       Override a config option (repeatable)");
}
