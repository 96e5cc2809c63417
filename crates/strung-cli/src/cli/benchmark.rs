//! Benchmark command implementation.

use std::time::Instant;

use strung::{CountingRenderer, DrawOptions, PatternRegistry};

use super::common::{apply_sets, canvas_for, parse_set};

/// Execute the benchmark command.
pub fn cmd_benchmark(args: &[String]) {
    let mut pattern_id: Option<&str> = None;
    let mut iterations: usize = 100;
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
            "-i" | "--iterations" => {
                i += 1;
                if i < args.len() {
                    iterations = args[i].parse().unwrap_or(100);
                }
            }
            "--set" => {
                i += 1;
                if i < args.len() {
                    if let Some(pair) = parse_set(&args[i]) {
                        sets.push(pair);
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

    let registry = PatternRegistry::with_builtins();
    let ids: Vec<&str> = match pattern_id {
        Some(id) => {
            if registry.create(id).is_err() {
                eprintln!("Unknown pattern: {}", id);
                std::process::exit(1);
            }
            vec![id]
        }
        None => registry.ids(),
    };

    println!("═══════════════════════════════════════════════");
    println!("  STRUNG BENCHMARK ({} iterations)", iterations);
    println!("═══════════════════════════════════════════════");

    for id in ids {
        let mut instance = match registry.create(id) {
            Ok(instance) => instance,
            Err(e) => {
                eprintln!("  {}: {}", id, e);
                continue;
            }
        };
        apply_sets(&mut instance, &sets);
        let size = canvas_for(&instance, 1000.0);
        instance.set_size(size);
        let steps = instance.step_count();

        let mut renderer = CountingRenderer::new(size);
        let redraw = DrawOptions {
            redraw_strings: true,
            ..DrawOptions::default()
        };

        // Warm the layout so the loop measures string generation only.
        instance.draw(&mut renderer, &DrawOptions::default());

        let start = Instant::now();
        for _ in 0..iterations {
            instance.draw(&mut renderer, &redraw);
        }
        let elapsed = start.elapsed();
        let per_draw_ms = elapsed.as_secs_f64() * 1000.0 / iterations as f64;
        let per_string_us = elapsed.as_secs_f64() * 1_000_000.0 / (iterations * steps) as f64;

        println!(
            "  {:<10} {:>6} strings  {:>9.3} ms/draw  {:>7.3} us/string",
            id, steps, per_draw_ms, per_string_us
        );
    }

    println!("═══════════════════════════════════════════════");
}

fn print_usage() {
    eprintln!("Usage: strung benchmark [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -p, --pattern <id>      Benchmark one pattern (default: all)");
    eprintln!("  -i, --iterations <n>    Full draws per pattern (default: 100)");
    eprintln!("  --set <key=value>       Override a config option (repeatable)");
    eprintln!();
    eprintln!("Benchmarks string generation performance.");
}
