//! Harness command: run every pattern through the measurement backends and
//! verify that declared counts, seeks and replays agree with what actually
//! gets rendered.

use std::time::Instant;

use serde::Serialize;

use strung::{
    CountingRenderer, DrawOptions, PatternInstance, PatternRegistry, RecordingRenderer,
};

use super::common::{canvas_for, parse_size};

/// Result from running a single pattern variant through the harness.
#[derive(Debug, Serialize)]
pub struct HarnessResult {
    pub pattern: String,
    pub steps: usize,
    pub nails: usize,
    pub time_ms: f64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Harness JSON output.
#[derive(Debug, Serialize)]
pub struct HarnessReport {
    /// Canvas height; width follows each pattern's aspect ratio.
    pub height: f64,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<HarnessResult>,
}

/// Execute the harness command.
pub fn cmd_harness(args: &[String]) {
    let mut json_output = false;
    let mut height = 1000.0;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => json_output = true,
            "-s" | "--size" => {
                i += 1;
                if i < args.len() {
                    if let Some(size) = parse_size(&args[i]) {
                        height = size.height;
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
    let mut results = Vec::new();

    for id in registry.ids() {
        let base = match registry.create(id) {
            Ok(instance) => instance,
            Err(e) => {
                results.push(HarnessResult {
                    pattern: id.to_string(),
                    steps: 0,
                    nails: 0,
                    time_ms: 0.0,
                    status: "error".to_string(),
                    error: Some(e.to_string()),
                });
                continue;
            }
        };

        results.push(run_variant(format!("{}", id), base.copy(), height));
        for (n, patch) in base.alternate_configs().into_iter().enumerate() {
            let mut variant = base.copy();
            variant.assign_config(&patch);
            results.push(run_variant(format!("{}/alt{}", id, n), variant, height));
        }
    }

    let passed = results.iter().filter(|r| r.status == "pass").count();
    let failed = results.len() - passed;

    if json_output {
        let report = HarnessReport {
            height,
            passed,
            failed,
            results,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("═══════════════════════════════════════════════");
        println!("  STRUNG HARNESS");
        println!("═══════════════════════════════════════════════");
        for result in &results {
            let marker = if result.status == "pass" { "✓" } else { "✗" };
            print!(
                "  {} {:<16} {:>6} strings  {:>5} nails  {:>8.3} ms",
                marker, result.pattern, result.steps, result.nails, result.time_ms
            );
            match &result.error {
                Some(error) => println!("  {}", error),
                None => println!(),
            }
        }
        println!("═══════════════════════════════════════════════");
        println!("  {} passed, {} failed", passed, failed);
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

/// Draw a variant on the measurement backends and check its invariants.
fn run_variant(name: String, mut instance: PatternInstance, height: f64) -> HarnessResult {
    let size = canvas_for(&instance, height);
    instance.set_size(size);
    let steps = instance.step_count();
    let nails = instance.nail_count();

    let start = Instant::now();
    let mut counter = CountingRenderer::new(size);
    instance.draw(&mut counter, &DrawOptions::default());
    let time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let error = check_variant(&mut instance, size, steps, nails, &counter);

    HarnessResult {
        pattern: name,
        steps,
        nails,
        time_ms,
        status: if error.is_none() { "pass" } else { "fail" }.to_string(),
        error,
    }
}

fn check_variant(
    instance: &mut PatternInstance,
    size: strung::Size,
    steps: usize,
    nails: usize,
    counter: &CountingRenderer,
) -> Option<String> {
    if counter.strings() != steps {
        return Some(format!(
            "rendered {} strings, declared {}",
            counter.strings(),
            steps
        ));
    }
    if counter.nails() != nails {
        return Some(format!(
            "rendered {} nails, declared {}",
            counter.nails(),
            nails
        ));
    }

    let ratio = instance.aspect_ratio();
    if !ratio.is_finite() || ratio <= 0.0 {
        return Some(format!("bad aspect ratio {}", ratio));
    }

    // Seeking back must leave the same surface as a fresh draw to the
    // same position.
    let near = steps / 3;
    let mut seeked = RecordingRenderer::new(size);
    let mut walker = instance.copy();
    walker.set_size(size);
    walker.goto(&mut seeked, steps);
    walker.goto(&mut seeked, near);

    let mut fresh_surface = RecordingRenderer::new(size);
    let mut fresh = instance.copy();
    fresh.set_size(size);
    fresh.goto(&mut fresh_surface, near);

    if seeked.segments() != fresh_surface.segments() {
        return Some(format!("backward seek to {} diverges from fresh draw", near));
    }

    None
}

fn print_usage() {
    eprintln!("Usage: strung harness [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json              Emit a JSON report instead of a table");
    eprintln!("  -s, --size <WxH>    Canvas height to test at (default: 1000)");
    eprintln!();
    eprintln!("Runs every pattern and its alternate configs through the");
    eprintln!("measurement backends, checking counts and seek consistency.");
}
