//! pathwise CLI
//!
//! Three-path decision engine for nonprofit AI adoption.
//!
//! Run with: cargo run -- --analyze response.json

use anyhow::{Context, Result};
use pathwise::{analyze_json, get_templates, raw::RawResponse, report::ReportDocument};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pathwise=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--analyze" => {
                let input = required_arg(&args, 2, "--analyze <response.json> [out.json]")?;
                return run_analyze(input, args.get(3).map(String::as_str));
            }
            "--report" => {
                let input = required_arg(&args, 2, "--report <response.json>")?;
                return run_report(input);
            }
            "--compare" => {
                let input = required_arg(&args, 2, "--compare <response.json>")?;
                return run_compare(input);
            }
            "--scores" => {
                let input = required_arg(&args, 2, "--scores <response.json>")?;
                return run_scores(input);
            }
            "--registry" => {
                println!("{}", serde_json::to_string_pretty(&get_templates())?);
                return Ok(());
            }
            _ => {}
        }
    }

    print_usage();
    Ok(())
}

fn required_arg<'a>(args: &'a [String], index: usize, usage: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("Usage: pathwise {usage}"))
}

fn read_submission(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}

fn run_analyze(input: &str, output: Option<&str>) -> Result<()> {
    let json = read_submission(input)?;
    let analysis = analyze_json(&json)?;
    let pretty = serde_json::to_string_pretty(&analysis)?;

    match output {
        Some(path) => {
            std::fs::write(path, &pretty).with_context(|| format!("failed to write {path}"))?;
            println!("Analysis written to {path}");
        }
        None => println!("{pretty}"),
    }
    Ok(())
}

fn run_report(input: &str) -> Result<()> {
    let json = read_submission(input)?;
    let response = RawResponse::from_json(&json)?.into_response()?;
    let analysis = pathwise::analyze(&response);
    let document = ReportDocument::new(response, analysis);
    println!("{}", document.render_markdown());
    Ok(())
}

fn run_compare(input: &str) -> Result<()> {
    let json = read_submission(input)?;
    let response = RawResponse::from_json(&json)?.into_response()?;
    let analysis = pathwise::analyze(&response);
    let document = ReportDocument::new(response, analysis);
    println!("{}", document.comparison_table());
    Ok(())
}

fn run_scores(input: &str) -> Result<()> {
    let json = read_submission(input)?;
    let analysis = analyze_json(&json)?;
    println!("{}", serde_json::to_string_pretty(&analysis.sub_scores)?);
    Ok(())
}

fn print_usage() {
    println!("pathwise - three-path decision engine for nonprofit AI adoption");
    println!();
    println!("Usage:");
    println!("  pathwise --analyze <response.json> [out.json]   Full analysis as JSON");
    println!("  pathwise --report <response.json>               Markdown decision report");
    println!("  pathwise --compare <response.json>              Path comparison table");
    println!("  pathwise --scores <response.json>               Sub-scores only");
    println!("  pathwise --registry                             Template registry as JSON");
}
