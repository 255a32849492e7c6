//! bv — CLI entrypoint for the adaptive Borda query-selection engine.
//!
//! Parses flags into a `Config`, runs the controller to completion, and
//! prints the result as pretty-printed JSON (default) or a one-line summary.
//! Exits non-zero on any configuration or run error.

mod args;

use std::process::ExitCode;

use args::Args;
use clap::Parser;

use bv_core::rng::BvRng;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = match args.to_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("bv: configuration error: {e}");
            return ExitCode::from(2);
        }
    };

    let mut rng = BvRng::from_seed_u64(config.seed);
    let outcome = match bv_pipeline::run(&config, &mut rng) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("bv: run error: {e}");
            return ExitCode::from(1);
        }
    };

    if !args.quiet {
        if let Err(e) = render(&args.render, &outcome) {
            eprintln!("bv: render error: {e}");
            return ExitCode::from(1);
        }
    }

    ExitCode::SUCCESS
}

fn render(format: &str, outcome: &bv_pipeline::RunOutcome) -> Result<(), Box<dyn std::error::Error>> {
    let model = bv_report::ReportModel::from(outcome);
    match format {
        "summary" => {
            println!(
                "winner={} queries={} cut={:.2}% runtime={:.3}s",
                model.winner, model.query_count, model.communication_cut_percent, model.runtime_seconds
            );
        }
        _ => {
            #[cfg(feature = "report-json")]
            {
                println!("{}", bv_report::render_json::render(&model)?);
            }
            #[cfg(not(feature = "report-json"))]
            {
                println!(
                    "winner={} queries={} cut={:.2}% runtime={:.3}s",
                    model.winner, model.query_count, model.communication_cut_percent, model.runtime_seconds
                );
            }
        }
    }
    Ok(())
}
