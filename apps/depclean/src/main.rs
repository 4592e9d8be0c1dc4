use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use depclean_scan_deps::Config;
use log::{LevelFilter, debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "depclean")]
#[command(about = "A collection of tools for cleaning up project dependencies", long_about = None)]
#[command(version)]
struct Cli {
    /// Turn on debug logging (ignored with --json)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find missing (phantom) and unused dependencies in JavaScript/TypeScript projects
    ScanDeps(Config),
}

const WORKSPACE_CRATES: &[&str] = &["depclean", "depclean_core", "depclean_scan_deps"];

fn enable_debug(builder: &mut env_logger::Builder) {
    for module in WORKSPACE_CRATES {
        builder.filter_module(module, LevelFilter::Debug);
    }
}

fn init_logger(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        enable_debug(&mut builder);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let json = match &cli.command {
        Commands::ScanDeps(cfg) => cfg.json,
    };
    init_logger(cli.debug && !json);
    debug!("Parsed CLI arguments: {:?}", cli.command);

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let start = Instant::now();

    match cli.command {
        Commands::ScanDeps(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!(
                "Running dependency scan on {} / {} (using {} threads)",
                cfg.directory, cfg.extension, num_threads
            );

            let check = match depclean_scan_deps::run_scan_deps(cfg.clone()) {
                Ok(check) => check,
                Err(e) => {
                    eprintln!("{}", format!("{:#}", e).red());
                    std::process::exit(1);
                }
            };

            if cfg.json {
                depclean_scan_deps::print_json(&mut stdout, &check.result)?;
                return Ok(());
            }

            depclean_scan_deps::print_report(&mut stdout, &check.result, cfg.all)?;

            let elapsed_ms = start.elapsed().as_millis();
            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files (using {} threads).",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                check.files_scanned.to_string().cyan(),
                num_threads.to_string().cyan()
            )?;
            stdout.flush()?;

            Ok(())
        }
    }
}
