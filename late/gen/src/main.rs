//! Late Code Generator
//!
//! Regenerates the namespaced method surface of the `late` crate from the
//! OpenAPI description.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use late_gen::errors::GeneratorError;
use late_gen::output::{GeneratedSurface, generate_from_file};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Late code generator - turns the OpenAPI description into client namespaces
#[derive(Parser, Debug)]
#[command(name = "late-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// OpenAPI description (YAML or JSON)
    #[arg(short, long, default_value = "late/openapi.yaml")]
    spec: PathBuf,

    /// Output file for generated code
    #[arg(short, long, default_value = "late/src/generated.rs")]
    output: PathBuf,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,late_gen=info".to_string(),
            2 => "info,late_gen=debug,late_define=debug".to_string(),
            _ => "debug,late_gen=trace,late_define=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn print_summary(surface: &GeneratedSurface, cli: &Cli) {
    println!("\n{}\n", "=== Generation Summary ===".bold());

    for entry in &surface.summary {
        println!("  {:<28} {} methods", entry.path.cyan(), entry.methods);
    }

    let total = format!(
        "Total: {} methods in {} namespaces",
        surface.method_count(),
        surface.summary.len()
    );
    println!("\n{}", total.green().bold());

    if !cli.dry_run {
        println!("Wrote {}", cli.output.display());
    }
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose > 0 {
        eprintln!("Description: {}", cli.spec.display());
        eprintln!("Output file: {}", cli.output.display());
        if cli.dry_run {
            eprintln!("Dry run mode - no files will be written");
        }
    }

    let surface = match generate_from_file(&cli.spec, &cli.output, cli.dry_run) {
        Ok(surface) => surface,
        Err(GeneratorError::DescriptionNotFound { path }) => {
            eprintln!(
                "{} API description not found at {}",
                "error:".red().bold(),
                path.display()
            );
            eprintln!("Pass --spec <PATH> to point at the OpenAPI file.");
            std::process::exit(1);
        }
        Err(other) => return Err(other),
    };

    print_summary(&surface, &cli);

    Ok(())
}
