//! # chatchunk CLI
//!
//! Command-line interface for chatchunk library.

use std::io::Write;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chatchunk::ChatchunkError;
use chatchunk::cli::{Args, Mode};
use chatchunk::core::output::{file_stem, to_combined_text, write_delivery};
use chatchunk::core::process_with_stats;
use chatchunk::export::ChatExport;

/// Progress goes to stderr when stdout carries the chunks.
macro_rules! report {
    ($to_stderr:expr) => {
        if $to_stderr { eprintln!() } else { println!() }
    };
    ($to_stderr:expr, $($arg:tt)*) => {
        if $to_stderr { eprintln!($($arg)*) } else { println!($($arg)*) }
    };
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Library events go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), ChatchunkError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let quiet = args.mode == Mode::Stdout;

    let config = args.processing_config();
    config.validate()?;

    let input = Path::new(&args.input);
    let input_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.clone());
    let stem = file_stem(&input_name);

    // Print header
    report!(quiet, "📦 chatchunk v{}", env!("CARGO_PKG_VERSION"));
    report!(quiet, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    report!(quiet, "📂 Input:      {}", args.input);
    if quiet {
        report!(quiet, "💾 Output:     stdout");
    } else {
        report!(quiet, "💾 Output:     {}", args.output);
    }
    report!(quiet, "📄 Format:     {}", args.format);
    report!(quiet, "✂️  Chunk size: {} chars", config.chunk_size_chars);
    report!(
        quiet,
        "🕶️  Anonymize:  {}",
        if config.anonymize_users { "on" } else { "off" }
    );
    if !config.remove_system_messages {
        report!(quiet, "🔔 Keeping service messages");
    }
    report!(quiet);

    // Step 1: Load
    report!(quiet, "⏳ Loading export...");
    let load_start = Instant::now();
    let export = ChatExport::from_path(input)?;
    report!(
        quiet,
        "   Found {} messages ({:.2}s)",
        export.len(),
        load_start.elapsed().as_secs_f64()
    );

    // Step 2: Filter, label, render, chunk
    report!(quiet, "✂️  Chunking...");
    let process_start = Instant::now();
    let (chunks, stats) = process_with_stats(&export, &config);
    report!(
        quiet,
        "   {} chunks from {} units ({:.2}s)",
        stats.chunk_count,
        stats.unit_count,
        process_start.elapsed().as_secs_f64()
    );

    // Step 3: Deliver
    match args.mode.delivery() {
        Some(delivery) => {
            report!(quiet, "💾 Writing {}...", delivery);
            let write_start = Instant::now();
            let written = write_delivery(&chunks, Path::new(&args.output), &stem, delivery)?;
            report!(
                quiet,
                "   {} file(s) written in {:.2}s",
                written.len(),
                write_start.elapsed().as_secs_f64()
            );
            for path in written.iter().take(5) {
                report!(quiet, "   • {}", path.display());
            }
            if written.len() > 5 {
                report!(quiet, "   … and {} more", written.len() - 5);
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(to_combined_text(&chunks).as_bytes())?;
            stdout.write_all(b"\n")?;
            stdout.flush()?;
        }
    }

    let total_time = total_start.elapsed();

    report!(quiet);
    report!(quiet, "✅ Done!");

    // Summary
    report!(quiet);
    report!(quiet, "📊 Summary:");
    report!(quiet, "   Original:  {} messages", stats.original_count);
    report!(
        quiet,
        "   Retained:  {} messages ({:.1}%)",
        stats.retained_count,
        stats.retention_ratio()
    );
    report!(quiet, "   Units:     {}", stats.unit_count);
    report!(quiet, "   Chunks:    {}", stats.chunk_count);
    report!(quiet, "   Tokens:    ~{}", stats.token_estimate);

    // Performance stats
    report!(quiet);
    report!(quiet, "⚡ Performance:");
    report!(quiet, "   Total time:  {:.2}s", total_time.as_secs_f64());
    let msgs_per_sec = stats.original_count as f64 / total_time.as_secs_f64();
    report!(quiet, "   Throughput:  {:.0} messages/sec", msgs_per_sec);

    Ok(())
}
