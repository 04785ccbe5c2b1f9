//! # duolog CLI
//!
//! Command-line front end for the duolog library: reads export files, runs
//! the processing pipeline on the background worker, and writes the payload
//! as JSON for a dashboard or storage layer to pick up.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser;

use duolog::DuologError;
use duolog::cli::Args;
use duolog::config::{InstagramConfig, WhatsAppConfig};
use duolog::core::ProcessRequest;
use duolog::identity::Identities;
use duolog::output::{write_events, write_events_by_year, write_stats};
use duolog::worker::PipelineWorker;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), DuologError> {
    let total_start = Instant::now();
    let args = Args::parse();

    println!("💬 duolog v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("👤 Person A: {}", args.person_a);
    println!("👤 Person B: {}", args.person_b);
    println!("📂 WhatsApp:  {} file(s)", args.whatsapp.len());
    println!("📂 Instagram: {} file(s)", args.instagram.len());
    println!("💾 Output:    {}", args.output);
    println!();

    // Step 1: Read all export files up front
    println!("⏳ Reading exports...");
    let mut request = ProcessRequest::new(Identities::new(&args.person_a, &args.person_b))
        .with_whatsapp_config(
            WhatsAppConfig::new()
                .with_date_order(args.date_order)
                .with_skip_system_messages(args.skip_system),
        )
        .with_instagram_config(InstagramConfig::new().with_fix_encoding(!args.raw_encoding));

    for path in &args.whatsapp {
        request = request.with_whatsapp_file(fs::read_to_string(path)?);
    }
    for path in &args.instagram {
        request = request.with_instagram_file(fs::read_to_string(path)?);
    }

    // Step 2: Run the pipeline on the background worker
    println!("⚙️  Processing...");
    let process_start = Instant::now();
    let worker = PipelineWorker::spawn();
    let output = worker.process(request)?;
    let process_time = process_start.elapsed();
    println!(
        "   {} events ({:.2}s)",
        output.events.len(),
        process_time.as_secs_f64()
    );

    // Step 3: Write the payload
    let out_dir = PathBuf::from(&args.output);
    if !out_dir.exists() {
        fs::create_dir_all(&out_dir)?;
    }

    println!("💾 Writing payload...");
    write_events(&output.events, &out_dir.join("events.json"))?;
    if let Some(stats) = &output.stats {
        write_stats(stats, &out_dir.join("summary_stats.json"))?;
    }
    if args.by_year {
        let written = write_events_by_year(&output.events, &out_dir)?;
        for path in &written {
            println!("   {}", display_name(path));
        }
    }

    println!();
    println!("✅ Done! Payload saved to {}", args.output);

    // Summary
    if let Some(stats) = &output.stats {
        println!();
        println!("📊 Summary:");
        println!("   Messages:  {}", stats.total_messages);
        println!(
            "   Range:     {} → {}",
            stats.date_range.start.format("%Y-%m-%d"),
            stats.date_range.end.format("%Y-%m-%d")
        );
        println!("   Per day:   {:.2}", stats.messages_per_day);
        for (sender, count) in &stats.by_sender {
            println!("   {}: {} messages", sender, count);
        }
    } else {
        println!();
        println!("📊 No messages found in the supplied exports.");
    }

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
