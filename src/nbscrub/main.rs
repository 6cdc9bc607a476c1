use colored::*;
use nbscrub::api::ScrubApi;
use nbscrub::commands::FileStatus;
use nbscrub::error::Result;
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    println!("Starting API key cleanup...");

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let report = ScrubApi::new(cwd).run()?;

    for file in &report.reports {
        match &file.status {
            FileStatus::Cleaned => {
                println!(
                    "{}",
                    format!("Cleaned API keys from {}", file.path.display()).green()
                );
            }
            FileStatus::Untouched => {
                println!("No API keys found in {}", file.path.display());
            }
            FileStatus::Failed(reason) => {
                eprintln!(
                    "{}",
                    format!("Skipped {}: {}", file.path.display(), reason).red()
                );
            }
        }
    }

    println!(
        "\nProcessed {} notebooks, cleaned {} files",
        report.scanned, report.cleaned
    );
    println!("\nDone! Don't forget to:");
    println!("1. Create a .env file with your API keys");
    println!("2. Add .env to your .gitignore");
    Ok(())
}
