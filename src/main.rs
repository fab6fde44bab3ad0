mod config;
mod export;
mod parser;
mod scrape;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use config::ScrapeConfig;
use scrape::HttpFetcher;

#[derive(Parser)]
#[command(name = "localch_scraper", about = "Clinic directory scraper for local.ch")]
struct Cli {
    /// Directory root, trailing slash included
    #[arg(long, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Query path segment appended to the base URL
    #[arg(long, default_value = config::DEFAULT_QUERY)]
    query: String,

    /// Highest page number to fetch
    #[arg(short = 'n', long, default_value_t = config::DEFAULT_MAX_PAGES)]
    max_pages: u32,

    /// CSV file the records are written to
    #[arg(short, long, default_value = "clinics.csv")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let config = ScrapeConfig {
        base_url: cli.base_url,
        query: cli.query,
        max_pages: cli.max_pages,
    };

    println!(
        "Scraping {} pages from {}{} ...",
        config.max_pages, config.base_url, config.query
    );
    let fetcher = HttpFetcher::new();
    let outcome = scrape::collect_clinics(&config, &fetcher);

    let stats = &outcome.stats;
    println!(
        "Done: {} pages ({} ok, {} failed, {} empty), {} cards skipped.",
        stats.pages, stats.ok, stats.failed, stats.empty, stats.rejected
    );

    export::write_csv(&cli.out, &outcome.clinics)?;
    println!(
        "Wrote {} records to {}",
        outcome.clinics.len(),
        cli.out.display()
    );

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}
