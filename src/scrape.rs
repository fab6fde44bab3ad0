use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::config::ScrapeConfig;
use crate::export::Clinic;
use crate::parser;

/// One fetched listing page, however the server answered.
#[derive(Debug)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

/// The one capability the page loop needs from the network.
pub trait PageFetcher {
    fn fetch_page(&self, url: &str) -> Result<FetchedPage>;
}

/// Plain blocking GET per page: no custom headers, no cookies. The client
/// keeps its connection pool alive across pages.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        HttpFetcher {
            client: Client::new(),
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_page(&self, url: &str) -> Result<FetchedPage> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(FetchedPage { status, body })
    }
}

/// Page counters returned after completion.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScrapeStats {
    pub pages: usize,
    pub ok: usize,
    pub failed: usize,
    pub empty: usize,
    /// Result cards rejected for a missing title or address.
    pub rejected: usize,
}

#[derive(Debug)]
pub struct ScrapeOutcome {
    pub clinics: Vec<Clinic>,
    pub stats: ScrapeStats,
}

/// Fetch pages 1..=max_pages in order, accumulating records in memory.
///
/// Failed and empty pages are skipped, never retried, and never end the
/// run early; an empty page says nothing about later pages. Records keep
/// discovery order: page order, then card order within the page.
pub fn collect_clinics(config: &ScrapeConfig, fetcher: &impl PageFetcher) -> ScrapeOutcome {
    let mut clinics = Vec::new();
    let mut stats = ScrapeStats::default();

    let pb = ProgressBar::new(config.max_pages as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")
            .unwrap()
            .progress_chars("=> "),
    );

    for page in 1..=config.max_pages {
        stats.pages += 1;
        let url = config.page_url(page);

        let fetched = match fetcher.fetch_page(&url) {
            Ok(fetched) => fetched,
            Err(e) => {
                warn!("Request for page {} failed: {}", page, e);
                stats.failed += 1;
                pb.inc(1);
                continue;
            }
        };

        info!("Status code for page {}: {}", page, fetched.status);
        if fetched.status != 200 {
            warn!("Failed to retrieve data from page {}", page);
            stats.failed += 1;
            pb.inc(1);
            continue;
        }

        let extraction = parser::extract_page(&fetched.body);
        if extraction.cards == 0 {
            warn!("No results found on page {}", page);
            stats.empty += 1;
            pb.inc(1);
            continue;
        }

        for &(card, err) in &extraction.rejected {
            warn!("Skipping card {} on page {}: {}", card, page, err);
        }
        stats.rejected += extraction.rejected.len();
        stats.ok += 1;
        clinics.extend(extraction.clinics);
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!(
        "Scraping completed: {} pages ({} ok, {} failed, {} empty), {} records",
        stats.pages,
        stats.ok,
        stats.failed,
        stats.empty,
        clinics.len()
    );

    ScrapeOutcome { clinics, stats }
}
