/// Reference run: the clinic listing of the Swiss local.ch directory.
pub const DEFAULT_BASE_URL: &str = "https://www.local.ch/en/q/";
pub const DEFAULT_QUERY: &str = "Switzerland/clinique";
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Parameters of one scrape run, fixed before the first request.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Directory root, trailing slash included.
    pub base_url: String,
    /// Query path segment appended verbatim to the base URL.
    pub query: String,
    /// Pages 1..=max_pages are fetched, in order, with no early exit.
    pub max_pages: u32,
}

impl ScrapeConfig {
    /// URL of one listing page.
    pub fn page_url(&self, page: u32) -> String {
        format!("{}{}?page={}", self.base_url, self.query, page)
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            query: DEFAULT_QUERY.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}
