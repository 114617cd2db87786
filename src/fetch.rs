use crate::error::HarvestError;
use scraper::{Html, Selector};
use url::Url;

/// Exact page title the catalogue serves past its last real page.
/// This is the sole termination signal; the site exposes no page count.
pub const NOT_FOUND_TITLE: &str = "404 Not Found";

/// What a fetch produced: a page body to extract from, or the end marker
#[derive(Debug)]
pub enum FetchOutcome {
    /// Raw HTML of a listing page
    Page(String),
    /// The themed not-found page was served for this index
    NotFound,
}

/// Transport seam for the collector: real HTTP in production, a scripted
/// fake in tests
pub trait PageFetcher {
    /// Fetch the listing page at the given 1-based index
    fn fetch_page(&mut self, index: u32) -> Result<FetchOutcome, HarvestError>;
}

/// Blocking HTTP fetcher for the live catalogue.
///
/// Requests run strictly one at a time; there is no retry and no backoff,
/// so any transport failure aborts the run that issued it.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    site: Url,
}

impl HttpFetcher {
    /// Create a fetcher rooted at the given site URL
    pub fn new(site: Url) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            site,
        }
    }

    fn page_url(&self, index: u32) -> Result<Url, HarvestError> {
        self.site
            .join(&format!("catalogue/page-{}.html", index))
            .map_err(|source| HarvestError::BadUrl {
                url: self.site.to_string(),
                source,
            })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_page(&mut self, index: u32) -> Result<FetchOutcome, HarvestError> {
        let url = self.page_url(index)?;
        ::log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| HarvestError::Transport { page: index, source })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|source| HarvestError::Transport { page: index, source })?;

        // The sentinel is served as a themed 404 page, so the title check
        // has to happen before the status check.
        if is_not_found(&body) {
            return Ok(FetchOutcome::NotFound);
        }
        if !status.is_success() {
            return Err(HarvestError::UnexpectedStatus {
                page: index,
                status,
            });
        }

        Ok(FetchOutcome::Page(body))
    }
}

/// Checks a page body for the not-found title marker
pub fn is_not_found(html: &str) -> bool {
    let doc = Html::parse_document(html);
    let title_selector = Selector::parse("title").unwrap();

    doc.select(&title_selector)
        .next()
        .map(|title| title.text().collect::<String>().trim() == NOT_FOUND_TITLE)
        .unwrap_or(false)
}
