use crate::error::HarvestError;
use crate::fetch::{FetchOutcome, PageFetcher};
use crate::parsers;
use crate::records::Book;
use url::Url;

/// Phase of the pagination walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CollectorState {
    Running,
    Stopped,
}

/// Drives the page-by-page walk of the catalogue.
///
/// Pages are fetched strictly sequentially starting at index 1. The walk has
/// no upper bound: it relies on the site eventually serving the not-found
/// page, and a source that never does would keep it running. Any fetch or
/// extraction error aborts the whole run with no partial aggregate.
pub struct Collector<F: PageFetcher> {
    fetcher: F,
    link_base: Url,
}

impl<F: PageFetcher> Collector<F> {
    /// Create a collector over the given fetcher; item hrefs are resolved
    /// against `link_base`
    pub fn new(fetcher: F, link_base: Url) -> Self {
        Self { fetcher, link_base }
    }

    /// Walks pages until the not-found sentinel and returns every extracted
    /// record in page-then-document order
    pub fn collect(&mut self) -> Result<Vec<Book>, HarvestError> {
        let mut state = CollectorState::Running;
        let mut current_page: u32 = 1;
        let mut records = Vec::new();

        while state == CollectorState::Running {
            ::log::info!("Scraping page {}", current_page);

            match self.fetcher.fetch_page(current_page)? {
                FetchOutcome::NotFound => {
                    ::log::info!("Page {} not found, harvest complete", current_page);
                    state = CollectorState::Stopped;
                }
                FetchOutcome::Page(html) => {
                    let page_records = parsers::extract_books(&html, &self.link_base)?;
                    records.extend(page_records);
                    current_page += 1;
                }
            }
        }

        ::log::info!(
            "Collected {} records across {} pages",
            records.len(),
            current_page - 1
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serves a fixed list of pages, then the not-found sentinel forever
    struct ScriptedFetcher {
        pages: Vec<String>,
        calls: u32,
    }

    impl ScriptedFetcher {
        fn new(pages: Vec<String>) -> Self {
            Self { pages, calls: 0 }
        }
    }

    impl PageFetcher for ScriptedFetcher {
        fn fetch_page(&mut self, index: u32) -> Result<FetchOutcome, HarvestError> {
            self.calls += 1;
            match self.pages.get(index as usize - 1) {
                Some(html) => Ok(FetchOutcome::Page(html.clone())),
                None => Ok(FetchOutcome::NotFound),
            }
        }
    }

    /// Succeeds until `fail_at`, then reports a transport-level failure
    struct FailingFetcher {
        good: ScriptedFetcher,
        fail_at: u32,
    }

    impl PageFetcher for FailingFetcher {
        fn fetch_page(&mut self, index: u32) -> Result<FetchOutcome, HarvestError> {
            if index >= self.fail_at {
                return Err(HarvestError::UnexpectedStatus {
                    page: index,
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                });
            }
            self.good.fetch_page(index)
        }
    }

    fn page_with_titles(titles: &[&str]) -> String {
        let cards: String = titles
            .iter()
            .map(|title| {
                format!(
                    "<li class=\"col-xs-6 col-sm-4 col-md-3 col-lg-3\">\
                     <a href=\"{0}/index.html\"><img alt=\"{1}\"></a>\
                     <p class=\"price_color\">£10.00</p>\
                     <p class=\"instock availability\">In stock</p>\
                     </li>",
                    title.to_lowercase().replace(' ', "-"),
                    title
                )
            })
            .collect();
        format!("<html><body><ol class=\"row\">{}</ol></body></html>", cards)
    }

    fn link_base() -> Url {
        Url::parse("https://books.toscrape.com/catalogue/").unwrap()
    }

    #[test]
    fn test_collects_all_pages_in_order_and_stops_on_sentinel() {
        let fetcher = ScriptedFetcher::new(vec![
            page_with_titles(&["A Light in the Attic", "Tipping the Velvet"]),
            page_with_titles(&["Soumission"]),
        ]);
        let mut collector = Collector::new(fetcher, link_base());

        let records = collector.collect().unwrap();

        let titles: Vec<&str> = records.iter().map(|book| book.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["A Light in the Attic", "Tipping the Velvet", "Soumission"]
        );
        // Two content pages plus the fetch that hit the sentinel
        assert_eq!(collector.fetcher.calls, 3);
    }

    #[test]
    fn test_empty_catalogue_terminates_immediately() {
        let fetcher = ScriptedFetcher::new(Vec::new());
        let mut collector = Collector::new(fetcher, link_base());

        let records = collector.collect().unwrap();
        assert!(records.is_empty());
        assert_eq!(collector.fetcher.calls, 1);
    }

    #[test]
    fn test_fetch_failure_aborts_the_whole_run() {
        let fetcher = FailingFetcher {
            good: ScriptedFetcher::new(vec![
                page_with_titles(&["A Light in the Attic"]),
                page_with_titles(&["Tipping the Velvet"]),
            ]),
            fail_at: 3,
        };
        let mut collector = Collector::new(fetcher, link_base());

        // Pages 1 and 2 succeed, page 3 fails: the caller gets an error and
        // no partial aggregate.
        assert!(collector.collect().is_err());
    }

    #[test]
    fn test_malformed_card_aborts_the_whole_run() {
        let broken = "<html><body>\
             <li class=\"col-xs-6 col-sm-4 col-md-3 col-lg-3\">\
             <a href=\"x/index.html\"><img alt=\"X\"></a>\
             </li></body></html>";
        let fetcher = ScriptedFetcher::new(vec![broken.to_string()]);
        let mut collector = Collector::new(fetcher, link_base());

        assert!(collector.collect().is_err());
    }
}
