use serde::{Deserialize, Serialize};

/// Substring of the availability text that marks a record as purchasable.
/// Quantity suffixes ("In stock (19 available)") make an equality check wrong.
pub const IN_STOCK_MARKER: &str = "In stock";

/// One catalogue entry scraped from a listing page.
///
/// The serde renames map the fields onto the persisted CSV header
/// (`Title,Link,Price,Stock`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Full display title (the cover image caption; anchor text is truncated)
    #[serde(rename = "Title")]
    pub title: String,

    /// Absolute URL of the book's detail page
    #[serde(rename = "Link")]
    pub link: String,

    /// Listed price in pounds
    #[serde(rename = "Price")]
    pub price: f64,

    /// Raw availability text, whitespace-normalized
    #[serde(rename = "Stock")]
    pub stock_status: String,
}

impl Book {
    /// Derived stock flag, recomputed from the availability text and never
    /// persisted
    pub fn in_stock(&self) -> bool {
        self.stock_status.contains(IN_STOCK_MARKER)
    }

    /// Whether every field holds a usable value; records failing this are
    /// dropped at finalization
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty()
            && !self.link.is_empty()
            && self.price.is_finite()
            && self.price >= 0.0
            && !self.stock_status.is_empty()
    }
}
