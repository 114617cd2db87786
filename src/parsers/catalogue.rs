use crate::error::HarvestError;
use crate::records::Book;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Grid class the catalogue uses for one item card
const ITEM_CARD: &str = "li.col-xs-6.col-sm-4.col-md-3.col-lg-3";

/// UTF-8 width of the pound sign that prefixes every price cell
const CURRENCY_PREFIX_LEN: usize = "£".len();

/// Extracts every book record from one listing page, in document order.
///
/// Extraction is strict: an item card missing any expected field fails the
/// whole page rather than producing a partial record.
pub fn extract_books(html: &str, link_base: &Url) -> Result<Vec<Book>, HarvestError> {
    let doc = Html::parse_document(html);
    let card_selector = Selector::parse(ITEM_CARD).unwrap();

    let mut books = Vec::new();
    for card in doc.select(&card_selector) {
        books.push(extract_card(card, link_base)?);
    }

    ::log::debug!("Extracted {} records from page", books.len());
    Ok(books)
}

/// Pulls the four record fields out of a single item card
fn extract_card(card: ElementRef<'_>, link_base: &Url) -> Result<Book, HarvestError> {
    let img_selector = Selector::parse("img").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();
    let price_selector = Selector::parse("p.price_color").unwrap();
    let stock_selector = Selector::parse("p.instock.availability").unwrap();

    // The image caption carries the full title; the anchor's own text is
    // truncated with an ellipsis and must not be used.
    let title = card
        .select(&img_selector)
        .next()
        .and_then(|img| img.value().attr("alt"))
        .ok_or(HarvestError::MissingField {
            field: "title image",
        })?
        .to_string();

    let href = card
        .select(&anchor_selector)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .ok_or(HarvestError::MissingField { field: "link" })?;
    let link = link_base
        .join(href)
        .map_err(|source| HarvestError::BadLink {
            href: href.to_string(),
            source,
        })?
        .to_string();

    let price_text = card
        .select(&price_selector)
        .next()
        .map(element_text)
        .ok_or(HarvestError::MissingField { field: "price" })?;
    let price = parse_price(&price_text)?;

    let stock_status = card
        .select(&stock_selector)
        .next()
        .map(element_text)
        .ok_or(HarvestError::MissingField {
            field: "availability",
        })?;

    Ok(Book {
        title,
        link,
        price,
        stock_status,
    })
}

/// Parses a currency-prefixed price cell ("£51.77") into its numeric value.
/// The prefix is removed by byte width, not searched for; anything else in
/// that position makes the remainder unparseable and fails the record.
pub fn parse_price(text: &str) -> Result<f64, HarvestError> {
    let text = text.trim();
    text.get(CURRENCY_PREFIX_LEN..)
        .and_then(|digits| digits.parse::<f64>().ok())
        .ok_or_else(|| HarvestError::BadPrice {
            raw: text.to_string(),
        })
}

/// Collapses an element's text nodes into a single space-separated string
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
