use crate::dataset::Dataset;
use crate::records::Book;

/// Returns every record whose title contains the query as a case-insensitive
/// substring, in dataset order.
///
/// An empty or whitespace query matches every title, since the empty string
/// is a substring of anything. No match is a normal empty result, never an
/// error.
pub fn search<'a>(dataset: &'a Dataset, query: &str) -> Vec<&'a Book> {
    let needle = query.trim().to_lowercase();

    dataset
        .records()
        .iter()
        .filter(|book| book.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        let titles = ["A Light in the Attic", "Tipping the Velvet", "Soumission"];
        Dataset::finalize(
            titles
                .iter()
                .map(|title| Book {
                    title: title.to_string(),
                    link: format!(
                        "https://books.toscrape.com/catalogue/{}/index.html",
                        title.to_lowercase().replace(' ', "-")
                    ),
                    price: 19.99,
                    stock_status: "In stock".to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_case_insensitive_substring_match_preserves_order() {
        let dataset = dataset();
        let matches = search(&dataset, "the");

        let titles: Vec<&str> = matches.iter().map(|book| book.title.as_str()).collect();
        assert_eq!(titles, vec!["A Light in the Attic", "Tipping the Velvet"]);
    }

    #[test]
    fn test_query_case_is_ignored() {
        let dataset = dataset();
        assert_eq!(search(&dataset, "SOUMISSION").len(), 1);
    }

    #[test]
    fn test_no_match_is_an_empty_result() {
        let dataset = dataset();
        assert!(search(&dataset, "zzz").is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let dataset = dataset();
        assert_eq!(search(&dataset, "").len(), 3);
        assert_eq!(search(&dataset, "   ").len(), 3);
    }
}
