use crate::dataset::Dataset;

/// describe()-style summary of the price column
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (zero for a single observation)
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// In-stock versus out-of-stock record counts, from the derived column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StockBreakdown {
    pub in_stock: usize,
    pub out_of_stock: usize,
}

/// Everything the analyzer computes over one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// None when the dataset holds no records
    pub price: Option<PriceSummary>,
    pub stock: StockBreakdown,
}

/// Computes summary statistics and stock counts. Pure: takes the dataset
/// read-only and renders nothing.
pub fn analyze(dataset: &Dataset) -> Report {
    let prices: Vec<f64> = dataset.records().iter().map(|book| book.price).collect();

    let mut stock = StockBreakdown::default();
    for book in dataset.records() {
        if book.in_stock() {
            stock.in_stock += 1;
        } else {
            stock.out_of_stock += 1;
        }
    }

    Report {
        price: describe(&prices),
        stock,
    }
}

/// count/mean/std/min/quartiles/max over a numeric column; None when empty
pub fn describe(values: &[f64]) -> Option<PriceSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = if count > 1 {
        let variance = sorted
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / (count - 1) as f64;
        variance.sqrt()
    } else {
        0.0
    };

    Some(PriceSummary {
        count,
        mean,
        std,
        min: sorted[0],
        q25: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.5),
        q75: percentile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Linearly interpolated percentile over an already sorted slice
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = position - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Book;

    fn book(price: f64, stock_status: &str) -> Book {
        Book {
            title: "Soumission".to_string(),
            link: "https://books.toscrape.com/catalogue/soumission_998/index.html".to_string(),
            price,
            stock_status: stock_status.to_string(),
        }
    }

    #[test]
    fn test_describe_empty_column() {
        assert_eq!(describe(&[]), None);
    }

    #[test]
    fn test_describe_single_value() {
        let summary = describe(&[10.0]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 10.0);
        assert_eq!(summary.std, 0.0);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 10.0);
    }

    #[test]
    fn test_describe_quartiles_interpolate() {
        // Even-length column: the median interpolates between the middle pair
        let summary = describe(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(summary.median, 2.5);
        assert_eq!(summary.q25, 1.75);
        assert_eq!(summary.q75, 3.25);
    }

    #[test]
    fn test_describe_mean_and_std() {
        let summary = describe(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.mean, 5.0);
        // Sample variance of this column is 32/7
        assert!((summary.std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_stock_breakdown_uses_derived_column() {
        let dataset = Dataset::finalize(vec![
            book(10.0, "In stock (3 available)"),
            book(20.0, "In stock"),
            book(30.0, "Out of stock"),
        ]);

        let report = analyze(&dataset);
        assert_eq!(report.stock.in_stock, 2);
        assert_eq!(report.stock.out_of_stock, 1);
        assert_eq!(report.price.unwrap().count, 3);
    }

    #[test]
    fn test_empty_dataset_has_no_price_summary() {
        let report = analyze(&Dataset::default());
        assert_eq!(report.price, None);
        assert_eq!(report.stock, StockBreakdown::default());
    }
}
