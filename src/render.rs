//! Console rendering for the analysis report. Output-only glue: every
//! number printed here is computed in `analyze`.

use crate::analyze::{self, PriceSummary, Report, StockBreakdown};
use crate::dataset::Dataset;

const HISTOGRAM_BINS: usize = 30;
const MAX_BAR_WIDTH: usize = 40;

/// Prints the full report: descriptive statistics, the stock-count bar
/// chart, the price histogram, and per-group box summaries
pub fn print_report(dataset: &Dataset, report: &Report) {
    println!("\nDescriptive Statistics (Price):");
    match &report.price {
        Some(summary) => print_price_summary(summary),
        None => println!("  (no records)"),
    }

    println!("\nStock Counts:");
    print_stock_chart(&report.stock);

    if let Some(summary) = &report.price {
        let prices: Vec<f64> = dataset.records().iter().map(|book| book.price).collect();
        println!("\nPrice Distribution:");
        print_price_histogram(&prices, summary);

        println!("\nPrice by Stock Status:");
        print_box_summaries(dataset);
    }
}

fn print_price_summary(summary: &PriceSummary) {
    println!("  count  {}", summary.count);
    println!("  mean   {:.2}", summary.mean);
    println!("  std    {:.2}", summary.std);
    println!("  min    {:.2}", summary.min);
    println!("  25%    {:.2}", summary.q25);
    println!("  50%    {:.2}", summary.median);
    println!("  75%    {:.2}", summary.q75);
    println!("  max    {:.2}", summary.max);
}

fn print_stock_chart(stock: &StockBreakdown) {
    let largest = stock.in_stock.max(stock.out_of_stock);
    println!(
        "  In stock      {:>5} {}",
        stock.in_stock,
        bar(stock.in_stock, largest)
    );
    println!(
        "  Out of stock  {:>5} {}",
        stock.out_of_stock,
        bar(stock.out_of_stock, largest)
    );
}

fn print_price_histogram(prices: &[f64], summary: &PriceSummary) {
    let span = summary.max - summary.min;
    if span <= 0.0 {
        println!("  all {} record(s) priced at {:.2}", prices.len(), summary.min);
        return;
    }

    let mut bins = [0usize; HISTOGRAM_BINS];
    for price in prices {
        let position = (price - summary.min) / span * HISTOGRAM_BINS as f64;
        let index = (position as usize).min(HISTOGRAM_BINS - 1);
        bins[index] += 1;
    }

    let largest = bins.iter().copied().max().unwrap_or(0);
    let width = span / HISTOGRAM_BINS as f64;
    for (index, &count) in bins.iter().enumerate() {
        let low = summary.min + width * index as f64;
        println!(
            "  {:>7.2}-{:<7.2} {:>4} {}",
            low,
            low + width,
            count,
            bar(count, largest)
        );
    }
}

/// Five-number summaries of price, split by the derived stock flag
fn print_box_summaries(dataset: &Dataset) {
    for (label, flag) in [("In stock", true), ("Out of stock", false)] {
        let prices: Vec<f64> = dataset
            .records()
            .iter()
            .filter(|book| book.in_stock() == flag)
            .map(|book| book.price)
            .collect();

        match analyze::describe(&prices) {
            Some(summary) => println!(
                "  {:<13} min {:.2} | q1 {:.2} | median {:.2} | q3 {:.2} | max {:.2}",
                label, summary.min, summary.q25, summary.median, summary.q75, summary.max
            ),
            None => println!("  {:<13} (no records)", label),
        }
    }
}

fn bar(count: usize, largest: usize) -> String {
    if largest == 0 {
        return String::new();
    }
    let length = count * MAX_BAR_WIDTH / largest;
    "#".repeat(length)
}
