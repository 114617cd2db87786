use crate::analyze;
use crate::collector::Collector;
use crate::config::HarvestConfig;
use crate::dataset::Dataset;
use crate::error::HarvestError;
use crate::fetch::HttpFetcher;
use crate::render;
use crate::search;
use std::io::{self, Write};
use std::path::Path;

/// Query that ends the interactive search loop
const SEARCH_EXIT: &str = "exit";

/// Holds the dataset for the lifetime of one interactive run.
///
/// The dataset lives here, owned by the session object the caller passes
/// around, so menu operations share it without any process-wide state.
pub struct Session {
    config: HarvestConfig,
    dataset: Option<Dataset>,
}

impl Session {
    pub fn new(config: HarvestConfig) -> Self {
        Self {
            config,
            dataset: None,
        }
    }

    /// Runs the interactive menu until the user quits
    pub fn run(&mut self) -> io::Result<()> {
        println!("Welcome to the Library Database!");

        loop {
            println!();
            println!("Please choose an option:");
            println!("1. Harvest book data from the catalogue");
            println!("2. Analyze the book data");
            println!("3. Search for a book");
            println!("4. Exit");

            let choice = prompt("Enter your choice (1-4): ")?;
            match choice.as_str() {
                "1" => self.run_harvest(),
                "2" => self.run_analysis(),
                "3" => self.run_search()?,
                "4" => {
                    println!("Thank you for using the Library Database. Goodbye!");
                    return Ok(());
                }
                _ => println!("Invalid choice. Please enter a number between 1 and 4."),
            }
        }
    }

    fn run_harvest(&mut self) {
        println!("Harvesting book data from the catalogue. Please wait...");

        match self.collect_and_save() {
            Ok(dataset) => {
                println!(
                    "Harvest complete. {} records saved to '{}'.",
                    dataset.len(),
                    self.config.output_path
                );
                self.dataset = Some(dataset);
            }
            // All collection errors are fatal for the run; nothing partial
            // is kept and the previous dataset, if any, stays in place.
            Err(error) => println!("Harvest failed: {}", error),
        }
    }

    /// Collects, finalizes and persists a fresh dataset
    fn collect_and_save(&self) -> Result<Dataset, HarvestError> {
        let fetcher = HttpFetcher::new(self.config.site_url()?);
        let mut collector = Collector::new(fetcher, self.config.link_base()?);

        let records = collector.collect()?;
        let dataset = Dataset::finalize(records);
        dataset.save_csv(&self.config.output_path)?;

        Ok(dataset)
    }

    fn run_analysis(&mut self) {
        let Some(dataset) = self.loaded_dataset() else {
            println!("Please harvest the book data first (Option 1).");
            return;
        };

        let report = analyze::analyze(dataset);
        render::print_report(dataset, &report);
    }

    fn run_search(&mut self) -> io::Result<()> {
        let Some(dataset) = self.loaded_dataset() else {
            println!("Please harvest the book data first (Option 1).");
            return Ok(());
        };

        loop {
            let query = prompt("\nEnter the title to search for (or type 'exit' to quit): ")?;
            if query.eq_ignore_ascii_case(SEARCH_EXIT) {
                return Ok(());
            }

            let matches = search::search(dataset, &query);
            if matches.is_empty() {
                println!("No books found with that title. Please try again.");
                continue;
            }

            for book in matches {
                println!();
                println!("Title: {}", book.title);
                println!("Price: £{}", book.price);
                println!("Stock: {}", book.stock_status);
                println!("Link: {}", book.link);
            }
        }
    }

    /// The in-memory dataset, falling back to the persisted file from an
    /// earlier run when nothing has been harvested in this session
    fn loaded_dataset(&mut self) -> Option<&Dataset> {
        if self.dataset.is_none() && Path::new(&self.config.output_path).exists() {
            match Dataset::load_csv(&self.config.output_path) {
                Ok(dataset) => {
                    println!(
                        "Loaded {} records from '{}'.",
                        dataset.len(),
                        self.config.output_path
                    );
                    self.dataset = Some(dataset);
                }
                Err(error) => {
                    ::log::warn!(
                        "Could not load '{}': {}",
                        self.config.output_path,
                        error
                    );
                }
            }
        }

        self.dataset.as_ref()
    }
}

/// Prints a prompt and reads one trimmed line from stdin
fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
