use book_harvest::config::HarvestConfig;
use book_harvest::error::HarvestError;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "book-harvest")]
#[command(about = "Harvests a paginated book catalogue into a searchable dataset")]
#[command(version)]
pub struct Args {
    /// Root URL of the catalogue site
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path of the CSV file the dataset is persisted to
    #[arg(short, long)]
    pub output: Option<String>,

    /// JSON configuration file (flags override its values)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    /// Folds the configuration file and the command-line overrides into one
    /// config
    pub fn into_config(self) -> Result<HarvestConfig, HarvestError> {
        let mut config = match &self.config {
            Some(path) => HarvestConfig::from_file(path)?,
            None => HarvestConfig::default(),
        };

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }

        Ok(config)
    }
}
