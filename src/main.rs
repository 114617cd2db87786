use book_harvest::session::Session;
use clap::Parser;

mod args;
use args::Args;

fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args.into_config() {
        Ok(config) => config,
        Err(error) => {
            ::log::error!("Failed to load configuration: {}", error);
            return;
        }
    };

    ::log::info!("Catalogue root: {}", config.base_url);

    let mut session = Session::new(config);
    if let Err(error) = session.run() {
        ::log::error!("Session ended with an error: {}", error);
    }
}
