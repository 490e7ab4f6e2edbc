use clap::Parser;
use tracing::{debug, error};

use betsettle::cli::{self, output, Cli};
use betsettle::config::Config;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    let config = match Config::load_or_default(cli.command.config_path()) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();
    debug!(command = ?cli.command, "betsettle starting");

    if let Err(e) = cli::execute(&cli.command, &config) {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
