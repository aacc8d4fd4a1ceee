use anyhow::Result;
use clap::{Parser, Subcommand};

use salescast::cli::{handle_forecast_command, handle_inspect_command, ForecastArgs, InspectArgs};
use salescast::config::{paths::SalescastPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "salescast",
    version,
    about = "Terminal-based retail sales forecasting",
    long_about = "Salescast ingests a retail sales CSV, aggregates it to monthly \
                  totals, fits a trend/seasonality model, and prints a forecast \
                  with confidence intervals. The forecast window can be exported \
                  as CSV or JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a forecast over a sales CSV
    #[command(alias = "run")]
    Forecast(ForecastArgs),

    /// Show the columns and sample rows of a sales CSV
    Inspect(InspectArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SalescastPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Forecast(args)) => {
            handle_forecast_command(&settings, args)?;
        }
        Some(Commands::Inspect(args)) => {
            handle_inspect_command(args)?;
        }
        Some(Commands::Config) => {
            println!("Salescast Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Default horizon:   {} months", settings.default_horizon);
            println!("  Seasonality mode:  {:?}", settings.seasonality_mode);
            println!("  Confidence level:  {}", settings.confidence_level);
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
        }
        None => {
            println!("Salescast - Terminal-based retail sales forecasting");
            println!();
            println!("Run 'salescast --help' for usage information.");
            println!("Run 'salescast forecast <file.csv>' to forecast a sales export.");
        }
    }

    Ok(())
}
