mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use skyroute_cli::output::{format_footer, OutputFormat};
use skyroute_cli::terminal::ColorPalette;
use skyroute_lib::{DatasetOptions, DEFAULT_RATE_PER_KM};

use commands::info::handle_info_command;
use commands::route::{handle_route_command, RouteCommandArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Cheapest direct-flight route planner")]
struct Cli {
    /// Directory containing airports.csv and flights.csv.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Override the airport table path.
    #[arg(long, global = true)]
    airports: Option<PathBuf>,

    /// Override the flight table path.
    #[arg(long, global = true)]
    flights: Option<PathBuf>,

    /// Price charged per kilometre flown.
    #[arg(long, global = true, default_value_t = DEFAULT_RATE_PER_KM)]
    rate: f64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn dataset_options(&self) -> DatasetOptions {
        DatasetOptions {
            data_dir: self.data_dir.clone(),
            airports: self.airports.clone(),
            flights: self.flights.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the cheapest chain of direct flights between two airports.
    Route {
        /// Origin IATA code.
        #[arg(long = "from")]
        from: String,
        /// Destination IATA code.
        #[arg(long = "to")]
        to: String,
    },
    /// Report airport and flight counts for the dataset.
    Info,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let palette = ColorPalette::detect();
    let started = Instant::now();

    match run(&cli) {
        Ok(rendered) => {
            print!("{rendered}");
            if cli.format == OutputFormat::Text {
                println!("\n{}", format_footer(started.elapsed(), &palette));
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}error:{} {err:#}", palette.red, palette.reset);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String> {
    let options = cli.dataset_options();
    match &cli.command {
        Command::Route { from, to } => {
            let args = RouteCommandArgs {
                from: from.clone(),
                to: to.clone(),
                rate: cli.rate,
            };
            handle_route_command(&options, &args, cli.format)
        }
        Command::Info => handle_info_command(&options, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
