use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "trip-cli")]
#[command(about = "Query client for the TRIP API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the route directory
    Index,
    /// Fetch the whole dataset
    All,
    /// Records for one country (exact name, e.g. "Argentina")
    Country { name: String },
    /// Records for one year
    Year { year: String },
    /// Records for one country in one year
    CountryYear { name: String, year: String },
    /// Records by regime type (case and spacing ignored)
    RegimeType { label: String },
    /// Records by region (case and spacing ignored)
    Region { label: String },
}

impl Commands {
    fn path(&self) -> Vec<&str> {
        match self {
            Commands::Index => vec![],
            Commands::All => vec!["all"],
            Commands::Country { name } => vec!["country", name.as_str()],
            Commands::Year { year } => vec!["year", year.as_str()],
            Commands::CountryYear { name, year } => {
                vec!["country", name.as_str(), "year", year.as_str()]
            }
            Commands::RegimeType { label } => vec!["regime_type", label.as_str()],
            Commands::Region { label } => vec!["region", label.as_str()],
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let url = endpoint(&cli.url, &cli.command)?;
    let res = client.get(url).send().await?;
    print_response(res).await
}

/// Append the command's path segments to `base`, percent-encoding each one.
fn endpoint(base: &str, command: &Commands) -> Result<reqwest::Url, Box<dyn std::error::Error>> {
    let mut url = reqwest::Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| format!("{base} cannot be a base URL"))?
        .pop_if_empty()
        .extend(command.path());
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
