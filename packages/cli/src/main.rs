#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command line explorer for the data.police.uk API.
//!
//! ```text
//! ukpolice forces
//! ukpolice availability
//! ukpolice stops-by-force --force avon-and-somerset --date 2017-01
//! ukpolice street-crimes --lat 52.629729 --lng -1.131592 [--date 2017-01]
//! ukpolice fan-out [--force metropolitan] [--limit 12] [--concurrency 8]
//! ukpolice raw forces/leicestershire
//! ```
//!
//! `UKPOLICE_BASE_URL` and `UKPOLICE_USER_AGENT` are honoured; `--base-url`
//! and `--user-agent` take precedence. Ctrl-C cancels any calls in flight.

use std::time::Instant;

use clap::{Parser, Subcommand};
use futures::{StreamExt as _, stream};
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use ukpolice::{Client, ClientBuilder, Destination, Method, QueryOption, Response};

#[derive(Parser)]
#[command(name = "ukpolice", about = "Query the data.police.uk API")]
struct Cli {
    /// API root (defaults to UKPOLICE_BASE_URL, then the public API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// User-Agent header (empty to omit)
    #[arg(long, global = true)]
    user_agent: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all forces
    Forces,
    /// List months with data and the forces publishing stop and search
    Availability,
    /// Stop and searches reported by a force for one month
    StopsByForce {
        /// Force slug
        #[arg(long)]
        force: String,
        /// Month, YYYY-MM
        #[arg(long)]
        date: Option<String>,
    },
    /// Street-level crimes within a mile of a point
    StreetCrimes {
        /// Latitude
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        /// Longitude
        #[arg(long, allow_hyphen_values = true)]
        lng: String,
        /// Month, YYYY-MM
        #[arg(long)]
        date: Option<String>,
    },
    /// Fetch stop and search counts for every available month concurrently
    FanOut {
        /// Force slug
        #[arg(long, default_value = "metropolitan")]
        force: String,
        /// Number of most recent months to fetch
        #[arg(long, default_value = "12")]
        limit: usize,
        /// Calls in flight at once
        #[arg(long, default_value = "8")]
        concurrency: usize,
    },
    /// GET a path relative to the API root and print the body as is
    Raw {
        /// Relative path, including any query string
        path: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut builder = ClientBuilder::from_env();
    if let Some(base_url) = cli.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(user_agent) = cli.user_agent {
        builder = builder.user_agent(user_agent);
    }

    let token = CancellationToken::new();
    let client = builder.build()?.with_cancellation(token.clone());
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::info!("Interrupted, cancelling outstanding calls");
            token.cancel();
        }
    });

    match cli.command {
        Commands::Forces => print_json(&client.forces().get_forces().await?)?,
        Commands::Availability => {
            print_json(&client.availability().get_availability_info().await?)?;
        }
        Commands::StopsByForce { force, date } => {
            let mut options = vec![QueryOption::force(force)];
            options.extend(date.map(QueryOption::date));
            print_json(&client.stop_and_search().get_by_force(&options).await?)?;
        }
        Commands::StreetCrimes { lat, lng, date } => {
            let mut options = vec![QueryOption::lat_lng(lat, lng)];
            options.extend(date.map(QueryOption::date));
            print_json(&client.crimes().get_street_level_crimes(&options).await?)?;
        }
        Commands::FanOut {
            force,
            limit,
            concurrency,
        } => fan_out(&client, &force, limit, concurrency).await?,
        Commands::Raw { path } => {
            let request = client.new_request(Method::GET, &path)?;
            let mut stdout = std::io::stdout();
            let meta = client
                .execute(request, Destination::raw(&mut stdout))
                .await?;
            println!();
            log::info!("{} {}", meta.status, meta.url);
        }
    }

    Ok(())
}

async fn fan_out(
    client: &Client,
    force: &str,
    limit: usize,
    concurrency: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let months = client
        .availability()
        .get_availability_info()
        .await?
        .into_data()
        .into_iter()
        .filter(|info| info.stop_and_search.iter().any(|f| f == force))
        .take(limit)
        .map(|info| info.date)
        .collect::<Vec<_>>();

    if months.is_empty() {
        println!("No months with stop and search data for {force}.");
        return Ok(());
    }

    log::info!(
        "Fetching {} month(s) for {force}, {concurrency} at a time",
        months.len()
    );

    let start = Instant::now();
    let mut results = stream::iter(months)
        .map(|month| async move {
            let options = [QueryOption::force(force), QueryOption::date(month.as_str())];
            let result = client.stop_and_search().get_by_force(&options).await;
            (month, start.elapsed(), result)
        })
        .buffer_unordered(concurrency.max(1));

    let mut failures = 0_usize;
    while let Some((month, elapsed, result)) = results.next().await {
        match result {
            Ok(response) => println!(
                "{:>8.2}s  {month}  {}  {} searches",
                elapsed.as_secs_f64(),
                response.meta.status,
                response.data.len()
            ),
            Err(e) => {
                failures += 1;
                println!("{:>8.2}s  {month}  error: {e}", elapsed.as_secs_f64());
            }
        }
    }

    println!(
        "\nDone in {:.2}s ({failures} failed); last error rate: {}",
        start.elapsed().as_secs_f64(),
        client.rate()
    );

    Ok(())
}

fn print_json<T: Serialize>(response: &Response<T>) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(&response.data)?);
    Ok(())
}
