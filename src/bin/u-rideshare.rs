//! Command-line front end: reads a JSON ride request and prints the plan.
//!
//! ```text
//! u-rideshare demos/party.json
//! ```

use std::{fs, path::PathBuf, process};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use u_rideshare::planner::{plan, RidePlan, RideRequest};

#[derive(Debug, Parser)]
#[command(
    name = "u-rideshare",
    about = "Plan a shared ride home and split the fare by distance"
)]
struct Args {
    /// JSON ride request (departure, locations, riders, total_cost, ...)
    request: PathBuf,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "u_rideshare=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let path = args.request.display();
    let raw = fs::read_to_string(&args.request).with_context(|| format!("reading {path}"))?;
    let request: RideRequest =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;

    let ride = plan(&request).context("planning ride")?;
    print_plan(&ride, &request.config.distance_unit);
    Ok(())
}

fn print_plan(ride: &RidePlan, unit: &str) {
    println!("Car: {}", ride.owner);
    println!("Route: {}", ride.route);
    for hop in ride.route.hops() {
        println!("  {}", hop.describe(unit));
    }

    println!();
    println!("{:<16} {:>10} {:>10}", "rider", "payment", "distance");
    for share in ride.allocation.shares() {
        println!(
            "{:<16} {:>10} {:>10.1}",
            share.rider, share.payment, share.coefficient
        );
    }
    println!(
        "total {} of {} (rounding loss {})",
        ride.allocation.total_paid(),
        ride.allocation.total_cost(),
        ride.allocation.shortfall()
    );
}
