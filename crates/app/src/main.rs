mod args;
mod replay;

use std::sync::Arc;

use clap::Parser;
use eyre::{Result, WrapErr};
use fitness_core::ProgressModel;
use fitness_services::{AlertCenter, AlertRecord, Clock};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Args;
use crate::replay::{ReplayPlan, replay};

fn setup_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).wrap_err_with(|| format!("invalid log level: {level}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(args: Args) -> Result<()> {
    setup_logging(&args.log_level)?;

    let alerts = Arc::new(AlertCenter::new(Clock::System));
    alerts.subscribe(Arc::new(|alert: &AlertRecord| {
        println!("[{}] {}", alert.posted_at.format("%H:%M:%S"), alert.milestone);
    }));

    let mut model = ProgressModel::new(alerts.clone());
    let plan = ReplayPlan {
        goal: args.goal,
        samples: args.steps,
        stride: args.stride,
        pursuer_pace: args.pursuer_pace,
    };
    info!(goal = ?plan.goal, samples = plan.samples.len(), "starting replay");

    let outcome = replay(&mut model, &plan).wrap_err("replay failed")?;
    info!(
        samples_applied = outcome.samples_applied,
        alerts = alerts.alerts().len(),
        "replay finished"
    );

    let snapshot = &outcome.snapshot;
    if args.json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
    } else {
        let goal = snapshot
            .goal
            .map_or_else(|| "none".to_string(), |goal| goal.to_string());
        println!(
            "steps {} / goal {goal}, you {:.1} m, monster {:.1} m",
            snapshot.steps, snapshot.distance, snapshot.pursuer_distance
        );
        if snapshot.caught {
            println!("caught!");
        } else if snapshot.goal_reached {
            println!("goal reached, you escaped");
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("{err:?}");
        std::process::exit(2);
    }
}
