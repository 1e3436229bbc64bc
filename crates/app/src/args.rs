use clap::Parser;
use fitness_core::Goal;

/// Replay a pedometer feed against a step goal while a monster gives chase.
#[derive(Debug, Clone, Parser)]
#[command(name = "fitness", version)]
pub struct Args {
    /// Step goal for the session. Without one, no milestones fire.
    #[arg(long, env = "FITNESS_GOAL")]
    pub goal: Option<Goal>,

    /// Cumulative step counts, one per pedometer sample (comma-separated).
    #[arg(long, env = "FITNESS_STEPS", value_delimiter = ',', required = true)]
    pub steps: Vec<u32>,

    /// Metres covered per step.
    #[arg(long, env = "FITNESS_STRIDE", default_value_t = 0.75)]
    pub stride: f64,

    /// Metres the pursuer advances per sample.
    #[arg(long, env = "FITNESS_PURSUER_PACE", default_value_t = 50.0)]
    pub pursuer_pace: f64,

    /// Print the final snapshot as JSON.
    #[arg(long)]
    pub json: bool,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, env = "FITNESS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_command_line() {
        let args = Args::try_parse_from([
            "fitness",
            "--goal",
            "400",
            "--steps",
            "100,250,400",
            "--stride",
            "0.8",
            "--json",
        ])
        .unwrap();

        assert_eq!(args.goal, Some(Goal::new(400).unwrap()));
        assert_eq!(args.steps, vec![100, 250, 400]);
        assert_eq!(args.stride, 0.8);
        assert_eq!(args.pursuer_pace, 50.0);
        assert!(args.json);
    }

    #[test]
    fn zero_goal_is_rejected() {
        let result = Args::try_parse_from(["fitness", "--goal", "0", "--steps", "10"]);
        assert!(result.is_err());
    }
}
