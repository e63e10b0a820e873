//! Command-line argument parsing for the demo binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// planet-sim command-line arguments.
///
/// CLI values override settings loaded from `planet-sim.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "planet-sim", about = "Steps a cloud of planets with semi-implicit Euler")]
pub struct CliArgs {
    /// Number of bodies to spawn.
    #[arg(long)]
    pub bodies: Option<usize>,

    /// Number of ticks to simulate.
    #[arg(long)]
    pub ticks: Option<u32>,

    /// Time step per tick in seconds.
    #[arg(long)]
    pub dt: Option<f32>,

    /// RNG seed for body placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Record and draw trails.
    #[arg(long)]
    pub trails: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(n) = args.bodies {
            self.demo.bodies = n;
        }
        if let Some(t) = args.ticks {
            self.demo.ticks = t;
        }
        if let Some(dt) = args.dt {
            self.demo.dt = dt;
        }
        if let Some(seed) = args.seed {
            self.scatter.seed = seed;
        }
        if let Some(trails) = args.trails {
            self.trail.enabled = trails;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            bodies: Some(3),
            dt: Some(0.5),
            trails: Some(true),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.demo.bodies, 3);
        assert_eq!(config.demo.dt, 0.5);
        assert!(config.trail.enabled);
        // Non-overridden fields retain defaults
        assert_eq!(config.demo.ticks, 600);
        assert_eq!(config.scatter.seed, 0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::try_parse_from([
            "planet-sim",
            "--ticks",
            "10",
            "--seed",
            "7",
            "--trails",
            "true",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.ticks, Some(10));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.trails, Some(true));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.config.is_none());
    }
}
