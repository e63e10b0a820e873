//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::CliArgs;
use crate::error::{BodyError, ConfigError};
use crate::material::{Material, DEFAULT_DENSITY};

/// File name used inside the config directory.
pub const CONFIG_FILE: &str = "planet-sim.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Body settings.
    pub body: BodyConfig,
    /// Trail settings.
    pub trail: TrailConfig,
    /// Random body generation.
    pub scatter: ScatterConfig,
    /// Demo loop settings.
    pub demo: DemoConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    /// Density used to derive mass from radius.
    pub density: f32,
}

/// Trail configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrailConfig {
    /// Attach a trail to spawned bodies.
    pub enabled: bool,
    /// Seconds a trail node stays visible.
    pub lifetime: f32,
    /// Maximum number of nodes kept per body.
    pub capacity: usize,
}

/// Parameters for scattering bodies in a spherical shell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScatterConfig {
    /// Inner radius of the shell.
    pub inner_radius: f32,
    /// Outer radius of the shell.
    pub outer_radius: f32,
    /// Smallest body radius.
    pub min_radius: f32,
    /// Largest body radius.
    pub max_radius: f32,
    /// Tangential speed given to every body.
    pub orbital_speed: f32,
    /// RNG seed, so runs are reproducible.
    pub seed: u64,
}

/// Demo loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of bodies to spawn.
    pub bodies: usize,
    /// Number of ticks to simulate.
    pub ticks: u32,
    /// Time step per tick in seconds.
    pub dt: f32,
    /// Acceleration toward the origin applied to every body each tick.
    pub central_pull: f32,
    /// Columns of the extra block of bodies spawned beside the shell (0 = none).
    pub grid_columns: u32,
    /// Rows of that block.
    pub grid_rows: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
        }
    }
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            lifetime: 2.0,
            capacity: 256,
        }
    }
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            inner_radius: 25.0,
            outer_radius: 200.0,
            min_radius: 0.5,
            max_radius: 2.0,
            orbital_speed: 1.0,
            seed: 0,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            bodies: 64,
            ticks: 600,
            dt: 1.0 / 60.0,
            central_pull: 1.0,
            grid_columns: 0,
            grid_rows: 0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl BodyConfig {
    pub fn material(&self) -> Result<Material, BodyError> {
        Material::new(self.density)
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Platform config directory, e.g. `~/.config/planet-sim` on Linux.
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("planet-sim")
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            tracing::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            tracing::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Re-reads the file and adopts the settings that may change while the
    /// simulation runs: `demo.dt` and `demo.central_pull`. CLI `overrides`
    /// are applied to the fresh copy first so flags keep winning. Returns
    /// whether anything was adopted.
    pub fn reload_tuning(
        &mut self,
        config_dir: &Path,
        overrides: &CliArgs,
    ) -> Result<bool, ConfigError> {
        let mut fresh = Self::read(&config_dir.join(CONFIG_FILE))?;
        fresh.apply_cli_overrides(overrides);

        let mut changed = false;
        if fresh.demo.dt != self.demo.dt {
            tracing::info!(old = self.demo.dt, new = fresh.demo.dt, "time step retuned");
            self.demo.dt = fresh.demo.dt;
            changed = true;
        }
        if fresh.demo.central_pull != self.demo.central_pull {
            tracing::info!(
                old = self.demo.central_pull,
                new = fresh.demo.central_pull,
                "central pull retuned"
            );
            self.demo.central_pull = fresh.demo.central_pull;
            changed = true;
        }

        fresh.demo.dt = self.demo.dt;
        fresh.demo.central_pull = self.demo.central_pull;
        if &fresh != self {
            tracing::debug!("other config changes take effect on the next run");
        }
        Ok(changed)
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
