//! Configuration system for AntForge.
//!
//! Load colony parameters from TOML or YAML files to tune the solver
//! without code changes. Every key is optional; missing keys take the
//! defaults listed on [`AcoConfig`].
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use antforge_config::{AcoConfig, ThreadCount};
//!
//! let config = AcoConfig::from_toml_str(r#"
//!     ants_per_iteration = 30
//!     q0 = 0.05
//!     tau_max = 20.0
//!     random_seed = 7
//!     thread_count = { count = 4 }
//! "#).unwrap();
//!
//! assert_eq!(config.ants_per_iteration, 30);
//! assert_eq!(config.iterations, 100);
//! assert_eq!(config.thread_count, ThreadCount::Count(4));
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use antforge_config::AcoConfig;
//!
//! let config = AcoConfig::load("colony.toml").unwrap_or_default();
//! assert_eq!(config.rho, 0.1);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Colony parameters.
///
/// | key                  | default |
/// |----------------------|---------|
/// | `ants_per_iteration` | 20      |
/// | `iterations`         | 100     |
/// | `alpha`              | 1.0     |
/// | `beta`               | 2.0     |
/// | `rho`                | 0.1     |
/// | `q`                  | 100.0   |
/// | `q0`                 | 0.0     |
/// | `tau_min`            | 0.01    |
/// | `tau_max`            | 10.0    |
/// | `show_progress`      | true    |
/// | `random_seed`        | none    |
/// | `thread_count`       | `auto`  |
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AcoConfig {
    /// Number of agents constructing a candidate each iteration.
    pub ants_per_iteration: usize,

    /// Number of construction/update iterations. The only stopping condition.
    pub iterations: usize,

    /// Pheromone exponent.
    pub alpha: f64,

    /// Heuristic exponent.
    pub beta: f64,

    /// Evaporation rate, expected in (0, 1).
    pub rho: f64,

    /// Deposit scale.
    pub q: f64,

    /// Probability of exploiting the best-scored item instead of sampling.
    pub q0: f64,

    /// Lower pheromone bound.
    pub tau_min: f64,

    /// Upper pheromone bound.
    pub tau_max: f64,

    /// Whether to emit periodic progress events.
    pub show_progress: bool,

    /// Random seed for reproducible runs.
    pub random_seed: Option<u64>,

    /// Number of threads constructing candidates in parallel.
    pub thread_count: ThreadCount,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants_per_iteration: 20,
            iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            rho: 0.1,
            q: 100.0,
            q0: 0.0,
            tau_min: 0.01,
            tau_max: 10.0,
            show_progress: true,
            random_seed: None,
            thread_count: ThreadCount::Auto,
        }
    }
}

impl AcoConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, everything
    /// else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the number of agents per iteration.
    pub fn with_ants_per_iteration(mut self, ants: usize) -> Self {
        self.ants_per_iteration = ants;
        self
    }

    /// Sets the iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the pheromone and heuristic exponents.
    pub fn with_exponents(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the deposit scale.
    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    /// Sets the exploitation probability.
    pub fn with_q0(mut self, q0: f64) -> Self {
        self.q0 = q0;
        self
    }

    /// Sets the pheromone bounds.
    pub fn with_bounds(mut self, tau_min: f64, tau_max: f64) -> Self {
        self.tau_min = tau_min;
        self.tau_max = tau_max;
        self
    }

    /// Enables or disables progress events.
    pub fn with_show_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the construction thread count.
    pub fn with_thread_count(mut self, thread_count: ThreadCount) -> Self {
        self.thread_count = thread_count;
        self
    }

    /// Rejects parameters that cannot drive the colony at all.
    ///
    /// Only non-finite numbers are rejected. Finite values outside their
    /// expected ranges are accepted; see [`check`](Self::check).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let params = [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("rho", self.rho),
            ("q", self.q),
            ("q0", self.q0),
            ("tau_min", self.tau_min),
            ("tau_max", self.tau_max),
        ];

        match params.iter().find(|(_, v)| !v.is_finite()) {
            Some((name, v)) => Err(ConfigError::Invalid(format!(
                "{} must be finite, got {}",
                name, v
            ))),
            None => Ok(()),
        }
    }

    /// Lists parameters outside their expected ranges.
    ///
    /// Such values still run, with degenerate behavior (a trail that never
    /// decays, bounds that collapse to one value, and so on).
    pub fn check(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.ants_per_iteration == 0 {
            warnings.push("ants_per_iteration is 0, no candidates will be built".to_string());
        }
        if self.iterations == 0 {
            warnings.push("iterations is 0, the colony will not run".to_string());
        }
        if self.alpha < 0.0 {
            warnings.push(format!("alpha should be >= 0, got {}", self.alpha));
        }
        if self.beta < 0.0 {
            warnings.push(format!("beta should be >= 0, got {}", self.beta));
        }
        if self.rho <= 0.0 || self.rho >= 1.0 {
            warnings.push(format!("rho should be in (0, 1), got {}", self.rho));
        }
        if self.q <= 0.0 {
            warnings.push(format!("q should be > 0, got {}", self.q));
        }
        if !(0.0..=1.0).contains(&self.q0) {
            warnings.push(format!("q0 should be in [0, 1], got {}", self.q0));
        }
        if self.tau_min >= self.tau_max {
            warnings.push(format!(
                "tau_min ({}) should be below tau_max ({})",
                self.tau_min, self.tau_max
            ));
        }

        warnings
    }
}

/// Construction thread count configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadCount {
    /// Use the global rayon pool.
    #[default]
    Auto,

    /// Construct every candidate on the calling thread.
    None,

    /// Use a dedicated pool with this many threads.
    Count(usize),
}
