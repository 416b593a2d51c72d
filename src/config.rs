use std::path::Path;
use std::time::Duration;

use crate::board::Cell;
use crate::error::ConfigError;

/// Longest pacing delay accepted from a config file
const MAX_PACING_MS: u64 = 10_000;

/// Glyphs used to draw each cell mark.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub empty: String,
    pub player_a: String,
    pub player_b: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Glyphs {
            empty: " ".to_string(),
            player_a: "◯".to_string(),
            player_b: "×".to_string(),
        }
    }
}

impl Glyphs {
    pub fn for_cell(&self, cell: Cell) -> &str {
        match cell {
            Cell::Empty => &self.empty,
            Cell::PlayerA => &self.player_a,
            Cell::PlayerB => &self.player_b,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pause before the opponent's move is shown, in milliseconds
    pub pacing_ms: u64,
    /// Seed for the opponent's random fallback; entropy when unset
    pub seed: Option<u64>,
    pub glyphs: Glyphs,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            pacing_ms: 500,
            seed: None,
            glyphs: Glyphs::default(),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file without validating it, for callers that still
    /// layer overrides on top.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Replace the seed and pacing with any values given on the command line.
    pub fn with_overrides(mut self, seed: Option<u64>, pacing_ms: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(ms) = pacing_ms {
            self.pacing_ms = ms;
        }
        self
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pacing_ms > MAX_PACING_MS {
            return Err(ConfigError::Validation(format!(
                "pacing_ms must be <= {MAX_PACING_MS}"
            )));
        }

        let g = &self.glyphs;
        if g.empty.is_empty() || g.player_a.is_empty() || g.player_b.is_empty() {
            return Err(ConfigError::Validation(
                "glyphs must not be empty strings".into(),
            ));
        }
        if g.empty == g.player_a || g.empty == g.player_b || g.player_a == g.player_b {
            return Err(ConfigError::Validation(
                "glyphs must be distinct".into(),
            ));
        }
        Ok(())
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.pacing_ms)
    }
}
