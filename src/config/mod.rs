// src/config/mod.rs
pub mod types;

pub use self::types::{LinkRankToml, RankConfig};

use std::fs;
use std::path::Path;

use crate::error::{RankError, Result};
use crate::graph::rank::transition::check_damping;

pub const CONFIG_FILE: &str = "linkrank.toml";

impl RankConfig {
    /// Loads `linkrank.toml` from `dir`, falling back to defaults when absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|source| RankError::Io {
            source,
            path: path.clone(),
        })?;
        Self::parse_toml(&content)
    }

    /// Parses the contents of a `linkrank.toml`.
    ///
    /// # Errors
    /// Returns `Config` on malformed TOML or wrongly typed fields.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let file: LinkRankToml =
            toml::from_str(content).map_err(|e| RankError::Config(e.to_string()))?;
        Ok(file.rank)
    }

    /// Checks every parameter's domain.
    ///
    /// # Errors
    /// Returns `InvalidArgument` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        if self.samples == 0 {
            return Err(RankError::invalid("samples must be at least 1"));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(RankError::invalid(format!(
                "epsilon must be finite and non-negative, got {}",
                self.epsilon
            )));
        }
        if self.max_iterations == 0 {
            return Err(RankError::invalid("max_iterations must be at least 1"));
        }
        Ok(())
    }
}
