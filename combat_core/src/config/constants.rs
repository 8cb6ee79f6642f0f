//! Combat constants configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{parse_json, parse_toml, read_file, ConfigError};

/// Tunable combat constants
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CombatConfig {
    #[serde(default)]
    pub multi_hit: MultiHitConstants,
    #[serde(default)]
    pub posture: PostureConstants,
    #[serde(default)]
    pub damage_reduction: DamageReductionConstants,
    #[serde(default)]
    pub hit_count: HitCountConstants,
}

impl CombatConfig {
    /// Load constants from a `.toml` or `.json` file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = read_file(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };
        tracing::debug!("Loaded combat config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate constants from a TOML string
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: CombatConfig = parse_toml(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate constants from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: CombatConfig = parse_json(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every table and fraction is usable by the resolvers
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_table("multi_hit.hp_table", &self.multi_hit.hp_table)?;
        validate_table("multi_hit.posture_table", &self.multi_hit.posture_table)?;
        validate_min_scalar("multi_hit.hp_min_scalar", self.multi_hit.hp_min_scalar)?;
        validate_min_scalar(
            "multi_hit.posture_min_scalar",
            self.multi_hit.posture_min_scalar,
        )?;

        let cap = self.posture.overkill_cap_fraction;
        if !cap.is_finite() || !(0.0..=1.0).contains(&cap) {
            return Err(ConfigError::Validation(format!(
                "posture.overkill_cap_fraction must be within [0, 1], got {cap}"
            )));
        }

        let max = self.damage_reduction.max_fraction;
        if !max.is_finite() || !(0.0..1.0).contains(&max) {
            return Err(ConfigError::Validation(format!(
                "damage_reduction.max_fraction must be within [0, 1), got {max}"
            )));
        }

        for (name, value) in [
            ("hit_count.set_bonus", self.hit_count.set_bonus),
            ("hit_count.resonance_bonus", self.hit_count.resonance_bonus),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        Ok(())
    }
}

fn validate_table(name: &str, table: &[f64]) -> Result<(), ConfigError> {
    if table.is_empty() {
        return Err(ConfigError::Validation(format!("{name} must not be empty")));
    }
    if let Some(bad) = table.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(ConfigError::Validation(format!(
            "{name} entries must be finite and non-negative, got {bad}"
        )));
    }
    Ok(())
}

fn validate_min_scalar(name: &str, value: Option<f64>) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(ConfigError::Validation(format!(
            "{name} must be finite and non-negative, got {v}"
        ))),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiHitConstants {
    /// HP damage multiplier per hit position; the last entry repeats
    #[serde(default = "default_hp_table")]
    pub hp_table: Vec<f64>,
    /// Floor for the HP multiplier
    #[serde(default = "default_hp_min_scalar")]
    pub hp_min_scalar: Option<f64>,
    /// Posture damage multiplier per hit position; the last entry repeats
    #[serde(default = "default_posture_table")]
    pub posture_table: Vec<f64>,
    #[serde(default)]
    pub posture_min_scalar: Option<f64>,
}

impl Default for MultiHitConstants {
    fn default() -> Self {
        MultiHitConstants {
            hp_table: default_hp_table(),
            hp_min_scalar: default_hp_min_scalar(),
            posture_table: default_posture_table(),
            posture_min_scalar: None,
        }
    }
}

fn default_hp_table() -> Vec<f64> {
    vec![1.0, 0.4, 0.25, 0.2, 0.15, 0.1]
}
fn default_hp_min_scalar() -> Option<f64> {
    Some(0.15)
}
fn default_posture_table() -> Vec<f64> {
    vec![1.0, 0.85, 0.75, 0.6, 0.5, 0.4]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostureConstants {
    /// Overkill allowed per action as a fraction of max posture
    #[serde(default = "default_overkill_cap_fraction")]
    pub overkill_cap_fraction: f64,
}

impl Default for PostureConstants {
    fn default() -> Self {
        PostureConstants {
            overkill_cap_fraction: default_overkill_cap_fraction(),
        }
    }
}

fn default_overkill_cap_fraction() -> f64 {
    0.35
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageReductionConstants {
    /// Upper bound on the reduction fraction; always below 1.0
    #[serde(default = "default_max_reduction_fraction")]
    pub max_fraction: f64,
}

impl Default for DamageReductionConstants {
    fn default() -> Self {
        DamageReductionConstants {
            max_fraction: default_max_reduction_fraction(),
        }
    }
}

fn default_max_reduction_fraction() -> f64 {
    0.9
}

/// Defaults used when a hit context carries no override
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HitCountConstants {
    /// Extra hits granted by equipped sets
    #[serde(default)]
    pub set_bonus: f64,
    /// Extra hits from resonance when no resonance context is supplied
    #[serde(default)]
    pub resonance_bonus: f64,
}
