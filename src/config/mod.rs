//! Configuration loading and validation.
//!
//! The two working sessions share one scoring engine. What differs between
//! them (the excluded origin id, how player pools are ordered, the team drag
//! limit, the number of ad-hoc team slots) lives in per-session tables.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::{CORE_SIZE, NO_TEAM_ID, QUALIFYING_SLOTS};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// How a player pool is ordered before it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerOrder {
    /// Keep the order the data source gave us.
    AsProvided,
    /// Points, highest first.
    #[default]
    Points,
    /// Points, then first role tag, then in-game name.
    PointsRoleName,
}

/// Scoring table shared by every session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Roster entries that count toward a total
    #[serde(default = "default_core_size")]
    pub core_size: usize,

    /// Players from one origin team needed to trigger the cap
    #[serde(default = "default_stack_threshold")]
    pub stack_threshold: usize,

    /// Cap = multiplier x the strongest stacked player's points
    #[serde(default = "default_cap_multiplier")]
    pub cap_multiplier: f64,
}

fn default_core_size() -> usize {
    CORE_SIZE
}

fn default_stack_threshold() -> usize {
    3
}

fn default_cap_multiplier() -> f64 {
    5.0
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            core_size: default_core_size(),
            stack_threshold: default_stack_threshold(),
            cap_multiplier: default_cap_multiplier(),
        }
    }
}

/// Circuit points standings calculator (grouped rosters).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitConfig {
    /// Origin id that never forms a stacking group
    #[serde(default = "default_circuit_excluded_origin")]
    pub excluded_origin_id: Option<String>,

    #[serde(default)]
    pub player_order: PlayerOrder,

    /// Highest index a team can be dragged to in the ranked order
    #[serde(default = "default_team_drop_limit")]
    pub team_drop_limit: Option<usize>,

    #[serde(default = "default_qualifying_slots")]
    pub qualifying_slots: usize,
}

fn default_circuit_excluded_origin() -> Option<String> {
    Some(NO_TEAM_ID.to_string())
}

fn default_team_drop_limit() -> Option<usize> {
    Some(7)
}

fn default_qualifying_slots() -> usize {
    QUALIFYING_SLOTS
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            excluded_origin_id: default_circuit_excluded_origin(),
            player_order: PlayerOrder::default(),
            team_drop_limit: default_team_drop_limit(),
            qualifying_slots: default_qualifying_slots(),
        }
    }
}

/// Roster mania team builder (one free player pool).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManiaConfig {
    #[serde(default)]
    pub excluded_origin_id: Option<String>,

    #[serde(default = "default_mania_player_order")]
    pub player_order: PlayerOrder,

    /// Number of ad-hoc teams that can be built
    #[serde(default = "default_team_slots")]
    pub team_slots: usize,
}

fn default_mania_player_order() -> PlayerOrder {
    PlayerOrder::PointsRoleName
}

fn default_team_slots() -> usize {
    4
}

impl Default for ManiaConfig {
    fn default() -> Self {
        Self {
            excluded_origin_id: None,
            player_order: default_mania_player_order(),
            team_slots: default_team_slots(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub circuit: CircuitConfig,

    #[serde(default)]
    pub mania: ManiaConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            scoring: ScoringConfig::default(),
            circuit: CircuitConfig::default(),
            mania: ManiaConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scoring.core_size == 0 {
            return Err(ConfigError::ValidationError(
                "Core size must be greater than 0".to_string(),
            ));
        }

        if self.scoring.stack_threshold == 0 {
            return Err(ConfigError::ValidationError(
                "Stack threshold must be greater than 0".to_string(),
            ));
        }

        if !self.scoring.cap_multiplier.is_finite() || self.scoring.cap_multiplier <= 0.0 {
            return Err(ConfigError::ValidationError(
                "Cap multiplier must be a positive number".to_string(),
            ));
        }

        if self.mania.team_slots == 0 {
            return Err(ConfigError::ValidationError(
                "Roster mania needs at least one team slot".to_string(),
            ));
        }

        Ok(())
    }

    /// Engine settings for the circuit points calculator.
    pub fn circuit_engine(&self) -> EngineConfig {
        EngineConfig {
            rules: ScoringRules::from_config(&self.scoring, self.circuit.excluded_origin_id.clone()),
            player_order: self.circuit.player_order,
            team_drop_limit: self.circuit.team_drop_limit,
            qualifying_slots: self.circuit.qualifying_slots,
            team_slots: 0,
        }
    }

    /// Engine settings for the roster mania builder.
    pub fn mania_engine(&self) -> EngineConfig {
        EngineConfig {
            rules: ScoringRules::from_config(&self.scoring, self.mania.excluded_origin_id.clone()),
            player_order: self.mania.player_order,
            team_drop_limit: None,
            qualifying_slots: 0,
            team_slots: self.mania.team_slots,
        }
    }
}

/// Parameters of the capped aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRules {
    pub core_size: usize,
    pub stack_threshold: usize,
    pub cap_multiplier: f64,
    pub excluded_origin_id: Option<String>,
}

impl ScoringRules {
    pub fn from_config(scoring: &ScoringConfig, excluded_origin_id: Option<String>) -> Self {
        Self {
            core_size: scoring.core_size,
            stack_threshold: scoring.stack_threshold,
            cap_multiplier: scoring.cap_multiplier,
            excluded_origin_id,
        }
    }

    /// Whether players from this origin team are left out of stacking groups.
    pub fn is_excluded(&self, origin_team_id: &str) -> bool {
        self.excluded_origin_id.as_deref() == Some(origin_team_id)
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default(), None)
    }
}

/// Everything one working session needs to score and order rosters.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub rules: ScoringRules,
    pub player_order: PlayerOrder,
    pub team_drop_limit: Option<usize>,
    pub qualifying_slots: usize,
    pub team_slots: usize,
}

impl EngineConfig {
    /// Defaults of the grouped circuit points calculator.
    pub fn circuit() -> Self {
        AppConfig::default().circuit_engine()
    }

    /// Defaults of the ungrouped roster mania builder.
    pub fn roster_mania() -> Self {
        AppConfig::default().mania_engine()
    }
}
