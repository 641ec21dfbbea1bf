use crate::domain::Matchweek;
use std::collections::HashMap;
use thiserror::Error;

/// Engine tunables, overridable from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Last matchweek of the season; cutoffs run 0..=final_matchweek.
    pub final_matchweek: Matchweek,
    /// How many leading teams a simulation session is restricted to.
    pub top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            final_matchweek: Matchweek::new(38),
            top_k: 5,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl EngineConfig {
    /// Number of cached tables for a season (one per cutoff, including 0).
    pub fn cutoff_count(&self) -> usize {
        usize::from(self.final_matchweek.as_u8()) + 1
    }

    /// Whether a cutoff is addressable for this season.
    pub fn is_valid_cutoff(&self, cutoff: u8) -> bool {
        cutoff <= self.final_matchweek.as_u8()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let final_matchweek = env_map
            .get("FINAL_MATCHWEEK")
            .map(|s| s.as_str())
            .unwrap_or("38")
            .parse::<u8>()
            .ok()
            .filter(|w| *w >= 1)
            .map(Matchweek::new)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "FINAL_MATCHWEEK".to_string(),
                    "must be an integer >= 1".to_string(),
                )
            })?;

        let top_k = env_map
            .get("SIMULATION_TOP_K")
            .map(|s| s.as_str())
            .unwrap_or("5")
            .parse::<usize>()
            .ok()
            .filter(|k| *k >= 1)
            .ok_or_else(|| {
                ConfigError::InvalidValue(
                    "SIMULATION_TOP_K".to_string(),
                    "must be an integer >= 1".to_string(),
                )
            })?;

        Ok(EngineConfig {
            final_matchweek,
            top_k,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.final_matchweek, Matchweek::new(38));
        assert_eq!(config.top_k, 5);
        assert_eq!(config.cutoff_count(), 39);
    }

    #[test]
    fn test_from_env_map_defaults_when_unset() {
        let config = EngineConfig::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_from_env_map_overrides() {
        let mut env = HashMap::new();
        env.insert("FINAL_MATCHWEEK".to_string(), "34".to_string());
        env.insert("SIMULATION_TOP_K".to_string(), "3".to_string());
        let config = EngineConfig::from_env_map(env).unwrap();
        assert_eq!(config.final_matchweek, Matchweek::new(34));
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn test_from_env_map_rejects_zero_matchweeks() {
        let mut env = HashMap::new();
        env.insert("FINAL_MATCHWEEK".to_string(), "0".to_string());
        assert!(EngineConfig::from_env_map(env).is_err());
    }

    #[test]
    fn test_from_env_map_rejects_garbage_top_k() {
        let mut env = HashMap::new();
        env.insert("SIMULATION_TOP_K".to_string(), "five".to_string());
        assert!(EngineConfig::from_env_map(env).is_err());
    }

    #[test]
    fn test_is_valid_cutoff_bounds() {
        let config = EngineConfig::default();
        assert!(config.is_valid_cutoff(0));
        assert!(config.is_valid_cutoff(38));
        assert!(!config.is_valid_cutoff(39));
    }
}
