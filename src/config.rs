//! Run configuration loaded from YAML.
//!
//! ```yaml
//! filename: data/cities.txt
//! population_size: 100
//! tournament_size: 3
//! seed: 42          # optional
//! parallel: false   # optional
//! ```
//!
//! Every key is type-checked on load; a missing or mistyped key is a
//! configuration error.

use crate::error::{EvoError, EvoResult};
use crate::ga::GaConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Typed run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Path of the distance-matrix file.
    ///
    /// Relative paths are resolved against the configuration file's
    /// directory by [`load`](Self::load).
    pub filename: PathBuf,

    /// Number of tours in the population.
    pub population_size: usize,

    /// Extra contenders drawn per tournament.
    pub tournament_size: usize,

    /// RNG seed; a fresh one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Evaluate fitness in parallel.
    #[serde(default)]
    pub parallel: bool,
}

impl RunConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails or a key is missing or mistyped
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> EvoResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EvoError::io(path, e))?;
        let mut config = Self::from_yaml(&content)?;

        if config.filename.is_relative() {
            if let Some(dir) = path.parent() {
                config.filename = dir.join(&config.filename);
            }
        }
        log::debug!("loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> EvoResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`EvoError::Config`] for a zero population or tournament size.
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size == 0 {
            return Err(EvoError::config("population_size must be positive"));
        }
        if self.tournament_size == 0 {
            return Err(EvoError::config("tournament_size must be positive"));
        }
        Ok(())
    }

    /// GA parameters for this run.
    #[must_use]
    pub fn ga_config(&self) -> GaConfig {
        let config = GaConfig::default()
            .with_population_size(self.population_size)
            .with_tournament_size(self.tournament_size)
            .with_parallel(self.parallel);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "filename: cities.txt\npopulation_size: 10\ntournament_size: 3\n";

    #[test]
    fn test_minimal_config() {
        let config = RunConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.filename, PathBuf::from("cities.txt"));
        assert_eq!(config.population_size, 10);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.seed, None);
        assert!(!config.parallel);
    }

    #[test]
    fn test_optional_keys() {
        let yaml = format!("{MINIMAL}seed: 42\nparallel: true\n");
        let config = RunConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(config.parallel);
    }

    #[test]
    fn test_missing_key() {
        let err = RunConfig::from_yaml("filename: a.txt\npopulation_size: 10\n").unwrap_err();
        assert!(err.is_config(), "{err}");
        assert!(err.to_string().contains("tournament_size"), "{err}");
    }

    #[test]
    fn test_mistyped_key() {
        let yaml = "filename: a.txt\npopulation_size: ten\ntournament_size: 3\n";
        assert!(RunConfig::from_yaml(yaml).unwrap_err().is_config());
    }

    #[test]
    fn test_negative_size_rejected() {
        let yaml = "filename: a.txt\npopulation_size: -5\ntournament_size: 3\n";
        assert!(RunConfig::from_yaml(yaml).unwrap_err().is_config());
    }

    #[test]
    fn test_zero_size_rejected() {
        let yaml = "filename: a.txt\npopulation_size: 0\ntournament_size: 3\n";
        assert!(matches!(
            RunConfig::from_yaml(yaml),
            Err(EvoError::Config { .. })
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let yaml = format!("{MINIMAL}mutation_rate: 0.1\n");
        assert!(RunConfig::from_yaml(&yaml).unwrap_err().is_config());
    }

    #[test]
    fn test_ga_config() {
        let yaml = format!("{MINIMAL}seed: 7\n");
        let ga = RunConfig::from_yaml(&yaml).unwrap().ga_config();
        assert_eq!(ga.population_size, 10);
        assert_eq!(ga.tournament_size, 3);
        assert_eq!(ga.seed, Some(7));
        assert!(!ga.parallel);
    }

    #[test]
    fn test_load_resolves_relative_filename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, MINIMAL).unwrap();

        let config = RunConfig::load(&path).unwrap();
        assert_eq!(config.filename, dir.path().join("cities.txt"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RunConfig::load("/no/such/config.yaml").unwrap_err();
        assert!(matches!(err, EvoError::Io { .. }));
    }
}
