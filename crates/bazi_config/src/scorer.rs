//! Scorer weights, level thresholds and deity name lists.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weight of each score component in the final sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub stem: f64,
    pub branch: f64,
    pub ten_god: f64,
    pub deity: f64,
    pub element: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            stem: 0.30,
            branch: 0.25,
            ten_god: 0.20,
            deity: 0.15,
            element: 0.10,
        }
    }
}

impl ScoreWeights {
    /// `(name, weight)` pairs in component order.
    pub fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("stem", self.stem),
            ("branch", self.branch),
            ("ten_god", self.ten_god),
            ("deity", self.deity),
            ("element", self.element),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.named().iter().map(|(_, w)| w).sum()
    }
}

/// Lower bound of each level; anything below `poor` is the lowest level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelThresholds {
    pub great: f64,
    pub good: f64,
    pub neutral: f64,
    pub poor: f64,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            great: 80.0,
            good: 65.0,
            neutral: 45.0,
            poor: 30.0,
        }
    }
}

/// Names of the deities (神煞) the scorer recognises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeityLists {
    pub auspicious: Vec<String>,
    pub inauspicious: Vec<String>,
}

const DEFAULT_AUSPICIOUS: [&str; 10] = [
    "天乙贵人", "天德贵人", "月德贵人", "文昌贵人", "太极贵人", "福星贵人", "禄神", "将星", "天医",
    "红鸾",
];

const DEFAULT_INAUSPICIOUS: [&str; 10] = [
    "羊刃", "劫煞", "灾煞", "亡神", "孤辰", "寡宿", "白虎", "丧门", "吊客", "天狗",
];

impl Default for DeityLists {
    fn default() -> Self {
        Self {
            auspicious: DEFAULT_AUSPICIOUS.iter().map(|s| s.to_string()).collect(),
            inauspicious: DEFAULT_INAUSPICIOUS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DeityLists {
    pub fn is_auspicious(&self, name: &str) -> bool {
        self.auspicious.iter().any(|d| d == name)
    }

    pub fn is_inauspicious(&self, name: &str) -> bool {
        self.inauspicious.iter().any(|d| d == name)
    }
}

/// Complete scorer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    pub weights: ScoreWeights,
    pub levels: LevelThresholds,
    pub deities: DeityLists,
}

impl ScorerConfig {
    /// Check weights and thresholds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in self.weights.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeWeight { name, value });
            }
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum(sum));
        }
        let l = &self.levels;
        let ordered = l.great <= 100.0
            && l.great > l.good
            && l.good > l.neutral
            && l.neutral > l.poor
            && l.poor >= 0.0;
        if !ordered {
            return Err(ConfigError::UnorderedLevels);
        }
        Ok(())
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        tracing::debug!(
            auspicious = config.deities.auspicious.len(),
            inauspicious = config.deities.inauspicious.len(),
            "loaded scorer config"
        );
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(?path, "reading scorer config");
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, source);
            ConfigError::ParseFile {
                path: path.to_path_buf(),
                source,
            }
        })?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ScorerConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.weights.sum() - 1.0).abs() < 1e-9);
        assert!(config.deities.is_auspicious("天乙贵人"));
        assert!(config.deities.is_inauspicious("羊刃"));
        assert!(!config.deities.is_auspicious("羊刃"));
    }

    #[test]
    fn empty_text_is_default() {
        assert_eq!(ScorerConfig::from_toml_str("").unwrap(), ScorerConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = ScorerConfig::from_toml_str(
            "[levels]\ngreat = 85.0\n\n[deities]\nauspicious = [\"天乙贵人\"]\n",
        )
        .unwrap();
        assert_eq!(config.levels.great, 85.0);
        assert_eq!(config.levels.good, 65.0);
        assert_eq!(config.deities.auspicious, vec!["天乙贵人".to_string()]);
        assert_eq!(config.deities.inauspicious.len(), DEFAULT_INAUSPICIOUS.len());
        assert_eq!(config.weights, ScoreWeights::default());
    }

    #[test]
    fn weights_must_sum_to_one() {
        let err = ScorerConfig::from_toml_str("[weights]\nstem = 0.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::WeightSum(_)), "{err}");
    }

    #[test]
    fn negative_weight_rejected() {
        let err = ScorerConfig::from_toml_str(
            "[weights]\nstem = -0.1\nbranch = 0.65\nten_god = 0.2\ndeity = 0.15\nelement = 0.1\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::NegativeWeight { name: "stem", .. }), "{err}");
    }

    #[test]
    fn levels_must_descend() {
        let err = ScorerConfig::from_toml_str("[levels]\ngood = 90.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnorderedLevels));
    }

    #[test]
    fn malformed_toml() {
        let err = ScorerConfig::from_toml_str("[weights\nstem = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let err = ScorerConfig::from_toml_str("[weights]\nstem = \"high\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
