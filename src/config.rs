//! Declarative scoring configuration.
//!
//! A config names the score and lists its metrics in evaluation order.
//! Order matters: a `self.<metric>` parameter only resolves if the
//! referenced metric appears earlier in the list.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read score config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse score config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreConfig {
    pub name: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    pub name: String,
    pub operation: OperationSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// A reference to an input value: either `self.<metric>` for a previously
/// computed metric or `<dataset>.<field>` for a raw field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub source: String,
}

impl ScoreConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Metric names in declared (evaluation and output) order.
    pub fn metric_names(&self) -> Vec<String> {
        self.metrics.iter().map(|m| m.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
name: score_1
metrics:
  - name: total
    operation:
      type: sum
      parameters:
        - source: disclosure.dis_1
        - source: disclosure.dis_2
  - name: ratio
    operation:
      type: divide
      parameters:
        - source: self.total
        - source: disclosure.dis_3
"#;

    #[test]
    fn test_parse_sample_config() {
        let config = ScoreConfig::from_yaml(SAMPLE).expect("parse config");
        assert_eq!(config.name, "score_1");
        assert_eq!(config.metric_names(), vec!["total", "ratio"]);

        let total = &config.metrics[0];
        assert_eq!(total.operation.kind, "sum");
        assert_eq!(total.operation.parameters.len(), 2);
        assert_eq!(total.operation.parameters[0].source, "disclosure.dis_1");
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let err = ScoreConfig::from_yaml("metrics: {not: [a, list").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
