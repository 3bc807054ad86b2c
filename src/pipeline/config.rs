//! Binning configuration file
//!
//! The mixing axes are described in JSON, in registration order:
//!
//! ```json
//! {
//!   "axes": [
//!     { "variable": "vtx_z", "edges": [-10, -5, 0, 5, 10] },
//!     { "variable": "cent_ft0c", "edges": [0, 10, 30, 50, 90] }
//!   ],
//!   "mixing_depth": 5
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::mixing::{Categorizer, CategorizerBuilder, Variable, VariableRegistry};

/// One mixing axis as written in the configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AxisConfig {
    pub variable: Variable,
    pub edges: Vec<f64>,
}

/// Complete mixing configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MixingConfig {
    pub axes: Vec<AxisConfig>,
    /// Events kept per category pool; the CLI flag wins when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixing_depth: Option<usize>,
}

impl MixingConfig {
    /// Read a configuration from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read mixing config: {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Invalid mixing config: {}", path.display()))
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: MixingConfig =
            serde_json::from_str(text).context("Failed to parse mixing config JSON")?;
        if config.mixing_depth == Some(0) {
            anyhow::bail!("mixing_depth must be at least 1");
        }
        Ok(config)
    }

    /// Register every axis, in file order, on a fresh builder
    pub fn to_builder<R>(&self, registry: &mut R) -> Result<CategorizerBuilder>
    where
        R: VariableRegistry + ?Sized,
    {
        let mut builder = CategorizerBuilder::new();
        for (i, axis) in self.axes.iter().enumerate() {
            builder
                .register(axis.variable, axis.edges.clone(), registry)
                .with_context(|| format!("Axis #{} ({}) is invalid", i + 1, axis.variable))?;
        }
        Ok(builder)
    }

    /// Register every axis and freeze the result
    pub fn to_categorizer<R>(&self, registry: &mut R) -> Result<Categorizer>
    where
        R: VariableRegistry + ?Sized,
    {
        let categorizer = self.to_builder(registry)?.build()?;
        if categorizer.is_empty() {
            eprintln!("Warning: mixing config has no axes, every event will be rejected");
        }
        Ok(categorizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::UsedVariables;

    const SAMPLE: &str = r#"{
        "axes": [
            { "variable": "vtx_z", "edges": [-10, 0, 10] },
            { "variable": "cent_ft0c", "edges": [0, 10, 30, 50] }
        ],
        "mixing_depth": 4
    }"#;

    #[test]
    fn test_parse_sample() {
        let config = MixingConfig::from_json_str(SAMPLE).unwrap();
        assert_eq!(config.axes.len(), 2);
        assert_eq!(config.axes[0].variable, Variable::VtxZ);
        assert_eq!(config.axes[1].edges, vec![0.0, 10.0, 30.0, 50.0]);
        assert_eq!(config.mixing_depth, Some(4));
    }

    #[test]
    fn test_to_categorizer_marks_usage() {
        let config = MixingConfig::from_json_str(SAMPLE).unwrap();
        let mut used = UsedVariables::new();
        let categorizer = config.to_categorizer(&mut used).unwrap();
        assert_eq!(categorizer.total_categories(), 6);
        assert!(used.contains(Variable::VtxZ));
        assert!(used.contains(Variable::CentFt0c));
        assert!(!used.contains(Variable::Psi2));
    }

    #[test]
    fn test_unknown_variable_rejected() {
        let text = r#"{ "axes": [ { "variable": "vtx_w", "edges": [0, 1] } ] }"#;
        let err = MixingConfig::from_json_str(text).unwrap_err();
        assert!(format!("{:#}", err).contains("vtx_w"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let text = r#"{ "axes": [], "bins": 3 }"#;
        assert!(MixingConfig::from_json_str(text).is_err());
    }

    #[test]
    fn test_zero_mixing_depth_rejected() {
        let text = r#"{ "axes": [], "mixing_depth": 0 }"#;
        let err = MixingConfig::from_json_str(text).unwrap_err();
        assert!(err.to_string().contains("mixing_depth must be at least 1"));

        let text = r#"{ "axes": [], "mixing_depth": 1 }"#;
        let config = MixingConfig::from_json_str(text).unwrap();
        assert_eq!(config.mixing_depth, Some(1));
    }

    #[test]
    fn test_bad_edges_reported_with_axis_position() {
        let text = r#"{ "axes": [
            { "variable": "vtx_z", "edges": [0, 1] },
            { "variable": "psi2", "edges": [1, 0] }
        ] }"#;
        let config = MixingConfig::from_json_str(text).unwrap();
        let err = config.to_builder(&mut UsedVariables::new()).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Axis #2 (psi2)"), "got: {}", message);
        assert!(message.contains("strictly ascending"), "got: {}", message);
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let config = MixingConfig::from_json_str(SAMPLE).unwrap();
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(MixingConfig::from_json_str(&text).unwrap(), config);
    }
}
