//! Yield model artifact loading and inference
//!
//! The model is a random-forest regressor trained offline and exported
//! as a JSON artifact. The artifact carries its own feature schema and
//! the categorical encoding tables it was fit with; both are checked
//! against the compiled-in schema at load time, so mapper/model drift
//! fails at startup instead of producing a silently wrong number.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use shared::{FeatureRecord, FeatureValue, CATEGORICAL_FEATURES, FEATURE_NAMES};

/// Errors raised while loading or querying the model artifact
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Model artifact not found at {path}")]
    Missing { path: String },

    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to deserialize model artifact: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Model schema mismatch: expected columns {expected:?}, found {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Unknown category {value:?} for feature {feature}")]
    UnknownCategory { feature: String, value: String },

    #[error("Malformed model artifact: {0}")]
    Malformed(String),
}

/// One node of a regression tree
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A single regression tree; children are indices into `nodes`, root at 0
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Tree {
    pub(crate) nodes: Vec<TreeNode>,
}

impl Tree {
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        let mut index = 0usize;
        // A walk longer than the node count means the indices loop
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).copied().ok_or_else(|| {
                        ModelError::Malformed(format!(
                            "split references feature index {} outside the schema",
                            feature
                        ))
                    })?;
                    index = if value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(ModelError::Malformed(format!(
                        "node index {} out of bounds",
                        index
                    )))
                }
            }
        }
        Err(ModelError::Malformed("tree nodes form a cycle".to_string()))
    }
}

/// On-disk artifact layout
#[derive(Debug, Deserialize)]
pub(crate) struct Artifact {
    pub(crate) model_version: String,
    pub(crate) feature_names: Vec<String>,
    pub(crate) categorical_levels: HashMap<String, Vec<String>>,
    pub(crate) trees: Vec<Tree>,
}

/// Loaded, immutable model handle
///
/// Acquired once at startup and shared read-only across requests; no
/// locking is needed because nothing mutates it after load.
#[derive(Debug)]
pub struct YieldModel {
    artifact: Artifact,
}

impl YieldModel {
    /// Load and verify the artifact at `path`
    ///
    /// Absence, deserialization failure, or schema drift are all fatal
    /// here so the process refuses to serve with a broken model.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ModelError::Missing {
                path: path.display().to_string(),
            });
        }
        let raw = std::fs::read_to_string(path)?;
        let artifact: Artifact = serde_json::from_str(&raw)?;
        Self::from_artifact(artifact)
    }

    pub(crate) fn from_artifact(artifact: Artifact) -> Result<Self, ModelError> {
        if artifact.feature_names != FEATURE_NAMES {
            return Err(ModelError::SchemaMismatch {
                expected: FEATURE_NAMES.iter().map(|name| name.to_string()).collect(),
                found: artifact.feature_names.clone(),
            });
        }
        for feature in CATEGORICAL_FEATURES {
            match artifact.categorical_levels.get(feature) {
                Some(levels) if !levels.is_empty() => {}
                _ => {
                    return Err(ModelError::Malformed(format!(
                        "no categorical levels for feature {}",
                        feature
                    )))
                }
            }
        }
        if artifact.trees.is_empty() {
            return Err(ModelError::Malformed("artifact contains no trees".to_string()));
        }
        for (tree_index, tree) in artifact.trees.iter().enumerate() {
            for node in &tree.nodes {
                if let TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } = node
                {
                    if *feature >= FEATURE_NAMES.len()
                        || *left >= tree.nodes.len()
                        || *right >= tree.nodes.len()
                    {
                        return Err(ModelError::Malformed(format!(
                            "tree {} has a split with out-of-range indices",
                            tree_index
                        )));
                    }
                }
            }
        }
        Ok(Self { artifact })
    }

    pub fn version(&self) -> &str {
        &self.artifact.model_version
    }

    pub fn tree_count(&self) -> usize {
        self.artifact.trees.len()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.artifact.feature_names
    }

    /// Run inference on one mapped record
    ///
    /// The record is encoded against the artifact's own categorical
    /// tables; a label the model was not trained on is rejected rather
    /// than silently coerced.
    pub fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelError> {
        let encoded = self.encode(record)?;
        let mut total = 0.0;
        for tree in &self.artifact.trees {
            total += tree.predict(&encoded)?;
        }
        Ok(total / self.artifact.trees.len() as f64)
    }

    /// Encode the record into the numeric vector the trees branch on
    fn encode(&self, record: &FeatureRecord) -> Result<Vec<f64>, ModelError> {
        record
            .fields()
            .iter()
            .map(|(name, value)| match value {
                FeatureValue::Int(v) => Ok(*v as f64),
                FeatureValue::Float(v) => Ok(*v),
                FeatureValue::Label(label) => {
                    let levels = self.artifact.categorical_levels.get(*name).ok_or_else(|| {
                        ModelError::Malformed(format!("no categorical levels for feature {}", name))
                    })?;
                    levels
                        .iter()
                        .position(|level| level == label)
                        .map(|ordinal| ordinal as f64)
                        .ok_or_else(|| ModelError::UnknownCategory {
                            feature: name.to_string(),
                            value: label.to_string(),
                        })
                }
            })
            .collect()
    }
}
