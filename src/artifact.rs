//! Model artifact loading and validation.
//!
//! A [`ModelArtifact`] is the owned, immutable handle to a pre-trained
//! classifier: the forest itself plus the feature/class name tables and
//! precomputed feature importances it was trained with. It is constructed
//! once by [`ModelArtifact::load`] and then only read, so one instance can
//! be shared by reference across sequential interactions.
//!
//! Two on-disk encodings are supported, chosen by file extension:
//! `.json` (human-readable, the checked-in demo artifact) and anything
//! else as bincode. Both carry the same versioned payload.

use crate::error::{PredecirError, Result};
use crate::forest::{ForestClassifier, TreeNode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Highest artifact format version this build can read.
pub const FORMAT_VERSION: (u8, u8) = (1, 0);

/// A pre-trained classifier plus its metadata, read-only after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact format version (major, minor).
    pub format_version: (u8, u8),
    /// Feature names in training column order.
    feature_names: Vec<String>,
    /// Human-readable class names, indexed by class label.
    class_names: Vec<String>,
    /// Precomputed importance score per feature, parallel to
    /// `feature_names`. Non-negative; owned by the artifact.
    feature_importances: Vec<f32>,
    /// The fitted ensemble.
    forest: ForestClassifier,
}

impl ModelArtifact {
    /// Assembles an artifact in memory (fixtures and external tooling).
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the parts are structurally inconsistent.
    pub fn new(
        feature_names: Vec<String>,
        class_names: Vec<String>,
        feature_importances: Vec<f32>,
        forest: ForestClassifier,
    ) -> Result<Self> {
        let artifact = Self {
            format_version: FORMAT_VERSION,
            feature_names,
            class_names,
            feature_importances,
            forest,
        };
        artifact.validate()?;
        Ok(artifact)
    }

    /// Loads an artifact from disk.
    ///
    /// `.json` files are parsed with serde_json; any other extension is
    /// read as bincode. A missing file, undecodable bytes, unsupported
    /// version, or structurally invalid payload is a fatal error — there
    /// is no fallback model.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, `Serialization` if decoding fails,
    /// `UnsupportedVersion` or `FormatError` if the payload is unusable.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;

        let artifact: Self = if is_json(path) {
            serde_json::from_slice(&bytes)?
        } else {
            bincode::deserialize(&bytes)?
        };

        if artifact.format_version.0 != FORMAT_VERSION.0
            || artifact.format_version > FORMAT_VERSION
        {
            return Err(PredecirError::UnsupportedVersion {
                found: artifact.format_version,
                supported: FORMAT_VERSION,
            });
        }
        artifact.validate()?;
        Ok(artifact)
    }

    /// Saves the artifact to disk, with the same extension dispatch as
    /// [`load`](Self::load).
    ///
    /// # Errors
    ///
    /// `Serialization` if encoding fails, `Io` if the write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = if is_json(path) {
            serde_json::to_vec_pretty(self)?
        } else {
            bincode::serialize(self)?
        };
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Structural validation: rejects corrupt artifacts at load time
    /// rather than letting them mispredict silently.
    pub fn validate(&self) -> Result<()> {
        if self.class_names.is_empty() {
            return Err(format_error("artifact has no class names"));
        }
        if self.feature_names.is_empty() {
            return Err(format_error("artifact has no feature names"));
        }
        if self.feature_importances.len() != self.feature_names.len() {
            return Err(format_error(&format!(
                "{} importance scores for {} features",
                self.feature_importances.len(),
                self.feature_names.len()
            )));
        }
        if self
            .feature_importances
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(format_error("importance scores must be finite and >= 0"));
        }
        if self.forest.n_features() != self.feature_names.len() {
            return Err(format_error(&format!(
                "forest expects {} features but {} are named",
                self.forest.n_features(),
                self.feature_names.len()
            )));
        }
        if self.forest.n_classes() != self.class_names.len() {
            return Err(format_error(&format!(
                "forest has {} classes but {} are named",
                self.forest.n_classes(),
                self.class_names.len()
            )));
        }
        if self.forest.n_trees() == 0 {
            return Err(format_error("forest has no trees"));
        }

        // Every split and leaf must stay inside the declared schema.
        let n_features = self.forest.n_features();
        let n_classes = self.forest.n_classes();
        for tree in self.forest.trees() {
            let mut bad: Option<String> = None;
            tree.root().walk(&mut |node| match node {
                TreeNode::Node(n) if n.feature_idx >= n_features => {
                    bad = Some(format!(
                        "split on feature {} but only {n_features} exist",
                        n.feature_idx
                    ));
                }
                TreeNode::Leaf(l) if l.class_label >= n_classes => {
                    bad = Some(format!(
                        "leaf predicts class {} but only {n_classes} exist",
                        l.class_label
                    ));
                }
                _ => {}
            });
            if let Some(message) = bad {
                return Err(PredecirError::FormatError { message });
            }
        }
        Ok(())
    }

    /// Feature names in training column order.
    #[must_use]
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Class names indexed by label.
    #[must_use]
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Importance score per feature, in feature order.
    #[must_use]
    pub fn feature_importances(&self) -> &[f32] {
        &self.feature_importances
    }

    /// The fitted ensemble.
    #[must_use]
    pub fn forest(&self) -> &ForestClassifier {
        &self.forest
    }

    /// Resolves a class index to its human-readable name.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` for an out-of-range label.
    pub fn class_name(&self, label: usize) -> Result<&str> {
        self.class_names
            .get(label)
            .map(String::as_str)
            .ok_or_else(|| format_error(&format!("class label {label} out of range")))
    }

    /// `(feature name, importance)` pairs sorted by descending score.
    #[must_use]
    pub fn sorted_importances(&self) -> Vec<(&str, f32)> {
        let mut pairs: Vec<(&str, f32)> = self
            .feature_names
            .iter()
            .map(String::as_str)
            .zip(self.feature_importances.iter().copied())
            .collect();
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        pairs
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

fn format_error(message: &str) -> PredecirError {
    PredecirError::FormatError {
        message: message.to_string(),
    }
}
