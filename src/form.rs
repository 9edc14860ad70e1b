//! The four-slider input form as data.
//!
//! Mirrors the interactive surface of the demo: each slider has a fixed
//! [min, max] range and default. Values are clamped on every set, so a
//! range error is impossible by construction.

use crate::artifact::ModelArtifact;
use crate::error::{PredecirError, Result};
use crate::primitives::Vector;

/// Static description of one slider.
#[derive(Debug, Clone)]
pub struct SliderSpec {
    /// Short key used on the command line and in the REPL.
    pub key: &'static str,
    /// Feature name as the model artifact was trained with it.
    pub name: &'static str,
    /// Lower bound (inclusive).
    pub min: f32,
    /// Upper bound (inclusive).
    pub max: f32,
    /// Initial value.
    pub default: f32,
}

/// The iris input form: four bounded sliders in training column order.
const IRIS_SLIDERS: [SliderSpec; 4] = [
    SliderSpec {
        key: "sepal-length",
        name: "sepal length (cm)",
        min: 4.0,
        max: 8.0,
        default: 5.1,
    },
    SliderSpec {
        key: "sepal-width",
        name: "sepal width (cm)",
        min: 2.0,
        max: 4.5,
        default: 3.5,
    },
    SliderSpec {
        key: "petal-length",
        name: "petal length (cm)",
        min: 1.0,
        max: 7.0,
        default: 1.4,
    },
    SliderSpec {
        key: "petal-width",
        name: "petal width (cm)",
        min: 0.1,
        max: 2.5,
        default: 0.2,
    },
];

/// Current state of the input form: slider specs plus one value each.
#[derive(Debug, Clone)]
pub struct FeatureForm {
    sliders: &'static [SliderSpec],
    values: Vec<f32>,
}

impl FeatureForm {
    /// Creates the iris form with every slider at its default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sliders: &IRIS_SLIDERS,
            values: IRIS_SLIDERS.iter().map(|s| s.default).collect(),
        }
    }

    /// Returns the slider specs in form order.
    #[must_use]
    pub fn sliders(&self) -> &[SliderSpec] {
        self.sliders
    }

    /// Returns the current values in form order.
    #[must_use]
    pub fn values(&self) -> Vector<f32> {
        Vector::from_slice(&self.values)
    }

    /// Returns the current value of the slider with the given key.
    ///
    /// # Errors
    ///
    /// `UnknownSlider` if no slider has that key.
    pub fn get(&self, key: &str) -> Result<f32> {
        let idx = self.index_of(key)?;
        Ok(self.values[idx])
    }

    /// Sets one slider, clamping to its [min, max] range. No other
    /// slider is touched.
    ///
    /// Returns the value actually stored after clamping.
    ///
    /// # Errors
    ///
    /// `UnknownSlider` if no slider has that key, or an error for a
    /// non-finite value (clamping cannot repair NaN).
    pub fn set(&mut self, key: &str, value: f32) -> Result<f32> {
        let idx = self.index_of(key)?;
        if !value.is_finite() {
            return Err(format!("{key}: value must be finite").into());
        }
        let spec = &self.sliders[idx];
        let clamped = value.clamp(spec.min, spec.max);
        self.values[idx] = clamped;
        Ok(clamped)
    }

    /// Assembles the feature vector for a given artifact.
    ///
    /// Column order and names must agree exactly with what the artifact
    /// was trained on; a mismatch would otherwise yield a silently wrong
    /// prediction, so it is a hard error here.
    ///
    /// # Errors
    ///
    /// `SchemaMismatch` if the artifact's feature names differ from the
    /// form's, in content or in order.
    pub fn to_feature_vector(&self, artifact: &ModelArtifact) -> Result<Vector<f32>> {
        let form_names: Vec<&str> = self.sliders.iter().map(|s| s.name).collect();
        let artifact_names: Vec<&str> = artifact
            .feature_names()
            .iter()
            .map(String::as_str)
            .collect();
        if form_names != artifact_names {
            return Err(PredecirError::SchemaMismatch {
                expected: artifact_names.join(", "),
                actual: form_names.join(", "),
            });
        }
        Ok(self.values())
    }

    fn index_of(&self, key: &str) -> Result<usize> {
        self.sliders
            .iter()
            .position(|s| s.key == key)
            .ok_or_else(|| PredecirError::UnknownSlider {
                name: key.to_string(),
            })
    }
}

impl Default for FeatureForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_form() {
        let form = FeatureForm::new();
        let v = form.values();
        assert_eq!(v.as_slice(), &[5.1, 3.5, 1.4, 0.2]);
    }

    #[test]
    fn test_set_clamps_to_range() {
        let mut form = FeatureForm::new();
        assert_eq!(form.set("sepal-length", 99.0).unwrap(), 8.0);
        assert_eq!(form.set("sepal-length", -99.0).unwrap(), 4.0);
        assert_eq!(form.set("petal-width", 1.3).unwrap(), 1.3);
    }

    #[test]
    fn test_set_leaves_other_sliders_alone() {
        let mut form = FeatureForm::new();
        form.set("petal-length", 6.0).unwrap();
        assert_eq!(form.get("sepal-length").unwrap(), 5.1);
        assert_eq!(form.get("sepal-width").unwrap(), 3.5);
        assert_eq!(form.get("petal-width").unwrap(), 0.2);
        assert_eq!(form.get("petal-length").unwrap(), 6.0);
    }

    #[test]
    fn test_non_finite_value_is_error() {
        let mut form = FeatureForm::new();
        assert!(form.set("sepal-width", f32::NAN).is_err());
        assert!(form.set("sepal-width", f32::INFINITY).is_err());
        assert_eq!(form.get("sepal-width").unwrap(), 3.5);
    }

    #[test]
    fn test_unknown_slider_is_error() {
        let mut form = FeatureForm::new();
        let err = form.set("stem-girth", 1.0).unwrap_err();
        assert!(err.to_string().contains("stem-girth"));
    }
}
