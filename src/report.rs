//! Prediction report rendering.
//!
//! One synchronous compute-and-render cycle: assemble the feature vector,
//! classify, and lay out the input echo, predicted label, probability
//! bars, and descending importance bars as text.

use crate::artifact::ModelArtifact;
use crate::error::Result;
use crate::forest::Classify;
use crate::form::FeatureForm;
use colored::Colorize;

/// Width of the filled portion of a chart bar, in characters.
const BAR_WIDTH: usize = 24;

/// Render an ASCII bar, `█`-filled to `value / max` and `░`-padded.
#[must_use]
pub fn render_bar(value: f32, max: f32, width: usize) -> String {
    let ratio = if max > 0.0 { value / max } else { 0.0 };
    let filled = ((ratio * width as f32) as usize).min(width);
    let empty = width - filled;
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

/// The result of one interaction, ready to print.
#[derive(Debug, Clone)]
pub struct PredictionReport {
    /// `(feature name, value)` input echo, in form order.
    inputs: Vec<(String, f32)>,
    /// Predicted class name.
    label: String,
    /// `(class name, probability)` in label order.
    probabilities: Vec<(String, f32)>,
    /// `(feature name, importance)` sorted descending.
    importances: Vec<(String, f32)>,
}

impl PredictionReport {
    /// Builds a report using the artifact's own forest.
    ///
    /// # Errors
    ///
    /// Propagates schema, shape, and prediction errors unchanged; no
    /// default prediction is ever substituted.
    pub fn build(artifact: &ModelArtifact, form: &FeatureForm) -> Result<Self> {
        Self::build_with(artifact.forest(), artifact, form)
    }

    /// Builds a report with a caller-supplied classifier.
    ///
    /// The classifier only has to satisfy [`Classify`], so the report
    /// logic is independent of the underlying model implementation.
    ///
    /// # Errors
    ///
    /// Propagates schema, shape, and prediction errors unchanged.
    pub fn build_with(
        classifier: &impl Classify,
        artifact: &ModelArtifact,
        form: &FeatureForm,
    ) -> Result<Self> {
        let x = form.to_feature_vector(artifact)?;
        let label_idx = classifier.classify(&x)?;
        let proba = classifier.classify_proba(&x)?;

        let inputs = form
            .sliders()
            .iter()
            .zip(x.iter())
            .map(|(spec, &v)| (spec.name.to_string(), v))
            .collect();
        let probabilities = artifact
            .class_names()
            .iter()
            .zip(proba.iter())
            .map(|(name, &p)| (name.clone(), p))
            .collect();
        let importances = artifact
            .sorted_importances()
            .into_iter()
            .map(|(name, v)| (name.to_string(), v))
            .collect();

        Ok(Self {
            inputs,
            label: artifact.class_name(label_idx)?.to_string(),
            probabilities,
            importances,
        })
    }

    /// Predicted class name.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// `(class name, probability)` pairs in label order.
    #[must_use]
    pub fn probabilities(&self) -> &[(String, f32)] {
        &self.probabilities
    }

    /// `(feature name, importance)` pairs, descending.
    #[must_use]
    pub fn importances(&self) -> &[(String, f32)] {
        &self.importances
    }

    /// Lays the report out as text, in the fixed section order: input
    /// echo, prediction, probability chart, importance chart.
    #[must_use]
    pub fn render(&self, use_colors: bool) -> String {
        let mut out = String::new();

        out.push_str(&heading("Input values", use_colors));
        let name_width = widest(&self.inputs);
        for (name, value) in &self.inputs {
            out.push_str(&format!("  {name:<name_width$}  {value:>5.2}\n"));
        }

        out.push_str(&heading("Prediction", use_colors));
        if use_colors {
            out.push_str(&format!("  {}\n", self.label.green().bold()));
        } else {
            out.push_str(&format!("  {}\n", self.label));
        }

        out.push_str(&heading("Prediction probability", use_colors));
        let label_width = widest(&self.probabilities);
        for (name, p) in &self.probabilities {
            out.push_str(&format!(
                "  {name:<label_width$}  {p:>5.3}  {}\n",
                render_bar(*p, 1.0, BAR_WIDTH)
            ));
        }

        out.push_str(&heading("Feature importance", use_colors));
        let max = self.importances.first().map_or(0.0, |(_, v)| *v);
        let feat_width = widest(&self.importances);
        for (name, v) in &self.importances {
            out.push_str(&format!(
                "  {name:<feat_width$}  {v:>5.3}  {}\n",
                render_bar(*v, max, BAR_WIDTH)
            ));
        }

        out
    }
}

fn widest(rows: &[(String, f32)]) -> usize {
    rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0)
}

fn heading(title: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", title.cyan().bold())
    } else {
        format!("{title}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bar_full_and_empty() {
        assert_eq!(render_bar(1.0, 1.0, 4), "████");
        assert_eq!(render_bar(0.0, 1.0, 4), "░░░░");
    }

    #[test]
    fn test_render_bar_half() {
        assert_eq!(render_bar(0.5, 1.0, 4), "██░░");
    }

    #[test]
    fn test_render_bar_zero_max() {
        assert_eq!(render_bar(0.3, 0.0, 4), "░░░░");
    }

    #[test]
    fn test_render_bar_never_overflows() {
        assert_eq!(render_bar(7.0, 1.0, 4), "████");
    }
}
