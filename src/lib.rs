//! Predecir: pattern diagrams and an iris classifier demo in pure Rust.
//!
//! Two independent, stateless pieces share this crate:
//!
//! - [`pattern`]: pure functions producing triangular and pyramid
//!   asterisk diagrams (the `patrones` binary prints them for n = 5).
//! - The classifier demo: [`artifact`] loads a pre-trained forest from
//!   disk, [`form`] holds four bounded slider inputs, and [`report`]
//!   renders the predicted species, probability bars, and feature
//!   importance bars (the `predecir` binary wires these together).
//!
//! # Quick Start
//!
//! ```no_run
//! use predecir::prelude::*;
//!
//! let artifact = ModelArtifact::load("models/iris_forest.json")?;
//! let mut form = FeatureForm::new();
//! form.set("petal-length", 4.7)?;
//! form.set("petal-width", 1.4)?;
//!
//! let report = PredictionReport::build(&artifact, &form)?;
//! println!("{}", report.render(false));
//! # Ok::<(), predecir::error::PredecirError>(())
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector type
//! - [`pattern`]: Asterisk pattern diagrams
//! - [`forest`]: Decision-tree ensemble inference and the [`forest::Classify`] seam
//! - [`artifact`]: Model artifact loading, validation, and persistence
//! - [`form`]: Bounded slider inputs
//! - [`report`]: Prediction report rendering
//! - [`error`]: Error types

pub mod artifact;
pub mod error;
pub mod forest;
pub mod form;
pub mod pattern;
pub mod primitives;
pub mod report;

/// Convenience re-exports for typical use.
pub mod prelude {
    pub use crate::artifact::ModelArtifact;
    pub use crate::error::{PredecirError, Result};
    pub use crate::forest::{Classify, DecisionTree, ForestClassifier};
    pub use crate::form::FeatureForm;
    pub use crate::primitives::Vector;
    pub use crate::report::PredictionReport;
}
