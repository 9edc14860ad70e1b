//! Decision-tree ensemble inference.
//!
//! Inference-only counterpart of a trained random forest: trees are built
//! elsewhere and arrive serialized inside a model artifact. This module
//! walks them.
//!
//! # Example
//!
//! ```
//! use predecir::forest::{DecisionTree, ForestClassifier, Leaf, Node, TreeNode};
//! use predecir::primitives::Vector;
//!
//! // A stump: feature 0 <= 1.0 -> class 0, else class 1.
//! let stump = DecisionTree::new(TreeNode::Node(Node {
//!     feature_idx: 0,
//!     threshold: 1.0,
//!     left: Box::new(TreeNode::Leaf(Leaf { class_label: 0, n_samples: 10 })),
//!     right: Box::new(TreeNode::Leaf(Leaf { class_label: 1, n_samples: 10 })),
//! }));
//! let forest = ForestClassifier::new(vec![stump], 2, 1);
//!
//! let proba = forest.predict_proba(&Vector::from_slice(&[0.5])).unwrap();
//! assert_eq!(proba.as_slice(), &[1.0, 0.0]);
//! ```

use crate::error::{PredecirError, Result};
use crate::primitives::Vector;
use serde::{Deserialize, Serialize};

/// Split node: routes a sample left or right by one feature threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Which feature column the split reads
    pub feature_idx: usize,
    /// Split boundary; `feature <= threshold` goes left
    pub threshold: f32,
    /// Subtree for samples at or below the threshold
    pub left: Box<TreeNode>,
    /// Subtree for samples above the threshold
    pub right: Box<TreeNode>,
}

/// Terminal node carrying the class this path of splits settled on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaf {
    /// Class index this leaf votes for
    pub class_label: usize,
    /// How many training samples ended up here when the tree was fitted
    pub n_samples: usize,
}

/// One position in a decision tree: a split or a leaf.
///
/// The serialized shape matches what external training tools emit, so
/// artifacts deserialize directly into this enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    /// Split on a feature threshold
    Node(Node),
    /// Terminal class vote
    Leaf(Leaf),
}

impl TreeNode {
    /// Depth of the subtree below this node: 0 for a leaf, otherwise one
    /// more than the deeper child.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 0,
            TreeNode::Node(node) => 1 + node.left.depth().max(node.right.depth()),
        }
    }

    /// Visits every node, calling `f` on each.
    pub fn walk(&self, f: &mut impl FnMut(&TreeNode)) {
        f(self);
        if let TreeNode::Node(node) = self {
            node.left.walk(f);
            node.right.walk(f);
        }
    }
}

/// A single fitted decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    root: TreeNode,
}

impl DecisionTree {
    /// Wraps a root node as a tree.
    #[must_use]
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Returns the tree depth (0 for a lone leaf).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Predicts the class label for a single sample by iterative descent.
    ///
    /// Samples where `x[feature_idx] <= threshold` go left.
    ///
    /// # Panics
    ///
    /// Panics if `x` is shorter than the largest `feature_idx` in the
    /// tree. [`ForestClassifier`] checks input length before descending;
    /// call through it (or validate the slice yourself) for untrusted
    /// input.
    #[must_use]
    pub fn predict_one(&self, x: &[f32]) -> usize {
        let mut node = &self.root;
        loop {
            match node {
                TreeNode::Leaf(leaf) => return leaf.class_label,
                TreeNode::Node(internal) => {
                    if x[internal.feature_idx] <= internal.threshold {
                        node = &internal.left;
                    } else {
                        node = &internal.right;
                    }
                }
            }
        }
    }
}

/// Narrow classification seam: label plus probability distribution.
///
/// Callers that render predictions depend on this trait, not on the
/// forest, so any model implementation can be substituted.
pub trait Classify {
    /// Predicts a class index for one feature vector.
    fn classify(&self, x: &Vector<f32>) -> Result<usize>;

    /// Predicts a probability distribution over classes for one feature
    /// vector. Entries are non-negative and sum to 1.
    fn classify_proba(&self, x: &Vector<f32>) -> Result<Vector<f32>>;
}

/// Ensemble of decision trees with majority voting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestClassifier {
    trees: Vec<DecisionTree>,
    n_classes: usize,
    n_features: usize,
}

impl ForestClassifier {
    /// Assembles a forest from fitted trees.
    #[must_use]
    pub fn new(trees: Vec<DecisionTree>, n_classes: usize, n_features: usize) -> Self {
        Self {
            trees,
            n_classes,
            n_features,
        }
    }

    /// Number of trees in the forest.
    #[must_use]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Number of output classes.
    #[must_use]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Number of input features the forest was trained on.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Returns the fitted trees.
    #[must_use]
    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    /// Depth of the deepest tree, or 0 for an empty forest.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.trees.iter().map(DecisionTree::depth).max().unwrap_or(0)
    }

    fn check_input(&self, x: &Vector<f32>) -> Result<()> {
        if x.len() != self.n_features {
            return Err(PredecirError::DimensionMismatch {
                expected: self.n_features.to_string(),
                actual: x.len().to_string(),
            });
        }
        if self.trees.is_empty() {
            return Err(PredecirError::FormatError {
                message: "forest has no trees".to_string(),
            });
        }
        Ok(())
    }

    /// Predict class probabilities for a single feature vector.
    ///
    /// Returns the vote fraction per class across trees: each tree casts
    /// one vote, so the distribution is non-negative and sums to 1.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the input length differs from the
    /// trained feature count.
    pub fn predict_proba(&self, x: &Vector<f32>) -> Result<Vector<f32>> {
        self.check_input(x)?;

        let mut votes = vec![0usize; self.n_classes];
        for tree in &self.trees {
            let label = tree.predict_one(x.as_slice());
            if label < self.n_classes {
                votes[label] += 1;
            }
        }

        let n_trees = self.trees.len() as f32;
        let proba: Vec<f32> = votes.iter().map(|&v| v as f32 / n_trees).collect();
        Ok(Vector::from_vec(proba))
    }

    /// Predict the class label for a single feature vector.
    ///
    /// Defined as the argmax of [`predict_proba`](Self::predict_proba)
    /// with lowest-index tie-break, so the label can never disagree with
    /// the reported distribution.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the input length differs from the
    /// trained feature count.
    pub fn predict(&self, x: &Vector<f32>) -> Result<usize> {
        let proba = self.predict_proba(x)?;
        proba.argmax().ok_or_else(|| {
            PredecirError::FormatError {
                message: "forest has no classes".to_string(),
            }
        })
    }
}

impl Classify for ForestClassifier {
    fn classify(&self, x: &Vector<f32>) -> Result<usize> {
        self.predict(x)
    }

    fn classify_proba(&self, x: &Vector<f32>) -> Result<Vector<f32>> {
        self.predict_proba(x)
    }
}
