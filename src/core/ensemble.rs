use std::collections::BTreeMap;

use serde::Deserialize;

use crate::core::classifier::{ClassifyError, ModelError};
use crate::models::{FeatureVector, Label, FEATURE_COUNT};

/// One node of an exported decision tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Leaf(Label),
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// Majority vote over decision trees stored as flat node arrays, root at index 0.
#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    trees: Vec<Vec<TreeNode>>,
}

impl TreeEnsemble {
    /// Children must sit strictly after their parent, so every walk from the
    /// root reaches a leaf in at most `len` steps.
    pub fn new(trees: Vec<Vec<TreeNode>>) -> Result<Self, ModelError> {
        if trees.is_empty() {
            return Err(ModelError::EmptyEnsemble);
        }

        for (t, nodes) in trees.iter().enumerate() {
            if nodes.is_empty() {
                return Err(ModelError::EmptyTree(t));
            }
            let len = nodes.len();
            for (n, node) in nodes.iter().enumerate() {
                if let TreeNode::Split { feature, threshold, left, right } = *node {
                    if feature >= FEATURE_COUNT {
                        return Err(ModelError::FeatureOutOfRange {
                            tree: t,
                            node: n,
                            feature,
                            max: FEATURE_COUNT,
                        });
                    }
                    if !threshold.is_finite() {
                        return Err(ModelError::NonFinite { what: "threshold", index: n });
                    }
                    for child in [left, right] {
                        if child <= n || child >= len {
                            return Err(ModelError::BadChild { tree: t, node: n, child, len });
                        }
                    }
                }
            }
        }

        Ok(Self { trees })
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    fn walk(&self, tree: usize, features: &FeatureVector) -> Result<Label, ClassifyError> {
        let nodes = &self.trees[tree];
        let mut index = 0;
        loop {
            match nodes.get(index) {
                Some(TreeNode::Leaf(label)) => return Ok(*label),
                Some(TreeNode::Split { feature, threshold, left, right }) => {
                    let x = features.0[*feature];
                    index = if x <= *threshold { *left } else { *right };
                }
                None => return Err(ClassifyError::MissingNode { tree, node: index }),
            }
        }
    }

    /// Most common leaf label; ties go to the smallest label.
    pub fn predict(&self, features: &FeatureVector) -> Result<Label, ClassifyError> {
        let mut votes: BTreeMap<Label, usize> = BTreeMap::new();
        for t in 0..self.trees.len() {
            *votes.entry(self.walk(t, features)?).or_insert(0) += 1;
        }

        let mut winner = Label::NEGATIVE;
        let mut best = 0;
        for (label, count) in votes {
            if count > best {
                winner = label;
                best = count;
            }
        }
        Ok(winner)
    }
}
