//! ID3 Decision Tree Classifier
use super::entropy::{best_attribute, class_counts, AttributeSample};
use super::node::{Branch, Child, TreeNode};
use super::params::{Id3Params, LeafPolicy, PathExclusion};
use crate::data::attribute::{Instance, Label};
use crate::data::dataset::Dataset;
use crate::error::{Id3Error, Result};
use crate::metrics::confusion::ClassificationMetrics;
use nalgebra::DVector;
use tracing::{debug, instrument, trace};

/// Decision tree classifier induced with ID3 over categorical attributes.
#[derive(Clone, Debug)]
pub struct Id3Classifier<L: Label> {
    root: Option<TreeNode<L>>,
    params: Id3Params,
}

impl<L: Label> Default for Id3Classifier<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> ClassificationMetrics<L> for Id3Classifier<L> {}

impl<L: Label> Id3Classifier<L> {
    /// Creates a classifier with first-seen leaves and full-path attribute exclusion.
    pub fn new() -> Self {
        Self {
            root: None,
            params: Id3Params::new(),
        }
    }

    /// Creates a classifier with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `leaf_policy` - How leaves that can't be split further pick their label.
    /// * `path_exclusion` - Which tested attributes are withheld from deeper splits.
    pub fn with_params(leaf_policy: Option<LeafPolicy>, path_exclusion: Option<PathExclusion>) -> Self {
        let mut classifier = Self::new();
        classifier.set_leaf_policy(leaf_policy.unwrap_or_default());
        classifier.set_path_exclusion(path_exclusion.unwrap_or_default());
        classifier
    }

    pub fn set_leaf_policy(&mut self, leaf_policy: LeafPolicy) {
        self.params.set_leaf_policy(leaf_policy)
    }

    pub fn set_path_exclusion(&mut self, path_exclusion: PathExclusion) {
        self.params.set_path_exclusion(path_exclusion)
    }

    pub fn leaf_policy(&self) -> LeafPolicy {
        self.params.leaf_policy()
    }

    pub fn path_exclusion(&self) -> PathExclusion {
        self.params.path_exclusion()
    }

    /// Root of the fitted tree, `None` before `fit`.
    pub fn root(&self) -> Option<&TreeNode<L>> {
        self.root.as_ref()
    }

    /// Builds the tree from a dataset and keeps it for prediction.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDataset` when there are no instances or no attributes.
    pub fn fit(&mut self, dataset: &Dataset<L>) -> Result<()> {
        self.root = Some(self.train(dataset)?);
        Ok(())
    }

    /// Induces a tree from `dataset` and returns its root.
    ///
    /// The root tests the attribute with the highest information gain. When
    /// no attribute has any gain the whole tree is a single leaf.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The labeled instances to learn from.
    ///
    /// # Returns
    ///
    /// The root of the induced tree. The classifier itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `EmptyDataset` when there are no instances or no attributes.
    #[instrument(skip_all, fields(instances = dataset.nrows(), attributes = dataset.n_attributes()))]
    pub fn train(&self, dataset: &Dataset<L>) -> Result<TreeNode<L>> {
        let empty = || Id3Error::EmptyDataset {
            instances: dataset.nrows(),
            attributes: dataset.n_attributes(),
        };
        if !dataset.is_not_empty() {
            return Err(empty());
        }

        let candidates = Self::candidates(dataset, &[]);
        let (attribute, gain) = best_attribute(&candidates).ok_or_else(empty)?;
        if gain <= 0.0 {
            debug!("no attribute has any gain, the tree is a single leaf");
            return Ok(TreeNode::Leaf(self.leaf_label(dataset)?));
        }

        debug!(
            attribute = dataset.attributes[attribute].name(),
            gain, "selected root attribute"
        );
        let mut path = Vec::new();
        let root = self.build_branch(attribute, dataset, &mut path)?;
        Ok(TreeNode::Branch(root))
    }

    /// Predicts the label of one instance.
    ///
    /// # Arguments
    ///
    /// * `instance` - Attribute-value assignments, possibly partial.
    ///
    /// # Returns
    ///
    /// The label of the leaf the instance reaches.
    ///
    /// # Errors
    ///
    /// Returns `NotFitted` before `fit` and `NoMatchingPath` when the tree
    /// has no branch for the instance.
    pub fn predict(&self, instance: &Instance) -> Result<L> {
        let root = self.root.as_ref().ok_or(Id3Error::NotFitted)?;
        root.evaluate(instance).cloned()
    }

    /// Predicts the label of every row of `dataset`, ignoring its labels.
    pub fn predict_dataset(&self, dataset: &Dataset<L>) -> Result<DVector<L>> {
        let predictions = (0..dataset.nrows())
            .filter_map(|row| dataset.instance(row))
            .map(|instance| self.predict(&instance))
            .collect::<Result<Vec<_>>>()?;

        Ok(DVector::from_vec(predictions))
    }

    fn build_branch(
        &self,
        attribute: usize,
        dataset: &Dataset<L>,
        path: &mut Vec<usize>,
    ) -> Result<Branch<L>> {
        let domain = dataset
            .attribute(attribute)
            .ok_or_else(|| Id3Error::UnknownAttribute(attribute.to_string()))?;
        path.push(attribute);

        let mut children = Vec::with_capacity(domain.len());
        for value in 0..domain.len() {
            let subset = dataset.reduce(attribute, value);
            let child = match subset.nrows() {
                0 => {
                    trace!(attribute = domain.name(), value, "no instances, value left without a child");
                    continue;
                }
                1 => Child::leaf(value, self.leaf_label(&subset)?),
                _ => {
                    let excluded = match self.path_exclusion() {
                        PathExclusion::FullPath => path.as_slice(),
                        PathExclusion::ParentOnly => std::slice::from_ref(&attribute),
                    };
                    let candidates = Self::candidates(&subset, excluded);
                    match best_attribute(&candidates) {
                        Some((next, gain)) if gain > 0.0 => {
                            trace!(
                                attribute = domain.name(),
                                value,
                                next = subset.attributes[next].name(),
                                gain,
                                "splitting subset"
                            );
                            Child::branch(value, self.build_branch(next, &subset, path)?)
                        }
                        _ => Child::leaf(value, self.leaf_label(&subset)?),
                    }
                }
            };
            children.push(child);
        }

        path.pop();
        Ok(Branch {
            attribute,
            name: domain.name().to_string(),
            children,
        })
    }

    fn candidates<'a>(dataset: &'a Dataset<L>, excluded: &[usize]) -> Vec<AttributeSample<'a, L>> {
        (0..dataset.n_attributes())
            .filter(|attribute| !excluded.contains(attribute))
            .map(|attribute| dataset.project(attribute))
            .collect()
    }

    fn leaf_label(&self, dataset: &Dataset<L>) -> Result<L> {
        let label = match self.leaf_policy() {
            LeafPolicy::FirstSeen => dataset.y.iter().next(),
            LeafPolicy::Majority => class_counts(dataset.y.iter())
                .into_iter()
                .fold(None::<(&L, usize)>, |best, (class, count)| match best {
                    Some((_, best_count)) if best_count >= count => best,
                    _ => Some((class, count)),
                })
                .map(|(class, _)| class),
        };

        label.cloned().ok_or(Id3Error::EmptyDataset {
            instances: dataset.nrows(),
            attributes: dataset.n_attributes(),
        })
    }
}
