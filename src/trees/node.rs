use crate::data::attribute::{Instance, Label};
use crate::error::{Id3Error, Result};

/// Decision tree node
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode<L: Label> {
    Leaf(L),
    Branch(Branch<L>),
}

/// Internal node testing one attribute domain.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch<L: Label> {
    pub attribute: usize,
    pub name: String,
    pub children: Vec<Child<L>>,
}

/// Edge from a branch to the subtree learned for one value.
#[derive(Clone, Debug, PartialEq)]
pub struct Child<L: Label> {
    pub value: usize,
    pub node: Box<TreeNode<L>>,
}

impl<L: Label> Child<L> {
    pub fn leaf(value: usize, label: L) -> Self {
        Self {
            value,
            node: Box::new(TreeNode::Leaf(label)),
        }
    }

    pub fn branch(value: usize, branch: Branch<L>) -> Self {
        Self {
            value,
            node: Box::new(TreeNode::Branch(branch)),
        }
    }
}

impl<L: Label> TreeNode<L> {
    /// Walks the tree with `instance` and returns the predicted label.
    ///
    /// At every branch the first child whose value appears in the instance is
    /// followed and the matched assignment is dropped before descending.
    ///
    /// # Errors
    ///
    /// Returns `NoMatchingPath` when no child of a branch matches.
    pub fn evaluate(&self, instance: &Instance) -> Result<&L> {
        let branch = match self {
            TreeNode::Leaf(label) => return Ok(label),
            TreeNode::Branch(branch) => branch,
        };

        for child in &branch.children {
            let matched = instance.assignments().iter().position(|assignment| {
                assignment.attribute == branch.attribute && assignment.value == child.value
            });
            if let Some(position) = matched {
                return match child.node.as_ref() {
                    TreeNode::Leaf(label) => Ok(label),
                    subtree => subtree.evaluate(&instance.without(position)),
                };
            }
        }

        Err(Id3Error::NoMatchingPath {
            attribute: branch.name.clone(),
        })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf(_))
    }

    /// Attribute tested by this node, `None` for a leaf.
    pub fn attribute(&self) -> Option<usize> {
        match self {
            TreeNode::Leaf(_) => None,
            TreeNode::Branch(branch) => Some(branch.attribute),
        }
    }

    /// Subtree reached through `value`, if one was learned.
    pub fn child(&self, value: usize) -> Option<&TreeNode<L>> {
        match self {
            TreeNode::Leaf(_) => None,
            TreeNode::Branch(branch) => branch
                .children
                .iter()
                .find(|child| child.value == value)
                .map(|child| child.node.as_ref()),
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Branch(branch) => {
                1 + branch
                    .children
                    .iter()
                    .map(|child| child.node.depth())
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Branch(branch) => branch.children.iter().map(|child| child.node.n_leaves()).sum(),
        }
    }
}
