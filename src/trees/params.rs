/// How a leaf picks its label when the remaining attributes can't split a subset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeafPolicy {
    /// Label of the first instance in the subset.
    #[default]
    FirstSeen,
    /// Most frequent label, ties going to the one seen first.
    Majority,
}

/// Which already-tested attributes are withheld from deeper splits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PathExclusion {
    /// Every attribute tested between the root and the current node.
    #[default]
    FullPath,
    /// Only the attribute of the current node.
    ParentOnly,
}

#[derive(Clone, Debug, Default)]
pub struct Id3Params {
    pub leaf_policy: LeafPolicy,
    pub path_exclusion: PathExclusion,
}

impl Id3Params {
    pub fn new() -> Self {
        Self {
            leaf_policy: LeafPolicy::FirstSeen,
            path_exclusion: PathExclusion::FullPath,
        }
    }

    pub fn set_leaf_policy(&mut self, leaf_policy: LeafPolicy) {
        self.leaf_policy = leaf_policy;
    }

    pub fn set_path_exclusion(&mut self, path_exclusion: PathExclusion) {
        self.path_exclusion = path_exclusion;
    }

    pub fn leaf_policy(&self) -> LeafPolicy {
        self.leaf_policy
    }

    pub fn path_exclusion(&self) -> PathExclusion {
        self.path_exclusion
    }
}
