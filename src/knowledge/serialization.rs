//! Tree serialization support
//!
//! The persisted shape is intentionally looser than [`Node`]: every record
//! carries optional text and optional branches, so a damaged file still
//! decodes into [`SavedTree`] and then fails validation with a precise reason
//! instead of an opaque format error. Nothing is ever repaired.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{node::Node, tree::DecisionTree};
use crate::identifiers::{Animal, QuestionText};

/// Why a persisted tree was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTree {
    #[error("unsupported save format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("{location} is a leaf with an empty animal name")]
    EmptyAnimal { location: String },

    #[error("{location} is a question with empty text")]
    EmptyQuestion { location: String },

    #[error("{location} is a question without a {branch} branch")]
    MissingBranch {
        location: String,
        branch: &'static str,
    },

    #[error("{location} is a leaf but has children")]
    LeafWithChildren { location: String },
}

/// Kind tag of a persisted node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Leaf,
    Question,
}

/// One persisted node: an animal for leaves, the question text otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedNode {
    pub kind: NodeKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yes: Option<Box<SavedNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no: Option<Box<SavedNode>>,
}

/// Serializable representation of a whole knowledge tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTree {
    /// Version of the save format
    pub version: u32,
    /// `None` for a tree that has not learned anything yet
    pub root: Option<SavedNode>,
}

impl SavedTree {
    /// Current save format version
    pub const VERSION: u32 = 1;

    /// Snapshot a live tree.
    pub fn from_tree(tree: &DecisionTree) -> Self {
        Self {
            version: Self::VERSION,
            root: tree.root().map(SavedNode::from_node),
        }
    }

    /// Rebuild a live tree, checking every structural invariant on the way.
    pub fn into_tree(self) -> Result<DecisionTree, InvalidTree> {
        if self.version != Self::VERSION {
            return Err(InvalidTree::UnsupportedVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }
        let root = self
            .root
            .map(|root| root.into_node("root".to_string()))
            .transpose()?;
        Ok(DecisionTree::from_root(root))
    }
}

impl SavedNode {
    fn from_node(node: &Node) -> Self {
        match node {
            Node::Leaf { animal } => Self {
                kind: NodeKind::Leaf,
                text: animal.as_str().to_string(),
                yes: None,
                no: None,
            },
            Node::Question { text, yes, no } => Self {
                kind: NodeKind::Question,
                text: text.as_str().to_string(),
                yes: Some(Box::new(Self::from_node(yes))),
                no: Some(Box::new(Self::from_node(no))),
            },
        }
    }

    /// `location` describes the path from the root, e.g. `root/yes/no`.
    fn into_node(self, location: String) -> Result<Node, InvalidTree> {
        match self.kind {
            NodeKind::Leaf => {
                if self.yes.is_some() || self.no.is_some() {
                    return Err(InvalidTree::LeafWithChildren { location });
                }
                let animal =
                    Animal::new(self.text).map_err(|_| InvalidTree::EmptyAnimal { location })?;
                Ok(Node::leaf(animal))
            }
            NodeKind::Question => {
                let text = QuestionText::new(self.text).map_err(|_| InvalidTree::EmptyQuestion {
                    location: location.clone(),
                })?;
                let Some(yes) = self.yes else {
                    return Err(InvalidTree::MissingBranch {
                        location,
                        branch: "yes",
                    });
                };
                let Some(no) = self.no else {
                    return Err(InvalidTree::MissingBranch {
                        location,
                        branch: "no",
                    });
                };
                let yes = yes.into_node(format!("{location}/yes"))?;
                let no = no.into_node(format!("{location}/no"))?;
                Ok(Node::question(text, yes, no))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(text: &str) -> SavedNode {
        SavedNode {
            kind: NodeKind::Leaf,
            text: text.to_string(),
            yes: None,
            no: None,
        }
    }

    fn question(text: &str, yes: Option<SavedNode>, no: Option<SavedNode>) -> SavedNode {
        SavedNode {
            kind: NodeKind::Question,
            text: text.to_string(),
            yes: yes.map(Box::new),
            no: no.map(Box::new),
        }
    }

    fn saved(root: Option<SavedNode>) -> SavedTree {
        SavedTree {
            version: SavedTree::VERSION,
            root,
        }
    }

    #[test]
    fn test_snapshot_preserves_structure() {
        let tree = DecisionTree::from_root(Some(Node::question(
            QuestionText::new("Does it bark?").unwrap(),
            Node::leaf(Animal::new("dog").unwrap()),
            Node::leaf(Animal::new("cat").unwrap()),
        )));

        let snapshot = SavedTree::from_tree(&tree);
        assert_eq!(
            snapshot,
            saved(Some(question(
                "Does it bark?",
                Some(leaf("dog")),
                Some(leaf("cat"))
            )))
        );
        assert_eq!(snapshot.into_tree().unwrap(), tree);
    }

    #[test]
    fn test_empty_tree_snapshot() {
        let snapshot = SavedTree::from_tree(&DecisionTree::new());
        assert_eq!(snapshot.root, None);
        assert!(snapshot.into_tree().unwrap().is_empty());
    }

    #[test]
    fn test_missing_branch_rejected() {
        let broken = saved(Some(question(
            "Does it bark?",
            Some(leaf("dog")),
            Some(question("Does it purr?", Some(leaf("cat")), None)),
        )));

        assert_eq!(
            broken.into_tree(),
            Err(InvalidTree::MissingBranch {
                location: "root/no".to_string(),
                branch: "no",
            })
        );
    }

    #[test]
    fn test_leaf_with_children_rejected() {
        let mut odd = leaf("dog");
        odd.yes = Some(Box::new(leaf("cat")));

        assert!(matches!(
            saved(Some(odd)).into_tree(),
            Err(InvalidTree::LeafWithChildren { .. })
        ));
    }

    #[test]
    fn test_empty_strings_rejected() {
        assert!(matches!(
            saved(Some(leaf("  "))).into_tree(),
            Err(InvalidTree::EmptyAnimal { .. })
        ));
        assert!(matches!(
            saved(Some(question("", Some(leaf("a")), Some(leaf("b"))))).into_tree(),
            Err(InvalidTree::EmptyQuestion { .. })
        ));
    }

    #[test]
    fn test_unknown_version_rejected() {
        let future = SavedTree {
            version: 99,
            root: None,
        };
        assert_eq!(
            future.into_tree(),
            Err(InvalidTree::UnsupportedVersion {
                found: 99,
                expected: 1
            })
        );
    }
}
