//! Nodes of the knowledge tree

use crate::identifiers::{Animal, QuestionText};

/// Which way an answer sends the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Yes,
    No,
}

impl Branch {
    /// Map a yes/no answer onto a branch.
    pub fn from_answer(answer_is_yes: bool) -> Self {
        if answer_is_yes { Branch::Yes } else { Branch::No }
    }

    /// The other branch.
    pub fn flip(self) -> Self {
        match self {
            Branch::Yes => Branch::No,
            Branch::No => Branch::Yes,
        }
    }
}

/// A single element of the knowledge tree.
///
/// A `Question` always owns exactly two children; there is no way to build
/// one with a missing branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A concrete animal.
    Leaf { animal: Animal },
    /// A yes/no question separating the animals under `yes` from those
    /// under `no`.
    Question {
        text: QuestionText,
        yes: Box<Node>,
        no: Box<Node>,
    },
}

impl Node {
    /// Create a leaf.
    pub fn leaf(animal: Animal) -> Self {
        Node::Leaf { animal }
    }

    /// Create a question node from its two children.
    pub fn question(text: QuestionText, yes: Node, no: Node) -> Self {
        Node::Question {
            text,
            yes: Box::new(yes),
            no: Box::new(no),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Child on the given branch, or `None` for a leaf.
    pub fn child(&self, branch: Branch) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Question { yes, no, .. } => Some(match branch {
                Branch::Yes => yes.as_ref(),
                Branch::No => no.as_ref(),
            }),
        }
    }

    /// Follow `path` from this node, stopping early at a leaf.
    pub(crate) fn descend_mut(&mut self, path: &[Branch]) -> &mut Node {
        match (self, path.split_first()) {
            (Node::Question { yes, no, .. }, Some((branch, rest))) => match branch {
                Branch::Yes => yes.descend_mut(rest),
                Branch::No => no.descend_mut(rest),
            },
            (node, _) => node,
        }
    }

    /// Push this node one level down under a new question, next to a leaf
    /// for the new animal.
    ///
    /// `new_animal_branch` is the answer to `text` for the new animal; the
    /// node that was here before goes on the opposite branch.
    pub fn split(&mut self, text: QuestionText, new_animal: Animal, new_animal_branch: Branch) {
        let new_leaf = Node::leaf(new_animal);
        let previous = std::mem::replace(self, new_leaf.clone());
        *self = match new_animal_branch {
            Branch::Yes => Node::question(text, new_leaf, previous),
            Branch::No => Node::question(text, previous, new_leaf),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal(name: &str) -> Animal {
        Animal::new(name).unwrap()
    }

    fn question(text: &str) -> QuestionText {
        QuestionText::new(text).unwrap()
    }

    #[test]
    fn test_split_places_new_animal_on_yes() {
        let mut node = Node::leaf(animal("cat"));
        node.split(question("Does it bark?"), animal("dog"), Branch::Yes);

        assert_eq!(
            node,
            Node::question(
                question("Does it bark?"),
                Node::leaf(animal("dog")),
                Node::leaf(animal("cat")),
            )
        );
    }

    #[test]
    fn test_split_places_new_animal_on_no() {
        let mut node = Node::leaf(animal("cat"));
        node.split(question("Does it purr?"), animal("dog"), Branch::No);

        assert_eq!(node.child(Branch::Yes), Some(&Node::leaf(animal("cat"))));
        assert_eq!(node.child(Branch::No), Some(&Node::leaf(animal("dog"))));
    }

    #[test]
    fn test_descend_follows_path_to_leaf() {
        let mut node = Node::question(
            question("Does it fly?"),
            Node::leaf(animal("eagle")),
            Node::question(
                question("Does it moo?"),
                Node::leaf(animal("cow")),
                Node::leaf(animal("cat")),
            ),
        );

        assert_eq!(
            node.descend_mut(&[Branch::No, Branch::Yes]),
            &Node::leaf(animal("cow"))
        );
        assert_eq!(node.descend_mut(&[Branch::Yes]), &Node::leaf(animal("eagle")));
    }

    #[test]
    fn test_descend_stops_at_leaf() {
        let mut node = Node::leaf(animal("cat"));
        assert_eq!(
            node.descend_mut(&[Branch::Yes, Branch::No]),
            &Node::leaf(animal("cat"))
        );
    }

    #[test]
    fn test_leaf_has_no_children() {
        let node = Node::leaf(animal("cat"));
        assert!(node.is_leaf());
        assert!(node.child(Branch::Yes).is_none());
        assert!(node.child(Branch::No).is_none());
    }

    #[test]
    fn test_branch_from_answer() {
        assert_eq!(Branch::from_answer(true), Branch::Yes);
        assert_eq!(Branch::from_answer(false), Branch::No);
        assert_eq!(Branch::Yes.flip(), Branch::No);
    }
}
