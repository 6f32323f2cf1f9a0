//! Parse trees.

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// An ordered derivation record built during a successful parse.
///
/// A node is labeled with the symbol it derives; the label `None` marks the
/// ε placeholder leaf attached when an empty production is applied, so every
/// derivation step is explicit in the tree. Equality is structural: equal
/// labels and pairwise-equal children. Each node owns its own children
/// vector; nodes are never shared between trees.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseTree {
    label: Option<Symbol>,
    children: Vec<ParseTree>,
}

impl ParseTree {
    /// Creates a leaf node labeled with a symbol.
    pub fn leaf(sym: Symbol) -> Self {
        ParseTree {
            label: Some(sym),
            children: Vec::new(),
        }
    }

    /// Creates the ε placeholder leaf.
    pub fn epsilon() -> Self {
        ParseTree {
            label: None,
            children: Vec::new(),
        }
    }

    /// Creates a node with the given ordered children.
    pub fn node(sym: Symbol, children: Vec<ParseTree>) -> Self {
        ParseTree {
            label: Some(sym),
            children,
        }
    }

    /// Returns the node label, or `None` for the ε placeholder.
    pub fn label(&self) -> Option<Symbol> {
        self.label
    }

    /// Returns the ordered children.
    pub fn children(&self) -> &[ParseTree] {
        &self.children
    }

    /// Checks whether this node is the ε placeholder.
    pub fn is_epsilon(&self) -> bool {
        self.label.is_none()
    }

    /// Collects the labels of the terminal leaves, left to right, skipping
    /// ε placeholders.
    ///
    /// For a tree returned by a successful parse this reads back exactly the
    /// input string.
    pub fn terminal_leaves(&self) -> Vec<Symbol> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, leaves: &mut Vec<Symbol>) {
        if self.children.is_empty() {
            if let Some(sym) = self.label {
                leaves.push(sym);
            }
        } else {
            for child in &self.children {
                child.collect_leaves(leaves);
            }
        }
    }
}
