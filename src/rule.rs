//! This module defines grammar rules. Each rule in a context-free grammar
//! consists of a single symbol on its left-hand side and an array of symbols
//! on its right-hand side. An empty right-hand side is an ε-production.

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use crate::grammar::GrammarBuilder;
use crate::symbol::Symbol;

/// Typical grammar rule representation.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rule {
    lhs: Symbol,
    rhs: Vec<Symbol>,
}

impl Rule {
    /// Creates a new rule.
    pub fn new(lhs: Symbol, rhs: Vec<Symbol>) -> Self {
        Rule { lhs, rhs }
    }

    /// Returns the rule's left-hand side.
    pub fn lhs(&self) -> Symbol {
        self.lhs
    }

    /// Returns the rule's right-hand side.
    pub fn rhs(&self) -> &[Symbol] {
        &self.rhs
    }

    /// Checks whether this rule is an ε-production.
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }
}

/// Grammar rules can be built with the builder pattern.
pub struct RuleBuilder<'a> {
    grammar: &'a mut GrammarBuilder,
    lhs: Symbol,
}

impl<'a> RuleBuilder<'a> {
    pub(crate) fn new(grammar: &'a mut GrammarBuilder, lhs: Symbol) -> Self {
        RuleBuilder { grammar, lhs }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(self, lhs: Symbol) -> Self {
        RuleBuilder {
            grammar: self.grammar,
            lhs,
        }
    }

    /// Adds a rule alternative to the grammar. An empty `syms` adds the
    /// ε-production.
    pub fn rhs<Sr>(self, syms: Sr) -> Self
    where
        Sr: AsRef<[Symbol]>,
    {
        self.grammar.add_rule(self.lhs, syms.as_ref().to_vec());
        self
    }
}
