//! FIRST sets.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::grammar::Grammar;
use crate::prediction::PerSymbolSets;
use crate::symbol::Symbol;

/// FIRST sets.
#[derive(Clone, Debug)]
pub struct FirstSets {
    map: PerSymbolSets,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// We define a binary relation FIRST(N, S), in which N is related to S
    /// if the grammar has a production of the form `N ⸬= α S β`, where
    /// α is a nullable string of symbols.
    ///
    /// We compute the transitive closure of this relation.
    pub fn new(grammar: &Grammar) -> Self {
        let mut this = FirstSets {
            map: BTreeMap::new(),
        };

        let mut lookahead = vec![];
        let mut changed = true;
        let mut passes = 0u32;
        while changed {
            changed = false;
            passes += 1;
            for rule in grammar.rules() {
                this.first_set_collect(grammar, &mut lookahead, rule.rhs());
                let first_set = this.map.entry(rule.lhs()).or_insert_with(BTreeSet::new);
                let prev_cardinality = first_set.len();
                first_set.extend(lookahead.iter().cloned());
                lookahead.clear();
                changed |= first_set.len() != prev_cardinality;
            }
        }
        trace!("FIRST sets converged after {} passes", passes);

        this
    }

    /// Returns a reference to the per-nonterminal FIRST sets.
    pub fn first_sets(&self) -> &PerSymbolSets {
        &self.map
    }

    /// Returns the FIRST set of a nonterminal.
    pub fn first_set(&self, sym: Symbol) -> Option<&BTreeSet<Option<Symbol>>> {
        self.map.get(&sym)
    }

    /// Calculates the FIRST set of a string of symbols.
    ///
    /// The result contains `None` (ε) exactly when every symbol of the
    /// string is nullable.
    pub fn first_set_for_string(
        &self,
        grammar: &Grammar,
        string: &[Symbol],
    ) -> BTreeSet<Option<Symbol>> {
        let mut lookahead = vec![];
        self.first_set_collect(grammar, &mut lookahead, string);
        lookahead.into_iter().collect()
    }

    /// Compute a FIRST set.
    fn first_set_collect(&self, grammar: &Grammar, vec: &mut Vec<Option<Symbol>>, rhs: &[Symbol]) {
        for &sym in rhs {
            let mut nullable = false;
            if grammar.is_terminal(sym) {
                vec.push(Some(sym));
            } else {
                match self.map.get(&sym) {
                    None => {
                        // This should only happen during set construction; it
                        // corresponds to an entry that has not yet been
                        // built. Otherwise, it would mean a nonterminal with
                        // no productions. Either way, the resulting first set
                        // should be empty.
                    }
                    Some(set) => {
                        for &opt_terminal in set {
                            if opt_terminal.is_some() {
                                vec.push(opt_terminal);
                            } else {
                                nullable = true;
                            }
                        }
                    }
                }
            }
            if !nullable {
                return;
            }
        }
        vec.push(None);
    }
}
