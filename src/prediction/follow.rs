//! FOLLOW sets.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::grammar::Grammar;
use crate::prediction::{FirstSets, PerSymbolSets};
use crate::symbol::Symbol;

/// FOLLOW sets.
#[derive(Clone, Debug)]
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// The sets are mutually recursive, so they are computed together: the
    /// axiom's set is seeded with the end marker, then rules are rescanned
    /// until a full pass adds no new element to any set. Every pass is a
    /// monotone union over finite sets, so the loop terminates.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let mut this = FollowSets {
            map: BTreeMap::new(),
        };

        for rule in grammar.rules() {
            let follow_set = this.map.entry(rule.lhs()).or_insert_with(BTreeSet::new);
            if rule.lhs() == grammar.axiom() {
                follow_set.insert(None);
            }
        }

        let mut changed = true;
        let mut passes = 0u32;
        while changed {
            changed = false;
            passes += 1;
            for rule in grammar.rules() {
                // Scan the RHS right to left, carrying the FIRST set of the
                // suffix seen so far; while the suffix is nullable the LHS
                // follow set stays in the carry.
                let mut follow_set = this
                    .map
                    .get(&rule.lhs())
                    .expect("FOLLOW sets are seeded for every LHS")
                    .clone();

                for &sym in rule.rhs().iter().rev() {
                    if grammar.is_terminal(sym) {
                        follow_set.clear();
                        follow_set.insert(Some(sym));
                    } else {
                        let followed = this
                            .map
                            .get_mut(&sym)
                            .expect("FOLLOW sets are seeded for every nonterminal");
                        let prev_cardinality = followed.len();
                        followed.extend(follow_set.iter().cloned());
                        changed |= prev_cardinality != followed.len();

                        let first_set = first_sets
                            .first_set(sym)
                            .expect("FIRST sets cover every nonterminal");
                        if !first_set.contains(&None) {
                            follow_set.clear();
                        }
                        // ε never enters a FOLLOW set; it only keeps the
                        // carry alive.
                        follow_set.extend(first_set.iter().filter(|sym| sym.is_some()).cloned());
                    }
                }
            }
        }
        trace!("FOLLOW sets converged after {} passes", passes);

        this
    }

    /// Returns a reference to the per-nonterminal FOLLOW sets.
    pub fn follow_sets(&self) -> &PerSymbolSets {
        &self.map
    }

    /// Returns the FOLLOW set of a nonterminal.
    pub fn follow_set(&self, sym: Symbol) -> Option<&BTreeSet<Option<Symbol>>> {
        self.map.get(&sym)
    }
}
