//! Grammar definition, validation and analysis queries.

use std::cell::OnceCell;
use std::collections::BTreeSet;
use std::slice;

use log::debug;

use crate::error::GrammarError;
use crate::prediction::{FirstSets, FollowSets};
use crate::rule::{Rule, RuleBuilder};
use crate::symbol::source::SymbolContainer;
use crate::symbol::{Symbol, SymbolBitSet, SymbolSource};
use crate::table::Ll1Table;

/// The mutable definition stage of a context-free grammar.
///
/// Symbols are allocated with [`sym`](GrammarBuilder::sym), terminals are
/// declared explicitly, and nonterminals are exactly the symbols that appear
/// as a rule LHS. [`build`](GrammarBuilder::build) validates the definition
/// and freezes it into a [`Grammar`].
#[derive(Clone, Debug, Default)]
pub struct GrammarBuilder {
    sym_source: SymbolSource,
    terminals: Vec<Symbol>,
    rules: Vec<Rule>,
}

impl GrammarBuilder {
    /// Creates an empty grammar definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns generated symbols.
    pub fn sym<T>(&mut self) -> T
    where
        T: SymbolContainer,
    {
        self.sym_source.sym()
    }

    /// Declares a terminal symbol.
    pub fn terminal(&mut self, sym: Symbol) {
        self.terminals.push(sym);
    }

    /// Declares several terminal symbols at once.
    pub fn terminals<Sr>(&mut self, syms: Sr)
    where
        Sr: AsRef<[Symbol]>,
    {
        self.terminals.extend_from_slice(syms.as_ref());
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder {
        RuleBuilder::new(self, lhs)
    }

    pub(crate) fn add_rule(&mut self, lhs: Symbol, rhs: Vec<Symbol>) {
        self.rules.push(Rule::new(lhs, rhs));
    }

    /// Validates the definition and freezes it into a [`Grammar`] with the
    /// given axiom.
    ///
    /// The invariants enforced here hold for the lifetime of the returned
    /// grammar: terminals and nonterminals are disjoint, the axiom is a
    /// nonterminal, every nonterminal has at least one rule, and every RHS
    /// symbol belongs to one of the two alphabets.
    pub fn build(self, axiom: Symbol) -> Result<Grammar, GrammarError> {
        let num_syms = self.sym_source.num_syms();
        let in_space = |sym: Symbol| {
            if sym.usize() < num_syms {
                Ok(())
            } else {
                Err(GrammarError::UndefinedSymbol(sym))
            }
        };

        let mut terminal_set = SymbolBitSet::new(num_syms, false);
        for &sym in &self.terminals {
            in_space(sym)?;
            terminal_set.set(sym, true);
        }

        let mut nonterminal_set = SymbolBitSet::new(num_syms, false);
        for rule in &self.rules {
            in_space(rule.lhs())?;
            if terminal_set.has_sym(rule.lhs()) {
                return Err(GrammarError::TerminalWithRules(rule.lhs()));
            }
            nonterminal_set.set(rule.lhs(), true);
        }

        for rule in &self.rules {
            for &sym in rule.rhs() {
                if !terminal_set.has_sym(sym) && !nonterminal_set.has_sym(sym) {
                    return Err(GrammarError::UndefinedSymbol(sym));
                }
            }
        }

        if !nonterminal_set.has_sym(axiom) {
            return Err(GrammarError::AxiomNotNonterminal(axiom));
        }

        debug!(
            "validated grammar: {} rules, {} symbols, axiom {}",
            self.rules.len(),
            num_syms,
            axiom.usize()
        );

        Ok(Grammar {
            rules: self.rules,
            terminal_set,
            nonterminal_set,
            axiom,
            first: OnceCell::new(),
            follow: OnceCell::new(),
        })
    }
}

/// A validated, immutable context-free grammar.
///
/// FIRST and FOLLOW sets are each computed on first use as a single
/// whole-grammar fixpoint pass and cached for the lifetime of the instance;
/// the grammar never changes after construction, so the caches are never
/// invalidated. The one-shot caches make `Grammar` deliberately not `Sync`:
/// a grammar that must feed concurrent readers should have
/// [`first_sets`](Grammar::first_sets) and
/// [`follow_sets`](Grammar::follow_sets) called once up front, and even then
/// needs external synchronization to be shared.
#[derive(Clone, Debug)]
pub struct Grammar {
    rules: Vec<Rule>,
    terminal_set: SymbolBitSet,
    nonterminal_set: SymbolBitSet,
    axiom: Symbol,
    first: OnceCell<FirstSets>,
    follow: OnceCell<FollowSets>,
}

impl Grammar {
    /// Returns an iterator over the grammar's rules.
    pub fn rules(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Returns the axiom (start symbol).
    pub fn axiom(&self) -> Symbol {
        self.axiom
    }

    /// Checks whether a symbol is a declared terminal.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminal_set.has_sym(sym)
    }

    /// Checks whether a symbol is a nonterminal.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.nonterminal_set.has_sym(sym)
    }

    /// Iterates over the declared terminals in ID order.
    pub fn terminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.terminal_set.iter()
    }

    /// Iterates over the nonterminals in ID order.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.nonterminal_set.iter()
    }

    /// Returns the size of the grammar's symbol space.
    pub fn num_syms(&self) -> usize {
        self.terminal_set.len()
    }

    /// Returns the grammar's FIRST sets, computing them on first use.
    pub fn first_sets(&self) -> &FirstSets {
        self.first.get_or_init(|| FirstSets::new(self))
    }

    /// Returns the grammar's FOLLOW sets, computing them on first use.
    ///
    /// All FOLLOW sets are computed together in one fixpoint pass, because
    /// their defining equations are mutually recursive; the result is
    /// published only after the pass converges.
    pub fn follow_sets(&self) -> &FollowSets {
        self.follow
            .get_or_init(|| FollowSets::new(self, self.first_sets()))
    }

    /// Computes the FIRST set of a sentence.
    ///
    /// The result contains every terminal that can begin a derivation of
    /// `sentence`, plus `None` (ε) if the whole sentence derives the empty
    /// string; FIRST of the empty sentence is exactly `{ε}`. A leading
    /// terminal settles the set on its own, no matter what follows it.
    pub fn first_of(&self, sentence: &[Symbol]) -> Result<BTreeSet<Option<Symbol>>, GrammarError> {
        for &sym in sentence {
            self.check_declared(sym)?;
        }
        Ok(self.first_sets().first_set_for_string(self, sentence))
    }

    /// Computes the FOLLOW set of the last symbol of a sentence.
    ///
    /// The set contains every terminal that can immediately follow that
    /// nonterminal in a derivation from the axiom; `None` is the
    /// end-of-input marker. Fails on an empty sentence, on undeclared
    /// symbols, and when the last symbol is not a nonterminal.
    pub fn follow_of(&self, sentence: &[Symbol]) -> Result<&BTreeSet<Option<Symbol>>, GrammarError> {
        for &sym in sentence {
            self.check_declared(sym)?;
        }
        let last = *sentence.last().ok_or(GrammarError::EmptySentence)?;
        if !self.is_nonterminal(last) {
            return Err(GrammarError::UndefinedFollow(last));
        }
        Ok(self
            .follow_sets()
            .follow_set(last)
            .expect("FOLLOW sets cover every nonterminal"))
    }

    /// Builds the LL(1) parse table for this grammar, or returns `None` if
    /// the grammar is not LL(1).
    ///
    /// Absence of a table is an expected, checkable outcome, not an error.
    pub fn ll1_table(&self) -> Option<Ll1Table> {
        Ll1Table::from_grammar(self)
    }

    /// Checks whether the grammar is LL(1).
    pub fn is_ll1(&self) -> bool {
        self.ll1_table().is_some()
    }

    fn check_declared(&self, sym: Symbol) -> Result<(), GrammarError> {
        if self.is_terminal(sym) || self.is_nonterminal(sym) {
            Ok(())
        } else {
            Err(GrammarError::UndefinedSymbol(sym))
        }
    }
}
