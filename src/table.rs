//! LL(1) parse tables and table-driven parsing.

use std::collections::BTreeMap;

use log::debug;
use optional::Optioned;

use crate::error::{ParseError, TableError};
use crate::grammar::Grammar;
use crate::symbol::Symbol;
use crate::tree::ParseTree;

/// An LL(1) predictive-parse table.
///
/// Rows are indexed by nonterminals, columns by terminals plus one reserved
/// end-of-input column. Each cell holds at most one production body (which
/// may be the ε-production); a filled cell is never overwritten, so a second
/// assignment to the same cell signals that the grammar is ambiguous under
/// one-symbol lookahead.
///
/// A finished table is read-only and can drive any number of simultaneous
/// [`parse`](Ll1Table::parse) calls; each call owns its own stack and input
/// position.
#[derive(Clone, Debug)]
pub struct Ll1Table {
    rows: BTreeMap<Symbol, usize>,
    cols: BTreeMap<Option<Symbol>, usize>,
    /// Cell -> index into `bodies`, in row-major order.
    cells: Vec<Optioned<u32>>,
    bodies: Vec<Vec<Symbol>>,
}

/// A node of the parse-tree arena used while a parse is in flight.
struct Node {
    label: Option<Symbol>,
    children: Vec<usize>,
}

impl Ll1Table {
    /// Creates an empty table over the given alphabets.
    ///
    /// The end-of-input column is always present and is addressed with the
    /// lookahead `None`. The alphabets must be disjoint.
    pub fn new(nonterminals: &[Symbol], terminals: &[Symbol]) -> Result<Self, TableError> {
        let mut rows = BTreeMap::new();
        for &nt in nonterminals {
            let next = rows.len();
            rows.entry(nt).or_insert(next);
        }

        let mut cols = BTreeMap::new();
        cols.insert(None, 0);
        for &terminal in terminals {
            if rows.contains_key(&terminal) {
                return Err(TableError::OverlappingAlphabets(terminal));
            }
            let next = cols.len();
            cols.entry(Some(terminal)).or_insert(next);
        }

        let cells = vec![Optioned::none(); rows.len() * cols.len()];
        Ok(Ll1Table {
            rows,
            cols,
            cells,
            bodies: Vec::new(),
        })
    }

    /// Builds the complete table for a grammar.
    ///
    /// Every production `A → γ` is placed in the cells `(A, t)` for each
    /// terminal `t` in FIRST(γ); when γ is nullable, the ε-production is
    /// placed in `(A, t)` for each `t` in FOLLOW(A), end marker included.
    /// The first assignment to an already filled cell aborts the whole
    /// construction: the grammar is not LL(1) and there is no table.
    pub fn from_grammar(grammar: &Grammar) -> Option<Ll1Table> {
        let nonterminals: Vec<Symbol> = grammar.nonterminals().collect();
        let terminals: Vec<Symbol> = grammar.terminals().collect();
        let mut table = Ll1Table::new(&nonterminals, &terminals)
            .expect("a validated grammar has disjoint alphabets");

        let first_sets = grammar.first_sets();
        for rule in grammar.rules() {
            let first = first_sets.first_set_for_string(grammar, rule.rhs());
            for &entry in &first {
                let result = match entry {
                    Some(terminal) => table.add_cell(rule.lhs(), Some(terminal), rule.rhs()),
                    None => {
                        // The production is nullable: predict ε wherever the
                        // LHS may be followed.
                        let follow = grammar
                            .follow_sets()
                            .follow_set(rule.lhs())
                            .expect("FOLLOW sets cover every nonterminal");
                        follow
                            .iter()
                            .try_for_each(|&lookahead| table.add_cell(rule.lhs(), lookahead, &[]))
                    }
                };
                if let Err(conflict) = result {
                    debug!("grammar is not LL(1): {}", conflict);
                    return None;
                }
            }
        }

        Some(table)
    }

    /// Returns the production body in a cell, if the cell is filled.
    pub fn cell(&self, nonterminal: Symbol, lookahead: Option<Symbol>) -> Option<&[Symbol]> {
        let row = *self.rows.get(&nonterminal)?;
        let col = *self.cols.get(&lookahead)?;
        let body = self.cells[self.index(row, col)];
        if body.is_none() {
            None
        } else {
            Some(&self.bodies[body.unpack() as usize][..])
        }
    }

    /// Iterates over the table's nonterminals in ID order.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.rows.keys().copied()
    }

    /// Iterates over the table's columns in order; `None` is the end-marker
    /// column.
    pub fn lookaheads(&self) -> impl Iterator<Item = Option<Symbol>> + '_ {
        self.cols.keys().copied()
    }

    /// Fills a single cell.
    ///
    /// This is the assembly path for external table builders; whole-table
    /// construction from a grammar goes through
    /// [`from_grammar`](Ll1Table::from_grammar). The row, the column and
    /// every body symbol must belong to the table's alphabets, and the
    /// target cell must be empty; filling a cell twice is reported as the
    /// distinct [`TableError::RepeatedCell`] condition.
    pub fn add_cell(
        &mut self,
        nonterminal: Symbol,
        lookahead: Option<Symbol>,
        body: &[Symbol],
    ) -> Result<(), TableError> {
        let row = *self
            .rows
            .get(&nonterminal)
            .ok_or(TableError::UnknownNonterminal(nonterminal))?;
        let col = *self
            .cols
            .get(&lookahead)
            .ok_or(TableError::UnknownLookahead(lookahead))?;
        for &sym in body {
            if !self.rows.contains_key(&sym) && !self.cols.contains_key(&Some(sym)) {
                return Err(TableError::InvalidBodySymbol(sym));
            }
        }

        let index = self.index(row, col);
        if self.cells[index].is_some() {
            return Err(TableError::RepeatedCell {
                nonterminal,
                lookahead,
            });
        }
        self.cells[index] = Optioned::some(self.bodies.len() as u32);
        self.bodies.push(body.to_vec());
        Ok(())
    }

    /// Parses an input string of terminals, starting the derivation from the
    /// nonterminal `start`.
    ///
    /// The parser is a deterministic pushdown process: it repeatedly pops a
    /// pending tree node and either matches it against the next input
    /// terminal or expands it with the unique applicable production,
    /// scheduling the production's symbols leftmost-first. The end marker is
    /// implicit: the input must not contain it, and the parse accepts
    /// exactly when the pending work and the input run out together.
    ///
    /// On success the fully built tree rooted at `start` is returned; after
    /// any error there is no partial tree.
    pub fn parse(&self, input: &[Symbol], start: Symbol) -> Result<ParseTree, ParseError> {
        let mut nodes = vec![Node {
            label: Some(start),
            children: Vec::new(),
        }];
        // `None` on the stack is the end-of-input sentinel.
        let mut stack: Vec<Option<usize>> = vec![None, Some(0)];
        let mut at = 0;

        while let Some(entry) = stack.pop() {
            let node_id = match entry {
                Some(node_id) => node_id,
                None => {
                    // The sentinel is matched against exhausted input.
                    if at < input.len() {
                        return Err(ParseError::TrailingInput { at });
                    }
                    break;
                }
            };

            let lookahead = input.get(at).copied();
            if let Some(token) = lookahead {
                if !self.cols.contains_key(&Some(token)) {
                    return Err(ParseError::UnknownToken { at, token });
                }
            }

            let sym = nodes[node_id]
                .label
                .expect("ε placeholders are never scheduled");
            if self.cols.contains_key(&Some(sym)) {
                // A predicted terminal: match it and leave the node a leaf.
                match lookahead {
                    Some(token) if token == sym => at += 1,
                    Some(token) => {
                        return Err(ParseError::UnexpectedToken {
                            at,
                            expected: sym,
                            found: token,
                        })
                    }
                    None => return Err(ParseError::UnexpectedEof { expected: sym }),
                }
            } else {
                let body = match self.cell(sym, lookahead) {
                    Some(body) => body,
                    None => {
                        return Err(ParseError::NoProduction {
                            at,
                            nonterminal: sym,
                            lookahead,
                        })
                    }
                };
                if body.is_empty() {
                    // Attach an explicit ε leaf instead of leaving the node
                    // childless.
                    let child_id = nodes.len();
                    nodes.push(Node {
                        label: None,
                        children: Vec::new(),
                    });
                    nodes[node_id].children.push(child_id);
                } else {
                    let first_child = nodes.len();
                    for &child_sym in body {
                        nodes.push(Node {
                            label: Some(child_sym),
                            children: Vec::new(),
                        });
                    }
                    let child_ids: Vec<usize> = (first_child..nodes.len()).collect();
                    nodes[node_id].children.extend(child_ids.iter().copied());
                    // Reverse order, so that the leftmost child is expanded
                    // next.
                    for &child_id in child_ids.iter().rev() {
                        stack.push(Some(child_id));
                    }
                }
            }
        }

        Ok(assemble(&nodes, 0))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols.len() + col
    }
}

fn assemble(nodes: &[Node], node_id: usize) -> ParseTree {
    let children = nodes[node_id]
        .children
        .iter()
        .map(|&child_id| assemble(nodes, child_id))
        .collect();
    match nodes[node_id].label {
        Some(sym) => ParseTree::node(sym, children),
        None => ParseTree::epsilon(),
    }
}
