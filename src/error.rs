//! Errors reported by grammar validation, table assembly and parsing.

use std::error::Error;
use std::fmt;

use crate::symbol::Symbol;

/// A malformed grammar definition, or an invalid grammar query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// A declared terminal appears as the left-hand side of a rule.
    TerminalWithRules(Symbol),
    /// A symbol is neither a declared terminal nor the LHS of any rule.
    UndefinedSymbol(Symbol),
    /// The requested axiom is not a nonterminal of the grammar.
    AxiomNotNonterminal(Symbol),
    /// FOLLOW was requested for the empty sentence.
    EmptySentence,
    /// FOLLOW was requested for a symbol that is not a nonterminal.
    UndefinedFollow(Symbol),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GrammarError::TerminalWithRules(sym) => write!(
                f,
                "terminal symbol {} appears as the left-hand side of a rule",
                sym.usize()
            ),
            GrammarError::UndefinedSymbol(sym) => write!(
                f,
                "symbol {} is neither a declared terminal nor a nonterminal",
                sym.usize()
            ),
            GrammarError::AxiomNotNonterminal(sym) => {
                write!(f, "axiom {} is not a nonterminal of the grammar", sym.usize())
            }
            GrammarError::EmptySentence => {
                write!(f, "cannot compute FOLLOW of the empty sentence")
            }
            GrammarError::UndefinedFollow(sym) => write!(
                f,
                "FOLLOW is defined for nonterminals only, symbol {} is a terminal",
                sym.usize()
            ),
        }
    }
}

impl Error for GrammarError {}

/// A failed attempt to assemble an LL(1) table cell by cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableError {
    /// A symbol was listed both as a terminal and as a nonterminal.
    OverlappingAlphabets(Symbol),
    /// The row symbol is not one of the table's nonterminals.
    UnknownNonterminal(Symbol),
    /// The column is neither one of the table's terminals nor the end marker.
    UnknownLookahead(Option<Symbol>),
    /// A cell body symbol is outside the table's alphabets.
    InvalidBodySymbol(Symbol),
    /// The target cell is already filled.
    RepeatedCell {
        /// Row of the repeated cell.
        nonterminal: Symbol,
        /// Column of the repeated cell.
        lookahead: Option<Symbol>,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TableError::OverlappingAlphabets(sym) => write!(
                f,
                "symbol {} is both a terminal and a nonterminal of the table",
                sym.usize()
            ),
            TableError::UnknownNonterminal(sym) => {
                write!(f, "nonterminal {} is not a row of the table", sym.usize())
            }
            TableError::UnknownLookahead(lookahead) => write!(
                f,
                "lookahead {} is not a column of the table",
                DisplayLookahead(lookahead)
            ),
            TableError::InvalidBodySymbol(sym) => write!(
                f,
                "cell body symbol {} is outside the table's alphabets",
                sym.usize()
            ),
            TableError::RepeatedCell {
                nonterminal,
                lookahead,
            } => write!(
                f,
                "repeated cell ({}, {})",
                nonterminal.usize(),
                DisplayLookahead(lookahead)
            ),
        }
    }
}

impl Error for TableError {}

/// Rejection of an input string by the table-driven parser.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input contains a symbol outside the terminal alphabet.
    UnknownToken {
        /// Position of the offending input symbol.
        at: usize,
        /// The offending input symbol.
        token: Symbol,
    },
    /// The input symbol does not match the predicted terminal.
    UnexpectedToken {
        /// Position of the mismatch.
        at: usize,
        /// The terminal the derivation predicted.
        expected: Symbol,
        /// The input symbol actually found.
        found: Symbol,
    },
    /// The input ended while a terminal was still predicted.
    UnexpectedEof {
        /// The terminal the derivation predicted.
        expected: Symbol,
    },
    /// No production applies for the current nonterminal and lookahead.
    NoProduction {
        /// Position of the lookahead.
        at: usize,
        /// The nonterminal on top of the parse stack.
        nonterminal: Symbol,
        /// The lookahead, or `None` at the end of the input.
        lookahead: Option<Symbol>,
    },
    /// The derivation completed with input left over.
    TrailingInput {
        /// Position of the first unconsumed input symbol.
        at: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::UnknownToken { at, token } => write!(
                f,
                "input symbol {} at position {} is not a terminal of the table",
                token.usize(),
                at
            ),
            ParseError::UnexpectedToken {
                at,
                expected,
                found,
            } => write!(
                f,
                "expected terminal {} at position {}, found {}",
                expected.usize(),
                at,
                found.usize()
            ),
            ParseError::UnexpectedEof { expected } => write!(
                f,
                "unexpected end of input, expected terminal {}",
                expected.usize()
            ),
            ParseError::NoProduction {
                at,
                nonterminal,
                lookahead,
            } => write!(
                f,
                "no production for nonterminal {} with lookahead {} at position {}",
                nonterminal.usize(),
                DisplayLookahead(lookahead),
                at
            ),
            ParseError::TrailingInput { at } => {
                write!(f, "input left over at position {}", at)
            }
        }
    }
}

impl Error for ParseError {}

/// Formats a table column: a terminal ID, or `$` for the end marker.
struct DisplayLookahead(Option<Symbol>);

impl fmt::Display for DisplayLookahead {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(sym) => write!(f, "{}", sym.usize()),
            None => write!(f, "$"),
        }
    }
}
