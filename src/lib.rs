//! Library for LL(1) analysis of context-free grammars: FIRST and FOLLOW
//! sets, predictive-parse tables with conflict detection, and table-driven
//! parsing of symbol strings into explicit parse trees.
//!
//! A grammar is defined through [`GrammarBuilder`], validated into a
//! [`Grammar`], and queried for FIRST/FOLLOW sets or turned into an
//! [`Ll1Table`] that parses input:
//!
//! ```
//! use ll1::GrammarBuilder;
//!
//! let mut def = GrammarBuilder::new();
//! let (expr, rest, term, factors) = def.sym();
//! let (plus, star, ident, lparen, rparen) = def.sym();
//! def.terminals([plus, star, ident, lparen, rparen]);
//! def.rule(expr).rhs([term, rest])
//!    .rule(rest).rhs([plus, expr]).rhs([])
//!    .rule(term).rhs([ident, factors]).rhs([lparen, expr, rparen])
//!    .rule(factors).rhs([star, term]).rhs([]);
//! let grammar = def.build(expr)?;
//!
//! assert!(grammar.is_ll1());
//! let table = grammar.ll1_table().expect("the grammar is LL(1)");
//! let tree = table.parse(&[ident, plus, ident, star, ident], expr)?;
//! assert_eq!(tree.terminal_leaves(), vec![ident, plus, ident, star, ident]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, allow(missing_docs))]

pub mod error;
pub mod grammar;
pub mod prediction;
pub mod rule;
pub mod symbol;
pub mod table;
pub mod tree;

pub use error::{GrammarError, ParseError, TableError};
pub use grammar::{Grammar, GrammarBuilder};
pub use prediction::{FirstSets, FollowSets, PerSymbolSets};
pub use rule::Rule;
pub use symbol::Symbol;
pub use table::Ll1Table;
pub use tree::ParseTree;
