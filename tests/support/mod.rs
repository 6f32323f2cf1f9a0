#![allow(dead_code)]

use std::collections::BTreeSet;

use ll1::{Grammar, GrammarBuilder, Symbol};

pub fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds an `Option<Symbol>` set from terminals, optionally with the `None`
/// entry (ε in a FIRST set, the end marker in a FOLLOW set).
pub fn symbol_set(terminals: &[Symbol], with_none: bool) -> BTreeSet<Option<Symbol>> {
    let mut set: BTreeSet<Option<Symbol>> = terminals.iter().map(|&sym| Some(sym)).collect();
    if with_none {
        set.insert(None);
    }
    set
}

pub struct ExprGrammar {
    pub grammar: Grammar,
    pub expr: Symbol,
    pub rest: Symbol,
    pub term: Symbol,
    pub factors: Symbol,
    pub plus: Symbol,
    pub star: Symbol,
    pub ident: Symbol,
    pub lparen: Symbol,
    pub rparen: Symbol,
}

/// The classic arithmetic-expression grammar, already left-factored:
///
/// ```text
/// E ⸬= T X      X ⸬= + E | ε
/// T ⸬= i Y | ( E )      Y ⸬= * T | ε
/// ```
pub fn expr_grammar() -> ExprGrammar {
    let mut def = GrammarBuilder::new();
    let (expr, rest, term, factors) = def.sym();
    let (plus, star, ident, lparen, rparen) = def.sym();
    def.terminals([plus, star, ident, lparen, rparen]);
    def.rule(expr).rhs([term, rest])
       .rule(rest).rhs([plus, expr]).rhs([])
       .rule(term).rhs([ident, factors]).rhs([lparen, expr, rparen])
       .rule(factors).rhs([star, term]).rhs([]);
    let grammar = def.build(expr).unwrap();
    ExprGrammar {
        grammar,
        expr,
        rest,
        term,
        factors,
        plus,
        star,
        ident,
        lparen,
        rparen,
    }
}

pub struct NestedGrammar {
    pub grammar: Grammar,
    pub s: Symbol,
    pub a: Symbol,
    pub b: Symbol,
}

/// The nested-pair grammar `S ⸬= a S b | ε`.
pub fn nested_grammar() -> NestedGrammar {
    let mut def = GrammarBuilder::new();
    let s = def.sym();
    let (a, b) = def.sym();
    def.terminals([a, b]);
    def.rule(s).rhs([a, s, b]).rhs([]);
    let grammar = def.build(s).unwrap();
    NestedGrammar { grammar, s, a, b }
}
