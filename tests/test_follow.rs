mod support;

use ll1::{GrammarBuilder, GrammarError, Symbol};

use support::{expr_grammar, init_log, nested_grammar, symbol_set};

#[test]
fn test_follow_of_axiom_has_end_marker() {
    init_log();
    let fixture = expr_grammar();
    let follow = fixture.grammar.follow_of(&[fixture.expr]).unwrap();
    assert!(follow.contains(&None));
}

#[test]
fn test_follow_sets_of_expr_grammar() {
    init_log();
    let fixture = expr_grammar();
    let follow_sets = fixture.grammar.follow_sets();

    assert_eq!(
        follow_sets.follow_set(fixture.expr),
        Some(&symbol_set(&[fixture.rparen], true))
    );
    assert_eq!(
        follow_sets.follow_set(fixture.rest),
        Some(&symbol_set(&[fixture.rparen], true))
    );
    assert_eq!(
        follow_sets.follow_set(fixture.term),
        Some(&symbol_set(&[fixture.plus, fixture.rparen], true))
    );
    assert_eq!(
        follow_sets.follow_set(fixture.factors),
        Some(&symbol_set(&[fixture.plus, fixture.rparen], true))
    );
}

#[test]
fn test_follow_sets_of_nested_grammar() {
    init_log();
    let fixture = nested_grammar();
    assert_eq!(
        fixture.grammar.follow_of(&[fixture.s]).unwrap(),
        &symbol_set(&[fixture.b], true)
    );
}

#[test]
fn test_follow_of_sentence_is_follow_of_its_last_symbol() {
    init_log();
    let fixture = expr_grammar();
    let of_sentence = fixture
        .grammar
        .follow_of(&[fixture.plus, fixture.expr])
        .unwrap()
        .clone();
    let of_last = fixture.grammar.follow_of(&[fixture.expr]).unwrap();
    assert_eq!(&of_sentence, of_last);
}

#[test]
fn test_follow_sets_are_cached() {
    init_log();
    let fixture = expr_grammar();
    assert!(std::ptr::eq(
        fixture.grammar.follow_sets(),
        fixture.grammar.follow_sets()
    ));
    assert!(std::ptr::eq(
        fixture.grammar.first_sets(),
        fixture.grammar.first_sets()
    ));
}

#[test]
fn test_follow_of_empty_sentence() {
    init_log();
    let fixture = expr_grammar();
    assert_eq!(
        fixture.grammar.follow_of(&[]).unwrap_err(),
        GrammarError::EmptySentence
    );
}

#[test]
fn test_follow_of_terminal() {
    init_log();
    let fixture = expr_grammar();
    assert_eq!(
        fixture.grammar.follow_of(&[fixture.ident]).unwrap_err(),
        GrammarError::UndefinedFollow(fixture.ident)
    );
}

#[test]
fn test_follow_of_undeclared_symbol() {
    init_log();
    let fixture = expr_grammar();
    let bogus = Symbol::from(42usize);
    assert_eq!(
        fixture.grammar.follow_of(&[bogus]).unwrap_err(),
        GrammarError::UndefinedSymbol(bogus)
    );
}

#[test]
fn test_follow_sets_of_mutually_recursive_grammar() {
    init_log();
    let mut def = GrammarBuilder::new();
    let (r, a, p, q, z, s) = def.sym();
    let (ta, tf, tstar, tb, te) = def.sym();
    def.terminals([ta, tf, tstar, tb, te]);
    def.rule(r).rhs([a, tf, p])
       .rule(a).rhs([ta]).rhs([r, tstar, p]).rhs([])
       .rule(p).rhs([tf, q]).rhs([tstar, ta, a]).rhs([])
       .rule(q).rhs([ta, tstar, p]).rhs([z, q])
       .rule(z).rhs([r]).rhs([s])
       .rule(s).rhs([tb]).rhs([te]);
    let grammar = def.build(r).unwrap();
    let follow_sets = grammar.follow_sets();

    let everywhere = symbol_set(&[ta, tf, tstar, tb, te], true);
    assert_eq!(follow_sets.follow_set(r), Some(&everywhere));
    assert_eq!(follow_sets.follow_set(a), Some(&everywhere));
    assert_eq!(follow_sets.follow_set(p), Some(&everywhere));
    assert_eq!(follow_sets.follow_set(q), Some(&everywhere));
    assert_eq!(
        follow_sets.follow_set(z),
        Some(&symbol_set(&[ta, tf, tb, te], false))
    );
    assert_eq!(
        follow_sets.follow_set(s),
        Some(&symbol_set(&[ta, tf, tb, te], false))
    );
}
