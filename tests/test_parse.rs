mod support;

use ll1::{GrammarBuilder, ParseError, ParseTree, Symbol};

use support::{expr_grammar, init_log, nested_grammar};

#[test]
fn test_parse_expression() {
    init_log();
    let fixture = expr_grammar();
    let table = fixture.grammar.ll1_table().unwrap();

    let input = [
        fixture.ident,
        fixture.plus,
        fixture.ident,
        fixture.star,
        fixture.ident,
    ];
    let tree = table.parse(&input, fixture.expr).unwrap();
    assert_eq!(tree.terminal_leaves(), input.to_vec());
}

#[test]
fn test_parse_tree_structure() {
    init_log();
    let fixture = expr_grammar();
    let table = fixture.grammar.ll1_table().unwrap();

    let tree = table.parse(&[fixture.ident], fixture.expr).unwrap();
    let expected = ParseTree::node(
        fixture.expr,
        vec![
            ParseTree::node(
                fixture.term,
                vec![
                    ParseTree::leaf(fixture.ident),
                    ParseTree::node(fixture.factors, vec![ParseTree::epsilon()]),
                ],
            ),
            ParseTree::node(fixture.rest, vec![ParseTree::epsilon()]),
        ],
    );
    assert_eq!(tree, expected);
}

#[test]
fn test_parse_reads_back_input() {
    init_log();
    let fixture = expr_grammar();
    let table = fixture.grammar.ll1_table().unwrap();

    let inputs: Vec<Vec<Symbol>> = vec![
        vec![fixture.ident],
        vec![fixture.lparen, fixture.ident, fixture.rparen],
        vec![
            fixture.ident,
            fixture.star,
            fixture.lparen,
            fixture.ident,
            fixture.plus,
            fixture.ident,
            fixture.rparen,
        ],
    ];
    for input in inputs {
        let tree = table.parse(&input, fixture.expr).unwrap();
        assert_eq!(tree.terminal_leaves(), input);
    }
}

#[test]
fn test_parse_empty_input_with_nullable_axiom() {
    init_log();
    let fixture = nested_grammar();
    let table = fixture.grammar.ll1_table().unwrap();

    let tree = table.parse(&[], fixture.s).unwrap();
    assert_eq!(
        tree,
        ParseTree::node(fixture.s, vec![ParseTree::epsilon()])
    );
    assert_eq!(tree.terminal_leaves(), Vec::<Symbol>::new());
}

#[test]
fn test_parse_nested_pairs() {
    init_log();
    let fixture = nested_grammar();
    let table = fixture.grammar.ll1_table().unwrap();

    let input = [fixture.a, fixture.a, fixture.b, fixture.b];
    let tree = table.parse(&input, fixture.s).unwrap();
    assert_eq!(tree.terminal_leaves(), input.to_vec());
}

#[test]
fn test_parse_rejects_unknown_token() {
    init_log();
    let fixture = expr_grammar();
    let table = fixture.grammar.ll1_table().unwrap();

    let bogus = Symbol::from(99usize);
    assert_eq!(
        table.parse(&[bogus], fixture.expr).unwrap_err(),
        ParseError::UnknownToken { at: 0, token: bogus }
    );
    // Also behind a valid prefix.
    assert_eq!(
        table
            .parse(&[fixture.ident, bogus], fixture.expr)
            .unwrap_err(),
        ParseError::UnknownToken { at: 1, token: bogus }
    );
}

#[test]
fn test_parse_rejects_mismatched_terminal() {
    init_log();
    let mut def = GrammarBuilder::new();
    let s = def.sym();
    let (a, b) = def.sym();
    def.terminals([a, b]);
    def.rule(s).rhs([a, b]);
    let table = def.build(s).unwrap().ll1_table().unwrap();

    assert_eq!(
        table.parse(&[a, a], s).unwrap_err(),
        ParseError::UnexpectedToken {
            at: 1,
            expected: b,
            found: a,
        }
    );
}

#[test]
fn test_parse_rejects_early_end_of_input() {
    init_log();
    let fixture = nested_grammar();
    let table = fixture.grammar.ll1_table().unwrap();

    assert_eq!(
        table.parse(&[fixture.a], fixture.s).unwrap_err(),
        ParseError::UnexpectedEof {
            expected: fixture.b,
        }
    );
}

#[test]
fn test_parse_rejects_trailing_input() {
    init_log();
    let fixture = nested_grammar();
    let table = fixture.grammar.ll1_table().unwrap();

    assert_eq!(
        table
            .parse(&[fixture.a, fixture.b, fixture.b], fixture.s)
            .unwrap_err(),
        ParseError::TrailingInput { at: 2 }
    );
}

#[test]
fn test_parse_rejects_missing_production() {
    init_log();
    let mut def = GrammarBuilder::new();
    let s = def.sym();
    let (a, b) = def.sym();
    def.terminals([a, b]);
    def.rule(s).rhs([a, b]);
    let table = def.build(s).unwrap().ll1_table().unwrap();

    assert_eq!(
        table.parse(&[b], s).unwrap_err(),
        ParseError::NoProduction {
            at: 0,
            nonterminal: s,
            lookahead: Some(b),
        }
    );
    assert_eq!(
        table.parse(&[], s).unwrap_err(),
        ParseError::NoProduction {
            at: 0,
            nonterminal: s,
            lookahead: None,
        }
    );
}
