//! Snapshot tests for the token scan and the parse tree
//!
//! Trees are compared through their treeviz rendering, tokens through a compact
//! `text class priority` listing.

use anyswap::anyswap::formats::treeviz;
use anyswap::anyswap::lexing::{tokenize, Token};
use anyswap::anyswap::parsing::parse;
use anyswap::StringBuffer;

fn tokens_of(source: &str) -> Vec<Token> {
    let buffer = StringBuffer::new(source);
    tokenize(&buffer, 0..source.len())
}

fn tree_of(source: &str) -> String {
    treeviz::render(&parse(tokens_of(source)))
}

fn listing(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| {
            format!(
                "{:?} {} {} {:?}",
                t.text, t.class, t.priority, t.span
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_tokens_of_mixed_line() {
    insta::assert_snapshot!(listing(&tokens_of("x += f(\"a b\") != y;")), @r###"
    "x" atom 32 0..1
    "+=" operator 6 2..4
    "f" atom 32 5..6
    "(" open 0 6..7
    "\"a b\"" atom 32 7..12
    ")" close 1 12..13
    "!=" operator 10 14..16
    "y" atom 32 17..18
    ";" close 3 18..19
    "###);
}

#[test]
fn test_tokens_of_keywords_and_generics() {
    insta::assert_snapshot!(listing(&tokens_of("if not Vec<T> or a<=b")), @r###"
    "if" open 2 0..2
    "not" open 9 3..6
    "Vec" atom 32 7..10
    "<T>" atom 32 10..13
    "or" operator 7 14..16
    "a" atom 32 17..18
    "<=" operator 11 18..20
    "b" atom 32 20..21
    "###);
}

#[test]
fn test_tree_precedence() {
    insta::assert_snapshot!(tree_of("a + b * c"), @r###"
    ?
    └─ +
      ├─ a
      └─ *
        ├─ b
        └─ c
    "###);
}

#[test]
fn test_tree_call_with_chain() {
    insta::assert_snapshot!(tree_of("f(a, b, c)"), @r###"
    ?
    └─ f()
      └─ ,
        ├─ ,
        │ ├─ a
        │ └─ b
        └─ c
    "###);
}

#[test]
fn test_tree_statements_are_siblings() {
    insta::assert_snapshot!(tree_of("x = 1; y = 2"), @r###"
    ?
    ├─ ;
    │ └─ =
    │   ├─ x
    │   └─ 1
    └─ =
      ├─ y
      └─ 2
    "###);
}

#[test]
fn test_tree_soft_wrap_and_line_break() {
    insta::assert_snapshot!(tree_of("a +\nb\nc"), @r###"
    ?
    ├─ ⏎
    │ └─ +
    │   ├─ a
    │   └─ b
    └─ c
    "###);
}

#[test]
fn test_tree_unmatched_closer() {
    insta::assert_snapshot!(tree_of("a ) b"), @r###"
    ?
    ├─ )
    │ └─ a
    └─ b
    "###);
}
