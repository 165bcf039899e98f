//! Lossless tokenization tests

use proptest::prelude::*;
use rstest::rstest;
use scl::parser::{LexErrorKind, Lexer, SyntaxKind, TokenValue, tokenize};

proptest! {
    #[test]
    fn token_texts_rebuild_any_input(input in "[ -~\t\n]{0,80}") {
        let rebuilt: String = Lexer::new(&input).map(|token| token.text).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn token_ranges_are_contiguous(input in "[a-z0-9 {}();:,.=<>!#+*/\\\\~\"$\n-]{0,80}") {
        let mut end = 0u32;
        for token in tokenize(&input) {
            prop_assert_eq!(u32::from(token.range.start()), end);
            prop_assert!(token.range.end() > token.range.start());
            end = token.range.end().into();
        }
        prop_assert_eq!(end as usize, input.len());
    }
}

#[rstest]
#[case("state", SyntaxKind::STATE_KW)]
#[case("uses", SyntaxKind::USES_KW)]
#[case("Relation", SyntaxKind::RELATION_KW)]
#[case("otherwise", SyntaxKind::OTHERWISE_KW)]
#[case("=>", SyntaxKind::FAT_ARROW)]
#[case("\\/", SyntaxKind::TLA_OR)]
#[case("/\\", SyntaxKind::TLA_AND)]
#[case("\\E", SyntaxKind::EXISTS)]
#[case("\\A", SyntaxKind::FORALL)]
#[case("#", SyntaxKind::HASH)]
#[case("::", SyntaxKind::COLON_COLON)]
#[case("relation", SyntaxKind::IDENT)]
#[case("_private", SyntaxKind::IDENT)]
fn test_single_token(#[case] input: &str, #[case] expected: SyntaxKind) {
    let tokens = tokenize(input);
    assert_eq!(tokens.len(), 1, "{input:?} lexed as {tokens:?}");
    assert_eq!(tokens[0].kind, expected);
    assert_eq!(tokens[0].error, None);
}

#[rstest]
#[case("@", LexErrorKind::InvalidCharacter)]
#[case("\"open", LexErrorKind::UnterminatedString)]
#[case("/* open", LexErrorKind::UnterminatedBlockComment)]
#[case("18446744073709551616", LexErrorKind::InvalidNumber)]
fn test_lex_errors(#[case] input: &str, #[case] expected: LexErrorKind) {
    let tokens = tokenize(input);
    assert_eq!(tokens[0].kind, SyntaxKind::ERROR);
    assert_eq!(tokens[0].error, Some(expected));
}

#[test]
fn test_largest_number_is_accepted() {
    let tokens = tokenize("18446744073709551615");
    assert_eq!(tokens[0].value(), Some(TokenValue::Number(u64::MAX)));
}

#[test]
fn test_trivia_is_kept() {
    let kinds: Vec<_> = tokenize("a // note\n/* block */ b")
        .iter()
        .map(|token| token.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::IDENT,
            SyntaxKind::WHITESPACE,
            SyntaxKind::LINE_COMMENT,
            SyntaxKind::WHITESPACE,
            SyntaxKind::BLOCK_COMMENT,
            SyntaxKind::WHITESPACE,
            SyntaxKind::IDENT,
        ]
    );
}
