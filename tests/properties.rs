//! Property tests over arbitrary and generated programs.

use minic::lexer::{
    lexer::{scan, tokenize},
    tokens::TokenKind,
};
use proptest::prelude::*;

fn valid_lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9]{0,6}",
        "[1-9][0-9]{0,4}",
        "[1-9][0-9]{0,3}\\.[0-9]{1,3}",
        "\"[a-z ]{0,6}\"",
        prop::sample::select(vec![
            "+", "++", "-", "*", "/", "=", "<", "<=", ">", ">=", "==", "!=", "(", ")", "{", "}",
            ";", "if", "print",
        ])
        .prop_map(String::from),
        "[a-z ]{0,8}".prop_map(|body| format!("\\*{body}*\\")),
    ]
}

fn valid_program() -> impl Strategy<Value = String> {
    proptest::collection::vec(valid_lexeme(), 0..20).prop_map(|lexemes| lexemes.join(" "))
}

proptest! {
    #[test]
    fn token_text_is_verbatim_source(source in any::<String>()) {
        let tokens = tokenize(&source, None);
        let mut last_end = 0;

        for token in &tokens {
            let start = token.span.start.0 as usize;
            let end = token.span.end.0 as usize;

            prop_assert!(start >= last_end);
            prop_assert!(end > start);
            prop_assert!(end <= source.len());
            prop_assert_eq!(&source[start..end], token.value.as_str());
            last_end = end;
        }
    }

    #[test]
    fn every_error_token_has_a_diagnostic(source in "[ -~\\n]{0,64}") {
        let scanned = scan(&source, None);
        let error_tokens = scanned.tokens.iter().filter(|t| t.kind == TokenKind::Error).count();

        prop_assert_eq!(error_tokens, scanned.errors.len());
        prop_assert!(scanned.tokens.iter().all(|t| t.kind != TokenKind::Comment));
    }

    #[test]
    fn valid_programs_have_no_errors(program in valid_program()) {
        let scanned = scan(&program, None);
        prop_assert!(!scanned.has_errors(), "errors in {:?}: {:?}", program, scanned.errors);
    }

    #[test]
    fn separated_programs_concatenate(a in valid_program(), b in valid_program()) {
        let joined = format!("{a} {b}");

        let mut expected = tokenize(&a, None);
        expected.extend(tokenize(&b, None));

        prop_assert_eq!(tokenize(&joined, None), expected);
    }

    #[test]
    fn runs_are_maximal(source in "[a-z0-9+*<>=! -]{0,32}") {
        let tokens = tokenize(&source, None);

        for token in &tokens {
            let end = token.span.end.0 as usize;
            let next = source[end..].chars().next();

            match token.kind {
                TokenKind::Identifier | TokenKind::Keyword => {
                    prop_assert!(!next.is_some_and(|c| c.is_ascii_alphanumeric()));
                }
                TokenKind::Operator => {
                    prop_assert!(!next.is_some_and(|c| "+-*/=<>!".contains(c)));
                }
                _ => {}
            }
        }
    }
}
