//! Lexer for the Vessel language.
//!
//! Turns source text into a token vector, treating whitespace and `//`
//! comments as trivia. Interpolated strings (`$"..."`) are lexed as a
//! single token whose payload is the already-segmented body.

mod lexer;

pub use lexer::{LexError, Lexer};

#[cfg(test)]
mod tests {
    use super::*;
    use vessel_ast::token::{InterpPartKind, Token, TokenKind};
    use vessel_ast::Span;

    fn lex(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().expect("lex error")
    }

    fn kinds(src: &str) -> Vec<TokenKind> {
        lex(src).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keywords_match_whole_tokens_only() {
        assert_eq!(kinds("mutex"), vec![TokenKind::Mutex, TokenKind::Eof]);
        assert_eq!(
            kinds("mutexFoo"),
            vec![TokenKind::Ident("mutexFoo".to_string()), TokenKind::Eof]
        );
        assert_eq!(
            kinds("constant"),
            vec![TokenKind::Ident("constant".to_string()), TokenKind::Eof]
        );
    }

    #[test]
    fn number_literals_keep_source_text() {
        assert_eq!(
            kinds("12 3.14"),
            vec![
                TokenKind::Number("12".to_string()),
                TokenKind::Number("3.14".to_string()),
                TokenKind::Eof
            ]
        );
        // A dot not followed by a digit is not part of the literal.
        assert_eq!(
            kinds("1.x"),
            vec![
                TokenKind::Number("1".to_string()),
                TokenKind::Dot,
                TokenKind::Ident("x".to_string()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn negative_numbers_are_two_tokens() {
        assert_eq!(
            kinds("-5"),
            vec![
                TokenKind::Minus,
                TokenKind::Number("5".to_string()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn comments_and_whitespace_are_trivia() {
        assert_eq!(
            kinds("a // rest of line\n  b"),
            vec![
                TokenKind::Ident("a".to_string()),
                TokenKind::Ident("b".to_string()),
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn operators_longest_match() {
        assert_eq!(
            kinds("== = != !"),
            vec![
                TokenKind::EqEq,
                TokenKind::Eq,
                TokenKind::BangEq,
                TokenKind::Bang,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn plain_string() {
        let tokens = lex(r#""hello there""#);
        assert_eq!(tokens[0].kind, TokenKind::Str("hello there".to_string()));
        assert_eq!(tokens[0].span, Span::new(0, 13));
    }

    #[test]
    fn unterminated_string_points_at_opening_quote() {
        let err = Lexer::new("mutex m; \"oops").tokenize().unwrap_err();
        assert_eq!(err.span.start, 9);
        assert!(err.message.contains("Unterminated string"));
    }

    #[test]
    fn interpolation_segments_and_spans() {
        // $ " x = { a + 1 } ! "
        // 0 1 2 3 4 5 6 7 8 9 10
        let tokens = lex(r#"$"x={a+1}!""#);
        assert_eq!(tokens[0].span, Span::new(0, 11));
        let TokenKind::InterpStr(parts) = &tokens[0].kind else {
            panic!("expected interpolated string, got {:?}", tokens[0].kind);
        };
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].kind, InterpPartKind::Text("x=".to_string()));
        assert_eq!(parts[0].span, Span::new(2, 4));
        assert_eq!(parts[1].kind, InterpPartKind::Expr("a+1".to_string()));
        assert_eq!(parts[1].span, Span::new(5, 8));
        assert_eq!(parts[2].kind, InterpPartKind::Text("!".to_string()));
        assert_eq!(parts[2].span, Span::new(9, 10));
    }

    #[test]
    fn interpolation_tracks_nested_brackets() {
        let tokens = lex(r#"$"{f(1, g(2))}""#);
        let TokenKind::InterpStr(parts) = &tokens[0].kind else {
            panic!("expected interpolated string");
        };
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].kind, InterpPartKind::Expr("f(1, g(2))".to_string()));
    }

    #[test]
    fn interpolation_skips_nested_strings() {
        // The '"' inside the fragment must not close the literal.
        let tokens = lex(r#"$"{greet("hi")}""#);
        let TokenKind::InterpStr(parts) = &tokens[0].kind else {
            panic!("expected interpolated string");
        };
        assert_eq!(parts.len(), 1);
        assert_eq!(
            parts[0].kind,
            InterpPartKind::Expr("greet(\"hi\")".to_string())
        );
    }

    #[test]
    fn unterminated_interpolation_is_an_error() {
        let err = Lexer::new(r#"$"x={a"#).tokenize().unwrap_err();
        assert_eq!(err.span.start, 0);
        assert!(err.message.contains("Unterminated interpolated string"));
    }

    #[test]
    fn backslash_in_interpolation_is_an_error() {
        let err = Lexer::new(r#"$"a\n""#).tokenize().unwrap_err();
        assert!(err.message.contains("'\\'"));
    }

    #[test]
    fn unexpected_character() {
        let err = Lexer::new("number x = #;").tokenize().unwrap_err();
        assert_eq!(err.span, Span::new(11, 12));
        assert!(err.message.contains('#'));
    }

    #[test]
    fn token_spans_tile_the_source() {
        let src = "number add(number a) { // sum\n  return a + 1.5; }";
        let tokens = lex(src);
        let mut pos = 0;
        for t in &tokens {
            // Everything between tokens must be trivia.
            let gap = &src[pos..t.span.start];
            assert!(
                gap.chars().all(|c| c.is_whitespace()) || gap.trim_start().starts_with("//"),
                "non-trivia gap {:?} before {:?}",
                gap,
                t.kind
            );
            assert!(t.span.start >= pos, "overlapping token {:?}", t.kind);
            pos = t.span.end;
        }
        assert_eq!(pos, src.len());
    }
}
