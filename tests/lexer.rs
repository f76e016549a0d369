use calcium::{
    error::EvalError,
    interpreter::lexer::{Lexer, MAX_DEPTH, Token},
};

fn tokens(src: &str) -> Result<Vec<(Token, usize)>, EvalError> {
    let mut lexer = Lexer::new(src);
    let mut out = Vec::new();
    lexer.advance()?;
    while let Some(token) = lexer.current() {
        out.push((token.clone(), lexer.offset()));
        lexer.advance()?;
    }
    Ok(out)
}

#[test]
fn classifies_every_token_kind() {
    let found: Vec<Token> = tokens("1 2.5 quit + - * / ( ) ;").unwrap()
                                                              .into_iter()
                                                              .map(|(t, _)| t)
                                                              .collect();
    assert_eq!(found,
               vec![Token::Number(1.0),
                    Token::Number(2.5),
                    Token::Identifier("quit".to_string()),
                    Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::LParen,
                    Token::RParen,
                    Token::Semicolon]);
}

#[test]
fn integers_and_decimals_share_one_kind() {
    assert_eq!(tokens("3").unwrap()[0].0, Token::Number(3.0));
    assert_eq!(tokens("3.0").unwrap()[0].0, Token::Number(3.0));
}

#[test]
fn identifiers_may_contain_digits() {
    assert_eq!(tokens("abc12").unwrap(),
               vec![(Token::Identifier("abc12".to_string()), 0)]);
    assert_eq!(tokens("12abc").unwrap(),
               vec![(Token::Number(12.0), 0), (Token::Identifier("abc".to_string()), 2)]);
}

#[test]
fn whitespace_is_skipped_and_offsets_tracked() {
    assert_eq!(tokens("  7\n*\t( 1 )").unwrap(),
               vec![(Token::Number(7.0), 2),
                    (Token::Star, 4),
                    (Token::LParen, 6),
                    (Token::Number(1.0), 8),
                    (Token::RParen, 10)]);
}

#[test]
fn empty_input_is_end_of_input() {
    let mut lexer = Lexer::new("");
    lexer.advance().unwrap();
    assert!(lexer.at_end());
    assert_eq!(lexer.current(), None);
    assert_eq!(lexer.text(), "");

    lexer.advance().unwrap();
    assert!(lexer.at_end());
}

#[test]
fn text_is_the_raw_slice() {
    let mut lexer = Lexer::new("  10.50");
    lexer.advance().unwrap();
    assert_eq!(lexer.text(), "10.50");
    assert_eq!(lexer.current(), Some(&Token::Number(10.5)));
}

#[test]
fn unknown_characters_fail_to_scan() {
    assert_eq!(tokens("1 # 2"),
               Err(EvalError::LexError { text:   "#".to_string(),
                                         offset: 2, }));
    assert!(matches!(tokens("a_b"), Err(EvalError::LexError { .. })));
    assert!(matches!(tokens("1.5.2"), Err(EvalError::LexError { .. })));
}

#[test]
fn lexical_failure_is_not_end_of_input() {
    let mut lexer = Lexer::new("1 @");
    lexer.advance().unwrap();
    assert!(lexer.advance().is_err());
    assert!(lexer.failed());
    assert!(!lexer.at_end());
    assert_eq!(lexer.current(), None);
    assert_eq!(lexer.text(), "@");
    assert_eq!(lexer.offset(), 2);

    lexer.advance().unwrap();
    assert!(!lexer.failed());
    assert!(lexer.at_end());
}

#[test]
fn nesting_depth_is_bounded() {
    let mut lexer = Lexer::new("");
    for _ in 0..MAX_DEPTH {
        lexer.descend().unwrap();
    }
    assert_eq!(lexer.depth(), MAX_DEPTH);
    assert!(matches!(lexer.descend(), Err(EvalError::NestingTooDeep { .. })));

    lexer.ascend();
    assert!(lexer.descend().is_ok());
}

#[test]
fn tokens_display_as_source_text() {
    assert_eq!(Token::Slash.to_string(), "/");
    assert_eq!(Token::Identifier("quit".to_string()).to_string(), "quit");
    assert_eq!(Token::Number(2.5).to_string(), "2.5");
}
