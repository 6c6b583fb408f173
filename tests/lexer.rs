use exprtree::{
    error::LexError,
    interpreter::lexer::{Lexer, Spanned, Token},
};

#[test]
fn tokens_carry_spans() {
    let tokens: Vec<Spanned> = Lexer::new("3.5 *(10)").map(Result::unwrap).collect();

    assert_eq!(tokens,
               vec![Spanned { token: Token::Number(3.5),
                              span:  0..3, },
                    Spanned { token: Token::Star,
                              span:  4..5, },
                    Spanned { token: Token::LParen,
                              span:  5..6, },
                    Spanned { token: Token::Number(10.0),
                              span:  6..8, },
                    Spanned { token: Token::RParen,
                              span:  8..9, },
                    Spanned { token: Token::Eof,
                              span:  9..9, }]);
}

#[test]
fn all_operator_tokens_are_recognized() {
    let tokens: Vec<Token> = Lexer::new("+ - * / ( )").map(|t| t.unwrap().token).collect();

    assert_eq!(tokens,
               vec![Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::LParen,
                    Token::RParen,
                    Token::Eof]);
}

#[test]
fn empty_input_yields_only_eof() {
    let mut lexer = Lexer::new("  \t\n ");

    assert_eq!(lexer.next(),
               Some(Ok(Spanned { token: Token::Eof,
                                 span:  5..5, })));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
}

#[test]
fn lexing_stops_after_an_error() {
    let mut lexer = Lexer::new("1 # 2");

    assert_eq!(lexer.next().unwrap().unwrap().token, Token::Number(1.0));
    assert_eq!(lexer.next(),
               Some(Err(LexError::UnrecognizedCharacter { character: '#',
                                                          position:  2, })));
    assert_eq!(lexer.next(), None);
}

#[test]
fn token_kind_names_match_grammar() {
    assert_eq!(Token::Number(1.0).kind_name(), "NUMBER");
    assert_eq!(Token::Slash.kind_name(), "SLASH");
    assert_eq!(Token::Eof.kind_name(), "EOF");
}
