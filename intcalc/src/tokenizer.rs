use lexers::Scanner;
use crate::error::LexError;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Number,
    OpenParen, CloseParen,
    SumOp,   // + -
    TermOp,  // * / %
    PowerOp, // ^
    Sqrt,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S) -> Self {
        Token{kind, lexeme: lexeme.into()}
    }
}

pub struct Tokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    failed: bool,
}

impl<'a> Tokenizer<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Tokenizer::new(source.chars())
    }
}

impl<I: Iterator<Item=char>> Tokenizer<I> {
    pub fn new(source: I) -> Self {
        Tokenizer{src: Scanner::new(source), failed: false}
    }

    // rules are tried in this order, first match wins
    fn scan_rule(&mut self) -> Option<Token> {
        let src = &mut self.src;
        src.scan_digits().map(|n| Token::new(TokenKind::Number, n))
            .or_else(|| src.scan_any_of(&['+', '-']).map(|o| Token::new(TokenKind::SumOp, o)))
            .or_else(|| src.scan_any_of(&['*', '/', '%']).map(|o| Token::new(TokenKind::TermOp, o)))
            .or_else(|| src.scan_any_of(&['^']).map(|o| Token::new(TokenKind::PowerOp, o)))
            .or_else(|| src.scan_any_of(&['(']).map(|o| Token::new(TokenKind::OpenParen, o)))
            .or_else(|| src.scan_any_of(&[')']).map(|o| Token::new(TokenKind::CloseParen, o)))
            .or_else(|| src.scan_keyword("sqrt").map(|k| Token::new(TokenKind::Sqrt, k)))
    }

    fn get_token(&mut self) -> Option<Result<Token, LexError>> {
        self.src.skip_whitespace();
        if let Some(token) = self.scan_rule() {
            return Some(Ok(token));
        }
        let bad = self.src.scan_non_whitespace()?;
        Some(Err(LexError::UnrecognizedToken(bad)))
    }
}

impl<I: Iterator<Item=char>> Iterator for Tokenizer<I> {
    type Item = Result<Token, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        // nothing sensible follows an unrecognized run
        if self.failed {
            return None;
        }
        let token = self.get_token();
        self.failed = matches!(token, Some(Err(_)));
        token
    }
}

/// Split `text` into tokens, failing on the first unrecognized run.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Tokenizer::from_str(text).collect::<Result<Vec<_>, _>>()?;
    log::debug!("tokenized {:?} into {} tokens", text, tokens.len());
    Ok(tokens)
}

///////////////////////////////////////////////////////////////////////////////
