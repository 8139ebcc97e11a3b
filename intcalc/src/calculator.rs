use crate::Integer;
use crate::ast::Ast;
use crate::error::{EvalError, ParseError};
use crate::interpreter;
use crate::parser::Parser;
use crate::tokenizer::tokenize;


/// Evaluates one line at a time.
///
/// Each call tokenizes into its own buffer and parses with a parser that is
/// consumed by the call, so nothing survives from one evaluation to the
/// next whether it succeeded or failed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Calculator
    }

    /// Tokenize and parse `text`, requiring every token to be consumed.
    pub fn parse(&self, text: &str) -> Result<Ast, EvalError> {
        let tokens = tokenize(text)?;
        let ast = Parser::new(tokens).parse().map_err(|e| match e {
            // echo the line as typed rather than re-joined lexemes
            ParseError::EmptyOrUnparseable(_) => ParseError::EmptyOrUnparseable(text.to_string()),
            e => e,
        })?;
        log::debug!("parsed {:?} as {}", text, ast);
        Ok(ast)
    }

    pub fn calculate(&self, text: &str) -> Result<Integer, EvalError> {
        let ast = self.parse(text)?;
        let value = interpreter::eval(&ast)?;
        log::debug!("{} = {}", ast, value);
        Ok(value)
    }

    /// There's never any leftover tokenizer or parser state, so this is a
    /// no-op. Safe to call at any time, any number of times.
    pub fn reset(&mut self) {}
}

/// Evaluate a single line with a throwaway `Calculator`.
pub fn evaluate(text: &str) -> Result<Integer, EvalError> {
    Calculator::new().calculate(text)
}
