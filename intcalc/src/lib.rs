//! Integer calculator.
//!
//! A line such as `sqrt(16) + 2^3 * (7 % 4)` goes through three stages:
//! the tokenizer splits it into tokens, a backtracking recursive descent
//! parser builds an `Ast`, and the interpreter walks the tree down to an
//! `Integer`. `Calculator::calculate` (or `evaluate`) runs all of them.

extern crate lexers;

/// Operand and result type of every evaluation.
pub type Integer = i64;

pub use ast::Ast;
pub use calculator::{evaluate, Calculator};
pub use error::{EvalError, LexError, ParseError, RuntimeError};
pub use parser::Parser;
pub use tokenizer::{tokenize, Token, TokenKind, Tokenizer};

pub mod ast;
pub mod error;
pub mod interpreter;
pub mod tokenizer;

pub mod parser;

mod calculator;
#[cfg(test)]
mod calculator_test;
