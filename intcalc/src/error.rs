use crate::Integer;

/// Errors found while splitting the input into tokens.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LexError {
    #[error("Undefined token found <{0}>")]
    UnrecognizedToken(String),
}

/// Errors found while building the tree.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    /// An operator was matched but its right operand is missing.
    #[error("Expected expression after \"{0}\"")]
    ExpectedExpressionAfter(String),
    #[error("Expected open bracket after square root")]
    ExpectedOpenAfterSqrt,
    #[error("Expected expression inside of square root")]
    ExpectedExpressionInSqrt,
    #[error("Expected close bracket after expression")]
    ExpectedCloseAfterSqrt,
    #[error("Expected expression inside of group")]
    ExpectedExpressionInGroup,
    #[error("Expected close bracket of group")]
    ExpectedCloseParen,
    /// A whole expression was parsed but these lexemes were left over.
    #[error("Wrong expression \"{}\"", .0.join(" "))]
    TrailingTokens(Vec<String>),
    #[error("Wrong expression \"{0}\"")]
    EmptyOrUnparseable(String),
    #[error("Number out of range <{0}>")]
    NumberOutOfRange(String),
    #[error("Expression nested deeper than {0} levels")]
    NestingTooDeep(usize),
    #[error("Unexpected operator <{0}>")]
    UnexpectedOperator(String),
}

/// Errors raised while walking the tree.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RuntimeError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Square root of negative number {0}")]
    NegativeSqrtOperand(Integer),
    #[error("Negative exponent {0}")]
    NegativeExponent(Integer),
    #[error("Integer overflow in {0}")]
    Overflow(&'static str),
}

/// What a failed `calculate` call reports. Each stage's message is shown
/// as is.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
