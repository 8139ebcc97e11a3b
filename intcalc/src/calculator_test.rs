use crate::calculator::{evaluate, Calculator};
use crate::error::{EvalError, LexError, ParseError, RuntimeError};
use crate::parser::MAX_DEPTH;

#[test]
fn test_eval1() {
    let calc = Calculator::new();
    assert_eq!(calc.calculate("1+2*3"), Ok(7));
    assert_eq!(calc.calculate("(1+2)*3"), Ok(9));
    assert_eq!(calc.calculate("5%3"), Ok(2));
    assert_eq!(calc.calculate("2^10"), Ok(1024));
    assert_eq!(calc.calculate("2^0"), Ok(1));
    assert_eq!(calc.calculate("  sqrt(16) + 2^3 * (7 % 4) "), Ok(28));
}

#[test]
fn test_right_associative() {
    assert_eq!(evaluate("1+2+3"), Ok(6));
    assert_eq!(evaluate("9-5-2"), Ok(6));
    assert_eq!(evaluate("100/10/5"), Ok(50));
    assert_eq!(evaluate("2*3*4"), Ok(24));
    assert_eq!(evaluate("10-2+3"), Ok(5));
    assert_eq!(evaluate("(9-5)-2"), Ok(2));
}

#[test]
fn test_sqrt_truncates() {
    assert_eq!(evaluate("sqrt(16)"), Ok(4));
    assert_eq!(evaluate("sqrt(15)"), Ok(3));
    assert_eq!(evaluate("sqrt(0)"), Ok(0));
    assert_eq!(evaluate("sqrt(2^62)"), Ok(1 << 31));
}

#[test]
fn test_truncating_division() {
    assert_eq!(evaluate("7/2"), Ok(3));
    assert_eq!(evaluate("(0-7)/2"), Ok(-3));
    assert_eq!(evaluate("(0-7)%2"), Ok(-1));
    assert_eq!(evaluate("7%(0-2)"), Ok(1));
}

#[test]
fn test_runtime_errors() {
    assert_eq!(evaluate("5/0"), Err(EvalError::Runtime(RuntimeError::DivisionByZero)));
    assert_eq!(evaluate("5%(3-3)"), Err(EvalError::Runtime(RuntimeError::DivisionByZero)));
    assert_eq!(evaluate("sqrt(1-5)"),
               Err(EvalError::Runtime(RuntimeError::NegativeSqrtOperand(-4))));
    assert_eq!(evaluate("2^(0-1)"),
               Err(EvalError::Runtime(RuntimeError::NegativeExponent(-1))));
    assert_eq!(evaluate("9223372036854775807+1"),
               Err(EvalError::Runtime(RuntimeError::Overflow("+"))));
    assert_eq!(evaluate("3037000500*3037000500"),
               Err(EvalError::Runtime(RuntimeError::Overflow("*"))));
    assert_eq!(evaluate("(0-9223372036854775807)-2"),
               Err(EvalError::Runtime(RuntimeError::Overflow("-"))));
    assert_eq!(evaluate("((0-9223372036854775807)-1)/(0-1)"),
               Err(EvalError::Runtime(RuntimeError::Overflow("/"))));
}

#[test]
fn test_min_remainder() {
    // the quotient overflows but the remainder is plain 0
    assert_eq!(evaluate("((0-9223372036854775807)-1)%(0-1)"), Ok(0));
    assert_eq!(evaluate("((0-9223372036854775807)-1)%2"), Ok(0));
    assert_eq!(evaluate("((0-9223372036854775807)-1)%7"), Ok(-1));
}

#[test]
fn test_deep_input_is_an_error() {
    let parens = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(evaluate(&parens),
               Err(EvalError::Parse(ParseError::NestingTooDeep(MAX_DEPTH))));
    let chain = format!("1{}", "+1".repeat(10_000));
    assert_eq!(evaluate(&chain),
               Err(EvalError::Parse(ParseError::NestingTooDeep(MAX_DEPTH))));
    // within the limit the chain evaluates normally
    let chain = format!("1{}", "+1".repeat(MAX_DEPTH));
    assert_eq!(evaluate(&chain), Ok(MAX_DEPTH as i64 + 1));
    assert_eq!(evaluate("1+1"), Ok(2));
}

#[test]
fn test_syntax_errors() {
    assert_eq!(evaluate("1+"),
               Err(EvalError::Parse(ParseError::ExpectedExpressionAfter(format!("+")))));
    assert_eq!(evaluate("1 2"),
               Err(EvalError::Parse(ParseError::TrailingTokens(vec![format!("2")]))));
    assert_eq!(evaluate("abc"),
               Err(EvalError::Lex(LexError::UnrecognizedToken(format!("abc")))));
    assert_eq!(evaluate(""),
               Err(EvalError::Parse(ParseError::EmptyOrUnparseable(String::new()))));
    assert!(matches!(evaluate("2^3^2"), Err(EvalError::Parse(ParseError::TrailingTokens(_)))));
}

#[test]
fn test_messages() {
    let message = |text: &str| evaluate(text).unwrap_err().to_string();
    assert_eq!(message("1 + y"), "Undefined token found <y>");
    assert_eq!(message("1+"), "Expected expression after \"+\"");
    assert_eq!(message("sqrt 4"), "Expected open bracket after square root");
    assert_eq!(message("sqrt()"), "Expected expression inside of square root");
    assert_eq!(message("sqrt(4"), "Expected close bracket after expression");
    assert_eq!(message("()"), "Expected expression inside of group");
    assert_eq!(message("(4"), "Expected close bracket of group");
    assert_eq!(message("2^3^2"), "Wrong expression \"^ 2\"");
    assert_eq!(message(")"), "Wrong expression \")\"");
    // the line is echoed as typed
    assert_eq!(message("+1"), "Wrong expression \"+1\"");
    assert_eq!(message("  *  2"), "Wrong expression \"  *  2\"");
    assert_eq!(message("(((1))))"), "Wrong expression \")\"");
    assert_eq!(message("99999999999999999999"), "Number out of range <99999999999999999999>");
    assert_eq!(message("5/0"), "Division by zero");
    assert_eq!(message("sqrt(0-9)"), "Square root of negative number -9");
    assert_eq!(message("3^(1-2)"), "Negative exponent -1");
    assert_eq!(message("2^64"), "Integer overflow in ^");
}

#[test]
fn test_repeatable() {
    let calc = Calculator::new();
    for _ in 0..3 {
        assert_eq!(calc.calculate("(3+4)*3"), Ok(21));
    }
}

#[test]
fn test_failure_leaves_no_state() {
    let mut calc = Calculator::new();
    assert!(calc.calculate("(1+").is_err());
    assert_eq!(calc.calculate("1+1"), Ok(2));
    assert!(calc.calculate("1 2 3").is_err());
    assert_eq!(calc.calculate("4"), Ok(4));
    assert!(calc.calculate("$").is_err());
    calc.reset();
    calc.reset();
    assert_eq!(calc.calculate("2*2"), Ok(4));
}
