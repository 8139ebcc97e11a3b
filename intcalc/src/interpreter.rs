use crate::Integer;
use crate::ast::Ast;
use crate::error::RuntimeError;


/// Walk the tree bottom up and compute its value.
pub fn eval(ast: &Ast) -> Result<Integer, RuntimeError> {
    match ast {
        Ast::Number(n) => Ok(*n),
        Ast::Add(l, r) => eval(l)?.checked_add(eval(r)?).ok_or(RuntimeError::Overflow("+")),
        Ast::Sub(l, r) => eval(l)?.checked_sub(eval(r)?).ok_or(RuntimeError::Overflow("-")),
        Ast::Mul(l, r) => eval(l)?.checked_mul(eval(r)?).ok_or(RuntimeError::Overflow("*")),
        Ast::Div(l, r) => {
            let (l, r) = (eval(l)?, eval(r)?);
            if r == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            l.checked_div(r).ok_or(RuntimeError::Overflow("/"))
        }
        Ast::Mod(l, r) => {
            let (l, r) = (eval(l)?, eval(r)?);
            if r == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            // MIN % -1 is 0, only the quotient overflows
            Ok(l.wrapping_rem(r))
        }
        Ast::Pow(l, r) => pow(eval(l)?, eval(r)?),
        Ast::Sqrt(x) => sqrt(eval(x)?),
    }
}

// base^exp by repeated multiplication, anything^0 is 1
fn pow(base: Integer, exp: Integer) -> Result<Integer, RuntimeError> {
    if exp < 0 {
        return Err(RuntimeError::NegativeExponent(exp));
    }
    // these never overflow, no matter how large exp is
    match base {
        0 if exp > 0 => return Ok(0),
        1 => return Ok(1),
        -1 => return Ok(if exp % 2 == 0 { 1 } else { -1 }),
        _ => (),
    }
    let mut result: Integer = 1;
    for _ in 0..exp {
        result = result.checked_mul(base).ok_or(RuntimeError::Overflow("^"))?;
    }
    Ok(result)
}

// real square root truncated toward zero
fn sqrt(x: Integer) -> Result<Integer, RuntimeError> {
    x.checked_isqrt().ok_or(RuntimeError::NegativeSqrtOperand(x))
}
