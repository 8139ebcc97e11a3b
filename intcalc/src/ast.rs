use std::fmt;
use crate::Integer;

/// Parsed expression. Every node owns its children.
#[derive(Clone, PartialEq, Debug)]
pub enum Ast {
    Number(Integer),
    Add(Box<Ast>, Box<Ast>),
    Sub(Box<Ast>, Box<Ast>),
    Mul(Box<Ast>, Box<Ast>),
    Div(Box<Ast>, Box<Ast>),
    Mod(Box<Ast>, Box<Ast>),
    Pow(Box<Ast>, Box<Ast>),
    Sqrt(Box<Ast>),
}

impl Ast {
    /// Build the node for a binary operator lexeme, `None` if there's no
    /// such operator.
    pub fn binary(op: &str, lhs: Ast, rhs: Ast) -> Option<Ast> {
        let (l, r) = (Box::new(lhs), Box::new(rhs));
        Some(match op {
            "+" => Ast::Add(l, r),
            "-" => Ast::Sub(l, r),
            "*" => Ast::Mul(l, r),
            "/" => Ast::Div(l, r),
            "%" => Ast::Mod(l, r),
            "^" => Ast::Pow(l, r),
            _ => return None,
        })
    }

    pub fn sqrt(operand: Ast) -> Ast {
        Ast::Sqrt(Box::new(operand))
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (op, l, r) = match self {
            Ast::Number(n) => return write!(f, "{}", n),
            Ast::Sqrt(x) => return write!(f, "sqrt({})", x),
            Ast::Add(l, r) => ("+", l, r),
            Ast::Sub(l, r) => ("-", l, r),
            Ast::Mul(l, r) => ("*", l, r),
            Ast::Div(l, r) => ("/", l, r),
            Ast::Mod(l, r) => ("%", l, r),
            Ast::Pow(l, r) => ("^", l, r),
        };
        write!(f, "({} {} {})", l, op, r)
    }
}

#[cfg(test)]
mod tests {
    use super::Ast;

    #[test]
    fn display_fully_parenthesised() {
        let ast = Ast::binary("-",
            Ast::Number(9),
            Ast::binary("^", Ast::sqrt(Ast::Number(16)), Ast::Number(2)).unwrap(),
        ).unwrap();
        assert_eq!(ast.to_string(), "(9 - (sqrt(16) ^ 2))");
    }

    #[test]
    fn unknown_binary_operator() {
        assert_eq!(Ast::binary("&", Ast::Number(1), Ast::Number(2)), None);
    }
}
