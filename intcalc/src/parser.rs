use lexers::Scanner;

use crate::ast::Ast;
use crate::error::ParseError;
use crate::tokenizer::{Token, TokenKind};


/* Grammar, loosest binding first:
 *
 *  sum    := term ( SUM_OP sum )? ;
 *  term   := power ( TERM_OP term )? ;
 *  power  := group ( POWER_OP group )? ;
 *  group  := "sqrt" "(" sum ")"
 *          | "(" sum ")"
 *          | NUMBER ;
 *
 * sum and term recurse into themselves on the right so `+ - * / %` group
 * to the right: 9-5-2 is 9-(5-2). power doesn't recurse, a single `^` per
 * level, 2^3^2 leaves "^ 2" unparsed.
 */

/// Outcome of a production: `Ok(None)` when it doesn't apply at the current
/// position (nothing consumed), `Err` when it applied but is malformed.
type Production = Result<Option<Ast>, ParseError>;

/// Deepest nesting of parentheses, sqrt calls and right operands accepted.
/// Parsing, evaluating and dropping the tree all recurse once per level.
pub const MAX_DEPTH: usize = 128;

pub struct Parser {
    tokens: Scanner<std::vec::IntoIter<Token>>,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser{tokens: Scanner::new(tokens.into_iter()), depth: 0}
    }

    /// Parse a single expression spanning every token.
    pub fn parse(mut self) -> Result<Ast, ParseError> {
        let Some(ast) = self.sum()? else {
            let text = self.remaining().join(" ");
            return Err(ParseError::EmptyOrUnparseable(text));
        };
        let trailing = self.remaining();
        if !trailing.is_empty() {
            return Err(ParseError::TrailingTokens(trailing));
        }
        Ok(ast)
    }

    fn remaining(&mut self) -> Vec<String> {
        self.tokens.by_ref().map(|t| t.lexeme).collect()
    }

    fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        self.tokens.accept_if(|t| t.kind == kind)
    }

    fn expect(&mut self, kind: TokenKind, err: ParseError) -> Result<Token, ParseError> {
        self.accept(kind).ok_or(err)
    }

    // run a production one nesting level deeper
    fn nested(&mut self, production: fn(&mut Self) -> Production) -> Production {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::NestingTooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    // operand ( OP rhs )?
    // Once OP is matched rhs is mandatory, a miss there is fatal.
    fn binary(&mut self,
              operand: fn(&mut Self) -> Production,
              op_kind: TokenKind,
              rhs: fn(&mut Self) -> Production) -> Production {
        let backtrack = self.tokens.mark();
        let Some(lhs) = operand(self)? else {
            self.tokens.restore(backtrack);
            return Ok(None);
        };
        let Some(op) = self.accept(op_kind) else {
            log::trace!("no {:?} after {}, falling back to operand", op_kind, lhs);
            return Ok(Some(lhs));
        };
        let rhs = self.nested(rhs)?
            .ok_or_else(|| ParseError::ExpectedExpressionAfter(op.lexeme.clone()))?;
        Ast::binary(&op.lexeme, lhs, rhs)
            .map(Some)
            .ok_or(ParseError::UnexpectedOperator(op.lexeme))
    }

    fn sum(&mut self) -> Production {
        self.binary(Self::term, TokenKind::SumOp, Self::sum)
    }

    fn term(&mut self) -> Production {
        self.binary(Self::power, TokenKind::TermOp, Self::term)
    }

    fn power(&mut self) -> Production {
        self.binary(Self::group, TokenKind::PowerOp, Self::group)
    }

    fn group(&mut self) -> Production {
        if self.accept(TokenKind::Sqrt).is_some() {
            self.expect(TokenKind::OpenParen, ParseError::ExpectedOpenAfterSqrt)?;
            let operand = self.nested(Self::sum)?.ok_or(ParseError::ExpectedExpressionInSqrt)?;
            self.expect(TokenKind::CloseParen, ParseError::ExpectedCloseAfterSqrt)?;
            return Ok(Some(Ast::sqrt(operand)));
        }
        if self.accept(TokenKind::OpenParen).is_some() {
            let inner = self.nested(Self::sum)?.ok_or(ParseError::ExpectedExpressionInGroup)?;
            self.expect(TokenKind::CloseParen, ParseError::ExpectedCloseParen)?;
            return Ok(Some(inner));
        }
        match self.accept(TokenKind::Number) {
            Some(n) => match n.lexeme.parse() {
                Ok(value) => Ok(Some(Ast::Number(value))),
                Err(_) => Err(ParseError::NumberOutOfRange(n.lexeme)),
            },
            None => Ok(None),
        }
    }
}
