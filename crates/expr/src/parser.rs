//! Recursive-descent parser producing a [`Node`] tree.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('^' unary)?
//! primary := number | name | name '(' expr ')' | '(' expr ')'
//! ```
//!
//! `^` is right-associative and binds tighter than a leading minus, so
//! `-2^2` is `-4` and `2^-1` is `0.5`.

use crate::{
    BinaryOp, Function, Variable,
    error::{ParseError, ParseErrorKind},
    lexer::{Token, TokenKind, tokenize},
    node::Node,
};

/// Maximum nesting of parentheses, calls, operators and operator chains.
const MAX_DEPTH: usize = 256;

/// Names bound to the two free variables.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Names<'a> {
    pub time: &'a str,
    pub state: &'a str,
}

/// Parses `src` into an expression tree.
pub(crate) fn parse(src: &str, names: Names<'_>) -> Result<Node, ParseError> {
    let tokens = tokenize(src)?;
    if tokens.is_empty() {
        return Err(ParseError::new(ParseErrorKind::Empty, 0));
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        end: src.len(),
        names,
        depth: 0,
    };

    let node = parser.expr()?;
    match parser.peek() {
        None => Ok(node),
        Some(token) => Err(parser.unexpected(token)),
    }
}

struct Parser<'a, 'n> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    end: usize,
    names: Names<'n>,
    depth: usize,
}

impl<'a> Parser<'a, '_> {
    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Result<Token<'a>, ParseError> {
        let token = self
            .peek()
            .ok_or_else(|| ParseError::new(ParseErrorKind::UnexpectedEnd, self.end))?;
        self.pos += 1;
        Ok(token)
    }

    fn eat(&mut self, kind: TokenKind<'_>) -> bool {
        if self.peek().is_some_and(|t| t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind<'_>) -> Result<(), ParseError> {
        let token = self.next()?;
        if token.kind == kind {
            Ok(())
        } else {
            Err(self.unexpected(token))
        }
    }

    fn unexpected(&self, token: Token<'_>) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedToken(token.kind.to_string()),
            token.offset,
        )
    }

    fn descend(&mut self, offset: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::new(ParseErrorKind::TooDeep, offset));
        }
        Ok(())
    }

    fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }

    fn expr(&mut self) -> Result<Node, ParseError> {
        self.chain(Self::term, |kind| match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        self.chain(Self::unary, |kind| match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        })
    }

    /// Parses a left-associative chain `operand (op operand)*`.
    ///
    /// Every operator deepens the tree by one level, so a chain counts
    /// against [`MAX_DEPTH`] like nested parentheses do.
    fn chain(
        &mut self,
        operand: fn(&mut Self) -> Result<Node, ParseError>,
        operator: fn(TokenKind<'_>) -> Option<BinaryOp>,
    ) -> Result<Node, ParseError> {
        let mut node = operand(self)?;
        let mut levels = 0;

        while let Some(token) = self.peek() {
            let Some(op) = operator(token.kind) else {
                break;
            };
            self.pos += 1;
            self.descend(token.offset)?;
            levels += 1;
            node = Node::binary(op, node, operand(self)?);
        }

        self.ascend(levels);
        Ok(node)
    }

    fn unary(&mut self) -> Result<Node, ParseError> {
        let Some(token) = self.peek() else {
            return Err(ParseError::new(ParseErrorKind::UnexpectedEnd, self.end));
        };

        match token.kind {
            TokenKind::Minus | TokenKind::Plus => {
                self.pos += 1;
                self.descend(token.offset)?;
                let operand = self.unary()?;
                self.ascend(1);
                if token.kind == TokenKind::Minus {
                    Ok(Node::Negate(Box::new(operand)))
                } else {
                    Ok(operand)
                }
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.primary()?;
        if let Some(token) = self.peek().filter(|t| t.kind == TokenKind::Caret) {
            self.pos += 1;
            self.descend(token.offset)?;
            let exponent = self.unary()?;
            self.ascend(1);
            return Ok(Node::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Number(value) => Ok(Node::Constant(value)),
            TokenKind::LParen => {
                self.descend(token.offset)?;
                let inner = self.expr()?;
                self.expect(TokenKind::RParen)?;
                self.ascend(1);
                Ok(inner)
            }
            TokenKind::Ident(name) => self.name(name, token.offset),
            _ => Err(self.unexpected(token)),
        }
    }

    /// Resolves an identifier to a variable, constant, or function call.
    ///
    /// Variable names shadow the constants `pi` and `e`.
    fn name(&mut self, name: &str, offset: usize) -> Result<Node, ParseError> {
        if self.peek().is_some_and(|t| t.kind == TokenKind::LParen) {
            let Some(function) = Function::from_name(name) else {
                return Err(ParseError::new(
                    ParseErrorKind::UnknownFunction(name.to_owned()),
                    offset,
                ));
            };
            self.pos += 1;
            self.descend(offset)?;
            let arg = self.expr()?;
            self.expect(TokenKind::RParen)?;
            self.ascend(1);
            return Ok(Node::call(function, arg));
        }

        if name == self.names.time {
            return Ok(Node::Variable(Variable::Time));
        }
        if name == self.names.state {
            return Ok(Node::Variable(Variable::State));
        }

        match name {
            "pi" => Ok(Node::Constant(std::f64::consts::PI)),
            "e" => Ok(Node::Constant(std::f64::consts::E)),
            _ if Function::from_name(name).is_some() => Err(ParseError::new(
                ParseErrorKind::MissingCall(name.to_owned()),
                offset,
            )),
            _ => Err(ParseError::new(
                ParseErrorKind::UnknownIdentifier(name.to_owned()),
                offset,
            )),
        }
    }
}
