//! Grammar methods, one per precedence level.
//!
//! Lowest to highest: equivalence, implication, exclusive-or, disjunction,
//! conjunction, negation, primary. Every binary connective is
//! left-associative except implication, which associates to the right per
//! the standard convention `A → (B → C)`.

use crate::{ParseError, Parser};
use taut_diagnostic::ErrorCode;
use taut_ir::{BinaryOp, Expr, TokenKind};

impl Parser<'_> {
    pub(crate) fn expr(&mut self) -> Result<Expr, ParseError> {
        self.equiv()
    }

    fn equiv(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.implies()?;
        while self.cursor.check(&TokenKind::Equiv) {
            self.cursor.advance();
            let right = self.implies()?;
            left = Expr::binary(left, BinaryOp::Equiv, right);
        }
        Ok(left)
    }

    /// Right-associative: recurses into itself for the consequent.
    fn implies(&mut self) -> Result<Expr, ParseError> {
        let left = self.xor()?;
        if self.cursor.check(&TokenKind::Implies) {
            self.cursor.advance();
            let right = self.implies()?;
            return Ok(Expr::binary(left, BinaryOp::Implies, right));
        }
        Ok(left)
    }

    fn xor(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.or()?;
        while self.cursor.check(&TokenKind::Xor) {
            self.cursor.advance();
            let right = self.or()?;
            left = Expr::binary(left, BinaryOp::Xor, right);
        }
        Ok(left)
    }

    fn or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.and()?;
        while self.cursor.check(&TokenKind::Or) {
            self.cursor.advance();
            let right = self.and()?;
            left = Expr::binary(left, BinaryOp::Or, right);
        }
        Ok(left)
    }

    fn and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.unary()?;
        while self.cursor.check(&TokenKind::And) {
            self.cursor.advance();
            let right = self.unary()?;
            left = Expr::binary(left, BinaryOp::And, right);
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.cursor.check(&TokenKind::Not) {
            self.cursor.advance();
            let operand = self.unary()?;
            return Ok(Expr::Not(Box::new(operand)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        // Parenthesized group.
        if self.cursor.check(&TokenKind::LParen) {
            let open_span = self.cursor.current_span();
            self.cursor.advance();
            let expr = self.expr()?;
            if !self.cursor.check(&TokenKind::RParen) {
                return Err(ParseError::new(
                    ErrorCode::E1003,
                    format!(
                        "expected `)` to close the group opened at {}, found {}",
                        open_span,
                        self.cursor.current_kind()
                    ),
                    self.cursor.current_span(),
                ));
            }
            self.cursor.advance();
            return Ok(expr);
        }

        // Explicit membership: `x ∈ A`, the `∈` may be elided.
        if self.cursor.check(&TokenKind::FreeVar) {
            self.cursor.advance();
            if self.cursor.check(&TokenKind::In) {
                self.cursor.advance();
            }
            let name = self.cursor.expect_set_name()?;
            return Ok(Expr::Membership(name));
        }

        // Bare set name: implicit `x ∈ NAME`.
        if matches!(self.cursor.current_kind(), TokenKind::SetName(_)) {
            let name = self.cursor.expect_set_name()?;
            return Ok(Expr::Membership(name));
        }

        Err(ParseError::new(
            ErrorCode::E1002,
            format!("expected a formula, found {}", self.cursor.current_kind()),
            self.cursor.current_span(),
        ))
    }
}
