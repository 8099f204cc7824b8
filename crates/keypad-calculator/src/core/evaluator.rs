//! AST evaluator

use tracing::trace;

use crate::core::parser::{AstNode, Parser};
use crate::core::{Arithmetic, CalcResult};

/// Evaluator for AST expressions
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Arithmetic::check_finite(*n),
            AstNode::Negate(inner) => Arithmetic::negate(self.evaluate(inner)?),
            AstNode::Chain { first, rest } => {
                rest.iter().try_fold(self.evaluate(first)?, |acc, (op, right)| {
                    Arithmetic::apply(acc, self.evaluate(right)?, *op)
                })
            }
        }
    }

    /// Parses and evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        trace!(?ast, "parsed expression");
        self.evaluate(&ast)
    }
}
