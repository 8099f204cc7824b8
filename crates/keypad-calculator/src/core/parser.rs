//! Tokenizer and precedence-climbing parser for keypad expressions
//!
//! The grammar is exactly what the keypad can produce (plus a leading sign,
//! which appears when a negative result is extended):
//!
//! ```text
//! expression ::= unary (OPERATOR unary)*     // climbed by precedence
//! unary      ::= '-'* NUMBER
//! NUMBER     ::= DIGIT* ('.' DIGIT*)?        // at least one digit
//! OPERATOR   ::= '/' | '*' | '+' | '-'
//! ```
//!
//! Runs of operators with the same precedence are kept flat in one
//! [`AstNode::Chain`], so tree depth does not grow with expression length.

use crate::core::{CalcError, CalcResult, Operation};

/// Token types from lexical analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Binary operator (or a leading sign)
    Operator(Operation),
}

/// Abstract Syntax Tree node
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// Numeric literal
    Number(f64),
    /// Left-associative run of operators sharing one precedence level:
    /// `first op1 a op2 b ...`
    Chain {
        /// Leftmost operand
        first: Box<AstNode>,
        /// Operators with their right operands, applied left to right
        rest: Vec<(Operation, AstNode)>,
    },
    /// Unary negation
    Negate(Box<AstNode>),
}

impl AstNode {
    /// Creates a new number node
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a single binary operation
    #[must_use]
    pub fn binary(left: AstNode, op: Operation, right: AstNode) -> Self {
        Self::chain(left, vec![(op, right)])
    }

    /// Creates a chain of same-precedence operations
    #[must_use]
    pub fn chain(first: AstNode, rest: Vec<(Operation, AstNode)>) -> Self {
        Self::Chain {
            first: Box::new(first),
            rest,
        }
    }

    /// Appends `op right` to the tree. Extends the chain in place when
    /// `self` is a chain at the same precedence level.
    fn extend(self, op: Operation, right: AstNode) -> Self {
        match self {
            Self::Chain { first, mut rest }
                if rest
                    .first()
                    .is_some_and(|(prev, _)| prev.precedence() == op.precedence()) =>
            {
                rest.push((op, right));
                Self::Chain { first, rest }
            }
            other => Self::binary(other, op, right),
        }
    }

    /// Creates a new negation node
    #[must_use]
    pub fn negate(inner: AstNode) -> Self {
        Self::Negate(Box::new(inner))
    }
}

/// Tokenizer for converting expression strings to tokens
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer for the given input
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Tokenizes the entire input
    pub fn tokenize(&mut self) -> CalcResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input
    pub fn next_token(&mut self) -> CalcResult<Option<Token>> {
        self.skip_whitespace();

        let Some(ch) = self.current_char() else {
            return Ok(None);
        };

        if ch.is_ascii_digit() || ch == '.' {
            return self.read_number().map(Some);
        }

        match Operation::from_symbol(ch) {
            Some(op) => {
                self.advance();
                Ok(Some(Token::Operator(op)))
            }
            None => Err(CalcError::ParseError(format!(
                "Unexpected character: '{ch}'"
            ))),
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.pos += ch.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Reads one numeric run. A second decimal point ends the run, so
    /// `1.2.3` becomes two adjacent numbers and fails in the parser.
    fn read_number(&mut self) -> CalcResult<Token> {
        let start = self.pos;
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let num_str = &self.input[start..self.pos];
        let value: f64 = num_str
            .parse()
            .map_err(|_| CalcError::ParseError(format!("Invalid number: '{num_str}'")))?;

        // A long enough digit run parses to infinity
        if !value.is_finite() {
            return Err(CalcError::Overflow);
        }

        Ok(Token::Number(value))
    }
}

/// Precedence-climbing parser over a token list
#[derive(Debug)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser from tokens
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a string expression into an AST. The input is not trimmed.
    pub fn parse_str(input: &str) -> CalcResult<AstNode> {
        let tokens = Tokenizer::new(input).tokenize()?;
        Self::new(tokens).parse()
    }

    /// Parses all tokens into an AST
    pub fn parse(&mut self) -> CalcResult<AstNode> {
        if self.tokens.is_empty() {
            return Err(CalcError::EmptyExpression);
        }

        let ast = self.parse_expression(1)?;

        if let Some(token) = self.current() {
            return Err(CalcError::ParseError(format!(
                "Unexpected {token:?} at position {}",
                self.pos
            )));
        }

        Ok(ast)
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Climbs operators whose precedence is at least `min_precedence`.
    /// Every operator is left-associative, so the right operand binds one
    /// level tighter. Recursion depth is bounded by the number of
    /// precedence levels, not by the input.
    fn parse_expression(&mut self, min_precedence: u8) -> CalcResult<AstNode> {
        let mut left = self.parse_unary()?;

        while let Some(&Token::Operator(op)) = self.current() {
            if op.precedence() < min_precedence {
                break;
            }
            self.advance();
            let right = self.parse_expression(op.precedence() + 1)?;
            left = left.extend(op, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> CalcResult<AstNode> {
        let mut negations = 0usize;
        while matches!(self.current(), Some(Token::Operator(Operation::Subtract))) {
            self.advance();
            negations += 1;
        }

        let operand = match self.advance() {
            Some(Token::Number(n)) => AstNode::number(*n),
            Some(Token::Operator(op)) => {
                return Err(CalcError::ParseError(format!(
                    "Unexpected operator '{}'",
                    op.symbol()
                )))
            }
            None => {
                return Err(CalcError::ParseError(
                    "Unexpected end of expression".into(),
                ))
            }
        };

        Ok(if negations % 2 == 1 {
            AstNode::negate(operand)
        } else {
            operand
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> AstNode {
        AstNode::number(n)
    }

    // ===== Token tests =====

    // ===== Tokenizer tests =====

    #[test]
    fn test_tokenize_single_number() {
        let tokens = Tokenizer::new("42").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(42.0)]);
    }

    #[test]
    fn test_tokenize_decimal_forms() {
        assert_eq!(Tokenizer::new("3.25").tokenize().unwrap(), vec![Token::Number(3.25)]);
        assert_eq!(Tokenizer::new(".5").tokenize().unwrap(), vec![Token::Number(0.5)]);
        assert_eq!(Tokenizer::new("7.").tokenize().unwrap(), vec![Token::Number(7.0)]);
    }

    #[test]
    fn test_tokenize_leading_zeros() {
        assert_eq!(Tokenizer::new("007").tokenize().unwrap(), vec![Token::Number(7.0)]);
    }

    #[test]
    fn test_tokenize_operators() {
        let tokens = Tokenizer::new("/*+-").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Operator(Operation::Divide),
                Token::Operator(Operation::Multiply),
                Token::Operator(Operation::Add),
                Token::Operator(Operation::Subtract),
            ]
        );
    }

    #[test]
    fn test_tokenize_expression() {
        let tokens = Tokenizer::new("2+3*4").tokenize().unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(2.0),
                Token::Operator(Operation::Add),
                Token::Number(3.0),
                Token::Operator(Operation::Multiply),
                Token::Number(4.0),
            ]
        );
    }

    #[test]
    fn test_tokenize_second_decimal_point_splits_number() {
        let tokens = Tokenizer::new("1.2.3").tokenize().unwrap();
        assert_eq!(tokens, vec![Token::Number(1.2), Token::Number(0.3)]);
    }

    #[test]
    fn test_tokenize_lone_decimal_point() {
        let result = Tokenizer::new(".").tokenize();
        assert!(matches!(result, Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_tokenize_error_marker_text() {
        let result = Tokenizer::new("Erro5").tokenize();
        assert!(matches!(result, Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_tokenize_rejects_unsupported_operators() {
        for input in ["2%3", "2^3", "(2)"] {
            let result = Tokenizer::new(input).tokenize();
            assert!(matches!(result, Err(CalcError::ParseError(_))), "{input}");
        }
    }

    #[test]
    fn test_tokenize_empty_and_whitespace() {
        assert!(Tokenizer::new("").tokenize().unwrap().is_empty());
        assert!(Tokenizer::new("   ").tokenize().unwrap().is_empty());
    }

    #[test]
    fn test_tokenize_overflowing_literal() {
        let result = Tokenizer::new(&"9".repeat(400)).tokenize();
        assert_eq!(result, Err(CalcError::Overflow));
    }

    #[test]
    fn test_next_token_steps_through_input() {
        let mut t = Tokenizer::new("12+3");
        assert_eq!(t.next_token().unwrap(), Some(Token::Number(12.0)));
        assert_eq!(t.next_token().unwrap(), Some(Token::Operator(Operation::Add)));
        assert_eq!(t.next_token().unwrap(), Some(Token::Number(3.0)));
        assert_eq!(t.next_token().unwrap(), None);
    }

    // ===== Parser tests =====

    #[test]
    fn test_parse_single_number() {
        assert_eq!(Parser::parse_str("42").unwrap(), num(42.0));
    }

    #[test]
    fn test_parse_simple_binary() {
        assert_eq!(
            Parser::parse_str("8/2").unwrap(),
            AstNode::binary(num(8.0), Operation::Divide, num(2.0))
        );
    }

    #[test]
    fn test_parse_precedence_mul_over_add() {
        assert_eq!(
            Parser::parse_str("2+3*4").unwrap(),
            AstNode::binary(
                num(2.0),
                Operation::Add,
                AstNode::binary(num(3.0), Operation::Multiply, num(4.0))
            )
        );
    }

    #[test]
    fn test_parse_precedence_div_before_sub() {
        assert_eq!(
            Parser::parse_str("9-6/3").unwrap(),
            AstNode::binary(
                num(9.0),
                Operation::Subtract,
                AstNode::binary(num(6.0), Operation::Divide, num(3.0))
            )
        );
    }

    #[test]
    fn test_parse_subtraction_left_associative() {
        // 10-4-3 = (10-4)-3
        assert_eq!(
            Parser::parse_str("10-4-3").unwrap(),
            AstNode::chain(
                num(10.0),
                vec![
                    (Operation::Subtract, num(4.0)),
                    (Operation::Subtract, num(3.0)),
                ]
            )
        );
    }

    #[test]
    fn test_parse_division_left_associative() {
        // 8/4/2 = (8/4)/2
        assert_eq!(
            Parser::parse_str("8/4/2").unwrap(),
            AstNode::chain(
                num(8.0),
                vec![(Operation::Divide, num(4.0)), (Operation::Divide, num(2.0))]
            )
        );
    }

    #[test]
    fn test_parse_mixed_chain() {
        // 1+2*3-4 = (1+(2*3))-4
        assert_eq!(
            Parser::parse_str("1+2*3-4").unwrap(),
            AstNode::chain(
                num(1.0),
                vec![
                    (
                        Operation::Add,
                        AstNode::binary(num(2.0), Operation::Multiply, num(3.0))
                    ),
                    (Operation::Subtract, num(4.0)),
                ]
            )
        );
    }

    #[test]
    fn test_parse_leading_product_then_sum() {
        // 2*3+4*5 = (2*3)+(4*5)
        assert_eq!(
            Parser::parse_str("2*3+4*5").unwrap(),
            AstNode::binary(
                AstNode::binary(num(2.0), Operation::Multiply, num(3.0)),
                Operation::Add,
                AstNode::binary(num(4.0), Operation::Multiply, num(5.0))
            )
        );
    }

    #[test]
    fn test_parse_long_chain_stays_flat() {
        let ast = Parser::parse_str(&format!("{}1", "1+".repeat(1000))).unwrap();
        match ast {
            AstNode::Chain { first, rest } => {
                assert_eq!(*first, num(1.0));
                assert_eq!(rest.len(), 1000);
                assert!(rest.iter().all(|(op, n)| *op == Operation::Add && *n == num(1.0)));
            }
            other => panic!("expected a chain, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_leading_negative_result() {
        // A negative result extended by the keypad: "-4+3"
        assert_eq!(
            Parser::parse_str("-4+3").unwrap(),
            AstNode::binary(AstNode::negate(num(4.0)), Operation::Add, num(3.0))
        );
    }

    #[test]
    fn test_parse_negation_binds_tighter_than_multiply() {
        assert_eq!(
            Parser::parse_str("-2*3").unwrap(),
            AstNode::binary(AstNode::negate(num(2.0)), Operation::Multiply, num(3.0))
        );
    }

    #[test]
    fn test_parse_repeated_negation() {
        assert_eq!(Parser::parse_str("--5").unwrap(), num(5.0));
        assert_eq!(Parser::parse_str("---5").unwrap(), AstNode::negate(num(5.0)));
    }

    #[test]
    fn test_parse_empty_expression() {
        assert!(matches!(Parser::parse_str(""), Err(CalcError::EmptyExpression)));
        assert!(matches!(Parser::parse_str("  "), Err(CalcError::EmptyExpression)));
    }

    #[test]
    fn test_parse_trailing_operator() {
        assert!(matches!(Parser::parse_str("3+"), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parse_leading_non_minus_operator() {
        assert!(matches!(Parser::parse_str("*3"), Err(CalcError::ParseError(_))));
        assert!(matches!(Parser::parse_str("+3"), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parse_consecutive_operators() {
        assert!(matches!(Parser::parse_str("2+*3"), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parse_adjacent_numbers() {
        assert!(matches!(Parser::parse_str("1.2.3"), Err(CalcError::ParseError(_))));
    }

    #[test]
    fn test_parser_parse_empty_tokens() {
        let mut parser = Parser::new(vec![]);
        assert!(matches!(parser.parse(), Err(CalcError::EmptyExpression)));
    }

    #[test]
    fn test_parser_parse_method() {
        let mut parser = Parser::new(vec![Token::Number(42.0)]);
        assert_eq!(parser.parse().unwrap(), num(42.0));
    }
}
