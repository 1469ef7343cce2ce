//! Stack-based postfix evaluation.

use std::sync::LazyLock;

use dsk_list::Stack;
use regex::Regex;

use crate::error::PostfixError;

/// An operand is an optional `-` followed by either a single `0` or a
/// nonzero digit and more digits. Anchored on both sides, so `017`, `0x17`
/// and `1234L` are all rejected.
static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(0|[1-9][0-9]*)$").expect("integer pattern is valid"));

/// Evaluate a postfix expression over 32-bit integers.
///
/// Operands are pushed; each operator pops its right then left operand and
/// pushes the checked result. A well-formed expression leaves exactly one
/// value, which is returned.
///
/// # Example
///
/// ```
/// assert_eq!(dsk_postfix::evaluate("1 2 - 3 4 + *"), Ok(-7));
/// ```
pub fn evaluate(expr: &str) -> Result<i32, PostfixError> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Err(PostfixError::Empty);
    }

    let mut stack: Stack<i32> = Stack::new();

    for token in expr.split_whitespace() {
        match token {
            "+" | "-" | "*" | "/" => {
                let op = match token {
                    "+" => '+',
                    "-" => '-',
                    "*" => '*',
                    _ => '/',
                };

                // Right operand is on top.
                let right = stack
                    .pop()
                    .map_err(|_| PostfixError::MissingOperands { op })?;
                let left = stack
                    .pop()
                    .map_err(|_| PostfixError::MissingOperands { op })?;

                let value = match op {
                    '+' => left.checked_add(right),
                    '-' => left.checked_sub(right),
                    '*' => left.checked_mul(right),
                    _ => {
                        if right == 0 {
                            return Err(PostfixError::DivisionByZero);
                        }
                        left.checked_div(right)
                    }
                }
                .ok_or(PostfixError::Overflow { op })?;

                stack.push(value);
            }
            _ if INTEGER.is_match(token) => {
                // The pattern admits values beyond 32 bits; parsing rejects
                // those.
                let value: i32 = token
                    .parse()
                    .map_err(|_| PostfixError::BadToken(token.to_string()))?;
                stack.push(value);
            }
            _ => return Err(PostfixError::BadToken(token.to_string())),
        }
    }

    if stack.len() == 1 {
        stack.pop().map_err(|_| PostfixError::Empty)
    } else {
        Err(PostfixError::TrailingOperands { count: stack.len() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_operand() {
        assert_eq!(evaluate("0"), Ok(0));
        assert_eq!(evaluate("-0"), Ok(0));
        assert_eq!(evaluate("4"), Ok(4));
        assert_eq!(evaluate("1234567890"), Ok(1234567890));
        assert_eq!(evaluate("-1234567890"), Ok(-1234567890));
    }

    #[test]
    fn operators() {
        assert_eq!(evaluate("1 23 +"), Ok(24));
        assert_eq!(evaluate("0 1 /"), Ok(0));
        assert_eq!(evaluate("1 2 + -3 *"), Ok(-9));
        assert_eq!(evaluate("12 34 - 56 -78 + *"), Ok((12 - 34) * (56 + -78)));
        assert_eq!(evaluate("1 2 + 3 * 4 - 5 /"), Ok(1));
        assert_eq!(evaluate("2 3 4 -0 + - *"), Ok(-2));
    }

    #[test]
    fn whitespace_is_flexible() {
        assert_eq!(evaluate("1\t23\t+"), Ok(24));
        assert_eq!(evaluate("  \t\t1 \t-2\t + "), Ok(-1));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(evaluate("1 0 /"), Err(PostfixError::DivisionByZero));
    }

    #[test]
    fn overflow_is_rejected() {
        assert_eq!(
            evaluate("2147483647 1 +"),
            Err(PostfixError::Overflow { op: '+' })
        );
        assert_eq!(
            evaluate("-2147483648 -1 /"),
            Err(PostfixError::Overflow { op: '/' })
        );
    }
}
