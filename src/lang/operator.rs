use super::{Error, Integer};
use crate::error;

/// Precedence one above the tightest binary operator. Expressions at this
/// level are single atoms.
pub const ATOM_PRECEDENCE: usize = 3;

/// Precedence of a full expression.
pub const LOWEST_PRECEDENCE: usize = 1;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Operator> {
        use Operator::*;
        match ch {
            '+' => Some(Plus),
            '-' => Some(Minus),
            '*' => Some(Multiply),
            '/' => Some(Divide),
            _ => None,
        }
    }

    pub fn precedence(self) -> usize {
        use Operator::*;
        match self {
            Plus | Minus => 1,
            Multiply | Divide => 2,
        }
    }

    /// `+` and `-` also prefix integer literals.
    pub fn is_sign(ch: char) -> bool {
        ch == '+' || ch == '-'
    }

    pub fn apply(self, lhs: Integer, rhs: Integer) -> Result<Integer, Error> {
        use Operator::*;
        let value = match self {
            Plus => lhs.checked_add(rhs),
            Minus => lhs.checked_sub(rhs),
            Multiply => lhs.checked_mul(rhs),
            Divide => {
                if rhs == 0 {
                    return Err(error!(DivisionByZero));
                }
                lhs.checked_div(rhs)
            }
        };
        value.ok_or_else(|| error!(Overflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_table() {
        for ch in "+-*/".chars() {
            let op = Operator::from_char(ch).unwrap();
            assert!(op.precedence() >= LOWEST_PRECEDENCE);
            assert!(op.precedence() < ATOM_PRECEDENCE);
        }
        assert_eq!(Operator::from_char('%'), None);
        assert_eq!(Operator::from_char('='), None);
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!(Operator::Divide.apply(7, 2).unwrap(), 3);
        assert_eq!(Operator::Divide.apply(-7, 2).unwrap(), -3);
        assert_eq!(Operator::Divide.apply(7, -2).unwrap(), -3);
    }

    #[test]
    fn test_division_by_zero() {
        let e = Operator::Divide.apply(1, 0).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivisionByZero);
    }

    #[test]
    fn test_overflow() {
        let e = Operator::Plus.apply(Integer::MAX, 1).unwrap_err();
        assert_eq!(e.code(), ErrorCode::Overflow);
        let e = Operator::Divide.apply(Integer::MIN, -1).unwrap_err();
        assert_eq!(e.code(), ErrorCode::Overflow);
    }
}
