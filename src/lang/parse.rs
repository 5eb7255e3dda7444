use super::{
    cursor::Cursor,
    operator::{Operator, ATOM_PRECEDENCE, LOWEST_PRECEDENCE},
    Error, Integer, Var,
};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

const LET: &str = "let";
const EQUALS: char = '=';
const LEFT_PAREN: char = '(';
const RIGHT_PAREN: char = ')';

/// Deepest parenthesis nesting accepted in one line.
pub const MAX_NESTING: usize = 512;

/// What one line evaluated to. Nothing has been applied to the variables yet.
#[derive(Debug, PartialEq)]
pub enum Statement {
    Let(String, Integer),
    Expression(Integer),
}

/// Parses and evaluates `line` in one pass against `vars`.
///
/// Errors come back with the column of the failure and the line attached.
pub fn parse(line: &str, vars: &Var) -> Result<Statement> {
    Parser::parse(line, vars)
}

fn is_letter(ch: char) -> bool {
    ch.is_alphabetic()
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    vars: &'a Var,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn parse(line: &'a str, vars: &'a Var) -> Result<Statement> {
        let mut parse = Parser {
            cursor: Cursor::new(line),
            vars,
            depth: 0,
        };
        match parse.statement() {
            Ok(s) => Ok(s),
            Err(e) => Err(e.in_column(parse.cursor.column()).in_line(line)),
        }
    }

    fn statement(&mut self) -> Result<Statement> {
        self.cursor.skip_whitespace();
        let statement = if self.at_let() {
            let (name, value) = self.assignment()?;
            Statement::Let(name, value)
        } else {
            Statement::Expression(self.expression(LOWEST_PRECEDENCE)?)
        };
        if !self.cursor.is_at_end() {
            return Err(error!(UnexpectedInput));
        }
        Ok(statement)
    }

    fn at_let(&self) -> bool {
        self.cursor.rest().starts_with(LET)
    }

    fn assignment(&mut self) -> Result<(String, Integer)> {
        let keyword = self.cursor.eat_str(LET);
        debug_assert!(keyword);
        self.cursor.skip_whitespace();
        let name = self.cursor.take_while(is_letter);
        if name.is_empty() {
            return Err(error!(ExpectedVariable));
        }
        self.cursor.skip_whitespace();
        if !self.cursor.eat(EQUALS) {
            return Err(error!(ExpectedEquals));
        }
        let value = self.expression(LOWEST_PRECEDENCE)?;
        Ok((name.to_string(), value))
    }

    fn expression(&mut self, precedence: usize) -> Result<Integer> {
        if precedence == ATOM_PRECEDENCE {
            return self.atom();
        }
        let mut lhs = self.expression(precedence + 1)?;
        loop {
            self.cursor.skip_whitespace();
            let op = match self.cursor.peek().and_then(Operator::from_char) {
                Some(op) if op.precedence() == precedence => op,
                _ => break,
            };
            self.cursor.bump();
            let rhs = self.expression(precedence + 1)?;
            lhs = op.apply(lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn atom(&mut self) -> Result<Integer> {
        self.cursor.skip_whitespace();
        match self.cursor.peek() {
            None => Err(error!(UnexpectedEndOfInput)),
            Some(ch) if is_digit(ch) || Operator::is_sign(ch) => self.integer(),
            Some(ch) if is_letter(ch) => self.variable(),
            Some(LEFT_PAREN) => {
                if self.depth == MAX_NESTING {
                    return Err(error!(NestingTooDeep));
                }
                self.cursor.bump();
                self.depth += 1;
                let value = self.expression(LOWEST_PRECEDENCE)?;
                if !self.cursor.eat(RIGHT_PAREN) {
                    return Err(error!(ExpectedCloseParen));
                }
                self.depth -= 1;
                Ok(value)
            }
            Some(ch) => Err(error!(UnexpectedChar; format!("{:?}", ch))),
        }
    }

    // No boundary check after the digits: `12a3` yields 12 and leaves `a3`.
    fn integer(&mut self) -> Result<Integer> {
        let start = self.cursor.position();
        self.cursor.eat_if(Operator::is_sign);
        self.cursor.take_while(is_digit);
        let literal = self.cursor.slice_from(start);
        literal
            .parse::<Integer>()
            .map_err(|_| error!(MalformedInteger; format!("{:?}", literal)))
    }

    fn variable(&mut self) -> Result<Integer> {
        let name = self.cursor.take_while(is_letter);
        match self.vars.fetch(name) {
            Some(value) => Ok(value),
            None => {
                self.cursor.retreat(name.len());
                Err(error!(UndefinedVariable; name))
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/parse_test.rs"]
mod tests;
