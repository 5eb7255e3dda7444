use super::{parse::Statement, Error, Integer, Var};
use tracing::{debug, trace};

/// One calculator session.
///
/// Each line handed to [`Evaluator::parse`] is evaluated on its own; only the
/// variables carry over between lines.
///
/// ```
/// use calc::lang::Evaluator;
///
/// let mut session = Evaluator::new();
/// assert_eq!(session.parse("let x = 6").unwrap(), None);
/// assert_eq!(session.parse("x * 7").unwrap(), Some(42));
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    vars: Var,
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator::default()
    }

    /// Evaluates one line.
    ///
    /// Returns the value of an expression, or `None` for a `let` assignment.
    /// A failed line leaves the variables as they were.
    pub fn parse(&mut self, line: &str) -> Result<Option<Integer>, Error> {
        let statement = match super::parse(line, &self.vars) {
            Ok(statement) => statement,
            Err(error) => {
                debug!(?error, "line failed");
                return Err(error);
            }
        };
        match statement {
            Statement::Let(name, value) => {
                debug!(%name, value, "assign");
                self.vars.store(name, value);
                Ok(None)
            }
            Statement::Expression(value) => {
                trace!(line, value, "evaluated");
                Ok(Some(value))
            }
        }
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }
}
