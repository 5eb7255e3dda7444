use super::Column;

pub struct Error {
    code: ErrorCode,
    column: Option<Column>,
    line: Option<String>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            column: None,
            line: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Character column of the failure, once attached.
    pub fn column(&self) -> Option<Column> {
        self.column
    }

    /// The input line the failure happened in, once attached.
    pub fn line(&self) -> Option<&str> {
        self.line.as_deref()
    }

    pub fn detail(&self) -> &str {
        &self.message
    }

    pub fn in_column(self, column: Column) -> Error {
        debug_assert!(self.column.is_none());
        Error {
            column: Some(column),
            ..self
        }
    }

    pub fn in_line(self, line: &str) -> Error {
        debug_assert!(self.line.is_none());
        Error {
            line: Some(line.to_string()),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorCode {
    #[error("division by zero")]
    DivisionByZero,
    #[error("undefined variable")]
    UndefinedVariable,
    #[error("expected '='")]
    ExpectedEquals,
    #[error("expected ')'")]
    ExpectedCloseParen,
    #[error("expected variable name")]
    ExpectedVariable,
    #[error("unexpected character")]
    UnexpectedChar,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unexpected input")]
    UnexpectedInput,
    #[error("malformed integer")]
    MalformedInteger,
    #[error("overflow")]
    Overflow,
    #[error("parentheses nested too deeply")]
    NestingTooDeep,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {:?}", self.code)?;
        if let Some(column) = self.column {
            write!(f, " at {}", column)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        write!(f, " }}")
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let (Some(line), Some(column)) = (&self.line, self.column) {
            write!(f, "\n{}\n{}^", line, " ".repeat(column))?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.code)
    }
}
