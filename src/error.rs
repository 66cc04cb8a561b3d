use ariadne::{Label, Report, ReportKind, Source};
use std::fmt;

/// Everything that can go wrong between source text and syntax tree.
/// Evaluation itself never fails. Errors are raised at the point of failure
/// and surfaced to the caller with positional context; nothing is retried or
/// recovered internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// A character the scanner cannot start a token from.
    Tokenizer {
        message: String,
        position: usize,
        line: usize,
        column: usize,
    },
    /// A grammar violation, with descriptions of what was expected and what
    /// was found instead.
    Parse {
        message: String,
        expected: String,
        actual: String,
        position: usize,
        line: usize,
        column: usize,
    },
}

impl FilterError {
    pub fn message(&self) -> &str {
        match self {
            FilterError::Tokenizer { message, .. } | FilterError::Parse { message, .. } => message,
        }
    }

    /// 0-based character offset of the failure in the source text.
    pub fn position(&self) -> usize {
        match self {
            FilterError::Tokenizer { position, .. } | FilterError::Parse { position, .. } => *position,
        }
    }

    /// 1-based line of the failure.
    pub fn line(&self) -> usize {
        match self {
            FilterError::Tokenizer { line, .. } | FilterError::Parse { line, .. } => *line,
        }
    }

    /// 1-based column of the failure.
    pub fn column(&self) -> usize {
        match self {
            FilterError::Tokenizer { column, .. } | FilterError::Parse { column, .. } => *column,
        }
    }

    pub fn expected(&self) -> Option<&str> {
        match self {
            FilterError::Parse { expected, .. } => Some(expected),
            FilterError::Tokenizer { .. } => None,
        }
    }

    pub fn actual(&self) -> Option<&str> {
        match self {
            FilterError::Parse { actual, .. } => Some(actual),
            FilterError::Tokenizer { .. } => None,
        }
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{} ({}:{})", self.message(), self.line(), self.column())
    }
}

impl std::error::Error for FilterError { }

/// Renders the error as an ariadne report against the source text it came
/// from. Used by the CLI; library callers can inspect the error directly.
pub fn print_error(source: &str, error: &FilterError) {
    let source_name = "filter";
    let position = error.position();

    Report::build(ReportKind::Error, (source_name, position..position))
        .with_message(error.message())
        .with_label(Label::new((source_name, position..position)).with_message(error.message()))
        .finish()
        .print((source_name, Source::from(source)))
        .unwrap();
}
