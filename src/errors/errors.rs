use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Whether the error points into the source text.
    ///
    /// Resource errors are raised before any source exists and carry a null position.
    pub fn has_source_position(&self) -> bool {
        !matches!(
            self.internal_error,
            ErrorImpl::FileNotReadable { .. } | ErrorImpl::FileNotWritable { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::IllegalCharacterInString { .. } => "IllegalCharacterInString",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::NumberOutOfRange { .. } => "NumberOutOfRange",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::InvalidStatement { .. } => "InvalidStatement",
            ErrorImpl::MissingClosingParen => "MissingClosingParen",
            ErrorImpl::ExpectedComparisonOperator { .. } => "ExpectedComparisonOperator",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::MissingTypeKeyword { .. } => "MissingTypeKeyword",
            ErrorImpl::LabelAlreadyDeclared { .. } => "LabelAlreadyDeclared",
            ErrorImpl::UndeclaredLabel { .. } => "UndeclaredLabel",
            ErrorImpl::InvalidOperationTypes { .. } => "InvalidOperationTypes",
            ErrorImpl::InvalidComparisonTypes { .. } => "InvalidComparisonTypes",
            ErrorImpl::InvalidEqualityTypes { .. } => "InvalidEqualityTypes",
            ErrorImpl::InvalidAssignmentTypes { .. } => "InvalidAssignmentTypes",
            ErrorImpl::InvalidLoopType { .. } => "InvalidLoopType",
            ErrorImpl::MalformedTree { .. } => "MalformedTree",
            ErrorImpl::FileNotReadable { .. } => "FileNotReadable",
            ErrorImpl::FileNotWritable { .. } => "FileNotWritable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal is missing its closing `\"`",
            )),
            ErrorImpl::IllegalCharacterInString { character } => ErrorTip::Suggestion(format!(
                "Illegal character {:?} in string, strings cannot contain tabs, newlines, `\\` or `%`",
                character
            )),
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, numbers are digits with an optional `.` and fraction",
                token
            )),
            ErrorImpl::NumberOutOfRange { token } => ErrorTip::Suggestion(format!(
                "Integer `{}` does not fit in an INT, the largest is {}",
                token,
                i32::MAX
            )),
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::InvalidStatement { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a statement",
                token
            )),
            ErrorImpl::MissingClosingParen => {
                ErrorTip::Suggestion(String::from("Missing closing parenthesis"))
            }
            ErrorImpl::ExpectedComparisonOperator { token } => ErrorTip::Suggestion(format!(
                "Expected a comparison operator, found `{}`",
                token
            )),
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` referenced before declaration",
                variable
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::MissingTypeKeyword { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` used before declaration, declare it with INT, FLOAT, BOOL or STRING",
                variable
            )),
            ErrorImpl::LabelAlreadyDeclared { label } => {
                ErrorTip::Suggestion(format!("Label `{}` declared twice", label))
            }
            ErrorImpl::UndeclaredLabel { label } => {
                ErrorTip::Suggestion(format!("Attempted to GOTO undeclared label `{}`", label))
            }
            ErrorImpl::InvalidOperationTypes {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Invalid types in operation: `{}` {} `{}`",
                left, operator, right
            )),
            ErrorImpl::InvalidComparisonTypes {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Invalid types in comparison: `{}` {} `{}`",
                left, operator, right
            )),
            ErrorImpl::InvalidEqualityTypes {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Invalid types in equals/not equals comparison: `{}` {} `{}`",
                left, operator, right
            )),
            ErrorImpl::InvalidAssignmentTypes { expected, received } => ErrorTip::Suggestion(
                format!("Invalid types in equals: cannot assign `{}` to `{}`", received, expected),
            ),
            ErrorImpl::InvalidLoopType { received } => ErrorTip::Suggestion(format!(
                "Loop variables and bounds must be INT or FLOAT, received `{}`",
                received
            )),
            ErrorImpl::MalformedTree { expected } => ErrorTip::Suggestion(format!(
                "Internal error: expected a `{}` node",
                expected
            )),
            ErrorImpl::FileNotReadable { path, reason } => {
                ErrorTip::Suggestion(format!("Could not read `{}`: {}", path, reason))
            }
            ErrorImpl::FileNotWritable { path, reason } => {
                ErrorTip::Suggestion(format!("Could not write `{}`: {}", path, reason))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("illegal character in string: {character:?}")]
    IllegalCharacterInString { character: char },
    #[error("malformed number: {token:?}")]
    MalformedNumber { token: String },
    #[error("integer literal out of range: {token:?}")]
    NumberOutOfRange { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("invalid statement: {token:?}")]
    InvalidStatement { token: String },
    #[error("missing closing parenthesis")]
    MissingClosingParen,
    #[error("expected comparison operator, found {token:?}")]
    ExpectedComparisonOperator { token: String },
    #[error("referenced variable {variable:?} before assignment")]
    VariableNotDeclared { variable: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("attempted to set variable {variable:?} without declaring a type")]
    MissingTypeKeyword { variable: String },
    #[error("label {label:?} declared twice")]
    LabelAlreadyDeclared { label: String },
    #[error("attempted to GOTO an undeclared label {label:?}")]
    UndeclaredLabel { label: String },
    #[error("invalid types in operation: {left} {operator} {right}")]
    InvalidOperationTypes { operator: String, left: String, right: String },
    #[error("invalid types in comparison: {left} {operator} {right}")]
    InvalidComparisonTypes { operator: String, left: String, right: String },
    #[error("invalid types in equals/not equals comparison: {left} {operator} {right}")]
    InvalidEqualityTypes { operator: String, left: String, right: String },
    #[error("invalid types in equals: expected {expected}, received {received}")]
    InvalidAssignmentTypes { expected: String, received: String },
    #[error("invalid type in for loop: {received}")]
    InvalidLoopType { received: String },
    #[error("malformed syntax tree: expected {expected}")]
    MalformedTree { expected: String },
    #[error("file {path:?} could not be opened: {reason}")]
    FileNotReadable { path: String, reason: String },
    #[error("file {path:?} could not be written: {reason}")]
    FileNotWritable { path: String, reason: String },
}
