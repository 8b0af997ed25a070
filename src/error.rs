//! # Table Errors
//!
//! Every classified failure in dbfkit is a [`TableError`] carried inside an
//! `eyre::Report`. Callers that only need a message can print the report;
//! callers that need to branch on the failure class downcast it:
//!
//! ```ignore
//! match table.get_record(row) {
//!     Ok(record) => { /* ... */ }
//!     Err(report) => match report.downcast_ref::<TableError>().map(TableError::kind) {
//!         Some(ErrorKind::Range) => { /* row out of bounds or truncated file */ }
//!         Some(ErrorKind::Parse) => { /* malformed numeric text */ }
//!         _ => return Err(report),
//!     },
//! }
//! ```
//!
//! ## Error Kinds
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | `FileAccess` | The source file cannot be read |
//! | `Format` | Header too short, descriptor block out of bounds, inconsistent lengths |
//! | `Decode` | The injected text decoder fails |
//! | `Parse` | Numeric text is malformed and matches no sentinel |
//! | `Range` | Row outside the declared count, or a record past the end of the buffer |
//! | `Binding` | Destination slot type does not match the file field |

use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FileAccess,
    Format,
    Decode,
    Parse,
    Range,
    Binding,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::FileAccess => "file-access",
            ErrorKind::Format => "format",
            ErrorKind::Decode => "decode",
            ErrorKind::Parse => "parse",
            ErrorKind::Range => "range",
            ErrorKind::Binding => "binding",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
pub enum TableError {
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    Format(String),
    Decode {
        context: String,
        reason: String,
    },
    Parse {
        field: String,
        text: String,
        reason: String,
    },
    RowOutOfRange {
        row: usize,
        record_count: u32,
    },
    Truncated {
        row: usize,
        required: usize,
        available: usize,
    },
    Binding(String),
}

impl TableError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::FileAccess { .. } => ErrorKind::FileAccess,
            TableError::Format(_) => ErrorKind::Format,
            TableError::Decode { .. } => ErrorKind::Decode,
            TableError::Parse { .. } => ErrorKind::Parse,
            TableError::RowOutOfRange { .. } | TableError::Truncated { .. } => ErrorKind::Range,
            TableError::Binding(_) => ErrorKind::Binding,
        }
    }

    pub(crate) fn format(msg: impl Into<String>) -> Self {
        TableError::Format(msg.into())
    }

    pub(crate) fn binding(msg: impl Into<String>) -> Self {
        TableError::Binding(msg.into())
    }

    pub(crate) fn decode(context: impl Into<String>, err: &eyre::Report) -> Self {
        TableError::Decode {
            context: context.into(),
            reason: format!("{:#}", err),
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::FileAccess { path, source } => {
                write!(f, "cannot read table file {}: {}", path.display(), source)
            }
            TableError::Format(msg) => write!(f, "invalid table format: {}", msg),
            TableError::Decode { context, reason } => {
                write!(f, "text decoding failed for {}: {}", context, reason)
            }
            TableError::Parse {
                field,
                text,
                reason,
            } => write!(
                f,
                "cannot parse field '{}' value '{}': {}",
                field, text, reason
            ),
            TableError::RowOutOfRange { row, record_count } => write!(
                f,
                "row index invalid: {} (table has {} records)",
                row, record_count
            ),
            TableError::Truncated {
                row,
                required,
                available,
            } => write!(
                f,
                "table file corrupted: row {} needs {} bytes but only {} are present",
                row, required, available
            ),
            TableError::Binding(msg) => write!(f, "binding error: {}", msg),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::FileAccess { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Returns the [`ErrorKind`] of a report produced by this crate, if any.
pub fn error_kind(report: &eyre::Report) -> Option<ErrorKind> {
    report.downcast_ref::<TableError>().map(TableError::kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_variants_share_a_kind() {
        let a = TableError::RowOutOfRange {
            row: 5,
            record_count: 2,
        };
        let b = TableError::Truncated {
            row: 1,
            required: 100,
            available: 80,
        };
        assert_eq!(a.kind(), ErrorKind::Range);
        assert_eq!(b.kind(), ErrorKind::Range);
    }

    #[test]
    fn kind_survives_eyre_wrapping() {
        let report = eyre::Report::new(TableError::format("header too short"));
        assert_eq!(error_kind(&report), Some(ErrorKind::Format));
        assert!(report.to_string().contains("header too short"));
    }

    #[test]
    fn kind_survives_added_context() {
        use eyre::WrapErr;

        let result: eyre::Result<()> = Err(eyre::Report::new(TableError::RowOutOfRange {
            row: 9,
            record_count: 3,
        }));
        let report = result.wrap_err("failed to decode row 9").unwrap_err();

        assert_eq!(error_kind(&report), Some(ErrorKind::Range));
        assert!(format!("{:#}", report).contains("row index invalid"));
    }

    #[test]
    fn foreign_reports_have_no_kind() {
        let report = eyre::eyre!("something else");
        assert_eq!(error_kind(&report), None);
    }

    #[test]
    fn decode_error_keeps_collaborator_message() {
        let cause = eyre::eyre!("invalid GBK sequence");
        let err = TableError::decode("field name #0", &cause);
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(err.to_string().contains("invalid GBK sequence"));
    }
}
