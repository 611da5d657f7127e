use std::path::{Path, PathBuf};

pub type FunctionResult<T> = Result<T, FunctionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionErrorKind {
    Index,
    OutOfRange,
    Value,
    NotFound,
    DegenerateData,
    Io,
}

impl FunctionErrorKind {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Index => "INDEX",
            Self::OutOfRange => "OUT_OF_RANGE",
            Self::Value => "VALUE",
            Self::NotFound => "NOT_FOUND",
            Self::DegenerateData => "DEGENERATE_DATA",
            Self::Io => "IO",
        }
    }

    /// Process exit code used by front ends: 2 for caller input problems,
    /// 3 for i/o, 4 for data-driven computation failures.
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Index | Self::Value => 2,
            Self::Io => 3,
            Self::OutOfRange | Self::NotFound | Self::DegenerateData => 4,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    #[error("{operation}: index {index} is outside [0, {size})")]
    Index {
        operation: &'static str,
        index: usize,
        size: usize,
    },
    #[error("{operation}({value}) is out of range: {detail}")]
    OutOfRange {
        operation: &'static str,
        value: f64,
        detail: String,
    },
    #[error("{operation}: invalid input: {detail}")]
    Value {
        operation: &'static str,
        detail: String,
    },
    #[error("{operation}({value}) has no solution: {detail}")]
    NotFound {
        operation: &'static str,
        value: f64,
        detail: String,
    },
    #[error("{operation}: degenerate data: {detail}")]
    DegenerateData {
        operation: &'static str,
        detail: String,
    },
    #[error("{operation}: i/o failure on '{}': {source}", target.display())]
    Io {
        operation: &'static str,
        target: PathBuf,
        source: std::io::Error,
    },
}

impl FunctionError {
    pub fn index(operation: &'static str, index: usize, size: usize) -> Self {
        Self::Index {
            operation,
            index,
            size,
        }
    }

    pub fn out_of_range(operation: &'static str, value: f64, detail: impl Into<String>) -> Self {
        Self::OutOfRange {
            operation,
            value,
            detail: detail.into(),
        }
    }

    pub fn value(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::Value {
            operation,
            detail: detail.into(),
        }
    }

    pub fn not_found(operation: &'static str, value: f64, detail: impl Into<String>) -> Self {
        Self::NotFound {
            operation,
            value,
            detail: detail.into(),
        }
    }

    pub fn degenerate(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::DegenerateData {
            operation,
            detail: detail.into(),
        }
    }

    pub fn io(operation: &'static str, target: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            target: target.as_ref().to_path_buf(),
            source,
        }
    }

    pub const fn kind(&self) -> FunctionErrorKind {
        match self {
            Self::Index { .. } => FunctionErrorKind::Index,
            Self::OutOfRange { .. } => FunctionErrorKind::OutOfRange,
            Self::Value { .. } => FunctionErrorKind::Value,
            Self::NotFound { .. } => FunctionErrorKind::NotFound,
            Self::DegenerateData { .. } => FunctionErrorKind::DegenerateData,
            Self::Io { .. } => FunctionErrorKind::Io,
        }
    }

    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Index { operation, .. }
            | Self::OutOfRange { operation, .. }
            | Self::Value { operation, .. }
            | Self::NotFound { operation, .. }
            | Self::DegenerateData { operation, .. }
            | Self::Io { operation, .. } => operation,
        }
    }

    pub const fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.kind().code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::{FunctionError, FunctionErrorKind};

    #[test]
    fn messages_name_operation_and_offending_value() {
        let error = FunctionError::index("remove_point", 7, 3);
        assert_eq!(error.to_string(), "remove_point: index 7 is outside [0, 3)");
        assert_eq!(error.operation(), "remove_point");

        let error = FunctionError::out_of_range("get_y", 2.5, "outside [0, 2]");
        assert_eq!(error.to_string(), "get_y(2.5) is out of range: outside [0, 2]");
    }

    #[test]
    fn kinds_map_to_stable_codes_and_exit_codes() {
        assert_eq!(FunctionErrorKind::Index.exit_code(), 2);
        assert_eq!(FunctionErrorKind::Value.exit_code(), 2);
        assert_eq!(FunctionErrorKind::Io.exit_code(), 3);
        assert_eq!(FunctionErrorKind::NotFound.exit_code(), 4);

        let error = FunctionError::degenerate("normalize", "integral is zero");
        assert_eq!(error.kind(), FunctionErrorKind::DegenerateData);
        assert_eq!(
            error.diagnostic_line(),
            "ERROR: [DEGENERATE_DATA] normalize: degenerate data: integral is zero"
        );
    }

    #[test]
    fn io_errors_report_target_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = FunctionError::io("load", "tables/loss.dat", source);
        assert_eq!(error.kind(), FunctionErrorKind::Io);
        assert!(error.to_string().contains("tables/loss.dat"));
    }
}
