use docbind_catalog::CatalogError;
use docbind_layout::LayoutError;
use thiserror::Error;

/// Exit status of a `docbind` run that did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Usage = 1,
    Input = 2,
    Processing = 3,
}

/// Why a subcommand stopped once its arguments had parsed.
#[derive(Debug, Error)]
pub enum CliError {
    /// A template, data or layout file that could not be read or understood.
    #[error("{0}")]
    Input(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Data(#[from] docbind_core::Error),
    /// JSON for stdout could not be produced.
    #[error("{0}")]
    Output(String),
}

impl CliError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Output(_) => ErrorCode::Processing,
            Self::Input(_) | Self::Catalog(_) | Self::Layout(_) | Self::Data(_) => ErrorCode::Input,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.code() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_output_failures_are_processing_errors() {
        assert_eq!(CliError::Output("x".into()).exit_code(), 3);
        assert_eq!(CliError::Input("x".into()).exit_code(), 2);
        let unknown = CliError::from(docbind_core::Error::Template("bad".into()));
        assert_eq!(unknown.code(), ErrorCode::Input);
    }
}
