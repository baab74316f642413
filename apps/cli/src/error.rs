use carpricer_core::errors::Error as CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Record {index} rejected: {source}")]
    RejectedRecord {
        index: usize,
        #[source]
        source: CoreError,
    },
}

pub type CliResult<T> = Result<T, CliError>;
