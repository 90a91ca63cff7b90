use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}
