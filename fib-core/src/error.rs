use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("input n={n} exceeds the largest supported value {max}")]
    InputTooLarge { n: u32, max: u32 },

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}
