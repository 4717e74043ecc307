// Errors for fretboard lookups and configuration loading.

use harmonia_theory::TheoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FretboardError {
    #[error(transparent)]
    Theory(#[from] TheoryError),

    #[error("string {0} is outside 1..=6")]
    StringOutOfRange(u8),

    #[error("fret {fret} is outside 0..={max}")]
    FretOutOfRange { fret: u8, max: u8 },

    #[error("a tuning needs exactly 6 strings, got {0}")]
    TuningLength(usize),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
