// Input-validation failures for the theory core.
//
// Only genuinely malformed input is an error: an unknown note name or a scale
// degree outside the scale. "Nothing available" outcomes (an unknown category
// id, a degree the matcher cannot use) are ordinary empty results and never
// reach this type.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("unknown note name '{0}'")]
    UnknownNoteName(String),

    #[error("degree {degree} is outside 1..={max}")]
    DegreeOutOfRange { degree: usize, max: usize },

    #[error("unknown scale type '{0}'")]
    UnknownScaleType(String),

    #[error("unknown chord quality '{0}'")]
    UnknownChordQuality(String),

    #[error("pitch class {0} is outside 0..=11")]
    PitchClassOutOfRange(u8),

    #[error("pitch class set mask {0:#06x} has bits above 11")]
    InvalidPitchClassSet(u16),
}
