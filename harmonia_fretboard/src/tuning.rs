// Six-string tunings.
//
// Open strings are listed low to high (E A D G B E for standard tuning) but
// addressed by string number, where string 1 is the highest-pitched string
// and string 6 the lowest. A tuning is always exactly six strings: the type
// is a fixed array, and `Tuning::from_names` rejects any other length before
// a search ever sees it.

use crate::error::FretboardError;
use harmonia_theory::note::{Note, PitchClass, parse_note, transpose_note};
use serde::{Deserialize, Serialize};

pub const STRING_COUNT: u8 = 6;

/// Highest fret on the neck.
pub const MAX_FRET: u8 = 24;

/// Default search/scan limit.
pub const DEFAULT_MAX_FRET: u8 = 12;

// E A D G B E
const STANDARD_PITCH_CLASSES: [i32; 6] = [4, 9, 2, 7, 11, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tuning {
    /// Open-string notes from string 6 (lowest) to string 1 (highest).
    low_to_high: [Note; 6],
}

impl Tuning {
    pub fn standard() -> Self {
        Tuning {
            low_to_high: STANDARD_PITCH_CLASSES
                .map(|pc| Note::from_pitch_class(PitchClass::new(pc), false)),
        }
    }

    /// Build a tuning from six note names, lowest string first.
    pub fn from_names(names: &[&str]) -> Result<Self, FretboardError> {
        if names.len() != STRING_COUNT as usize {
            return Err(FretboardError::TuningLength(names.len()));
        }
        let mut low_to_high = Tuning::standard().low_to_high;
        for (slot, name) in low_to_high.iter_mut().zip(names) {
            *slot = parse_note(name)?;
        }
        Ok(Tuning { low_to_high })
    }

    /// Open note of a string (1 = highest ... 6 = lowest).
    pub fn open_note(&self, string: u8) -> Result<Note, FretboardError> {
        check_string(string)?;
        Ok(self.low_to_high[(STRING_COUNT - string) as usize])
    }

    /// Note sounding at `fret` on `string`, sharp-spelled.
    pub fn note_at(&self, string: u8, fret: u8) -> Result<Note, FretboardError> {
        check_fret(fret)?;
        let open = self.open_note(string)?;
        Ok(transpose_note(&open, fret as i32, false))
    }

    pub fn low_to_high(&self) -> &[Note; 6] {
        &self.low_to_high
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::standard()
    }
}

pub(crate) fn check_string(string: u8) -> Result<(), FretboardError> {
    if (1..=STRING_COUNT).contains(&string) {
        Ok(())
    } else {
        Err(FretboardError::StringOutOfRange(string))
    }
}

pub(crate) fn check_fret(fret: u8) -> Result<(), FretboardError> {
    if fret <= MAX_FRET {
        Ok(())
    } else {
        Err(FretboardError::FretOutOfRange { fret, max: MAX_FRET })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_strings() {
        let t = Tuning::standard();
        assert_eq!(t.open_note(6).unwrap().name, "E");
        assert_eq!(t.open_note(5).unwrap().name, "A");
        assert_eq!(t.open_note(3).unwrap().name, "G");
        assert_eq!(t.open_note(2).unwrap().name, "B");
        assert_eq!(t.open_note(1).unwrap().name, "E");
    }

    #[test]
    fn note_at_frets() {
        let t = Tuning::standard();
        assert_eq!(t.note_at(5, 3).unwrap().name, "C");
        assert_eq!(t.note_at(6, 12).unwrap().name, "E");
        assert_eq!(t.note_at(2, 1).unwrap().name, "C");
        assert_eq!(t.note_at(4, 24).unwrap().name, "D");
    }

    #[test]
    fn bounds_are_enforced() {
        let t = Tuning::standard();
        assert!(matches!(t.open_note(0), Err(FretboardError::StringOutOfRange(0))));
        assert!(matches!(t.open_note(7), Err(FretboardError::StringOutOfRange(7))));
        assert!(matches!(
            t.note_at(1, 25),
            Err(FretboardError::FretOutOfRange { fret: 25, max: 24 })
        ));
    }

    #[test]
    fn custom_tuning_needs_six_strings() {
        let drop_d = Tuning::from_names(&["D", "A", "D", "G", "B", "E"]).unwrap();
        assert_eq!(drop_d.open_note(6).unwrap().name, "D");
        assert!(matches!(
            Tuning::from_names(&["E", "A", "D", "G"]),
            Err(FretboardError::TuningLength(4))
        ));
        assert!(matches!(
            Tuning::from_names(&["E", "A", "D", "G", "B", "E", "A"]),
            Err(FretboardError::TuningLength(7))
        ));
        assert!(matches!(
            Tuning::from_names(&["E", "A", "D", "G", "B", "Q"]),
            Err(FretboardError::Theory(_))
        ));
    }
}
