// Scale types and scale construction.
//
// Each of the 14 scale types is a fixed list of semitone offsets from the
// root: seven offsets for the diatonic and jazz-minor families, eight for the
// half-whole diminished scale. A `Scale` is produced by transposing the root
// by every offset; `notes[0]` is always the root exactly as the caller
// spelled it.
//
// Spelling: the remaining notes use flat names when the root is a known flat
// key (F, Bb, Eb, Ab, Db, Gb) or when the scale type is minor-flavored.
// Either rule alone is enough to force flats.
//
// Used by diatonic.rs (major key degrees), modal_interchange.rs and
// available_scales.rs (parallel modes), analysis.rs, and the fretboard crate.

use crate::error::TheoryError;
use crate::note::{Note, PitchClassSet, is_flat_key, parse_note};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleType {
    /// Ionian: W W H W W W H.
    Major,
    /// Aeolian.
    NaturalMinor,
    /// Natural minor with a raised 7th.
    HarmonicMinor,
    /// Jazz (ascending) melodic minor: natural minor with raised 6th and 7th.
    MelodicMinor,
    /// Natural minor with a raised 6th.
    Dorian,
    /// Natural minor with a lowered 2nd.
    Phrygian,
    /// Major with a raised 4th.
    Lydian,
    /// Major with a lowered 7th.
    Mixolydian,
    /// Phrygian with a lowered 5th.
    Locrian,
    /// Lydian b7, the 4th mode of melodic minor.
    LydianDominant,
    /// Super-locrian, the 7th mode of melodic minor.
    Altered,
    /// The 5th mode of harmonic minor.
    PhrygianDominant,
    /// Locrian with a natural 2nd, the 6th mode of melodic minor.
    LocrianNatural2,
    /// Octatonic H W H W ... (eight notes).
    HalfWholeDiminished,
}

impl ScaleType {
    pub const ALL: [ScaleType; 14] = [
        ScaleType::Major,
        ScaleType::NaturalMinor,
        ScaleType::HarmonicMinor,
        ScaleType::MelodicMinor,
        ScaleType::Dorian,
        ScaleType::Phrygian,
        ScaleType::Lydian,
        ScaleType::Mixolydian,
        ScaleType::Locrian,
        ScaleType::LydianDominant,
        ScaleType::Altered,
        ScaleType::PhrygianDominant,
        ScaleType::LocrianNatural2,
        ScaleType::HalfWholeDiminished,
    ];

    /// Semitone offsets from the root for each scale tone.
    pub fn pattern(self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScaleType::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            ScaleType::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleType::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleType::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleType::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleType::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleType::LydianDominant => &[0, 2, 4, 6, 7, 9, 10],
            ScaleType::Altered => &[0, 1, 3, 4, 6, 8, 10],
            ScaleType::PhrygianDominant => &[0, 1, 4, 5, 7, 8, 10],
            ScaleType::LocrianNatural2 => &[0, 2, 3, 5, 6, 8, 10],
            ScaleType::HalfWholeDiminished => &[0, 1, 3, 4, 6, 7, 9, 10],
        }
    }

    /// Scale types whose notes are spelled with flats regardless of root.
    pub fn is_minor_flavored(self) -> bool {
        matches!(
            self,
            ScaleType::NaturalMinor
                | ScaleType::HarmonicMinor
                | ScaleType::MelodicMinor
                | ScaleType::Dorian
                | ScaleType::Phrygian
                | ScaleType::Locrian
        )
    }

    /// The camelCase identifier used in serialized data ("naturalMinor").
    pub fn id(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::NaturalMinor => "naturalMinor",
            ScaleType::HarmonicMinor => "harmonicMinor",
            ScaleType::MelodicMinor => "melodicMinor",
            ScaleType::Dorian => "dorian",
            ScaleType::Phrygian => "phrygian",
            ScaleType::Lydian => "lydian",
            ScaleType::Mixolydian => "mixolydian",
            ScaleType::Locrian => "locrian",
            ScaleType::LydianDominant => "lydianDominant",
            ScaleType::Altered => "altered",
            ScaleType::PhrygianDominant => "phrygianDominant",
            ScaleType::LocrianNatural2 => "locrianNatural2",
            ScaleType::HalfWholeDiminished => "halfWholeDiminished",
        }
    }

    pub fn from_id(id: &str) -> Option<ScaleType> {
        ScaleType::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major (Ionian)",
            ScaleType::NaturalMinor => "Natural Minor (Aeolian)",
            ScaleType::HarmonicMinor => "Harmonic Minor",
            ScaleType::MelodicMinor => "Melodic Minor",
            ScaleType::Dorian => "Dorian",
            ScaleType::Phrygian => "Phrygian",
            ScaleType::Lydian => "Lydian",
            ScaleType::Mixolydian => "Mixolydian",
            ScaleType::Locrian => "Locrian",
            ScaleType::LydianDominant => "Lydian Dominant",
            ScaleType::Altered => "Altered",
            ScaleType::PhrygianDominant => "Phrygian Dominant",
            ScaleType::LocrianNatural2 => "Locrian #2",
            ScaleType::HalfWholeDiminished => "Half-Whole Diminished",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleType::from_id(s).ok_or_else(|| TheoryError::UnknownScaleType(s.to_string()))
    }
}

/// Whether a scale on `root` of `scale_type` spells its notes with flats.
pub fn prefers_flat_spelling(root: &Note, scale_type: ScaleType) -> bool {
    is_flat_key(root.name) || scale_type.is_minor_flavored()
}

/// A concrete scale: root, type, and its spelled notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    pub root: Note,
    pub scale_type: ScaleType,
    pub notes: Vec<Note>,
    pub pattern: Vec<u8>,
}

impl Scale {
    pub fn new(root: Note, scale_type: ScaleType) -> Self {
        let prefer_flat = prefers_flat_spelling(&root, scale_type);
        let pattern = scale_type.pattern();
        let notes = pattern
            .iter()
            .map(|&offset| {
                if offset == 0 {
                    root
                } else {
                    Note::from_pitch_class(root.pitch_class.transpose(offset as i32), prefer_flat)
                }
            })
            .collect();

        Scale {
            root,
            scale_type,
            notes,
            pattern: pattern.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Note at a 1-based scale degree.
    pub fn degree(&self, degree: usize) -> Result<Note, TheoryError> {
        if degree == 0 || degree > self.notes.len() {
            return Err(TheoryError::DegreeOutOfRange {
                degree,
                max: self.notes.len(),
            });
        }
        Ok(self.notes[degree - 1])
    }

    /// 1-based degree of a note (by pitch class), if it is in the scale.
    pub fn degree_of(&self, note: &Note) -> Option<usize> {
        self.notes
            .iter()
            .position(|n| n.pitch_class == note.pitch_class)
            .map(|i| i + 1)
    }

    pub fn pitch_classes(&self) -> PitchClassSet {
        self.notes.iter().map(|n| n.pitch_class).collect()
    }

    pub fn contains(&self, note: &Note) -> bool {
        self.pitch_classes().contains(note.pitch_class)
    }
}

/// Build a scale from a root name. Unknown names fail.
pub fn create_scale(root: &str, scale_type: ScaleType) -> Result<Scale, TheoryError> {
    Ok(Scale::new(parse_note(root)?, scale_type))
}

/// Note at a 1-based degree of `scale`; fails outside `1..=scale.len()`.
pub fn get_scale_degree_note(scale: &Scale, degree: usize) -> Result<Note, TheoryError> {
    scale.degree(degree)
}
