// Chord qualities and chord construction.
//
// Ten qualities, each a fixed 3- or 4-entry semitone pattern from the root.
// A `Chord` is built by transposing its root through the pattern, so its note
// list always matches the quality exactly. Symbols come from a quality →
// suffix table ("m7b5", "maj7", ...).
//
// `identify_chord_quality` is the reverse lookup (pattern → quality) and is
// what available_scales.rs uses to name a stack of thirds.

use crate::error::TheoryError;
use crate::note::{Note, PitchClassSet, is_flat_key, parse_note};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Major7,
    Minor7,
    Dominant7,
    /// Half-diminished.
    Minor7b5,
    Diminished7,
    Augmented7,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 10] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::Dominant7,
        ChordQuality::Minor7b5,
        ChordQuality::Diminished7,
        ChordQuality::Augmented7,
    ];

    /// Semitone offsets from the root.
    pub fn pattern(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Minor7b5 => &[0, 3, 6, 10],
            ChordQuality::Diminished7 => &[0, 3, 6, 9],
            ChordQuality::Augmented7 => &[0, 4, 8, 10],
        }
    }

    /// Suffix appended to the root in a chord symbol.
    pub fn symbol_suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Minor7b5 => "m7b5",
            ChordQuality::Diminished7 => "dim7",
            ChordQuality::Augmented7 => "aug7",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ChordQuality::Major => "Major",
            ChordQuality::Minor => "Minor",
            ChordQuality::Diminished => "Diminished",
            ChordQuality::Augmented => "Augmented",
            ChordQuality::Major7 => "Major 7th",
            ChordQuality::Minor7 => "Minor 7th",
            ChordQuality::Dominant7 => "Dominant 7th",
            ChordQuality::Minor7b5 => "Half-Diminished 7th",
            ChordQuality::Diminished7 => "Diminished 7th",
            ChordQuality::Augmented7 => "Augmented 7th",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Diminished => "diminished",
            ChordQuality::Augmented => "augmented",
            ChordQuality::Major7 => "major7",
            ChordQuality::Minor7 => "minor7",
            ChordQuality::Dominant7 => "dominant7",
            ChordQuality::Minor7b5 => "minor7b5",
            ChordQuality::Diminished7 => "diminished7",
            ChordQuality::Augmented7 => "augmented7",
        }
    }

    pub fn from_id(id: &str) -> Option<ChordQuality> {
        ChordQuality::ALL.into_iter().find(|q| q.id() == id)
    }

    pub fn is_seventh(self) -> bool {
        self.pattern().len() == 4
    }

    /// Canonical seventh chord for a triad quality; sevenths map to themselves.
    pub fn extend_to_seventh(self) -> ChordQuality {
        match self {
            ChordQuality::Major => ChordQuality::Major7,
            ChordQuality::Minor => ChordQuality::Minor7,
            ChordQuality::Diminished => ChordQuality::Minor7b5,
            ChordQuality::Augmented => ChordQuality::Augmented7,
            seventh => seventh,
        }
    }

    /// Minor and diminished colours spell their tones with flats (C Eb G).
    pub fn prefers_flat(self) -> bool {
        matches!(
            self,
            ChordQuality::Minor
                | ChordQuality::Diminished
                | ChordQuality::Minor7
                | ChordQuality::Minor7b5
                | ChordQuality::Diminished7
        )
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ChordQuality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChordQuality::from_id(s).ok_or_else(|| TheoryError::UnknownChordQuality(s.to_string()))
    }
}

/// Reverse lookup: the quality whose pattern is exactly `intervals`.
///
/// Intervals are semitone offsets from the root, in any order; duplicates
/// are ignored. Returns `None` for stacks the table does not name (e.g. an
/// augmented major 7th).
pub fn identify_chord_quality(intervals: &[u8]) -> Option<ChordQuality> {
    let mut normalized: Vec<u8> = intervals.iter().map(|i| i % 12).collect();
    normalized.sort_unstable();
    normalized.dedup();
    ChordQuality::ALL
        .into_iter()
        .find(|q| q.pattern() == normalized.as_slice())
}

/// A concrete chord: root, quality, spelled tones, and display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: Note,
    pub quality: ChordQuality,
    pub notes: Vec<Note>,
    /// Long form, e.g. "C Major 7th".
    pub name: String,
    /// Lead-sheet symbol, e.g. "Cmaj7".
    pub symbol: String,
}

impl Chord {
    /// Build a chord with the default spelling rule: flats when the root is a
    /// flat key or flat-spelled, or when the quality is minor/diminished and
    /// the root is not sharp-spelled (F#m is F# A C#, never F# A Db).
    pub fn new(root: Note, quality: ChordQuality) -> Self {
        let prefer_flat = is_flat_key(root.name)
            || root.is_flat_spelled()
            || (quality.prefers_flat() && !root.is_sharp_spelled());
        Chord::with_spelling(root, quality, prefer_flat)
    }

    /// Build a chord with an explicit spelling preference for the non-root tones.
    pub fn with_spelling(root: Note, quality: ChordQuality, prefer_flat: bool) -> Self {
        let notes = quality
            .pattern()
            .iter()
            .map(|&offset| {
                if offset == 0 {
                    root
                } else {
                    Note::from_pitch_class(root.pitch_class.transpose(offset as i32), prefer_flat)
                }
            })
            .collect();

        Chord {
            root,
            quality,
            notes,
            name: format!("{} {}", root.name, quality.display_name()),
            symbol: format_chord_symbol(&root, quality),
        }
    }

    /// The same root extended to its canonical seventh quality.
    pub fn extend_to_seventh(&self) -> Chord {
        if self.quality.is_seventh() {
            return self.clone();
        }
        Chord::new(self.root, self.quality.extend_to_seventh())
    }

    pub fn pitch_classes(&self) -> PitchClassSet {
        self.notes.iter().map(|n| n.pitch_class).collect()
    }

    /// Pitch-class membership: any spelling of a chord tone counts.
    pub fn contains(&self, note: &Note) -> bool {
        self.pitch_classes().contains(note.pitch_class)
    }

    pub fn contains_all(&self, notes: &[Note]) -> bool {
        let set: PitchClassSet = notes.iter().map(|n| n.pitch_class).collect();
        self.pitch_classes().is_superset(set)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

pub fn format_chord_symbol(root: &Note, quality: ChordQuality) -> String {
    format!("{}{}", root.name, quality.symbol_suffix())
}

/// Build a chord from a root name. Unknown names fail.
pub fn create_chord(root: &str, quality: ChordQuality) -> Result<Chord, TheoryError> {
    Ok(Chord::new(parse_note(root)?, quality))
}
