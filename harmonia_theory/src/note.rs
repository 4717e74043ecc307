// Notes, pitch classes, and enharmonic spelling.
//
// A pitch class is an octave-reduced semitone number (0 = C ... 11 = B). A
// `Note` pairs a pitch class with one enharmonic spelling drawn from two
// parallel 12-entry tables (sharp and flat). Spelling is presentation only:
// all harmonic comparisons go through pitch classes, never names.
//
// This module provides:
// - `PitchClass` with mod-12 arithmetic
// - `PitchClassSet`, a 12-bit set used for every membership test in the crate
// - `Note` construction by name (fail-fast on unknown names) or pitch class
// - `transpose_note` / `are_enharmonic`
// - The "known flat key" rule shared by scale and chord spelling

use crate::error::TheoryError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sharp spellings indexed by pitch class.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spellings indexed by pitch class.
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Keys whose signatures use flats. Roots named here force flat spelling.
pub const FLAT_KEYS: [&str; 6] = ["F", "Bb", "Eb", "Ab", "Db", "Gb"];

/// An octave-reduced pitch: 0 = C, 1 = C#/Db, ... 11 = B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    /// Reduce any integer to its pitch class (negative values wrap).
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Shift by a signed number of semitones, mod 12.
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// Ascending semitone distance from `self` up to `other` (0-11).
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 + 12 - self.0) % 12
    }

    /// Spelling of this pitch class from the sharp or flat table.
    pub fn name(self, prefer_flat: bool) -> &'static str {
        if prefer_flat {
            FLAT_NAMES[self.0 as usize]
        } else {
            SHARP_NAMES[self.0 as usize]
        }
    }
}

impl From<PitchClass> for u8 {
    fn from(pc: PitchClass) -> u8 {
        pc.0
    }
}

impl TryFrom<u8> for PitchClass {
    type Error = TheoryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 12 {
            Ok(PitchClass(value))
        } else {
            Err(TheoryError::PitchClassOutOfRange(value))
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A set of pitch classes stored as a 12-bit mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub struct PitchClassSet(u16);

const PITCH_CLASS_MASK: u16 = 0x0fff;

impl PitchClassSet {
    pub const EMPTY: PitchClassSet = PitchClassSet(0);

    pub fn new() -> Self {
        PitchClassSet::EMPTY
    }

    pub fn insert(&mut self, pc: PitchClass) {
        self.0 |= 1 << pc.value();
    }

    pub fn contains(self, pc: PitchClass) -> bool {
        self.0 & (1 << pc.value()) != 0
    }

    /// True if every pitch class of `other` is also in `self`.
    pub fn is_superset(self, other: PitchClassSet) -> bool {
        other.0 & !self.0 == 0
    }

    pub fn union(self, other: PitchClassSet) -> PitchClassSet {
        PitchClassSet(self.0 | other.0)
    }

    pub fn difference(self, other: PitchClassSet) -> PitchClassSet {
        PitchClassSet(self.0 & !other.0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in ascending pitch-class order.
    pub fn iter(self) -> impl Iterator<Item = PitchClass> {
        (0..12u8)
            .filter(move |&pc| self.0 & (1 << pc) != 0)
            .map(PitchClass)
    }
}

impl From<PitchClassSet> for u16 {
    fn from(set: PitchClassSet) -> u16 {
        set.0
    }
}

impl TryFrom<u16> for PitchClassSet {
    type Error = TheoryError;

    fn try_from(mask: u16) -> Result<Self, Self::Error> {
        if mask & !PITCH_CLASS_MASK == 0 {
            Ok(PitchClassSet(mask))
        } else {
            Err(TheoryError::InvalidPitchClassSet(mask))
        }
    }
}

impl FromIterator<PitchClass> for PitchClassSet {
    fn from_iter<I: IntoIterator<Item = PitchClass>>(iter: I) -> Self {
        let mut set = PitchClassSet::new();
        for pc in iter {
            set.insert(pc);
        }
        set
    }
}

/// A pitch class with one concrete spelling.
///
/// Serializes as its name ("Bb") and deserializes through the same name
/// lookup as `parse_note`, so a bad name in data fails the same way a bad
/// name in code does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Note {
    pub pitch_class: PitchClass,
    pub name: &'static str,
}

impl Note {
    /// Spell a pitch class from the sharp or flat table.
    pub fn from_pitch_class(pc: PitchClass, prefer_flat: bool) -> Self {
        Note {
            pitch_class: pc,
            name: pc.name(prefer_flat),
        }
    }

    /// True if this spelling comes from the flat table and differs from the
    /// sharp one (Db, Eb, Gb, Ab, Bb).
    pub fn is_flat_spelled(&self) -> bool {
        self.name.len() > 1 && self.name.ends_with('b')
    }

    pub fn is_sharp_spelled(&self) -> bool {
        self.name.ends_with('#')
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_note(s)
    }
}

impl From<Note> for String {
    fn from(note: Note) -> String {
        note.name.to_string()
    }
}

// Hand-written: a derived impl would borrow `name` and only
// deserialize from 'static input.
impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        parse_note(&name).map_err(serde::de::Error::custom)
    }
}

/// Look up a note by name in the sharp table, then the flat table.
///
/// Names are matched exactly ("Bb", not "bb" or "B flat"). Anything else is
/// rejected rather than guessed at.
pub fn parse_note(name: &str) -> Result<Note, TheoryError> {
    let found = SHARP_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|pc| (pc, SHARP_NAMES[pc]))
        .or_else(|| {
            FLAT_NAMES
                .iter()
                .position(|&n| n == name)
                .map(|pc| (pc, FLAT_NAMES[pc]))
        });

    match found {
        Some((pc, spelled)) => Ok(Note {
            pitch_class: PitchClass(pc as u8),
            name: spelled,
        }),
        None => Err(TheoryError::UnknownNoteName(name.to_string())),
    }
}

/// Pitch class of a note name.
pub fn pitch_class_of(name: &str) -> Result<PitchClass, TheoryError> {
    parse_note(name).map(|n| n.pitch_class)
}

/// Transpose a note by `semitones` (mod 12) and respell it.
pub fn transpose_note(note: &Note, semitones: i32, prefer_flat: bool) -> Note {
    Note::from_pitch_class(note.pitch_class.transpose(semitones), prefer_flat)
}

/// Two notes are enharmonic when they share a pitch class.
pub fn are_enharmonic(a: &Note, b: &Note) -> bool {
    a.pitch_class == b.pitch_class
}

/// Whether a root name belongs to a conventionally flat key.
pub fn is_flat_key(name: &str) -> bool {
    FLAT_KEYS.contains(&name)
}
