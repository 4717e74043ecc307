// Interval naming from semitone distance.
//
// A fixed table covers the thirteen simple intervals from unison to octave.
// Anything outside that range (or a caller passing a compound distance) gets
// a generic "<N>st" interval so labelling never fails.
//
// Used by analysis.rs to label characteristic notes.

use crate::note::Note;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntervalQuality {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
    /// Fallback for distances outside the simple-interval table.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub semitones: i32,
    pub quality: IntervalQuality,
    /// Generic scale-step size (1 = unison, 8 = octave); 0 for fallback intervals.
    pub degree: u8,
    /// Short name: "P1", "m3", "A4", ...
    pub name: String,
}

/// (short name, quality, degree) for 0..=12 semitones.
const INTERVAL_TABLE: [(&str, IntervalQuality, u8); 13] = [
    ("P1", IntervalQuality::Perfect, 1),
    ("m2", IntervalQuality::Minor, 2),
    ("M2", IntervalQuality::Major, 2),
    ("m3", IntervalQuality::Minor, 3),
    ("M3", IntervalQuality::Major, 3),
    ("P4", IntervalQuality::Perfect, 4),
    ("A4", IntervalQuality::Augmented, 4),
    ("P5", IntervalQuality::Perfect, 5),
    ("m6", IntervalQuality::Minor, 6),
    ("M6", IntervalQuality::Major, 6),
    ("m7", IntervalQuality::Minor, 7),
    ("M7", IntervalQuality::Major, 7),
    ("P8", IntervalQuality::Perfect, 8),
];

/// Interval for a semitone count. Counts outside 0..=12 fall back to "<N>st".
pub fn interval_from_semitones(semitones: i32) -> Interval {
    match usize::try_from(semitones)
        .ok()
        .and_then(|i| INTERVAL_TABLE.get(i))
    {
        Some(&(name, quality, degree)) => Interval {
            semitones,
            quality,
            degree,
            name: name.to_string(),
        },
        None => Interval {
            semitones,
            quality: IntervalQuality::Other,
            degree: 0,
            name: format!("{semitones}st"),
        },
    }
}

/// Ascending interval from `from` up to `to`, reduced within one octave.
pub fn interval_between(from: &Note, to: &Note) -> Interval {
    interval_from_semitones(from.pitch_class.interval_to(to.pitch_class) as i32)
}
