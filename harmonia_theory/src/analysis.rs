// Characteristic-note and avoid-note analysis.
//
// Characteristic notes: for every scale type, the one or two intervals above
// the root that most distinguish it from its nearest relative (major's P4
// against lydian, dorian's M6 against natural minor, melodic minor's M6 and M7
// against natural minor). Fixed table, exhaustive over `ScaleType`.
//
// Avoid notes: a scale tone is an avoid note over a chord when it sits exactly
// one semitone above a chord tone and is not itself a chord tone (F over Cmaj7
// in C major). Both computations are pitch-class set work, O(scale × chord).
//
// Used by the fretboard overlay (harmonia_fretboard::position) to flag
// characteristic positions.

use crate::chord::{Chord, ChordQuality};
use crate::error::TheoryError;
use crate::interval::{Interval, interval_from_semitones};
use crate::note::{Note, PitchClassSet, parse_note};
use crate::scale::{Scale, ScaleType};
use serde::{Deserialize, Serialize};

/// Semitone offsets of the characteristic tones of a scale type.
pub fn characteristic_intervals(scale_type: ScaleType) -> &'static [u8] {
    match scale_type {
        ScaleType::Major => &[5],
        ScaleType::NaturalMinor => &[8],
        ScaleType::HarmonicMinor => &[8, 11],
        ScaleType::MelodicMinor => &[9, 11],
        ScaleType::Dorian => &[9],
        ScaleType::Phrygian => &[1],
        ScaleType::Lydian => &[6],
        ScaleType::Mixolydian => &[10],
        ScaleType::Locrian => &[1, 6],
        ScaleType::LydianDominant => &[6, 10],
        ScaleType::Altered => &[1, 3],
        ScaleType::PhrygianDominant => &[1, 4],
        ScaleType::LocrianNatural2 => &[2, 6],
        ScaleType::HalfWholeDiminished => &[1, 9],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacteristicNote {
    pub note: Note,
    pub interval: Interval,
}

/// Characteristic tones of `scale`, spelled as the scale spells them.
pub fn characteristic_notes_of(scale: &Scale) -> Vec<CharacteristicNote> {
    characteristic_intervals(scale.scale_type)
        .iter()
        .filter_map(|&offset| {
            let pc = scale.root.pitch_class.transpose(offset as i32);
            scale
                .notes
                .iter()
                .find(|n| n.pitch_class == pc)
                .map(|&note| CharacteristicNote {
                    note,
                    interval: interval_from_semitones(offset as i32),
                })
        })
        .collect()
}

pub fn get_characteristic_notes(
    root: &str,
    scale_type: ScaleType,
) -> Result<Vec<CharacteristicNote>, TheoryError> {
    Ok(characteristic_notes_of(&Scale::new(parse_note(root)?, scale_type)))
}

pub fn get_characteristic_pitch_classes(
    root: &str,
    scale_type: ScaleType,
) -> Result<PitchClassSet, TheoryError> {
    let root = parse_note(root)?;
    Ok(characteristic_intervals(scale_type)
        .iter()
        .map(|&offset| root.pitch_class.transpose(offset as i32))
        .collect())
}

/// Scale tones a half step above a chord tone that are not chord tones.
pub fn avoid_pitch_classes(scale: &Scale, chord: &Chord) -> PitchClassSet {
    let chord_tones = chord.pitch_classes();
    scale
        .notes
        .iter()
        .map(|n| n.pitch_class)
        .filter(|&pc| !chord_tones.contains(pc) && chord_tones.contains(pc.transpose(-1)))
        .collect()
}

/// Avoid notes of `scale` over `chord`, in scale order and scale spelling.
pub fn avoid_notes(scale: &Scale, chord: &Chord) -> Vec<Note> {
    let avoid = avoid_pitch_classes(scale, chord);
    scale
        .notes
        .iter()
        .filter(|n| avoid.contains(n.pitch_class))
        .copied()
        .collect()
}

pub fn get_avoid_notes(
    scale_root: &str,
    scale_type: ScaleType,
    chord_root: &str,
    chord_quality: ChordQuality,
) -> Result<Vec<Note>, TheoryError> {
    let scale = Scale::new(parse_note(scale_root)?, scale_type);
    let chord = Chord::new(parse_note(chord_root)?, chord_quality);
    Ok(avoid_notes(&scale, &chord))
}

pub fn get_avoid_pitch_classes(
    scale_root: &str,
    scale_type: ScaleType,
    chord_root: &str,
    chord_quality: ChordQuality,
) -> Result<PitchClassSet, TheoryError> {
    let scale = Scale::new(parse_note(scale_root)?, scale_type);
    let chord = Chord::new(parse_note(chord_root)?, chord_quality);
    Ok(avoid_pitch_classes(&scale, &chord))
}
