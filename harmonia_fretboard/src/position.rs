// Fretboard position mapper.
//
// Every finder scans the same grid, string 1 (high) to string 6 (low) and
// fret 0 up to `max_fret` (clamped to the neck), and keeps positions whose
// pitch class is in a target set. A kept position is spelled the way the
// target spells it, so Bb in a flat scale shows as Bb rather than A#.
//
// The overlay finder combines a scale and a chord for display: each position
// gets the strongest role it qualifies for (chord root, then chord tone, then
// scale tone) and a flag for the scale's characteristic notes.

use crate::error::FretboardError;
use crate::tuning::{MAX_FRET, Tuning};
use harmonia_theory::analysis::characteristic_intervals;
use harmonia_theory::chord::Chord;
use harmonia_theory::note::{Note, PitchClass, PitchClassSet, parse_note};
use harmonia_theory::scale::Scale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FretPosition {
    pub string: u8,
    pub fret: u8,
    pub note: Note,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoteRole {
    ChordRoot,
    ChordTone,
    ScaleTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayPosition {
    pub position: FretPosition,
    pub role: NoteRole,
    pub is_characteristic: bool,
}

/// Note at a string/fret, sharp-spelled.
pub fn get_note_at_position(tuning: &Tuning, string: u8, fret: u8) -> Result<Note, FretboardError> {
    tuning.note_at(string, fret)
}

/// Scan the grid, keeping positions for which `spell` returns a note.
fn scan(
    tuning: &Tuning,
    max_fret: u8,
    mut spell: impl FnMut(PitchClass) -> Option<Note>,
) -> Vec<FretPosition> {
    let max_fret = max_fret.min(MAX_FRET);
    let mut out = Vec::new();
    for (i, open) in tuning.low_to_high().iter().rev().enumerate() {
        let string = i as u8 + 1;
        for fret in 0..=max_fret {
            if let Some(note) = spell(open.pitch_class.transpose(fret as i32)) {
                out.push(FretPosition { string, fret, note });
            }
        }
    }
    out
}

fn spelled_in(notes: &[Note], pc: PitchClass) -> Option<Note> {
    notes.iter().find(|n| n.pitch_class == pc).copied()
}

pub fn find_note_positions(
    note: &str,
    tuning: &Tuning,
    max_fret: u8,
) -> Result<Vec<FretPosition>, FretboardError> {
    let target = parse_note(note)?;
    Ok(scan(tuning, max_fret, |pc| (pc == target.pitch_class).then_some(target)))
}

pub fn find_scale_positions(scale: &Scale, tuning: &Tuning, max_fret: u8) -> Vec<FretPosition> {
    scan(tuning, max_fret, |pc| spelled_in(&scale.notes, pc))
}

pub fn find_chord_tone_positions(chord: &Chord, tuning: &Tuning, max_fret: u8) -> Vec<FretPosition> {
    scan(tuning, max_fret, |pc| spelled_in(&chord.notes, pc))
}

/// Union of scale and chord positions with roles. Chord tones use the
/// chord's spelling, scale-only tones the scale's.
pub fn find_overlay_positions(
    scale: &Scale,
    chord: &Chord,
    tuning: &Tuning,
    max_fret: u8,
) -> Vec<OverlayPosition> {
    let characteristic: PitchClassSet = characteristic_intervals(scale.scale_type)
        .iter()
        .map(|&offset| scale.root.pitch_class.transpose(offset as i32))
        .collect();
    let chord_tones = chord.pitch_classes();

    scan(tuning, max_fret, |pc| {
        spelled_in(&chord.notes, pc).or_else(|| spelled_in(&scale.notes, pc))
    })
    .into_iter()
    .map(|position| {
        let pc = position.note.pitch_class;
        let role = if pc == chord.root.pitch_class {
            NoteRole::ChordRoot
        } else if chord_tones.contains(pc) {
            NoteRole::ChordTone
        } else {
            NoteRole::ScaleTone
        };
        OverlayPosition {
            position,
            role,
            is_characteristic: characteristic.contains(pc),
        }
    })
    .collect()
}
