// Modal interchange: chords borrowed from parallel modes.
//
// Seven modal parents share the key's root: natural minor, harmonic minor,
// melodic minor, dorian, phrygian, lydian and mixolydian. Each has a fixed
// per-degree triad-quality sequence; seventh chords are the canonical
// `extend_to_seventh` of that triad. Chord roots are the parent scale's own
// pitch classes, so C phrygian yields Db, Eb, Ab, Bb roots. Degrees lowered
// relative to the major scale are always spelled as flats.
//
// A borrowed chord is marked available only when the native major key does
// not already contain a chord with the same root pitch class and quality.
// Unavailable chords are still returned so a caller can show them greyed out.
//
// The per-mode tables are generic: they ignore context such as mixolydian's
// I7 being dominant. available_scales.rs recomputes real qualities instead.

use crate::chord::{Chord, ChordQuality};
use crate::diatonic::{DiatonicChordInfo, format_roman_numeral, get_diatonic_chords};
use crate::error::TheoryError;
use crate::note::{Note, parse_note};
use crate::scale::{Scale, ScaleType, prefers_flat_spelling};
use serde::{Deserialize, Serialize};

/// A parallel mode that chords can be borrowed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalParent {
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
}

impl ModalParent {
    pub const ALL: [ModalParent; 7] = [
        ModalParent::NaturalMinor,
        ModalParent::HarmonicMinor,
        ModalParent::MelodicMinor,
        ModalParent::Dorian,
        ModalParent::Phrygian,
        ModalParent::Lydian,
        ModalParent::Mixolydian,
    ];

    pub fn scale_type(self) -> ScaleType {
        match self {
            ModalParent::NaturalMinor => ScaleType::NaturalMinor,
            ModalParent::HarmonicMinor => ScaleType::HarmonicMinor,
            ModalParent::MelodicMinor => ScaleType::MelodicMinor,
            ModalParent::Dorian => ScaleType::Dorian,
            ModalParent::Phrygian => ScaleType::Phrygian,
            ModalParent::Lydian => ScaleType::Lydian,
            ModalParent::Mixolydian => ScaleType::Mixolydian,
        }
    }

    pub fn from_scale_type(scale_type: ScaleType) -> Option<ModalParent> {
        ModalParent::ALL
            .into_iter()
            .find(|m| m.scale_type() == scale_type)
    }

    /// Resolve a scale-type id ("dorian", "harmonicMinor") to a modal parent.
    pub fn from_id(id: &str) -> Option<ModalParent> {
        ScaleType::from_id(id).and_then(ModalParent::from_scale_type)
    }

    /// Triad quality on each degree 1-7 of this mode.
    pub fn triad_qualities(self) -> [ChordQuality; 7] {
        use ChordQuality::{Augmented as Aug, Diminished as Dim, Major as Maj, Minor as Min};
        match self {
            ModalParent::NaturalMinor => [Min, Dim, Maj, Min, Min, Maj, Maj],
            ModalParent::HarmonicMinor => [Min, Dim, Aug, Min, Maj, Maj, Dim],
            ModalParent::MelodicMinor => [Min, Min, Aug, Maj, Maj, Dim, Dim],
            ModalParent::Dorian => [Min, Min, Maj, Maj, Min, Dim, Maj],
            ModalParent::Phrygian => [Min, Maj, Maj, Min, Dim, Maj, Min],
            ModalParent::Lydian => [Maj, Maj, Min, Dim, Maj, Min, Min],
            ModalParent::Mixolydian => [Maj, Min, Dim, Maj, Min, Min, Maj],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalInterchangeChordInfo {
    pub degree: usize,
    pub chord: Chord,
    pub source: ScaleType,
    pub roman_numeral: String,
    /// False when the native key already has this root and quality.
    pub is_available: bool,
}

/// "b" / "#" when a mode's degree sits below / above the major-scale degree.
fn accidental_prefix(scale_type: ScaleType, degree: usize) -> &'static str {
    let major = ScaleType::Major.pattern()[degree - 1] as i32;
    let modal = scale_type.pattern()[degree - 1] as i32;
    match modal - major {
        d if d < 0 => "b",
        d if d > 0 => "#",
        _ => "",
    }
}

fn in_native_key(native: &[DiatonicChordInfo], chord: &Chord) -> bool {
    native.iter().any(|n| {
        n.chord.root.pitch_class == chord.root.pitch_class && n.chord.quality == chord.quality
    })
}

/// Borrowed chords from one parallel mode of `key`.
pub fn get_modal_interchange_chords(
    key: &str,
    mode: ModalParent,
    seventh: bool,
) -> Result<Vec<ModalInterchangeChordInfo>, TheoryError> {
    let root = parse_note(key)?;
    let native = get_diatonic_chords(key, seventh)?;
    borrowed_from(&Scale::new(root, mode.scale_type()), mode, &native, seventh)
}

fn borrowed_from(
    scale: &Scale,
    mode: ModalParent,
    native: &[DiatonicChordInfo],
    seventh: bool,
) -> Result<Vec<ModalInterchangeChordInfo>, TheoryError> {
    let source = mode.scale_type();
    let prefer_flat = prefers_flat_spelling(&scale.root, source);

    mode.triad_qualities()
        .into_iter()
        .zip(&scale.notes)
        .enumerate()
        .map(|(i, (triad, &scale_note))| -> Result<_, TheoryError> {
            let degree = i + 1;
            let quality = if seventh { triad.extend_to_seventh() } else { triad };
            let prefix = accidental_prefix(source, degree);
            // Lowered degrees read as flats (bVII is Bb, never A#).
            let lowered = prefix == "b";
            let chord_root = if lowered {
                Note::from_pitch_class(scale_note.pitch_class, true)
            } else {
                scale_note
            };
            let chord = Chord::with_spelling(
                chord_root,
                quality,
                prefer_flat || lowered || quality.prefers_flat(),
            );
            let is_available = !in_native_key(native, &chord);
            Ok(ModalInterchangeChordInfo {
                degree,
                roman_numeral: format!("{prefix}{}", format_roman_numeral(degree, quality)?),
                chord,
                source,
                is_available,
            })
        })
        .collect()
}

/// Borrowed chords from every modal parent, in `ModalParent::ALL` order.
pub fn get_all_modal_interchange_chords(
    key: &str,
    seventh: bool,
) -> Result<Vec<ModalInterchangeChordInfo>, TheoryError> {
    let root = parse_note(key)?;
    let native = get_diatonic_chords(key, seventh)?;
    let mut all = Vec::new();
    for mode in ModalParent::ALL {
        all.extend(borrowed_from(&Scale::new(root, mode.scale_type()), mode, &native, seventh)?);
    }
    Ok(all)
}

/// Like `get_modal_interchange_chords`, but takes a mode id from the UI.
/// An id that names no modal parent yields an empty list.
pub fn get_modal_interchange_chords_by_id(
    key: &str,
    mode_id: &str,
    seventh: bool,
) -> Result<Vec<ModalInterchangeChordInfo>, TheoryError> {
    match ModalParent::from_id(mode_id) {
        Some(mode) => get_modal_interchange_chords(key, mode, seventh),
        None => {
            // Still validate the key so a bad note name is never hidden.
            parse_note(key)?;
            Ok(Vec::new())
        }
    }
}
