// Secondary dominants and tritone substitutions.
//
// For each target degree 2-6 of a major key, the secondary dominant is the
// major (or dominant 7th) chord a perfect fifth above the target's root, and
// its tritone substitute sits a tritone away from that. Degree 7 is never a
// target: a diminished chord is not tonicized here.
//
// Both generators spell the new root, and its chord tones, with flats no
// matter which key they are in. This is jazz lead-sheet convention: SubV of
// V in G is Eb7, not D#7, because it resolves down a half step.
//
// Naming: "V/ii", "V7/ii", "SubV/ii", "SubV7/ii". The target numeral is
// always the triad numeral from diatonic.rs.

use crate::chord::{Chord, ChordQuality};
use crate::diatonic::{DiatonicChordInfo, get_diatonic_triads};
use crate::error::TheoryError;
use crate::note::transpose_note;
use serde::{Deserialize, Serialize};

/// Degrees that can be tonicized by a secondary dominant.
pub const SECONDARY_TARGET_DEGREES: [usize; 5] = [2, 3, 4, 5, 6];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryDominantChordInfo {
    pub chord: Chord,
    pub target_degree: usize,
    pub target_roman_numeral: String,
    pub roman_numeral: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TritoneSubstitutionChordInfo {
    pub chord: Chord,
    pub target_degree: usize,
    pub target_roman_numeral: String,
    pub roman_numeral: String,
}

fn dominant_quality(seventh: bool) -> ChordQuality {
    if seventh {
        ChordQuality::Dominant7
    } else {
        ChordQuality::Major
    }
}

fn targets(triads: &[DiatonicChordInfo]) -> impl Iterator<Item = &DiatonicChordInfo> {
    triads
        .iter()
        .filter(|t| SECONDARY_TARGET_DEGREES.contains(&t.degree))
}

/// Secondary dominant chord of one diatonic target.
fn secondary_of(target: &DiatonicChordInfo, seventh: bool) -> Chord {
    let root = transpose_note(&target.chord.root, 7, true);
    Chord::with_spelling(root, dominant_quality(seventh), true)
}

/// V/x for x in ii, iii, IV, V, vi.
pub fn get_secondary_dominant_chords(
    key: &str,
    seventh: bool,
) -> Result<Vec<SecondaryDominantChordInfo>, TheoryError> {
    let triads = get_diatonic_triads(key)?;
    let v = if seventh { "V7" } else { "V" };
    Ok(targets(&triads)
        .map(|target| SecondaryDominantChordInfo {
            chord: secondary_of(target, seventh),
            target_degree: target.degree,
            target_roman_numeral: target.roman_numeral.clone(),
            roman_numeral: format!("{v}/{}", target.roman_numeral),
        })
        .collect())
}

/// SubV/x: each secondary dominant's root moved by a tritone.
pub fn get_tritone_substitution_chords(
    key: &str,
    seventh: bool,
) -> Result<Vec<TritoneSubstitutionChordInfo>, TheoryError> {
    let triads = get_diatonic_triads(key)?;
    let subv = if seventh { "SubV7" } else { "SubV" };
    Ok(targets(&triads)
        .map(|target| {
            let secondary = secondary_of(target, seventh);
            let root = transpose_note(&secondary.root, 6, true);
            TritoneSubstitutionChordInfo {
                chord: Chord::with_spelling(root, dominant_quality(seventh), true),
                target_degree: target.degree,
                target_roman_numeral: target.roman_numeral.clone(),
                roman_numeral: format!("{subv}/{}", target.roman_numeral),
            }
        })
        .collect())
}
