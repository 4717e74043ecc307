// Available-scales matcher.
//
// Given a chord at a degree of a key, which parent scales on that key's root
// actually contain it at that degree? The native major scale is answered
// straight from the diatonic tables. For the seven modal parents the generic
// per-mode quality tables in modal_interchange.rs are not trusted: they
// extend every triad the same way, so mixolydian's I7 would come out as a
// major 7th. Instead the chord is rebuilt by stacking every other note of the
// parent scale's real notes and naming the resulting interval pattern.
//
// A parent is kept only when both the stacked root's pitch class and the
// recomputed quality match the requested chord. Stacks that the quality table
// cannot name (e.g. harmonic minor's augmented major 7th) are skipped.

use crate::chord::{ChordQuality, identify_chord_quality};
use crate::diatonic::diatonic_quality;
use crate::error::TheoryError;
use crate::modal_interchange::ModalParent;
use crate::note::{Note, parse_note};
use crate::scale::{Scale, ScaleType};
use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableScale {
    pub scale_type: ScaleType,
    /// The parent scale, rooted on the key.
    pub scale: Scale,
}

/// Quality of the chord built in thirds on a 1-based degree of a 7-note scale.
///
/// `size` is 3 for a triad and 4 for a seventh chord. Returns the chord root
/// and the identified quality, or `None` for the quality when the stack has no
/// name in the chord table. A degree outside the scale is an error.
pub fn stacked_chord_at(
    scale: &Scale,
    degree: usize,
    size: usize,
) -> Result<(Note, Option<ChordQuality>), TheoryError> {
    let root = scale.degree(degree)?;
    let len = scale.notes.len();
    let intervals: Vec<u8> = (0..size)
        .map(|k| {
            let note = scale.notes[(degree - 1 + 2 * k) % len];
            root.pitch_class.interval_to(note.pitch_class)
        })
        .collect();
    Ok((root, identify_chord_quality(&intervals)))
}

/// Parent scales on `key_root` that realize `chord_root` + `chord_quality` at
/// `degree`. Native major first, then modal parents in `ModalParent::ALL`
/// order. A degree outside 1-7 matches nothing.
pub fn find_available_scales_for_chord(
    key_root: &str,
    degree: usize,
    chord_root: &str,
    chord_quality: ChordQuality,
) -> Result<Vec<AvailableScale>, TheoryError> {
    let key = parse_note(key_root)?;
    let chord_root = parse_note(chord_root)?;
    if !(1..=7).contains(&degree) {
        return Ok(Vec::new());
    }

    let seventh = chord_quality.is_seventh();
    let size = chord_quality.pattern().len();
    let mut found = Vec::new();

    let major = Scale::new(key, ScaleType::Major);
    let native_quality = diatonic_quality(degree, seventh)?;
    let native_root = major.degree(degree)?;
    if native_root.pitch_class == chord_root.pitch_class && native_quality == chord_quality {
        found.push(AvailableScale {
            scale_type: ScaleType::Major,
            scale: major,
        });
    }

    for mode in ModalParent::ALL {
        let scale = Scale::new(key, mode.scale_type());
        let (root, quality) = stacked_chord_at(&scale, degree, size)?;
        let Some(quality) = quality else {
            trace!(
                scale = mode.scale_type().id(),
                degree,
                "stacked thirds match no chord quality"
            );
            continue;
        };
        if root.pitch_class == chord_root.pitch_class && quality == chord_quality {
            found.push(AvailableScale {
                scale_type: mode.scale_type(),
                scale,
            });
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(found: &[AvailableScale]) -> Vec<ScaleType> {
        found.iter().map(|a| a.scale_type).collect()
    }

    #[test]
    fn dominant_on_five_includes_major() {
        let found = find_available_scales_for_chord("C", 5, "G", ChordQuality::Dominant7).unwrap();
        let types = types(&found);
        assert!(types.contains(&ScaleType::Major));
        // G B D F at degree 5 also lives in C harmonic and melodic minor.
        assert_eq!(
            types,
            vec![ScaleType::Major, ScaleType::HarmonicMinor, ScaleType::MelodicMinor]
        );
    }

    #[test]
    fn mixolydian_tonic_is_dominant() {
        let found = find_available_scales_for_chord("C", 1, "C", ChordQuality::Dominant7).unwrap();
        assert_eq!(types(&found), vec![ScaleType::Mixolydian]);
        let found = find_available_scales_for_chord("C", 1, "C", ChordQuality::Major7).unwrap();
        assert_eq!(types(&found), vec![ScaleType::Major, ScaleType::Lydian]);
    }

    #[test]
    fn borrowed_triad() {
        // Bb major at degree 7 of C: natural minor, dorian and mixolydian.
        let found = find_available_scales_for_chord("C", 7, "Bb", ChordQuality::Major).unwrap();
        assert_eq!(
            types(&found),
            vec![ScaleType::NaturalMinor, ScaleType::Dorian, ScaleType::Mixolydian]
        );
    }

    #[test]
    fn unnamed_stacks_are_skipped() {
        let minor = Scale::new(parse_note("A").unwrap(), ScaleType::HarmonicMinor);
        let (root, quality) = stacked_chord_at(&minor, 1, 4).unwrap();
        assert_eq!(root.name, "A");
        assert_eq!(quality, None);
        let (_, triad) = stacked_chord_at(&minor, 1, 3).unwrap();
        assert_eq!(triad, Some(ChordQuality::Minor));
    }

    #[test]
    fn stacking_outside_the_scale_fails() {
        let dorian = Scale::new(parse_note("C").unwrap(), ScaleType::Dorian);
        assert_eq!(
            stacked_chord_at(&dorian, 0, 3),
            Err(TheoryError::DegreeOutOfRange { degree: 0, max: 7 })
        );
        assert!(stacked_chord_at(&dorian, 8, 3).is_err());
        let (root, quality) = stacked_chord_at(&dorian, 7, 3).unwrap();
        assert_eq!((root.name, quality), ("Bb", Some(ChordQuality::Major)));
    }

    #[test]
    fn degree_out_of_range_is_empty() {
        assert!(find_available_scales_for_chord("C", 0, "C", ChordQuality::Major).unwrap().is_empty());
        assert!(find_available_scales_for_chord("C", 8, "C", ChordQuality::Major).unwrap().is_empty());
    }

    #[test]
    fn unknown_names_still_fail() {
        assert!(find_available_scales_for_chord("C", 5, "Gx", ChordQuality::Major).is_err());
        assert!(find_available_scales_for_chord("Cx", 9, "G", ChordQuality::Major).is_err());
    }
}
