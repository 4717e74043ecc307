// Property tests for the theory core: transposition, scale shape, chord
// patterns, and the generators' structural guarantees over every key.

use harmonia_theory::chord::{ChordQuality, create_chord};
use harmonia_theory::diatonic::get_diatonic_chords;
use harmonia_theory::modal_interchange::get_all_modal_interchange_chords;
use harmonia_theory::note::{FLAT_NAMES, SHARP_NAMES, parse_note, transpose_note};
use harmonia_theory::scale::{ScaleType, create_scale};
use harmonia_theory::secondary::{get_secondary_dominant_chords, get_tritone_substitution_chords};
use proptest::prelude::*;

fn any_note_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        prop::sample::select(SHARP_NAMES.to_vec()),
        prop::sample::select(FLAT_NAMES.to_vec()),
    ]
}

fn any_scale_type() -> impl Strategy<Value = ScaleType> {
    prop::sample::select(ScaleType::ALL.to_vec())
}

fn any_quality() -> impl Strategy<Value = ChordQuality> {
    prop::sample::select(ChordQuality::ALL.to_vec())
}

proptest! {
    /// Transposing up then down returns to the same pitch class.
    #[test]
    fn transpose_round_trip(name in any_note_name(), k in -48i32..48, flat in any::<bool>()) {
        let note = parse_note(name).unwrap();
        let there = transpose_note(&note, k, flat);
        let back = transpose_note(&there, -k, flat);
        prop_assert_eq!(back.pitch_class, note.pitch_class);
    }

    /// Every scale starts on its root and has 7 notes (8 for half-whole).
    #[test]
    fn scale_shape(name in any_note_name(), st in any_scale_type()) {
        let scale = create_scale(name, st).unwrap();
        prop_assert_eq!(scale.notes[0], parse_note(name).unwrap());
        let expected = if st == ScaleType::HalfWholeDiminished { 8 } else { 7 };
        prop_assert_eq!(scale.notes.len(), expected);
        for (note, &offset) in scale.notes.iter().zip(scale.pattern.iter()) {
            prop_assert_eq!(scale.root.pitch_class.interval_to(note.pitch_class), offset);
        }
    }

    /// Chord tones always match the quality's pattern.
    #[test]
    fn chord_matches_pattern(name in any_note_name(), q in any_quality()) {
        let chord = create_chord(name, q).unwrap();
        let offsets: Vec<u8> = chord
            .notes
            .iter()
            .map(|n| chord.root.pitch_class.interval_to(n.pitch_class))
            .collect();
        prop_assert_eq!(offsets.as_slice(), q.pattern());
    }

    /// Diatonic chords only use notes of the major scale.
    #[test]
    fn diatonic_chords_stay_in_key(name in any_note_name(), seventh in any::<bool>()) {
        let scale = create_scale(name, ScaleType::Major).unwrap();
        for info in get_diatonic_chords(name, seventh).unwrap() {
            for note in &info.chord.notes {
                prop_assert!(scale.contains(note), "{} not in {} major", note, name);
            }
        }
    }

    /// Tritone substitutes sit six semitones from their secondary dominants.
    #[test]
    fn tritone_subs_are_a_tritone_away(name in any_note_name(), seventh in any::<bool>()) {
        let secondaries = get_secondary_dominant_chords(name, seventh).unwrap();
        let subs = get_tritone_substitution_chords(name, seventh).unwrap();
        prop_assert_eq!(secondaries.len(), 5);
        for (sec, sub) in secondaries.iter().zip(subs.iter()) {
            prop_assert_eq!(sec.chord.root.pitch_class.interval_to(sub.chord.root.pitch_class), 6);
            prop_assert_eq!(sec.target_degree, sub.target_degree);
            prop_assert!(!sub.chord.root.name.contains('#'));
        }
    }

    /// A borrowed chord is unavailable exactly when the key already has it.
    #[test]
    fn availability_matches_native_set(name in any_note_name(), seventh in any::<bool>()) {
        let native = get_diatonic_chords(name, seventh).unwrap();
        for borrowed in get_all_modal_interchange_chords(name, seventh).unwrap() {
            let duplicated = native.iter().any(|n| {
                n.chord.root.pitch_class == borrowed.chord.root.pitch_class
                    && n.chord.quality == borrowed.chord.quality
            });
            prop_assert_eq!(borrowed.is_available, !duplicated);
        }
    }
}
