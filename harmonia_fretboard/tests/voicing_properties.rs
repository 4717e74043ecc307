// Property tests for the voicing search: every voicing it returns sounds the
// whole chord, fits the hand, has no gaps, and comes out the same every time.

use harmonia_fretboard::Tuning;
use harmonia_fretboard::scoring::{finger_count, fret_span};
use harmonia_fretboard::voicing::{VoicingConfig, find_chord_positions, find_chord_positions_with};
use harmonia_theory::chord::{ChordQuality, create_chord};
use harmonia_theory::note::SHARP_NAMES;
use proptest::prelude::*;

fn any_root() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SHARP_NAMES.to_vec())
}

fn any_quality() -> impl Strategy<Value = ChordQuality> {
    prop::sample::select(ChordQuality::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn voicings_cover_the_chord(root in any_root(), q in any_quality(), max_fret in 0u8..=15) {
        let tuning = Tuning::standard();
        let chord = create_chord(root, q).unwrap();
        for v in find_chord_positions(&chord, &tuning, max_fret) {
            prop_assert!(
                v.played_pitch_classes(&tuning).is_superset(chord.pitch_classes()),
                "{} misses chord tones", v
            );
            prop_assert!(v.frets.iter().flatten().all(|&f| f <= max_fret));
        }
    }

    #[test]
    fn voicings_fit_the_hand(root in any_root(), q in any_quality()) {
        let chord = create_chord(root, q).unwrap();
        for v in find_chord_positions(&chord, &Tuning::standard(), 12) {
            prop_assert!(fret_span(&v.frets) <= 3, "{}", v);
            prop_assert!(finger_count(&v.frets) <= 4, "{}", v);
        }
    }

    #[test]
    fn no_gaps_and_nothing_below_the_root(root in any_root(), q in any_quality()) {
        let chord = create_chord(root, q).unwrap();
        for v in find_chord_positions(&chord, &Tuning::standard(), 12) {
            // Low E first: muted strings, then a played run, then muted.
            let played: Vec<usize> = (0..6).filter(|&i| v.frets[i].is_some()).collect();
            let (lo, hi) = (played[0], played[played.len() - 1]);
            prop_assert!(v.frets[lo..=hi].iter().all(Option::is_some), "{}", v);
            prop_assert_eq!(lo, 6 - v.root_string as usize);
            prop_assert_eq!(v.fret_on(v.root_string).map(|f| {
                Tuning::standard().open_note(v.root_string).unwrap().pitch_class.transpose(f as i32)
            }), Some(chord.root.pitch_class));
        }
    }

    #[test]
    fn search_is_deterministic(root in any_root(), q in any_quality(), max_span in 2u8..=4) {
        let chord = create_chord(root, q).unwrap();
        let config = VoicingConfig { max_span, ..VoicingConfig::default() };
        let tuning = Tuning::standard();
        let first = find_chord_positions_with(&chord, &tuning, 12, &config);
        let second = find_chord_positions_with(&chord, &tuning, 12, &config);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn common_chords_have_voicings() {
    let tuning = Tuning::standard();
    for root in SHARP_NAMES {
        for q in [ChordQuality::Major, ChordQuality::Minor, ChordQuality::Dominant7] {
            let chord = create_chord(root, q).unwrap();
            assert!(
                !find_chord_positions(&chord, &tuning, 12).is_empty(),
                "no voicing for {}",
                chord.symbol
            );
        }
    }
}
