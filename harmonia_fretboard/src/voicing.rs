// Chord voicing search.
//
// Finds playable six-string shapes for a chord by exhaustive backtracking.
// A search starts from a (bass string, root fret) pair: the bass string is
// one of 6, 5 or 4 and is fretted where it sounds the chord root; strings
// below it stay muted. Each higher string then chooses from a small candidate
// list, in this order:
//
//   1. open, if the open string is a chord tone
//   2. every chord-tone fret in [root fret - 2, root fret + 4] (never 0)
//   3. muted
//
// Partial assignments are pruned as soon as they exceed the fret span or the
// finger limit, or play a string after a muted one (muted strings may only
// trail off toward string 1). Complete assignments must sound every pitch
// class of the chord; survivors are scored by scoring.rs and the first
// strictly better score wins, so results are deterministic.
//
// Each start yields at most one voicing. Results are ordered by bass string
// (6, 5, 4) and then by root fret ascending. Depth is bounded by the six
// strings and branching by the window size, so a start visits at most a few
// thousand nodes.

use crate::scoring::{VoicingWeights, finger_count, fret_span, score_voicing};
use crate::tuning::{MAX_FRET, STRING_COUNT, Tuning};
use harmonia_theory::chord::Chord;
use harmonia_theory::note::{PitchClass, PitchClassSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Bass strings a voicing may start from, lowest first.
pub const BASS_STRINGS: [u8; 3] = [6, 5, 4];

/// Limits and weights for the voicing search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoicingConfig {
    /// Largest allowed distance between fretted notes.
    pub max_span: u8,
    /// Most fingers a shape may need (a barre counts once).
    pub max_fingers: u8,
    /// Frets below the root fret a higher string may use.
    pub window_below: u8,
    /// Frets above the root fret a higher string may use.
    pub window_above: u8,
    pub weights: VoicingWeights,
}

impl Default for VoicingConfig {
    fn default() -> Self {
        VoicingConfig {
            max_span: 3,
            max_fingers: 4,
            window_below: 2,
            window_above: 4,
            weights: VoicingWeights::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarreInfo {
    pub fret: u8,
    /// Lowest-pitched string under the barre (highest string number).
    pub from_string: u8,
    pub to_string: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordVoicing {
    pub chord: Chord,
    /// Fret per string, string 6 first. `None` is muted.
    pub frets: [Option<u8>; 6],
    pub root_string: u8,
    pub barre: Option<BarreInfo>,
    pub score: i32,
}

impl ChordVoicing {
    /// Fret on a string number, or `None` if muted or out of range.
    pub fn fret_on(&self, string: u8) -> Option<u8> {
        if !(1..=STRING_COUNT).contains(&string) {
            return None;
        }
        self.frets[string_index(string)]
    }

    pub fn played_pitch_classes(&self, tuning: &Tuning) -> PitchClassSet {
        (1..=STRING_COUNT)
            .filter_map(|s| {
                let fret = self.fret_on(s)?;
                Some(open_pitch_class(tuning, s).transpose(fret as i32))
            })
            .collect()
    }

    /// Chord-chart tab, low E first: `x32010`. Frets above 9 are
    /// parenthesized so the string stays unambiguous.
    pub fn to_tab_string(&self) -> String {
        self.frets
            .iter()
            .map(|f| match f {
                None => "x".to_string(),
                Some(f) if *f > 9 => format!("({f})"),
                Some(f) => f.to_string(),
            })
            .collect()
    }
}

impl fmt::Display for ChordVoicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.chord.symbol, self.to_tab_string())
    }
}

fn string_index(string: u8) -> usize {
    (STRING_COUNT - string) as usize
}

fn open_pitch_class(tuning: &Tuning, string: u8) -> PitchClass {
    tuning.low_to_high()[string_index(string)].pitch_class
}

/// Voicings with the default limits and weights.
pub fn find_chord_positions(chord: &Chord, tuning: &Tuning, max_fret: u8) -> Vec<ChordVoicing> {
    find_chord_positions_with(chord, tuning, max_fret, &VoicingConfig::default())
}

/// Best voicing for every (bass string, root fret) start that has one.
/// `max_fret` is clamped to the neck. An empty result is not an error.
pub fn find_chord_positions_with(
    chord: &Chord,
    tuning: &Tuning,
    max_fret: u8,
    config: &VoicingConfig,
) -> Vec<ChordVoicing> {
    let max_fret = max_fret.min(MAX_FRET);
    let chord_tones = chord.pitch_classes();
    let root = chord.root.pitch_class;
    let mut voicings = Vec::new();

    for bass in BASS_STRINGS {
        let open = open_pitch_class(tuning, bass);
        for root_fret in 0..=max_fret {
            if open.transpose(root_fret as i32) != root {
                continue;
            }
            let search = VoicingSearch {
                tuning,
                chord_tones,
                config,
                max_fret,
                bass,
                root_fret,
            };
            match search.best() {
                Some((frets, score)) => {
                    trace!(
                        chord = %chord.symbol,
                        bass,
                        root_fret,
                        score,
                        "voicing found"
                    );
                    voicings.push(ChordVoicing {
                        chord: chord.clone(),
                        frets,
                        root_string: bass,
                        barre: detect_barre(&frets),
                        score,
                    });
                }
                None => trace!(chord = %chord.symbol, bass, root_fret, "no voicing"),
            }
        }
    }

    debug!(
        chord = %chord.symbol,
        max_fret,
        count = voicings.len(),
        "voicing search finished"
    );
    voicings
}

/// One (bass string, root fret) search.
struct VoicingSearch<'a> {
    tuning: &'a Tuning,
    chord_tones: PitchClassSet,
    config: &'a VoicingConfig,
    max_fret: u8,
    bass: u8,
    root_fret: u8,
}

impl VoicingSearch<'_> {
    fn best(&self) -> Option<([Option<u8>; 6], i32)> {
        // Assignment for strings bass, bass-1, ..., 1 in that order.
        let mut assigned = Vec::with_capacity(self.bass as usize);
        assigned.push(Some(self.root_fret));
        let mut best = None;
        self.extend(&mut assigned, &mut best);
        best.map(|(assigned, score)| (self.to_frets(&assigned), score))
    }

    fn candidates(&self, string: u8) -> Vec<Option<u8>> {
        let open = open_pitch_class(self.tuning, string);
        let lo = self.root_fret.saturating_sub(self.config.window_below).max(1);
        let hi = self
            .root_fret
            .saturating_add(self.config.window_above)
            .min(self.max_fret);

        let mut out = Vec::new();
        if self.chord_tones.contains(open) {
            out.push(Some(0));
        }
        out.extend(
            (lo..=hi)
                .filter(|&f| self.chord_tones.contains(open.transpose(f as i32)))
                .map(Some),
        );
        out.push(None);
        out
    }

    fn extend(&self, assigned: &mut Vec<Option<u8>>, best: &mut Option<(Vec<Option<u8>>, i32)>) {
        let depth = assigned.len() as u8;
        if depth == self.bass {
            if !self.covers_chord(assigned) {
                return;
            }
            let score = score_voicing(assigned, self.root_fret, &self.config.weights);
            if best.as_ref().is_none_or(|(_, s)| score > *s) {
                *best = Some((assigned.clone(), score));
            }
            return;
        }

        let string = self.bass - depth;
        let after_mute = assigned.last().is_some_and(|f| f.is_none());
        for candidate in self.candidates(string) {
            if after_mute && candidate.is_some() {
                continue;
            }
            assigned.push(candidate);
            if self.within_limits(assigned) {
                self.extend(assigned, best);
            }
            assigned.pop();
        }
    }

    fn within_limits(&self, assigned: &[Option<u8>]) -> bool {
        fret_span(assigned) <= self.config.max_span
            && finger_count(assigned) <= self.config.max_fingers
    }

    fn covers_chord(&self, assigned: &[Option<u8>]) -> bool {
        let sounded: PitchClassSet = assigned
            .iter()
            .enumerate()
            .filter_map(|(i, f)| {
                let string = self.bass - i as u8;
                f.map(|f| open_pitch_class(self.tuning, string).transpose(f as i32))
            })
            .collect();
        sounded.is_superset(self.chord_tones)
    }

    fn to_frets(&self, assigned: &[Option<u8>]) -> [Option<u8>; 6] {
        let mut frets = [None; 6];
        for (i, f) in assigned.iter().enumerate() {
            frets[string_index(self.bass - i as u8)] = *f;
        }
        frets
    }
}

/// Barre at the lowest fretted fret when at least two strings share it and
/// every string between the outermost two is played.
pub fn detect_barre(frets: &[Option<u8>; 6]) -> Option<BarreInfo> {
    let min = frets.iter().flatten().copied().filter(|&f| f > 0).min()?;
    let at_min: Vec<usize> = (0..frets.len()).filter(|&i| frets[i] == Some(min)).collect();
    if at_min.len() < 2 {
        return None;
    }
    let (first, last) = (at_min[0], at_min[at_min.len() - 1]);
    if frets[first..=last].iter().any(Option::is_none) {
        return None;
    }
    Some(BarreInfo {
        fret: min,
        from_string: STRING_COUNT - first as u8,
        to_string: STRING_COUNT - last as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonia_theory::chord::{ChordQuality, create_chord};

    fn voicings(root: &str, quality: ChordQuality, max_fret: u8) -> Vec<ChordVoicing> {
        let chord = create_chord(root, quality).unwrap();
        find_chord_positions(&chord, &Tuning::standard(), max_fret)
    }

    #[test]
    fn open_c_major() {
        let found = voicings("C", ChordQuality::Major, 12);
        let open = found
            .iter()
            .find(|v| v.root_string == 5 && v.fret_on(5) == Some(3))
            .unwrap();
        assert_eq!(open.to_tab_string(), "x32010");
        assert_eq!(open.score, 98);
        assert_eq!(open.barre, None);
    }

    #[test]
    fn ordered_by_bass_then_root_fret() {
        let found = voicings("G", ChordQuality::Major, 12);
        let starts: Vec<(u8, u8)> = found
            .iter()
            .map(|v| (v.root_string, v.fret_on(v.root_string).unwrap()))
            .collect();
        let mut sorted = starts.clone();
        sorted.sort_by_key(|&(bass, fret)| (std::cmp::Reverse(bass), fret));
        assert_eq!(starts, sorted);
        assert!(starts.contains(&(6, 3)));
    }

    #[test]
    fn strings_below_root_are_muted() {
        for v in voicings("D", ChordQuality::Minor7, 12) {
            for s in (v.root_string + 1)..=6 {
                assert_eq!(v.fret_on(s), None, "{v}");
            }
        }
    }

    #[test]
    fn every_voicing_covers_the_chord() {
        let tuning = Tuning::standard();
        for quality in ChordQuality::ALL {
            let chord = create_chord("A", quality).unwrap();
            for v in find_chord_positions(&chord, &tuning, 12) {
                assert!(
                    v.played_pitch_classes(&tuning).is_superset(chord.pitch_classes()),
                    "{v}"
                );
            }
        }
    }

    #[test]
    fn f_sharp_major_is_a_full_barre() {
        // No open string is a chord tone, so the E-shape barre wins.
        let found = voicings("F#", ChordQuality::Major, 12);
        let shape = found
            .iter()
            .find(|v| v.root_string == 6 && v.fret_on(6) == Some(2))
            .unwrap();
        assert_eq!(shape.to_tab_string(), "244322");
        assert_eq!(shape.score, 93);
        assert_eq!(
            shape.barre,
            Some(BarreInfo {
                fret: 2,
                from_string: 6,
                to_string: 1
            })
        );
    }

    #[test]
    fn open_strings_beat_fretted_ones() {
        // F with the open A outscores the full barre.
        let found = voicings("F", ChordQuality::Major, 12);
        let first = found
            .iter()
            .find(|v| v.root_string == 6 && v.fret_on(6) == Some(1))
            .unwrap();
        assert_eq!(first.to_tab_string(), "103211");
        assert_eq!(first.score, 108);
    }

    #[test]
    fn barre_needs_played_strings_between() {
        assert_eq!(detect_barre(&[Some(3), None, Some(3), Some(4), None, None]), None);
        assert_eq!(
            detect_barre(&[None, Some(5), Some(7), Some(7), Some(6), Some(5)]),
            Some(BarreInfo {
                fret: 5,
                from_string: 5,
                to_string: 1
            })
        );
        assert_eq!(detect_barre(&[None, Some(3), Some(2), Some(0), Some(1), Some(0)]), None);
    }

    #[test]
    fn max_fret_limits_the_search() {
        assert!(voicings("C", ChordQuality::Major, 0).is_empty());
        for v in voicings("C", ChordQuality::Major, 5) {
            assert!(v.frets.iter().flatten().all(|&f| f <= 5), "{v}");
        }
        // Clamped to the neck.
        assert_eq!(
            voicings("E", ChordQuality::Major, 200),
            voicings("E", ChordQuality::Major, 24)
        );
    }

    #[test]
    fn tight_config_can_leave_nothing() {
        let chord = create_chord("C", ChordQuality::Diminished7).unwrap();
        let config = VoicingConfig {
            max_fingers: 1,
            ..VoicingConfig::default()
        };
        let found = find_chord_positions_with(&chord, &Tuning::standard(), 12, &config);
        assert!(found.is_empty());
    }

    #[test]
    fn tab_string_parenthesizes_high_frets() {
        let chord = create_chord("E", ChordQuality::Major).unwrap();
        let v = ChordVoicing {
            chord,
            frets: [Some(12), Some(14), Some(14), Some(13), Some(12), Some(12)],
            root_string: 6,
            barre: None,
            score: 0,
        };
        assert_eq!(v.to_tab_string(), "(12)(14)(14)(13)(12)(12)");
        assert_eq!(v.fret_on(7), None);
    }
}
