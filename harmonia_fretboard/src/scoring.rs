// Voicing scoring: how playable and how full a fret assignment is.
//
// A complete assignment is scored as a weighted sum:
//
//   played strings   (reward)  every non-muted string
//   open strings     (reward)  every string played at fret 0
//   span             (penalty) highest minus lowest fretted (>0) fret
//   root distance    (penalty) sum of |fret - root fret| over fretted strings
//   fingers          (penalty) see `finger_count`
//
// The same span and finger measures double as pruning limits in voicing.rs,
// so they are computed here over partial assignments too. Assignments are
// slices of `Option<u8>` (None = muted) in any string order; none of the
// measures depend on order.

use serde::{Deserialize, Serialize};

/// Weights for voicing scoring. Tunable parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoicingWeights {
    pub played_string: i32,
    pub open_string: i32,
    pub span: i32,
    pub root_distance: i32,
    pub finger: i32,
}

impl Default for VoicingWeights {
    fn default() -> Self {
        VoicingWeights {
            played_string: 20,
            open_string: 10,
            span: -5,
            root_distance: -1,
            finger: -3,
        }
    }
}

fn fretted(frets: &[Option<u8>]) -> impl Iterator<Item = u8> + '_ {
    frets.iter().filter_map(|f| f.filter(|&f| f > 0))
}

/// Distance between the highest and lowest fretted (>0) frets. Open and
/// muted strings do not count; zero when nothing is fretted.
pub fn fret_span(frets: &[Option<u8>]) -> u8 {
    let mut it = fretted(frets);
    let Some(first) = it.next() else {
        return 0;
    };
    let (lo, hi) = it.fold((first, first), |(lo, hi), f| (lo.min(f), hi.max(f)));
    hi - lo
}

/// Fingers needed to fret an assignment. Two or more strings at the lowest
/// fretted fret are taken by one barre finger; every other fretted string
/// needs its own.
pub fn finger_count(frets: &[Option<u8>]) -> u8 {
    let Some(min) = fretted(frets).min() else {
        return 0;
    };
    let total = fretted(frets).count() as u8;
    let at_min = fretted(frets).filter(|&f| f == min).count() as u8;
    if at_min >= 2 {
        1 + (total - at_min)
    } else {
        total
    }
}

pub fn score_voicing(frets: &[Option<u8>], root_fret: u8, weights: &VoicingWeights) -> i32 {
    let played = frets.iter().flatten().count() as i32;
    let open = frets.iter().flatten().filter(|&&f| f == 0).count() as i32;
    let distance: i32 = fretted(frets)
        .map(|f| (f as i32 - root_fret as i32).abs())
        .sum();

    weights.played_string * played
        + weights.open_string * open
        + weights.span * fret_span(frets) as i32
        + weights.root_distance * distance
        + weights.finger * finger_count(frets) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low E to high E.
    const C_OPEN: [Option<u8>; 6] = [None, Some(3), Some(2), Some(0), Some(1), Some(0)];
    const F_BARRE: [Option<u8>; 6] = [Some(1), Some(3), Some(3), Some(2), Some(1), Some(1)];

    #[test]
    fn span_ignores_open_and_muted() {
        assert_eq!(fret_span(&C_OPEN), 2);
        assert_eq!(fret_span(&F_BARRE), 2);
        assert_eq!(fret_span(&[None, Some(0), Some(0)]), 0);
        assert_eq!(fret_span(&[]), 0);
    }

    #[test]
    fn barre_counts_as_one_finger() {
        assert_eq!(finger_count(&C_OPEN), 3);
        // Index barre on fret 1 plus three more fingers.
        assert_eq!(finger_count(&F_BARRE), 4);
        assert_eq!(finger_count(&[Some(5), Some(5), Some(5)]), 1);
        assert_eq!(finger_count(&[Some(0), None]), 0);
    }

    #[test]
    fn open_c_score() {
        // 5 played * 20 + 2 open * 10 - 5 * 2 - (0 + 1 + 2) - 3 * 3
        assert_eq!(score_voicing(&C_OPEN, 3, &VoicingWeights::default()), 98);
    }

    #[test]
    fn weights_are_applied() {
        let weights = VoicingWeights {
            played_string: 1,
            open_string: 0,
            span: 0,
            root_distance: 0,
            finger: 0,
        };
        assert_eq!(score_voicing(&F_BARRE, 1, &weights), 6);
    }

    #[test]
    fn weights_deserialize_with_defaults() {
        let weights: VoicingWeights = serde_json::from_str(r#"{"open_string": 0}"#).unwrap();
        assert_eq!(weights.open_string, 0);
        assert_eq!(weights.played_string, 20);
    }
}
