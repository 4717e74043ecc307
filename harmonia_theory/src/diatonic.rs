// Diatonic harmony of a major key.
//
// Builds the seven scale-degree chords of a major key from two fixed quality
// sequences (triads and sevenths), tags each with its harmonic function, and
// formats roman numerals.
//
// Roman numerals are driven by a declarative quality → (case, suffix) table:
// major-family qualities are uppercase, minor- and diminished-family are
// lowercase, augmented is uppercase with "+". The same formatter is used by
// modal_interchange.rs, secondary.rs and category.rs.

use crate::chord::{Chord, ChordQuality};
use crate::error::TheoryError;
use crate::note::parse_note;
use crate::scale::{Scale, ScaleType, prefers_flat_spelling};
use serde::{Deserialize, Serialize};

/// Triad qualities of degrees 1-7 of a major key.
pub const MAJOR_TRIAD_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];

/// Seventh-chord qualities of degrees 1-7 of a major key.
pub const MAJOR_SEVENTH_QUALITIES: [ChordQuality; 7] = [
    ChordQuality::Major7,
    ChordQuality::Minor7,
    ChordQuality::Minor7,
    ChordQuality::Major7,
    ChordQuality::Dominant7,
    ChordQuality::Minor7,
    ChordQuality::Minor7b5,
];

const ROMAN_NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordFunction {
    Tonic,
    Subdominant,
    Dominant,
}

impl ChordFunction {
    /// Function of a major-key degree: 1,3,6 tonic; 2,4 subdominant; 5,7 dominant.
    pub fn for_degree(degree: usize) -> Result<ChordFunction, TheoryError> {
        match degree {
            1 | 3 | 6 => Ok(ChordFunction::Tonic),
            2 | 4 => Ok(ChordFunction::Subdominant),
            5 | 7 => Ok(ChordFunction::Dominant),
            _ => Err(TheoryError::DegreeOutOfRange { degree, max: 7 }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumeralCase {
    Upper,
    Lower,
}

/// How a quality is written after its numeral.
fn numeral_style(quality: ChordQuality) -> (NumeralCase, &'static str) {
    match quality {
        ChordQuality::Major => (NumeralCase::Upper, ""),
        ChordQuality::Major7 => (NumeralCase::Upper, "M7"),
        ChordQuality::Dominant7 => (NumeralCase::Upper, "7"),
        ChordQuality::Minor => (NumeralCase::Lower, ""),
        ChordQuality::Minor7 => (NumeralCase::Lower, "m7"),
        ChordQuality::Diminished => (NumeralCase::Lower, "°"),
        ChordQuality::Minor7b5 => (NumeralCase::Lower, "m7(b5)"),
        ChordQuality::Diminished7 => (NumeralCase::Lower, "dim7"),
        ChordQuality::Augmented => (NumeralCase::Upper, "+"),
        ChordQuality::Augmented7 => (NumeralCase::Upper, "+7"),
    }
}

/// Roman numeral for a 1-based degree and quality ("ii", "V7", "vii°").
pub fn format_roman_numeral(degree: usize, quality: ChordQuality) -> Result<String, TheoryError> {
    let Some(base) = degree.checked_sub(1).and_then(|i| ROMAN_NUMERALS.get(i)) else {
        return Err(TheoryError::DegreeOutOfRange { degree, max: 7 });
    };
    let (case, suffix) = numeral_style(quality);
    Ok(match case {
        NumeralCase::Upper => format!("{base}{suffix}"),
        NumeralCase::Lower => format!("{}{suffix}", base.to_lowercase()),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiatonicChordInfo {
    pub degree: usize,
    pub roman_numeral: String,
    pub chord: Chord,
    pub function: ChordFunction,
}

/// Quality of a major-key degree (1-7).
pub fn diatonic_quality(degree: usize, seventh: bool) -> Result<ChordQuality, TheoryError> {
    if !(1..=7).contains(&degree) {
        return Err(TheoryError::DegreeOutOfRange { degree, max: 7 });
    }
    Ok(if seventh {
        MAJOR_SEVENTH_QUALITIES[degree - 1]
    } else {
        MAJOR_TRIAD_QUALITIES[degree - 1]
    })
}

fn build_degree(scale: &Scale, degree: usize, seventh: bool) -> Result<DiatonicChordInfo, TheoryError> {
    let quality = diatonic_quality(degree, seventh)?;
    let root = scale.degree(degree)?;
    let prefer_flat = prefers_flat_spelling(&scale.root, ScaleType::Major);
    Ok(DiatonicChordInfo {
        degree,
        roman_numeral: format_roman_numeral(degree, quality)?,
        chord: Chord::with_spelling(root, quality, prefer_flat),
        function: ChordFunction::for_degree(degree)?,
    })
}

/// All seven chords of a major key, as triads or sevenths.
pub fn get_diatonic_chords(key: &str, seventh: bool) -> Result<Vec<DiatonicChordInfo>, TheoryError> {
    let scale = Scale::new(parse_note(key)?, ScaleType::Major);
    (1..=7).map(|d| build_degree(&scale, d, seventh)).collect()
}

pub fn get_diatonic_triads(key: &str) -> Result<Vec<DiatonicChordInfo>, TheoryError> {
    get_diatonic_chords(key, false)
}

pub fn get_diatonic_sevenths(key: &str) -> Result<Vec<DiatonicChordInfo>, TheoryError> {
    get_diatonic_chords(key, true)
}

/// One degree of a major key; degrees outside 1-7 fail.
pub fn get_diatonic_chord(
    key: &str,
    degree: usize,
    seventh: bool,
) -> Result<DiatonicChordInfo, TheoryError> {
    let scale = Scale::new(parse_note(key)?, ScaleType::Major);
    build_degree(&scale, degree, seventh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_major_triads() {
        let chords = get_diatonic_triads("C").unwrap();
        let symbols: Vec<&str> = chords.iter().map(|c| c.chord.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);
        let numerals: Vec<&str> = chords.iter().map(|c| c.roman_numeral.as_str()).collect();
        assert_eq!(numerals, vec!["I", "ii", "iii", "IV", "V", "vi", "vii°"]);
    }

    #[test]
    fn c_major_sevenths() {
        let chords = get_diatonic_sevenths("C").unwrap();
        let symbols: Vec<&str> = chords.iter().map(|c| c.chord.symbol.as_str()).collect();
        assert_eq!(
            symbols,
            vec!["Cmaj7", "Dm7", "Em7", "Fmaj7", "G7", "Am7", "Bm7b5"]
        );
        let numerals: Vec<&str> = chords.iter().map(|c| c.roman_numeral.as_str()).collect();
        assert_eq!(
            numerals,
            vec!["IM7", "iim7", "iiim7", "IVM7", "V7", "vim7", "viim7(b5)"]
        );
    }

    #[test]
    fn functions() {
        let chords = get_diatonic_triads("G").unwrap();
        let functions: Vec<ChordFunction> = chords.iter().map(|c| c.function).collect();
        use ChordFunction::*;
        assert_eq!(
            functions,
            vec![Tonic, Subdominant, Tonic, Subdominant, Dominant, Tonic, Dominant]
        );
    }

    #[test]
    fn flat_key_spelling() {
        let chords = get_diatonic_triads("Eb").unwrap();
        let symbols: Vec<&str> = chords.iter().map(|c| c.chord.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["Eb", "Fm", "Gm", "Ab", "Bb", "Cm", "Ddim"]);
        let ab = &chords[3].chord;
        let names: Vec<&str> = ab.notes.iter().map(|n| n.name).collect();
        assert_eq!(names, vec!["Ab", "C", "Eb"]);
    }

    #[test]
    fn sharp_key_spelling() {
        let chords = get_diatonic_triads("E").unwrap();
        let symbols: Vec<&str> = chords.iter().map(|c| c.chord.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["E", "F#m", "G#m", "A", "B", "C#m", "D#dim"]);
    }

    #[test]
    fn numeral_table_covers_every_quality() {
        assert_eq!(format_roman_numeral(3, ChordQuality::Augmented).unwrap(), "III+");
        assert_eq!(format_roman_numeral(3, ChordQuality::Augmented7).unwrap(), "III+7");
        assert_eq!(format_roman_numeral(7, ChordQuality::Diminished7).unwrap(), "viidim7");
        assert_eq!(format_roman_numeral(1, ChordQuality::Minor).unwrap(), "i");
    }

    #[test]
    fn numerals_and_functions_reject_bad_degrees() {
        for degree in [0, 8, 15] {
            assert_eq!(
                format_roman_numeral(degree, ChordQuality::Major),
                Err(TheoryError::DegreeOutOfRange { degree, max: 7 })
            );
            assert_eq!(
                ChordFunction::for_degree(degree),
                Err(TheoryError::DegreeOutOfRange { degree, max: 7 })
            );
        }
        assert_eq!(ChordFunction::for_degree(7), Ok(ChordFunction::Dominant));
    }

    #[test]
    fn degree_out_of_range_fails() {
        assert!(get_diatonic_chord("C", 0, false).is_err());
        assert!(get_diatonic_chord("C", 8, true).is_err());
        assert_eq!(get_diatonic_chord("C", 5, true).unwrap().chord.symbol, "G7");
    }

    #[test]
    fn unknown_key_fails() {
        assert!(get_diatonic_triads("X").is_err());
    }
}
