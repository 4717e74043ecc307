// Genre chord palettes.
//
// Each category is a fixed, ordered list of chords described relative to the
// tonic: a degree, a semitone offset, triad and seventh qualities, where the
// chord comes from (the key itself, a secondary dominant, or a borrowed
// scale), and its harmonic function. Nothing is searched or derived: the
// entries are transposed onto the requested key and named with the same
// roman-numeral rules as diatonic.rs, plus a leading "b" for lowered roots.
//
// Entries are in the order a palette UI presents them.

use crate::chord::{Chord, ChordQuality};
use crate::diatonic::{ChordFunction, format_roman_numeral};
use crate::error::TheoryError;
use crate::note::{is_flat_key, parse_note, transpose_note};
use crate::scale::ScaleType;
use serde::{Deserialize, Serialize};

/// Where a palette chord comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordSource {
    Diatonic,
    SecondaryDominant,
    /// Borrowed from a parallel scale on the same tonic.
    Scale(ScaleType),
}

/// One declarative palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    pub degree: usize,
    /// Root is a lowered degree; numeral gets a "b" and the root is spelled flat.
    pub flat: bool,
    /// Semitones above the tonic.
    pub offset: u8,
    pub triad: ChordQuality,
    pub seventh: ChordQuality,
    pub source: ChordSource,
    pub function: ChordFunction,
}

const fn entry(
    degree: usize,
    flat: bool,
    offset: u8,
    triad: ChordQuality,
    seventh: ChordQuality,
    source: ChordSource,
    function: ChordFunction,
) -> CategoryEntry {
    CategoryEntry {
        degree,
        flat,
        offset,
        triad,
        seventh,
        source,
        function,
    }
}

use ChordFunction::{Dominant as D, Subdominant as S, Tonic as T};
use ChordQuality::{
    Diminished as Dim, Dominant7 as Dom7, Major as Maj, Major7 as Maj7, Minor as Min,
    Minor7 as Min7, Minor7b5 as Min7b5,
};
use ChordSource::{Diatonic, SecondaryDominant as SecDom};

const POP: &[CategoryEntry] = &[
    entry(1, false, 0, Maj, Maj7, Diatonic, T),
    entry(4, false, 5, Maj, Maj7, Diatonic, S),
    entry(5, false, 7, Maj, Dom7, Diatonic, D),
    entry(6, false, 9, Min, Min7, Diatonic, T),
    entry(2, false, 2, Min, Min7, Diatonic, S),
    entry(3, false, 4, Min, Min7, Diatonic, T),
    entry(7, true, 10, Maj, Dom7, ChordSource::Scale(ScaleType::Mixolydian), S),
    entry(4, false, 5, Min, Min7, ChordSource::Scale(ScaleType::NaturalMinor), S),
];

const JAZZ: &[CategoryEntry] = &[
    entry(2, false, 2, Min, Min7, Diatonic, S),
    entry(5, false, 7, Maj, Dom7, Diatonic, D),
    entry(1, false, 0, Maj, Maj7, Diatonic, T),
    entry(6, false, 9, Min, Min7, Diatonic, T),
    entry(6, false, 9, Maj, Dom7, SecDom, D),
    entry(2, false, 2, Maj, Dom7, SecDom, D),
    entry(7, false, 11, Dim, Min7b5, Diatonic, D),
    entry(2, true, 1, Maj, Dom7, ChordSource::Scale(ScaleType::Phrygian), D),
];

const NEO_SOUL: &[CategoryEntry] = &[
    entry(1, false, 0, Maj, Maj7, Diatonic, T),
    entry(2, false, 2, Min, Min7, Diatonic, S),
    entry(3, false, 4, Min, Min7, Diatonic, T),
    entry(4, false, 5, Maj, Maj7, Diatonic, S),
    entry(4, false, 5, Min, Min7, ChordSource::Scale(ScaleType::NaturalMinor), S),
    entry(5, false, 7, Min, Min7, ChordSource::Scale(ScaleType::Dorian), D),
    entry(3, true, 3, Maj, Maj7, ChordSource::Scale(ScaleType::NaturalMinor), T),
    entry(6, true, 8, Maj, Maj7, ChordSource::Scale(ScaleType::NaturalMinor), S),
    entry(7, true, 10, Maj, Dom7, ChordSource::Scale(ScaleType::Mixolydian), S),
    entry(3, false, 4, Maj, Dom7, SecDom, D),
];

const BLUES: &[CategoryEntry] = &[
    entry(1, false, 0, Maj, Dom7, ChordSource::Scale(ScaleType::Mixolydian), T),
    entry(4, false, 5, Maj, Dom7, ChordSource::Scale(ScaleType::Mixolydian), S),
    entry(5, false, 7, Maj, Dom7, Diatonic, D),
    entry(2, false, 2, Min, Min7, Diatonic, S),
    entry(3, true, 3, Maj, Dom7, ChordSource::Scale(ScaleType::NaturalMinor), T),
    entry(7, true, 10, Maj, Dom7, ChordSource::Scale(ScaleType::Mixolydian), S),
];

const MODAL_ROCK: &[CategoryEntry] = &[
    entry(1, false, 0, Maj, Maj7, Diatonic, T),
    entry(3, true, 3, Maj, Maj7, ChordSource::Scale(ScaleType::NaturalMinor), T),
    entry(4, false, 5, Maj, Maj7, Diatonic, S),
    entry(6, true, 8, Maj, Maj7, ChordSource::Scale(ScaleType::NaturalMinor), S),
    entry(7, true, 10, Maj, Dom7, ChordSource::Scale(ScaleType::Mixolydian), S),
    entry(5, false, 7, Min, Min7, ChordSource::Scale(ScaleType::Mixolydian), D),
    entry(2, false, 2, Maj, Dom7, ChordSource::Scale(ScaleType::Lydian), S),
    entry(4, false, 5, Min, Min7, ChordSource::Scale(ScaleType::NaturalMinor), S),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordCategory {
    Pop,
    Jazz,
    NeoSoul,
    Blues,
    ModalRock,
}

impl ChordCategory {
    pub const ALL: [ChordCategory; 5] = [
        ChordCategory::Pop,
        ChordCategory::Jazz,
        ChordCategory::NeoSoul,
        ChordCategory::Blues,
        ChordCategory::ModalRock,
    ];

    pub fn entries(self) -> &'static [CategoryEntry] {
        match self {
            ChordCategory::Pop => POP,
            ChordCategory::Jazz => JAZZ,
            ChordCategory::NeoSoul => NEO_SOUL,
            ChordCategory::Blues => BLUES,
            ChordCategory::ModalRock => MODAL_ROCK,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ChordCategory::Pop => "pop",
            ChordCategory::Jazz => "jazz",
            ChordCategory::NeoSoul => "neoSoul",
            ChordCategory::Blues => "blues",
            ChordCategory::ModalRock => "modalRock",
        }
    }

    pub fn from_id(id: &str) -> Option<ChordCategory> {
        ChordCategory::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ChordCategory::Pop => "Pop",
            ChordCategory::Jazz => "Jazz",
            ChordCategory::NeoSoul => "Neo-Soul",
            ChordCategory::Blues => "Blues",
            ChordCategory::ModalRock => "Modal Rock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryChordInfo {
    pub degree: usize,
    pub chord: Chord,
    pub roman_numeral: String,
    pub source: ChordSource,
    pub function: ChordFunction,
}

/// A category's palette realized in `key`.
pub fn get_category_chords(
    category: ChordCategory,
    key: &str,
    seventh: bool,
) -> Result<Vec<CategoryChordInfo>, TheoryError> {
    let tonic = parse_note(key)?;
    let key_flat = is_flat_key(tonic.name);

    category
        .entries()
        .iter()
        .map(|e| -> Result<_, TheoryError> {
            let quality = if seventh { e.seventh } else { e.triad };
            let spell_flat = e.flat || key_flat;
            let root = if e.offset == 0 {
                tonic
            } else {
                transpose_note(&tonic, e.offset as i32, spell_flat)
            };
            let borrowed_minor = e.source != ChordSource::Diatonic && quality.prefers_flat();
            let prefix = if e.flat { "b" } else { "" };
            Ok(CategoryChordInfo {
                degree: e.degree,
                chord: Chord::with_spelling(root, quality, spell_flat || borrowed_minor),
                roman_numeral: format!("{prefix}{}", format_roman_numeral(e.degree, quality)?),
                source: e.source,
                function: e.function,
            })
        })
        .collect()
}

/// Palette lookup by id; an unknown id yields an empty list.
pub fn get_category_chords_by_id(
    category_id: &str,
    key: &str,
    seventh: bool,
) -> Result<Vec<CategoryChordInfo>, TheoryError> {
    match ChordCategory::from_id(category_id) {
        Some(category) => get_category_chords(category, key, seventh),
        None => {
            parse_note(key)?;
            Ok(Vec::new())
        }
    }
}
