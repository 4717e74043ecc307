// Harmonia Theory
//
// The music-theory core of Harmonia: a canonical model of notes, intervals,
// scales and chords, plus the generators that derive harmonic relationships
// from a key. Every function here is pure: primitive inputs (a root name, a
// scale type or chord quality, a seventh flag) go in, immutable value objects
// come out.
//
// Architecture:
// - note.rs: Pitch classes, pitch-class sets, note spelling + transposition
// - interval.rs: Semitone → interval table (P1 through P8)
// - scale.rs: The 14 scale types and scale construction
// - chord.rs: The 10 chord qualities, chord construction, quality matching
// - diatonic.rs: Scale-degree chords of a major key, roman numerals, functions
// - modal_interchange.rs: Borrowed chords from the seven parallel modes
// - secondary.rs: Secondary dominants and their tritone substitutions
// - category.rs: Declarative genre chord palettes (pop, jazz, neo-soul, ...)
// - analysis.rs: Characteristic notes and avoid notes of a scale over a chord
// - available_scales.rs: Which parent scales realize a chord at a degree
// - error.rs: Input-validation failures
//
// The fretboard crate (`harmonia_fretboard`) builds on these types to map
// notes onto a guitar neck and search for playable voicings.

pub mod analysis;
pub mod available_scales;
pub mod category;
pub mod chord;
pub mod diatonic;
pub mod error;
pub mod interval;
pub mod modal_interchange;
pub mod note;
pub mod scale;
pub mod secondary;

pub use chord::{Chord, ChordQuality};
pub use error::TheoryError;
pub use note::{Note, PitchClass, PitchClassSet};
pub use scale::{Scale, ScaleType};
