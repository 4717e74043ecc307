// Guitar fretboard layer for Harmonia.
//
// Maps notes, scales and chords from harmonia_theory onto a six-string neck
// and searches for playable chord voicings. Everything is pure and
// synchronous; the only I/O is loading a JSON config file.
//
// Architecture:
// - tuning.rs: six-string tunings, string/fret bounds
// - position.rs: note, scale, chord-tone and overlay position finders
// - scoring.rs: voicing span, finger count and weighted score
// - voicing.rs: backtracking voicing search, barre detection
// - config.rs: FretboardConfig (tuning, max fret, search limits) from JSON
// - error.rs: FretboardError

pub mod config;
pub mod error;
pub mod position;
pub mod scoring;
pub mod tuning;
pub mod voicing;

pub use config::FretboardConfig;
pub use error::FretboardError;
pub use position::{FretPosition, NoteRole, OverlayPosition};
pub use tuning::Tuning;
pub use voicing::{BarreInfo, ChordVoicing, VoicingConfig};
