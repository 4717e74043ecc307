// Fretboard configuration: tuning, neck length to scan, and voicing search
// limits and weights. Every field has a default, so a config file only needs
// to name what it changes:
//
//   {"tuning": ["D", "A", "D", "G", "B", "E"], "voicing": {"max_span": 4}}

use crate::error::FretboardError;
use crate::position::{
    FretPosition, OverlayPosition, find_chord_tone_positions, find_overlay_positions,
    find_scale_positions,
};
use crate::tuning::{DEFAULT_MAX_FRET, MAX_FRET, Tuning};
use crate::voicing::{ChordVoicing, VoicingConfig, find_chord_positions_with};
use harmonia_theory::chord::Chord;
use harmonia_theory::scale::Scale;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FretboardConfig {
    pub tuning: Tuning,
    /// Highest fret scanned and searched. Clamped to the neck on use.
    pub max_fret: u8,
    pub voicing: VoicingConfig,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        FretboardConfig {
            tuning: Tuning::standard(),
            max_fret: DEFAULT_MAX_FRET,
            voicing: VoicingConfig::default(),
        }
    }
}

impl FretboardConfig {
    pub fn from_json(json: &str) -> Result<Self, FretboardError> {
        let config: FretboardConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, FretboardError> {
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json(&data)?;
        debug!(path = %path.display(), max_fret = config.max_fret, "loaded fretboard config");
        Ok(config)
    }

    pub fn effective_max_fret(&self) -> u8 {
        self.max_fret.min(MAX_FRET)
    }

    /// Voicing search with this config's tuning, neck length and limits.
    pub fn find_chord_positions(&self, chord: &Chord) -> Vec<ChordVoicing> {
        find_chord_positions_with(chord, &self.tuning, self.effective_max_fret(), &self.voicing)
    }

    pub fn find_scale_positions(&self, scale: &Scale) -> Vec<FretPosition> {
        find_scale_positions(scale, &self.tuning, self.effective_max_fret())
    }

    pub fn find_chord_tone_positions(&self, chord: &Chord) -> Vec<FretPosition> {
        find_chord_tone_positions(chord, &self.tuning, self.effective_max_fret())
    }

    pub fn find_overlay_positions(&self, scale: &Scale, chord: &Chord) -> Vec<OverlayPosition> {
        find_overlay_positions(scale, chord, &self.tuning, self.effective_max_fret())
    }
}
