// mousey/src/audio/sfx.rs
use crate::audio::song::{NoteEvent, Song};

/// The game's sound effects as little note recipes for the synth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfx {
    Footstep,
    Jump,
    Merge,
    Split,
    LevelComplete,
}

impl Sfx {
    pub fn song(self) -> Song {
        let notes = match self {
            // Low thump.
            Sfx::Footstep => vec![NoteEvent { start: 0.0, dur: 0.2, freq: 100.0, gain: 0.5 }],
            // Quick upward chirp.
            Sfx::Jump => vec![
                NoteEvent { start: 0.0, dur: 0.08, freq: 330.0, gain: 0.5 },
                NoteEvent { start: 0.06, dur: 0.1, freq: 494.0, gain: 0.4 },
            ],
            // Two rising thirds.
            Sfx::Merge => vec![
                NoteEvent { start: 0.0, dur: 0.12, freq: 392.0, gain: 0.5 },
                NoteEvent { start: 0.1, dur: 0.18, freq: 494.0, gain: 0.5 },
            ],
            // The merge, played backwards.
            Sfx::Split => vec![
                NoteEvent { start: 0.0, dur: 0.12, freq: 494.0, gain: 0.5 },
                NoteEvent { start: 0.1, dur: 0.18, freq: 392.0, gain: 0.5 },
            ],
            // A short fanfare arpeggio.
            Sfx::LevelComplete => vec![
                NoteEvent { start: 0.0, dur: 0.15, freq: 523.25, gain: 0.5 },
                NoteEvent { start: 0.12, dur: 0.15, freq: 659.25, gain: 0.5 },
                NoteEvent { start: 0.24, dur: 0.3, freq: 783.99, gain: 0.6 },
            ],
        };
        Song::new(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_effect_has_notes() {
        for sfx in [Sfx::Footstep, Sfx::Jump, Sfx::Merge, Sfx::Split, Sfx::LevelComplete] {
            assert!(!sfx.song().is_empty());
        }
    }

    #[test]
    fn split_mirrors_merge() {
        let merge = Sfx::Merge.song();
        let split = Sfx::Split.song();
        assert_eq!(merge.notes()[0].freq, split.notes()[1].freq);
        assert_eq!(merge.notes()[1].freq, split.notes()[0].freq);
    }
}
