// mousey/src/audio/sequencer.rs
use crate::audio::song::{NoteEvent, Song};

/// Silence between loop iterations.
pub const LOOP_GAP: f32 = 1.0;

/// Walks a song in caller time: each advance yields the notes whose start
/// has been crossed since the previous one. Purely time-driven, so the
/// caller decides what "triggering a note" means.
#[derive(Debug, Clone)]
pub struct Sequencer {
    song: Song,
    looping: bool,
    playing: bool,
    elapsed: f32,
    cursor: usize,
}

impl Sequencer {
    pub fn new(song: Song, looping: bool) -> Self {
        Self {
            song,
            looping,
            playing: false,
            elapsed: 0.0,
            cursor: 0,
        }
    }

    /// Start (or restart) from the top.
    pub fn play(&mut self) {
        self.playing = true;
        self.elapsed = 0.0;
        self.cursor = 0;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Advance by a frame's worth of time and collect due notes.
    pub fn advance(&mut self, dt: f32) -> Vec<NoteEvent> {
        let mut due = Vec::new();
        if !self.playing || self.song.is_empty() {
            return due;
        }

        self.elapsed += dt;
        loop {
            while let Some(note) = self.song.notes().get(self.cursor) {
                if note.start > self.elapsed {
                    break;
                }
                due.push(*note);
                self.cursor += 1;
            }

            if self.cursor < self.song.notes().len() {
                break;
            }

            // Past the last note: either wrap after the gap or finish.
            let loop_end = self.song.duration() + LOOP_GAP;
            if self.looping && self.elapsed >= loop_end {
                self.elapsed -= loop_end;
                self.cursor = 0;
                continue;
            }
            if !self.looping && self.elapsed >= self.song.duration() {
                self.playing = false;
            }
            break;
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_note_song() -> Song {
        Song::new(vec![
            NoteEvent { start: 0.0, dur: 0.5, freq: 220.0, gain: 1.0 },
            NoteEvent { start: 1.0, dur: 0.5, freq: 440.0, gain: 1.0 },
        ])
    }

    #[test]
    fn notes_fire_when_their_start_passes() {
        let mut seq = Sequencer::new(two_note_song(), false);
        seq.play();
        let first = seq.advance(0.1);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].freq, 220.0);
        assert!(seq.advance(0.5).is_empty());
        let second = seq.advance(0.5);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].freq, 440.0);
    }

    #[test]
    fn stopped_sequencer_stays_silent() {
        let mut seq = Sequencer::new(two_note_song(), false);
        seq.play();
        seq.stop();
        assert!(seq.advance(10.0).is_empty());
    }

    #[test]
    fn one_shot_playback_finishes() {
        let mut seq = Sequencer::new(two_note_song(), false);
        seq.play();
        seq.advance(5.0);
        assert!(!seq.is_playing());
    }

    #[test]
    fn looping_restarts_after_the_gap() {
        let mut seq = Sequencer::new(two_note_song(), true);
        seq.play();
        let first_pass = seq.advance(1.1);
        assert_eq!(first_pass.len(), 2);

        // Duration 1.5 + gap 1.0: nothing rings during the rest.
        assert!(seq.advance(1.0).is_empty());
        // Crossing the loop point brings the first note back.
        let wrapped = seq.advance(0.5);
        assert_eq!(wrapped.len(), 1);
        assert_eq!(wrapped[0].freq, 220.0);
        assert!(seq.is_playing());
    }
}
