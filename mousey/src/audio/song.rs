// mousey/src/audio/song.rs

/// One synthesized note: when it starts, how long it rings, pitch, level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteEvent {
    /// Seconds from song start.
    pub start: f32,
    /// Seconds.
    pub dur: f32,
    /// Hertz.
    pub freq: f32,
    /// 0..1 before bus gains.
    pub gain: f32,
}

/// A note list sorted by start time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Song {
    notes: Vec<NoteEvent>,
}

impl Song {
    pub fn new(mut notes: Vec<NoteEvent>) -> Self {
        notes.sort_by(|a, b| a.start.total_cmp(&b.start));
        Self { notes }
    }

    pub fn notes(&self) -> &[NoteEvent] {
        &self.notes
    }

    /// When the last note stops ringing.
    pub fn duration(&self) -> f32 {
        self.notes
            .iter()
            .map(|note| note.start + note.dur)
            .fold(0.0, f32::max)
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// The looping background tune: a short pentatonic walk, two bars.
pub fn demo_song() -> Song {
    const STEP: f32 = 0.25;
    let pitches = [261.63, 293.66, 329.63, 392.00, 440.00, 392.00, 329.63, 293.66];
    let notes = pitches
        .iter()
        .enumerate()
        .map(|(i, &freq)| NoteEvent {
            start: i as f32 * STEP,
            dur: STEP * 0.9,
            freq,
            gain: 0.5,
        })
        .collect();
    Song::new(notes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_sort_by_start_time() {
        let song = Song::new(vec![
            NoteEvent { start: 1.0, dur: 0.5, freq: 220.0, gain: 1.0 },
            NoteEvent { start: 0.0, dur: 0.5, freq: 440.0, gain: 1.0 },
        ]);
        assert_eq!(song.notes()[0].freq, 440.0);
        assert_eq!(song.duration(), 1.5);
    }

    #[test]
    fn demo_song_is_playable() {
        let song = demo_song();
        assert!(!song.is_empty());
        assert!(song.duration() > 1.0);
    }
}
