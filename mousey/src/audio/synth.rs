// mousey/src/audio/synth.rs
use crate::audio::song::{NoteEvent, Song};
use std::{f32::consts::TAU, io, path::Path};

pub const SAMPLE_RATE: u32 = 44_100;

/// Attack length in seconds; the rest of the note decays exponentially.
const ATTACK: f32 = 0.01;
/// Level the decay targets by note end.
const DECAY_FLOOR: f32 = 0.001;

/// Render one note to mono samples: a sine fundamental with a soft octave
/// partial, fast linear attack, exponential decay.
pub fn render_note(note: &NoteEvent, sample_rate: u32) -> Vec<f32> {
    let total = (note.dur * sample_rate as f32).ceil().max(1.0) as usize;
    let mut samples = Vec::with_capacity(total);
    let decay_rate = DECAY_FLOOR.ln() / note.dur.max(f32::EPSILON);

    for i in 0..total {
        let t = i as f32 / sample_rate as f32;
        let envelope = if t < ATTACK {
            t / ATTACK
        } else {
            (decay_rate * (t - ATTACK)).exp()
        };
        let fundamental = (TAU * note.freq * t).sin();
        let partial = 0.35 * (TAU * note.freq * 2.0 * t).sin();
        samples.push(note.gain * envelope * (fundamental + partial));
    }
    samples
}

/// Mix a whole song into one clamped mono buffer.
pub fn mix_song(song: &Song, sample_rate: u32) -> Vec<f32> {
    let total = (song.duration() * sample_rate as f32).ceil() as usize;
    let mut mix = vec![0.0f32; total];

    for note in song.notes() {
        let offset = (note.start * sample_rate as f32).floor() as usize;
        for (i, sample) in render_note(note, sample_rate).into_iter().enumerate() {
            if let Some(slot) = mix.get_mut(offset + i) {
                *slot += sample;
            }
        }
    }

    for sample in mix.iter_mut() {
        *sample = sample.clamp(-1.0, 1.0);
    }
    mix
}

/// Write mono samples as a 16-bit WAV.
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> io::Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    for &sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer
            .write_sample(value)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    }
    writer
        .finalize()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_note() -> NoteEvent {
        NoteEvent {
            start: 0.0,
            dur: 0.2,
            freq: 440.0,
            gain: 0.8,
        }
    }

    #[test]
    fn notes_render_the_right_length() {
        let samples = render_note(&test_note(), SAMPLE_RATE);
        assert_eq!(samples.len(), (0.2f32 * SAMPLE_RATE as f32).ceil() as usize);
    }

    #[test]
    fn envelope_rises_then_dies() {
        let samples = render_note(&test_note(), SAMPLE_RATE);
        assert_eq!(samples[0], 0.0);
        let peak = samples.iter().fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(peak > 0.3);
        let tail = samples[samples.len() - 100..]
            .iter()
            .fold(0.0f32, |m, s| m.max(s.abs()));
        assert!(tail < 0.05);
    }

    #[test]
    fn mix_is_clamped_and_covers_the_song() {
        let song = Song::new(vec![
            NoteEvent { start: 0.0, dur: 0.2, freq: 220.0, gain: 1.0 },
            NoteEvent { start: 0.0, dur: 0.2, freq: 223.0, gain: 1.0 },
            NoteEvent { start: 0.3, dur: 0.1, freq: 440.0, gain: 0.4 },
        ]);
        let mix = mix_song(&song, SAMPLE_RATE);
        assert_eq!(mix.len(), (0.4f32 * SAMPLE_RATE as f32).ceil() as usize);
        assert!(mix.iter().all(|s| (-1.0..=1.0).contains(s)));
        assert!(mix.iter().any(|s| s.abs() > 0.1));
    }

    #[test]
    fn wav_files_land_on_disk() {
        let dir = std::env::temp_dir().join(format!("educe_synth_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("note.wav");
        let samples = render_note(&test_note(), SAMPLE_RATE);
        write_wav(&path, &samples, SAMPLE_RATE).unwrap();
        assert!(path.metadata().unwrap().len() > 44);
    }
}
