// mousey/src/playtest_main.rs
use educe_core::{constants::FIXED_DT, logging::init_file_logger, storage::world_storage::load_world};
use mousey_lib::{
    audio::{sequencer::Sequencer, song::demo_song, synth},
    game::{GameEvent, MouseyMerge},
};
use serde::Serialize;
use std::{env, path::PathBuf, process};

/// What a scripted run observed, printed as JSON for quick inspection.
#[derive(Serialize, Default)]
struct PlaytestSummary {
    frames: u32,
    rooms_visited: Vec<(i32, i32)>,
    merges: u32,
    splits: u32,
    completed: bool,
    bgm_notes_triggered: u32,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <world.json>", args[0]);
        process::exit(1);
    }

    if let Err(e) = init_file_logger("info") {
        eprintln!("Could not init logger: {e}");
    }

    let world_path = PathBuf::from(&args[1]);
    let world = match load_world(&world_path) {
        Ok(world) => world,
        Err(e) => {
            eprintln!("Could not load world {}: {e}", world_path.display());
            process::exit(1);
        }
    };

    let mut game = MouseyMerge::new(world);
    let mut sequencer = Sequencer::new(demo_song(), true);
    sequencer.play();

    let mut summary = PlaytestSummary::default();
    let start_room = game.engine.player.room;
    summary.rooms_visited.push((start_room.x, start_room.y));

    // Scripted input: walk right, hop every 90 frames.
    const FRAMES: u32 = 600;
    for frame in 0..FRAMES {
        game.engine.input.right = true;
        game.engine.input.jump = frame % 90 < 3;

        game.update(FIXED_DT);
        summary.bgm_notes_triggered += sequencer.advance(FIXED_DT).len() as u32;

        for event in game.drain_events() {
            match event {
                GameEvent::RoomChanged { room_x, room_y } => {
                    if !summary.rooms_visited.contains(&(room_x, room_y)) {
                        summary.rooms_visited.push((room_x, room_y));
                    }
                }
                GameEvent::Merged { .. } => summary.merges += 1,
                GameEvent::Split { .. } => summary.splits += 1,
                GameEvent::LevelComplete => summary.completed = true,
            }
        }
    }
    summary.frames = FRAMES;

    // Leave the demo tune next to the world so the run is audible too.
    let wav_path = world_path.with_extension("wav");
    let mix = synth::mix_song(&demo_song(), synth::SAMPLE_RATE);
    if let Err(e) = synth::write_wav(&wav_path, &mix, synth::SAMPLE_RATE) {
        eprintln!("Could not write {}: {e}", wav_path.display());
    }

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Could not serialize summary: {e}"),
    }
}
