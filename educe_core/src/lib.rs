pub mod assets;
pub mod config;
pub mod constants;
pub mod engine;
pub mod geom;
pub mod input;
pub mod logging;
pub mod npc;
pub mod physics;
pub mod player;
pub mod snapshot;
pub mod storage;
pub mod tiles;
pub mod world;
