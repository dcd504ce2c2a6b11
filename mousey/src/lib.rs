pub mod audio;
pub mod confetti;
pub mod constants;
pub mod evolution;
pub mod game;
pub mod hub;
pub mod input;
