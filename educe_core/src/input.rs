// educe_core/src/input.rs

/// Digital controller state sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    pub action: bool,
}

impl InputState {
    /// Horizontal axis as -1/0/+1.
    pub fn horizontal(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    pub fn clear(&mut self) {
        *self = InputState::default();
    }
}
