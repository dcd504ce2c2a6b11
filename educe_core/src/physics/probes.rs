// educe_core/src/physics/probes.rs
use crate::constants::PROBE_SAMPLE_CAP;

/// One tile test performed by the collision resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSample {
    pub col: i32,
    pub row: i32,
    pub hit: bool,
    /// Step-up probe depth in pixels, 0 for direct sweeps.
    pub step_up: u32,
}

/// Tile tests recorded during the most recent collision query, per axis.
#[derive(Debug, Default, Clone)]
pub struct CollisionProbes {
    pub horizontal: Vec<ProbeSample>,
    pub vertical: Vec<ProbeSample>,
}

impl CollisionProbes {
    pub fn clear(&mut self) {
        self.horizontal.clear();
        self.vertical.clear();
    }

    /// Capped view for debug overlays.
    pub fn horizontal_samples(&self) -> &[ProbeSample] {
        let len = self.horizontal.len().min(PROBE_SAMPLE_CAP);
        &self.horizontal[..len]
    }

    /// Capped view for debug overlays.
    pub fn vertical_samples(&self) -> &[ProbeSample] {
        let len = self.vertical.len().min(PROBE_SAMPLE_CAP);
        &self.vertical[..len]
    }
}
