// educe_core/src/tiles/rules.rs
use crate::constants::{EMPTY_TILE_ID, EXIT_TILE_ID};
use serde::{Deserialize, Serialize};

/// Which tile ids block movement. A value, not a constant, so the collision
/// code never bakes solidity in.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct TileRules {
    pub empty_id: i32,
    pub exit_id: i32,
}

impl Default for TileRules {
    fn default() -> Self {
        Self {
            empty_id: EMPTY_TILE_ID,
            exit_id: EXIT_TILE_ID,
        }
    }
}

impl TileRules {
    /// Everything except empty space and exits is solid.
    pub fn is_solid(&self, tile_id: i32) -> bool {
        tile_id != self.empty_id && tile_id != self.exit_id
    }

    pub fn is_exit(&self, tile_id: i32) -> bool {
        tile_id == self.exit_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exits_and_air_are_walkable() {
        let rules = TileRules::default();
        assert!(!rules.is_solid(0));
        assert!(!rules.is_solid(250));
        assert!(rules.is_solid(1));
        assert!(rules.is_solid(-3));
        assert!(rules.is_exit(250));
    }
}
