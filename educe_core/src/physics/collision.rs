// educe_core/src/physics/collision.rs
use crate::{
    config::EngineConfig,
    constants::MOVE_EPSILON,
    physics::probes::{CollisionProbes, ProbeSample},
    player::Player,
    tiles::{grid::TileGrid, rules::TileRules},
};

/// Advance the player by the requested displacement, clamped against solid
/// tiles. Horizontal motion resolves first, then vertical; each axis
/// sub-steps by at most one tile edge minus one pixel so thin geometry
/// cannot be tunneled through. This never fails; it only clamps motion.
pub fn move_player_with_collision(
    player: &mut Player,
    grid: &TileGrid,
    rules: &TileRules,
    config: &EngineConfig,
    probes: &mut CollisionProbes,
    dx: f32,
    dy: f32,
) {
    probes.clear();

    if dx != 0.0 {
        resolve_horizontal(player, grid, rules, config, probes, dx);
    }
    if dy != 0.0 {
        resolve_vertical(player, grid, rules, config, probes, dy);
    }
}

fn resolve_horizontal(
    player: &mut Player,
    grid: &TileGrid,
    rules: &TileRules,
    config: &EngineConfig,
    probes: &mut CollisionProbes,
    dx: f32,
) {
    let tile_w = config.tile_width;
    let tile_h = config.tile_height;
    let c_w = player.collider_width;
    let c_h = player.collider_height;
    let off_x = player.collider_offset.x;
    let off_y = player.collider_offset.y;
    let height = player.height;

    let mut remaining = dx;
    let max_step = (tile_w - 1.0).floor().max(1.0);

    while remaining.abs() > MOVE_EPSILON {
        let step = if remaining.abs() > max_step {
            remaining.signum() * max_step
        } else {
            remaining
        };
        let cx = player.position.x + off_x;
        let cy = player.position.y + height - c_h + off_y;
        let try_cx = cx + step;
        // Rows are sampled one pixel inside the collider so resting flush on
        // a floor does not read the floor as a wall.
        let top_row = ((cy + 1.0) / tile_h).floor() as i32;
        let bottom_row = ((cy + c_h - 2.0) / tile_h).floor() as i32;

        let lead_col = if step > 0.0 {
            ((try_cx + c_w - 1.0) / tile_w).floor() as i32
        } else {
            (try_cx / tile_w).floor() as i32
        };

        let hit = column_is_blocked(grid, rules, &mut probes.horizontal, lead_col, top_row, bottom_row, 0);

        if !hit {
            player.position.x = try_cx - off_x;
            remaining -= step;
        } else if attempt_step_up(player, grid, rules, config, probes, lead_col, cy, try_cx) {
            remaining -= step;
        } else {
            let snap_cx = if step > 0.0 {
                lead_col as f32 * tile_w - c_w
            } else {
                (lead_col + 1) as f32 * tile_w
            };
            player.position.x = snap_cx - off_x;
            player.velocity.x = 0.0;
            break;
        }
    }
}

fn resolve_vertical(
    player: &mut Player,
    grid: &TileGrid,
    rules: &TileRules,
    config: &EngineConfig,
    probes: &mut CollisionProbes,
    dy: f32,
) {
    let tile_w = config.tile_width;
    let tile_h = config.tile_height;
    let c_w = player.collider_width;
    let c_h = player.collider_height;
    let off_x = player.collider_offset.x;
    let off_y = player.collider_offset.y;
    let height = player.height;

    let mut remaining = dy;
    let max_step = (tile_h - 1.0).floor().max(1.0);

    if dy < 0.0 {
        player.on_ground = false;
    }

    while remaining.abs() > MOVE_EPSILON {
        let step = if remaining.abs() > max_step {
            remaining.signum() * max_step
        } else {
            remaining
        };
        let cx = player.position.x + off_x;
        let cy = player.position.y + height - c_h + off_y;
        let try_cy = cy + step;
        let left_col = ((cx + 1.0) / tile_w).floor() as i32;
        let right_col = ((cx + c_w - 2.0) / tile_w).floor() as i32;

        if step > 0.0 {
            let lead_row = ((try_cy + c_h - 1.0) / tile_h).floor() as i32;
            let hit = row_is_blocked(grid, rules, &mut probes.vertical, lead_row, left_col, right_col);
            if !hit {
                player.position.y = try_cy - (height - c_h) - off_y;
                remaining -= step;
            } else {
                let snap_cy = lead_row as f32 * tile_h - c_h;
                player.position.y = snap_cy - (height - c_h) - off_y;
                player.velocity.y = 0.0;
                player.on_ground = true;
                break;
            }
        } else {
            let lead_row = (try_cy / tile_h).floor() as i32;
            let hit = row_is_blocked(grid, rules, &mut probes.vertical, lead_row, left_col, right_col);
            if !hit {
                player.position.y = try_cy - (height - c_h) - off_y;
                remaining -= step;
            } else {
                let snap_cy = (lead_row + 1) as f32 * tile_h;
                player.position.y = snap_cy - (height - c_h) - off_y;
                player.velocity.y = 0.0;
                break;
            }
        }
    }
}

/// Probe upward, one pixel at a time up to one tile height, for a position
/// where the blocked column clears the collider. On success the player is
/// lifted there and keeps the attempted horizontal position.
fn attempt_step_up(
    player: &mut Player,
    grid: &TileGrid,
    rules: &TileRules,
    config: &EngineConfig,
    probes: &mut CollisionProbes,
    col: i32,
    base_cy: f32,
    try_cx: f32,
) -> bool {
    let tile_h = config.tile_height;
    let c_h = player.collider_height;
    let off_x = player.collider_offset.x;
    let off_y = player.collider_offset.y;
    let height = player.height;

    let max_step_up = tile_h as i32;
    for s in 1..=max_step_up {
        let test_cy = base_cy - s as f32;
        let top_row = ((test_cy + 1.0) / tile_h).floor() as i32;
        let bottom_row = ((test_cy + c_h - 2.0) / tile_h).floor() as i32;
        let blocked =
            column_is_blocked(grid, rules, &mut probes.horizontal, col, top_row, bottom_row, s as u32);
        if !blocked {
            player.position.y = test_cy - (height - c_h) - off_y;
            player.position.x = try_cx - off_x;
            return true;
        }
    }
    false
}

fn column_is_blocked(
    grid: &TileGrid,
    rules: &TileRules,
    samples: &mut Vec<ProbeSample>,
    col: i32,
    top_row: i32,
    bottom_row: i32,
    step_up: u32,
) -> bool {
    for row in top_row..=bottom_row {
        let hit = rules.is_solid(grid.tile_at(col, row));
        samples.push(ProbeSample { col, row, hit, step_up });
        if hit {
            return true;
        }
    }
    false
}

fn row_is_blocked(
    grid: &TileGrid,
    rules: &TileRules,
    samples: &mut Vec<ProbeSample>,
    row: i32,
    left_col: i32,
    right_col: i32,
) -> bool {
    for col in left_col..=right_col {
        let hit = rules.is_solid(grid.tile_at(col, row));
        samples.push(ProbeSample { col, row, hit, step_up: 0 });
        if hit {
            return true;
        }
    }
    false
}
