// educe_core/src/world/transitions.rs
use crate::{config::EngineConfig, player::Player};

/// Walk the player across room edges. When the sprite box leaves the room
/// and a neighbouring room exists, the local coordinate wraps by one room
/// dimension and the room index steps; at world edges the player clamps in
/// place and the velocity component dies. Returns whether the room changed
/// so callers can rebuild tile and NPC state.
pub fn handle_room_transition(
    player: &mut Player,
    config: &EngineConfig,
    world_width_rooms: i32,
    world_height_rooms: i32,
) -> bool {
    let room_width = config.room_width();
    let room_height = config.room_height();
    let mut changed = false;

    if player.position.x < 0.0 {
        if player.room.x > 0 {
            player.position.x += room_width;
            player.room.x -= 1;
            changed = true;
        } else {
            player.position.x = 0.0;
            player.velocity.x = 0.0;
        }
    } else if player.position.x + player.width > room_width {
        if player.room.x < world_width_rooms - 1 {
            player.position.x -= room_width;
            player.room.x += 1;
            changed = true;
        } else {
            player.position.x = room_width - player.width;
            player.velocity.x = 0.0;
        }
    }

    if player.position.y < 0.0 {
        if player.room.y > 0 {
            player.position.y += room_height;
            player.room.y -= 1;
            changed = true;
        } else {
            player.position.y = 0.0;
            player.velocity.y = 0.0;
        }
    } else if player.position.y + player.height > room_height {
        if player.room.y < world_height_rooms - 1 {
            player.position.y -= room_height;
            player.room.y += 1;
            changed = true;
        } else {
            player.position.y = room_height - player.height;
            player.velocity.y = 0.0;
            player.on_ground = true;
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    fn player_at(config: &EngineConfig, x: f32, y: f32, room_x: i32, room_y: i32) -> Player {
        let mut player = Player::new(config);
        player.reset(room_x, room_y, x, y);
        player
    }

    #[test]
    fn crossing_left_edge_wraps_into_neighbour() {
        let config = EngineConfig::default();
        let mut player = player_at(&config, -4.0, 50.0, 1, 0);
        let changed = handle_room_transition(&mut player, &config, 2, 1);
        assert!(changed);
        assert_eq!(player.room.x, 0);
        assert_eq!(player.position.x, -4.0 + config.room_width());
    }

    #[test]
    fn crossing_right_edge_wraps_into_neighbour() {
        let config = EngineConfig::default();
        let x = config.room_width() - player_at(&config, 0.0, 0.0, 0, 0).width + 6.0;
        let mut player = player_at(&config, x, 50.0, 0, 0);
        let changed = handle_room_transition(&mut player, &config, 2, 1);
        assert!(changed);
        assert_eq!(player.room.x, 1);
        assert_eq!(player.position.x, x - config.room_width());
    }

    #[test]
    fn world_edges_clamp_and_kill_velocity() {
        let config = EngineConfig::default();

        let mut player = player_at(&config, -10.0, 50.0, 0, 0);
        player.velocity = vec2(-80.0, 0.0);
        assert!(!handle_room_transition(&mut player, &config, 2, 2));
        assert_eq!(player.position.x, 0.0);
        assert_eq!(player.velocity.x, 0.0);

        let mut player = player_at(&config, 50.0, config.room_height() + 1.0, 0, 1);
        player.velocity = vec2(0.0, 200.0);
        assert!(!handle_room_transition(&mut player, &config, 2, 2));
        assert_eq!(player.position.y, config.room_height() - player.height);
        assert_eq!(player.velocity.y, 0.0);
        assert!(player.on_ground);
    }

    #[test]
    fn vertical_wrap_moves_down_a_row() {
        let config = EngineConfig::default();
        let y = config.room_height() - 10.0;
        let mut player = player_at(&config, 50.0, y, 0, 0);
        let changed = handle_room_transition(&mut player, &config, 1, 2);
        assert!(changed);
        assert_eq!(player.room.y, 1);
        assert_eq!(player.position.y, y - config.room_height());
    }

    #[test]
    fn interior_positions_are_untouched() {
        let config = EngineConfig::default();
        let mut player = player_at(&config, 100.0, 100.0, 0, 0);
        player.velocity = vec2(55.0, -20.0);
        assert!(!handle_room_transition(&mut player, &config, 3, 3));
        assert_eq!(player.position, vec2(100.0, 100.0));
        assert_eq!(player.velocity, vec2(55.0, -20.0));
    }
}
