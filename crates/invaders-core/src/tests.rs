#[cfg(test)]
mod tests {
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::input::InputFrame;
    use crate::state::WaveSnapshot;
    use crate::types::Position;

    /// Verify the tier banding: bottom two rows share a tier, the
    /// next two the middle tier, the top row the last.
    #[test]
    fn test_tier_banding_by_row() {
        assert_eq!(AlienTier::for_row(0), AlienTier::Scout);
        assert_eq!(AlienTier::for_row(1), AlienTier::Soldier);
        assert_eq!(AlienTier::for_row(2), AlienTier::Soldier);
        assert_eq!(AlienTier::for_row(3), AlienTier::Tank);
        assert_eq!(AlienTier::for_row(4), AlienTier::Tank);
    }

    #[test]
    fn test_aabb_overlap_exact_touch() {
        let a = Position::new(0.0, 0.0);
        // Edges exactly touching counts as overlap.
        let b = Position::new(10.0, 0.0);
        assert!(a.overlaps(10.0, 10.0, &b, 10.0, 10.0));
        let c = Position::new(10.1, 0.0);
        assert!(!a.overlaps(10.0, 10.0, &c, 10.0, 10.0));
    }

    #[test]
    fn test_aabb_overlap_is_symmetric() {
        let bolt = Position::new(100.0, 200.0);
        let alien = Position::new(101.0, 198.0);
        assert_eq!(
            bolt.overlaps(BOLT_WIDTH, BOLT_HEIGHT, &alien, ALIEN_WIDTH, ALIEN_HEIGHT),
            alien.overlaps(ALIEN_WIDTH, ALIEN_HEIGHT, &bolt, BOLT_WIDTH, BOLT_HEIGHT),
        );
    }

    /// Verify the enums round-trip through serde_json.
    #[test]
    fn test_allegiance_serde() {
        for v in [Allegiance::Player, Allegiance::Alien] {
            let json = serde_json::to_string(&v).unwrap();
            let back: Allegiance = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_march_direction_serde() {
        for v in [MarchDirection::Left, MarchDirection::Right] {
            let json = serde_json::to_string(&v).unwrap();
            let back: MarchDirection = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify AudioEvent round-trips through serde (tagged union).
    #[test]
    fn test_audio_event_serde() {
        let events = vec![
            AudioEvent::ShipFired,
            AudioEvent::AlienFired,
            AudioEvent::AlienKilled { row: 2, col: 3 },
            AudioEvent::ShipDestroyed,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_input_frame_serde() {
        let frame = InputFrame {
            move_left: true,
            move_right: false,
            fire: true,
        };
        let json = serde_json::to_string(&frame).unwrap();
        let back: InputFrame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, back);
    }

    /// Verify WaveSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = WaveSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: WaveSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.score, back.score);
        assert!(back.ship.is_none());
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// The full formation must fit the playfield with room to march.
    #[test]
    fn test_grid_fits_playfield() {
        let grid_width =
            ALIENS_IN_ROW as f64 * ALIEN_WIDTH + (ALIENS_IN_ROW as f64 - 1.0) * ALIEN_H_SEP;
        assert!(grid_width + 2.0 * ALIEN_H_SEP < GAME_WIDTH);
        let grid_height =
            ALIEN_ROWS as f64 * ALIEN_HEIGHT + (ALIEN_ROWS as f64 - 1.0) * ALIEN_V_SEP;
        assert!(ALIEN_CEILING + grid_height < GAME_HEIGHT - DEFENSE_LINE);
    }
}
