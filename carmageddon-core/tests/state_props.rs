//! Property tests for vehicle state and the output adapters

use carmageddon_core::output::readout::{banner_cells, speed_cells};
use carmageddon_core::output::LampMask;
use carmageddon_core::state::{VehicleState, MAX_SPEED};
use carmageddon_core::timing::Throttle;
use proptest::prelude::*;

proptest! {
    #[test]
    fn speed_always_in_range(speed in any::<f32>()) {
        let mut state = VehicleState::new();
        state.set_speed(12.5);
        state.set_speed(speed);
        if speed.is_nan() {
            prop_assert_eq!(state.speed(), 12.5);
        } else {
            prop_assert!((0.0..=MAX_SPEED).contains(&state.speed()));
        }
    }

    #[test]
    fn count_always_in_range(count in any::<i64>()) {
        let mut state = VehicleState::new();
        state.set_collectible_count(count);
        prop_assert_eq!(i64::from(state.collectible_count()), count.clamp(0, 255));
    }

    #[test]
    fn add_collectible_saturates(start in 0i64..=255, adds in 0usize..600) {
        let mut state = VehicleState::new();
        state.set_collectible_count(start);
        for _ in 0..adds {
            state.add_collectible();
        }
        prop_assert_eq!(i64::from(state.collectible_count()), (start + adds as i64).min(255));
    }

    #[test]
    fn commit_clears_dirty(speed in 0.0f32..999.0, count in 0i64..=255) {
        let mut state = VehicleState::new();
        state.set_speed(speed);
        state.set_collectible_count(count);
        prop_assert!(state.is_dirty());
        state.commit_rendered();
        prop_assert!(!state.is_dirty());
    }

    #[test]
    fn lamp_mask_matches_count_bits(count in any::<u8>()) {
        let mask = LampMask::from_count(count);
        for i in 0..8u8 {
            prop_assert_eq!(mask.is_lit(i), count >> i & 1 == 1);
        }
    }

    #[test]
    fn speed_readout_keeps_digits(tenths in 0u32..=9990) {
        let speed = tenths as f32 / 10.0;
        let cells = speed_cells(speed);
        let digits: String = cells.iter().map(|c| c.ascii as char).filter(|c| *c != ' ').collect();
        let expected = format!("{:.1}", speed).replace('.', "");
        prop_assert_eq!(digits, expected);
        prop_assert_eq!(cells.iter().filter(|c| c.dot).count(), 1);
        prop_assert!(cells[6].dot);
    }

    #[test]
    fn banner_never_exceeds_row(text in "[A-Z -]{0,20}") {
        let cells = banner_cells(&text);
        let shown: String = cells.iter().map(|c| c.ascii as char).collect();
        let mut expected: String = text.chars().take(8).collect();
        while expected.len() < 8 {
            expected.push(' ');
        }
        prop_assert_eq!(shown, expected);
    }

    #[test]
    fn throttle_fires_once_per_interval(start in any::<u32>(), interval in 1u32..5000, step in 1u32..100) {
        let mut throttle = Throttle::new(interval);
        prop_assert!(throttle.poll(start));
        let mut now = start;
        let mut fired_at = start;
        for _ in 0..200 {
            now = now.wrapping_add(step);
            if throttle.poll(now) {
                prop_assert!(now.wrapping_sub(fired_at) >= interval);
                fired_at = now;
            } else {
                prop_assert!(now.wrapping_sub(fired_at) < interval);
            }
        }
    }
}
