//! Property-based tests for the cycle engine, tracker and panel.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated operation sequences.

use ledlab::core::Palette;
use ledlab::{CycleEngine, Intent, Led, LedPanel, Move, MountTracker, PanelCheckpoint};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_led()(variant in 0..3usize) -> Led {
        Led::ALL[variant]
    }
}

prop_compose! {
    fn arbitrary_move()(variant in 0..3u8) -> Move {
        match variant {
            0 => Move::Advance,
            1 => Move::Retreat,
            _ => Move::Reset,
        }
    }
}

prop_compose! {
    fn arbitrary_intent()(variant in 0..5usize) -> Intent {
        Intent::ALL[variant]
    }
}

fn engine_at(led: Led) -> CycleEngine<Led> {
    let mut engine = CycleEngine::new();
    while engine.active() != led {
        engine.advance();
    }
    engine
}

proptest! {
    #[test]
    fn advancing_a_multiple_of_three_closes_the_cycle(k in 0..20usize) {
        let mut engine = CycleEngine::<Led>::new();
        for _ in 0..3 * k {
            engine.advance();
        }
        prop_assert_eq!(engine.active(), Led::Red);
    }

    #[test]
    fn advance_then_retreat_restores(led in arbitrary_led()) {
        let mut engine = engine_at(led);
        engine.advance();
        engine.retreat();
        prop_assert_eq!(engine.active(), led);
    }

    #[test]
    fn retreat_then_advance_restores(led in arbitrary_led()) {
        let mut engine = engine_at(led);
        engine.retreat();
        engine.advance();
        prop_assert_eq!(engine.active(), led);
    }

    #[test]
    fn reset_always_yields_red(led in arbitrary_led()) {
        let mut engine = engine_at(led);
        engine.reset();
        prop_assert_eq!(engine.active(), Led::Red);
    }

    #[test]
    fn active_is_always_a_palette_member(moves in prop::collection::vec(arbitrary_move(), 0..50)) {
        let mut engine = CycleEngine::<Led>::new();
        for mv in moves {
            engine.apply(mv);
            prop_assert!(Led::ALL.contains(&engine.active()));
        }
    }

    #[test]
    fn notifications_are_never_skipped(moves in prop::collection::vec(arbitrary_move(), 1..50)) {
        let mut engine = CycleEngine::<Led>::new();
        let mut previous_to = engine.active();
        for (i, mv) in moves.into_iter().enumerate() {
            let change = engine.apply(mv);
            prop_assert_eq!(change.seq, i as u64 + 1);
            prop_assert_eq!(change.from, previous_to);
            previous_to = change.to;
        }
    }

    #[test]
    fn enabled_tracker_counts_every_change(moves in prop::collection::vec(arbitrary_move(), 0..50)) {
        let mut panel = LedPanel::new();
        let mut expected = 0u64;
        for mv in moves {
            let before = panel.snapshot().active;
            let intent = match mv {
                Move::Advance => Intent::Advance,
                Move::Retreat => Intent::Retreat,
                Move::Reset => Intent::Reset,
            };
            let after = panel.dispatch(intent);
            if after.active != before {
                expected += 1;
            }
            prop_assert_eq!(after.count, expected);
        }
    }

    #[test]
    fn advance_and_retreat_count_one_each(n in 0..50usize, forward in any::<bool>()) {
        let mut panel = LedPanel::new();
        for _ in 0..n {
            if forward { panel.advance(); } else { panel.retreat(); }
        }
        prop_assert_eq!(panel.snapshot().count, n as u64);
    }

    #[test]
    fn remount_restores_count_at_unmount(
        before in prop::collection::vec(arbitrary_move(), 0..20),
        during in prop::collection::vec(arbitrary_move(), 0..20),
    ) {
        let mut engine = CycleEngine::<Led>::new();
        let mut tracker = MountTracker::new(engine.active());
        for mv in before {
            tracker.on_cycle_changed(engine.apply(mv).to);
        }
        let at_unmount = tracker.live_count();

        tracker.disable();
        for mv in during {
            tracker.on_cycle_changed(engine.apply(mv).to);
            prop_assert_eq!(tracker.display_count(), at_unmount);
        }
        tracker.enable();

        prop_assert_eq!(tracker.live_count(), at_unmount);
    }

    #[test]
    fn count_never_decreases_while_enabled(intents in prop::collection::vec(arbitrary_intent(), 0..60)) {
        let mut panel = LedPanel::new();
        let mut last = panel.snapshot();
        for intent in intents {
            let next = panel.dispatch(intent);
            if last.enabled && next.enabled {
                prop_assert!(next.count >= last.count);
            }
            if !next.enabled {
                prop_assert_eq!(next.count, panel.tracker().frozen_count());
            }
            last = next;
        }
    }

    #[test]
    fn checkpoint_restore_preserves_behavior(
        intents in prop::collection::vec(arbitrary_intent(), 0..40),
        tail in prop::collection::vec(arbitrary_intent(), 0..10),
    ) {
        let mut original = LedPanel::new();
        for intent in intents {
            original.dispatch(intent);
        }

        let json = original.checkpoint().to_json().unwrap();
        let mut restored = LedPanel::restore(PanelCheckpoint::<Led>::from_json(&json).unwrap()).unwrap();
        prop_assert_eq!(restored.snapshot(), original.snapshot());

        for intent in tail {
            prop_assert_eq!(restored.dispatch(intent), original.dispatch(intent));
        }
    }
}
