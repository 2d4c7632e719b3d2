//! Property-based tests for App state machine.
//!
//! Tests verify that invariants hold under arbitrary event sequences.
//! This ensures behavioral correctness across all possible execution paths.

use std::time::{Duration, Instant};

use pearl_app::{App, AppConfig, AppEvent, KeyInput};
use pearl_core::ConnectionPhase;
use proptest::prelude::*;

/// Generate random key input, biased toward keys the screens react to.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        3 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Esc),
        2 => Just(KeyInput::Tab),
        1 => Just(KeyInput::BackTab),
        2 => Just(KeyInput::Up),
        2 => Just(KeyInput::Down),
        1 => Just(KeyInput::Backspace),
        3 => prop::sample::select(vec![' ', 'l', 's', 'p', 'h', 'a', 'n']).prop_map(KeyInput::Char),
    ]
}

/// Generate random app events paired with a time advance.
fn step_strategy() -> impl Strategy<Value = (AppEvent, u64)> {
    let event = prop_oneof![
        3 => Just(AppEvent::Tick),
        1 => (1u16..200, 1u16..100).prop_map(|(c, r)| AppEvent::Resize(c, r)),
        5 => key_strategy().prop_map(AppEvent::Key),
    ];
    (event, 0u64..1500)
}

proptest! {
    #[test]
    fn prop_stack_never_empty_and_elapsed_consistent(
        steps in prop::collection::vec(step_strategy(), 0..120)
    ) {
        let t0 = Instant::now();
        let mut now = t0;
        let mut app = App::new(AppConfig::default(), t0);

        for (event, advance_ms) in steps {
            now += Duration::from_millis(advance_ms);
            let _ = app.handle(event, now);

            prop_assert!(app.navigator().depth() >= 1);
            prop_assert_eq!(app.navigator().screens().last().copied(), Some(app.screen()));

            if let Some(home) = app.navigator().home() {
                if home.phase() != ConnectionPhase::Connected {
                    prop_assert_eq!(home.connection().elapsed_secs(), 0);
                    prop_assert_eq!(home.connection_time(), None);
                }
                prop_assert!(pearl_core::ServerSelection::by_name(home.selection().name()).is_ok());
            }
        }
    }

    #[test]
    fn prop_each_screen_appears_once(
        steps in prop::collection::vec(step_strategy(), 0..120)
    ) {
        let t0 = Instant::now();
        let mut now = t0;
        let mut app = App::new(AppConfig::default(), t0);

        for (event, advance_ms) in steps {
            now += Duration::from_millis(advance_ms);
            let _ = app.handle(event, now);

            let screens = app.navigator().screens();
            let mut unique = screens.clone();
            unique.sort_by_key(|s| *s as u8);
            unique.dedup();
            prop_assert_eq!(unique.len(), screens.len());
        }
    }
}
