//! Property-based tests for the connection state machine and formatter.
//!
//! Random toggle/advance sequences are replayed against a simple reference
//! model of the phase timeline; the state machine must agree with it at every
//! step.

use std::time::{Duration, Instant};

use pearl_core::{
    Connection, ConnectionConfig, ConnectionPhase, ServerListView, Timer, format_elapsed,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Toggle,
    Advance(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Toggle),
        3 => (0u64..4000).prop_map(Op::Advance),
    ]
}

/// Reference model: tracks when connecting started and derives everything
/// else from elapsed virtual milliseconds.
#[derive(Debug, Default)]
struct Model {
    now_ms: u64,
    connecting_since: Option<u64>,
}

impl Model {
    const DELAY_MS: u64 = 2000;

    fn phase(&self) -> ConnectionPhase {
        match self.connecting_since {
            None => ConnectionPhase::Disconnected,
            Some(start) if self.now_ms < start + Self::DELAY_MS => ConnectionPhase::Connecting,
            Some(_) => ConnectionPhase::Connected,
        }
    }

    fn elapsed(&self) -> u64 {
        match (self.phase(), self.connecting_since) {
            (ConnectionPhase::Connected, Some(start)) => {
                (self.now_ms - start - Self::DELAY_MS) / 1000
            },
            _ => 0,
        }
    }

    fn toggle(&mut self) {
        match self.phase() {
            ConnectionPhase::Disconnected => self.connecting_since = Some(self.now_ms),
            ConnectionPhase::Connecting => {},
            ConnectionPhase::Connected => self.connecting_since = None,
        }
    }
}

proptest! {
    #[test]
    fn prop_format_has_three_padded_fields(secs in 0u64..10_000_000) {
        let formatted = format_elapsed(secs);
        let fields: Vec<&str> = formatted.split(':').collect();

        prop_assert_eq!(fields.len(), 3);
        for field in &fields {
            prop_assert!(field.len() >= 2);
            prop_assert!(field.chars().all(|c| c.is_ascii_digit()));
        }
        prop_assert_eq!(fields[1].len(), 2);
        prop_assert_eq!(fields[2].len(), 2);

        let parsed: Vec<u64> = fields.iter().filter_map(|f| f.parse().ok()).collect();
        prop_assert_eq!(parsed[0] * 3600 + parsed[1] * 60 + parsed[2], secs);
    }

    #[test]
    fn prop_connection_matches_model(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let start = Instant::now();
        let mut conn = Connection::new(ConnectionConfig::default());
        let mut model = Model::default();

        for op in ops {
            match op {
                Op::Toggle => {
                    let now = start + Duration::from_millis(model.now_ms);
                    let result = conn.toggle(now);
                    prop_assert_eq!(result.is_err(), model.phase() == ConnectionPhase::Connecting);
                    model.toggle();
                },
                Op::Advance(ms) => {
                    model.now_ms += ms;
                    let _ = conn.tick(start + Duration::from_millis(model.now_ms));
                },
            }

            prop_assert_eq!(conn.phase(), model.phase());
            prop_assert_eq!(conn.elapsed_secs(), model.elapsed());
        }
    }

    #[test]
    fn prop_elapsed_zero_and_timers_match_phase(
        ops in prop::collection::vec(op_strategy(), 0..60)
    ) {
        let start = Instant::now();
        let mut now_ms = 0;
        let mut conn = Connection::new(ConnectionConfig::default());

        for op in ops {
            let now = start + Duration::from_millis(now_ms);
            match op {
                Op::Toggle => { let _ = conn.toggle(now); },
                Op::Advance(ms) => {
                    now_ms += ms;
                    let _ = conn.tick(start + Duration::from_millis(now_ms));
                },
            }

            let expected_timers = match conn.phase() {
                ConnectionPhase::Disconnected => vec![],
                ConnectionPhase::Connecting => vec![Timer::ConnectDelay],
                ConnectionPhase::Connected => vec![Timer::ElapsedTick],
            };
            prop_assert_eq!(conn.pending_timers(), expected_timers);
            if conn.phase() != ConnectionPhase::Connected {
                prop_assert_eq!(conn.elapsed_secs(), 0);
            }
        }
    }

    #[test]
    fn prop_filter_results_contain_query(query in "[a-zA-Z ]{0,4}") {
        let mut view = ServerListView::new();
        view.set_query(query.clone());
        let needle = query.to_lowercase();

        for server in view.filtered() {
            prop_assert!(server.name.to_lowercase().contains(&needle));
        }

        let partition = view.partition();
        prop_assert_eq!(partition.free.len() + partition.premium.len(), view.filtered().len());
        prop_assert!(partition.free.iter().all(|s| !s.premium));
        prop_assert!(partition.premium.iter().all(|s| s.premium));
    }
}

#[test]
fn format_known_value() {
    insta::assert_snapshot!(format_elapsed(3661), @"01:01:01");
}
