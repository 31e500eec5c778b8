// Host-side tests for the effect schedule: confirmation, trail retirement, dodge shake.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod effects {
        include!("../src/core/effects.rs");
    }
    pub mod interact {
        include!("../src/core/interact.rs");
    }
    pub mod timeline {
        include!("../src/core/timeline.rs");
    }
    pub mod trail {
        include!("../src/core/trail.rs");
    }
    pub mod schedule {
        include!("../src/core/schedule.rs");
    }
}

use crate::core::constants::*;
use crate::core::effects::confetti_shower;
use crate::core::schedule::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const BURST: usize = INITIAL_BURST_COUNT;

fn is_reveal(d: &Deferred<u32>) -> bool {
    matches!(d, Deferred::RevealConfirmation)
}

#[test]
fn new_schedule_queues_opening_burst() {
    let mut s: EffectSchedule<u32> = EffectSchedule::new(0.0);
    assert_eq!(s.pending(), BURST);
    assert_eq!(s.next_due(), Some(INITIAL_BURST_DELAY_MS));
    // Before the first 300ms cadence tick nothing is due.
    let early = s.poll(299.0);
    assert!(early.is_empty());
    let at_300 = s.poll(300.0);
    assert_eq!(at_300, vec![Deferred::SpawnAmbientHeart]);
    let burst = s.poll(1_400.0);
    // Ten burst hearts plus a single cadence spawn.
    assert_eq!(burst.len(), BURST + 1);
    assert!(burst.iter().all(|d| *d == Deferred::SpawnAmbientHeart));
    assert_eq!(s.pending(), 0);
}

#[test]
fn confirm_is_one_shot_and_reveals_after_half_a_second() {
    let mut s: EffectSchedule<u32> = EffectSchedule::new(0.0);
    s.poll(2_000.0);
    assert!(s.confirm(5_000.0));
    assert!(!s.confirm(5_010.0));
    assert!(!s.confirm(9_000.0));
    assert_eq!(s.pending(), 1);
    assert_eq!(s.next_due(), Some(5_000.0 + CONFIRM_REVEAL_DELAY_MS));

    assert!(!s.poll(5_499.0).iter().any(is_reveal));
    let due = s.poll(5_500.0);
    assert_eq!(due.iter().filter(|d| is_reveal(d)).count(), 1);
    assert!(!s.poll(20_000.0).iter().any(is_reveal));
}

#[test]
fn confetti_queued_after_reveal_spawns_on_stagger() {
    let mut s: EffectSchedule<u32> = EffectSchedule::new(0.0);
    s.poll(2_000.0);
    let mut rng = StdRng::seed_from_u64(9);
    s.queue_confetti(3_000.0, confetti_shower(&mut rng));
    assert_eq!(s.pending(), CONFETTI_COUNT);
    let first = s.poll(3_000.0);
    assert_eq!(
        first
            .iter()
            .filter(|d| matches!(d, Deferred::SpawnConfetti(_)))
            .count(),
        1
    );
    let rest = s.poll(3_000.0 + 1_980.0);
    assert_eq!(
        rest.iter()
            .filter(|d| matches!(d, Deferred::SpawnConfetti(_)))
            .count(),
        CONFETTI_COUNT - 1
    );
}

#[test]
fn trail_eviction_cancels_pending_retirement() {
    let mut s: EffectSchedule<u32> = EffectSchedule::new(0.0);
    s.poll(2_000.0);
    let now = 3_000.0;
    for id in 0..20 {
        assert_eq!(s.push_trail(now, id), None);
    }
    assert_eq!(s.push_trail(now, 20), Some(0));
    assert_eq!(s.live_trail(), TRAIL_CAPACITY);
    // One retirement per live dot; the evicted one was cancelled.
    assert_eq!(s.pending(), TRAIL_CAPACITY);

    let retired: Vec<u32> = s
        .poll(now + TRAIL_LIFETIME_MS)
        .into_iter()
        .filter_map(|d| match d {
            Deferred::Remove(id) => Some(id),
            _ => None,
        })
        .collect();
    assert_eq!(retired, (1..=20).collect::<Vec<_>>());
    assert_eq!(s.live_trail(), 0);
    assert_eq!(s.pending(), 0);
}

#[test]
fn dodge_schedules_shake_clear() {
    let mut s: EffectSchedule<u32> = EffectSchedule::new(0.0);
    s.poll(2_000.0);
    let mut rng = StdRng::seed_from_u64(4);
    let d = s.dodge(2_100.0, &mut rng);
    assert_eq!(d.count, 1);
    assert_eq!(s.next_due(), Some(2_100.0 + SHAKE_MS));
    let due = s.poll(2_600.0);
    assert!(due.contains(&Deferred::ClearShake));
}

#[test]
fn scheduled_restyle_and_remove_come_back_in_order() {
    let mut s: EffectSchedule<u32> = EffectSchedule::new(0.0);
    s.poll(2_000.0);
    s.after(2_500.0, EXPLOSION_LIFETIME_MS, Deferred::Remove(7));
    s.after(
        2_500.0,
        TRANSITION_KICK_MS,
        Deferred::Restyle(7, vec![("opacity", "0".to_string())]),
    );
    let due: Vec<Deferred<u32>> = s
        .poll(2_500.0 + EXPLOSION_LIFETIME_MS)
        .into_iter()
        .filter(|d| *d != Deferred::SpawnAmbientHeart)
        .collect();
    assert_eq!(
        due,
        vec![
            Deferred::Restyle(7, vec![("opacity", "0".to_string())]),
            Deferred::Remove(7),
        ]
    );
}
