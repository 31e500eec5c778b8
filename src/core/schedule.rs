// Platform-free bookkeeping behind the DOM effects.
//
// `H` is whatever handle the caller uses for a created element. The browser
// build uses `HtmlElement`; tests use plain integers.

use crate::core::constants::{
    AMBIENT_INTERVAL_MS, CONFIRM_REVEAL_DELAY_MS, SHAKE_MS, TRAIL_CAPACITY, TRAIL_LIFETIME_MS,
};
use crate::core::effects::{initial_burst_delays, ConfettiPiece};
use crate::core::interact::{Dodge, DodgeCounter};
use crate::core::timeline::{Cadence, Timeline, Token};
use crate::core::trail::TrailBuffer;
use rand::Rng;

/// Work deferred to a later frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Deferred<H> {
    Remove(H),
    Restyle(H, Vec<(&'static str, String)>),
    SpawnAmbientHeart,
    SpawnConfetti(ConfettiPiece),
    RevealConfirmation,
    ClearShake,
    // Resolved inside `poll` into a `Remove` of the matching trail dot.
    RetireTrail,
}

struct TrailDot<H> {
    token: Token,
    handle: H,
}

pub struct EffectSchedule<H> {
    timeline: Timeline<Deferred<H>>,
    ambient: Cadence,
    trail: TrailBuffer<TrailDot<H>>,
    dodges: DodgeCounter,
    confirmed: bool,
}

impl<H> EffectSchedule<H> {
    /// Start the ambient cadence at `start_ms` and queue the opening heart burst.
    pub fn new(start_ms: f64) -> Self {
        let mut timeline = Timeline::new();
        for at in initial_burst_delays() {
            timeline.schedule(start_ms + at, Deferred::SpawnAmbientHeart);
        }
        Self {
            timeline,
            ambient: Cadence::new(start_ms, AMBIENT_INTERVAL_MS),
            trail: TrailBuffer::with_capacity(TRAIL_CAPACITY),
            dodges: DodgeCounter::default(),
            confirmed: false,
        }
    }

    /// Everything due at `now_ms`, in firing order. At most one ambient
    /// spawn is produced per call.
    pub fn poll(&mut self, now_ms: f64) -> Vec<Deferred<H>> {
        let mut out = Vec::new();
        if self.ambient.poll(now_ms) {
            out.push(Deferred::SpawnAmbientHeart);
        }
        for (token, action) in self.timeline.drain_due(now_ms) {
            match action {
                Deferred::RetireTrail => {
                    if let Some(dot) = self.trail.remove_where(|d| d.token == token) {
                        out.push(Deferred::Remove(dot.handle));
                    }
                }
                other => out.push(other),
            }
        }
        out
    }

    #[inline]
    pub fn after(&mut self, now_ms: f64, delay_ms: f64, action: Deferred<H>) -> Token {
        self.timeline.schedule_after(now_ms, delay_ms, action)
    }

    /// Track a new trail dot. Past capacity the oldest dot is handed back for
    /// immediate removal and its pending retirement is cancelled.
    pub fn push_trail(&mut self, now_ms: f64, handle: H) -> Option<H> {
        let token = self
            .timeline
            .schedule_after(now_ms, TRAIL_LIFETIME_MS, Deferred::RetireTrail);
        let evicted = self.trail.push(TrailDot { token, handle })?;
        self.timeline.cancel(evicted.token);
        Some(evicted.handle)
    }

    /// Register a dodge; the panel shake clears `SHAKE_MS` later.
    pub fn dodge(&mut self, now_ms: f64, rng: &mut impl Rng) -> Dodge {
        let d = self.dodges.dodge(rng);
        self.timeline
            .schedule_after(now_ms, SHAKE_MS, Deferred::ClearShake);
        d
    }

    /// One-shot. Queues the confirmation reveal and returns `false` on repeats.
    pub fn confirm(&mut self, now_ms: f64) -> bool {
        if self.confirmed {
            return false;
        }
        self.confirmed = true;
        self.timeline.schedule_after(
            now_ms,
            CONFIRM_REVEAL_DELAY_MS,
            Deferred::RevealConfirmation,
        );
        true
    }

    /// Queue a confetti shower, each piece at its own delay from `now_ms`.
    pub fn queue_confetti(&mut self, now_ms: f64, pieces: Vec<ConfettiPiece>) {
        for piece in pieces {
            let delay = piece.delay_ms;
            self.timeline
                .schedule_after(now_ms, delay, Deferred::SpawnConfetti(piece));
        }
    }

    /// Scheduled actions that will still fire.
    pub fn pending(&self) -> usize {
        self.timeline.pending()
    }

    pub fn next_due(&self) -> Option<f64> {
        self.timeline.next_due()
    }

    pub fn live_trail(&self) -> usize {
        self.trail.len()
    }
}
