// Deterministic replacement for fire-and-forget browser timers.
//
// Every transient effect registers its follow-up work (restyle, removal,
// staggered spawn) here when it is created. The frame loop sweeps the
// timeline once per tick, so lifetimes are driven by the same clock the
// tests can step by hand.

use fnv::FnvHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Handle to a scheduled entry; used to cancel it before it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token(u64);

struct Entry<T> {
    due_ms: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // BinaryHeap is a max-heap: invert so the earliest (then first-scheduled) pops first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due_ms
            .total_cmp(&self.due_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

pub struct Timeline<T> {
    heap: BinaryHeap<Entry<T>>,
    live: FnvHashSet<u64>,
    next_seq: u64,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: FnvHashSet::default(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, due_ms: f64, item: T) -> Token {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { due_ms, seq, item });
        self.live.insert(seq);
        Token(seq)
    }

    #[inline]
    pub fn schedule_after(&mut self, now_ms: f64, delay_ms: f64, item: T) -> Token {
        self.schedule(now_ms + delay_ms.max(0.0), item)
    }

    /// Drop a pending entry. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, token: Token) -> bool {
        self.live.remove(&token.0)
    }

    /// Pop every entry due at or before `now_ms`, earliest first; entries with
    /// the same due time come out in scheduling order.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<(Token, T)> {
        let mut out = Vec::new();
        while self.heap.peek().is_some_and(|e| e.due_ms <= now_ms) {
            let Some(entry) = self.heap.pop() else { break };
            if self.live.remove(&entry.seq) {
                out.push((Token(entry.seq), entry.item));
            }
        }
        out
    }

    /// Number of entries that will still fire.
    pub fn pending(&self) -> usize {
        self.live.len()
    }

    /// Earliest due time among live entries.
    pub fn next_due(&self) -> Option<f64> {
        self.heap
            .iter()
            .filter(|e| self.live.contains(&e.seq))
            .map(|e| e.due_ms)
            .min_by(|a, b| a.total_cmp(b))
    }
}

/// Fixed-period trigger polled from the frame loop.
///
/// Fires at most once per poll. After a stall (hidden tab) the next deadline
/// is rebased on `now` instead of replaying every missed period.
#[derive(Clone, Debug)]
pub struct Cadence {
    period_ms: f64,
    next_ms: f64,
}

impl Cadence {
    pub fn new(start_ms: f64, period_ms: f64) -> Self {
        Self {
            period_ms,
            next_ms: start_ms + period_ms,
        }
    }

    pub fn poll(&mut self, now_ms: f64) -> bool {
        if now_ms < self.next_ms {
            return false;
        }
        self.next_ms += self.period_ms;
        if self.next_ms <= now_ms {
            self.next_ms = now_ms + self.period_ms;
        }
        true
    }
}
