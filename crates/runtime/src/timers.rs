use foundation::math::precision::stable_total_cmp_f64;
use foundation::time::Millis;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TimerId,
    deadline: Millis,
    payload: T,
}

/// Deterministic one-shot timers.
///
/// Ordering contract:
/// - Due timers fire in `(deadline, insertion order)` order.
/// - A timer fires at most once; cancelled timers never fire.
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, deadline: Millis, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Entry {
            id,
            deadline,
            payload,
        });
        id
    }

    /// Returns `true` if the timer was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Millis> {
        self.entries
            .iter()
            .map(|e| e.deadline)
            .min_by(|a, b| stable_total_cmp_f64(a.0, b.0))
    }

    /// Removes and returns every timer whose deadline is `<= now`.
    pub fn drain_due(&mut self, now: Millis) -> Vec<T> {
        let mut due = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if now.has_reached(entry.deadline) {
                due.push(entry);
            } else {
                kept.push(entry);
            }
        }
        self.entries = kept;

        due.sort_by(|a, b| {
            stable_total_cmp_f64(a.deadline.0, b.deadline.0).then_with(|| a.id.cmp(&b.id))
        });
        due.into_iter().map(|e| e.payload).collect()
    }
}
