// core/timers.rs
//
// Deferred one-shot callbacks for the single-threaded frame loop.
// "Schedule a payload N seconds from now" — achievement popups, glitch
// auto-end. Timers are cancellable; teardown must cancel anything pending
// so a stale callback can never act on reset state.

/// Handle to a scheduled timer for later cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u32);

struct Pending<K> {
    id: TimerId,
    remaining: f32,
    payload: K,
}

/// Queue of pending one-shot timers, advanced once per frame.
pub struct TimerQueue<K> {
    pending: Vec<Pending<K>>,
    next_id: u32,
}

impl<K: Clone> TimerQueue<K> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule a payload to fire after `delay` seconds. Returns a handle
    /// usable with [`cancel`](Self::cancel).
    pub fn schedule(&mut self, delay: f32, payload: K) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            remaining: delay.max(0.0),
            payload,
        });
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Advance all timers and collect the payloads that fired this frame,
    /// in scheduling order.
    pub fn tick(&mut self, dt: f32) -> Vec<K> {
        let mut fired = Vec::new();
        for timer in &mut self.pending {
            timer.remaining -= dt;
        }
        self.pending.retain(|t| {
            if t.remaining <= 0.0 {
                fired.push(t.payload.clone());
                false
            } else {
                true
            }
        });
        fired
    }

    /// Drop every pending timer without firing it.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<K: Clone> Default for TimerQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_delay() {
        let mut timers = TimerQueue::new();
        timers.schedule(1.0, "popup");
        assert!(timers.tick(0.5).is_empty());
        let fired = timers.tick(0.6);
        assert_eq!(fired, vec!["popup"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule(0.5, "glitch");
        assert!(timers.cancel(id));
        assert!(timers.tick(1.0).is_empty());
        // Second cancel is a no-op
        assert!(!timers.cancel(id));
    }

    #[test]
    fn multiple_timers_fire_independently() {
        let mut timers = TimerQueue::new();
        timers.schedule(0.2, 1);
        timers.schedule(0.8, 2);
        assert_eq!(timers.tick(0.3), vec![1]);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.tick(0.6), vec![2]);
    }

    #[test]
    fn clear_drops_everything_silently() {
        let mut timers = TimerQueue::new();
        timers.schedule(0.1, ());
        timers.schedule(0.2, ());
        timers.clear();
        assert!(timers.tick(1.0).is_empty());
    }
}
