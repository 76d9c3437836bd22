// input/konami.rs
//
// Fixed-sequence matcher for the easter egg: ↑ ↑ ↓ ↓ ← → ← → B A.
// Any key outside the expected next step resets the match to the start.

const SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

pub struct SequenceDetector {
    index: usize,
}

impl SequenceDetector {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Feed one key code. Returns true exactly when the final key of the
    /// sequence lands; the matcher then rewinds for another round.
    pub fn feed(&mut self, code: &str) -> bool {
        if code == SEQUENCE[self.index] {
            self.index += 1;
            if self.index == SEQUENCE.len() {
                self.index = 0;
                return true;
            }
        } else {
            self.index = 0;
        }
        false
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl Default for SequenceDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sequence_triggers() {
        let mut detector = SequenceDetector::new();
        let mut fired = false;
        for code in SEQUENCE {
            fired = detector.feed(code);
        }
        assert!(fired);
    }

    #[test]
    fn mismatch_resets_to_start() {
        let mut detector = SequenceDetector::new();
        detector.feed("ArrowUp");
        detector.feed("ArrowUp");
        detector.feed("KeyQ");
        // Starting over must still work.
        let mut fired = false;
        for code in SEQUENCE {
            fired = detector.feed(code);
        }
        assert!(fired);
    }

    #[test]
    fn partial_progress_does_not_trigger() {
        let mut detector = SequenceDetector::new();
        for code in &SEQUENCE[..9] {
            assert!(!detector.feed(code));
        }
    }

    #[test]
    fn can_trigger_twice() {
        let mut detector = SequenceDetector::new();
        for _ in 0..2 {
            let mut fired = false;
            for code in SEQUENCE {
                fired = detector.feed(code);
            }
            assert!(fired);
        }
    }
}
