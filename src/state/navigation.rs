// Navigation state - current page, the in-flight transition and its completion
use crate::feedback::TransitionHook;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// A page turn is in flight. `next` never changes until completion.
    Transitioning { next: usize, started_at: Instant },
}

/// Visual role of a mounted page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotRole {
    Current,
    Leaving,
    Entering,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    pub role: SlotRole,
}

/// Page-turn state machine.
///
/// Every request is either accepted, starting exactly one transition, or
/// silently dropped. Completion is observed by [`Paginator::tick`] on a later
/// frame once the transition delay has elapsed.
pub struct Paginator {
    current: usize,
    phase: Phase,
    total: usize,
    delay: Duration,
    hook: Box<dyn TransitionHook>,
}

impl Paginator {
    pub fn new(total: usize, delay: Duration, hook: Box<dyn TransitionHook>) -> Self {
        Self {
            current: 0,
            phase: Phase::Idle,
            total,
            delay,
            hook,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current
    }

    pub fn next_page(&self) -> Option<usize> {
        match self.phase {
            Phase::Idle => None,
            Phase::Transitioning { next, .. } => Some(next),
        }
    }

    /// The page the chrome marks as active: the target of a pending turn, else the current page.
    pub fn highlighted_page(&self) -> usize {
        self.next_page().unwrap_or(self.current)
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    pub fn total_pages(&self) -> usize {
        self.total
    }

    pub fn is_last_page(&self) -> bool {
        self.current + 1 >= self.total
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start a transition to `target`. Returns false when the request was
    /// dropped: a transition is already in flight, the target is the current
    /// page, or the target is out of bounds.
    pub fn request_page(&mut self, target: usize, now: Instant) -> bool {
        if self.is_transitioning() || target == self.current || target >= self.total {
            return false;
        }

        tracing::debug!(from = self.current, to = target, "page turn started");
        self.phase = Phase::Transitioning {
            next: target,
            started_at: now,
        };

        if let Err(err) = self.hook.transition_started(self.current, target) {
            tracing::debug!(%err, "page-turn feedback failed");
        }
        true
    }

    pub fn advance(&mut self, now: Instant) -> bool {
        match self.current.checked_add(1) {
            Some(target) => self.request_page(target, now),
            None => false,
        }
    }

    pub fn retreat(&mut self, now: Instant) -> bool {
        match self.current.checked_sub(1) {
            Some(target) => self.request_page(target, now),
            None => false,
        }
    }

    pub fn jump_to_first(&mut self, now: Instant) -> bool {
        self.request_page(0, now)
    }

    pub fn jump_to_last(&mut self, now: Instant) -> bool {
        match self.total.checked_sub(1) {
            Some(last) => self.request_page(last, now),
            None => false,
        }
    }

    /// Commit the pending transition once its delay has elapsed.
    /// Returns true on the frame the transition completes.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Phase::Transitioning { next, started_at } = self.phase else {
            return false;
        };
        if now.saturating_duration_since(started_at) < self.delay {
            return false;
        }

        tracing::debug!(page = next, "page turn completed");
        self.current = next;
        self.phase = Phase::Idle;
        true
    }

    /// Animation progress of the pending transition in `[0, 1]`; 0 when idle.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Transitioning { started_at, .. } => {
                if self.delay.is_zero() {
                    return 1.0;
                }
                let elapsed = now.saturating_duration_since(started_at);
                (elapsed.as_secs_f32() / self.delay.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    /// Pages the view must mount, in paint order.
    pub fn slots(&self) -> Vec<Slot> {
        match self.phase {
            Phase::Idle => vec![Slot {
                index: self.current,
                role: SlotRole::Current,
            }],
            Phase::Transitioning { next, .. } => vec![
                Slot {
                    index: self.current,
                    role: SlotRole::Leaving,
                },
                Slot {
                    index: next,
                    role: SlotRole::Entering,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeedbackError;
    use std::cell::RefCell;
    use std::rc::Rc;

    const DELAY: Duration = Duration::from_millis(450);

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<(usize, usize)>>>,
        fail: bool,
    }

    impl TransitionHook for Recorder {
        fn transition_started(&mut self, from: usize, to: usize) -> Result<(), FeedbackError> {
            self.calls.borrow_mut().push((from, to));
            if self.fail {
                Err(FeedbackError::Unavailable)
            } else {
                Ok(())
            }
        }
    }

    fn paginator(total: usize) -> (Paginator, Recorder) {
        let recorder = Recorder::default();
        (
            Paginator::new(total, DELAY, Box::new(recorder.clone())),
            recorder,
        )
    }

    #[test]
    fn test_starts_idle_on_first_page() {
        let (p, _) = paginator(9);
        assert_eq!(p.current_page(), 0);
        assert_eq!(p.next_page(), None);
        assert!(!p.is_transitioning());
    }

    #[test]
    fn test_request_transitions_then_completes() {
        for target in 1..9 {
            let (mut p, _) = paginator(9);
            let t0 = Instant::now();
            assert!(p.request_page(target, t0));
            assert!(p.is_transitioning());
            assert_eq!(p.next_page(), Some(target));
            assert_eq!(p.current_page(), 0);

            assert!(!p.tick(t0 + DELAY / 2));
            assert!(p.is_transitioning());

            assert!(p.tick(t0 + DELAY));
            assert!(!p.is_transitioning());
            assert_eq!(p.current_page(), target);
            assert_eq!(p.next_page(), None);
        }
    }

    #[test]
    fn test_requests_during_transition_are_dropped() {
        let (mut p, recorder) = paginator(9);
        let t0 = Instant::now();
        assert!(p.request_page(3, t0));

        let later = t0 + Duration::from_millis(10);
        assert!(!p.request_page(5, later));
        assert!(!p.advance(later));
        assert!(!p.retreat(later));
        assert!(!p.jump_to_last(later));
        assert_eq!(p.next_page(), Some(3));
        assert_eq!(p.current_page(), 0);
        assert_eq!(recorder.calls.borrow().len(), 1);

        p.tick(t0 + DELAY);
        assert_eq!(p.current_page(), 3);
    }

    #[test]
    fn test_self_transition_is_noop() {
        let (mut p, recorder) = paginator(9);
        let t0 = Instant::now();
        assert!(!p.request_page(0, t0));
        assert!(!p.jump_to_first(t0));
        assert!(!p.is_transitioning());

        p.request_page(4, t0);
        p.tick(t0 + DELAY);
        assert!(!p.request_page(4, t0 + DELAY));
        assert!(!p.is_transitioning());
        assert_eq!(recorder.calls.borrow().as_slice(), &[(0, 4)]);
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let (mut p, _) = paginator(9);
        let now = Instant::now();
        assert!(!p.retreat(now));
        assert!(!p.request_page(9, now));
        assert!(!p.request_page(usize::MAX, now));
        assert!(!p.is_transitioning());
        assert_eq!(p.current_page(), 0);
    }

    #[test]
    fn test_advance_through_book() {
        let (mut p, _) = paginator(10);
        let mut now = Instant::now();
        for _ in 0..9 {
            assert!(p.advance(now));
            now += DELAY;
            assert!(p.tick(now));
        }
        assert_eq!(p.current_page(), 9);
        assert!(p.is_last_page());

        assert!(!p.advance(now));
        assert!(!p.is_transitioning());
        assert_eq!(p.current_page(), 9);
    }

    #[test]
    fn test_jumps() {
        let (mut p, _) = paginator(9);
        let t0 = Instant::now();
        assert!(p.jump_to_last(t0));
        p.tick(t0 + DELAY);
        assert_eq!(p.current_page(), 8);

        let t1 = t0 + DELAY * 2;
        assert!(p.jump_to_first(t1));
        p.tick(t1 + DELAY);
        assert_eq!(p.current_page(), 0);
    }

    #[test]
    fn test_hook_fires_once_per_accepted_request() {
        let (mut p, recorder) = paginator(9);
        let t0 = Instant::now();
        p.advance(t0);
        p.advance(t0);
        p.tick(t0 + DELAY);
        p.retreat(t0 + DELAY);
        assert_eq!(recorder.calls.borrow().as_slice(), &[(0, 1), (1, 0)]);
    }

    #[test]
    fn test_failing_hook_does_not_block_navigation() {
        let recorder = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let mut p = Paginator::new(9, DELAY, Box::new(recorder));
        let t0 = Instant::now();
        assert!(p.advance(t0));
        assert!(p.tick(t0 + DELAY));
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn test_slots_follow_phase() {
        let (mut p, _) = paginator(9);
        let t0 = Instant::now();
        assert_eq!(
            p.slots(),
            vec![Slot {
                index: 0,
                role: SlotRole::Current
            }]
        );

        p.request_page(2, t0);
        assert_eq!(
            p.slots(),
            vec![
                Slot {
                    index: 0,
                    role: SlotRole::Leaving
                },
                Slot {
                    index: 2,
                    role: SlotRole::Entering
                },
            ]
        );

        p.tick(t0 + DELAY);
        assert_eq!(
            p.slots(),
            vec![Slot {
                index: 2,
                role: SlotRole::Current
            }]
        );
    }

    #[test]
    fn test_highlight_follows_pending_turn() {
        let (mut p, _) = paginator(9);
        let t0 = Instant::now();
        assert_eq!(p.highlighted_page(), 0);

        p.request_page(5, t0);
        assert_eq!(p.current_page(), 0);
        assert_eq!(p.highlighted_page(), 5);

        p.tick(t0 + DELAY);
        assert_eq!(p.highlighted_page(), 5);
    }

    #[test]
    fn test_progress() {
        let (mut p, _) = paginator(9);
        let t0 = Instant::now();
        assert_eq!(p.progress(t0), 0.0);

        p.advance(t0);
        assert_eq!(p.progress(t0), 0.0);
        let half = p.progress(t0 + DELAY / 2);
        assert!((half - 0.5).abs() < 0.01);
        assert_eq!(p.progress(t0 + DELAY * 2), 1.0);
    }
}
