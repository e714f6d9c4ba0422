//! Pointer trail state machine.
//!
//! Nothing in here touches the browser. The host feeds capability signals,
//! pointer samples and frame ticks in, and reads the bounded history, heading
//! and SVG path back out. Frame requests go through [`FrameScheduler`] so the
//! coalescing rules can be driven by hand in tests.

use std::collections::VecDeque;

/// Number of samples kept for the trail.
pub const TRAIL_CAPACITY: usize = 24;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
}

impl TrailPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn center(&self) -> TrailPoint {
        TrailPoint::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Fixed-capacity history, oldest first. Pushing into a full history drops
/// the oldest sample.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailHistory {
    points: VecDeque<TrailPoint>,
}

impl Default for TrailHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailHistory {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(TRAIL_CAPACITY),
        }
    }

    pub fn push(&mut self, point: TrailPoint) {
        if self.points.len() == TRAIL_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<TrailPoint> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    /// Direction of travel between the two newest samples, in degrees.
    /// Zero until there are two samples.
    pub fn heading_degrees(&self) -> f64 {
        let len = self.points.len();
        if len < 2 {
            return 0.0;
        }
        let prev = self.points[len - 2];
        let last = self.points[len - 1];
        (last.y - prev.y).atan2(last.x - prev.x).to_degrees()
    }

    /// SVG path data joining every sample in order, e.g. `M 0 0 L 10 10`.
    /// Empty until there are two samples.
    pub fn path_data(&self) -> String {
        if self.points.len() < 2 {
            return String::new();
        }
        let mut commands = Vec::with_capacity(self.points.len());
        for (i, p) in self.points.iter().enumerate() {
            let op = if i == 0 { "M" } else { "L" };
            commands.push(format!("{} {} {}", op, p.x, p.y));
        }
        commands.join(" ")
    }
}

/// Environment preferences that decide whether the trail runs at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub reduced_motion: bool,
    pub precise_pointer: bool,
}

impl Capabilities {
    pub fn allows_trail(&self) -> bool {
        !self.reduced_motion && self.precise_pointer
    }
}

/// What the host has to do after a capability update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Attach the pointer listener.
    Enabled,
    /// Detach the pointer listener.
    Disabled,
    Unchanged,
}

/// "Run this before the next repaint."
pub trait FrameScheduler {
    type Handle;

    /// Returns `None` if the host refused the request.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Debug, PartialEq)]
enum FrameState<H> {
    /// Enabled, nothing requested.
    Idle,
    /// Enabled, one frame check outstanding.
    Scheduled(H),
    /// Disabled or torn down; samples are dropped.
    Halted,
}

/// Everything the presentation layer needs to draw one trail frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrailFrame {
    pub points: Vec<TrailPoint>,
    pub heading: f64,
    pub path: String,
}

pub struct TrailAnimator<S: FrameScheduler> {
    scheduler: S,
    capabilities: Capabilities,
    frame: FrameState<S::Handle>,
    pending: Option<TrailPoint>,
    history: TrailHistory,
}

impl<S: FrameScheduler> TrailAnimator<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            capabilities: Capabilities::default(),
            frame: FrameState::Halted,
            pending: None,
            history: TrailHistory::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.frame, FrameState::Halted)
    }

    #[cfg(test)]
    pub fn has_scheduled_frame(&self) -> bool {
        matches!(self.frame, FrameState::Scheduled(_))
    }

    #[cfg(test)]
    pub fn history(&self) -> &TrailHistory {
        &self.history
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Re-evaluates the enabled state. `viewport` is only read when the
    /// animator switches on, to seed the trail at the screen center.
    pub fn set_capabilities<F>(&mut self, capabilities: Capabilities, viewport: F) -> Transition
    where
        F: FnOnce() -> Viewport,
    {
        self.capabilities = capabilities;
        match (self.is_enabled(), capabilities.allows_trail()) {
            (false, true) => {
                self.enable(viewport());
                Transition::Enabled
            }
            (true, false) => {
                self.disable();
                Transition::Disabled
            }
            _ => Transition::Unchanged,
        }
    }

    pub fn set_reduced_motion<F>(&mut self, reduced_motion: bool, viewport: F) -> Transition
    where
        F: FnOnce() -> Viewport,
    {
        let capabilities = Capabilities {
            reduced_motion,
            ..self.capabilities
        };
        self.set_capabilities(capabilities, viewport)
    }

    pub fn set_precise_pointer<F>(&mut self, precise_pointer: bool, viewport: F) -> Transition
    where
        F: FnOnce() -> Viewport,
    {
        let capabilities = Capabilities {
            precise_pointer,
            ..self.capabilities
        };
        self.set_capabilities(capabilities, viewport)
    }

    fn enable(&mut self, viewport: Viewport) {
        self.history.clear();
        self.history.push(viewport.center());
        self.pending = None;
        self.frame = FrameState::Idle;
    }

    /// Cancels any outstanding frame and drops the history. Safe to call
    /// repeatedly; also used on unmount.
    pub fn disable(&mut self) {
        if let FrameState::Scheduled(handle) =
            std::mem::replace(&mut self.frame, FrameState::Halted)
        {
            self.scheduler.cancel_frame(handle);
        }
        self.pending = None;
        self.history.clear();
    }

    /// Records the latest pointer position and makes sure one frame check is
    /// outstanding. Returns `false` if the sample was ignored.
    pub fn pointer_moved(&mut self, point: TrailPoint) -> bool {
        match self.frame {
            FrameState::Halted => false,
            FrameState::Scheduled(_) => {
                self.pending = Some(point);
                true
            }
            FrameState::Idle => {
                self.pending = Some(point);
                if let Some(handle) = self.scheduler.request_frame() {
                    self.frame = FrameState::Scheduled(handle);
                }
                true
            }
        }
    }

    /// Frame callback. Appends the pending sample, if any, and returns whether
    /// the history changed.
    pub fn frame_tick(&mut self) -> bool {
        if !matches!(self.frame, FrameState::Scheduled(_)) {
            return false;
        }
        self.frame = FrameState::Idle;
        match self.pending.take() {
            Some(point) => {
                self.history.push(point);
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> TrailFrame {
        TrailFrame {
            points: self.history.iter().copied().collect(),
            heading: self.history.heading_degrees(),
            path: self.history.path_data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeScheduler {
        next: u32,
        requested: Vec<u32>,
        cancelled: Vec<u32>,
        refuse: bool,
    }

    impl FrameScheduler for FakeScheduler {
        type Handle = u32;

        fn request_frame(&mut self) -> Option<u32> {
            if self.refuse {
                return None;
            }
            self.next += 1;
            self.requested.push(self.next);
            Some(self.next)
        }

        fn cancel_frame(&mut self, handle: u32) {
            self.cancelled.push(handle);
        }
    }

    const SCREEN: Viewport = Viewport { width: 1280.0, height: 800.0 };

    const ALLOWED: Capabilities = Capabilities {
        reduced_motion: false,
        precise_pointer: true,
    };

    fn enabled_animator() -> TrailAnimator<FakeScheduler> {
        let mut animator = TrailAnimator::new(FakeScheduler::default());
        assert_eq!(animator.set_capabilities(ALLOWED, || SCREEN), Transition::Enabled);
        animator
    }

    #[test]
    fn history_never_exceeds_capacity() {
        let mut history = TrailHistory::new();
        for i in 0..100 {
            history.push(TrailPoint::new(i as f64, 0.0));
            assert!(history.len() <= TRAIL_CAPACITY);
        }
        let xs: Vec<f64> = history.iter().map(|p| p.x).collect();
        let expected: Vec<f64> = (76..100).map(|i| i as f64).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn heading_and_path_from_two_points() {
        let mut history = TrailHistory::new();
        history.push(TrailPoint::new(0.0, 0.0));
        history.push(TrailPoint::new(10.0, 10.0));
        assert!((history.heading_degrees() - 45.0).abs() < 1e-9);
        assert_eq!(history.path_data(), "M 0 0 L 10 10");

        history.push(TrailPoint::new(10.5, 4.0));
        assert_eq!(history.path_data(), "M 0 0 L 10 10 L 10.5 4");
    }

    #[test]
    fn fewer_than_two_points_are_neutral() {
        let mut history = TrailHistory::new();
        assert_eq!(history.heading_degrees(), 0.0);
        assert_eq!(history.path_data(), "");
        history.push(TrailPoint::new(3.0, 4.0));
        assert_eq!(history.heading_degrees(), 0.0);
        assert_eq!(history.path_data(), "");
    }

    #[test]
    fn starts_disabled() {
        let mut animator = TrailAnimator::new(FakeScheduler::default());
        assert!(!animator.is_enabled());
        assert!(!animator.pointer_moved(TrailPoint::new(1.0, 1.0)));
        assert!(animator.history().is_empty());
        assert!(animator.scheduler().requested.is_empty());
    }

    #[test]
    fn enables_only_without_reduced_motion_and_with_fine_pointer() {
        let cases = [
            (false, false, false),
            (false, true, true),
            (true, false, false),
            (true, true, false),
        ];
        for (reduced_motion, precise_pointer, enabled) in cases {
            let mut animator = TrailAnimator::new(FakeScheduler::default());
            let caps = Capabilities { reduced_motion, precise_pointer };
            animator.set_capabilities(caps, || SCREEN);
            assert_eq!(animator.is_enabled(), enabled, "{:?}", caps);
        }
    }

    #[test]
    fn enabling_seeds_viewport_center() {
        let animator = enabled_animator();
        let frame = animator.snapshot();
        assert_eq!(frame.points, vec![TrailPoint::new(640.0, 400.0)]);
        assert_eq!(frame.heading, 0.0);
        assert!(frame.path.is_empty());
    }

    #[test]
    fn viewport_is_read_only_on_activation() {
        let mut animator = TrailAnimator::new(FakeScheduler::default());
        let mut reads = 0;
        animator.set_precise_pointer(true, || {
            reads += 1;
            SCREEN
        });
        animator.set_reduced_motion(false, || {
            reads += 1;
            SCREEN
        });
        assert_eq!(reads, 1);
    }

    #[test]
    fn burst_within_one_frame_appends_once() {
        let mut animator = enabled_animator();
        for i in 0..10 {
            animator.pointer_moved(TrailPoint::new(i as f64, i as f64));
        }
        assert_eq!(animator.scheduler().requested.len(), 1);
        assert!(animator.frame_tick());
        assert_eq!(animator.history().len(), 2);
        assert_eq!(animator.history().latest(), Some(TrailPoint::new(9.0, 9.0)));

        // Stray tick with nothing scheduled changes nothing.
        assert!(!animator.frame_tick());
        assert_eq!(animator.history().len(), 2);
    }

    #[test]
    fn next_frame_requested_after_current_completes() {
        let mut animator = enabled_animator();
        animator.pointer_moved(TrailPoint::new(1.0, 1.0));
        animator.pointer_moved(TrailPoint::new(2.0, 2.0));
        animator.frame_tick();
        animator.pointer_moved(TrailPoint::new(3.0, 3.0));
        assert_eq!(animator.scheduler().requested, vec![1, 2]);
        animator.frame_tick();
        let xs: Vec<f64> = animator.history().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![640.0, 2.0, 3.0]);
    }

    #[test]
    fn long_session_keeps_last_samples() {
        let mut animator = enabled_animator();
        for i in 0..60 {
            animator.pointer_moved(TrailPoint::new(i as f64, 0.0));
            animator.frame_tick();
        }
        let frame = animator.snapshot();
        assert_eq!(frame.points.len(), TRAIL_CAPACITY);
        assert_eq!(frame.points.first(), Some(&TrailPoint::new(36.0, 0.0)));
        assert_eq!(frame.points.last(), Some(&TrailPoint::new(59.0, 0.0)));
    }

    #[test]
    fn teardown_cancels_frame_and_ignores_later_samples() {
        let mut animator = enabled_animator();
        animator.pointer_moved(TrailPoint::new(5.0, 5.0));
        assert!(animator.has_scheduled_frame());

        animator.disable();
        assert_eq!(animator.scheduler().cancelled, vec![1]);
        assert!(!animator.is_enabled());

        assert!(!animator.pointer_moved(TrailPoint::new(6.0, 6.0)));
        assert!(!animator.frame_tick());
        assert!(animator.history().is_empty());
        assert_eq!(animator.scheduler().requested.len(), 1);
    }

    #[test]
    fn capability_loss_disables_and_regain_restarts_at_center() {
        let mut animator = enabled_animator();
        animator.pointer_moved(TrailPoint::new(5.0, 5.0));
        animator.frame_tick();
        assert_eq!(animator.history().len(), 2);

        assert_eq!(animator.set_reduced_motion(true, || SCREEN), Transition::Disabled);
        assert!(animator.history().is_empty());
        assert_eq!(animator.set_reduced_motion(true, || SCREEN), Transition::Unchanged);

        let small = Viewport { width: 200.0, height: 100.0 };
        assert_eq!(animator.set_reduced_motion(false, || small), Transition::Enabled);
        assert_eq!(animator.snapshot().points, vec![TrailPoint::new(100.0, 50.0)]);
    }

    #[test]
    fn refused_frame_request_is_retried_on_next_sample() {
        let mut animator = enabled_animator();
        animator.scheduler.refuse = true;
        animator.pointer_moved(TrailPoint::new(1.0, 1.0));
        assert!(!animator.has_scheduled_frame());

        animator.scheduler.refuse = false;
        animator.pointer_moved(TrailPoint::new(2.0, 2.0));
        assert!(animator.has_scheduled_frame());
        assert!(animator.frame_tick());
        assert_eq!(animator.history().latest(), Some(TrailPoint::new(2.0, 2.0)));
    }
}
