// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan session state machine: deadzone, direction commits, and item capture.
//!
//! [`PanTracker`] consumes `(phase, delta)` samples from a platform gesture
//! recognizer and emits at most one [`PanEvent`] per sample. It knows nothing
//! about menus or items; the caller routes each event (typically a menu that
//! either moves focus or forwards angles to the focused item).
//!
//! ## Behavior
//!
//! 1. **Deadzone**: accumulated movement below the commit distance emits
//!    nothing, so touchpad jitter never moves focus.
//! 2. **Commit**: when the accumulated run crosses the commit distance, a
//!    [`PanEvent::Commit`] reports its direction and the run re-arms. A long
//!    steady pan therefore commits repeatedly, each leg measured from the
//!    previous commit point, which is what lets one continuous gesture walk
//!    focus across several items.
//! 3. **Capture**: after a commit the caller may hand the stream to an item
//!    with [`PanTracker::set_captured`]. While captured, every sample emits a
//!    [`PanEvent::Sample`] whose angle is measured over the whole session, and
//!    gesture end delivers a final sample with `last` set.
//! 4. **End and cancel**: both clear the session; a platform cancel is an end
//!    for cleanup purposes. Nothing here ever activates an item — activation
//!    is button-driven and lives with the caller.
//! 5. **Defense**: a `Change` with no preceding `Begin` is dropped.
//!
//! ## Usage
//!
//! Deadzone, then a commit:
//!
//! ```
//! use kurbo::Vec2;
//! use veer_gesture::pan::{PanEvent, PanPhase, PanTracker};
//!
//! let mut tracker = PanTracker::new();
//! tracker.feed(PanPhase::Begin, Vec2::ZERO);
//!
//! // Small jitter stays inside the deadzone…
//! assert!(tracker.feed(PanPhase::Change, Vec2::new(4.0, 0.0)).is_none());
//!
//! // …until the run crosses the commit distance.
//! let event = tracker.feed(PanPhase::Change, Vec2::new(40.0, 0.0));
//! assert!(matches!(event, Some(PanEvent::Commit { first: true, .. })));
//! ```
//!
//! Handing the stream to a focused item:
//!
//! ```
//! use kurbo::Vec2;
//! use veer_gesture::pan::{PanEvent, PanPhase, PanTracker};
//!
//! let mut tracker = PanTracker::new();
//! tracker.feed(PanPhase::Begin, Vec2::ZERO);
//! tracker.feed(PanPhase::Change, Vec2::new(0.0, 35.0));
//!
//! // The caller decided the focused item takes the stream.
//! tracker.set_captured(true);
//!
//! let sample = tracker.feed(PanPhase::Change, Vec2::new(0.0, 10.0));
//! assert!(matches!(sample, Some(PanEvent::Sample { last: false, .. })));
//!
//! // Gesture end delivers one final sample.
//! let done = tracker.feed(PanPhase::End, Vec2::ZERO);
//! assert!(matches!(done, Some(PanEvent::Sample { last: true, .. })));
//! assert!(!tracker.is_active());
//! ```

use kurbo::Vec2;

use veer_focus::pan_angle;

/// Default commit distance in host coordinate units.
///
/// A pan must travel at least this far before its direction is acted on.
pub const DEFAULT_COMMIT_DISTANCE: f64 = 30.0;

/// Phase of a platform pan sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanPhase {
    /// A touch landed; a new session starts.
    Begin,
    /// The touch moved by a delta.
    Change,
    /// The touch lifted; the session ends normally.
    End,
    /// The platform cancelled the gesture; the session ends without intent.
    Cancel,
}

/// Session state of a [`PanTracker`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanState {
    /// No session in progress.
    Idle,
    /// A session is accumulating movement toward the next commit.
    Tracking,
    /// An item holds the stream; samples are delivered raw.
    Captured,
}

/// Event emitted by [`PanTracker::feed`] for the caller to route.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PanEvent {
    /// The accumulated run crossed the commit distance.
    Commit {
        /// Direction of the run, degrees clockwise from north.
        angle_deg: f64,
        /// True only for the session's first emission.
        first: bool,
    },
    /// A raw sample while an item holds the stream.
    Sample {
        /// Direction of the whole session's translation, degrees clockwise
        /// from north.
        angle_deg: f64,
        /// True for the final sample delivered as the session ends.
        last: bool,
    },
}

/// Pan session state machine.
///
/// Owns the ephemeral per-gesture state: accumulated translation, the
/// re-arming run toward the next commit, and whether an item has captured the
/// stream. One tracker serves one input source; sessions are strictly
/// sequential.
#[derive(Clone, Debug)]
pub struct PanTracker {
    commit_distance: f64,
    state: PanState,
    /// Translation since session start; captured samples report its angle.
    total: Vec2,
    /// Translation since the last commit (or capture release).
    run: Vec2,
    emitted: bool,
}

impl PanTracker {
    /// Create a tracker with [`DEFAULT_COMMIT_DISTANCE`].
    pub fn new() -> Self {
        Self::with_commit_distance(DEFAULT_COMMIT_DISTANCE)
    }

    /// Create a tracker with a custom commit distance, in host coordinate
    /// units.
    pub fn with_commit_distance(commit_distance: f64) -> Self {
        Self {
            commit_distance,
            state: PanState::Idle,
            total: Vec2::ZERO,
            run: Vec2::ZERO,
            emitted: false,
        }
    }

    /// The configured commit distance.
    pub fn commit_distance(&self) -> f64 {
        self.commit_distance
    }

    /// Current session state.
    pub fn state(&self) -> PanState {
        self.state
    }

    /// Whether a session is in progress.
    pub fn is_active(&self) -> bool {
        self.state != PanState::Idle
    }

    /// Whether an item currently holds the stream.
    pub fn is_captured(&self) -> bool {
        self.state == PanState::Captured
    }

    /// Hand the stream to the focused item, or take it back.
    ///
    /// Capturing is only meaningful mid-session, right after a commit was
    /// routed to an item that claims control; outside a session this is
    /// ignored. Releasing re-arms the run so the next commit needs a fresh
    /// threshold crossing.
    pub fn set_captured(&mut self, captured: bool) {
        match (self.state, captured) {
            (PanState::Tracking, true) => self.state = PanState::Captured,
            (PanState::Captured, false) => {
                self.state = PanState::Tracking;
                self.run = Vec2::ZERO;
            }
            _ => {}
        }
    }

    /// Feed one platform sample and get the event to route, if any.
    pub fn feed(&mut self, phase: PanPhase, delta: Vec2) -> Option<PanEvent> {
        match phase {
            PanPhase::Begin => {
                self.state = PanState::Tracking;
                self.total = delta;
                self.run = delta;
                self.emitted = false;
                None
            }
            PanPhase::Change => match self.state {
                PanState::Idle => None,
                PanState::Tracking => {
                    self.total += delta;
                    self.run += delta;
                    if self.run.hypot2() < self.commit_distance * self.commit_distance {
                        return None;
                    }
                    let angle_deg = pan_angle(self.run);
                    self.run = Vec2::ZERO;
                    let first = !self.emitted;
                    self.emitted = true;
                    Some(PanEvent::Commit { angle_deg, first })
                }
                PanState::Captured => {
                    self.total += delta;
                    Some(PanEvent::Sample {
                        angle_deg: pan_angle(self.total),
                        last: false,
                    })
                }
            },
            PanPhase::End | PanPhase::Cancel => {
                let event = (self.state == PanState::Captured).then(|| PanEvent::Sample {
                    angle_deg: pan_angle(self.total),
                    last: true,
                });
                self.state = PanState::Idle;
                self.total = Vec2::ZERO;
                self.run = Vec2::ZERO;
                self.emitted = false;
                event
            }
        }
    }
}

impl Default for PanTracker {
    fn default() -> Self {
        Self::new()
    }
}
