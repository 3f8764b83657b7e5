//! Edge detection for held operator inputs.
//!
//! An operator button reads `true` for as long as it is held, which spans
//! many ticks. Mechanisms only want to react once per press, so every
//! [`ControlInput`] goes through an [`EdgeDetector`] that reports a single
//! "just pressed" edge and then stays quiet until the button is released.
//!
//! # Latch Rules
//!
//! | raw | latched | edge | latched after |
//! |-----|---------|------|---------------|
//! | `true` | `false` | yes | `true` |
//! | `true` | `true` | no | `true` |
//! | `false` | any | no | `false` |
//!
//! A press shorter than one tick that is never sampled produces no edge; a
//! release and re-press between two samples collapses into one press.
//!
//! # Example
//!
//! ```rust
//! use teleop_core::EdgeDetector;
//!
//! let mut detector = EdgeDetector::new();
//! let raw = [false, false, true, true, false];
//! let edges: Vec<bool> = raw.iter().map(|&r| detector.update(r)).collect();
//! assert_eq!(edges, [false, false, true, false, false]);
//! ```

use crate::input::{ButtonSample, ControlInput};

/// Latch for one logical input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeDetector {
    latched: bool,
}

impl EdgeDetector {
    /// Create an armed detector.
    pub const fn new() -> Self {
        Self { latched: false }
    }

    /// Feed this tick's raw level and return whether it is a new press.
    ///
    /// Latching and edge emission happen in the same step.
    #[inline]
    pub fn update(&mut self, raw: bool) -> bool {
        let edge = raw && !self.latched;
        self.latched = raw;
        edge
    }

    /// True while an edge has already been reported for the current press.
    #[inline]
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Re-arm the detector.
    #[inline]
    pub fn reset(&mut self) {
        self.latched = false;
    }
}

/// Edges produced for one tick, one flag per [`ControlInput`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Edges([bool; ControlInput::COUNT]);

impl Edges {
    /// True if `input` was pressed this tick.
    #[inline]
    pub fn pressed(&self, input: ControlInput) -> bool {
        self.0[input.index()]
    }

    /// True if any input was pressed this tick.
    pub fn any(&self) -> bool {
        self.0.iter().any(|&e| e)
    }
}

/// Debounce state for every logical input.
///
/// Owned by the teleop controller and mutated only from its tick.
#[derive(Clone, Debug, Default)]
pub struct DebounceBank {
    detectors: [EdgeDetector; ControlInput::COUNT],
}

impl DebounceBank {
    /// Create a bank with every detector armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every detector against this tick's raw levels.
    pub fn update(&mut self, raw: &ButtonSample) -> Edges {
        let mut edges = [false; ControlInput::COUNT];
        for input in ControlInput::ALL {
            let i = input.index();
            edges[i] = self.detectors[i].update(raw.get(input));
        }
        Edges(edges)
    }

    /// Re-arm every detector.
    pub fn reset(&mut self) {
        for detector in &mut self.detectors {
            detector.reset();
        }
    }

    /// Re-arm one input so its next high sample is an edge again.
    pub fn rearm(&mut self, input: ControlInput) {
        self.detectors[input.index()].reset();
    }

    /// Whether the detector for `input` is currently latched.
    pub fn is_latched(&self, input: ControlInput) -> bool {
        self.detectors[input.index()].is_latched()
    }
}
