use log::debug;

use crate::ContainerSize;

/// Tracks the largest square that fits the board container and decides when
/// a new logical size should be published.
#[derive(Clone, Debug)]
pub struct ResizeSynchronizer {
    current: f64,
    epsilon: f64,
}

impl ResizeSynchronizer {
    pub fn new(initial: f64, epsilon: f64) -> Self {
        Self {
            current: initial,
            epsilon,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    /// Returns the new logical size when `size` moves the fitted square by
    /// more than the epsilon. Collapsed or non-finite containers are ignored.
    pub fn observe(&mut self, size: ContainerSize) -> Option<f64> {
        // f64::min would discard a NaN side
        let candidate = if size.width.is_nan() || size.height.is_nan() {
            f64::NAN
        } else {
            size.width.min(size.height)
        };
        if !(candidate.is_finite() && candidate > 0.0) {
            debug!("Ignoring degenerate container {}x{}", size.width, size.height);
            return None;
        }
        if (candidate - self.current).abs() <= self.epsilon {
            return None;
        }
        debug!("Board size {} -> {candidate}", self.current);
        self.current = candidate;
        Some(candidate)
    }
}
