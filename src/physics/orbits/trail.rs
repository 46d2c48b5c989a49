//! Trails are the recent history of a planet's positions.
//! They are drawn as a fading line behind the planet.

use std::collections::VecDeque;

use crate::physics::util::vectors::ScreenCoord;

/// Default number of positions kept per planet
pub const DEFAULT_TRAIL_CAPACITY: usize = 300;
/// Larger trails grow on demand instead of reserving everything up front
const MAX_PREALLOCATED_POINTS: usize = 4096;

/// A bounded FIFO of positions in chronological order.
/// Once the capacity is exceeded the oldest point is evicted.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<ScreenCoord>,
    capacity: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_CAPACITY)
    }
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            // One extra slot for the point that is pushed right before an eviction
            points: VecDeque::with_capacity(capacity.saturating_add(1).min(MAX_PREALLOCATED_POINTS)),
            capacity,
        }
    }

    /// Appends a point, evicting the oldest one if the trail is over capacity.
    /// At most one point is added per call, so at most one is removed.
    pub fn push(&mut self, point: ScreenCoord) {
        self.points.push_back(point);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ScreenCoord> + ExactSizeIterator {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<ScreenCoord> {
        self.points.back().copied()
    }

    pub fn oldest(&self) -> Option<ScreenCoord> {
        self.points.front().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(i: usize) -> ScreenCoord {
        ScreenCoord::new(i as f32, 0.0)
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut trail = Trail::default();
        for i in 0..1000 {
            trail.push(point(i));
            assert!(trail.len() <= DEFAULT_TRAIL_CAPACITY);
        }
        assert_eq!(trail.len(), DEFAULT_TRAIL_CAPACITY);
    }

    #[test]
    fn test_fifo_eviction() {
        let mut trail = Trail::new(300);
        for i in 0..301 {
            trail.push(point(i));
        }
        // The very first point is gone, the newest is present
        assert_eq!(trail.oldest(), Some(point(1)));
        assert_eq!(trail.latest(), Some(point(300)));
        assert!(!trail.iter().any(|p| *p == point(0)));
    }

    #[test]
    fn test_chronological_order() {
        let mut trail = Trail::new(3);
        for i in 0..5 {
            trail.push(point(i));
        }
        let points = trail.iter().copied().collect::<Vec<_>>();
        assert_eq!(points, vec![point(2), point(3), point(4)]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut trail = Trail::new(10);
        trail.push(point(7));
        trail.push(point(7));
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut trail = Trail::new(0);
        trail.push(point(1));
        assert!(trail.is_empty());
        assert_eq!(trail.latest(), None);
    }

    #[test]
    fn test_huge_capacity() {
        let mut trail = Trail::new(usize::MAX);
        for i in 0..10 {
            trail.push(point(i));
        }
        assert_eq!(trail.len(), 10);
        assert_eq!(trail.capacity(), usize::MAX);
    }
}
