use glam::Vec2;
use instant::Instant;
use std::collections::VecDeque;

// Upper bound on retained pointer samples
pub const TRAIL_CAPACITY: usize = 20;

#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub at: Instant,
}

/// Bounded FIFO buffer of recent pointer positions.
///
/// Populated from pointer movement and currently consumed by nothing; the
/// buffer exists as recorded interaction state, with the oldest sample
/// evicted once the capacity is reached.
#[derive(Default)]
pub struct CursorTrail {
    points: VecDeque<TrailPoint>,
}

impl CursorTrail {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(TRAIL_CAPACITY),
        }
    }

    pub fn push(&mut self, pos: Vec2, at: Instant) {
        if self.points.len() == TRAIL_CAPACITY {
            self.points.pop_front();
        }
        self.points.push_back(TrailPoint { pos, at });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Samples in arrival order, oldest first.
    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }
}
