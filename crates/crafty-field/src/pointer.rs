use glam::Vec2;

/// Last known pointer position in canvas pixels.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    position: Vec2,
    moved: bool,
}

impl PointerTracker {
    /// Starts at the viewport center, which is where touch-only devices stay.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(width * 0.5, height * 0.5),
            moved: false,
        }
    }

    #[inline]
    pub fn current_position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Raw update, no smoothing. Non-finite coordinates are ignored.
    pub fn update(&mut self, position: Vec2) {
        if position.is_finite() {
            self.position = position;
            self.moved = true;
        }
    }

    /// Carries the tracker over to a new viewport. A pointer that never moved
    /// follows the new center; a moved one keeps its last position.
    pub fn retarget(self, width: f32, height: f32) -> Self {
        if self.moved {
            self
        } else {
            Self::new(width, height)
        }
    }
}
