use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Axis-aligned rectangular collider, placed relative to the entity position.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size, top-left corner at the entity position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Create a BoxCollider of given size centred on the entity position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::new(-width * 0.5, -height * 0.5),
        }
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// Returns (x, y, width, height) of the collider AABB.
    pub fn get_aabb(&self, position: Vector2) -> (f32, f32, f32, f32) {
        let (min, max) = self.aabb(position);
        (min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different entity position.
    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, position: Vector2, other: &Self, other_position: Vector2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Smallest translation that moves this collider out of `other`.
    ///
    /// The push is along a single axis, the one with the least penetration.
    /// Ties resolve vertically. Returns `None` when the boxes do not overlap.
    pub fn separation(
        &self,
        position: Vector2,
        other: &Self,
        other_position: Vector2,
    ) -> Option<Vector2> {
        if !self.overlaps(position, other, other_position) {
            return None;
        }
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);

        let push_left = min_b.x - max_a.x;
        let push_right = max_b.x - min_a.x;
        let push_up = min_b.y - max_a.y;
        let push_down = max_b.y - min_a.y;

        let dx = if push_right < -push_left {
            push_right
        } else {
            push_left
        };
        let dy = if push_down < -push_up {
            push_down
        } else {
            push_up
        };

        if dx.abs() < dy.abs() {
            Some(Vector2::new(dx, 0.0))
        } else {
            Some(Vector2::new(0.0, dy))
        }
    }
}
