use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}

/// Playing surface. Origin is the top-left corner, Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Table {
    pub width: f32,
    pub height: f32,
}

impl Table {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.table_width, config.table_height)
    }

    /// Where the ball is served from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_touching_edge_intersects() {
        let aabb = Aabb::new(Vec2::new(20.0, 100.0), Vec2::new(35.0, 200.0));
        assert!(aabb.intersects_circle(Vec2::new(43.0, 150.0), 8.0));
        assert!(!aabb.intersects_circle(Vec2::new(43.5, 150.0), 8.0));
    }

    #[test]
    fn test_circle_near_corner() {
        let aabb = Aabb::new(Vec2::new(20.0, 100.0), Vec2::new(35.0, 200.0));
        // 5-5 from the corner is ~7.07 away
        assert!(aabb.intersects_circle(Vec2::new(40.0, 95.0), 8.0));
        // 6-6 is ~8.49 away
        assert!(!aabb.intersects_circle(Vec2::new(41.0, 94.0), 8.0));
    }

    #[test]
    fn test_aabb_center() {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 20.0));
        assert_eq!(aabb.center(), Vec2::new(5.0, 10.0));
    }

    #[test]
    fn test_table_center() {
        let table = Table::from_config(&Config::new());
        assert_eq!(table.center(), Vec2::new(400.0, 200.0));
    }
}
