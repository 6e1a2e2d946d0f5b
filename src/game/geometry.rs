// Integer rectangle math shared by the ball, the goalkeeper and the renderer

/// Axis-aligned rectangle in virtual field units (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// True when the two rectangles share a region of positive area.
    /// Edges that merely touch do not count, and empty rectangles never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }

        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// A `width` × `height` box centered inside this one (integer division, like the sprite math)
    pub fn centered(&self, width: i32, height: i32) -> Rect {
        Rect {
            x: self.x + (self.width - width) / 2,
            y: self.y + (self.height - height) / 2,
            width,
            height,
        }
    }

    /// Bounding box of this rectangle rotated by `degrees` around its center.
    ///
    /// Uses the usual canvas-expansion formula `w' = w|cos| + h|sin|`,
    /// `h' = w|sin| + h|cos|`, truncated to whole units.
    pub fn rotated_bounds(&self, degrees: f64) -> Rect {
        let radians = degrees.to_radians();
        let sin = radians.sin().abs();
        let cos = radians.cos().abs();
        let w = self.width as f64;
        let h = self.height as f64;

        // Round away float noise (cos(90°) is ~6e-17, not 0) before truncating
        let new_width = (w * cos + h * sin + 1e-9) as i32;
        let new_height = (w * sin + h * cos + 1e-9) as i32;

        let center_x = self.x + self.width / 2;
        let center_y = self.y + self.height / 2;

        Rect {
            x: center_x - new_width / 2,
            y: center_y - new_height / 2,
            width: new_width,
            height: new_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_pixel_overlap_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(9, 9, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let right = Rect::new(10, 0, 10, 10);
        let below = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_disjoint_and_empty_rects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(50, 50, 5, 5)));
        assert!(!a.intersects(&Rect::new(2, 2, 0, 5)));
    }

    #[test]
    fn test_centered_box() {
        let outer = Rect::new(100, 200, 120, 120);
        let inner = outer.centered(66, 66);
        assert_eq!(inner, Rect::new(127, 227, 66, 66));
    }

    #[test]
    fn test_rotated_bounds() {
        let sprite = Rect::new(0, 0, 300, 400);

        // Quarter turn swaps the sides
        let quarter = sprite.rotated_bounds(90.0);
        assert_eq!((quarter.width, quarter.height), (400, 300));
        assert_eq!(quarter.x, 150 - 200);
        assert_eq!(quarter.y, 200 - 150);

        // 45° grows both sides to (w + h) / sqrt(2)
        let diagonal = sprite.rotated_bounds(-45.0);
        assert_eq!((diagonal.width, diagonal.height), (494, 494));

        assert_eq!(sprite.rotated_bounds(0.0), sprite);
    }
}
