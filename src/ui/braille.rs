/// Braille canvas for high-resolution terminal rendering
/// Each terminal cell holds a 2×4 grid of Braille dots plus one ink color,
/// which gives 2× horizontal and 4× vertical resolution
use ratatui::style::Color;

pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    dots: Vec<Vec<u8>>,
    inks: Vec<Vec<Option<Color>>>,
    pen: Color,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
            inks: vec![vec![None; width]; height],
            pen: Color::White,
        }
    }

    /// Color used by subsequent drawing calls; the last ink in a cell wins
    pub fn set_pen(&mut self, color: Color) {
        self.pen = color;
    }

    /// Set a dot at pixel coordinates (negative or out-of-range pixels are clipped)
    pub fn set_pixel(&mut self, pixel_x: i64, pixel_y: i64) {
        if pixel_x < 0 || pixel_y < 0 {
            return;
        }
        let (pixel_x, pixel_y) = (pixel_x as usize, pixel_y as usize);
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (pixel_x % 2, pixel_y % 4) {
            (0, 0) => 0,
            (0, 1) => 1,
            (0, 2) => 2,
            (0, 3) => 6,
            (1, 0) => 3,
            (1, 1) => 4,
            (1, 2) => 5,
            (1, 3) => 7,
            _ => unreachable!(),
        };

        self.dots[cell_y][cell_x] |= 1 << dot_index;
        self.inks[cell_y][cell_x] = Some(self.pen);
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, width: i64, height: i64) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py);
            }
        }
    }

    /// Fill a `width` × `height` rectangle centered on (cx, cy), turned by `degrees`
    pub fn fill_rotated_rect(&mut self, cx: f64, cy: f64, width: f64, height: f64, degrees: f64) {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        let half_w = width / 2.0;
        let half_h = height / 2.0;

        // Scan the rotated bounding box, keep pixels that land inside after un-rotating
        let reach_x = half_w * cos.abs() + half_h * sin.abs();
        let reach_y = half_w * sin.abs() + half_h * cos.abs();
        let (min_x, max_x) = ((cx - reach_x).floor() as i64, (cx + reach_x).ceil() as i64);
        let (min_y, max_y) = ((cy - reach_y).floor() as i64, (cy + reach_y).ceil() as i64);

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                let local_x = dx * cos + dy * sin;
                let local_y = -dx * sin + dy * cos;
                if local_x.abs() <= half_w && local_y.abs() <= half_h {
                    self.set_pixel(px, py);
                }
            }
        }
    }

    pub fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        for py in (cy - ry).floor() as i64..=(cy + ry).ceil() as i64 {
            for px in (cx - rx).floor() as i64..=(cx + rx).ceil() as i64 {
                let nx = (px as f64 + 0.5 - cx) / rx;
                let ny = (py as f64 + 0.5 - cy) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.set_pixel(px, py);
                }
            }
        }
    }

    /// Convert dot pattern to Braille character (U+2800 + dot pattern)
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.dots[cell_y][cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    pub fn ink(&self, cell_x: usize, cell_y: usize) -> Option<Color> {
        self.inks.get(cell_y).and_then(|row| row.get(cell_x)).copied().flatten()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get width in pixels (2 per cell)
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    /// Get height in pixels (4 per cell)
    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_dot() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.set_pixel(0, 0);
        assert_eq!(canvas.to_char(0, 0), '⠁'); // dot 1
        assert_eq!(canvas.to_char(1, 0), '\u{2800}');
    }

    #[test]
    fn test_fill_rect_fills_whole_cell() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.fill_rect(0, 0, 2, 4);
        assert_eq!(canvas.to_char(0, 0), '⣿');
        assert_eq!(canvas.ink(0, 0), Some(Color::White));
        assert_eq!(canvas.ink(1, 1), None);
    }

    #[test]
    fn test_out_of_range_pixels_are_clipped() {
        let mut canvas = BrailleCanvas::new(1, 1);
        canvas.fill_rect(-3, -3, 10, 10);
        assert_eq!(canvas.to_char(0, 0), '⣿');
        assert_eq!(canvas.to_char(5, 5), ' ');
    }

    #[test]
    fn test_quarter_turn_swaps_footprint() {
        let mut upright = BrailleCanvas::new(20, 10);
        upright.fill_rotated_rect(20.0, 20.0, 6.0, 16.0, 0.0);
        let mut turned = BrailleCanvas::new(20, 10);
        turned.fill_rotated_rect(20.0, 20.0, 6.0, 16.0, 90.0);

        // Upright is tall and narrow, turned is wide and short
        let lit = |canvas: &BrailleCanvas, x: usize, y: usize| canvas.to_char(x, y) != '\u{2800}';
        assert!(lit(&upright, 10, 3));
        assert!(!lit(&upright, 6, 5));
        assert!(lit(&turned, 6, 5));
        assert!(!lit(&turned, 10, 2));
    }

    #[test]
    fn test_pen_color() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.set_pen(Color::Yellow);
        canvas.set_pixel(2, 0);
        assert_eq!(canvas.ink(1, 0), Some(Color::Yellow));
    }
}
