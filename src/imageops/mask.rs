use ndarray::{Array2, Zip};

use super::points::Point2f;

/// Binary image mask: 255 inside a claimed region, 0 outside.
///
/// Masks combine by bitwise OR, a boolean union over the 0/255 values.
#[derive(Debug, Clone)]
pub struct Mask {
    data: Array2<u8>,
}

impl Mask {
    /// An all-zero (nothing claimed) mask.
    pub fn zeros(width: u32, height: u32) -> Self {
        Self {
            data: Array2::zeros((height as usize, width as usize)),
        }
    }

    /// Rasterize a closed polygon into a mask via even-odd scanline
    /// crossing, sampled at pixel centers. Fewer than three vertices
    /// rasterize to an empty mask.
    pub fn from_polygon(width: u32, height: u32, polygon: &[Point2f]) -> Self {
        let mut mask = Self::zeros(width, height);
        if polygon.len() < 3 {
            return mask;
        }

        let mut crossings: Vec<f32> = Vec::with_capacity(polygon.len());
        for y in 0..height as usize {
            let scan = y as f32 + 0.5;
            crossings.clear();
            for (i, a) in polygon.iter().enumerate() {
                let b = &polygon[(i + 1) % polygon.len()];
                if (a.y <= scan) != (b.y <= scan) {
                    crossings.push(a.x + (scan - a.y) / (b.y - a.y) * (b.x - a.x));
                }
            }
            crossings.sort_by(f32::total_cmp);
            for span in crossings.chunks_exact(2) {
                let x0 = span[0].max(0.0).round() as usize;
                let x1 = span[1].max(0.0).min(width as f32).round() as usize;
                for x in x0..x1 {
                    mask.data[[y, x]] = 255;
                }
            }
        }
        mask
    }

    /// Boolean union with another mask of the same size.
    pub fn or_assign(&mut self, other: &Mask) {
        Zip::from(&mut self.data)
            .and(&other.data)
            .for_each(|p, &m| *p |= m);
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.data[[y as usize, x as usize]] != 0
    }

    pub fn width(&self) -> u32 {
        self.data.ncols() as u32
    }

    pub fn height(&self) -> u32 {
        self.data.nrows() as u32
    }

    pub fn data(&self) -> &Array2<u8> {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(x0: f32, y0: f32, x1: f32, y1: f32) -> Vec<Point2f> {
        vec![
            Point2f::new(x0, y0),
            Point2f::new(x1, y0),
            Point2f::new(x1, y1),
            Point2f::new(x0, y1),
        ]
    }

    #[test]
    fn test_polygon_fill_inside_outside() {
        let mask = Mask::from_polygon(20, 20, &quad(4.0, 5.0, 12.0, 15.0));
        assert!(mask.contains(8, 10));
        assert!(mask.contains(4, 5));
        assert!(!mask.contains(2, 10));
        assert!(!mask.contains(8, 2));
        assert!(!mask.contains(13, 10));
        assert!(!mask.contains(8, 16));
    }

    #[test]
    fn test_polygon_clipped_to_bounds() {
        let mask = Mask::from_polygon(10, 10, &quad(-5.0, -5.0, 5.0, 5.0));
        assert!(mask.contains(0, 0));
        assert!(mask.contains(4, 4));
        assert!(!mask.contains(6, 6));
    }

    #[test]
    fn test_degenerate_polygon_is_empty() {
        let line = vec![Point2f::new(0.0, 0.0), Point2f::new(9.0, 9.0)];
        let mask = Mask::from_polygon(10, 10, &line);
        assert!(mask.data().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_union_is_boolean_or() {
        let mut a = Mask::from_polygon(20, 20, &quad(0.0, 0.0, 8.0, 8.0));
        let b = Mask::from_polygon(20, 20, &quad(10.0, 10.0, 18.0, 18.0));
        a.or_assign(&b);
        assert!(a.contains(4, 4));
        assert!(a.contains(14, 14));
        assert!(!a.contains(9, 9));
        assert!(a.data().iter().all(|&p| p == 0 || p == 255));
    }
}
