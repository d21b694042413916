use nalgebra::Point2;

/// 2D point in image coordinates.
pub type Point2f = Point2<f32>;

/// Ordered contour of an object's projected boundary in image space.
pub type Pose = Vec<Point2f>;

/// Scale every point of a pose by a scalar factor.
///
/// Used to map poses computed in the downscaled working space back into
/// original-frame coordinates.
pub fn scale_points(points: &[Point2f], factor: f32) -> Pose {
    points
        .iter()
        .map(|p| Point2f::new(p.x * factor, p.y * factor))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_points() {
        let pose = vec![Point2f::new(1.0, 2.0), Point2f::new(3.5, 4.0)];
        let scaled = scale_points(&pose, 2.0);
        assert_eq!(scaled[0], Point2f::new(2.0, 4.0));
        assert_eq!(scaled[1], Point2f::new(7.0, 8.0));
    }

    #[test]
    fn test_scale_points_identity() {
        let pose = vec![Point2f::new(10.0, 20.0)];
        assert_eq!(scale_points(&pose, 1.0), pose);
    }
}
