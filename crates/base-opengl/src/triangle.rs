use bevy_math::Vec3;

pub const TRIANGLE_VERTICES: [Vec3; 3] = [
    Vec3::new(0.0, 0.5, 0.0),
    Vec3::new(0.5, -0.5, 0.0),
    Vec3::new(-0.5, -0.5, 0.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_the_half_size_triangle() {
        let floats: Vec<f32> = TRIANGLE_VERTICES
            .iter()
            .flat_map(|v| v.to_array())
            .collect();
        assert_eq!(floats.len(), 9);
        assert_eq!(floats, vec![0.0, 0.5, 0.0, 0.5, -0.5, 0.0, -0.5, -0.5, 0.0]);
    }

    #[test]
    fn wound_clockwise() {
        let [a, b, c] = TRIANGLE_VERTICES;
        let signed_area = (b - a).truncate().perp_dot((c - a).truncate());
        assert!(signed_area < 0.0);
    }
}
