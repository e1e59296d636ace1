pub mod math {
    /// Mirror `incoming` about `normal`. Both are expected to be unit length.
    pub fn reflection(incoming: glam::Vec3, normal: glam::Vec3) -> glam::Vec3 {
        (normal * 2.0 * incoming.dot(normal) - incoming).normalize()
    }

    /// Largest of the three channels.
    pub fn max_channel(color: glam::Vec3) -> f32 {
        color.x.max(color.y).max(color.z)
    }
}

#[cfg(test)]
mod tests {
    use super::math::*;
    use glam::Vec3;

    #[test]
    fn reflection_about_normal() {
        let incoming = Vec3::new(1.0, 1.0, 0.0).normalize();
        let reflected = reflection(incoming, Vec3::Y);
        let expected = Vec3::new(-1.0, 1.0, 0.0).normalize();
        assert!((reflected - expected).length() < 1e-6);
    }

    #[test]
    fn reflection_of_normal_is_itself() {
        assert!((reflection(Vec3::Z, Vec3::Z) - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn max_channel_picks_largest() {
        assert_eq!(max_channel(Vec3::new(0.2, 3.0, -1.0)), 3.0);
    }
}
