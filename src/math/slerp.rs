use glam::Vec3;

/// Great-circle interpolation between two unit directions.
///
/// Callers normalize `a` and `b` first; zero-length inputs propagate NaN.
/// Antipodal inputs have no unique arc, so the rotation happens around an
/// arbitrary axis orthogonal to `a`.
pub fn slerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    const PARALLEL_EPSILON: f32 = 1e-6;
    const ANTIPODAL_EPSILON: f32 = 1e-6;

    let dot = a.dot(b).clamp(-1.0, 1.0);

    // acos loses all precision here and the orthogonal part is noise
    if dot > 1.0 - PARALLEL_EPSILON {
        return a.lerp(b, t).normalize();
    }

    let theta = dot.acos() * t;

    let relative = if dot < -1.0 + ANTIPODAL_EPSILON {
        a.any_orthonormal_vector()
    } else {
        (b - a * dot).normalize_or_zero()
    };

    a * theta.cos() + relative * theta.sin()
}
