use crate::kinematic_traits::{Joints, LinkPoses, Pose};
use nalgebra::UnitQuaternion;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SMALL: f64 = 1e-6;

pub fn check_xyz(poses: &LinkPoses, expected_positions: [(f64, f64, f64); 6]) {
    for (i, &(expected_x, expected_y, expected_z)) in expected_positions.iter().enumerate() {
        let translation = poses[i].translation.vector;

        assert!((translation[0] - expected_x).abs() < SMALL, "Pose {} X- expected {}, got {}", i + 1, expected_x, translation[0]);
        assert!((translation[1] - expected_y).abs() < SMALL, "Pose {} Y- expected {}, got {}", i + 1, expected_y, translation[1]);
        assert!((translation[2] - expected_z).abs() < SMALL, "Pose {} Z- expected {}, got {}", i + 1, expected_z, translation[2]);
    }
}

pub fn check_rotation(expected: UnitQuaternion<f64>, i: usize, quaternion: &UnitQuaternion<f64>) {
    // q and -q are the same rotation
    let distance = (quaternion.coords - expected.coords).norm()
        .min((quaternion.coords + expected.coords).norm());
    assert!(distance < SMALL, "Pose {} quaternion mismatch: expected {}, got {}", i + 1, expected, quaternion);
}

pub fn are_poses_close(a: &Pose, b: &Pose, tolerance: f64) -> bool {
    let translation_close = (a.translation.vector - b.translation.vector).norm() <= tolerance;
    let rotation_close = a.rotation.angle_to(&b.rotation) <= tolerance;
    translation_close && rotation_close
}

/// Reproducible random angles within (-limit, limit) for every joint.
pub fn random_joints(rng: &mut StdRng, limit: f64) -> Joints {
    std::array::from_fn(|_| rng.gen_range(-limit..limit))
}

pub fn seeded() -> StdRng {
    StdRng::seed_from_u64(20241017)
}
