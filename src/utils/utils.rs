//! Helper functions

use crate::kinematic_traits::{Joints, JOINT_COUNT};
use crate::kinematics_error::KinematicsError;
use nalgebra::{Isometry3, UnitQuaternion};
use std::f64::consts::PI;

/// Validates an angle or parameter vector of unknown length: it must have exactly six
/// elements, all finite. Nothing is computed from an invalid vector.
pub fn checked_joints(values: &[f64]) -> Result<Joints, KinematicsError> {
    if values.len() != JOINT_COUNT {
        return Err(KinematicsError::Shape { expected: JOINT_COUNT, found: values.len() });
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(KinematicsError::NonFinite { index, value });
    }
    Ok(std::array::from_fn(|i| values[i]))
}

/// Wraps the angle into (-PI, PI].
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(2.0 * PI);
    if wrapped > PI { wrapped - 2.0 * PI } else { wrapped }
}

/// Joint values converting radians to degrees, like `[ 0.00 -90.00 ...]`.
pub fn format_joints(joints: &Joints) -> String {
    let row: Vec<String> = joints.iter().map(|q| format!("{:7.2}", q.to_degrees())).collect();
    format!("[{}]", row.join(" "))
}

/// Position and quaternion of the pose.
pub fn format_pose(isometry: &Isometry3<f64>) -> String {
    let translation = isometry.translation.vector;
    let rotation: UnitQuaternion<f64> = isometry.rotation;

    format!(
        "x: {:.5}, y: {:.5}, z: {:.5},  quat: {:.5},{:.5},{:.5},{:.5}",
        translation.x, translation.y, translation.z, rotation.i, rotation.j, rotation.k, rotation.w
    )
}

/// Table of angles in radians and degrees, one row per joint, `prefix` naming the values
/// (C for control parameters, J for joint angles).
pub fn angles_table(values: &Joints, prefix: &str) -> String {
    let mut text = String::new();
    for (i, angle) in values.iter().enumerate() {
        text.push_str(&format!("  {}{} (J{})  {:>8.4} rad  {:>8.2}°\n",
                               prefix, i + 1, i + 1, angle, angle.to_degrees()));
    }
    let array: Vec<String> = values.iter().map(|a| format!("{:>6.3}", a)).collect();
    text.push_str(&format!("  Array: [{}]\n", array.join(", ")));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_joints_shape() {
        assert_eq!(checked_joints(&[0.0; 5]),
                   Err(KinematicsError::Shape { expected: 6, found: 5 }));
        assert_eq!(checked_joints(&[0.0; 7]),
                   Err(KinematicsError::Shape { expected: 6, found: 7 }));
        assert_eq!(checked_joints(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]),
                   Ok([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
    }

    #[test]
    fn test_checked_joints_infinity() {
        match checked_joints(&[0.0, 0.0, f64::INFINITY, 0.0, 0.0, 0.0]) {
            Err(KinematicsError::NonFinite { index, .. }) => assert_eq!(index, 2),
            other => panic!("Unexpected result {:?}", other),
        }
        assert!(checked_joints(&[f64::NAN; 6]).is_err());
    }

    #[test]
    fn test_wrap_angle() {
        assert!((wrap_angle(3.0 * PI - 0.5) - (PI - 0.5)).abs() < 1e-12);
        assert!((wrap_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-12);
        assert!((wrap_angle(2.0 * PI + 0.25) - 0.25).abs() < 1e-12);
    }
}
