extern crate nalgebra as na;

use na::Isometry3;

/// Pose is used a pose of the robot link. It contains both Cartesian position and rotation quaternion
/// ```
/// extern crate nalgebra as na;
/// use na::{Isometry3, Translation3, UnitQuaternion, Vector3};
///
/// type Pose = Isometry3<f64>;
///
/// let translation = Translation3::new(0.0, 0.0, 0.17);
/// // The quaternion should be normalized to represent a valid rotation.
/// let rotation = UnitQuaternion::from_quaternion(na::Quaternion::new(1.0, 0.0, 0.0, 1.0).normalize());
/// let transform = Pose::from_parts(translation, rotation);
/// ```
pub type Pose = Isometry3<f64>;

/// Joint angles of the six joints, in radians, base to tip.
pub type Joints = [f64; 6];

/// Poses of the six link endpoints, base to tip, in the base frame.
pub type LinkPoses = [Pose; 6];

/// Number of joints (and links) in every chain this crate works with.
pub const JOINT_COUNT: usize = 6;

/// For providing the joint angles where all joints are at zero (home position).
pub const JOINTS_AT_ZERO: Joints = [0.0; 6];

/// Joint indices for readability.
pub const J1: usize = 0;
pub const J2: usize = 1;
pub const J3: usize = 2;
pub const J4: usize = 3;
pub const J5: usize = 4;
pub const J6: usize = 5;

pub trait Kinematics {
    /// Pose of the last link endpoint (the flange).
    fn forward(&self, qs: &Joints) -> Pose;

    /// Poses of all six link endpoints, base to tip.
    fn forward_with_joint_poses(&self, qs: &Joints) -> LinkPoses;
}
