//! Control parameters of the myCobot 320.
//!
//! The controller exposes six control parameters C1..C6 rather than the physical joint angles.
//! The wrist and elbow are coupled, so the joint angles are a fixed linear function of the
//! control parameters:
//!
//! ```text
//! J1 =  C1
//! J2 =  C2 - C3
//! J3 =  2 * C3
//! J4 =  C4 - (C2 + C3)
//! J5 = -C5
//! J6 =  C6
//! ```
//!
//! This is a closed form substitution, not an inverse kinematics problem: every real vector
//! maps, and nothing is approximated.

use crate::chain::Chain;
use crate::kinematic_traits::{Joints, Kinematics, LinkPoses, Pose, J1, J2, J3, J4, J5, J6};
use crate::kinematics_error::KinematicsError;
use crate::kinematics_impl::ChainKinematics;
use crate::utils::checked_joints;
use std::sync::Arc;

/// Control parameters C1..C6, as taken by the myCobot controller.
pub type Controls = [f64; 6];

/// Joint angles for the given control parameters. Pure and total.
pub fn map_control_to_joint(c: &Controls) -> Joints {
    [
        c[J1],
        c[J2] - c[J3],
        2.0 * c[J3],
        c[J4] - (c[J2] + c[J3]),
        -c[J5],
        c[J6],
    ]
}

/// Exact inverse of `map_control_to_joint`, used to show control values for joint angles.
pub fn map_joint_to_control(j: &Joints) -> Controls {
    let c3 = j[J3] / 2.0;
    let c2 = j[J2] + c3;
    [
        j[J1],
        c2,
        c3,
        j[J4] + c2 + c3,
        -j[J5],
        j[J6],
    ]
}

/// Robot variants this crate knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotModel {
    /// Generic arm, sliders and presets are joint angles.
    Generic,
    /// myCobot 320, sliders and presets are control parameters.
    MyCobot320,
}

impl RobotModel {
    pub fn name(&self) -> &'static str {
        match self {
            RobotModel::Generic => "generic",
            RobotModel::MyCobot320 => "mycobot320",
        }
    }

    pub fn from_name(name: &str) -> Option<RobotModel> {
        match name.to_ascii_lowercase().as_str() {
            "generic" | "generic_6axis" => Some(RobotModel::Generic),
            "mycobot320" | "mycobot_320" | "mycobot" => Some(RobotModel::MyCobot320),
            _ => None,
        }
    }

    /// Built-in chain of this robot.
    pub fn chain(&self) -> Chain {
        match self {
            RobotModel::Generic => Chain::generic_6axis(),
            RobotModel::MyCobot320 => Chain::mycobot_320(),
        }
    }

    /// Joint angles for the values the user sets on this robot.
    pub fn to_joints(&self, values: &[f64; 6]) -> Joints {
        match self {
            RobotModel::Generic => *values,
            RobotModel::MyCobot320 => map_control_to_joint(values),
        }
    }

    /// Values the user would set on this robot to reach the given joint angles.
    pub fn from_joints(&self, joints: &Joints) -> [f64; 6] {
        match self {
            RobotModel::Generic => *joints,
            RobotModel::MyCobot320 => map_joint_to_control(joints),
        }
    }

    /// Prefix used when labeling user facing values (C1.. or J1..).
    pub fn value_prefix(&self) -> &'static str {
        match self {
            RobotModel::Generic => "J",
            RobotModel::MyCobot320 => "C",
        }
    }

    /// Kinematics taking user facing values, for this robot and the given chain.
    /// A chain already shared elsewhere is not copied.
    pub fn kinematics(&self, chain: impl Into<Arc<Chain>>) -> Arc<dyn Kinematics + Send + Sync> {
        let robot: Arc<dyn Kinematics + Send + Sync> = Arc::new(ChainKinematics { chain: chain.into() });
        match self {
            RobotModel::Generic => robot,
            RobotModel::MyCobot320 => Arc::new(Coupled { robot }),
        }
    }
}

/// Kinematics driven by control parameters: the coupling is applied before the underlying
/// robot is solved. It has no data of its own.
#[derive(Clone)]
pub struct Coupled {
    pub robot: Arc<dyn Kinematics + Send + Sync>,
}

impl Coupled {
    /// Validates a control vector of unknown length, then solves.
    pub fn solve(&self, controls: &[f64]) -> Result<LinkPoses, KinematicsError> {
        let c = checked_joints(controls)?;
        Ok(self.forward_with_joint_poses(&c))
    }
}

impl Kinematics for Coupled {
    fn forward(&self, c: &Controls) -> Pose {
        self.robot.forward(&map_control_to_joint(c))
    }

    fn forward_with_joint_poses(&self, c: &Controls) -> LinkPoses {
        self.robot.forward_with_joint_poses(&map_control_to_joint(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const SMALL: f64 = 1e-12;

    #[test]
    fn test_config1_second_joint() {
        let c = [0.0, -PI / 2.0, -PI / 3.0, -PI / 4.0, -PI / 2.0, 0.0];
        let j = map_control_to_joint(&c);
        assert!((j[1] + PI / 6.0).abs() < SMALL, "J2 = {}", j[1]);
        assert!((j[2] + 2.0 * PI / 3.0).abs() < SMALL);
        // C4 - (C2 + C3) = -PI/4 + PI/2 + PI/3
        assert!((j[3] - (-PI / 4.0 + PI / 2.0 + PI / 3.0)).abs() < SMALL);
        assert!((j[4] - PI / 2.0).abs() < SMALL);
        assert_eq!(j[0], 0.0);
        assert_eq!(j[5], 0.0);
    }

    #[test]
    fn test_inverse_mapping() {
        let c = [0.4, -1.1, 0.7, 2.2, -0.3, 1.9];
        let back = map_joint_to_control(&map_control_to_joint(&c));
        for i in 0..6 {
            assert!((back[i] - c[i]).abs() < SMALL);
        }
    }

    #[test]
    fn test_coupled_solves_mapped_joints() {
        let chain = Chain::mycobot_320();
        let direct = ChainKinematics::new(chain.clone());
        let coupled = RobotModel::MyCobot320.kinematics(chain);
        let c = [0.2, -0.5, 0.3, 0.1, -0.4, 0.6];
        assert_eq!(coupled.forward_with_joint_poses(&c),
                   direct.forward_with_joint_poses(&map_control_to_joint(&c)));
        assert_eq!(coupled.forward(&c), direct.forward(&map_control_to_joint(&c)));
    }

    #[test]
    fn test_coupled_rejects_short_vector() {
        let coupled = Coupled { robot: Arc::new(ChainKinematics::new(Chain::mycobot_320())) };
        assert!(coupled.solve(&[0.0; 4]).is_err());
        assert!(coupled.solve(&[0.0; 6]).is_ok());
    }

    #[test]
    fn test_robot_model_names() {
        assert_eq!(RobotModel::from_name("myCobot320"), Some(RobotModel::MyCobot320));
        assert_eq!(RobotModel::from_name("generic"), Some(RobotModel::Generic));
        assert_eq!(RobotModel::from_name("ur5"), None);
        assert_eq!(RobotModel::Generic.to_joints(&[1.0; 6]), [1.0; 6]);
        assert_eq!(RobotModel::Generic.from_joints(&[1.0; 6]), [1.0; 6]);
    }

    #[test]
    fn test_from_joints_inverts_to_joints() {
        let j = [0.3, -0.2, 1.1, 0.4, -0.9, 0.0];
        let c = RobotModel::MyCobot320.from_joints(&j);
        let back = RobotModel::MyCobot320.to_joints(&c);
        for i in 0..6 {
            assert!((back[i] - j[i]).abs() < SMALL);
        }
    }

    #[test]
    fn test_kinematics_shares_chain() {
        let chain = Arc::new(Chain::mycobot_320());
        let _robot = RobotModel::MyCobot320.kinematics(chain.clone());
        assert_eq!(Arc::strong_count(&chain), 2);
    }
}
