//! Forward kinematics of the serial chain: joint rotations and link translations composed
//! base to tip, each in the frame accumulated so far.

use crate::chain::Chain;
use crate::kinematic_traits::{Joints, Kinematics, LinkPoses, Pose, JOINT_COUNT};
use crate::kinematics_error::KinematicsError;
use crate::utils::{checked_joints, wrap_angle};
use nalgebra::{Isometry3, Translation3, UnitQuaternion};
use std::sync::Arc;
use tracing::{debug, trace};

/// Solves link poses of a chain. Validates the input vector first: it must have
/// six finite elements, otherwise nothing is computed. Joint limits are not checked.
///
/// ```
/// use rs_cobot_kinematics::chain::Chain;
/// use rs_cobot_kinematics::kinematics_impl::solve;
///
/// let chain = Chain::mycobot_320();
/// let poses = solve(&chain, &[0.0, -1.5708, -1.0472, -0.7854, -1.5708, 0.0]).unwrap();
/// let home = solve(&chain, &[0.0; 6]).unwrap();
/// println!("Flange at {}", poses[5].translation.vector);
/// assert_ne!(poses[5], home[5]);
/// assert!(solve(&chain, &[0.0; 5]).is_err());
/// ```
pub fn solve(chain: &Chain, joint_angles: &[f64]) -> Result<LinkPoses, KinematicsError> {
    let qs = checked_joints(joint_angles).inspect_err(|e| {
        debug!(chain = chain.name(), "Rejecting joint vector: {}", e);
    })?;
    Ok(link_poses(chain, &qs))
}

/// Start frame of the chain: the base translation, no rotation.
pub fn base_frame(chain: &Chain) -> Pose {
    Isometry3::from_parts(Translation3::from(chain.base()), UnitQuaternion::identity())
}

fn link_poses(chain: &Chain, qs: &Joints) -> LinkPoses {
    let mut running = base_frame(chain);
    let mut poses = [Pose::identity(); JOINT_COUNT];

    for (i, segment) in chain.segments().iter().enumerate() {
        // Rotate first, then translate, both in the frame accumulated so far.
        let rotation = UnitQuaternion::from_axis_angle(&segment.joint.axis.unit(), qs[i]);
        running *= Isometry3::from_parts(Translation3::identity(), rotation);
        running *= Isometry3::from_parts(Translation3::from(segment.link.offset),
                                         UnitQuaternion::identity());
        poses[i] = running;
    }

    trace!(chain = chain.name(), "Solved link poses for {:?}", qs);
    poses
}

/// Recovers joint angles from link poses produced for this chain. Each joint rotation is
/// isolated by removing the previous pose and the known link offset; angles are returned
/// wrapped into (-PI, PI].
pub fn joints_from_poses(chain: &Chain, poses: &LinkPoses) -> Joints {
    let mut joints = [0.0; JOINT_COUNT];
    let mut previous = base_frame(chain);

    for (i, segment) in chain.segments().iter().enumerate() {
        // local = rotation(q) * translation(offset), so its rotation part is the joint alone.
        let local = previous.inverse() * poses[i];
        let rotation = local.rotation;
        let axis = segment.joint.axis.unit().into_inner();
        let sin_half = rotation.imag().dot(&axis);
        joints[i] = wrap_angle(2.0 * sin_half.atan2(rotation.w));
        previous = poses[i];
    }
    joints
}

/// Kinematics of a chain, shareable between threads and sessions.
#[derive(Debug, Clone)]
pub struct ChainKinematics {
    pub chain: Arc<Chain>,
}

impl ChainKinematics {
    /// Creates a new `ChainKinematics` instance for the given chain.
    pub fn new(chain: Chain) -> Self {
        ChainKinematics { chain: Arc::new(chain) }
    }

    /// Validating counterpart of `forward_with_joint_poses` for vectors of unknown length.
    pub fn solve(&self, joint_angles: &[f64]) -> Result<LinkPoses, KinematicsError> {
        solve(&self.chain, joint_angles)
    }
}

impl Kinematics for ChainKinematics {
    fn forward(&self, qs: &Joints) -> Pose {
        link_poses(&self.chain, qs)[JOINT_COUNT - 1]
    }

    fn forward_with_joint_poses(&self, qs: &Joints) -> LinkPoses {
        link_poses(&self.chain, qs)
    }
}
