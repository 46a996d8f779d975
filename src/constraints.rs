//! Joint limit checks for callers. The solver itself never enforces limits; user interfaces
//! use these to bound sliders and to flag or clamp values.

use crate::chain::{Chain, JointLimits};
use crate::kinematic_traits::{Joints, JOINT_COUNT};

#[derive(Debug, Clone, PartialEq)]
pub struct Constraints {
    /// Lower limit per joint, radians.
    pub from: Joints,

    /// Upper limit per joint, radians. Not less than the lower limit.
    pub to: Joints,
}

impl Constraints {
    /// Limits are swapped per joint if given in the wrong order.
    pub fn new(from: Joints, to: Joints) -> Self {
        let lower = std::array::from_fn(|i| from[i].min(to[i]));
        let upper = std::array::from_fn(|i| from[i].max(to[i]));
        Constraints { from: lower, to: upper }
    }

    pub fn from_chain(chain: &Chain) -> Self {
        let (from, to) = chain.limit_vectors();
        Constraints::new(from, to)
    }

    pub fn limits(&self, i: usize) -> Option<JointLimits> {
        (i < JOINT_COUNT).then(|| JointLimits::new(self.from[i], self.to[i]))
    }

    pub fn compliant(&self, angles: &Joints) -> bool {
        self.violations(angles).is_empty()
    }

    /// Indices of joints outside their range.
    pub fn violations(&self, angles: &Joints) -> Vec<usize> {
        (0..JOINT_COUNT)
            .filter(|&i| !(angles[i] >= self.from[i] && angles[i] <= self.to[i]))
            .collect()
    }

    pub fn clamp(&self, angles: &Joints) -> Joints {
        std::array::from_fn(|i| angles[i].max(self.from[i]).min(self.to[i]))
    }
}
