//! Demo motion: joint trajectories that sweep each joint around the middle of its range.

use crate::chain::JointLimits;
use crate::kinematic_traits::{Joints, JOINT_COUNT};
use crate::kinematics_error::KinematicsError;
use std::f64::consts::PI;

/// One full period of motion sampled into frames, each joint with its own phase.
#[derive(Debug, Clone)]
pub struct Sweep {
    limits: [JointLimits; JOINT_COUNT],
    steps: usize,
}

impl Sweep {
    /// At least two steps are needed so the first and last frames close the loop.
    pub fn from_limits(limits: [JointLimits; JOINT_COUNT], steps: usize) -> Result<Self, KinematicsError> {
        if steps < 2 {
            return Err(KinematicsError::Shape { expected: 2, found: steps });
        }
        Ok(Sweep { limits, steps })
    }

    pub fn len(&self) -> usize {
        self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }

    /// Angles at the given step: center + range / 3 * sin(2 PI t + phase),
    /// with t running from 0 to 1 and phases spread evenly over the joints.
    pub fn frame(&self, step: usize) -> Joints {
        let t = step as f64 / (self.steps - 1) as f64;
        std::array::from_fn(|i| {
            let phase = (i as f64 / JOINT_COUNT as f64) * 2.0 * PI;
            let l = &self.limits[i];
            l.center() + (l.range() / 3.0) * (2.0 * PI * t + phase).sin()
        })
    }

    pub fn frames(&self) -> impl Iterator<Item = Joints> + '_ {
        (0..self.steps).map(move |step| self.frame(step))
    }
}

/// Continuous oscillation at the given time, seconds: each joint swings through 70% of its
/// half range, joint i at angular frequency 0.5 + 0.2 i.
pub fn oscillation(limits: &[JointLimits; JOINT_COUNT], time: f64) -> Joints {
    std::array::from_fn(|i| {
        let l = &limits[i];
        let frequency = 0.5 + i as f64 * 0.2;
        l.center() + l.range() / 2.0 * 0.7 * (frequency * time).sin()
    })
}
