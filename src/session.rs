//! Interactive control state: the current values set by the user, kept outside the solver.
//! Every change solves the chain again from scratch.

use crate::chain::{Chain, JointLimits};
use crate::constraints::Constraints;
use crate::control_mapping::RobotModel;
use crate::kinematic_traits::{Joints, Kinematics, LinkPoses, JOINTS_AT_ZERO, JOINT_COUNT};
use crate::kinematics_error::KinematicsError;
use crate::presets::{Preset, PresetTable};
use crate::utils::{angles_table, checked_joints};
use std::sync::Arc;
use tracing::debug;

/// What the user is currently looking at. Values are the user facing ones (control
/// parameters for the myCobot); limits always apply to the joint angles they map to.
pub struct Session {
    model: RobotModel,
    chain: Arc<Chain>,
    robot: Arc<dyn Kinematics + Send + Sync>,
    limits: Constraints,
    presets: PresetTable,
    values: Joints,
}

impl Session {
    pub fn new(model: RobotModel) -> Self {
        Session::with_chain(model, model.chain(), PresetTable::builtin())
    }

    /// Session over a chain loaded elsewhere (URDF) and a custom preset table.
    pub fn with_chain(model: RobotModel, chain: Chain, presets: PresetTable) -> Self {
        let limits = Constraints::from_chain(&chain);
        let chain = Arc::new(chain);
        Session {
            model,
            robot: model.kinematics(chain.clone()),
            chain,
            limits,
            presets,
            values: JOINTS_AT_ZERO,
        }
    }

    pub fn model(&self) -> RobotModel {
        self.model
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn presets(&self) -> &PresetTable {
        &self.presets
    }

    pub fn current(&self) -> Joints {
        self.values
    }

    /// Joint angles for the current values.
    pub fn joints(&self) -> Joints {
        self.model.to_joints(&self.values)
    }

    /// Range slider i can move in with the other values fixed, so that every joint it drives
    /// stays within limits. Joints this slider does not move are not considered.
    pub fn slider_range(&self, i: usize) -> Result<JointLimits, KinematicsError> {
        if i >= JOINT_COUNT {
            return Err(KinematicsError::IndexOutOfRange { index: i, count: JOINT_COUNT });
        }
        let (mut at_zero, mut at_one) = (self.values, self.values);
        at_zero[i] = 0.0;
        at_one[i] = 1.0;
        let base = self.model.to_joints(&at_zero);
        let unit = self.model.to_joints(&at_one);

        // Joint angles are linear in each value: joint k = base[k] + slope * value.
        let mut range = JointLimits::new(f64::NEG_INFINITY, f64::INFINITY);
        for k in 0..JOINT_COUNT {
            let slope = unit[k] - base[k];
            if slope == 0.0 {
                continue;
            }
            let a = (self.limits.from[k] - base[k]) / slope;
            let b = (self.limits.to[k] - base[k]) / slope;
            range.min = range.min.max(a.min(b));
            range.max = range.max.min(a.max(b));
        }
        if range.min > range.max {
            return Err(KinematicsError::LimitsUnreachable { index: i });
        }
        Ok(range)
    }

    /// Moves one slider. The value is clamped so the joint angles stay within their limits;
    /// returns the value actually set.
    pub fn set_slider(&mut self, i: usize, value: f64) -> Result<f64, KinematicsError> {
        let range = self.slider_range(i)?;
        if !value.is_finite() {
            return Err(KinematicsError::NonFinite { index: i, value });
        }
        self.values[i] = range.clamp(value);
        Ok(self.values[i])
    }

    /// Sets all values at once, e.g. from a command line. Values are validated, not clamped.
    pub fn set_all(&mut self, values: &[f64]) -> Result<(), KinematicsError> {
        self.values = checked_joints(values)?;
        let outside = self.out_of_limits();
        if !outside.is_empty() {
            debug!("Joints outside limits at {:?}", outside);
        }
        Ok(())
    }

    /// Sets the values that produce these joint angles.
    pub fn set_joints(&mut self, joints: &[f64]) -> Result<(), KinematicsError> {
        let joints = checked_joints(joints)?;
        self.set_all(&self.model.from_joints(&joints))
    }

    pub fn apply_preset(&mut self, preset: Preset) {
        self.values = self.presets.get(preset);
    }

    /// Applies the preset by name, leaving the state untouched if the name is unknown.
    pub fn apply_preset_named(&mut self, name: &str) -> Result<Preset, KinematicsError> {
        let (preset, values) = self.presets.lookup(name)?;
        self.values = values;
        Ok(preset)
    }

    pub fn reset(&mut self) {
        self.values = JOINTS_AT_ZERO;
    }

    /// Indices of joints currently outside their limits.
    pub fn out_of_limits(&self) -> Vec<usize> {
        self.limits.violations(&self.joints())
    }

    /// Link poses for the current values, solved from scratch.
    pub fn poses(&self) -> LinkPoses {
        self.robot.forward_with_joint_poses(&self.values)
    }

    /// Current values, in radians and degrees.
    pub fn angles_report(&self) -> String {
        angles_table(&self.values, self.model.value_prefix())
    }

    /// Slider caption for one value: "0.5236 rad  •  30.00°".
    pub fn slider_label(&self, i: usize) -> Result<String, KinematicsError> {
        let value = self.values.get(i)
            .ok_or(KinematicsError::IndexOutOfRange { index: i, count: JOINT_COUNT })?;
        Ok(format!("{:.4} rad  •  {:.2}°", value, value.to_degrees()))
    }
}
