//! Defines the kinematic chain data structure: six revolute joints, each followed by a rigid link

use crate::kinematic_traits::{Joints, JOINT_COUNT};
use crate::kinematics_error::KinematicsError;
use nalgebra::{Isometry3, Unit, Vector3};

/// Rotation axis of a revolute joint, expressed in the local frame of the link it actuates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector of this axis in the local frame.
    pub fn unit(&self) -> Unit<Vector3<f64>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }

    /// Recognizes a positive unit axis. Anything else (negative, skewed or zero
    /// vectors) is not a supported joint axis.
    pub fn from_xyz(xyz: &[f64; 3]) -> Option<Axis> {
        match *xyz {
            [x, y, z] if x == 1.0 && y == 0.0 && z == 0.0 => Some(Axis::X),
            [x, y, z] if x == 0.0 && y == 1.0 && z == 0.0 => Some(Axis::Y),
            [x, y, z] if x == 0.0 && y == 0.0 && z == 1.0 => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Physically valid range of a joint, radians. The solver does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointLimits {
    pub min: f64,
    pub max: f64,
}

impl JointLimits {
    pub fn new(min: f64, max: f64) -> Self {
        JointLimits { min, max }
    }

    /// Limits as authored in degrees (robot data sheets, slider presets).
    pub fn from_degrees(min: f64, max: f64) -> Self {
        JointLimits { min: min.to_radians(), max: max.to_radians() }
    }

    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.min && angle <= self.max
    }

    pub fn clamp(&self, angle: f64) -> f64 {
        angle.max(self.min).min(self.max)
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

impl Default for JointLimits {
    /// Full turn either way, used when the robot description does not say otherwise.
    fn default() -> Self {
        JointLimits { min: -std::f64::consts::PI, max: std::f64::consts::PI }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    pub name: String,
    pub axis: Axis,
    pub limits: JointLimits,
}

/// Geometry of a link visual. Only used for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Cylinder along local Z, starting at the visual origin.
    Cylinder { radius: f64, length: f64 },
    /// Box centered in X and Y, starting at the visual origin in Z.
    Box { size: [f64; 3] },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Visual {
    /// Color as #rrggbb.
    pub color: String,
    pub shape: Shape,
    /// Placement of the shape relative to the link frame.
    pub origin: Isometry3<f64>,
}

impl Visual {
    pub fn new(color: &str, shape: Shape) -> Self {
        Visual { color: color.to_string(), shape, origin: Isometry3::identity() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub name: String,
    /// Translation from this link's joint to the next joint (or the flange), applied after
    /// the joint rotation, meters.
    pub offset: Vector3<f64>,
    pub visual: Option<Visual>,
}

/// Joint together with the link it drives.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub joint: Joint,
    pub link: Link,
}

impl Segment {
    pub fn new(joint_name: &str, axis: Axis, limits: JointLimits,
               link_name: &str, offset: [f64; 3]) -> Self {
        Segment {
            joint: Joint { name: joint_name.to_string(), axis, limits },
            link: Link {
                name: link_name.to_string(),
                offset: Vector3::from(offset),
                visual: None,
            },
        }
    }

    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.link.visual = Some(visual);
        self
    }
}

/// Immutable description of a six joint serial arm, base to tip.
/// Once constructed, the chain is never modified; solver calls only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    name: String,
    base: Vector3<f64>,
    base_visual: Option<Visual>,
    segments: [Segment; JOINT_COUNT],
}

impl Chain {
    pub fn new(name: &str, base: Vector3<f64>, segments: [Segment; JOINT_COUNT]) -> Self {
        Chain { name: name.to_string(), base, base_visual: None, segments }
    }

    pub fn with_base_visual(mut self, visual: Visual) -> Self {
        self.base_visual = Some(visual);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn joint_count(&self) -> usize {
        JOINT_COUNT
    }

    /// Translation from the world origin to joint 1. Zero for most robots.
    pub fn base(&self) -> Vector3<f64> {
        self.base
    }

    pub fn base_visual(&self) -> Option<&Visual> {
        self.base_visual.as_ref()
    }

    pub fn segments(&self) -> &[Segment; JOINT_COUNT] {
        &self.segments
    }

    pub fn segment(&self, i: usize) -> Result<&Segment, KinematicsError> {
        self.segments.get(i).ok_or(KinematicsError::IndexOutOfRange { index: i, count: JOINT_COUNT })
    }

    pub fn joint(&self, i: usize) -> Result<&Joint, KinematicsError> {
        Ok(&self.segment(i)?.joint)
    }

    pub fn link(&self, i: usize) -> Result<&Link, KinematicsError> {
        Ok(&self.segment(i)?.link)
    }

    pub fn axis(&self, i: usize) -> Result<Axis, KinematicsError> {
        Ok(self.segment(i)?.joint.axis)
    }

    pub fn offset(&self, i: usize) -> Result<Vector3<f64>, KinematicsError> {
        Ok(self.segment(i)?.link.offset)
    }

    pub fn limits(&self, i: usize) -> Result<JointLimits, KinematicsError> {
        Ok(self.segment(i)?.joint.limits)
    }

    pub fn all_limits(&self) -> [JointLimits; JOINT_COUNT] {
        std::array::from_fn(|i| self.segments[i].joint.limits)
    }

    /// Joint names, base to tip.
    pub fn joint_names(&self) -> [&str; JOINT_COUNT] {
        std::array::from_fn(|i| self.segments[i].joint.name.as_str())
    }

    /// Lower and upper limits as two joint vectors.
    pub fn limit_vectors(&self) -> (Joints, Joints) {
        let limits = self.all_limits();
        (limits.map(|l| l.min), limits.map(|l| l.max))
    }

    /// Sum of all offsets: where the flange is when every joint is at zero.
    pub fn reach_at_zero(&self) -> Vector3<f64> {
        self.segments.iter().fold(self.base, |acc, s| acc + s.link.offset)
    }

    /// Short human readable description, one joint per line.
    pub fn describe(&self) -> String {
        let mut out = format!("{} (base at [{:.4}, {:.4}, {:.4}])\n",
                              self.name, self.base.x, self.base.y, self.base.z);
        for (i, s) in self.segments.iter().enumerate() {
            out.push_str(&format!(
                "  J{} {:<16} axis {}  limits [{:7.2}°, {:7.2}°]  offset [{:.4}, {:.4}, {:.4}]\n",
                i + 1, s.joint.name, s.joint.axis.label(),
                s.joint.limits.min.to_degrees(), s.joint.limits.max.to_degrees(),
                s.link.offset.x, s.link.offset.y, s.link.offset.z
            ));
        }
        out
    }
}
