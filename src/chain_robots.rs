//! Hardcoded chains for the robots shipped with this crate

use crate::chain::{Axis, Chain, JointLimits, Segment, Shape, Visual};
use nalgebra::Vector3;

/// Link colors, base to tip.
pub const LINK_COLORS: [&str; 6] = ["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b"];

/// Color of the (static) base link.
pub const BASE_COLOR: &str = "#808080";

fn cylinder(color: &str, radius: f64, length: f64) -> Visual {
    Visual::new(color, Shape::Cylinder { radius, length })
}

impl Chain {
    /// Elephant Robotics myCobot 320. Lengths in meters, limits from the data sheet.
    /// At zero all links stand straight up, with the lateral wrist offsets pointing along -Y.
    pub fn mycobot_320() -> Self {
        Chain::new(
            "mycobot_320",
            Vector3::zeros(),
            [
                Segment::new("joint1", Axis::Z, JointLimits::from_degrees(-168.0, 168.0),
                             "link1", [0.0, 0.0, 0.1739])
                    .with_visual(cylinder(LINK_COLORS[0], 0.045, 0.1739)),
                Segment::new("joint2", Axis::Y, JointLimits::from_degrees(-135.0, 135.0),
                             "link2", [0.0, 0.0, 0.135])
                    .with_visual(cylinder(LINK_COLORS[1], 0.035, 0.135)),
                Segment::new("joint3", Axis::Y, JointLimits::from_degrees(-145.0, 145.0),
                             "link3", [0.0, 0.0, 0.120])
                    .with_visual(cylinder(LINK_COLORS[2], 0.03, 0.120)),
                Segment::new("joint4", Axis::Y, JointLimits::from_degrees(-148.0, 148.0),
                             "link4", [0.0, -0.08878, 0.0])
                    .with_visual(Visual::new(LINK_COLORS[3], Shape::Box { size: [0.05, 0.08878, 0.05] })),
                Segment::new("joint5", Axis::Z, JointLimits::from_degrees(-168.0, 168.0),
                             "link5", [0.0, 0.0, 0.095])
                    .with_visual(cylinder(LINK_COLORS[4], 0.025, 0.095)),
                Segment::new("joint6", Axis::Y, JointLimits::from_degrees(-180.0, 180.0),
                             "link6", [0.0, -0.0655, 0.0])
                    .with_visual(Visual::new(LINK_COLORS[5], Shape::Box { size: [0.04, 0.0655, 0.04] })),
            ],
        ).with_base_visual(cylinder(BASE_COLOR, 0.06, 0.02))
    }

    /// Generic six axis arm: base rotation, shoulder, elbow and a roll-pitch-roll wrist,
    /// all links stacked along Z at zero.
    pub fn generic_6axis() -> Self {
        Chain::new(
            "generic_6axis",
            Vector3::zeros(),
            [
                Segment::new("base_joint", Axis::Z, JointLimits::from_degrees(-180.0, 180.0),
                             "link1", [0.0, 0.0, 0.3])
                    .with_visual(cylinder(LINK_COLORS[0], 0.08, 0.3)),
                Segment::new("shoulder_joint", Axis::Y, JointLimits::from_degrees(-90.0, 90.0),
                             "link2", [0.0, 0.0, 0.5])
                    .with_visual(cylinder(LINK_COLORS[1], 0.06, 0.5)),
                Segment::new("elbow_joint", Axis::Y, JointLimits::from_degrees(-135.0, 135.0),
                             "link3", [0.0, 0.0, 0.4])
                    .with_visual(cylinder(LINK_COLORS[2], 0.05, 0.4)),
                Segment::new("wrist_1_joint", Axis::Z, JointLimits::from_degrees(-180.0, 180.0),
                             "link4", [0.0, 0.0, 0.1])
                    .with_visual(cylinder(LINK_COLORS[3], 0.04, 0.1)),
                Segment::new("wrist_2_joint", Axis::Y, JointLimits::from_degrees(-120.0, 120.0),
                             "link5", [0.0, 0.0, 0.1])
                    .with_visual(Visual::new(LINK_COLORS[4], Shape::Box { size: [0.06, 0.06, 0.1] })),
                Segment::new("wrist_3_joint", Axis::Z, JointLimits::from_degrees(-180.0, 180.0),
                             "link6", [0.05, 0.0, 0.05])
                    .with_visual(cylinder(LINK_COLORS[5], 0.03, 0.05)),
            ],
        ).with_base_visual(cylinder(BASE_COLOR, 0.1, 0.05))
    }
}
