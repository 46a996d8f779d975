//! What a renderer needs to draw the arm in a given pose: the joint polyline and the world
//! placement of every link visual. Drawing itself happens elsewhere.

use crate::chain::{Chain, Visual};
use crate::kinematic_traits::{LinkPoses, Pose};
use nalgebra::Point3;

/// Base origin followed by the six link endpoints, for drawing lines and joint markers.
pub fn skeleton(chain: &Chain, poses: &LinkPoses) -> Vec<Point3<f64>> {
    std::iter::once(Point3::from(chain.base()))
        .chain(poses.iter().map(|p| Point3::from(p.translation.vector)))
        .collect()
}

/// A link visual placed in the world.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedVisual<'a> {
    /// Link index base to tip, None for the base link.
    pub link: Option<usize>,
    pub visual: &'a Visual,
    pub placement: Pose,
}

/// World placement of each visual. A link's visual hangs off the frame at the start of that
/// link (after its joint rotated), so the shape turns with the joint. Links without visuals
/// are skipped.
pub fn visual_frames<'a>(chain: &'a Chain, poses: &LinkPoses) -> Vec<PlacedVisual<'a>> {
    let mut placed = Vec::new();
    if let Some(visual) = chain.base_visual() {
        placed.push(PlacedVisual { link: None, visual, placement: visual.origin });
    }
    for (i, segment) in chain.segments().iter().enumerate() {
        if let Some(visual) = &segment.link.visual {
            // Undo the link translation to get back to the joint frame.
            let joint_frame = poses[i] * nalgebra::Translation3::from(-segment.link.offset);
            placed.push(PlacedVisual { link: Some(i), visual, placement: joint_frame * visual.origin });
        }
    }
    placed
}

/// Frame of each joint after its rotation: where link i starts.
pub fn joint_frames(chain: &Chain, poses: &LinkPoses) -> LinkPoses {
    std::array::from_fn(|i| poses[i] * nalgebra::Translation3::from(-chain.segments()[i].link.offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics_impl::solve;

    #[test]
    fn test_skeleton_points() {
        let chain = Chain::generic_6axis();
        let poses = solve(&chain, &[0.3, -0.2, 0.5, 0.0, 0.4, 0.0]).unwrap();
        let points = skeleton(&chain, &poses);
        assert_eq!(points.len(), 7);
        assert_eq!(points[0], Point3::origin());
        assert_eq!(points[6].coords, poses[5].translation.vector);
    }

    #[test]
    fn test_visual_frames_at_home() {
        let chain = Chain::mycobot_320();
        let poses = solve(&chain, &[0.0; 6]).unwrap();
        let placed = visual_frames(&chain, &poses);
        assert_eq!(placed.len(), 7, "Base and six links have visuals");
        assert_eq!(placed[0].link, None);
        // Visual of link 2 starts where link 1 ends.
        let link2 = &placed[2];
        assert_eq!(link2.link, Some(1));
        assert!((link2.placement.translation.vector - poses[0].translation.vector).norm() < 1e-12);
    }

    #[test]
    fn test_joint_frames_rotate_with_joint() {
        let chain = Chain::generic_6axis();
        let poses = solve(&chain, &[0.0, 0.7, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let frames = joint_frames(&chain, &poses);
        assert!((frames[1].rotation.angle() - 0.7).abs() < 1e-9);
        assert!((frames[1].translation.vector - poses[0].translation.vector).norm() < 1e-12);
    }
}
