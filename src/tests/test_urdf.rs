use crate::chain::{Axis, Chain, JointLimits, Shape};
use crate::chain_robots::{BASE_COLOR, LINK_COLORS};
use crate::control_mapping::{map_control_to_joint, RobotModel};
use crate::kinematics_impl::solve;
use crate::parameter_error::ParameterError;
use crate::presets::PresetTable;
use crate::session::Session;
use crate::tests::test_utils::{are_poses_close, random_joints, seeded, SMALL};
use crate::urdf::{from_urdf, from_urdf_file};
use std::f64::consts::PI;
use std::fs::read_to_string;

const MYCOBOT_URDF: &str = "src/tests/data/mycobot_320.urdf";

fn read_mycobot() -> Chain {
    from_urdf_file(MYCOBOT_URDF).expect("Failed to interpret URDF")
}

#[test]
fn test_extraction_mycobot() {
    let chain = read_mycobot();
    let builtin = Chain::mycobot_320();

    assert_eq!(chain.name(), "mycobot_320");
    assert_eq!(chain.joint_names(), ["joint1", "joint2", "joint3", "joint4", "joint5", "joint6"]);
    assert_eq!(chain.base(), builtin.base());
    for i in 0..6 {
        assert_eq!(chain.axis(i).unwrap(), builtin.axis(i).unwrap(), "J{} axis", i + 1);
        assert!((chain.offset(i).unwrap() - builtin.offset(i).unwrap()).norm() < 1e-12,
                "Link {} offset mismatch", i + 1);
    }
    assert_eq!(chain.link(5).unwrap().name, "link6");
}

#[test]
fn test_extraction_limits() {
    let chain = read_mycobot();
    let builtin = Chain::mycobot_320();
    for i in [0, 2, 3, 4] {
        let (a, b) = (chain.limits(i).unwrap(), builtin.limits(i).unwrap());
        assert!((a.min - b.min).abs() < 1e-12 && (a.max - b.max).abs() < 1e-12, "J{}", i + 1);
    }
    // Radians written out with four decimals
    assert!((chain.limits(1).unwrap().max - 135f64.to_radians()).abs() < 1e-4);
    // Continuous joint without limits turns freely
    assert_eq!(chain.limits(5).unwrap(), JointLimits::new(-PI, PI));
}

#[test]
fn test_extraction_visuals() {
    let chain = read_mycobot();

    let base = chain.base_visual().expect("Base visual expected");
    assert_eq!(base.color, BASE_COLOR);
    assert_eq!(base.shape, Shape::Cylinder { radius: 0.06, length: 0.02 });

    let link1 = chain.link(0).unwrap().visual.as_ref().expect("Link 1 visual expected");
    assert_eq!(link1.color, "#0000ff", "Material color is taken");
    assert!((link1.origin.translation.vector.z - 0.08695).abs() < 1e-12);

    let link2 = chain.link(1).unwrap().visual.as_ref().unwrap();
    assert_eq!(link2.color, LINK_COLORS[1], "Palette color when no material");

    let link4 = chain.link(3).unwrap().visual.as_ref().unwrap();
    assert_eq!(link4.shape, Shape::Box { size: [0.05, 0.08878, 0.05] });

    assert!(chain.link(4).unwrap().visual.is_none(), "Meshes are not used");
    assert!(chain.link(5).unwrap().visual.is_none());
}

#[test]
fn test_urdf_chain_solves_like_builtin() {
    let chain = read_mycobot();
    let builtin = Chain::mycobot_320();
    let mut rng = seeded();
    for _ in 0..50 {
        let controls = random_joints(&mut rng, 2.0);
        let joints = map_control_to_joint(&controls);
        let a = solve(&chain, &joints).unwrap();
        let b = solve(&builtin, &joints).unwrap();
        for i in 0..6 {
            assert!(are_poses_close(&a[i], &b[i], SMALL), "Link {} differs", i + 1);
        }
    }
}

#[test]
fn test_session_over_urdf_chain() {
    let mut session = Session::with_chain(RobotModel::MyCobot320, read_mycobot(), PresetTable::builtin());
    session.apply_preset_named("config1").unwrap();
    let mut expected = Session::new(RobotModel::MyCobot320);
    expected.apply_preset_named("config1").unwrap();
    assert!(are_poses_close(&session.poses()[5], &expected.poses()[5], SMALL));
}

#[test]
fn test_explicit_joint_names() {
    let xml = read_to_string(MYCOBOT_URDF).unwrap();
    let names = ["joint1", "joint2", "joint3", "joint4", "joint5", "joint6"];
    let chain = from_urdf(&xml, &Some(names)).expect("Named joints must be found");
    assert_eq!(chain.axis(4).unwrap(), Axis::Z);

    let names = ["joint1", "joint2", "joint3", "joint4", "joint5", "tool0"];
    assert!(matches!(from_urdf(&xml, &Some(names)), Err(ParameterError::MissingField(_))));
}

#[test]
fn test_named_fixed_joint_is_rejected() {
    let xml = read_to_string(MYCOBOT_URDF).unwrap();
    let names = ["joint1", "joint2", "joint3", "joint4", "joint5", "joint6_flange"];
    assert!(matches!(from_urdf(&xml, &Some(names)), Err(ParameterError::UnsupportedGeometry(_))));
}

#[test]
fn test_rotated_origin_is_unsupported() {
    let xml = read_to_string(MYCOBOT_URDF).unwrap()
        .replace(r#"<origin xyz="0 0 0.120" rpy="0 0 0"/>"#, r#"<origin xyz="0 0 0.120" rpy="0 1.5708 0"/>"#);
    assert!(matches!(from_urdf(&xml, &None), Err(ParameterError::UnsupportedGeometry(_))));
}

#[test]
fn test_negative_axis_is_unsupported() {
    let xml = read_to_string(MYCOBOT_URDF).unwrap()
        .replacen(r#"<axis xyz="0 1 0"/>"#, r#"<axis xyz="0 -1 0"/>"#, 1);
    assert!(matches!(from_urdf(&xml, &None), Err(ParameterError::UnsupportedGeometry(_))));
}

#[test]
fn test_missing_file() {
    assert!(matches!(from_urdf_file("src/tests/data/no_such_robot.urdf"), Err(ParameterError::IoError(_))));
}
