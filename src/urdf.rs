//! Supports building a chain from URDF (optional)
//!
//! Only what the chain model needs is read: joint type, parent and child links, origin,
//! axis and limits, plus link visuals (cylinder or box) for rendering hints.

extern crate sxd_document;

use crate::chain::{Axis, Chain, JointLimits, Segment, Shape, Visual};
use crate::chain_robots::{BASE_COLOR, LINK_COLORS};
use crate::kinematic_traits::JOINT_COUNT;
use crate::parameter_error::ParameterError;
use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use regex::Regex;
use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;
use sxd_document::{dom, parser};
use tracing::{debug, warn};

/// Reads the chain from URDF file. The six revolute (or continuous) joints are taken in
/// the order they appear in the file. XACRO files with literal values may also work.
///
/// # Example
/// ```no_run
/// let chain = rs_cobot_kinematics::urdf::from_urdf_file("URDF/mycobotpro320.urdf")
///     .expect("Failed to read robot description");
/// println!("{}", chain.describe());
/// ```
pub fn from_urdf_file<P: AsRef<Path>>(path: P) -> Result<Chain, ParameterError> {
    let xml_content = read_to_string(path.as_ref())?;
    debug!("Read robot description from {}", path.as_ref().display());
    from_urdf(&xml_content, &None)
}

/// Parses URDF XML content into a chain.
///
/// # Parameters
/// - `xml_content`: the XML data of the URDF file.
/// - `joint_names`: optional names of the six joints, base to tip. Required if the file
///   describes more revolute joints than the arm has (grippers, multiple robots).
///
/// # Mapping
/// - origin of joint 1 becomes the chain base;
/// - origin of joint i+1 becomes the offset of link i;
/// - the offset of link 6 is the origin of a fixed joint attached to it (flange, tool),
///   or zero if there is none.
///
/// Joints must rotate about a positive X, Y or Z axis and have no `rpy` rotation in their
/// origin; other geometries are reported as `ParameterError::UnsupportedGeometry`.
pub fn from_urdf(xml_content: &str, joint_names: &Option<[&str; 6]>) -> Result<Chain, ParameterError> {
    let package = parser::parse(xml_content)
        .map_err(|e| ParameterError::XmlProcessingError(format!("Failed to parse XML: {}", e)))?;
    let document = package.as_document();

    let root_element = document.root().children().into_iter()
        .find_map(|e| e.element())
        .ok_or_else(|| ParameterError::XmlProcessingError("No root element found".to_string()))?;
    let robot_name = root_element.attribute("name")
        .map(|a| a.value().to_string())
        .unwrap_or_else(|| "robot".to_string());

    let mut description = Description::default();
    collect(root_element, &mut description)?;

    let arm = select_joints(&description.joints, joint_names)?;
    build_chain(&robot_name, &arm, &description)
}

#[derive(Debug, Clone, PartialEq)]
struct JointData {
    name: String,
    kind: String,
    parent: String,
    child: String,
    xyz: [f64; 3],
    rpy: [f64; 3],
    axis: [f64; 3],
    limits: JointLimits,
}

#[derive(Debug, Default)]
struct Description {
    joints: Vec<JointData>,
    visuals: HashMap<String, Option<Visual>>,
}

fn child_element<'d>(element: dom::Element<'d>, name: &str) -> Option<dom::Element<'d>> {
    element.children().into_iter()
        .find_map(|e| e.element().filter(|el| el.name().local_part() == name))
}

fn attribute_or(element: dom::Element, name: &str, default: &str) -> String {
    element.attribute(name).map(|a| a.value().to_string()).unwrap_or_else(|| default.to_string())
}

// Recursive, so joints and links wrapped into macros or groups are found too.
fn collect(element: dom::Element, description: &mut Description) -> Result<(), ParameterError> {
    for child in element.children().into_iter().filter_map(|e| e.element()) {
        match child.name().local_part() {
            "joint" => description.joints.push(read_joint(child)?),
            "link" => {
                let name = attribute_or(child, "name", "Unnamed");
                let visual = child_element(child, "visual").map(read_visual).transpose()?.flatten();
                description.visuals.insert(name, visual);
            }
            _ => collect(child, description)?,
        }
    }
    Ok(())
}

fn read_joint(element: dom::Element) -> Result<JointData, ParameterError> {
    let name = attribute_or(element, "name", "Unnamed");
    let link_of = |tag: &str| child_element(element, tag)
        .map(|e| attribute_or(e, "link", ""))
        .unwrap_or_default();
    let (xyz, rpy) = read_origin(child_element(element, "origin"))?;
    let axis = match child_element(element, "axis") {
        Some(axis) => parse_triplet(&attribute_or(axis, "xyz", "0 0 1"))?,
        None => [0.0, 0.0, 1.0],
    };

    let limits = match child_element(element, "limit").map(get_limits).transpose() {
        Ok(Some(limits)) => limits,
        Ok(None) => JointLimits::default(),
        Err(e) => {
            warn!("Joint limits defined but not readable for {}: {}", name, e);
            JointLimits::default()
        }
    };

    Ok(JointData {
        kind: attribute_or(element, "type", ""),
        parent: link_of("parent"),
        child: link_of("child"),
        name,
        xyz,
        rpy,
        axis,
        limits,
    })
}

fn read_origin(origin: Option<dom::Element>) -> Result<([f64; 3], [f64; 3]), ParameterError> {
    match origin {
        Some(origin) => Ok((
            parse_triplet(&attribute_or(origin, "xyz", "0 0 0"))?,
            parse_triplet(&attribute_or(origin, "rpy", "0 0 0"))?,
        )),
        None => Ok(([0.0; 3], [0.0; 3])),
    }
}

fn read_visual(element: dom::Element) -> Result<Option<Visual>, ParameterError> {
    let (xyz, rpy) = read_origin(child_element(element, "origin"))?;
    let Some(geometry) = child_element(element, "geometry") else {
        return Ok(None);
    };

    let shape = if let Some(cylinder) = child_element(geometry, "cylinder") {
        Shape::Cylinder {
            radius: parse_number(&attribute_or(cylinder, "radius", ""))?,
            length: parse_number(&attribute_or(cylinder, "length", ""))?,
        }
    } else if let Some(cube) = child_element(geometry, "box") {
        Shape::Box { size: parse_triplet(&attribute_or(cube, "size", ""))? }
    } else {
        debug!("Only cylinder and box visuals are used, skipping other geometry");
        return Ok(None);
    };

    let color = child_element(element, "material")
        .and_then(|m| child_element(m, "color"))
        .map(|c| rgba_to_hex(&attribute_or(c, "rgba", "")))
        .transpose()?
        .unwrap_or_default();

    Ok(Some(Visual {
        color,
        shape,
        origin: Isometry3::from_parts(
            Translation3::new(xyz[0], xyz[1], xyz[2]),
            UnitQuaternion::from_euler_angles(rpy[0], rpy[1], rpy[2]),
        ),
    }))
}

fn parse_number(text: &str) -> Result<f64, ParameterError> {
    text.trim().parse()
        .map_err(|_| ParameterError::ParseError(format!("Not a number: '{}'", text)))
}

fn parse_triplet(text: &str) -> Result<[f64; 3], ParameterError> {
    let values: Vec<f64> = text.split_whitespace()
        .map(parse_number)
        .collect::<Result<_, _>>()?;
    if values.len() != 3 {
        return Err(ParameterError::InvalidLength { expected: 3, found: values.len() });
    }
    Ok([values[0], values[1], values[2]])
}

fn rgba_to_hex(rgba: &str) -> Result<String, ParameterError> {
    let values: Vec<f64> = rgba.split_whitespace()
        .map(parse_number)
        .collect::<Result<_, _>>()?;
    if values.len() < 3 {
        return Err(ParameterError::InvalidLength { expected: 4, found: values.len() });
    }
    let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Ok(format!("#{:02x}{:02x}{:02x}", channel(values[0]), channel(values[1]), channel(values[2])))
}

fn parse_angle(attr_value: &str) -> Result<f64, ParameterError> {
    // Regular expression to match the ${radians(<number>)} format that is common in xacro
    let re = Regex::new(r"^\$\{radians\((-?\d+(\.\d+)?)\)\}$")
        .map_err(|_| ParameterError::ParseError("Invalid regex pattern".to_string()))?;

    if let Some(caps) = re.captures(attr_value) {
        let degrees: f64 = caps[1].parse()
            .map_err(|_| ParameterError::WrongAngle(attr_value.to_string()))?;
        Ok(degrees.to_radians())
    } else {
        // Plain number, radians
        attr_value.trim().parse()
            .map_err(|_| ParameterError::WrongAngle(attr_value.to_string()))
    }
}

fn get_limits(element: dom::Element) -> Result<JointLimits, ParameterError> {
    let defaults = JointLimits::default();
    let lower = match element.attribute("lower") {
        Some(attr) => parse_angle(attr.value())?,
        None => defaults.min,
    };
    let upper = match element.attribute("upper") {
        Some(attr) => parse_angle(attr.value())?,
        None => defaults.max,
    };
    Ok(JointLimits::new(lower, upper))
}

fn is_rotary(joint: &JointData) -> bool {
    joint.kind == "revolute" || joint.kind == "continuous"
}

fn select_joints<'a>(joints: &'a [JointData], joint_names: &Option<[&str; 6]>)
                     -> Result<Vec<&'a JointData>, ParameterError> {
    match joint_names {
        Some(names) => names.iter()
            .map(|name| {
                let joint = joints.iter().find(|j| j.name == *name)
                    .ok_or_else(|| ParameterError::MissingField(format!("Joint not found: {}", name)))?;
                if !is_rotary(joint) {
                    return Err(ParameterError::UnsupportedGeometry(
                        format!("Joint {} is {}, not revolute or continuous", joint.name, joint.kind)));
                }
                Ok(joint)
            })
            .collect(),
        None => {
            let movable: Vec<&JointData> = joints.iter().filter(|j| is_rotary(j)).collect();
            if movable.len() != JOINT_COUNT {
                return Err(ParameterError::InvalidLength { expected: JOINT_COUNT, found: movable.len() });
            }
            Ok(movable)
        }
    }
}

fn build_chain(robot_name: &str, arm: &[&JointData], description: &Description)
               -> Result<Chain, ParameterError> {
    for (i, joint) in arm.iter().enumerate() {
        if joint.rpy.iter().any(|&r| r != 0.0) {
            return Err(ParameterError::UnsupportedGeometry(
                format!("Joint {} has a rotated origin (rpy {:?})", joint.name, joint.rpy)));
        }
        if i > 0 && arm[i - 1].child != joint.parent {
            return Err(ParameterError::UnsupportedGeometry(
                format!("Joint {} is not attached to {}", joint.name, arm[i - 1].child)));
        }
    }

    let flange = arm[JOINT_COUNT - 1];
    let tool_offset = description.joints.iter()
        .find(|j| j.kind == "fixed" && j.parent == flange.child)
        .map(|j| j.xyz)
        .unwrap_or([0.0; 3]);

    let mut segments = Vec::with_capacity(JOINT_COUNT);
    for (i, joint) in arm.iter().enumerate() {
        let axis = Axis::from_xyz(&joint.axis).ok_or_else(|| ParameterError::UnsupportedGeometry(
            format!("Joint {} must rotate about positive X, Y or Z, not {:?}", joint.name, joint.axis)))?;
        let offset = if i + 1 < JOINT_COUNT { arm[i + 1].xyz } else { tool_offset };

        let mut segment = Segment::new(&joint.name, axis, joint.limits, &joint.child, offset);
        if let Some(Some(visual)) = description.visuals.get(&joint.child) {
            segment = segment.with_visual(with_default_color(visual, LINK_COLORS[i]));
        }
        segments.push(segment);
    }

    let segments: [Segment; JOINT_COUNT] = segments.try_into()
        .map_err(|_| ParameterError::InvalidLength { expected: JOINT_COUNT, found: arm.len() })?;
    let mut chain = Chain::new(robot_name, Vector3::from(arm[0].xyz), segments);
    if let Some(Some(visual)) = description.visuals.get(&arm[0].parent) {
        chain = chain.with_base_visual(with_default_color(visual, BASE_COLOR));
    }
    Ok(chain)
}

fn with_default_color(visual: &Visual, color: &str) -> Visual {
    let mut visual = visual.clone();
    if visual.color.is_empty() {
        visual.color = color.to_string();
    }
    visual
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_joints() {
        let xml = r#"
            <robot name="two">
                <joint name="joint_b" type="revolute">
                    <origin xyz="4.0 5.0 6.0"></origin>
                    <axis xyz="0 0 1"/>
                    <limit lower="-3.15" upper="${radians(90)}" effort="0" velocity="3.67"/>
                </joint>
                <joint name="joint_a" type="continuous">
                    <origin xyz="1.0 2.0 3.0" rpy="0 0.5 0"></origin>
                    <parent link="a"/>
                    <child link="b"/>
                </joint>
            </robot>
        "#;
        let package = parser::parse(xml).expect("Failed to parse XML");
        let document = package.as_document();
        let root = document.root().children().into_iter().find_map(|e| e.element()).unwrap();
        let mut description = Description::default();
        collect(root, &mut description).expect("Failed to process XML joints");

        assert_eq!(description.joints.len(), 2, "Should have extracted two joints");
        let b = &description.joints[0];
        assert_eq!(b.name, "joint_b");
        assert_eq!(b.xyz, [4.0, 5.0, 6.0]);
        assert_eq!(b.limits.min, -3.15);
        assert!((b.limits.max - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

        let a = &description.joints[1];
        assert_eq!(a.kind, "continuous");
        assert_eq!(a.rpy, [0.0, 0.5, 0.0]);
        assert_eq!(a.axis, [0.0, 0.0, 1.0], "Default axis is Z");
        assert_eq!(a.limits, JointLimits::default(), "No limits means full turn");
        assert_eq!((a.parent.as_str(), a.child.as_str()), ("a", "b"));
    }

    #[test]
    fn test_parse_angle() {
        assert_eq!(parse_angle("1.5").unwrap(), 1.5);
        assert!((parse_angle("${radians(-180)}").unwrap() + std::f64::consts::PI).abs() < 1e-12);
        assert!(matches!(parse_angle("${pi}"), Err(ParameterError::WrongAngle(_))));
    }

    #[test]
    fn test_rgba_to_hex() {
        assert_eq!(rgba_to_hex("1 0 0 1").unwrap(), "#ff0000");
        assert_eq!(rgba_to_hex("0.5 0.5 0.5 1").unwrap(), "#808080");
        assert!(rgba_to_hex("1 0").is_err());
    }

    #[test]
    fn test_wrong_joint_count() {
        let xml = r#"<robot><joint name="j1" type="revolute"><axis xyz="0 0 1"/></joint></robot>"#;
        assert!(matches!(from_urdf(xml, &None),
                         Err(ParameterError::InvalidLength { expected: 6, found: 1 })));
    }

    #[test]
    fn test_not_xml() {
        assert!(matches!(from_urdf("<robot>", &None), Err(ParameterError::XmlProcessingError(_))));
    }
}
