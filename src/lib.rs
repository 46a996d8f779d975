//! Rust implementation of forward kinematics for six-axis robotic arms built as a serial chain
//! of revolute joints: a generic arm and the Elephant Robotics myCobot 320.
//!
//! Given six joint angles, the solver returns the pose (position and orientation) of every
//! link endpoint in the base frame, ready to be drawn by any renderer. For the myCobot 320,
//! the six control parameters exposed by its controller are first mapped to joint angles
//! with the fixed linear coupling of its wrist and elbow.
//!
//! # Features
//!
//! - Chain model: per joint rotation axis (X, Y or Z) and limits, per link offset and visual.
//! - Pose solver: rotations and translations composed base to tip in link-local frames,
//!   using unit quaternions. Pure, recomputed from scratch on every call.
//! - Control parameter mapping for the myCobot 320 and its exact inverse.
//! - Named presets (home, config1, vertical, forward, side), optionally overridden from YAML.
//! - Reading the chain from URDF.
//! - Joint limit checks and clamping for user interfaces, an interactive session and
//!   demo animation sweeps.
//!
//! No inverse kinematics, dynamics or collision checking is provided.
//!
//! ## Example
//!
//! ```
//! use rs_cobot_kinematics::chain::Chain;
//! use rs_cobot_kinematics::control_mapping::map_control_to_joint;
//! use rs_cobot_kinematics::kinematics_impl::solve;
//! use rs_cobot_kinematics::presets::{Preset, PresetTable};
//!
//! let chain = Chain::mycobot_320();
//! let controls = PresetTable::builtin().get(Preset::Config1);
//! let poses = solve(&chain, &map_control_to_joint(&controls)).unwrap();
//! for (i, pose) in poses.iter().enumerate() {
//!     println!("Link {}: {}", i + 1, pose.translation.vector);
//! }
//! ```

pub mod kinematic_traits;
pub mod kinematics_error;

pub mod chain;
pub mod chain_robots;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematics_impl;

pub mod control_mapping;

pub mod constraints;

pub mod presets;

pub mod session;

pub mod animation;

pub mod render_model;

#[cfg(feature = "allow_filesystem")]
pub mod urdf;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;
#[cfg(feature = "allow_filesystem")]
pub mod presets_from_file;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
