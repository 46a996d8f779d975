//! Named preset configurations.
//!
//! Preset values are the values a user would set on the robot: control parameters for the
//! myCobot 320 and joint angles for the generic arm. See `RobotModel::to_joints`.

use crate::kinematic_traits::Joints;
use crate::kinematics_error::KinematicsError;
use crate::utils::checked_joints;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Home,
    Config1,
    Vertical,
    Forward,
    Side,
}

impl Preset {
    pub const ALL: [Preset; 5] = [Preset::Home, Preset::Config1, Preset::Vertical, Preset::Forward, Preset::Side];

    /// Key used on the command line and in preset files.
    pub fn key(&self) -> &'static str {
        match self {
            Preset::Home => "home",
            Preset::Config1 => "config1",
            Preset::Vertical => "vertical",
            Preset::Forward => "forward",
            Preset::Side => "side",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Preset::Home => "Home Position",
            Preset::Config1 => "Configuration 1",
            Preset::Vertical => "Vertical Reach",
            Preset::Forward => "Forward Reach",
            Preset::Side => "Side Reach",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Home => "All joints at zero (home position)",
            Preset::Config1 => "C1=0, C2=-π/2, C3=-π/3, C4=-π/4, C5=-π/2, C6=0",
            Preset::Vertical => "Arm pointing straight up",
            Preset::Forward => "Arm reaching forward",
            Preset::Side => "Arm reaching to the side",
        }
    }

    /// Values shipped with the crate, radians.
    pub fn default_values(&self) -> Joints {
        match self {
            Preset::Home => [0.0; 6],
            Preset::Config1 => [0.0, -PI / 2.0, -PI / 3.0, -PI / 4.0, -PI / 2.0, 0.0],
            Preset::Vertical => [0.0, -PI / 2.0, 0.0, 0.0, 0.0, 0.0],
            Preset::Forward => [0.0, -PI / 4.0, -PI / 4.0, -PI / 4.0, 0.0, 0.0],
            Preset::Side => [PI / 2.0, -PI / 4.0, -PI / 4.0, -PI / 4.0, 0.0, 0.0],
        }
    }

    /// Finds the preset by key or display name, ignoring case, spaces, '-' and '_'.
    /// "Config 1", "config_1" and "Reach Forward" are all recognized.
    pub fn from_name(name: &str) -> Result<Preset, KinematicsError> {
        let simplified: String = name.chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        let found = match simplified.as_str() {
            "home" | "homeposition" => Some(Preset::Home),
            "config1" | "configuration1" => Some(Preset::Config1),
            "vertical" | "verticalreach" => Some(Preset::Vertical),
            "forward" | "forwardreach" | "reachforward" => Some(Preset::Forward),
            "side" | "sidereach" | "reachside" => Some(Preset::Side),
            _ => None,
        };
        found.ok_or_else(|| KinematicsError::PresetNotFound(name.to_string()))
    }

    fn index(&self) -> usize {
        match self {
            Preset::Home => 0,
            Preset::Config1 => 1,
            Preset::Vertical => 2,
            Preset::Forward => 3,
            Preset::Side => 4,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Preset {
    type Err = KinematicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::from_name(s)
    }
}

/// Values for every preset. Values are validated when set, so lookups never fail
/// for a known preset.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetTable {
    values: [Joints; 5],
}

impl PresetTable {
    pub fn builtin() -> Self {
        PresetTable { values: Preset::ALL.map(|p| p.default_values()) }
    }

    /// Replaces the values of one preset. The vector must have six finite elements.
    pub fn set(&mut self, preset: Preset, values: &[f64]) -> Result<(), KinematicsError> {
        self.values[preset.index()] = checked_joints(values)?;
        Ok(())
    }

    pub fn get(&self, preset: Preset) -> Joints {
        self.values[preset.index()]
    }

    /// Lookup by name, "preset not found" for anything unknown.
    pub fn lookup(&self, name: &str) -> Result<(Preset, Joints), KinematicsError> {
        let preset = Preset::from_name(name)?;
        Ok((preset, self.get(preset)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Preset, Joints)> + '_ {
        Preset::ALL.iter().map(move |&p| (p, self.get(p)))
    }

    /// Listing of all presets with their descriptions and values.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for (preset, values) in self.iter() {
            let angles: Vec<String> = values.iter().map(|a| format!("{:.3}", a)).collect();
            out.push_str(&format!("{}:\n  Name: {}\n  Description: {}\n  Angles: [{}]\n",
                                  preset.key(), preset.display_name(), preset.description(),
                                  angles.join(", ")));
        }
        out
    }
}

impl Default for PresetTable {
    fn default() -> Self {
        PresetTable::builtin()
    }
}
