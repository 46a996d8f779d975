//! Supports overriding preset values from a YAML file (optional)

use std::path::Path;

use regex::Regex;
use tracing::info;
use yaml_rust2::{Yaml, YamlLoader};

use crate::kinematics_error::KinematicsError;
use crate::parameter_error::ParameterError;
use crate::presets::{Preset, PresetTable};

impl PresetTable {
    /// Read preset values from YAML file. YAML file like this is supported:
    /// ```yaml
    /// units: degrees
    /// presets:
    ///   config1: [0, -90, -60, -45, -90, 0]
    ///   side: [deg(90), deg(-45), deg(-45), deg(-45), 0, 0]
    /// ```
    /// `units` is optional (radians by default) and applies to plain numbers. Values written
    /// as deg(angle) are always degrees. Presets not mentioned keep their built-in values.
    /// Unknown preset names, vectors of wrong length and non-finite values are rejected here,
    /// so a loaded table never holds invalid values.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let table = PresetTable::from_yaml(&contents)?;
        info!("Loaded presets from {}", path.as_ref().display());
        Ok(table)
    }

    /// Same as `from_yaml_file` but for YAML content already in memory.
    pub fn from_yaml(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        let doc = docs.first()
            .ok_or_else(|| ParameterError::ParseError("Empty preset file".to_string()))?;

        let degrees = match &doc["units"] {
            Yaml::BadValue | Yaml::Null => false,
            Yaml::String(units) => match units.as_str() {
                "degrees" | "deg" => true,
                "radians" | "rad" => false,
                other => return Err(ParameterError::ParseError(
                    format!("units must be degrees or radians (got {})", other))),
            },
            other => return Err(ParameterError::ParseError(
                format!("units must be a string (got {:?})", other))),
        };

        let presets = doc["presets"].as_hash()
            .ok_or_else(|| ParameterError::MissingField("presets".to_string()))?;

        let mut table = PresetTable::builtin();
        for (key, value) in presets.iter() {
            let name = key.as_str()
                .ok_or_else(|| ParameterError::ParseError(format!("Preset name must be a string: {:?}", key)))?;
            let preset = Preset::from_name(name)
                .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
            let list = value.as_vec()
                .ok_or_else(|| ParameterError::ParseError(format!("Preset {} must be a list", name)))?;
            let values = list.iter()
                .map(|v| parse_value(v, degrees))
                .collect::<Result<Vec<f64>, ParameterError>>()?;

            table.set(preset, &values).map_err(|e| match e {
                KinematicsError::Shape { expected, found } =>
                    ParameterError::InvalidLength { expected, found },
                other => ParameterError::ParseError(format!("Preset {}: {}", name, other)),
            })?;
        }
        Ok(table)
    }
}

/// Value in radians. Plain numbers are scaled if the file is in degrees.
fn parse_value(value: &Yaml, degrees: bool) -> Result<f64, ParameterError> {
    let scale = |x: f64| if degrees { x.to_radians() } else { x };
    match value {
        Yaml::Integer(i) => Ok(scale(*i as f64)),
        Yaml::Real(_) => value.as_f64().map(scale)
            .ok_or_else(|| ParameterError::ParseError(format!("Not a number: {:?}", value))),
        Yaml::String(s) => parse_deg(s),
        other => Err(ParameterError::ParseError(format!("Not a number: {:?}", other))),
    }
}

/// Parses deg(angle) into radians.
fn parse_deg(text: &str) -> Result<f64, ParameterError> {
    let re = Regex::new(r"^deg\(\s*(-?\d+(\.\d+)?)\s*\)$")
        .map_err(|_| ParameterError::ParseError("Invalid regex pattern".to_string()))?;
    let caps = re.captures(text.trim())
        .ok_or_else(|| ParameterError::WrongAngle(text.to_string()))?;
    let degrees: f64 = caps[1].parse()
        .map_err(|_| ParameterError::WrongAngle(text.to_string()))?;
    Ok(degrees.to_radians())
}
