//! Case file schema.
//!
//! Field names carry their unit so a case file reads without a units table.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub geometry: GeometryDef,
    pub fluid: FluidDef,
    pub thermal: ThermalDef,
    pub wellhead_pressure_psia: f64,
    #[serde(default)]
    pub solver: SolverDef,
    pub rates: RatesDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeometryDef {
    pub diameter_in: f64,
    pub total_length_ft: f64,
    pub increment_ft: f64,
    /// Measured from horizontal
    #[serde(default = "default_inclination_deg")]
    pub inclination_deg: f64,
    #[serde(default)]
    pub roughness: f64,
}

fn default_inclination_deg() -> f64 {
    90.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FluidDef {
    pub gas_liquid_ratio_scf_stb: f64,
    #[serde(default)]
    pub water_oil_ratio: f64,
    pub oil_api: f64,
    pub gas_gravity: f64,
    #[serde(default = "default_water_gravity")]
    pub water_gravity: f64,
    pub separator_temperature_f: f64,
    pub separator_pressure_psig: f64,
}

fn default_water_gravity() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThermalDef {
    pub wellhead_temperature_f: f64,
    pub bottomhole_temperature_f: f64,
}

/// Overrides for the traverse solver; anything left out keeps its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epsilon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_dp_psi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_increment: Option<FinalIncrementDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinalIncrementDef {
    Truncate,
    Partial,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum RatesDef {
    List {
        values_stb_d: Vec<f64>,
    },
    Range {
        start_stb_d: f64,
        end_stb_d: f64,
        num_points: usize,
        #[serde(default)]
        spacing: SpacingDef,
    },
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpacingDef {
    #[default]
    Linear,
    Logarithmic,
}
