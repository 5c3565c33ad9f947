//! Case validation logic.

use crate::schema::{CaseFile, FluidDef, GeometryDef, RatesDef, SolverDef, ThermalDef};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Missing value: {field}")]
    Missing { field: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case(case: &CaseFile) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }
    if case.name.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "name".to_string(),
        });
    }

    validate_geometry(&case.geometry)?;
    validate_fluid(&case.fluid)?;
    validate_thermal(&case.thermal)?;
    positive("wellhead_pressure_psia", case.wellhead_pressure_psia)?;
    validate_solver(&case.solver)?;
    validate_rates(&case.rates)
}

fn validate_geometry(geometry: &GeometryDef) -> Result<(), ValidationError> {
    positive("geometry.diameter_in", geometry.diameter_in)?;
    positive("geometry.total_length_ft", geometry.total_length_ft)?;
    positive("geometry.increment_ft", geometry.increment_ft)?;
    if geometry.increment_ft > geometry.total_length_ft {
        return Err(ValidationError::InvalidValue {
            field: "geometry.increment_ft".to_string(),
            value: geometry.increment_ft.to_string(),
            reason: "must not exceed total_length_ft".to_string(),
        });
    }
    finite("geometry.inclination_deg", geometry.inclination_deg)?;
    non_negative("geometry.roughness", geometry.roughness)
}

fn validate_fluid(fluid: &FluidDef) -> Result<(), ValidationError> {
    non_negative("fluid.gas_liquid_ratio_scf_stb", fluid.gas_liquid_ratio_scf_stb)?;
    non_negative("fluid.water_oil_ratio", fluid.water_oil_ratio)?;
    positive("fluid.oil_api", fluid.oil_api)?;
    positive("fluid.gas_gravity", fluid.gas_gravity)?;
    positive("fluid.water_gravity", fluid.water_gravity)?;
    finite("fluid.separator_temperature_f", fluid.separator_temperature_f)?;
    non_negative("fluid.separator_pressure_psig", fluid.separator_pressure_psig)
}

fn validate_thermal(thermal: &ThermalDef) -> Result<(), ValidationError> {
    finite("thermal.wellhead_temperature_f", thermal.wellhead_temperature_f)?;
    finite("thermal.bottomhole_temperature_f", thermal.bottomhole_temperature_f)
}

fn validate_solver(solver: &SolverDef) -> Result<(), ValidationError> {
    if solver.max_iterations == Some(0) {
        return Err(ValidationError::InvalidValue {
            field: "solver.max_iterations".to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if let Some(tol) = solver.tolerance {
        positive("solver.tolerance", tol)?;
    }
    if let Some(eps) = solver.epsilon {
        positive("solver.epsilon", eps)?;
    }
    if let Some(dp) = solver.initial_dp_psi {
        positive("solver.initial_dp_psi", dp)?;
    }
    Ok(())
}

fn validate_rates(rates: &RatesDef) -> Result<(), ValidationError> {
    match rates {
        RatesDef::List { values_stb_d } => {
            if values_stb_d.is_empty() {
                return Err(ValidationError::Missing {
                    field: "rates.values_stb_d".to_string(),
                });
            }
            for (i, rate) in values_stb_d.iter().enumerate() {
                non_negative(&format!("rates.values_stb_d[{i}]"), *rate)?;
            }
            Ok(())
        }
        RatesDef::Range {
            start_stb_d,
            end_stb_d,
            num_points,
            ..
        } => {
            non_negative("rates.start_stb_d", *start_stb_d)?;
            non_negative("rates.end_stb_d", *end_stb_d)?;
            if *num_points < 2 {
                return Err(ValidationError::InvalidValue {
                    field: "rates.num_points".to_string(),
                    value: num_points.to_string(),
                    reason: "must be at least 2".to_string(),
                });
            }
            if start_stb_d == end_stb_d {
                return Err(ValidationError::InvalidValue {
                    field: "rates.end_stb_d".to_string(),
                    value: end_stb_d.to_string(),
                    reason: "must differ from start_stb_d".to_string(),
                });
            }
            Ok(())
        }
    }
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be non-negative and finite".to_string(),
        });
    }
    Ok(())
}
