//! Case compilation into solver inputs.

use crate::ProjectResult;
use crate::schema::{CaseFile, FinalIncrementDef, RatesDef, SpacingDef};
use crate::validate::validate_case;
use wf_core::units::{deg, degf, ft, inch, psi};
use wf_flow::WellGeometry;
use wf_pvt::FluidDescription;
use wf_solver::{FinalIncrement, RateSpacing, RateSweep, ThermalProfile, TraverseConfig, Well};

/// A validated case ready for the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledCase {
    pub name: String,
    pub well: Well,
    pub config: TraverseConfig,
    /// Flow rates in evaluation order (stb/d)
    pub rates: Vec<f64>,
}

pub fn compile_case(case: &CaseFile) -> ProjectResult<CompiledCase> {
    validate_case(case)?;

    let g = &case.geometry;
    let geometry = WellGeometry::new(
        inch(g.diameter_in),
        ft(g.total_length_ft),
        ft(g.increment_ft),
        deg(g.inclination_deg),
        g.roughness,
    )
    .map_err(wf_solver::SolverError::from)?;

    let f = &case.fluid;
    let fluid = FluidDescription::new(
        f.gas_liquid_ratio_scf_stb,
        f.water_oil_ratio,
        f.oil_api,
        f.gas_gravity,
        f.water_gravity,
        degf(f.separator_temperature_f),
        psi(f.separator_pressure_psig),
    )
    .map_err(wf_solver::SolverError::from)?;

    let thermal = ThermalProfile::new(
        degf(case.thermal.wellhead_temperature_f),
        degf(case.thermal.bottomhole_temperature_f),
    )?;

    let well = Well::new(geometry, fluid, thermal, psi(case.wellhead_pressure_psia))?;

    Ok(CompiledCase {
        name: case.name.clone(),
        well,
        config: compile_config(case),
        rates: compile_rates(&case.rates)?,
    })
}

fn compile_config(case: &CaseFile) -> TraverseConfig {
    let defaults = TraverseConfig::default();
    let s = &case.solver;
    TraverseConfig {
        max_iterations: s.max_iterations.unwrap_or(defaults.max_iterations),
        tolerance: s.tolerance.unwrap_or(defaults.tolerance),
        epsilon: s.epsilon.unwrap_or(defaults.epsilon),
        initial_dp_psi: s.initial_dp_psi.unwrap_or(defaults.initial_dp_psi),
        final_increment: match s.final_increment {
            Some(FinalIncrementDef::Partial) => FinalIncrement::Partial,
            Some(FinalIncrementDef::Truncate) => FinalIncrement::Truncate,
            None => defaults.final_increment,
        },
        parallel: s.parallel.unwrap_or(defaults.parallel),
    }
}

fn compile_rates(rates: &RatesDef) -> ProjectResult<Vec<f64>> {
    match rates {
        RatesDef::List { values_stb_d } => Ok(values_stb_d.clone()),
        RatesDef::Range {
            start_stb_d,
            end_stb_d,
            num_points,
            spacing,
        } => {
            let spacing = match spacing {
                SpacingDef::Linear => RateSpacing::Linear,
                SpacingDef::Logarithmic => RateSpacing::Logarithmic,
            };
            let sweep = RateSweep::new(*start_stb_d, *end_stb_d, *num_points, spacing)?;
            Ok(sweep.generate_points())
        }
    }
}
