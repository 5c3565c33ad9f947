//! Flow-rate sweep driver.
//!
//! Two named operations: [`single_traverse`] returns the full depth profile for one
//! rate, [`vlp_curve`] returns one bottomhole pressure per rate. Rates share no
//! mutable state, so the curve fans out across the rayon pool when enabled and
//! collects results in input order.

use crate::config::TraverseConfig;
use crate::error::{SolverError, SolverResult};
use crate::march::march_to_depth;
use crate::traverse::Traverse;
use crate::well::Well;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// One point on a lift curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VlpPoint {
    pub rate_stb_d: f64,
    pub bhp_psia: f64,
    /// False when any step of the underlying traverse exhausted its budget
    pub converged: bool,
}

impl VlpPoint {
    fn from_traverse(traverse: &Traverse) -> Self {
        Self {
            rate_stb_d: traverse.rate_stb_d(),
            bhp_psia: traverse.bottomhole_pressure(),
            converged: traverse.is_converged(),
        }
    }
}

/// Bottomhole pressure against flow rate, in the order rates were given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VlpCurve {
    points: Vec<VlpPoint>,
}

impl VlpCurve {
    pub fn points(&self) -> &[VlpPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate_stb_d).collect()
    }

    pub fn bottomhole_pressures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.bhp_psia).collect()
    }

    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.rate_stb_d, p.bhp_psia)).collect()
    }

    pub fn is_converged(&self) -> bool {
        self.points.iter().all(|p| p.converged)
    }
}

/// Full depth/pressure traverse for one rate.
pub fn single_traverse(
    well: &Well,
    rate_stb_d: f64,
    config: &TraverseConfig,
) -> SolverResult<Traverse> {
    march_to_depth(well, rate_stb_d, config)
}

/// Bottomhole pressure for each rate, in input order with no sorting or deduplication.
pub fn vlp_curve(well: &Well, rates: &[f64], config: &TraverseConfig) -> SolverResult<VlpCurve> {
    if rates.is_empty() {
        return Err(SolverError::InvalidInput {
            what: "flow-rate sequence is empty".to_string(),
        });
    }

    let run = |&rate: &f64| march_to_depth(well, rate, config).map(|t| VlpPoint::from_traverse(&t));
    let points = if config.parallel {
        rates.par_iter().map(run).collect::<SolverResult<Vec<_>>>()?
    } else {
        rates.iter().map(run).collect::<SolverResult<Vec<_>>>()?
    };

    info!(
        rates = points.len(),
        parallel = config.parallel,
        "lift curve complete"
    );

    Ok(VlpCurve { points })
}
