//! Depth-marching integrator.
//!
//! Pressure and temperature advance from the wellhead one increment at a time. For
//! each increment the pressure drop is found by fixed-point iteration: guess the
//! drop, evaluate PVT and the gradient at the mid-step pressure and temperature,
//! and replace the guess with gradient × step length until the relative change
//! falls below the tolerance or the iteration budget is spent.

use crate::config::{FinalIncrement, TraverseConfig};
use crate::error::{SolverError, SolverResult};
use crate::traverse::{StepConvergence, Traverse, TraverseNode};
use crate::well::Well;
use tracing::{Level, debug, info, warn};
use wf_core::numeric::relative_change;
use wf_flow::{FrictionFactor, LocalGradient, gradient_and_holdup};
use wf_pvt::evaluate;

/// Starting state and length of one depth step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Pressure at the top of the step (psia)
    pub start_pressure: f64,
    /// Temperature at the top of the step (°F)
    pub start_temperature: f64,
    pub length_ft: f64,
    /// Depth at the bottom of the step; labels errors and logs
    pub end_depth_ft: f64,
    /// Initial pressure drop guess (psi)
    pub seed_dp: f64,
}

/// Accepted pressure drop for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Pressure drop over the step (psi)
    pub dp: f64,
    pub convergence: StepConvergence,
    /// Mid-step correlation output on the accepted iteration
    pub local: LocalGradient,
}

/// Solve one depth step by fixed-point iteration on the mid-step pressure.
///
/// Exhausting the iteration budget is not an error: the last iterate is returned
/// with `converged = false`.
pub fn solve_step(
    well: &Well,
    rate_stb_d: f64,
    config: &TraverseConfig,
    step: &Step,
) -> SolverResult<StepOutcome> {
    let t_mid = step.start_temperature + 0.5 * step.length_ft * well.temperature_gradient();
    let mut dp = step.seed_dp;
    let mut iterations = 0;

    loop {
        let p_mid = step.start_pressure + 0.5 * dp;
        let pvt = evaluate(p_mid, t_mid, &well.fluid);
        if !pvt.is_finite() {
            return Err(SolverError::NonFinite {
                depth_ft: step.end_depth_ft,
                what: "fluid properties",
            });
        }
        let local = gradient_and_holdup(rate_stb_d, &pvt, &well.geometry);
        let dp_new = local.gradient * step.length_ft;
        iterations += 1;

        if !dp_new.is_finite() {
            return Err(SolverError::NonFinite {
                depth_ft: step.end_depth_ft,
                what: "pressure gradient",
            });
        }

        let change = relative_change(dp_new, dp, config.epsilon);
        dp = dp_new;

        let converged = change < config.tolerance;
        if converged || iterations >= config.max_iterations {
            return Ok(StepOutcome {
                dp,
                convergence: StepConvergence {
                    iterations,
                    relative_change: change,
                    converged,
                },
                local,
            });
        }
    }
}

/// March from wellhead to total depth at `rate_stb_d` stock-tank barrels per day.
///
/// Returns one node per whole increment plus the wellhead. With
/// [`FinalIncrement::Partial`] a shorter last step reaches total depth exactly.
pub fn march_to_depth(
    well: &Well,
    rate_stb_d: f64,
    config: &TraverseConfig,
) -> SolverResult<Traverse> {
    well.validate()?;
    config.validate()?;
    if !(rate_stb_d.is_finite() && rate_stb_d >= 0.0) {
        return Err(SolverError::InvalidInput {
            what: format!("flow rate must be non-negative, got {rate_stb_d} stb/d"),
        });
    }

    let geometry = &well.geometry;
    let whole_steps = geometry.whole_steps();
    let remainder = geometry.remainder_ft();
    let partial = config.final_increment == FinalIncrement::Partial && remainder > 0.0;
    let t_grad = well.temperature_gradient();

    let wellhead = TraverseNode::wellhead(well.wellhead_pressure_psi(), well.thermal.wellhead_f());
    let mut traverse = Traverse::start(rate_stb_d, wellhead, whole_steps + 2);

    let mut p = well.wellhead_pressure_psi();
    let mut t = well.thermal.wellhead_f();
    let mut seed_dp = config.initial_dp_psi;
    let mut last_gradient = None;

    let depths = (1..=whole_steps)
        .map(|i| geometry.node_depth_ft(i))
        .chain(partial.then(|| geometry.total_length_ft()));
    let mut previous_depth = 0.0;

    for depth in depths {
        let step = depth - previous_depth;
        previous_depth = depth;
        if let Some(gradient) = last_gradient {
            seed_dp = gradient * step;
        }

        let outcome = solve_step(
            well,
            rate_stb_d,
            config,
            &Step {
                start_pressure: p,
                start_temperature: t,
                length_ft: step,
                end_depth_ft: depth,
                seed_dp,
            },
        )?;

        if !outcome.convergence.converged {
            warn!(
                depth_ft = depth,
                rate_stb_d,
                iterations = outcome.convergence.iterations,
                relative_change = outcome.convergence.relative_change,
                "pressure drop did not converge; accepting last iterate"
            );
        }
        let friction_level = default_friction_level(rate_stb_d, &outcome.local.friction);
        if friction_level == Some(Level::DEBUG) {
            debug!(
                depth_ft = depth,
                source = ?outcome.local.friction.source,
                "no flow; friction factor defaulted"
            );
        } else if friction_level.is_some() {
            warn!(
                depth_ft = depth,
                rate_stb_d,
                source = ?outcome.local.friction.source,
                "friction factor fell back to default"
            );
        }

        p += outcome.dp;
        t = well.thermal.wellhead_f() + depth * t_grad;
        last_gradient = Some(outcome.local.gradient);

        debug!(
            depth_ft = depth,
            pressure_psia = p,
            temperature_f = t,
            regime = ?outcome.local.regime,
            iterations = outcome.convergence.iterations,
            "committed node"
        );

        traverse.commit(TraverseNode {
            depth_ft: depth,
            pressure_psia: p,
            temperature_f: t,
            step_ft: step,
            regime: Some(outcome.local.regime),
            holdup: Some(outcome.local.holdup),
            gradient_psi_ft: Some(outcome.local.gradient),
            default_friction: outcome.local.friction.is_default(),
            convergence: Some(outcome.convergence),
        });
    }

    if !partial {
        traverse.set_shortfall(remainder);
    }

    info!(
        rate_stb_d,
        nodes = traverse.len(),
        bottomhole_psia = traverse.bottomhole_pressure(),
        converged = traverse.is_converged(),
        "traverse complete"
    );

    Ok(traverse)
}

/// Bottomhole pressure only (psia).
pub fn final_pressure(well: &Well, rate_stb_d: f64, config: &TraverseConfig) -> SolverResult<f64> {
    march_to_depth(well, rate_stb_d, config).map(|t| t.bottomhole_pressure())
}

/// Level for reporting a defaulted friction factor, `None` when Chen applied.
///
/// With no flow the default is expected at every node and only logged at debug.
fn default_friction_level(rate_stb_d: f64, friction: &FrictionFactor) -> Option<Level> {
    if !friction.is_default() {
        None
    } else if rate_stb_d == 0.0 {
        Some(Level::DEBUG)
    } else {
        Some(Level::WARN)
    }
}
