//! Pressure traverse results.

use serde::Serialize;
use wf_flow::FlowRegime;

/// Inner-loop outcome for one depth step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepConvergence {
    /// Gradient evaluations performed
    pub iterations: usize,
    /// Relative change of the pressure drop on the last iteration
    pub relative_change: f64,
    /// False when the iteration budget ran out first
    pub converged: bool,
}

/// One committed depth node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraverseNode {
    pub depth_ft: f64,
    pub pressure_psia: f64,
    pub temperature_f: f64,
    /// Length of the step that produced this node (zero at the wellhead)
    pub step_ft: f64,
    /// Mid-step flow regime; `None` at the wellhead
    pub regime: Option<FlowRegime>,
    /// Mid-step liquid holdup
    pub holdup: Option<f64>,
    /// Mid-step pressure gradient (psi/ft)
    pub gradient_psi_ft: Option<f64>,
    /// True when the friction default was substituted on the accepted iteration
    pub default_friction: bool,
    pub convergence: Option<StepConvergence>,
}

impl TraverseNode {
    pub(crate) fn wellhead(pressure_psia: f64, temperature_f: f64) -> Self {
        Self {
            depth_ft: 0.0,
            pressure_psia,
            temperature_f,
            step_ft: 0.0,
            regime: None,
            holdup: None,
            gradient_psi_ft: None,
            default_friction: false,
            convergence: None,
        }
    }

    pub fn is_converged(&self) -> bool {
        self.convergence.is_none_or(|c| c.converged)
    }
}

/// Pressure and temperature from wellhead to total depth for one flow rate.
///
/// Nodes are append-only in increasing depth; node 0 is always the wellhead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Traverse {
    rate_stb_d: f64,
    nodes: Vec<TraverseNode>,
    /// Measured length below the last node that was not marched (ft)
    shortfall_ft: f64,
}

impl Traverse {
    pub(crate) fn start(rate_stb_d: f64, wellhead: TraverseNode, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(wellhead);
        Self {
            rate_stb_d,
            nodes,
            shortfall_ft: 0.0,
        }
    }

    pub(crate) fn commit(&mut self, node: TraverseNode) {
        debug_assert!(node.depth_ft >= self.last().depth_ft);
        self.nodes.push(node);
    }

    pub(crate) fn set_shortfall(&mut self, shortfall_ft: f64) {
        self.shortfall_ft = shortfall_ft;
    }

    pub fn rate_stb_d(&self) -> f64 {
        self.rate_stb_d
    }

    pub fn nodes(&self) -> &[TraverseNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a traverse holds at least the wellhead node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn shortfall_ft(&self) -> f64 {
        self.shortfall_ft
    }

    fn last(&self) -> &TraverseNode {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Pressure at the deepest node (psia).
    pub fn bottomhole_pressure(&self) -> f64 {
        self.last().pressure_psia
    }

    pub fn depths(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.depth_ft).collect()
    }

    pub fn pressures(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.pressure_psia).collect()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.nodes.iter().map(|n| n.temperature_f).collect()
    }

    pub fn depth_pressure_pairs(&self) -> Vec<(f64, f64)> {
        self.nodes
            .iter()
            .map(|n| (n.depth_ft, n.pressure_psia))
            .collect()
    }

    /// True when every step met the tolerance within its iteration budget.
    pub fn is_converged(&self) -> bool {
        self.nodes.iter().all(TraverseNode::is_converged)
    }

    /// Nodes whose step exhausted the iteration budget.
    pub fn unconverged_nodes(&self) -> impl Iterator<Item = &TraverseNode> {
        self.nodes.iter().filter(|n| !n.is_converged())
    }

    /// Number of steps that used the default friction factor.
    pub fn default_friction_steps(&self) -> usize {
        self.nodes.iter().filter(|n| n.default_friction).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(depth: f64, pressure: f64, converged: bool) -> TraverseNode {
        TraverseNode {
            depth_ft: depth,
            pressure_psia: pressure,
            temperature_f: 120.0,
            step_ft: 500.0,
            regime: Some(FlowRegime::BubbleSlug),
            holdup: Some(1.0),
            gradient_psi_ft: Some(0.35),
            default_friction: false,
            convergence: Some(StepConvergence {
                iterations: 4,
                relative_change: if converged { 1e-5 } else { 0.2 },
                converged,
            }),
        }
    }

    #[test]
    fn accessors_follow_node_order() {
        let mut t = Traverse::start(500.0, TraverseNode::wellhead(200.0, 120.0), 3);
        t.commit(step(500.0, 375.0, true));
        t.commit(step(1000.0, 550.0, true));

        assert_eq!(t.len(), 3);
        assert!(!t.is_empty());
        assert_eq!(t.depths(), vec![0.0, 500.0, 1000.0]);
        assert_eq!(t.pressures(), vec![200.0, 375.0, 550.0]);
        assert_eq!(t.depth_pressure_pairs()[1], (500.0, 375.0));
        assert_eq!(t.bottomhole_pressure(), 550.0);
        assert!(t.is_converged());
    }

    #[test]
    fn unconverged_steps_are_reported() {
        let mut t = Traverse::start(500.0, TraverseNode::wellhead(200.0, 120.0), 3);
        t.commit(step(500.0, 375.0, false));
        t.commit(step(1000.0, 550.0, true));

        assert!(!t.is_converged());
        let bad: Vec<f64> = t.unconverged_nodes().map(|n| n.depth_ft).collect();
        assert_eq!(bad, vec![500.0]);
    }

    #[test]
    fn serializes_to_json() {
        let t = Traverse::start(250.0, TraverseNode::wellhead(200.0, 120.0), 1);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"rate_stb_d\":250.0"));
        assert!(json.contains("\"regime\":null"));
    }
}
