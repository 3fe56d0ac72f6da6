//! Homogeneity check: is every channel a rate-1 to rate-1 edge?

use sdf_graph::Graph;

/// Check whether an SDF graph is a HSDF graph.
///
/// Homogeneous means every channel connects a rate-1 source port to a
/// rate-1 destination port. A graph with no channels is trivially
/// homogeneous. Pure predicate, O(channels).
pub fn is_hsdf(graph: &Graph) -> bool {
    for channel in graph.channels() {
        for ep in [channel.src(), channel.dst()].into_iter().flatten() {
            let rate = graph
                .endpoint(ep)
                .map(|(_, port)| port.rate())
                .unwrap_or(1);
            if rate != 1 {
                return false;
            }
        }
    }
    true
}
