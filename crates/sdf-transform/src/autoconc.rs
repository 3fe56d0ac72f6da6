//! Explicit modeling of auto-concurrency bounds.

use sdf_core::SdfResult;
use sdf_graph::Graph;
use tracing::debug;

/// Create a new graph in which the maximum amount of auto-concurrency on
/// every actor is made explicit through a self-channel.
///
/// Each actor gets a rate-1/rate-1 self-loop carrying `max_degree` initial
/// tokens: an actor firing claims a token and returns it on completion, so
/// at most `max_degree` firings overlap. Downstream analyses that only
/// reason about channel token counts then respect the bound for free.
///
/// `max_degree == 0` is legal and models a fully sequential actor: the
/// empty self-loop can never refill. The input graph is not modified.
pub fn model_auto_concurrency(graph: &Graph, max_degree: u32) -> SdfResult<Graph> {
    let mut g = graph.clone();

    let actors: Vec<_> = g.actors().iter().map(|a| a.id()).collect();
    for actor in actors {
        g.create_channel(actor, 1, actor, 1, max_degree)?;
    }

    debug!(
        graph = g.name(),
        max_degree,
        added = g.nr_channels() - graph.nr_channels(),
        "modeled auto-concurrency"
    );

    Ok(g)
}
