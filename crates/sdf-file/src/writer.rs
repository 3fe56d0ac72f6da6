//! Rendering a graph back to its tree representation.

use sdf_core::Tree;
use sdf_graph::Graph;

/// Render a graph as an attribute tree that `Graph::from_tree` accepts.
///
/// Actors are emitted before channels, the construction order the format
/// requires. `initialTokens` is written only when nonzero, and channels
/// with an unset endpoint are skipped: the format has no way to express a
/// half-connected channel.
pub fn graph_to_tree(graph: &Graph) -> Tree {
    let mut root = Tree::new("graph");
    root.set_attribute("name", graph.name());
    root.set_attribute("type", graph.kind());

    for actor in graph.actors() {
        let mut actor_node = Tree::new("actor");
        actor_node.set_attribute("name", actor.name());
        actor_node.set_attribute("type", actor.kind());
        for port in actor.ports() {
            let mut port_node = Tree::new("port");
            port_node.set_attribute("name", port.name());
            port_node.set_attribute("type", port.kind().as_str());
            port_node.set_attribute("rate", port.rate().to_string());
            actor_node.add_child(port_node);
        }
        root.add_child(actor_node);
    }

    for channel in graph.channels() {
        let (Some(src), Some(dst)) = (channel.src(), channel.dst()) else {
            continue;
        };
        let (Ok((src_actor, src_port)), Ok((dst_actor, dst_port))) =
            (graph.endpoint(src), graph.endpoint(dst))
        else {
            continue;
        };

        let mut channel_node = Tree::new("channel");
        channel_node.set_attribute("name", channel.name());
        channel_node.set_attribute("srcActor", src_actor.name());
        channel_node.set_attribute("srcPort", src_port.name());
        channel_node.set_attribute("dstActor", dst_actor.name());
        channel_node.set_attribute("dstPort", dst_port.name());
        if channel.initial_tokens() != 0 {
            channel_node.set_attribute("initialTokens", channel.initial_tokens().to_string());
        }
        root.add_child(channel_node);
    }

    root
}
