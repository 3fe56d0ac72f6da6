//! Construction of the model from an attribute tree.
//!
//! The build is two-phase: all `actor` elements first (each constructing
//! its `port` children), then all `channel` elements, whose endpoints are
//! resolved by name against the actors already built. Channels must
//! therefore follow actors in the document; this is a contract of the
//! format, not a convention.

use sdf_core::{ActorId, ChannelId, PortId, SdfError, SdfResult, Tree};

use crate::actor::Actor;
use crate::channel::{Channel, Endpoint};
use crate::graph::Graph;
use crate::port::{Port, PortKind};

fn require_attr<'a>(node: &'a Tree, attr: &str, context: &str) -> SdfResult<&'a str> {
    node.attribute(attr).ok_or_else(|| SdfError::MalformedModel {
        what: format!("{context}: missing '{attr}' attribute"),
    })
}

impl Port {
    /// Build a port from a `port` element.
    ///
    /// `name`, `type` and `rate` are required; the rate must parse as a
    /// positive integer.
    pub fn from_tree(id: PortId, actor: ActorId, node: &Tree) -> SdfResult<Port> {
        let name = require_attr(node, "name", "port")?;
        let context = format!("port '{name}'");
        let kind = PortKind::parse(require_attr(node, "type", &context)?, &context)?;
        let rate_attr = require_attr(node, "rate", &context)?;
        let rate: u32 = rate_attr
            .parse()
            .map_err(|_| SdfError::MalformedModel {
                what: format!("{context}: rate '{rate_attr}' is not an integer"),
            })?;
        if rate == 0 {
            return Err(SdfError::MalformedModel {
                what: format!("{context}: rate must be positive"),
            });
        }
        Ok(Port::new(id, name, kind, rate, actor))
    }
}

impl Actor {
    /// Build an actor and its ports from an `actor` element.
    ///
    /// `name` and `type` are required. Ports get position-based ids in
    /// document order.
    pub fn from_tree(id: ActorId, node: &Tree) -> SdfResult<Actor> {
        let name = require_attr(node, "name", "actor")?;
        let kind = require_attr(node, "type", &format!("actor '{name}'"))?;
        let mut actor = Actor::new(id, name, kind);

        for port_node in node.children_named("port") {
            let port_id = PortId::from_index(actor.nr_ports() as u32);
            let port = Port::from_tree(port_id, id, port_node)?;
            actor.add_port(port);
        }

        Ok(actor)
    }
}

impl Graph {
    /// Build a graph from a `graph` element.
    ///
    /// A graph that fails mid-construction is discarded; there is no
    /// partial-construction recovery.
    pub fn from_tree(node: &Tree) -> SdfResult<Graph> {
        let name = require_attr(node, "name", "graph")?;
        let kind = require_attr(node, "type", &format!("graph '{name}'"))?;
        let mut graph = Graph::new(name, kind);

        for actor_node in node.children_named("actor") {
            let id = ActorId::from_index(graph.nr_actors() as u32);
            let actor = Actor::from_tree(id, actor_node)?;
            graph.add_actor(actor);
        }

        for channel_node in node.children_named("channel") {
            let id = ChannelId::from_index(graph.nr_channels() as u32);
            construct_channel(&mut graph, id, channel_node)?;
        }

        Ok(graph)
    }
}

/// Build a channel from a `channel` element, resolving its endpoints
/// against the graph built so far.
///
/// The four endpoint attributes are required. `name` is optional (default
/// `_ch<n>`); `initialTokens` defaults to 0 when absent or malformed.
fn construct_channel(graph: &mut Graph, id: ChannelId, node: &Tree) -> SdfResult<()> {
    let name = match node.attribute("name") {
        Some(n) => n.to_string(),
        None => format!("_ch{}", id.index() + 1),
    };
    let context = format!("channel '{name}'");

    let src = resolve_endpoint(graph, node, "srcActor", "srcPort", &context)?;
    let dst = resolve_endpoint(graph, node, "dstActor", "dstPort", &context)?;

    let initial_tokens = node
        .attribute("initialTokens")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    let mut channel = Channel::new(id, name);
    channel.set_initial_tokens(initial_tokens);
    graph.add_channel(channel);

    graph.connect_src(id, src)?;
    graph.connect_dst(id, dst)?;

    Ok(())
}

fn resolve_endpoint(
    graph: &Graph,
    node: &Tree,
    actor_attr: &str,
    port_attr: &str,
    context: &str,
) -> SdfResult<Endpoint> {
    let actor_name = require_attr(node, actor_attr, context)?;
    let port_name = require_attr(node, port_attr, context)?;

    let actor = graph
        .actor_by_name(actor_name)
        .ok_or_else(|| SdfError::UnresolvedReference {
            what: format!("{context}: actor '{actor_name}'"),
        })?;
    let port = actor
        .port_by_name(port_name)
        .ok_or_else(|| SdfError::UnresolvedReference {
            what: format!("{context}: port '{port_name}' on actor '{actor_name}'"),
        })?;

    Ok(Endpoint {
        actor: actor.id(),
        port: port.id(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port_node(name: &str, kind: &str, rate: &str) -> Tree {
        let mut p = Tree::new("port");
        p.set_attribute("name", name);
        p.set_attribute("type", kind);
        p.set_attribute("rate", rate);
        p
    }

    fn actor_node(name: &str, kind: &str, ports: Vec<Tree>) -> Tree {
        let mut a = Tree::new("actor");
        a.set_attribute("name", name);
        a.set_attribute("type", kind);
        a.children = ports;
        a
    }

    fn channel_node(src: (&str, &str), dst: (&str, &str)) -> Tree {
        let mut c = Tree::new("channel");
        c.set_attribute("srcActor", src.0);
        c.set_attribute("srcPort", src.1);
        c.set_attribute("dstActor", dst.0);
        c.set_attribute("dstPort", dst.1);
        c
    }

    fn sample_tree() -> Tree {
        let mut root = Tree::new("graph");
        root.set_attribute("name", "g");
        root.set_attribute("type", "sdf");
        root.add_child(actor_node("a", "A", vec![port_node("p1", "out", "3")]));
        root.add_child(actor_node("b", "B", vec![port_node("p1", "in", "2")]));
        let mut ch = channel_node(("a", "p1"), ("b", "p1"));
        ch.set_attribute("name", "d");
        ch.set_attribute("initialTokens", "4");
        root.add_child(ch);
        root
    }

    #[test]
    fn constructs_actors_then_channels() {
        let g = Graph::from_tree(&sample_tree()).unwrap();
        assert_eq!(g.name(), "g");
        assert_eq!(g.kind(), "sdf");
        assert_eq!(g.nr_actors(), 2);
        assert_eq!(g.nr_channels(), 1);

        let ch = g.channel_by_name("d").unwrap();
        assert_eq!(ch.initial_tokens(), 4);
        let (src_actor, src_port) = g.endpoint(ch.src().unwrap()).unwrap();
        assert_eq!((src_actor.name(), src_port.rate()), ("a", 3));
        let (dst_actor, dst_port) = g.endpoint(ch.dst().unwrap()).unwrap();
        assert_eq!((dst_actor.name(), dst_port.rate()), ("b", 2));
    }

    #[test]
    fn missing_graph_attributes() {
        let mut root = Tree::new("graph");
        assert!(matches!(
            Graph::from_tree(&root),
            Err(SdfError::MalformedModel { .. })
        ));
        root.set_attribute("name", "g");
        assert!(matches!(
            Graph::from_tree(&root),
            Err(SdfError::MalformedModel { .. })
        ));
    }

    #[test]
    fn missing_port_rate_is_malformed() {
        let mut root = Tree::new("graph");
        root.set_attribute("name", "g");
        root.set_attribute("type", "sdf");
        let mut p = Tree::new("port");
        p.set_attribute("name", "p1");
        p.set_attribute("type", "in");
        root.add_child(actor_node("a", "A", vec![p]));

        let err = Graph::from_tree(&root).unwrap_err();
        assert!(matches!(err, SdfError::MalformedModel { .. }));
        assert!(format!("{err}").contains("rate"));
    }

    #[test]
    fn zero_rate_is_malformed() {
        let mut root = Tree::new("graph");
        root.set_attribute("name", "g");
        root.set_attribute("type", "sdf");
        root.add_child(actor_node("a", "A", vec![port_node("p1", "out", "0")]));
        assert!(matches!(
            Graph::from_tree(&root),
            Err(SdfError::MalformedModel { .. })
        ));
    }

    #[test]
    fn unknown_channel_endpoint_is_unresolved() {
        let mut root = Tree::new("graph");
        root.set_attribute("name", "g");
        root.set_attribute("type", "sdf");
        root.add_child(actor_node("a", "A", vec![port_node("p1", "out", "1")]));
        root.add_child(channel_node(("a", "p1"), ("ghost", "p1")));
        assert!(matches!(
            Graph::from_tree(&root),
            Err(SdfError::UnresolvedReference { .. })
        ));

        // existing actor, unknown port
        let mut root2 = Tree::new("graph");
        root2.set_attribute("name", "g");
        root2.set_attribute("type", "sdf");
        root2.add_child(actor_node("a", "A", vec![port_node("p1", "out", "1")]));
        root2.add_child(actor_node("b", "B", vec![port_node("p1", "in", "1")]));
        root2.add_child(channel_node(("a", "ghost"), ("b", "p1")));
        assert!(matches!(
            Graph::from_tree(&root2),
            Err(SdfError::UnresolvedReference { .. })
        ));
    }

    #[test]
    fn initial_tokens_defaults_to_zero_when_absent_or_malformed() {
        for tokens in [None, Some("not-a-number")] {
            let mut root = Tree::new("graph");
            root.set_attribute("name", "g");
            root.set_attribute("type", "sdf");
            root.add_child(actor_node("a", "A", vec![port_node("p1", "out", "1")]));
            root.add_child(actor_node("b", "B", vec![port_node("p1", "in", "1")]));
            let mut ch = channel_node(("a", "p1"), ("b", "p1"));
            if let Some(v) = tokens {
                ch.set_attribute("initialTokens", v);
            }
            root.add_child(ch);

            let g = Graph::from_tree(&root).unwrap();
            assert_eq!(g.channels()[0].initial_tokens(), 0);
        }
    }

    #[test]
    fn unnamed_channel_gets_synthesized_name() {
        let mut root = Tree::new("graph");
        root.set_attribute("name", "g");
        root.set_attribute("type", "sdf");
        root.add_child(actor_node("a", "A", vec![port_node("p1", "out", "1")]));
        root.add_child(actor_node("b", "B", vec![port_node("p1", "in", "1")]));
        root.add_child(channel_node(("a", "p1"), ("b", "p1")));

        let g = Graph::from_tree(&root).unwrap();
        assert_eq!(g.channels()[0].name(), "_ch1");
    }

    #[test]
    fn channel_on_wrong_port_kind_is_rejected() {
        // both declared ports are inputs; using one as a source must fail
        let mut root = Tree::new("graph");
        root.set_attribute("name", "g");
        root.set_attribute("type", "sdf");
        root.add_child(actor_node("a", "A", vec![port_node("p1", "in", "1")]));
        root.add_child(actor_node("b", "B", vec![port_node("p1", "in", "1")]));
        root.add_child(channel_node(("a", "p1"), ("b", "p1")));
        assert!(matches!(
            Graph::from_tree(&root),
            Err(SdfError::PortKindMismatch { .. })
        ));
    }
}
