//! Integration tests for sdf-graph.

use sdf_core::{ActorId, SdfError, Tree};
use sdf_graph::{Graph, PortKind};

fn port(name: &str, kind: &str, rate: u32) -> Tree {
    let mut p = Tree::new("port");
    p.set_attribute("name", name);
    p.set_attribute("type", kind);
    p.set_attribute("rate", rate.to_string());
    p
}

fn actor(name: &str, kind: &str, ports: Vec<Tree>) -> Tree {
    let mut a = Tree::new("actor");
    a.set_attribute("name", name);
    a.set_attribute("type", kind);
    a.children = ports;
    a
}

fn channel(name: &str, src: (&str, &str), dst: (&str, &str), tokens: u32) -> Tree {
    let mut c = Tree::new("channel");
    c.set_attribute("name", name);
    c.set_attribute("srcActor", src.0);
    c.set_attribute("srcPort", src.1);
    c.set_attribute("dstActor", dst.0);
    c.set_attribute("dstPort", dst.1);
    if tokens != 0 {
        c.set_attribute("initialTokens", tokens.to_string());
    }
    c
}

/// Three-actor producer/filter/consumer pipeline with a feedback channel.
fn pipeline_tree() -> Tree {
    let mut root = Tree::new("graph");
    root.set_attribute("name", "pipeline");
    root.set_attribute("type", "sdf");
    root.add_child(actor(
        "src",
        "Producer",
        vec![port("out", "out", 2), port("ack", "in", 1)],
    ));
    root.add_child(actor(
        "flt",
        "Filter",
        vec![port("in", "in", 3), port("out", "out", 1)],
    ));
    root.add_child(actor("snk", "Consumer", vec![port("in", "in", 1)]));
    root.add_child(channel("d1", ("src", "out"), ("flt", "in"), 0));
    root.add_child(channel("d2", ("flt", "out"), ("snk", "in"), 0));
    root.add_child(channel("fb", ("flt", "out"), ("src", "ack"), 3));
    root
}

#[test]
fn pipeline_construction() {
    // "fb" reuses flt's only out port, which d2 already claimed
    let err = Graph::from_tree(&pipeline_tree()).unwrap_err();
    assert!(matches!(err, SdfError::PortInUse { .. }));

    // with a dedicated feedback port the build goes through
    let mut root = pipeline_tree();
    for child in &mut root.children {
        if child.attribute("name") == Some("flt") {
            child.add_child(port("fb", "out", 1));
        }
        if child.name == "channel" && child.attribute("name") == Some("fb") {
            child.set_attribute("srcPort", "fb");
        }
    }
    let g = Graph::from_tree(&root).unwrap();

    assert_eq!(g.nr_actors(), 3);
    assert_eq!(g.nr_channels(), 3);
    assert_eq!(g.actor_by_name("flt").unwrap().nr_ports(), 3);
    assert!(g.actors().iter().all(|a| a.is_connected()));

    let fb = g.channel_by_name("fb").unwrap();
    assert_eq!(fb.initial_tokens(), 3);
    let (src_actor, src_port) = g.endpoint(fb.src().unwrap()).unwrap();
    assert_eq!(src_actor.name(), "flt");
    assert_eq!(src_port.kind(), PortKind::Out);
}

#[test]
fn actor_ids_follow_document_order() {
    let mut root = pipeline_tree();
    // drop the channels; only actor ids matter here
    while root.remove_child("channel").is_some() {}
    let g = Graph::from_tree(&root).unwrap();

    for (i, a) in g.actors().iter().enumerate() {
        assert_eq!(a.id().index() as usize, i);
    }
    assert_eq!(g.actor(ActorId::from_index(1)).unwrap().name(), "flt");
}

#[test]
fn ids_are_not_renumbered_after_removal() {
    let mut g = Graph::new("g", "sdf");
    g.create_actor("a", "A");
    let b = g.create_actor("b", "B");
    let c = g.create_actor("c", "C");

    g.remove_actor("a").unwrap();
    assert_eq!(g.nr_actors(), 2);
    // surviving actors keep their original ids
    assert_eq!(g.actor(b).unwrap().name(), "b");
    assert_eq!(g.actor(c).unwrap().name(), "c");
    assert_eq!(g.actors()[0].id().index(), 1);
}

mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn chain_graphs_are_fully_connected(n in 2usize..16, tokens in 0u32..10) {
            let mut g = Graph::new("chain", "sdf");
            let ids: Vec<_> = (0..n)
                .map(|i| g.create_actor(format!("a{i}"), "A"))
                .collect();
            for w in ids.windows(2) {
                g.create_channel(w[0], 1, w[1], 1, tokens).unwrap();
            }

            prop_assert_eq!(g.nr_channels(), n - 1);
            // interior actors have both ports attached
            for id in &ids[1..n - 1] {
                prop_assert!(g.actor(*id).unwrap().is_connected());
            }
            // ids follow creation order
            for (i, id) in ids.iter().enumerate() {
                prop_assert_eq!(id.index() as usize, i);
            }
        }
    }
}

#[test]
fn clone_preserves_structure_and_is_independent() {
    let mut root = pipeline_tree();
    while root.remove_child("channel").is_some() {}
    let mut g = Graph::from_tree(&root).unwrap();
    let a = g.actor_by_name("src").unwrap().id();
    let b = g.actor_by_name("snk").unwrap().id();
    g.create_channel(a, 1, b, 1, 2).unwrap();

    let clone = g.clone();
    assert_eq!(clone.nr_actors(), g.nr_actors());
    assert_eq!(clone.nr_channels(), g.nr_channels());
    for (orig, copied) in g.actors().iter().zip(clone.actors()) {
        let orig_rates: Vec<u32> = orig.ports().iter().map(|p| p.rate()).collect();
        let copied_rates: Vec<u32> = copied.ports().iter().map(|p| p.rate()).collect();
        assert_eq!(orig_rates, copied_rates);
    }

    // endpoint indices in the clone resolve within the clone
    let ch = &clone.channels()[0];
    let (src_actor, _) = clone.endpoint(ch.src().unwrap()).unwrap();
    assert_eq!(src_actor.name(), "src");
}
