//! Output an SDF graph in DOT format.

use std::io::{self, Write};

use sdf_graph::Graph;

/// Write the graph as a DOT digraph.
///
/// One node per actor labeled with its name; one edge per connected
/// channel, rate-annotated on tail and head, with the initial token count
/// folded into the edge label when nonzero. Channels with an unset
/// endpoint are not renderable and are skipped.
pub fn write_dot<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    writeln!(out, "digraph {} {{", graph.name())?;
    writeln!(out, "    size=\"7,10\";")?;

    for actor in graph.actors() {
        writeln!(out, "    {} [ label=\"{}\" ];", actor.name(), actor.name())?;
    }
    writeln!(out)?;

    for channel in graph.channels() {
        let (Some(src), Some(dst)) = (channel.src(), channel.dst()) else {
            continue;
        };
        let (Ok((src_actor, src_port)), Ok((dst_actor, dst_port))) =
            (graph.endpoint(src), graph.endpoint(dst))
        else {
            continue;
        };

        let label = if channel.initial_tokens() != 0 {
            format!("{}({})", channel.name(), channel.initial_tokens())
        } else {
            channel.name().to_string()
        };
        writeln!(
            out,
            "    {} -> {} [ label=\"{}\", taillabel=\"{}\", headlabel=\"{}\" ];",
            src_actor.name(),
            dst_actor.name(),
            label,
            src_port.rate(),
            dst_port.rate()
        )?;
    }

    writeln!(out, "}}")?;
    Ok(())
}
