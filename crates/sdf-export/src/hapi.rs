//! Output an SDF graph as a HAPI process-network C++ skeleton.
//!
//! Per distinct actor type a `Process` subclass (header + source with a
//! rate-correct read/write loop), one `ProcessNetwork` subclass wiring the
//! actors with `Fifo` channels, and a `main.cc`. Untimed graphs carry no
//! token type, so the skeletons use `int` tokens throughout.

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::Path;

use sdf_graph::{Actor, Graph, PortKind};

/// Token type used in the generated skeletons.
const TOKEN_TYPE: &str = "int";

fn comment<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "/**")?;
    writeln!(out, " * This file is automatically generated.")?;
    writeln!(out, " */")?;
    Ok(())
}

fn port_class(kind: PortKind) -> &'static str {
    match kind {
        PortKind::In => "In",
        PortKind::Out => "Out",
    }
}

/// Write the header file declaring the actor's `Process` subclass.
pub fn write_actor_header<W: Write>(actor: &Actor, out: &mut W) -> io::Result<()> {
    comment(out)?;
    writeln!(out, "#ifndef {}_H", actor.kind().to_uppercase())?;
    writeln!(out, "#define {}_H", actor.kind().to_uppercase())?;
    writeln!(out)?;
    writeln!(out, "#include \"process.h\"")?;
    writeln!(out, "#include \"port.h\"")?;
    writeln!(out)?;

    writeln!(out, "class {} : public Process", actor.kind())?;
    writeln!(out, "{{")?;
    writeln!(out, "public:")?;
    writeln!(out, "\t// Constructor")?;
    writeln!(out, "\t{}(", actor.kind())?;
    write!(out, "\t\tconst class Id &n")?;
    for port in actor.ports() {
        write!(
            out,
            ",\n\t\t{} < {} > &{}_F",
            port_class(port.kind()),
            TOKEN_TYPE,
            port.name()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "\t);")?;
    writeln!(out)?;
    writeln!(out, "\t// type member function")?;
    writeln!(out, "\tconst char *type() const")?;
    writeln!(out, "\t\t{{ return \"{}\"; }};", actor.kind())?;
    writeln!(out)?;
    writeln!(out, "\t// main member function")?;
    writeln!(out, "\tvoid main();")?;
    writeln!(out)?;
    writeln!(out, "private:")?;
    writeln!(out, "\t// Ports")?;
    for port in actor.ports() {
        writeln!(
            out,
            "\t{}Port < {} > {};",
            port_class(port.kind()),
            TOKEN_TYPE,
            port.name()
        )?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "#endif")?;
    Ok(())
}

/// Write the source file with the actor's constructor and a rate-correct
/// read/write skeleton of its firing loop.
pub fn write_actor_source<W: Write>(actor: &Actor, out: &mut W) -> io::Result<()> {
    comment(out)?;
    writeln!(out, "#include \"{}.h\"", actor.kind().to_lowercase())?;
    writeln!(out)?;

    // constructor
    writeln!(out, "{}::{}(", actor.kind(), actor.kind())?;
    write!(out, "\tconst class Id &n")?;
    for port in actor.ports() {
        write!(
            out,
            ",\n\t{} < {} > &{}_F",
            port_class(port.kind()),
            TOKEN_TYPE,
            port.name()
        )?;
    }
    writeln!(out, ")")?;
    writeln!(out, "\t\t:")?;
    write!(out, "\tProcess(n)")?;
    for port in actor.ports() {
        write!(
            out,
            ",\n\t{}(id(\"{}\"), {}_F)",
            port.name(),
            port.name(),
            port.name()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{{")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    // firing loop
    writeln!(out, "void {}::main()", actor.kind())?;
    writeln!(out, "{{")?;
    for port in actor.ports() {
        writeln!(
            out,
            "\t{} d_{}[{}];",
            TOKEN_TYPE,
            port.name(),
            port.rate()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "\twhile (true)")?;
    writeln!(out, "\t{{")?;
    for port in actor.ports().iter().filter(|p| p.kind() == PortKind::In) {
        writeln!(
            out,
            "\t\tread({}, d_{}, {});",
            port.name(),
            port.name(),
            port.rate()
        )?;
    }
    writeln!(out)?;
    for port in actor.ports().iter().filter(|p| p.kind() == PortKind::Out) {
        writeln!(
            out,
            "\t\twrite({}, d_{}, {});",
            port.name(),
            port.name(),
            port.rate()
        )?;
    }
    writeln!(out, "\t}}")?;
    writeln!(out, "}}")?;
    Ok(())
}

/// Write the header declaring the graph's `ProcessNetwork` subclass.
pub fn write_network_header<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    comment(out)?;
    writeln!(out, "#ifndef {}_H", graph.kind().to_uppercase())?;
    writeln!(out, "#define {}_H", graph.kind().to_uppercase())?;
    writeln!(out)?;
    writeln!(out, "#include \"network.h\"")?;
    writeln!(out, "#include \"fifo.h\"")?;
    writeln!(out)?;
    let mut included = HashSet::new();
    for actor in graph.actors() {
        if included.insert(actor.kind()) {
            writeln!(out, "#include \"{}.h\"", actor.kind().to_lowercase())?;
        }
    }
    writeln!(out)?;

    writeln!(out, "class {} : public ProcessNetwork", graph.kind())?;
    writeln!(out, "{{")?;
    writeln!(out, "public:")?;
    writeln!(out, "\t// Constructor")?;
    writeln!(out, "\t{}(const class Id &n);", graph.kind())?;
    writeln!(out)?;
    writeln!(out, "\t// type member function")?;
    writeln!(out, "\tconst char *type() const")?;
    writeln!(out, "\t\t{{ return \"{}\"; }};", graph.kind())?;
    writeln!(out)?;
    writeln!(out, "private:")?;
    writeln!(out, "\t// Fifos")?;
    for channel in graph.channels() {
        writeln!(out, "\tFifo < {} > {};", TOKEN_TYPE, channel.name())?;
    }
    writeln!(out)?;
    writeln!(out, "\t// Processes")?;
    for actor in graph.actors() {
        writeln!(out, "\t{} {};", actor.kind(), actor.name())?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "#endif")?;
    Ok(())
}

/// Write the source wiring every actor's ports to its channels.
pub fn write_network_source<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    comment(out)?;
    writeln!(out, "#include \"{}.h\"", graph.kind().to_lowercase())?;
    writeln!(out)?;

    writeln!(out, "{}::{}(const class Id &n) :", graph.kind(), graph.kind())?;
    write!(out, "\tProcessNetwork(n)")?;
    for channel in graph.channels() {
        write!(out, ",\n\t{}(id(\"{}\"))", channel.name(), channel.name())?;
    }
    for actor in graph.actors() {
        write!(out, ",\n\t{}(\n\t\tid(\"{}\")", actor.name(), actor.name())?;
        for port in actor.ports() {
            let Some(channel_id) = port.channel() else {
                continue;
            };
            let Ok(channel) = graph.channel(channel_id) else {
                continue;
            };
            write!(out, ",\n\t\t{}", channel.name())?;
        }
        write!(out, "\n\t)")?;
    }
    writeln!(out)?;
    writeln!(out, "{{")?;
    writeln!(out, "}}")?;
    Ok(())
}

/// Write the main function that instantiates and starts the network.
pub fn write_main<W: Write>(graph: &Graph, out: &mut W) -> io::Result<()> {
    comment(out)?;
    writeln!(out, "#include <fstream>")?;
    writeln!(out, "#include \"yapi.h\"")?;
    writeln!(out, "#include \"{}.h\"", graph.kind().to_lowercase())?;
    writeln!(out)?;
    writeln!(out, "int main(int argc, char **argv)")?;
    writeln!(out, "{{")?;
    writeln!(out, "\tRTE rte;")?;
    writeln!(out)?;
    writeln!(
        out,
        "\t{} {}(id(\"{}\"));",
        graph.kind(),
        graph.name(),
        graph.name()
    )?;
    writeln!(out)?;
    writeln!(out, "\tstd::ofstream fdot(\"{}.dot\");", graph.name())?;
    writeln!(out, "\tprintDotty({}, fdot);", graph.name())?;
    writeln!(out)?;
    writeln!(out, "\trte.start({});", graph.name())?;
    writeln!(out)?;
    writeln!(out, "\treturn 0;")?;
    writeln!(out, "}}")?;
    Ok(())
}

/// Write the whole skeleton into `dir`: `<type>.h/.cc` per distinct actor
/// type, `<graphtype>.h/.cc` for the network, and `main.cc`.
pub fn export_hapi(graph: &Graph, dir: &Path) -> io::Result<()> {
    let mut emitted = HashSet::new();
    for actor in graph.actors() {
        if !emitted.insert(actor.kind().to_string()) {
            continue;
        }
        let stem = actor.kind().to_lowercase();

        let mut header = Vec::new();
        write_actor_header(actor, &mut header)?;
        std::fs::write(dir.join(format!("{stem}.h")), header)?;

        let mut source = Vec::new();
        write_actor_source(actor, &mut source)?;
        std::fs::write(dir.join(format!("{stem}.cc")), source)?;
    }

    let stem = graph.kind().to_lowercase();
    let mut header = Vec::new();
    write_network_header(graph, &mut header)?;
    std::fs::write(dir.join(format!("{stem}.h")), header)?;

    let mut source = Vec::new();
    write_network_source(graph, &mut source)?;
    std::fs::write(dir.join(format!("{stem}.cc")), source)?;

    let mut main_cc = Vec::new();
    write_main(graph, &mut main_cc)?;
    std::fs::write(dir.join("main.cc"), main_cc)?;

    Ok(())
}
