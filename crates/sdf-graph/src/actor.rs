//! Actors: computational nodes owning an ordered collection of ports.

use sdf_core::{ActorId, Ident, PortId, Rate, SdfError, SdfResult};

use crate::port::{Port, PortKind};

/// An actor in an SDF graph.
///
/// The `kind` is an opaque type tag (the computational kind of the actor);
/// the model attaches no meaning to it. Ports are kept in declaration order
/// with ids assigned by position at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    ident: Ident,
    kind: String,
    ports: Vec<Port>,
}

impl Actor {
    pub fn new(id: ActorId, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            ident: Ident::new(id, name),
            kind: kind.into(),
            ports: Vec::new(),
        }
    }

    pub fn id(&self) -> ActorId {
        self.ident.id()
    }

    pub fn name(&self) -> &str {
        self.ident.name()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.ident.set_name(name);
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    /// All ports in declaration order.
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    pub fn nr_ports(&self) -> usize {
        self.ports.len()
    }

    /// Port with the given id. Missing ids are an error; name lookups are
    /// not (see [`Actor::port_by_name`]).
    pub fn port(&self, id: PortId) -> SdfResult<&Port> {
        self.ports
            .iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| SdfError::NotFound {
                what: format!("port with id '{}' on actor '{}'", id, self.name()),
            })
    }

    pub(crate) fn port_mut(&mut self, id: PortId) -> SdfResult<&mut Port> {
        let name = self.name().to_string();
        self.ports
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| SdfError::NotFound {
                what: format!("port with id '{id}' on actor '{name}'"),
            })
    }

    /// First port with the given name, or `None` if the actor has no such
    /// port. Deliberately an absent result rather than an error, matching
    /// the by-id/by-name asymmetry of the rest of the model.
    pub fn port_by_name(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name() == name)
    }

    pub fn add_port(&mut self, port: Port) {
        self.ports.push(port);
    }

    /// Create a port of the given kind and rate with a synthesized
    /// `_p<n>` name. Used when a channel is created programmatically.
    pub fn create_port(&mut self, kind: PortKind, rate: Rate) -> PortId {
        let id = PortId::from_index(self.nr_ports() as u32);
        let name = format!("_p{}", self.nr_ports() + 1);
        self.ports.push(Port::new(id, name, kind, rate, self.id()));
        id
    }

    /// Remove the port with the given name.
    ///
    /// Fails with `NotFound` if no port has that name, and with `PortInUse`
    /// if the port is still attached to a channel. Remove the channel
    /// first; that severs the link on both sides.
    pub fn remove_port(&mut self, name: &str) -> SdfResult<Port> {
        let pos = self
            .ports
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| SdfError::NotFound {
                what: format!("port '{}' on actor '{}'", name, self.name()),
            })?;
        if let Some(channel) = self.ports[pos].channel() {
            return Err(SdfError::PortInUse {
                what: format!(
                    "port '{}' on actor '{}' is attached to channel with id '{}'",
                    name,
                    self.name(),
                    channel
                ),
            });
        }
        Ok(self.ports.remove(pos))
    }

    /// True iff every port is attached to a channel.
    pub fn is_connected(&self) -> bool {
        self.ports.iter().all(|p| p.channel().is_some())
    }

    /// Copy of the actor's properties under a new id, without ports.
    ///
    /// The deep copy including ports is `Clone`; the two are distinct on
    /// purpose. A property-only copy is what a derived graph wants when it
    /// rebuilds structure itself.
    pub fn create_copy(&self, id: ActorId) -> Actor {
        Actor::new(id, self.name(), self.kind())
    }
}
