//! The graph container and its operations.

use sdf_core::{ActorId, ChannelId, Id, Ident, Rate, SdfError, SdfResult};

use crate::actor::Actor;
use crate::channel::{Channel, Endpoint};
use crate::port::{Port, PortKind};

/// An SDF graph: the exclusive owner of its actors and channels.
///
/// Insertion order is preserved for both collections and ids are assigned
/// by position at creation time. Removals do not renumber surviving
/// elements, so id-based lookups scan rather than index.
///
/// `Clone` is the deep copy of the whole graph: relations are index pairs
/// and relative order is preserved, so every cross-reference stays valid in
/// the copy. For a property-only copy with empty collections, use
/// [`Graph::create_copy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    ident: Ident,
    kind: String,
    actors: Vec<Actor>,
    channels: Vec<Channel>,
}

impl Graph {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            ident: Ident::new(Id::from_index(0), name),
            kind: kind.into(),
            actors: Vec::new(),
            channels: Vec::new(),
        }
    }

    pub fn id(&self) -> Id {
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

    // ---- actors ------------------------------------------------------

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn nr_actors(&self) -> usize {
        self.actors.len()
    }

    /// Actor with the given id. Missing ids are an error; name lookups
    /// return an absent result instead (see [`Graph::actor_by_name`]).
    pub fn actor(&self, id: ActorId) -> SdfResult<&Actor> {
        self.actors
            .iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| SdfError::NotFound {
                what: format!("actor with id '{}' in graph '{}'", id, self.name()),
            })
    }

    pub fn actor_mut(&mut self, id: ActorId) -> SdfResult<&mut Actor> {
        let name = self.name().to_string();
        self.actors
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or_else(|| SdfError::NotFound {
                what: format!("actor with id '{id}' in graph '{name}'"),
            })
    }

    /// First actor with the given name, or `None`.
    pub fn actor_by_name(&self, name: &str) -> Option<&Actor> {
        self.actors.iter().find(|a| a.name() == name)
    }

    /// Add a fully built actor. The caller is responsible for having given
    /// it an id scoped to this graph.
    pub fn add_actor(&mut self, actor: Actor) {
        self.actors.push(actor);
    }

    /// Create an empty actor with an id equal to the current actor count.
    pub fn create_actor(&mut self, name: impl Into<String>, kind: impl Into<String>) -> ActorId {
        let id = ActorId::from_index(self.nr_actors() as u32);
        self.actors.push(Actor::new(id, name, kind));
        id
    }

    /// Remove the actor with the given name.
    ///
    /// Fails with `NotFound` if no actor has that name, and with
    /// `ActorInUse` if any channel endpoint still references the actor.
    /// Remove or rewire those channels first.
    pub fn remove_actor(&mut self, name: &str) -> SdfResult<()> {
        let pos = self
            .actors
            .iter()
            .position(|a| a.name() == name)
            .ok_or_else(|| SdfError::NotFound {
                what: format!("actor '{}' in graph '{}'", name, self.name()),
            })?;
        let id = self.actors[pos].id();
        if let Some(ch) = self.channels.iter().find(|c| c.references_actor(id)) {
            return Err(SdfError::ActorInUse {
                what: format!(
                    "actor '{}' is referenced by channel '{}'",
                    name,
                    ch.name()
                ),
            });
        }
        self.actors.remove(pos);
        Ok(())
    }

    // ---- channels ----------------------------------------------------

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn nr_channels(&self) -> usize {
        self.channels.len()
    }

    /// Channel with the given id. Missing ids are an error.
    pub fn channel(&self, id: ChannelId) -> SdfResult<&Channel> {
        self.channels
            .iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| SdfError::NotFound {
                what: format!("channel with id '{}' in graph '{}'", id, self.name()),
            })
    }

    pub fn channel_mut(&mut self, id: ChannelId) -> SdfResult<&mut Channel> {
        let name = self.name().to_string();
        self.channels
            .iter_mut()
            .find(|c| c.id() == id)
            .ok_or_else(|| SdfError::NotFound {
                what: format!("channel with id '{id}' in graph '{name}'"),
            })
    }

    /// First channel with the given name, or `None`.
    pub fn channel_by_name(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name() == name)
    }

    pub fn add_channel(&mut self, channel: Channel) {
        self.channels.push(channel);
    }

    /// Remove the channel with the given name, detaching both of its ports
    /// before dropping it. Fails with `NotFound` if no channel has that
    /// name.
    pub fn remove_channel(&mut self, name: &str) -> SdfResult<()> {
        let pos = self
            .channels
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| SdfError::NotFound {
                what: format!("channel '{}' in graph '{}'", name, self.name()),
            })?;
        let channel = self.channels.remove(pos);
        for ep in [channel.src(), channel.dst()].into_iter().flatten() {
            self.actor_mut(ep.actor)?.port_mut(ep.port)?.set_channel(None);
        }
        Ok(())
    }

    /// Create a channel between two actors, synthesizing an `Out` port on
    /// `src` and an `In` port on `dst` with the given rates.
    ///
    /// This is the workhorse of transformations that extend a graph
    /// programmatically. `src == dst` creates a self-channel.
    pub fn create_channel(
        &mut self,
        src: ActorId,
        rate_src: Rate,
        dst: ActorId,
        rate_dst: Rate,
        initial_tokens: u32,
    ) -> SdfResult<ChannelId> {
        let id = ChannelId::from_index(self.nr_channels() as u32);
        let name = format!("_ch{}", self.nr_channels() + 1);

        // both actors must exist before any port is synthesized
        self.actor(src)?;
        self.actor(dst)?;

        let src_port = self.actor_mut(src)?.create_port(PortKind::Out, rate_src);
        let dst_port = self.actor_mut(dst)?.create_port(PortKind::In, rate_dst);

        let mut channel = Channel::new(id, name);
        channel.set_initial_tokens(initial_tokens);
        self.channels.push(channel);

        self.connect_src(id, Endpoint { actor: src, port: src_port })?;
        self.connect_dst(id, Endpoint { actor: dst, port: dst_port })?;

        Ok(id)
    }

    // ---- wiring ------------------------------------------------------

    /// Attach the channel's source to the given endpoint and back-link the
    /// port. The port must be an `Out` port and must be free.
    pub fn connect_src(&mut self, channel: ChannelId, ep: Endpoint) -> SdfResult<()> {
        self.check_endpoint(ep, PortKind::Out)?;
        self.channel_mut(channel)?.set_src(Some(ep));
        self.actor_mut(ep.actor)?
            .port_mut(ep.port)?
            .set_channel(Some(channel));
        Ok(())
    }

    /// Attach the channel's destination to the given endpoint and
    /// back-link the port. The port must be an `In` port and must be free.
    pub fn connect_dst(&mut self, channel: ChannelId, ep: Endpoint) -> SdfResult<()> {
        self.check_endpoint(ep, PortKind::In)?;
        self.channel_mut(channel)?.set_dst(Some(ep));
        self.actor_mut(ep.actor)?
            .port_mut(ep.port)?
            .set_channel(Some(channel));
        Ok(())
    }

    fn check_endpoint(&self, ep: Endpoint, expected: PortKind) -> SdfResult<()> {
        let actor = self.actor(ep.actor)?;
        let port = actor.port(ep.port)?;
        if port.kind() != expected {
            return Err(SdfError::PortKindMismatch {
                what: format!(
                    "port '{}' on actor '{}' cannot be a channel {}",
                    port.name(),
                    actor.name(),
                    match expected {
                        PortKind::Out => "source",
                        PortKind::In => "destination",
                    }
                ),
            });
        }
        if let Some(attached) = port.channel() {
            return Err(SdfError::PortInUse {
                what: format!(
                    "port '{}' on actor '{}' is attached to channel with id '{}'",
                    port.name(),
                    actor.name(),
                    attached
                ),
            });
        }
        Ok(())
    }

    /// Resolve an endpoint to its actor and port.
    pub fn endpoint(&self, ep: Endpoint) -> SdfResult<(&Actor, &Port)> {
        let actor = self.actor(ep.actor)?;
        let port = actor.port(ep.port)?;
        Ok((actor, port))
    }

    // ---- copying -----------------------------------------------------

    /// Copy of the graph's properties with empty actor/channel sets.
    ///
    /// Counterpart of the deep `Clone`: use this when a derived graph
    /// keeps the same name and type but rebuilds its structure.
    pub fn create_copy(&self) -> Graph {
        Graph::new(self.name(), self.kind())
    }
}
