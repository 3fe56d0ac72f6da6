//! Channels: directed edges between an output port and an input port.

use sdf_core::{ActorId, ChannelId, Ident, PortId};

/// One end of a channel: a port on an actor, expressed as indices into the
/// owning graph. Non-owning; the graph holds the actors and their ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub actor: ActorId,
    pub port: PortId,
}

/// A channel in an SDF graph.
///
/// Both endpoints may be unset while the channel is under construction; a
/// well-formed channel has both set, with the source on an `Out` port and
/// the destination on an `In` port (checked when connecting). Self-channels
/// (same actor on both ends) are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    ident: Ident,
    src: Option<Endpoint>,
    dst: Option<Endpoint>,
    initial_tokens: u32,
}

impl Channel {
    pub fn new(id: ChannelId, name: impl Into<String>) -> Self {
        Self {
            ident: Ident::new(id, name),
            src: None,
            dst: None,
            initial_tokens: 0,
        }
    }

    pub fn id(&self) -> ChannelId {
        self.ident.id()
    }

    pub fn name(&self) -> &str {
        self.ident.name()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.ident.set_name(name);
    }

    pub fn src(&self) -> Option<Endpoint> {
        self.src
    }

    pub fn dst(&self) -> Option<Endpoint> {
        self.dst
    }

    pub(crate) fn set_src(&mut self, ep: Option<Endpoint>) {
        self.src = ep;
    }

    pub(crate) fn set_dst(&mut self, ep: Option<Endpoint>) {
        self.dst = ep;
    }

    /// Tokens present on the channel before the first firing.
    pub fn initial_tokens(&self) -> u32 {
        self.initial_tokens
    }

    pub fn set_initial_tokens(&mut self, tokens: u32) {
        self.initial_tokens = tokens;
    }

    /// True iff both endpoints are set.
    pub fn is_connected(&self) -> bool {
        self.src.is_some() && self.dst.is_some()
    }

    /// True iff either endpoint sits on the given actor.
    pub fn references_actor(&self, actor: ActorId) -> bool {
        self.src.map(|ep| ep.actor == actor).unwrap_or(false)
            || self.dst.map(|ep| ep.actor == actor).unwrap_or(false)
    }

    /// True iff source and destination sit on the same actor.
    pub fn is_self_channel(&self) -> bool {
        match (self.src, self.dst) {
            (Some(s), Some(d)) => s.actor == d.actor,
            _ => false,
        }
    }
}
