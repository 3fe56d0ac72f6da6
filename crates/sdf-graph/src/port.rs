//! Ports: typed, rate-annotated connection points on an actor.

use sdf_core::{ActorId, ChannelId, Ident, PortId, Rate, SdfError, SdfResult};

/// Direction of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKind {
    /// Consumes tokens from the attached channel.
    In,
    /// Produces tokens onto the attached channel.
    Out,
}

impl PortKind {
    /// The attribute value used in the tree format.
    pub fn as_str(self) -> &'static str {
        match self {
            PortKind::In => "in",
            PortKind::Out => "out",
        }
    }

    pub(crate) fn parse(value: &str, context: &str) -> SdfResult<Self> {
        match value {
            "in" => Ok(PortKind::In),
            "out" => Ok(PortKind::Out),
            other => Err(SdfError::MalformedModel {
                what: format!("{context}: port type '{other}' is not 'in' or 'out'"),
            }),
        }
    }
}

/// A port on an actor.
///
/// A port belongs to exactly one actor for its lifetime and is attached to
/// at most one channel at a time, in the role its kind allows. The channel
/// link is maintained by the graph's connect/remove operations so both
/// directions stay consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Port {
    ident: Ident,
    kind: PortKind,
    rate: Rate,
    actor: ActorId,
    channel: Option<ChannelId>,
}

impl Port {
    pub(crate) fn new(
        id: PortId,
        name: impl Into<String>,
        kind: PortKind,
        rate: Rate,
        actor: ActorId,
    ) -> Self {
        Self {
            ident: Ident::new(id, name),
            kind,
            rate,
            actor,
            channel: None,
        }
    }

    pub fn id(&self) -> PortId {
        self.ident.id()
    }

    pub fn name(&self) -> &str {
        self.ident.name()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.ident.set_name(name);
    }

    pub fn kind(&self) -> PortKind {
        self.kind
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn set_rate(&mut self, rate: Rate) {
        self.rate = rate;
    }

    /// The owning actor.
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// The channel this port is currently attached to, if any.
    pub fn channel(&self) -> Option<ChannelId> {
        self.channel
    }

    pub(crate) fn set_channel(&mut self, channel: Option<ChannelId>) {
        self.channel = channel;
    }
}
