use thiserror::Error;

pub type SdfResult<T> = Result<T, SdfError>;

#[derive(Error, Debug)]
pub enum SdfError {
    /// A required attribute/element is absent or structurally invalid
    /// during construction.
    #[error("Malformed model: {what}")]
    MalformedModel { what: String },

    /// A channel names an actor or port that does not exist in the graph
    /// being built.
    #[error("Unresolved reference: {what}")]
    UnresolvedReference { what: String },

    /// A lookup-by-id or a removal-by-name targets an element that does
    /// not exist.
    #[error("Not found: {what}")]
    NotFound { what: String },

    /// A port was used as a channel endpoint its kind does not allow.
    #[error("Port kind mismatch: {what}")]
    PortKindMismatch { what: String },

    /// A port already attached to a channel was connected or removed.
    #[error("Port in use: {what}")]
    PortInUse { what: String },

    /// An actor still referenced by a channel endpoint was removed.
    #[error("Actor in use: {what}")]
    ActorInUse { what: String },
}
