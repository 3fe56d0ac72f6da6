use crate::ids::Id;

/// Identity shared by every model element: a numeric id scoped to the
/// owning container plus a human-readable name.
///
/// The id is fixed at construction; only the name is mutable. Ownership
/// links (which graph holds an actor, which actor holds a port) live in the
/// containers themselves, expressed as indices rather than back-pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    id: Id,
    name: String,
}

impl Ident {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
