use super::EntityId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: EntityId,
    pub name: String,
}

impl Author {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
