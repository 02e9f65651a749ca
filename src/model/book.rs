use super::EntityId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: EntityId,
    pub name: String,
    /// Not checked against existing authors; may dangle.
    pub author_id: EntityId,
}

impl Book {
    pub fn new(id: EntityId, name: impl Into<String>, author_id: EntityId) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }

    pub fn is_by(&self, author_id: EntityId) -> bool {
        self.author_id == author_id
    }
}
