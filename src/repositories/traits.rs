//! Common repository traits.
//!
//! Generic interfaces for database operations; every repository owns a
//! cloned pool and implements the subset of these it needs.

/// Trait for creating new entities in the database.
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (without ID)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity and returns it with the database-assigned ID.
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading a single entity by primary key.
pub trait Read<Entity, Id> {
    /// Reads an entity by its primary key; `Ok(None)` when absent.
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for updating existing entities.
///
/// Only `Some(_)` fields of the update DTO are written.
pub trait Update<Entity, UpdateDTO, Id> {
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for deleting entities.
///
/// Deleting an absent row is not an error; callers that need idempotent
/// delete semantics rely on this.
pub trait Delete<Id> {
    async fn delete(&self, id: &Id) -> Result<(), sqlx::Error>;
}
