use crate::game::ENTRY_REQUIRED_MESSAGE;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// No session exists for the email a player tried to pair with.
    #[error("Friend not found. Make sure they have signed up and started playing!")]
    FriendNotFound { email: String },

    /// Day advancement was attempted before today's entry was saved.
    #[error("{}", ENTRY_REQUIRED_MESSAGE)]
    EntryRequired { day_number: i32 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
