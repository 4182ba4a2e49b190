/// All row identifiers are store-generated UUIDs.
pub type EntityId = uuid::Uuid;

/// User ids are opaque strings handed out by the identity provider.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
