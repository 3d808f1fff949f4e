use serde::{de::DeserializeOwned, Serialize};

pub mod blog;
pub mod project;
pub mod record_id;
pub mod responses;
pub mod service;
pub mod session;

use record_id::RecordId;

/// A typed content collection. The record struct is the column whitelist made
/// literal: projecting a draft into a record is compile-time checked, and any
/// field a client submits that the record does not carry is silently dropped.
pub trait CollectionRecord:
    Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static
{
    /// Collection name as it appears in the URL path and the database.
    const COLLECTION: &'static str;

    /// The partial record accepted on upsert. Every field is optional;
    /// unknown JSON keys are ignored during deserialization.
    type Draft: Serialize + DeserializeOwned + Send + 'static;

    fn draft_id(draft: &Self::Draft) -> Option<&RecordId>;

    /// Builds the full row that will replace whatever is stored under `id`.
    /// Fields absent from the draft take their defaults; nothing is merged
    /// from an existing row.
    fn assemble(id: String, draft: Self::Draft) -> Self;

    fn id(&self) -> &str;
}
