pub mod format;
pub mod language;
pub mod migration;
pub mod movie;
pub mod review;
pub mod subscription;

pub use language::{Language, SOURCE_LANGUAGE, SUPPORTED_LANGUAGES};
pub use migration::{
    ApprovalStatus, ApproveReviewRequest, FailedMapping, FailedMappingsResponse, MigrationPost,
    MigrationStatus, PreviewPostsResponse,
};
pub use movie::Movie;
pub use review::Review;
pub use subscription::{
    QuickSubscribeRequest, SubscribeResponse, SubscriptionRequest, UnsubscribeResponse,
};

use serde::{Deserialize, Deserializer};

/// Accept both string and numeric ids.
///
/// The live API serves UUID strings while the bundled fallback snapshot (and
/// some older endpoints) use numeric ids. Everything is normalized to a
/// string on the way in.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

pub(crate) fn opt_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|id| match id {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}
