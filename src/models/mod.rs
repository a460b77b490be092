//! Models

/// Card related models
pub mod card;
/// Identity related models
pub mod identity;
/// Item related models
pub mod item;
/// Login related models
pub mod login;
/// Server status models
pub mod status;

pub use card::*;
pub use identity::*;
pub use item::*;
pub use login::*;
pub use status::*;

use serde::{Deserialize, Deserializer};

/// Decodes an explicit JSON `null` the same way as a missing key.
///
/// `bw serve` emits `"fields": null` and `"uris": null` rather than empty arrays.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
