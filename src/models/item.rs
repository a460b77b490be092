use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, Card, Identity, Login};
use crate::error::{Error, ServeResult};

/// Kind of a vault item, encoded on the wire as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ItemType {
    /// `1`
    Login,
    /// `2`
    SecureNote,
    /// `3`
    Card,
    /// `4`
    Identity,
    /// Any kind this client does not know about, kept as-is
    Unknown(u8),
}

impl From<u8> for ItemType {
    fn from(value: u8) -> Self {
        match value {
            1 => ItemType::Login,
            2 => ItemType::SecureNote,
            3 => ItemType::Card,
            4 => ItemType::Identity,
            other => ItemType::Unknown(other),
        }
    }
}

impl From<ItemType> for u8 {
    fn from(value: ItemType) -> Self {
        match value {
            ItemType::Login => 1,
            ItemType::SecureNote => 2,
            ItemType::Card => 3,
            ItemType::Identity => 4,
            ItemType::Unknown(other) => other,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Login => write!(f, "login"),
            ItemType::SecureNote => write!(f, "secure note"),
            ItemType::Card => write!(f, "card"),
            ItemType::Identity => write!(f, "identity"),
            ItemType::Unknown(value) => write!(f, "item type {}", value),
        }
    }
}

/// Whether the vault UI asks for the master password again before revealing an item.
///
/// Carried through for callers; this client does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Reprompt {
    /// `0`
    #[default]
    No,
    /// `1`
    Yes,
}

impl TryFrom<u8> for Reprompt {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Reprompt::No),
            1 => Ok(Reprompt::Yes),
            other => Err(format!("invalid reprompt value: {}", other)),
        }
    }
}

impl From<Reprompt> for u8 {
    fn from(value: Reprompt) -> Self {
        match value {
            Reprompt::No => 0,
            Reprompt::Yes => 1,
        }
    }
}

/// Type marker of a custom field. Its meaning is server-defined and passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldType(pub u8);

/// A custom name/value pair attached to an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field label
    #[serde(default)]
    pub name: Option<String>,
    /// Field value
    #[serde(default)]
    pub value: Option<String>,
    /// Opaque type marker
    #[serde(default, rename = "type")]
    pub r#type: FieldType,
}

/// A vault record as returned by `GET /object/item/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Item UUID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Date and time when the item was created.
    pub creation_date: DateTime<Utc>,
    /// Date and time of the last change.
    #[serde(default)]
    pub revision_date: Option<DateTime<Utc>>,
    /// Set when the item sits in the trash.
    #[serde(default)]
    pub deleted_date: Option<DateTime<Utc>>,
    /// Owning organization, if any
    #[serde(default)]
    pub organization_id: Option<String>,
    /// Collection the item belongs to
    #[serde(default)]
    pub collection_id: Option<String>,
    /// Collections the item is shared into
    #[serde(default, deserialize_with = "null_as_default")]
    pub collection_ids: Vec<String>,
    /// Folder the item is filed under
    #[serde(default)]
    pub folder_id: Option<String>,
    /// Discriminant selecting which payload is meaningful
    pub r#type: ItemType,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Free-text notes; holds the content of secure notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Marked as favorite
    #[serde(default, deserialize_with = "null_as_default")]
    pub favorite: bool,
    /// Custom fields
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<Field>,
    /// Login payload
    #[serde(default)]
    pub login: Option<Login>,
    /// Card payload
    #[serde(default)]
    pub card: Option<Card>,
    /// Identity payload
    #[serde(default)]
    pub identity: Option<Identity>,
    /// Master password re-prompt flag
    #[serde(default)]
    pub reprompt: Reprompt,
}

/// Borrowed view of an item's payload, selected by [`Item::r#type`].
///
/// The server does not keep the tag and the payload consistent, so each
/// variant still carries an `Option`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemContent<'a> {
    /// Login payload
    Login(Option<&'a Login>),
    /// Secure notes keep their text in [`Item::notes`]
    SecureNote(Option<&'a str>),
    /// Card payload
    Card(Option<&'a Card>),
    /// Identity payload
    Identity(Option<&'a Identity>),
    /// Kind not known to this client
    Unknown(u8),
}

impl Item {
    /// Payload matching the item's type tag.
    pub fn content(&self) -> ItemContent<'_> {
        match self.r#type {
            ItemType::Login => ItemContent::Login(self.login.as_ref()),
            ItemType::SecureNote => ItemContent::SecureNote(self.notes.as_deref()),
            ItemType::Card => ItemContent::Card(self.card.as_ref()),
            ItemType::Identity => ItemContent::Identity(self.identity.as_ref()),
            ItemType::Unknown(value) => ItemContent::Unknown(value),
        }
    }

    /// Whether the item has been moved to the trash.
    pub fn is_deleted(&self) -> bool {
        self.deleted_date.is_some()
    }

    /// Take the login payload. The type is checked before the payload.
    pub fn into_login(self) -> ServeResult<Login> {
        self.expect_type(ItemType::Login)?;
        self.login.ok_or(Error::EmptyContent(ItemType::Login))
    }

    /// Take the text of a secure note. The type is checked before the payload.
    pub fn into_secure_note(self) -> ServeResult<String> {
        self.expect_type(ItemType::SecureNote)?;
        self.notes.ok_or(Error::EmptyContent(ItemType::SecureNote))
    }

    /// Take the card payload. The type is checked before the payload.
    pub fn into_card(self) -> ServeResult<Card> {
        self.expect_type(ItemType::Card)?;
        self.card.ok_or(Error::EmptyContent(ItemType::Card))
    }

    /// Take the identity payload. The type is checked before the payload.
    pub fn into_identity(self) -> ServeResult<Identity> {
        self.expect_type(ItemType::Identity)?;
        self.identity.ok_or(Error::EmptyContent(ItemType::Identity))
    }

    fn expect_type(&self, expected: ItemType) -> ServeResult<()> {
        if self.r#type == expected {
            Ok(())
        } else {
            Err(Error::WrongItemType {
                expected,
                found: self.r#type,
            })
        }
    }
}
