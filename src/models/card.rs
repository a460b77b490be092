use std::fmt;

use serde::{Deserialize, Serialize};

/// Payment card payload of an item. Every field is independently optional.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Name printed on the card
    #[serde(default, alias = "cardHolderName")]
    pub cardholder_name: Option<String>,
    /// Card network, e.g. `Visa`
    #[serde(default)]
    pub brand: Option<String>,
    /// Card number
    #[serde(default)]
    pub number: Option<String>,
    /// Expiry month as entered in the vault
    #[serde(default)]
    pub exp_month: Option<String>,
    /// Expiry year as entered in the vault
    #[serde(default)]
    pub exp_year: Option<String>,
    /// Security code
    #[serde(default)]
    pub code: Option<String>,
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("cardholder_name", &self.cardholder_name)
            .field("brand", &self.brand)
            .field("number", &self.number.as_ref().map(|_| "[redacted]"))
            .field("exp_month", &self.exp_month)
            .field("exp_year", &self.exp_year)
            .field("code", &self.code.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}
