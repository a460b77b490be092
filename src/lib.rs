#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]
#![deny(unstable_features)]
#![warn(rust_2018_idioms, future_incompatible, nonstandard_style)]

//! bw-serve is a Rust client for the vault management API exposed by `bw serve`,
//! the local HTTP server of the Bitwarden CLI.
//!
//! # High-level features
//!
//! - Based on [`tokio`] and [`hyper`] by default.
//! - [`hyper`] can be replaced using the [`HTTPClient`](client::HTTPClient) interface.
//! - Optionally supervises the `bw serve` process itself, see [`serve`].
//!
//! ## Details
//!
//! - The server holds the lock state. Unlock it once, then read items by id:
//!
//!   ```
//!   # use bw_serve::{client::Client, items, session};
//!   use bw_serve::error::ServeResult;
//!
//!   async fn database_password(item_id: &str) -> ServeResult<Option<String>> {
//!        let client = Client::default();
//!
//!        session::unlock(&client, "master password").await?;
//!        let login = items::login(&client, item_id).await?;
//!        session::lock(&client).await?;
//!
//!        Ok(login.password)
//!   }
//!   #
//!   # fn main() {}
//!   ```
//!
//! - Secure notes keep their text in the item's notes, [`items::secure_note`] returns it directly.
//!   Requesting the wrong kind of item is reported before checking its content:
//!
//!   ```
//!   # use bw_serve::{client::Client, items};
//!   use bw_serve::error::{Error, ServeResult};
//!
//!   async fn env_file(item_id: &str) -> ServeResult<String> {
//!        let client = Client::new("http://localhost:8087");
//!
//!        match items::secure_note(&client, item_id).await {
//!            Err(Error::WrongItemType { found, .. }) => {
//!                panic!("{} is a {}, not a secure note", item_id, found)
//!            }
//!            other => other,
//!        }
//!   }
//!   #
//!   # fn main() {}
//!   ```
//!

//! # Examples
//!
//! Refer to `./demos`

pub mod client;
pub mod error;
pub mod items;
pub mod models;
pub mod serve;
pub mod session;

#[cfg(test)]
mod testing;

#[cfg(test)]
fn get_test_client() -> (testing::MockClient, String) {
    let item_id = uuid::Uuid::new_v4().to_string();

    (testing::MockClient::new("http://localhost"), item_id)
}
