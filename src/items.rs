//! Item related API
//!
//! Item identifiers are appended to the path verbatim. Callers passing
//! untrusted identifiers are responsible for escaping them.

use hyper::Method;

use crate::client::{execute_json, Data, HTTPClient, NO_BODY};
use crate::error::ServeResult;
use crate::models::{Card, Identity, Item, Login};

/// Fetch an item by its UUID.
pub async fn get<C>(client: &C, item_id: &str) -> ServeResult<Item>
where
    C: HTTPClient + ?Sized,
{
    let path = format!("/object/item/{}", item_id);
    let Data { data } =
        execute_json::<_, _, Data<Item>>(client, Method::GET, &path, NO_BODY).await?;

    Ok(data)
}

/// Fetch a login item and return its login payload.
///
/// Fails with [`WrongItemType`](crate::error::Error::WrongItemType) when the
/// item is not a login, even if it carries login data, and with
/// [`EmptyContent`](crate::error::Error::EmptyContent) when it is a login
/// without any.
pub async fn login<C>(client: &C, item_id: &str) -> ServeResult<Login>
where
    C: HTTPClient + ?Sized,
{
    get(client, item_id).await?.into_login()
}

/// Fetch a secure note and return its text.
pub async fn secure_note<C>(client: &C, item_id: &str) -> ServeResult<String>
where
    C: HTTPClient + ?Sized,
{
    get(client, item_id).await?.into_secure_note()
}

/// Fetch a card item and return its card payload.
pub async fn card<C>(client: &C, item_id: &str) -> ServeResult<Card>
where
    C: HTTPClient + ?Sized,
{
    get(client, item_id).await?.into_card()
}

/// Fetch an identity item and return its identity payload.
pub async fn identity<C>(client: &C, item_id: &str) -> ServeResult<Identity>
where
    C: HTTPClient + ?Sized,
{
    get(client, item_id).await?.into_identity()
}
