//! Session related API
//!
//! The vault server owns the lock state. These calls only ask it to change or
//! report that state; nothing is cached on the client side.

use hyper::Method;
use log::warn;
use serde::Serialize;

use crate::client::{execute, execute_json, Data, HTTPClient, NO_BODY};
use crate::error::{Error, ServeResult};
use crate::models::status::{ServerStatus, StatusTemplate};

#[derive(Serialize)]
struct UnlockRequest<'a> {
    password: &'a str,
}

#[derive(Serialize)]
struct LockRequest {}

/// Unlock the vault with the master password.
///
/// The server reports a rejected password only as `400 Bad Request`, so any
/// 400 from this endpoint is returned as [`Error::WrongPassword`], including
/// the rare case where the request itself was malformed.
pub async fn unlock<C>(client: &C, password: &str) -> ServeResult<()>
where
    C: HTTPClient + ?Sized,
{
    let body = UnlockRequest { password };

    match execute(client, Method::POST, "/unlock", Some(&body)).await {
        Ok(_) => Ok(()),
        Err(Error::BadRequest) => {
            warn!("vault server rejected the unlock request");
            Err(Error::WrongPassword)
        }
        Err(err) => Err(err),
    }
}

/// Lock the vault. Locking an already locked vault is left to the server.
pub async fn lock<C>(client: &C) -> ServeResult<()>
where
    C: HTTPClient + ?Sized,
{
    execute(client, Method::POST, "/lock", Some(&LockRequest {})).await?;
    Ok(())
}

/// Fetch the server status, including whether the vault is currently locked.
pub async fn status<C>(client: &C) -> ServeResult<ServerStatus>
where
    C: HTTPClient + ?Sized,
{
    let Data { data } =
        execute_json::<_, _, Data<StatusTemplate>>(client, Method::GET, "/status", NO_BODY)
            .await?;

    Ok(data.template)
}
