//! In-process stand-in for `bw serve`, bound to an ephemeral loopback port.
#![allow(dead_code)]

use std::convert::Infallible;
use std::net::SocketAddr;
use std::time::Duration;

use hyper::header::CONTENT_TYPE;
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Method, Request, Response, Server, StatusCode};

pub const PASSWORD: &str = "hunter2";
pub const LOGIN_ID: &str = "1d4cf845-8012-4b2d-a924-f9d8c9b7c44a";
pub const NOTE_ID: &str = "382a9d7b-f6b5-4eaa-92a1-1f3c7d89e48f";
pub const SLOW_ID: &str = "slow";
pub const SLOW_DELAY: Duration = Duration::from_secs(2);

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Start the fake server and return its base URL.
pub async fn start() -> String {
    let make_service =
        make_service_fn(|_conn| async { Ok::<_, Infallible>(service_fn(handle)) });
    let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_service);
    let addr = server.local_addr();

    tokio::spawn(server);
    format!("http://{}", addr)
}

/// A loopback port nothing is listening on.
pub fn unused_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn login_item() -> String {
    format!(
        r#"{{"success":true,"data":{{"object":"item","id":"{}","organizationId":null,"folderId":null,"type":1,"reprompt":0,"name":"Database","notes":null,"favorite":true,"fields":[{{"name":"env","value":"prod","type":0}}],"login":{{"uris":[{{"match":null,"uri":"postgres://db"}}],"username":"app","password":"s3cret","totp":null,"passwordRevisionDate":null}},"collectionIds":[],"revisionDate":"2021-07-05T16:55:35.966Z","creationDate":"2021-07-05T16:55:35.966Z","deletedDate":null}}}}"#,
        LOGIN_ID
    )
}

fn note_item() -> String {
    format!(
        r#"{{"success":true,"data":{{"object":"item","id":"{}","type":2,"reprompt":1,"name":"ENV","notes":"hello","favorite":false,"secureNote":{{"type":0}},"collectionIds":[],"creationDate":"2023-01-01T00:00:00Z","revisionDate":null,"deletedDate":null}}}}"#,
        NOTE_ID
    )
}

const STATUS: &str = r#"{"success":true,"data":{"object":"template","template":{"serverUrl":"https://vault.example.com","lastSync":"2020-06-16T06:33:51.419Z","userEmail":"user@example.com","userId":"00000000-0000-0000-0000-000000000000","status":"locked"}}}"#;

async fn handle(request: Request<Body>) -> Result<Response<Body>, Infallible> {
    let (parts, body) = request.into_parts();
    let body = hyper::body::to_bytes(body).await.unwrap_or_default();
    let is_json = parts
        .headers
        .get(CONTENT_TYPE)
        .map(|v| v == "application/json")
        .unwrap_or(false);

    let (status, payload) = match (parts.method, parts.uri.path()) {
        (Method::POST, "/unlock") if is_json => {
            let request: serde_json::Value = serde_json::from_slice(&body).unwrap_or_default();
            if request["password"] == PASSWORD {
                (StatusCode::OK, r#"{"success":true}"#.to_string())
            } else {
                (StatusCode::BAD_REQUEST, r#"{"success":false}"#.to_string())
            }
        }
        (Method::POST, "/lock") if is_json && &body[..] == b"{}" => {
            (StatusCode::OK, r#"{"success":true}"#.to_string())
        }
        (Method::GET, "/status") => (StatusCode::OK, STATUS.to_string()),
        (Method::GET, path) if path.starts_with("/object/item/") => {
            match &path["/object/item/".len()..] {
                LOGIN_ID => (StatusCode::OK, login_item()),
                NOTE_ID => (StatusCode::OK, note_item()),
                SLOW_ID => {
                    tokio::time::sleep(SLOW_DELAY).await;
                    (StatusCode::OK, note_item())
                }
                _ => (StatusCode::NOT_FOUND, r#"{"success":false}"#.to_string()),
            }
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
    };

    let response = Response::builder()
        .status(status)
        .body(Body::from(payload))
        .unwrap_or_default();
    Ok(response)
}
