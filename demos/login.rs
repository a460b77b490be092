use std::time::Duration;

use bw_serve::error::ServeResult;
use bw_serve::serve::{Serve, ServeConfig};
use bw_serve::{items, session};

#[tokio::main]
async fn main() -> ServeResult<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let item_id = std::env::var("BW_ITEM_ID").expect("id of a login in BW_ITEM_ID");
    let password = std::env::var("BW_PASSWORD").expect("master password in BW_PASSWORD");

    let config = ServeConfig {
        port: 4628,
        startup_max_delay: Duration::from_secs(5),
        ..ServeConfig::default()
    };
    let serve = Serve::spawn(&config).await?;
    let client = serve.client();

    session::unlock(client, &password).await?;
    let login = items::login(client, &item_id).await;
    session::lock(client).await?;

    let login = login?;
    println!(
        "username: {}",
        login.username.as_deref().unwrap_or("<none>")
    );
    println!("has password: {}", login.password.is_some());

    serve.shutdown().await
}
