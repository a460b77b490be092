use bw_serve::error::ServeResult;
use bw_serve::{client::Client, items, session};

#[tokio::main]
async fn main() -> ServeResult<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let item_id = std::env::var("BW_ITEM_ID").expect("id of a secure note in BW_ITEM_ID");
    let password = std::env::var("BW_PASSWORD").expect("master password in BW_PASSWORD");

    // BW_SERVE_URL, defaults to http://localhost:8087
    let client = Client::default();

    session::unlock(&client, &password).await?;
    let note = items::secure_note(&client, &item_id).await;

    // Lock again even if the read failed
    session::lock(&client).await?;

    println!("{}", note?);
    Ok(())
}
