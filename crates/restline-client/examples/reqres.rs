//! Drive a reqres-style user API with the declarative client:
//! list users with a query parameter, create a user from body parameters,
//! then fetch a single user and download their avatar.
//!
//! ```sh
//! cargo run -p restline-client --example reqres
//! ```

use serde::Deserialize;

use restline_client::{Method, RestClient, RestConfig};

const BASE_URL: &str = "https://reqres.in/api/";

#[derive(Debug, Deserialize)]
struct UserPage {
    page: u32,
    data: Vec<User>,
}

#[derive(Debug, Deserialize)]
struct User {
    id: u32,
    email: String,
    first_name: String,
    last_name: String,
    avatar: String,
}

#[derive(Debug, Deserialize)]
struct SingleUser {
    data: User,
}

#[derive(Debug, Deserialize)]
struct CreatedUser {
    name: String,
    job: String,
    id: String,
    #[serde(rename = "createdAt")]
    created_at: String,
}

async fn list_users() -> restline_client::RestResult<()> {
    let mut client = RestClient::new(RestConfig::new(BASE_URL));
    client.add_query_param("page", "1");

    let outcome = client.execute("users", Method::Get).await?;
    println!("GET users -> {}", outcome.response.status);

    if outcome.response.is_success() {
        let page: UserPage = outcome.json()?;
        println!("page {} holds {} users", page.page, page.data.len());
        for user in &page.data {
            println!("  #{} {} {} <{}>", user.id, user.first_name, user.last_name, user.email);
        }
    }

    println!("response headers:");
    for (name, value) in outcome.response.headers.iter() {
        println!("  {}: {}", name, value);
    }
    Ok(())
}

async fn create_user() -> restline_client::RestResult<()> {
    let mut client = RestClient::new(RestConfig::new(BASE_URL));
    client.add_header("Content-Type", "application/json");
    client.add_body_param("name", "John");
    client.add_body_param("job", "Developer");

    let outcome = client.execute("users", Method::Post).await?;
    println!("POST users -> {}", outcome.response.status);

    if outcome.response.status == 201 {
        let created: CreatedUser = outcome.json()?;
        println!(
            "created {} ({}) with id {} at {}",
            created.name, created.job, created.id, created.created_at
        );
    }
    Ok(())
}

async fn download_avatar() -> restline_client::RestResult<()> {
    let client = RestClient::new(RestConfig::new(BASE_URL));

    let outcome = client.execute("users/1", Method::Get).await?;
    println!("GET users/1 -> {}", outcome.response.status);
    if !outcome.response.is_success() {
        return Ok(());
    }

    let user: SingleUser = outcome.json()?;
    match client.fetch_bytes(&user.data.avatar).await {
        Some(bytes) => {
            let path = std::env::temp_dir().join("avatar.jpg");
            if std::fs::write(&path, &bytes).is_ok() {
                println!("saved {} avatar bytes to {}", bytes.len(), path.display());
            }
        }
        None => println!("avatar download failed"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> restline_client::RestResult<()> {
    let _ = tracing_subscriber::fmt::try_init();

    list_users().await?;
    create_user().await?;
    download_avatar().await?;

    Ok(())
}
