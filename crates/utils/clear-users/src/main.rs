//! # Clear Users Utility
//!
//! Deletes every user account from the database. Meant for resetting
//! development and staging environments; never point it at production data.
//!
//! ```bash
//! cargo run --package clear-users --bin clear_users
//! ```
//!
//! Reads `DATABASE_URL` from the environment (same default as the backend),
//! reports how many accounts exist, and asks for confirmation before
//! deleting anything.

use lib_core::create_pool;
use lib_core::model::store::UserRepository;
use lib_utils::envs::get_env_or;
use std::io::{self, Write};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    println!("== FlowGen clear-users ==");
    println!();
    println!("This removes EVERY user account. There is no undo.");
    println!();

    let database_url = get_env_or("DATABASE_URL", "sqlite:data/flowgen.db");
    println!("Database: {}", database_url);

    let pool = create_pool(&database_url).await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&pool)
        .await?;

    if count == 0 {
        println!("No users in the database; nothing to do.");
        return Ok(());
    }

    print!("Delete all {} user(s)? (yes/no): ", count);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        println!("Aborted; nothing was deleted.");
        return Ok(());
    }

    let deleted = UserRepository::delete_all(&pool).await?;
    println!("Deleted {} user(s).", deleted);

    Ok(())
}
