use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use userflow::{
    AuthenticateUserUseCase, Database, GetUserInfoUseCase, InMemoryUserStorage,
    RegisterUserUseCase, StubDatabase, UserRepository,
};

#[derive(Parser)]
#[command(name = "userflow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,

    #[arg(long, default_value = "sqlite://demo.db")]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    println!("User management demo");

    let database = Arc::new(StubDatabase::new(&cli.database_url));
    let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserStorage::new());

    match database.connect().await {
        Ok(()) => {
            println!("Database connection established");

            let register = RegisterUserUseCase::new(user_repo.clone());
            let authenticate = AuthenticateUserUseCase::new(user_repo.clone());
            let get_info = GetUserInfoUseCase::new(user_repo.clone());

            match register.execute("john_doe", "john@example.com").await {
                Ok(user) => println!("User created: {}", user.username()),
                Err(e) => println!("User creation failed: {}", e),
            }

            if authenticate.execute("john_doe", "password123").await? {
                println!("User authenticated");
            } else {
                println!("Authentication failed");
            }

            if let Some(user) = get_info.execute("john_doe").await? {
                println!("User info: {}", serde_json::to_string(&user)?);
            }

            database.close().await?;
            info!("Demo complete");
        }
        Err(e) => {
            println!("Database connection failed: {}", e);
        }
    }

    Ok(())
}
