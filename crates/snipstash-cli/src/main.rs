use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use sqlx::postgres::PgPool;

use snipstash_cli::seeder::{self, ItemSeedConfig};
use snipstash_config::DatabaseConfig;
use snipstash_db::{MIGRATOR, PgUserStore, pool_options};

#[derive(Parser)]
#[command(name = "snipstash-cli")]
#[command(about = "Snipstash CLI - Administrative tools for Snipstash", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Create a user account
    CreateUser {
        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake items
    SeedItems {
        /// Number of items to create
        #[arg(short = 'c', long, default_value = "20")]
        count: usize,

        /// Value stored as `user_id` on every item
        #[arg(long)]
        owner: Option<String>,
    },
    /// Delete every item
    ClearItems,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();
    let pool = connect(&DatabaseConfig::from_env()).await;

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::CreateUser { email, password } => {
            handle_create_user(&pool, email, password).await
        }
        Commands::SeedItems { count, owner } => handle_seed_items(&pool, count, owner).await,
        Commands::ClearItems => handle_clear_items(&pool).await,
    }
}

async fn connect(config: &DatabaseConfig) -> PgPool {
    let Some(url) = config.url.as_deref() else {
        eprintln!("❌ DATABASE_URL must be set");
        std::process::exit(1);
    };

    match pool_options(config).connect(url).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_migrate(pool: &PgPool) {
    match MIGRATOR.run(pool).await {
        Ok(()) => println!("✅ Migrations applied"),
        Err(e) => {
            eprintln!("\n❌ Error applying migrations: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_create_user(pool: &PgPool, email: Option<String>, password: Option<String>) {
    let email = match email {
        Some(email) => email,
        None => Input::new()
            .with_prompt("Email address")
            .interact_text()
            .unwrap_or_else(|e| exit_with("Failed to read email", e)),
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .unwrap_or_else(|e| exit_with("Failed to read password", e)),
    };

    let store = PgUserStore::new(pool.clone());
    match seeder::create_user(&store, &email, &password).await {
        Ok(user) => {
            println!("\n✅ User created successfully!");
            println!("   Email: {}", user.email);
            println!("   ID: {}", user.id);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating user: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed_items(pool: &PgPool, count: usize, owner: Option<String>) {
    let mut config = ItemSeedConfig::new(count);
    if let Some(owner) = owner {
        config = config.with_owner(owner);
    }

    match seeder::seed_items(pool, config).await {
        Ok(inserted) => println!("✅ Created {} items", inserted),
        Err(e) => {
            eprintln!("\n❌ Error seeding items: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear_items(pool: &PgPool) {
    match seeder::clear_items(pool).await {
        Ok(_) => println!("✅ Cleared all items"),
        Err(e) => {
            eprintln!("\n❌ Error clearing items: {}", e);
            std::process::exit(1);
        }
    }
}

fn exit_with(context: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("❌ {}: {}", context, err);
    std::process::exit(1);
}
