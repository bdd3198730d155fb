//! Leve&Bem CLI - command-line access to the REST API.
//!
//! # Usage
//!
//! ```bash
//! # Catalog, filtered and sorted like the storefront
//! lb-cli produtos list --categoria 1 --busca wrap --ordem asc
//!
//! # Single records and server-side searches
//! lb-cli produtos show 14
//! lb-cli produtos search "suco verde"
//! lb-cli produtos recomendacoes 14
//! lb-cli categorias search Bebidas
//!
//! # Deletes
//! lb-cli categorias delete 3
//! lb-cli usuarios delete 9
//! ```
//!
//! # Environment Variables
//!
//! - `LEVE_BEM_API_URL` - API origin, overridden by `--api-url`

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use leve_bem_core::api::{ApiClient, DEFAULT_BASE_URL};
use leve_bem_core::{CatalogQuery, CategoryId, PriceSort, ProductId, UserId};

mod commands;

#[derive(Parser)]
#[command(name = "lb-cli")]
#[command(author, version, about = "Leve&Bem CLI tools")]
struct Cli {
    /// Leve&Bem API origin
    #[arg(long, global = true, env = "LEVE_BEM_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Products (`/alimentacao`)
    Produtos {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Categories (`/categoria`)
    Categorias {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Users (`/usuarios`)
    Usuarios {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Only products of this category id
        #[arg(long)]
        categoria: Option<CategoryId>,

        /// Only names containing this text (case-insensitive)
        #[arg(long, default_value = "")]
        busca: String,

        /// Price order: `asc` or `desc`
        #[arg(long)]
        ordem: Option<PriceSort>,
    },
    /// Show one product
    Show { id: ProductId },
    /// Search by name on the server
    Search { nome: String },
    /// Products recommended with this one
    Recomendacoes { id: ProductId },
    /// Delete a product
    Delete { id: ProductId },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List categories
    List,
    /// Show one category
    Show { id: CategoryId },
    /// Search by description on the server
    Search { descricao: String },
    /// Delete a category
    Delete { id: CategoryId },
}

#[derive(Subcommand)]
enum UserAction {
    /// List users
    List,
    /// Show one user
    Show { id: UserId },
    /// Delete a user
    Delete { id: UserId },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load .env before clap reads LEVE_BEM_API_URL
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let api = ApiClient::new(&cli.api_url)?;
    tracing::debug!(api_url = %api.base_url(), "Using Leve&Bem API");

    match cli.command {
        Commands::Produtos { action } => match action {
            ProductAction::List {
                categoria,
                busca,
                ordem,
            } => {
                let query = CatalogQuery {
                    category: categoria,
                    search: busca,
                    sort: ordem,
                };
                commands::products::list(&api, &query).await?;
            }
            ProductAction::Show { id } => commands::products::show(&api, id).await?,
            ProductAction::Search { nome } => commands::products::search(&api, &nome).await?,
            ProductAction::Recomendacoes { id } => {
                commands::products::recommendations(&api, id).await?;
            }
            ProductAction::Delete { id } => commands::products::delete(&api, id).await?,
        },
        Commands::Categorias { action } => match action {
            CategoryAction::List => commands::categories::list(&api).await?,
            CategoryAction::Show { id } => commands::categories::show(&api, id).await?,
            CategoryAction::Search { descricao } => {
                commands::categories::search(&api, &descricao).await?;
            }
            CategoryAction::Delete { id } => commands::categories::delete(&api, id).await?,
        },
        Commands::Usuarios { action } => match action {
            UserAction::List => commands::users::list(&api).await?,
            UserAction::Show { id } => commands::users::show(&api, id).await?,
            UserAction::Delete { id } => commands::users::delete(&api, id).await?,
        },
    }
    Ok(())
}
