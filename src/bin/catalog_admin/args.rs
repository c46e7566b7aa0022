//! Command-line surface for `catalog-admin`.

#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use catalog_admin::config::GlobalOverrides;
use clap::{Args, Parser, Subcommand, ValueHint};

#[derive(Parser, Debug)]
#[command(
    name = "catalog-admin",
    version,
    about = "Back-office CLI for the bilingual product catalog",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: GlobalOverrides,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an admin session
    Login(LoginArgs),
    /// End the admin session and forget the stored token
    Logout,
    /// Show whether an admin session is active
    Status,
    /// Product catalog management
    Products(ProductsArgs),
    /// News management
    News(NewsArgs),
    /// Contact form submissions (read and delete)
    Contacts(ContactsArgs),
    /// Company profile
    Company(CompanyArgs),
    /// Overview counters and recent entries
    Dashboard,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long, env = "CATALOG_ADMIN_USERNAME")]
    pub username: String,

    /// Read the password from a file instead of the prompt
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub password_file: Option<PathBuf>,

    /// Password from env (no flag, keeps it out of shell history)
    #[arg(hide = true, env = "CATALOG_ADMIN_PASSWORD", hide_env_values = true)]
    pub password_env: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListFilter {
    /// Case-insensitive substring matched in the active language
    #[arg(long)]
    pub search: Option<String>,
    /// Exact category in the active language, or `all`
    #[arg(long, default_value = "all")]
    pub category: String,
}

#[derive(Parser, Debug)]
pub struct ProductsArgs {
    #[command(subcommand)]
    pub action: ProductsCmd,
}

#[derive(Subcommand, Debug)]
pub enum ProductsCmd {
    /// List products, optionally filtered
    List(ListFilter),
    /// Distinct categories in the active language
    Categories,
    /// Show one product
    View { id: u64 },
    /// Create a product
    Create(ProductFields),
    /// Replace a product; omitted fields keep their stored values
    Update {
        id: u64,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProductFields {
    #[arg(long)]
    pub name_uz: Option<String>,
    #[arg(long)]
    pub name_ru: Option<String>,
    #[arg(long)]
    pub description_uz: Option<String>,
    #[arg(long)]
    pub description_ru: Option<String>,
    #[arg(long)]
    pub category_uz: Option<String>,
    #[arg(long)]
    pub category_ru: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    /// Image file to upload
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub image: Option<PathBuf>,
    /// Specifications as a JSON object
    #[arg(long)]
    pub specifications_uz: Option<String>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub specifications_uz_file: Option<PathBuf>,
    /// Specifications as a JSON object
    #[arg(long)]
    pub specifications_ru: Option<String>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub specifications_ru_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct NewsArgs {
    #[command(subcommand)]
    pub action: NewsCmd,
}

#[derive(Subcommand, Debug)]
pub enum NewsCmd {
    /// List news items, optionally filtered
    List(ListFilter),
    /// Show one news item
    View { id: u64 },
    /// Publish a news item
    Create(NewsFields),
    /// Replace a news item; omitted fields keep their stored values
    Update {
        id: u64,
        #[command(flatten)]
        fields: NewsFields,
    },
    /// Delete a news item
    Delete {
        id: u64,
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct NewsFields {
    #[arg(long)]
    pub title_uz: Option<String>,
    #[arg(long)]
    pub title_ru: Option<String>,
    #[arg(long)]
    pub content_uz: Option<String>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub content_uz_file: Option<PathBuf>,
    #[arg(long)]
    pub content_ru: Option<String>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub content_ru_file: Option<PathBuf>,
    #[arg(long)]
    pub category_uz: Option<String>,
    #[arg(long)]
    pub category_ru: Option<String>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub image: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ContactsArgs {
    #[command(subcommand)]
    pub action: ContactsCmd,
}

#[derive(Subcommand, Debug)]
pub enum ContactsCmd {
    /// List submissions, optionally filtered by name, email or company
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one submission
    View { id: u64 },
    /// Delete a submission
    Delete {
        id: u64,
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Parser, Debug)]
pub struct CompanyArgs {
    #[command(subcommand)]
    pub action: CompanyCmd,
}

#[derive(Subcommand, Debug)]
pub enum CompanyCmd {
    /// Show the stored company profile
    Show,
    /// Replace the company profile; omitted fields keep their stored values
    Update(CompanyFields),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CompanyFields {
    #[arg(long)]
    pub about_uz: Option<String>,
    #[arg(long)]
    pub about_ru: Option<String>,
    #[arg(long)]
    pub history_uz: Option<String>,
    #[arg(long)]
    pub history_ru: Option<String>,
    #[arg(long)]
    pub mission_uz: Option<String>,
    #[arg(long)]
    pub mission_ru: Option<String>,
    #[arg(long)]
    pub vision_uz: Option<String>,
    #[arg(long)]
    pub vision_ru: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub telegram: Option<String>,
    #[arg(long)]
    pub address_uz: Option<String>,
    #[arg(long)]
    pub address_ru: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<String>,
    #[arg(long)]
    pub employees_count: Option<String>,
    #[arg(long)]
    pub established_year: Option<String>,
}
