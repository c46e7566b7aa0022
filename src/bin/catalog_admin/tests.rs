#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use catalog_admin::application::notify::NotificationLog;
use catalog_admin::application::session::{MemoryTokenStore, Session};
use catalog_admin::config::{
    ApiSettings, AuthSettings, DisplaySettings, LogFormat, LoggingSettings, SessionSettings,
    Settings,
};
use catalog_admin::domain::forms::{CompanyInfoForm, ProductForm};
use catalog_admin_types::Language;
use clap::Parser;
use httpmock::MockServer;
use reqwest::Url;
use serde_json::json;
use tempfile::NamedTempFile;
use tracing::level_filters::LevelFilter;

use crate::args::{Cli, Commands, CompanyFields, ContactsCmd, ProductFields, ProductsCmd};
use crate::client::{CliError, Ctx};
use crate::console::is_affirmative;
use crate::handlers::{company, contacts, products};

fn settings(server: &MockServer) -> Settings {
    Settings {
        api: ApiSettings {
            base_url: Url::parse(&server.url("/api/")).expect("base url"),
            timeout: Duration::from_secs(5),
        },
        logging: LoggingSettings {
            level: LevelFilter::OFF,
            format: LogFormat::Compact,
        },
        session: SessionSettings {
            token_path: PathBuf::from("unused"),
        },
        auth: AuthSettings {
            username: "admin".into(),
            password: "admin123".into(),
        },
        display: DisplaySettings {
            language: Language::Uz,
        },
    }
}

fn ctx(server: &MockServer, token: Option<&str>, log: &Arc<NotificationLog>) -> Ctx {
    let store = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::default(),
    };
    let session = Session::initialize(Arc::new(store)).expect("session");
    Ctx::new(&settings(server), session, log.clone()).expect("ctx")
}

fn tmp_file(contents: &[u8], suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("tmp file");
    std::io::Write::write_all(&mut file, contents).expect("write tmp");
    file
}

#[test]
fn parses_product_update_with_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "catalog-admin",
        "products",
        "update",
        "12",
        "--price",
        "99.50",
        "--lang",
        "ru",
    ]);

    assert_eq!(cli.overrides.language.as_deref(), Some("ru"));
    match cli.command {
        Commands::Products(args) => match args.action {
            ProductsCmd::Update { id, fields } => {
                assert_eq!(id, 12);
                assert_eq!(fields.price.as_deref(), Some("99.50"));
                assert!(fields.name_uz.is_none());
            }
            other => panic!("wrong action parsed: {other:?}"),
        },
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parses_negative_coordinates() {
    let cli = Cli::parse_from([
        "catalog-admin",
        "company",
        "update",
        "--longitude",
        "-71.5",
    ]);

    match cli.command {
        Commands::Company(args) => match args.action {
            crate::args::CompanyCmd::Update(fields) => {
                assert_eq!(fields.longitude.as_deref(), Some("-71.5"));
            }
            crate::args::CompanyCmd::Show => panic!("wrong action parsed"),
        },
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn confirmation_accepts_only_yes() {
    assert!(is_affirmative("y\n"));
    assert!(is_affirmative(" YES "));
    assert!(!is_affirmative(""));
    assert!(!is_affirmative("no"));
}

#[test]
fn product_fields_override_only_given_values() -> Result<(), CliError> {
    let specs = tmp_file(br#"{"power": "5 kW"}"#, ".json");
    let image = tmp_file(b"\x89PNG", ".png");
    let mut form = ProductForm {
        name_uz: "Nasos".into(),
        name_ru: "Насос".into(),
        ..ProductForm::default()
    };

    products::apply_fields(
        &mut form,
        ProductFields {
            name_ru: Some("Водяной насос".into()),
            specifications_uz: Some("{}".into()),
            specifications_uz_file: Some(specs.path().to_path_buf()),
            image: Some(image.path().to_path_buf()),
            ..ProductFields::default()
        },
    )?;

    assert_eq!(form.name_uz, "Nasos");
    assert_eq!(form.name_ru, "Водяной насос");
    assert_eq!(form.specifications_uz, r#"{"power": "5 kW"}"#);
    assert_eq!(form.specifications_ru, "{}");
    let upload = form.image.expect("image attached");
    assert_eq!(upload.content_type, "image/png");
    assert_eq!(upload.bytes, b"\x89PNG");
    Ok(())
}

#[test]
fn missing_image_file_is_reported_with_path() {
    let mut form = ProductForm::default();
    let err = products::apply_fields(
        &mut form,
        ProductFields {
            image: Some(PathBuf::from("/nonexistent/photo.jpg")),
            ..ProductFields::default()
        },
    )
    .expect_err("missing file");

    match err {
        CliError::InputFile { path, .. } => assert_eq!(path, "/nonexistent/photo.jpg"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn company_fields_keep_untouched_values() {
    let mut form = CompanyInfoForm {
        phone: "+998 71 000 00 00".into(),
        latitude: "41.0".into(),
        ..CompanyInfoForm::default()
    };

    company::apply_fields(
        &mut form,
        CompanyFields {
            latitude: Some("41.3".into()),
            ..CompanyFields::default()
        },
    );

    assert_eq!(form.phone, "+998 71 000 00 00");
    assert_eq!(form.latitude, "41.3");
}

#[tokio::test]
async fn admin_commands_require_session() {
    let server = MockServer::start_async().await;
    let list = server
        .mock_async(|when, then| {
            when.method("GET");
            then.status(200).json_body(json!([]));
        })
        .await;

    let log = Arc::new(NotificationLog::default());
    let ctx = ctx(&server, None, &log);
    let err = contacts::handle(&ctx, ContactsCmd::List { search: None })
        .await
        .expect_err("no session");

    assert!(matches!(err, CliError::Auth(_)));
    assert_eq!(list.calls_async().await, 0);
}

#[tokio::test]
async fn product_create_posts_multipart_with_bearer() -> Result<(), CliError> {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method("POST")
                .path("/api/products/")
                .header("authorization", "Bearer tok")
                .header_includes("content-type", "multipart/form-data")
                .body_includes("name=\"price\"")
                .body_includes("120.00")
                .body_excludes("name=\"description_uz\"")
                .body_excludes("name=\"image\"");
            then.status(201).json_body(json!({"id": 3}));
        })
        .await;
    let list = server
        .mock_async(|when, then| {
            when.method("GET").path("/api/products/");
            then.status(200)
                .json_body(json!([{"id": 3, "name_uz": "Nasos", "name_ru": "Насос"}]));
        })
        .await;

    let log = Arc::new(NotificationLog::default());
    let ctx = ctx(&server, Some("tok"), &log);
    products::handle(
        &ctx,
        ProductsCmd::Create(ProductFields {
            name_uz: Some("Nasos".into()),
            name_ru: Some("Насос".into()),
            price: Some("120.00".into()),
            ..ProductFields::default()
        }),
    )
    .await?;

    create.assert_async().await;
    list.assert_async().await;
    assert_eq!(
        log.last().expect("notification").text,
        "Product created successfully"
    );
    Ok(())
}

#[tokio::test]
async fn product_delete_with_yes_skips_prompt() -> Result<(), CliError> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method("GET").path("/api/products/");
            then.status(200).json_body(json!([{"id": 4, "name_uz": "Klapan"}]));
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method("DELETE").path("/api/products/4/");
            then.status(204);
        })
        .await;

    let log = Arc::new(NotificationLog::default());
    let ctx = ctx(&server, Some("tok"), &log);
    products::handle(&ctx, ProductsCmd::Delete { id: 4, yes: true }).await?;

    delete.assert_async().await;
    assert_eq!(
        log.last().expect("notification").text,
        "Product deleted successfully"
    );
    Ok(())
}
