#![deny(clippy::all, clippy::pedantic)]

use catalog_admin::application::manager::DeleteOutcome;
use catalog_admin::application::resource::Products;
use catalog_admin::domain::forms::ProductForm;
use catalog_admin_types::{Language, Product, RecordId};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{apply_filter, assign};
use crate::args::{ListFilter, ProductFields, ProductsCmd};
use crate::client::{CliError, Ctx};
use crate::console::PromptConfirm;
use crate::io::{read_image, read_opt_value};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: ProductsCmd) -> Result<(), CliError> {
    ctx.require_session()?;
    match cmd {
        ProductsCmd::List(filter) => list(ctx, filter).await,
        ProductsCmd::Categories => categories(ctx).await,
        ProductsCmd::View { id } => view(ctx, id).await,
        ProductsCmd::Create(fields) => create(ctx, fields).await,
        ProductsCmd::Update { id, fields } => update(ctx, id, fields).await,
        ProductsCmd::Delete { id, yes } => delete(ctx, id, yes).await,
    }
}

#[derive(Debug, Serialize)]
struct ProductRow<'a> {
    id: RecordId,
    name: &'a str,
    category: &'a str,
    price: Option<Decimal>,
    image: Option<&'a str>,
}

impl<'a> ProductRow<'a> {
    fn new(product: &'a Product, lang: Language) -> Self {
        Self {
            id: product.id,
            name: product.name(lang),
            category: product.category(lang),
            price: product.price,
            image: product.image_link(),
        }
    }
}

async fn list(ctx: &Ctx, filter: ListFilter) -> Result<(), CliError> {
    let mut products = ctx.manager::<Products>();
    products.load().await?;
    apply_filter(&mut products, filter);

    let lang = products.query().language;
    let rows: Vec<ProductRow<'_>> = products
        .filtered()
        .into_iter()
        .map(|p| ProductRow::new(p, lang))
        .collect();
    print_json(&rows)
}

async fn categories(ctx: &Ctx) -> Result<(), CliError> {
    let mut products = ctx.manager::<Products>();
    products.load().await?;
    print_json(&products.categories())
}

async fn view(ctx: &Ctx, id: u64) -> Result<(), CliError> {
    let mut products = ctx.manager::<Products>();
    products.load().await?;
    let product = products.view(RecordId(id))?;
    print_json(product)
}

async fn create(ctx: &Ctx, fields: ProductFields) -> Result<(), CliError> {
    let mut products = ctx.manager::<Products>();
    apply_fields(products.open_create()?, fields)?;
    products.submit().await?;
    Ok(())
}

async fn update(ctx: &Ctx, id: u64, fields: ProductFields) -> Result<(), CliError> {
    let mut products = ctx.manager::<Products>();
    products.load().await?;
    apply_fields(products.open_edit(RecordId(id))?, fields)?;
    products.submit().await?;
    Ok(())
}

async fn delete(ctx: &Ctx, id: u64, yes: bool) -> Result<(), CliError> {
    let mut products = ctx.manager::<Products>();
    products.load().await?;
    if products.delete(RecordId(id), &PromptConfirm::new(yes)).await? == DeleteOutcome::Cancelled {
        eprintln!("Cancelled");
    }
    Ok(())
}

pub(crate) fn apply_fields(form: &mut ProductForm, fields: ProductFields) -> Result<(), CliError> {
    let ProductFields {
        name_uz,
        name_ru,
        description_uz,
        description_ru,
        category_uz,
        category_ru,
        price,
        image,
        specifications_uz,
        specifications_uz_file,
        specifications_ru,
        specifications_ru_file,
    } = fields;

    assign(&mut form.name_uz, name_uz);
    assign(&mut form.name_ru, name_ru);
    assign(&mut form.description_uz, description_uz);
    assign(&mut form.description_ru, description_ru);
    assign(&mut form.category_uz, category_uz);
    assign(&mut form.category_ru, category_ru);
    assign(&mut form.price, price);
    assign(
        &mut form.specifications_uz,
        read_opt_value(specifications_uz, specifications_uz_file)?,
    );
    assign(
        &mut form.specifications_ru,
        read_opt_value(specifications_ru, specifications_ru_file)?,
    );
    if let Some(upload) = read_image(image)? {
        form.image = Some(upload);
    }
    Ok(())
}
