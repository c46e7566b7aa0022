#![deny(clippy::all, clippy::pedantic)]

use catalog_admin::application::manager::DeleteOutcome;
use catalog_admin::application::resource::News;
use catalog_admin::domain::forms::NewsForm;
use catalog_admin_types::{Language, NewsItem, RecordId, format_timestamp};
use serde::Serialize;

use super::{apply_filter, assign};
use crate::args::{ListFilter, NewsCmd, NewsFields};
use crate::client::{CliError, Ctx};
use crate::console::PromptConfirm;
use crate::io::{read_image, read_opt_value};
use crate::print::print_json;

pub async fn handle(ctx: &Ctx, cmd: NewsCmd) -> Result<(), CliError> {
    ctx.require_session()?;
    match cmd {
        NewsCmd::List(filter) => list(ctx, filter).await,
        NewsCmd::View { id } => view(ctx, id).await,
        NewsCmd::Create(fields) => create(ctx, fields).await,
        NewsCmd::Update { id, fields } => update(ctx, id, fields).await,
        NewsCmd::Delete { id, yes } => delete(ctx, id, yes).await,
    }
}

#[derive(Debug, Serialize)]
struct NewsRow<'a> {
    id: RecordId,
    title: &'a str,
    category: &'a str,
    published: Option<String>,
}

impl<'a> NewsRow<'a> {
    fn new(item: &'a NewsItem, lang: Language) -> Self {
        Self {
            id: item.id,
            title: item.title(lang),
            category: item.category(lang),
            published: item.created_at.map(|ts| format_timestamp(ts, lang)),
        }
    }
}

async fn list(ctx: &Ctx, filter: ListFilter) -> Result<(), CliError> {
    let mut news = ctx.manager::<News>();
    news.load().await?;
    apply_filter(&mut news, filter);

    let lang = news.query().language;
    let rows: Vec<NewsRow<'_>> = news
        .filtered()
        .into_iter()
        .map(|item| NewsRow::new(item, lang))
        .collect();
    print_json(&rows)
}

async fn view(ctx: &Ctx, id: u64) -> Result<(), CliError> {
    let mut news = ctx.manager::<News>();
    news.load().await?;
    let item = news.view(RecordId(id))?;
    print_json(item)
}

async fn create(ctx: &Ctx, fields: NewsFields) -> Result<(), CliError> {
    let mut news = ctx.manager::<News>();
    apply_fields(news.open_create()?, fields)?;
    news.submit().await?;
    Ok(())
}

async fn update(ctx: &Ctx, id: u64, fields: NewsFields) -> Result<(), CliError> {
    let mut news = ctx.manager::<News>();
    news.load().await?;
    apply_fields(news.open_edit(RecordId(id))?, fields)?;
    news.submit().await?;
    Ok(())
}

async fn delete(ctx: &Ctx, id: u64, yes: bool) -> Result<(), CliError> {
    let mut news = ctx.manager::<News>();
    news.load().await?;
    if news.delete(RecordId(id), &PromptConfirm::new(yes)).await? == DeleteOutcome::Cancelled {
        eprintln!("Cancelled");
    }
    Ok(())
}

pub(crate) fn apply_fields(form: &mut NewsForm, fields: NewsFields) -> Result<(), CliError> {
    let NewsFields {
        title_uz,
        title_ru,
        content_uz,
        content_uz_file,
        content_ru,
        content_ru_file,
        category_uz,
        category_ru,
        image,
    } = fields;

    assign(&mut form.title_uz, title_uz);
    assign(&mut form.title_ru, title_ru);
    assign(&mut form.content_uz, read_opt_value(content_uz, content_uz_file)?);
    assign(&mut form.content_ru, read_opt_value(content_ru, content_ru_file)?);
    assign(&mut form.category_uz, category_uz);
    assign(&mut form.category_ru, category_ru);
    if let Some(upload) = read_image(image)? {
        form.image = Some(upload);
    }
    Ok(())
}
