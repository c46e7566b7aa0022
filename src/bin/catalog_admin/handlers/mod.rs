#![deny(clippy::all, clippy::pedantic)]

pub mod auth;
pub mod company;
pub mod contacts;
pub mod dashboard;
pub mod news;
pub mod products;

use catalog_admin::application::manager::ResourceManager;
use catalog_admin::application::resource::Resource;
use catalog_admin::domain::search::CategoryFilter;

use crate::args::ListFilter;

pub(crate) fn apply_filter<R: Resource>(manager: &mut ResourceManager<R>, filter: ListFilter) {
    if let Some(term) = filter.search {
        manager.set_search(term);
    }
    manager.set_category(
        filter
            .category
            .parse::<CategoryFilter>()
            .unwrap_or_default(),
    );
}

/// Overwrites a form field only when a value was supplied.
pub(crate) fn assign(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}
