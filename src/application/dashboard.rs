//! Overview counters and most recent entries across the collections.

use catalog_admin_types::{ContactSubmission, NewsItem, Product};
use serde::Serialize;
use time::OffsetDateTime;
use tracing::debug;

use crate::infra::http::ApiClient;

use super::error::AppError;
use super::resource::{Contacts, News, Products, Resource};

pub const RECENT_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub products: usize,
    pub news: usize,
    pub contacts: usize,
    pub contacts_this_month: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub recent_products: Vec<Product>,
    pub recent_news: Vec<NewsItem>,
    pub recent_contacts: Vec<ContactSubmission>,
}

impl Dashboard {
    pub fn compute(
        mut products: Vec<Product>,
        mut news: Vec<NewsItem>,
        mut contacts: Vec<ContactSubmission>,
        now: OffsetDateTime,
    ) -> Self {
        let now = now.to_offset(time::UtcOffset::UTC);
        let contacts_this_month = contacts
            .iter()
            .filter_map(|c| c.created_at)
            .map(|ts| ts.to_offset(time::UtcOffset::UTC))
            .filter(|ts| ts.year() == now.year() && ts.month() == now.month())
            .count();

        let stats = DashboardStats {
            products: products.len(),
            news: news.len(),
            contacts: contacts.len(),
            contacts_this_month,
        };

        // Products carry no timestamp; ids are assigned in creation order.
        products.sort_by(|a, b| b.id.cmp(&a.id));
        products.truncate(RECENT_LIMIT);
        news.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        news.truncate(RECENT_LIMIT);
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        contacts.truncate(RECENT_LIMIT);

        Self {
            stats,
            recent_products: products,
            recent_news: news,
            recent_contacts: contacts,
        }
    }

    /// Fetches the three collections concurrently.
    pub async fn collect(api: &ApiClient, now: OffsetDateTime) -> Result<Self, AppError> {
        let (products, news, contacts) = tokio::try_join!(
            api.get_json::<Vec<Product>>(Products::ENDPOINT),
            api.get_json::<Vec<NewsItem>>(News::ENDPOINT),
            api.get_json::<Vec<ContactSubmission>>(Contacts::ENDPOINT),
        )?;
        debug!(
            products = products.len(),
            news = news.len(),
            contacts = contacts.len(),
            "dashboard collections fetched"
        );
        Ok(Self::compute(products, news, contacts, now))
    }
}
