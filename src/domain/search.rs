//! Client-side search and category filtering over a loaded list.

use std::str::FromStr;

use catalog_admin_types::{ContactSubmission, Language, NewsItem, Product};

/// Text a record exposes to search and category matching for one language.
pub trait Searchable {
    fn search_fields(&self, lang: Language) -> Vec<&str>;

    fn category(&self, _lang: Language) -> Option<&str> {
        None
    }
}

impl Searchable for Product {
    fn search_fields(&self, lang: Language) -> Vec<&str> {
        vec![self.name(lang), self.description(lang)]
    }

    fn category(&self, lang: Language) -> Option<&str> {
        Some(Product::category(self, lang))
    }
}

impl Searchable for NewsItem {
    fn search_fields(&self, lang: Language) -> Vec<&str> {
        vec![self.title(lang), self.content(lang)]
    }

    fn category(&self, lang: Language) -> Option<&str> {
        Some(NewsItem::category(self, lang))
    }
}

// Submissions are not bilingual.
impl Searchable for ContactSubmission {
    fn search_fields(&self, _lang: Language) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        if let Some(company) = self.company.as_deref() {
            fields.push(company);
        }
        fields
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            Ok(Self::Only(s.to_string()))
        }
    }
}

/// Search term, category selection and active language of a list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub term: String,
    pub category: CategoryFilter,
    pub language: Language,
}

impl ListQuery {
    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        let needle = self.term.to_lowercase();
        let term_matches = needle.is_empty()
            || record
                .search_fields(self.language)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));

        let category_matches = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => {
                record.category(self.language) == Some(selected.as_str())
            }
        };

        term_matches && category_matches
    }
}

pub fn filter<'a, T: Searchable>(records: &'a [T], query: &ListQuery) -> Vec<&'a T> {
    records.iter().filter(|r| query.matches(*r)).collect()
}

/// Distinct non-blank categories in the given language, in first-seen order.
pub fn categories<T: Searchable>(records: &[T], lang: Language) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for category in records.iter().filter_map(|r| r.category(lang)) {
        if !category.trim().is_empty() && !seen.iter().any(|c| c == category) {
            seen.push(category.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use catalog_admin_types::RecordId;

    use super::*;

    fn product(id: u64, uz: (&str, &str, &str), ru: (&str, &str, &str)) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name_uz": uz.0, "description_uz": uz.1, "category_uz": uz.2,
            "name_ru": ru.0, "description_ru": ru.1, "category_ru": ru.2,
        }))
        .expect("product")
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(
                1,
                ("Suv nasosi", "Markazdan qochma", "Nasoslar"),
                ("Водяной насос", "Центробежный", "Насосы"),
            ),
            product(
                2,
                ("Kompressor", "Havo uchun nasos", "Kompressorlar"),
                ("Компрессор", "Воздушный", "Компрессоры"),
            ),
            product(
                3,
                ("Klapan", "Po'lat", "Armatura"),
                ("Клапан", "Стальной", "Арматура"),
            ),
        ]
    }

    fn ids(records: &[&Product]) -> Vec<RecordId> {
        records.iter().map(|p| p.id).collect()
    }

    #[test]
    fn empty_term_returns_everything() {
        let catalog = catalog();
        let query = ListQuery::default();
        assert_eq!(filter(&catalog, &query).len(), catalog.len());
    }

    #[test]
    fn term_matches_name_or_description_case_insensitively() {
        let catalog = catalog();
        let query = ListQuery {
            term: "NASOS".into(),
            ..ListQuery::default()
        };
        assert_eq!(ids(&filter(&catalog, &query)), vec![RecordId(1), RecordId(2)]);

        for record in filter(&catalog, &query) {
            let haystack = record.search_fields(Language::Uz).join(" ").to_lowercase();
            assert!(haystack.contains("nasos"));
        }
    }

    #[test]
    fn inactive_language_is_ignored() {
        let catalog = catalog();
        let query = ListQuery {
            term: "насос".into(),
            language: Language::Uz,
            ..ListQuery::default()
        };
        assert!(filter(&catalog, &query).is_empty());

        let query = ListQuery {
            language: Language::Ru,
            ..query
        };
        assert_eq!(ids(&filter(&catalog, &query)), vec![RecordId(1)]);
    }

    #[test]
    fn category_is_exact_match_in_active_language() {
        let catalog = catalog();
        let query = ListQuery {
            category: "Nasoslar".parse().expect("infallible"),
            ..ListQuery::default()
        };
        let result = filter(&catalog, &query);
        assert_eq!(ids(&result), vec![RecordId(1)]);
        assert!(result.iter().all(|p| p.category_uz == "Nasoslar"));

        let query = ListQuery {
            category: CategoryFilter::Only("nasoslar".into()),
            ..ListQuery::default()
        };
        assert!(filter(&catalog, &query).is_empty());

        let query = ListQuery {
            category: "all".parse().expect("infallible"),
            ..ListQuery::default()
        };
        assert_eq!(filter(&catalog, &query).len(), 3);
    }

    #[test]
    fn categories_are_unique_in_first_seen_order() {
        let mut catalog = catalog();
        catalog.push(product(4, ("Nasos 2", "", "Nasoslar"), ("Насос 2", "", "Насосы")));
        catalog.push(product(5, ("Boshqa", "", ""), ("Другое", "", "")));

        assert_eq!(
            categories(&catalog, Language::Uz),
            vec!["Nasoslar", "Kompressorlar", "Armatura"]
        );
        assert_eq!(
            categories(&catalog, Language::Ru),
            vec!["Насосы", "Компрессоры", "Арматура"]
        );
    }

    #[test]
    fn contacts_search_name_email_and_company() {
        let contacts: Vec<ContactSubmission> = serde_json::from_value(serde_json::json!([
            {"id": 1, "name": "Aziz", "email": "aziz@example.uz", "company": "Agro LLC", "message": "Narx?"},
            {"id": 2, "name": "Olga", "email": "olga@example.ru", "message": "Цена?"}
        ]))
        .expect("contacts");

        let query = ListQuery {
            term: "agro".into(),
            ..ListQuery::default()
        };
        let found = filter(&contacts, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, RecordId(1));

        let query = ListQuery {
            category: CategoryFilter::Only("any".into()),
            ..ListQuery::default()
        };
        assert!(filter(&contacts, &query).is_empty());
    }
}
