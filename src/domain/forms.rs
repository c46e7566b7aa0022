//! Editable form state for each writable entity.
//!
//! A form holds exactly what an input control holds (text) until it is
//! validated into a wire payload. Validation never touches the network.

use std::fmt::Display;
use std::str::FromStr;

use catalog_admin_types::{CompanyInfo, NewsItem, Product, Specifications};
use rust_decimal::Decimal;
use serde_json::Value;

use super::error::DomainError;
use super::payload::{FormPayload, ImageUpload};

const EMPTY_SPECIFICATIONS: &str = "{}";
const MIN_ESTABLISHED_YEAR: i32 = 1800;
const MAX_ESTABLISHED_YEAR: i32 = 9999;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name_uz: String,
    pub name_ru: String,
    pub description_uz: String,
    pub description_ru: String,
    pub category_uz: String,
    pub category_ru: String,
    pub price: String,
    pub image: Option<ImageUpload>,
    pub specifications_uz: String,
    pub specifications_ru: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name_uz: String::new(),
            name_ru: String::new(),
            description_uz: String::new(),
            description_ru: String::new(),
            category_uz: String::new(),
            category_ru: String::new(),
            price: String::new(),
            image: None,
            specifications_uz: EMPTY_SPECIFICATIONS.to_string(),
            specifications_ru: EMPTY_SPECIFICATIONS.to_string(),
        }
    }
}

impl ProductForm {
    /// Prefills the form from a stored product. The image is never prefilled;
    /// the stored one is kept unless a new file is attached.
    pub fn from_record(product: &Product) -> Self {
        Self {
            name_uz: product.name_uz.clone(),
            name_ru: product.name_ru.clone(),
            description_uz: product.description_uz.clone(),
            description_ru: product.description_ru.clone(),
            category_uz: product.category_uz.clone(),
            category_ru: product.category_ru.clone(),
            price: product.price.map(|p| p.to_string()).unwrap_or_default(),
            image: None,
            specifications_uz: pretty_specifications(&product.specifications_uz),
            specifications_ru: pretty_specifications(&product.specifications_ru),
        }
    }

    pub fn to_payload(&self) -> Result<FormPayload, DomainError> {
        let specifications_uz = parse_specifications("specifications_uz", &self.specifications_uz)?;
        let specifications_ru = parse_specifications("specifications_ru", &self.specifications_ru)?;

        require("name_uz", &self.name_uz)?;
        require("name_ru", &self.name_ru)?;

        let price = self.price.trim();
        if !price.is_empty() {
            let parsed = Decimal::from_str(price)
                .map_err(|err| DomainError::validation("price", format!("not a number: {err}")))?;
            if parsed.is_sign_negative() {
                return Err(DomainError::validation("price", "must not be negative"));
            }
        }

        let mut payload = FormPayload::new();
        payload
            .text("name_uz", &self.name_uz)
            .text("name_ru", &self.name_ru)
            .text("description_uz", &self.description_uz)
            .text("description_ru", &self.description_ru)
            .text("category_uz", &self.category_uz)
            .text("category_ru", &self.category_ru)
            .text("price", price)
            .text("specifications_uz", compact(&specifications_uz))
            .text("specifications_ru", compact(&specifications_ru))
            .image(self.image.clone());
        Ok(payload)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsForm {
    pub title_uz: String,
    pub title_ru: String,
    pub content_uz: String,
    pub content_ru: String,
    pub category_uz: String,
    pub category_ru: String,
    pub image: Option<ImageUpload>,
}

impl NewsForm {
    pub fn from_record(item: &NewsItem) -> Self {
        Self {
            title_uz: item.title_uz.clone(),
            title_ru: item.title_ru.clone(),
            content_uz: item.content_uz.clone(),
            content_ru: item.content_ru.clone(),
            category_uz: item.category_uz.clone(),
            category_ru: item.category_ru.clone(),
            image: None,
        }
    }

    pub fn to_payload(&self) -> Result<FormPayload, DomainError> {
        require("title_uz", &self.title_uz)?;
        require("title_ru", &self.title_ru)?;

        let mut payload = FormPayload::new();
        payload
            .text("title_uz", &self.title_uz)
            .text("title_ru", &self.title_ru)
            .text("content_uz", &self.content_uz)
            .text("content_ru", &self.content_ru)
            .text("category_uz", &self.category_uz)
            .text("category_ru", &self.category_ru)
            .image(self.image.clone());
        Ok(payload)
    }
}

/// Company profile as typed into the editor. Numeric fields stay text until
/// [`CompanyInfoForm::to_record`] coerces them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyInfoForm {
    pub about_uz: String,
    pub about_ru: String,
    pub history_uz: String,
    pub history_ru: String,
    pub mission_uz: String,
    pub mission_ru: String,
    pub vision_uz: String,
    pub vision_ru: String,
    pub phone: String,
    pub email: String,
    pub telegram: String,
    pub address_uz: String,
    pub address_ru: String,
    pub latitude: String,
    pub longitude: String,
    pub employees_count: String,
    pub established_year: String,
}

impl CompanyInfoForm {
    pub fn from_record(info: &CompanyInfo) -> Self {
        Self {
            about_uz: info.about_uz.clone(),
            about_ru: info.about_ru.clone(),
            history_uz: info.history_uz.clone(),
            history_ru: info.history_ru.clone(),
            mission_uz: info.mission_uz.clone(),
            mission_ru: info.mission_ru.clone(),
            vision_uz: info.vision_uz.clone(),
            vision_ru: info.vision_ru.clone(),
            phone: info.phone.clone(),
            email: info.email.clone(),
            telegram: info.telegram.clone(),
            address_uz: info.address_uz.clone(),
            address_ru: info.address_ru.clone(),
            latitude: display_opt(info.latitude),
            longitude: display_opt(info.longitude),
            employees_count: display_opt(info.employees_count),
            established_year: display_opt(info.established_year),
        }
    }

    /// Validates and coerces every numeric field. The result is the complete
    /// record that replaces the stored one.
    pub fn to_record(&self) -> Result<CompanyInfo, DomainError> {
        let latitude = parse_number::<f64>("latitude", &self.latitude)?;
        if let Some(lat) = latitude {
            ensure_range("latitude", lat, -90.0, 90.0)?;
        }

        let longitude = parse_number::<f64>("longitude", &self.longitude)?;
        if let Some(lon) = longitude {
            ensure_range("longitude", lon, -180.0, 180.0)?;
        }

        let employees_count = parse_number::<u32>("employees_count", &self.employees_count)?;

        let established_year = parse_number::<i32>("established_year", &self.established_year)?;
        if let Some(year) = established_year {
            if !(MIN_ESTABLISHED_YEAR..=MAX_ESTABLISHED_YEAR).contains(&year) {
                return Err(DomainError::validation(
                    "established_year",
                    format!("must be between {MIN_ESTABLISHED_YEAR} and {MAX_ESTABLISHED_YEAR}"),
                ));
            }
        }

        Ok(CompanyInfo {
            about_uz: self.about_uz.clone(),
            about_ru: self.about_ru.clone(),
            history_uz: self.history_uz.clone(),
            history_ru: self.history_ru.clone(),
            mission_uz: self.mission_uz.clone(),
            mission_ru: self.mission_ru.clone(),
            vision_uz: self.vision_uz.clone(),
            vision_ru: self.vision_ru.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            telegram: self.telegram.clone(),
            address_uz: self.address_uz.clone(),
            address_ru: self.address_ru.clone(),
            latitude,
            longitude,
            employees_count,
            established_year,
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "is required"));
    }
    Ok(())
}

fn parse_specifications(field: &'static str, text: &str) -> Result<Specifications, DomainError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DomainError::validation(field, "must be a JSON object")),
        Err(err) => Err(DomainError::validation(field, format!("invalid JSON: {err}"))),
    }
}

fn compact(specifications: &Specifications) -> String {
    Value::Object(specifications.clone()).to_string()
}

fn pretty_specifications(specifications: &Specifications) -> String {
    serde_json::to_string_pretty(specifications)
        .unwrap_or_else(|_| EMPTY_SPECIFICATIONS.to_string())
}

fn parse_number<T>(field: &'static str, text: &str) -> Result<Option<T>, DomainError>
where
    T: FromStr,
    T::Err: Display,
{
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|err| DomainError::validation(field, format!("`{trimmed}` is not valid: {err}")))
}

fn ensure_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), DomainError> {
    if !value.is_finite() || value < min || value > max {
        return Err(DomainError::validation(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(())
}

fn display_opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use catalog_admin_types::RecordId;

    use super::*;

    fn product_form() -> ProductForm {
        ProductForm {
            name_uz: "Nasos".into(),
            name_ru: "Насос".into(),
            ..ProductForm::default()
        }
    }

    fn validation_field(err: DomainError) -> &'static str {
        match err {
            DomainError::Validation { field, .. } => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_specifications_are_rejected() {
        let form = ProductForm {
            specifications_uz: "{invalid".into(),
            ..product_form()
        };
        let err = form.to_payload().expect_err("invalid JSON must fail");
        assert_eq!(validation_field(err), "specifications_uz");

        let form = ProductForm {
            specifications_ru: "[1, 2]".into(),
            ..product_form()
        };
        let err = form.to_payload().expect_err("array must fail");
        assert_eq!(validation_field(err), "specifications_ru");
    }

    #[test]
    fn product_payload_omits_blank_fields() {
        let form = ProductForm {
            price: " 1200.50 ".into(),
            specifications_uz: "{\n  \"quvvat\": \"5 kVt\"\n}".into(),
            ..product_form()
        };
        let payload = form.to_payload().expect("valid form");

        assert_eq!(payload.get("price"), Some("1200.50"));
        assert_eq!(payload.get("description_uz"), None);
        assert_eq!(payload.get("specifications_uz"), Some(r#"{"quvvat":"5 kVt"}"#));
        assert_eq!(payload.get("specifications_ru"), Some("{}"));
        assert!(payload.upload().is_none());
    }

    #[test]
    fn product_price_must_be_decimal() {
        let form = ProductForm {
            price: "cheap".into(),
            ..product_form()
        };
        assert_eq!(validation_field(form.to_payload().unwrap_err()), "price");

        let form = ProductForm {
            price: "-1".into(),
            ..product_form()
        };
        assert_eq!(validation_field(form.to_payload().unwrap_err()), "price");
    }

    #[test]
    fn product_prefill_pretty_prints_specifications() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name_uz": "Kompressor",
            "price": "99.90",
            "specifications_ru": {"вес": "20 кг"}
        }))
        .expect("product");
        assert_eq!(product.id, RecordId(4));

        let form = ProductForm::from_record(&product);
        assert_eq!(form.price, "99.90");
        assert_eq!(form.specifications_uz, "{}");
        assert_eq!(form.specifications_ru, "{\n  \"вес\": \"20 кг\"\n}");
    }

    #[test]
    fn news_requires_both_titles() {
        let form = NewsForm {
            title_uz: "Yangi sex".into(),
            ..NewsForm::default()
        };
        assert_eq!(validation_field(form.to_payload().unwrap_err()), "title_ru");
    }

    #[test]
    fn company_numbers_are_coerced() {
        let form = CompanyInfoForm {
            latitude: "41.0058".into(),
            longitude: " 71.6436".into(),
            employees_count: "250".into(),
            established_year: String::new(),
            ..CompanyInfoForm::default()
        };
        let record = form.to_record().expect("valid numbers");
        assert_eq!(record.latitude, Some(41.0058));
        assert_eq!(record.longitude, Some(71.6436));
        assert_eq!(record.employees_count, Some(250));
        assert_eq!(record.established_year, None);
    }

    #[test]
    fn company_numbers_are_range_checked() {
        let form = CompanyInfoForm {
            latitude: "91".into(),
            ..CompanyInfoForm::default()
        };
        assert_eq!(validation_field(form.to_record().unwrap_err()), "latitude");

        let form = CompanyInfoForm {
            employees_count: "-3".into(),
            ..CompanyInfoForm::default()
        };
        assert_eq!(
            validation_field(form.to_record().unwrap_err()),
            "employees_count"
        );

        let form = CompanyInfoForm {
            established_year: "95".into(),
            ..CompanyInfoForm::default()
        };
        assert_eq!(
            validation_field(form.to_record().unwrap_err()),
            "established_year"
        );
    }
}
