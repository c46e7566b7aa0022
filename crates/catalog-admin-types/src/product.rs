use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Language, RecordId, de};

/// Bilingual key/value specification table attached to a product.
pub type Specifications = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    #[serde(default, deserialize_with = "de::string")]
    pub name_uz: String,
    #[serde(default, deserialize_with = "de::string")]
    pub name_ru: String,
    #[serde(default, deserialize_with = "de::string")]
    pub description_uz: String,
    #[serde(default, deserialize_with = "de::string")]
    pub description_ru: String,
    #[serde(default, deserialize_with = "de::string")]
    pub category_uz: String,
    #[serde(default, deserialize_with = "de::string")]
    pub category_ru: String,
    #[serde(default, deserialize_with = "de::number")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "de::optional_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "de::optional_string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "de::json_object")]
    pub specifications_uz: Specifications,
    #[serde(default, deserialize_with = "de::json_object")]
    pub specifications_ru: Specifications,
}

impl Product {
    pub fn name(&self, lang: Language) -> &str {
        lang.pick(&self.name_uz, &self.name_ru)
    }

    pub fn description(&self, lang: Language) -> &str {
        lang.pick(&self.description_uz, &self.description_ru)
    }

    pub fn category(&self, lang: Language) -> &str {
        lang.pick(&self.category_uz, &self.category_ru)
    }

    pub fn specifications(&self, lang: Language) -> &Specifications {
        lang.pick(&self.specifications_uz, &self.specifications_ru)
    }

    /// Uploaded image first, then the legacy external URL.
    pub fn image_link(&self) -> Option<&str> {
        self.image.as_deref().or(self.image_url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn decodes_server_shapes() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 3,
                "name_uz": "Nasos",
                "name_ru": "Насос",
                "description_uz": null,
                "category_uz": "Nasoslar",
                "category_ru": "Насосы",
                "price": "1500.50",
                "image": "",
                "image_url": "https://cdn.example/pump.png",
                "specifications_uz": "{\"quvvat\": \"5 kVt\"}",
                "specifications_ru": {"мощность": "5 кВт"},
                "extra": true
            }"#,
        )
        .expect("product decodes");

        assert_eq!(product.id, RecordId(3));
        assert_eq!(product.description_uz, "");
        assert_eq!(product.price, Some(Decimal::from_str("1500.50").expect("decimal")));
        assert_eq!(product.image_link(), Some("https://cdn.example/pump.png"));
        assert_eq!(
            product.specifications(Language::Uz).get("quvvat"),
            Some(&Value::String("5 kVt".into()))
        );
        assert_eq!(product.name(Language::Ru), "Насос");
        assert_eq!(product.category(Language::Uz), "Nasoslar");
    }

    #[test]
    fn malformed_fields_decode_to_empty_values() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 1,
                "name_uz": "Nasos",
                "price": "narxi kelishiladi",
                "specifications_uz": "power: 5kW",
                "specifications_ru": "[1, 2]"
            }"#,
        )
        .expect("product still decodes");

        assert_eq!(product.name_uz, "Nasos");
        assert_eq!(product.price, None);
        assert!(product.specifications_uz.is_empty());
        assert!(product.specifications_ru.is_empty());
    }
}
