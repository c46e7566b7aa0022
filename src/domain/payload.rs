//! Wire payloads built from validated forms.

use serde_json::{Map, Value};

/// How a payload travels to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// `multipart/form-data`, required whenever an image may be attached.
    Multipart,
    Json,
}

/// An image file attached to a create or update submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }
}

/// Ordered text fields plus an optional image. Empty values are dropped on
/// insertion, so a blank input never reaches the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormPayload {
    fields: Vec<(&'static str, String)>,
    image: Option<ImageUpload>,
}

impl FormPayload {
    pub const IMAGE_FIELD: &'static str = "image";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, field: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if !value.is_empty() {
            self.fields.push((field, value));
        }
        self
    }

    pub fn image(&mut self, upload: Option<ImageUpload>) -> &mut Self {
        self.image = upload;
        self
    }

    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn upload(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    /// JSON rendering of the text fields; the image is not representable.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, value)| ((*name).to_string(), Value::String(value.clone())))
            .collect();
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_omitted() {
        let mut payload = FormPayload::new();
        payload.text("name_uz", "Nasos").text("name_ru", "").text("price", "10");

        assert_eq!(payload.fields().len(), 2);
        assert_eq!(payload.get("name_uz"), Some("Nasos"));
        assert_eq!(payload.get("name_ru"), None);
        assert_eq!(
            payload.to_json(),
            serde_json::json!({"name_uz": "Nasos", "price": "10"})
        );
    }

    #[test]
    fn upload_guesses_content_type() {
        let upload = ImageUpload::new("pump.png", vec![1, 2, 3]);
        assert_eq!(upload.content_type, "image/png");

        let unknown = ImageUpload::new("blob", vec![]);
        assert_eq!(unknown.content_type, "application/octet-stream");
    }
}
