// src/models/review.rs
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A single user-submitted review as it is stored and displayed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default = "new_review_id")]
    pub id: String,                 // Reserved for addressing a single review
    #[serde(
        default,
        alias = "imgUrl",
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,  // Avatar image
    #[serde(default)]
    pub full_name: String,          // May be empty, see `display_name`
    pub stars: f64,                 // 0..=5, half stars allowed
    #[serde(alias = "review")]
    pub text: String,               // Review body
    pub created_at: i64,            // Milliseconds since the epoch
    #[serde(default)]
    pub verified: bool,
}

impl Review {
    /// Name to show for the reviewer, falling back to `placeholder`.
    pub fn display_name<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.full_name.is_empty() {
            placeholder
        } else {
            &self.full_name
        }
    }
}

/// Raw form fields of the "write a review" form, before any coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewDraft {
    pub img_url: String,
    pub full_name: String,
    pub nb_stars: String,
    pub review_text: String,
}

impl ReviewDraft {
    pub fn new(nb_stars: impl Into<String>, review_text: impl Into<String>) -> Self {
        Self {
            nb_stars: nb_stars.into(),
            review_text: review_text.into(),
            ..Self::default()
        }
    }

    pub fn with_author(mut self, full_name: impl Into<String>, img_url: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self.img_url = img_url.into();
        self
    }
}

pub(crate) fn new_review_id() -> String {
    Uuid::new_v4().to_string()
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|url| !url.trim().is_empty()))
}
