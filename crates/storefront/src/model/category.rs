use serde::{Deserialize, Serialize};

/// A browsable product category. Products reference it by `slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub image: String,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>, slug: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: slug.into(),
            image: image.into(),
        }
    }
}
