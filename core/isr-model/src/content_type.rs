use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// A CMS content type whose writes make frontend pages stale.
///
/// The serialized form is the short model name (`"case-study"`), which is also
/// the `entityType` sent to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Product,
    Brand,
    CaseStudy,
    Accessory,
    Gallery,
    Glasses,
    /// Product component; not addressable on its own.
    Color,
    /// Product component; not addressable on its own.
    HardwareItem,
    ProductCategory,
    ProductType,
}

impl ContentType {
    /// Every tracked content type, in registration order.
    pub const ALL: [ContentType; 10] = [
        ContentType::Product,
        ContentType::Brand,
        ContentType::CaseStudy,
        ContentType::Accessory,
        ContentType::Gallery,
        ContentType::Glasses,
        ContentType::Color,
        ContentType::HardwareItem,
        ContentType::ProductCategory,
        ContentType::ProductType,
    ];

    /// Short model name, e.g. `"hardware-item"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Product => "product",
            ContentType::Brand => "brand",
            ContentType::CaseStudy => "case-study",
            ContentType::Accessory => "accessory",
            ContentType::Gallery => "gallery",
            ContentType::Glasses => "glasses",
            ContentType::Color => "color",
            ContentType::HardwareItem => "hardware-item",
            ContentType::ProductCategory => "product-category",
            ContentType::ProductType => "product-type",
        }
    }

    /// CMS model uid, e.g. `"api::hardware-item.hardware-item"`.
    pub fn uid(&self) -> String {
        let name = self.as_str();
        format!("api::{name}.{name}")
    }

    /// Parses either the short model name or the full `api::x.x` uid.
    pub fn from_model(model: &str) -> Result<Self, ModelError> {
        let name = match model.strip_prefix("api::") {
            Some(rest) => match rest.split_once('.') {
                Some((api, content)) if api == content => content,
                _ => return Err(ModelError::UnknownContentType(model.to_string())),
            },
            None => model,
        };

        Self::ALL
            .into_iter()
            .find(|ct| ct.as_str() == name)
            .ok_or_else(|| ModelError::UnknownContentType(model.to_string()))
    }
}

impl FromStr for ContentType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_model(s)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
