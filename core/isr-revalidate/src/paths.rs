//! Path generation.
//!
//! Every function here is pure: the same entity and locale list always yield
//! the same paths in the same order. Detail paths come first (one per locale),
//! then listing paths. The frontend treats the result as an unordered set.

use isr_model::{ContentType, TrackedEntity};

/// How a content type's writes translate into stale frontend paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRule {
    /// `/{locale}/{section}/{slug}`, plus `/{locale}/{section}` when `listing`.
    /// Requires a slug; without one nothing is stale.
    Detail {
        section: &'static str,
        listing: bool,
    },
    /// `/{locale}/{section}` regardless of entity content.
    Listing { section: &'static str },
    /// `/{locale}` and `/{locale}/product`. Used for product components that
    /// have no page of their own.
    Global,
}

impl PathRule {
    /// The rule the frontend's routing implies for a content type.
    pub fn for_content_type(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Product => PathRule::Detail {
                section: "product",
                listing: true,
            },
            ContentType::Brand => PathRule::Detail {
                section: "brand",
                listing: false,
            },
            ContentType::CaseStudy => PathRule::Detail {
                section: "finished-works",
                listing: true,
            },
            ContentType::Accessory => PathRule::Listing {
                section: "accessories",
            },
            ContentType::Gallery => PathRule::Listing { section: "gallery" },
            ContentType::Glasses => PathRule::Listing { section: "glasses" },
            ContentType::Color
            | ContentType::HardwareItem
            | ContentType::ProductCategory
            | ContentType::ProductType => PathRule::Global,
        }
    }

    /// Whether this rule addresses an individual entity page.
    pub fn is_detail(&self) -> bool {
        matches!(self, PathRule::Detail { .. })
    }

    pub fn paths(&self, entity: &TrackedEntity, locales: &[String]) -> Vec<String> {
        match *self {
            PathRule::Detail { section, listing } => {
                let Some(slug) = entity.slug() else {
                    return Vec::new();
                };
                let mut paths: Vec<String> = locales
                    .iter()
                    .map(|locale| format!("/{locale}/{section}/{slug}"))
                    .collect();
                if listing {
                    paths.extend(listing_paths(section, locales));
                }
                paths
            }
            PathRule::Listing { section } => listing_paths(section, locales).collect(),
            PathRule::Global => global_paths(locales),
        }
    }
}

fn listing_paths<'a>(section: &'a str, locales: &'a [String]) -> impl Iterator<Item = String> + 'a {
    locales
        .iter()
        .map(move |locale| format!("/{locale}/{section}"))
}

/// Product detail pages plus the product listing.
pub fn product_paths(product: &TrackedEntity, locales: &[String]) -> Vec<String> {
    PathRule::for_content_type(ContentType::Product).paths(product, locales)
}

/// Brand detail pages. Brands have no listing page.
pub fn brand_paths(brand: &TrackedEntity, locales: &[String]) -> Vec<String> {
    PathRule::for_content_type(ContentType::Brand).paths(brand, locales)
}

/// Finished-works detail pages plus the finished-works listing.
pub fn case_study_paths(case_study: &TrackedEntity, locales: &[String]) -> Vec<String> {
    PathRule::for_content_type(ContentType::CaseStudy).paths(case_study, locales)
}

pub fn accessory_paths(locales: &[String]) -> Vec<String> {
    listing_paths("accessories", locales).collect()
}

pub fn gallery_paths(locales: &[String]) -> Vec<String> {
    listing_paths("gallery", locales).collect()
}

pub fn glasses_paths(locales: &[String]) -> Vec<String> {
    listing_paths("glasses", locales).collect()
}

/// Home page and product listing for every locale.
pub fn global_paths(locales: &[String]) -> Vec<String> {
    locales
        .iter()
        .flat_map(|locale| [format!("/{locale}"), format!("/{locale}/product")])
        .collect()
}
