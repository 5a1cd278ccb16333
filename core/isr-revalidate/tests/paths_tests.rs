use isr_revalidate::paths::{
    accessory_paths, brand_paths, case_study_paths, gallery_paths, global_paths, glasses_paths,
    product_paths,
};
use isr_revalidate::{ContentType, PathRule, TrackedEntity};
use pretty_assertions::assert_eq;

fn locales(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

// ── Detail rules ────────────────────────────────────────────────

#[test]
fn product_paths_cover_detail_then_listing() {
    let product = TrackedEntity::new(1).with_slug("chair-1");
    assert_eq!(
        product_paths(&product, &locales(&["en", "fr"])),
        vec!["/en/product/chair-1", "/fr/product/chair-1", "/en/product", "/fr/product"]
    );
}

#[test]
fn product_without_slug_yields_nothing() {
    let product = TrackedEntity::new(1);
    assert!(product_paths(&product, &locales(&["en"])).is_empty());
}

#[test]
fn product_with_empty_slug_yields_nothing() {
    let product = TrackedEntity::new(1).with_slug("");
    assert!(product_paths(&product, &locales(&["en", "fr"])).is_empty());
}

#[test]
fn brand_has_no_listing_path() {
    let brand = TrackedEntity::new(2).with_slug("acme");
    assert_eq!(brand_paths(&brand, &locales(&["en"])), vec!["/en/brand/acme"]);
}

#[test]
fn brand_without_slug_yields_nothing() {
    assert!(brand_paths(&TrackedEntity::new(2), &locales(&["en", "de"])).is_empty());
}

#[test]
fn case_study_uses_finished_works_section() {
    let case_study = TrackedEntity::new(3).with_slug("villa-rosa");
    assert_eq!(
        case_study_paths(&case_study, &locales(&["en", "it"])),
        vec![
            "/en/finished-works/villa-rosa",
            "/it/finished-works/villa-rosa",
            "/en/finished-works",
            "/it/finished-works",
        ]
    );
}

#[test]
fn entity_locale_does_not_narrow_paths() {
    // Every known locale is revalidated, not just the one that was written.
    let product = TrackedEntity::new(1).with_slug("chair-1").with_locale("fr");
    let paths = product_paths(&product, &locales(&["en", "fr"]));
    assert!(paths.contains(&"/en/product/chair-1".to_string()));
}

// ── Listing and global rules ────────────────────────────────────

#[test]
fn accessory_gallery_glasses_are_fixed_listings() {
    let l = locales(&["en", "fr"]);
    assert_eq!(accessory_paths(&l), vec!["/en/accessories", "/fr/accessories"]);
    assert_eq!(gallery_paths(&l), vec!["/en/gallery", "/fr/gallery"]);
    assert_eq!(glasses_paths(&l), vec!["/en/glasses", "/fr/glasses"]);
}

#[test]
fn listing_rule_yields_one_path_per_locale() {
    let rule = PathRule::Listing { section: "showroom" };
    assert_eq!(
        rule.paths(&TrackedEntity::new(4), &locales(&["en", "fr", "de"])),
        vec!["/en/showroom", "/fr/showroom", "/de/showroom"]
    );
}

#[test]
fn listing_rule_ignores_entity_content() {
    let rule = PathRule::for_content_type(ContentType::Accessory);
    let with_slug = TrackedEntity::new(9).with_slug("brass-handle");
    let without = TrackedEntity::new(10);
    let l = locales(&["en"]);
    assert_eq!(rule.paths(&with_slug, &l), rule.paths(&without, &l));
}

#[test]
fn global_paths_interleave_home_and_product_listing() {
    assert_eq!(
        global_paths(&locales(&["en", "fr"])),
        vec!["/en", "/en/product", "/fr", "/fr/product"]
    );
}

#[test]
fn no_locales_means_no_paths() {
    let product = TrackedEntity::new(1).with_slug("chair-1");
    assert!(product_paths(&product, &[]).is_empty());
    assert!(global_paths(&[]).is_empty());
}

// ── Rule table ──────────────────────────────────────────────────

#[test]
fn product_components_use_global_rule() {
    for ct in [
        ContentType::Color,
        ContentType::HardwareItem,
        ContentType::ProductCategory,
        ContentType::ProductType,
    ] {
        assert_eq!(PathRule::for_content_type(ct), PathRule::Global);
    }
}

#[test]
fn only_addressable_types_are_detail_rules() {
    let detail: Vec<_> = ContentType::ALL
        .into_iter()
        .filter(|ct| PathRule::for_content_type(*ct).is_detail())
        .collect();
    assert_eq!(
        detail,
        vec![ContentType::Product, ContentType::Brand, ContentType::CaseStudy]
    );
}

#[test]
fn every_generated_path_is_non_empty_and_rooted() {
    let entity = TrackedEntity::new(1).with_slug("x");
    let l = locales(&["en", "fr"]);
    for ct in ContentType::ALL {
        for path in PathRule::for_content_type(ct).paths(&entity, &l) {
            assert!(path.starts_with('/'), "{ct}: {path}");
            assert!(path.len() > 1, "{ct}: {path}");
        }
    }
}
