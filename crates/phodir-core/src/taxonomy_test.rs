use super::*;

// -----------------------------------------------------------------------
// TaxonomyResolver
// -----------------------------------------------------------------------

#[test]
fn dalat_is_two_tier() {
    let resolver = TaxonomyResolver::default();
    assert!(resolver.is_two_tier("dalat"));
    assert_eq!(resolver.admin_structure("dalat"), AdminStructure::TwoTier);
    assert_eq!(resolver.division_kind("dalat"), DivisionKind::Ward);
}

#[test]
fn hanoi_is_three_tier() {
    let resolver = TaxonomyResolver::default();
    assert!(!resolver.is_two_tier("hanoi"));
    assert_eq!(resolver.admin_structure("hanoi"), AdminStructure::ThreeTier);
    assert_eq!(resolver.division_kind("hanoi"), DivisionKind::District);
}

#[test]
fn unknown_city_is_three_tier() {
    let resolver = TaxonomyResolver::default();
    assert!(!resolver.is_two_tier("atlantis"));
}

#[test]
fn curated_city_info_is_returned() {
    let info = TaxonomyResolver::default().city_info("ho-chi-minh-city");
    assert_eq!(info.name, "Ho Chi Minh City");
    assert!(info.description.starts_with("The southern metropolis"));
}

#[test]
fn unknown_city_info_is_synthesized() {
    let info = TaxonomyResolver::default().city_info("unknown-slug-xyz");
    assert_eq!(info.name, "Unknown Slug Xyz");
    assert_eq!(
        info.description,
        "Explore the unique pho offerings in Unknown Slug Xyz."
    );
}

#[test]
fn two_tier_city_without_curated_entry_gets_synthesized_info() {
    let info = TaxonomyResolver::default().city_info("nha-trang");
    assert_eq!(info.name, "Nha Trang");
}

#[test]
fn empty_segments_are_kept_as_empty_words() {
    let info = TaxonomyResolver::default().city_info("hoi--an");
    assert_eq!(info.name, "Hoi  An");
}

#[test]
fn empty_slug_still_resolves() {
    let info = TaxonomyResolver::default().city_info("");
    assert_eq!(info.name, "");
    assert_eq!(info.description, "Explore the unique pho offerings in .");
}

#[test]
fn injected_taxonomy_replaces_builtin_tables() {
    let taxonomy = CityTaxonomy::new()
        .with_city("hoi-an", "Hội An", "Ancient town noodles.")
        .with_two_tier("hoi-an");
    let resolver = TaxonomyResolver::new(taxonomy);

    assert_eq!(resolver.city_info("hoi-an").name, "Hội An");
    assert!(resolver.is_two_tier("hoi-an"));
    assert!(!resolver.is_two_tier("dalat"));
    assert_eq!(resolver.city_info("hanoi").name, "Hanoi");
    assert!(resolver
        .city_info("hanoi")
        .description
        .starts_with("Explore the unique pho offerings"));
}

#[test]
fn builtin_taxonomy_sizes() {
    let taxonomy = CityTaxonomy::builtin();
    assert_eq!(taxonomy.city_count(), 3);
    assert_eq!(taxonomy.two_tier_count(), 16);
}

// -----------------------------------------------------------------------
// validate_taxonomy / load_taxonomy
// -----------------------------------------------------------------------

fn entry(slug: &str, name: &str) -> CityEntry {
    CityEntry {
        slug: slug.to_string(),
        name: name.to_string(),
        description: format!("About {name}."),
    }
}

#[test]
fn validate_accepts_valid_taxonomy() {
    let file = TaxonomyFile {
        cities: vec![entry("hanoi", "Hanoi"), entry("da-nang", "Da Nang")],
        two_tier: vec!["dalat".to_string(), "hue".to_string()],
    };
    assert!(validate_taxonomy(&file).is_ok());
}

#[test]
fn validate_rejects_empty_name() {
    let file = TaxonomyFile {
        cities: vec![entry("hanoi", "  ")],
        two_tier: Vec::new(),
    };
    let err = validate_taxonomy(&file).unwrap_err();
    assert!(err.to_string().contains("non-empty name"));
}

#[test]
fn validate_rejects_duplicate_city() {
    let file = TaxonomyFile {
        cities: vec![entry("hanoi", "Hanoi"), entry("hanoi", "Ha Noi")],
        two_tier: Vec::new(),
    };
    let err = validate_taxonomy(&file).unwrap_err();
    assert!(err.to_string().contains("duplicate city slug"));
}

#[test]
fn validate_rejects_non_canonical_slug() {
    let file = TaxonomyFile {
        cities: vec![entry("Ho Chi Minh", "Ho Chi Minh City")],
        two_tier: Vec::new(),
    };
    let err = validate_taxonomy(&file).unwrap_err();
    assert!(err.to_string().contains("not a canonical slug"));
}

#[test]
fn validate_rejects_duplicate_two_tier_slug() {
    let file = TaxonomyFile {
        cities: Vec::new(),
        two_tier: vec!["dalat".to_string(), "dalat".to_string()],
    };
    let err = validate_taxonomy(&file).unwrap_err();
    assert!(err.to_string().contains("duplicate two-tier slug"));
}

#[test]
fn load_taxonomy_missing_file_is_io_error() {
    let result = load_taxonomy(Path::new("/nonexistent/phodir/taxonomy.yaml"));
    assert!(
        matches!(result, Err(ConfigError::TaxonomyFileIo { .. })),
        "expected TaxonomyFileIo, got: {result:?}"
    );
}

#[test]
fn load_taxonomy_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("taxonomy.yaml");
    assert!(
        path.exists(),
        "taxonomy.yaml missing at {path:?}; required for this test"
    );
    let result = load_taxonomy(&path);
    assert!(result.is_ok(), "failed to load taxonomy.yaml: {result:?}");
    let taxonomy = result.unwrap();
    assert_eq!(taxonomy.city_count(), CityTaxonomy::builtin().city_count());
    assert_eq!(
        taxonomy.two_tier_count(),
        CityTaxonomy::builtin().two_tier_count()
    );

    let resolver = TaxonomyResolver::new(taxonomy);
    assert!(resolver.is_two_tier("dalat"));
    assert!(!resolver.is_two_tier("hanoi"));
    assert_eq!(resolver.city_info("da-nang").name, "Da Nang");
}
