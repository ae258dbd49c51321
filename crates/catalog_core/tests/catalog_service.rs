use catalog_core::{Catalog, CatalogError, CatalogService, Course, Level, LoadError, ServiceError};
use chrono::NaiveDate;
use std::io::Cursor;

const SAMPLE: &[&str] = &[
    "bases de datos : SQL esencial : 3/12/2019 : principiante",
    "bases de datos : Oracle avanzado : 14/2/2017 : avanzado",
    "bases de datos : PostgreSQL tuning : 1/9/2020 : avanzado",
    "cms : WordPress esencial : 10/10/2016 : principiante",
    "cms : Drupal 8 : 5/6/2018 : intermedio",
    "web : HTML5 : 22/1/2015 : principiante",
];

fn loaded_service() -> CatalogService {
    let mut service = CatalogService::new();
    service.load_lines("sample", SAMPLE).unwrap();
    service
}

#[test]
fn load_reader_reports_loaded_count() {
    let mut service = CatalogService::new();
    let input = SAMPLE.join("\n");

    let loaded = service.load_reader("cursor", Cursor::new(input)).unwrap();

    assert_eq!(loaded, SAMPLE.len());
    assert_eq!(service.catalog().len(), 3);
}

#[test]
fn load_failure_keeps_previous_catalog() {
    let mut service = loaded_service();

    let err = service
        .load_lines("broken", ["web : CSS3 : 1/1/2016 : principiante", "no separator"])
        .unwrap_err();

    assert!(matches!(err, ServiceError::Load(LoadError::Parse(_))));
    assert_eq!(service.catalog().count_in("web"), 1);
}

#[test]
fn delete_by_level_maps_missing_category_to_catalog_error() {
    let mut service = loaded_service();

    let err = service.delete_by_level("android", Level::Beginner).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Catalog(CatalogError::CategoryNotFound(ref name)) if name == "ANDROID"
    ));
}

#[test]
fn print_writes_rendering() {
    let service = loaded_service();
    let mut out = Vec::new();

    service.print(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("BASES DE DATOS (3)\n"));
    assert!(text.contains("CMS (2)\n"));
    assert!(text.contains("WEB (1)\n"));
}

#[test]
fn demo_reports_oldest_and_applies_both_deletions() {
    let mut service = loaded_service();
    let mut out = Vec::new();

    service.run_demo(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Oldest course: HTML5 (22/01/2015)"));
    assert!(text.contains("Deleting courses of BASES DE DATOS with level ADVANCED"));
    assert!(text.contains("Deleted = [Oracle avanzado, PostgreSQL tuning]"));
    assert!(text.contains("Deleting courses of CMS with level INTERMEDIATE"));
    assert!(text.contains("Deleted = [Drupal 8]"));

    let after = text.split("After deleting ....").nth(1).unwrap();
    assert!(after.contains("BASES DE DATOS (1)"));
    assert!(after.contains("CMS (1)"));
    assert!(!after.contains("Oracle avanzado"));

    assert_eq!(service.catalog().count_in("bases de datos"), 1);
    assert_eq!(service.catalog().count_in("cms"), 1);
}

#[test]
fn demo_on_empty_catalog_reports_skips() {
    let mut service = CatalogService::new();
    let mut out = Vec::new();

    service.run_demo(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Oldest course: none"));
    assert!(text.contains("Skipped: category not found: BASES DE DATOS"));
    assert!(text.contains("Skipped: category not found: CMS"));
}

#[test]
fn service_wraps_existing_catalog_and_hands_it_back() {
    let mut catalog = Catalog::new();
    catalog.add_course(
        "web",
        Course::new(
            "CSS3",
            NaiveDate::from_ymd_opt(2016, 1, 1).unwrap(),
            Level::Advanced,
        )
        .unwrap(),
    );
    let mut service = CatalogService::with_catalog(catalog);

    service.load_lines("extra", ["web : HTML5 : 22/1/2015 : principiante"]).unwrap();
    let removed = service.delete_by_level("web", Level::Advanced).unwrap();

    assert_eq!(removed.into_iter().collect::<Vec<_>>(), vec!["CSS3"]);
    let catalog = service.into_catalog();
    assert_eq!(catalog.count_in("web"), 1);
    assert_eq!(catalog.courses_in("web").unwrap()[0].name(), "HTML5");
}
