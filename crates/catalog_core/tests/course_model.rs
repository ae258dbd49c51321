use catalog_core::{Course, CourseValidationError, Level};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn course_keeps_fields_and_case() {
    let course = Course::new("Rust para Principiantes", date(2021, 6, 30), Level::Beginner).unwrap();

    assert_eq!(course.name(), "Rust para Principiantes");
    assert_eq!(course.published(), date(2021, 6, 30));
    assert_eq!(course.level(), Level::Beginner);
}

#[test]
fn equal_fields_mean_equal_courses() {
    let a = Course::new("Docker", date(2020, 2, 2), Level::Advanced).unwrap();
    let b = Course::new("Docker", date(2020, 2, 2), Level::Advanced).unwrap();
    let c = Course::new("Docker", date(2020, 2, 2), Level::Beginner).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn blank_name_is_rejected() {
    let err = Course::new("", date(2020, 2, 2), Level::Advanced).unwrap_err();
    assert_eq!(err, CourseValidationError::EmptyName);
}

#[test]
fn level_tokens_map_case_insensitively() {
    for (token, expected) in [
        ("principiante", Level::Beginner),
        ("PRINCIPIANTE", Level::Beginner),
        ("Intermedio", Level::Intermediate),
        ("avanzado", Level::Advanced),
        ("Advanced", Level::Advanced),
    ] {
        assert_eq!(token.parse::<Level>().unwrap(), expected, "token {token}");
    }
    assert!("experto".parse::<Level>().is_err());
}

#[test]
fn course_serialization_uses_expected_wire_fields() {
    let course = Course::new("SQL Basics", date(2019, 12, 3), Level::Intermediate).unwrap();

    let json = serde_json::to_value(&course).unwrap();
    assert_eq!(json["name"], "SQL Basics");
    assert_eq!(json["published"], "2019-12-03");
    assert_eq!(json["level"], "intermediate");

    let decoded: Course = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, course);
}

#[test]
fn deserialize_rejects_blank_name() {
    let value = serde_json::json!({
        "name": "   ",
        "published": "2020-01-01",
        "level": "advanced"
    });

    let err = serde_json::from_value::<Course>(value).unwrap_err();
    assert!(
        err.to_string().contains("course name must not be blank"),
        "unexpected error: {err}"
    );
}
