use chrono::{NaiveDate, NaiveTime, TimeZone};
use chrono_tz::America::Los_Angeles;
use naturejournal::core::entry::{build_entry, composite_place, join_activities, validate_activities};
use naturejournal::core::user_id::generate_user_id;
use naturejournal::errors::AppError;
use naturejournal::models::entry::{JOURNAL_COLUMNS, Timing, format_timestamp, parse_timestamp};
use naturejournal::models::identity::Identity;
use naturejournal::models::place::LocationFields;

fn loc(city: &str, state: &str, zip: &str, country: &str) -> LocationFields {
    LocationFields {
        city: city.into(),
        state: state.into(),
        zip: zip.into(),
        country: country.into(),
    }
}

fn timing(y: i32, m: u32, d: u32, hh: u32, mm: u32, dur: u32) -> Timing {
    Timing::new(
        NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        NaiveTime::from_hms_opt(hh, mm, 0).unwrap(),
        dur,
    )
    .unwrap()
}

fn jane() -> Identity {
    Identity::new(" Jane.Doe@Example.com ", "user", "Jane")
}

#[test]
fn test_end_timestamp_adds_duration() {
    let entry = build_entry(
        &jane(),
        &timing(2025, 2, 3, 9, 0, 60),
        "Golden Gate Park",
        &loc("San Francisco", "CA", "94118", "United States"),
        &[],
        "",
    );

    assert_eq!(format_timestamp(&entry.timestamp), "02/03/25 09:00 AM");
    assert_eq!(format_timestamp(&entry.end_timestamp), "02/03/25 10:00 AM");
}

#[test]
fn test_end_timestamp_crosses_midnight_and_noon() {
    let late = build_entry(&jane(), &timing(2025, 12, 31, 23, 30, 90), "P", &loc("", "", "", ""), &[], "");
    assert_eq!(format_timestamp(&late.end_timestamp), "01/01/26 01:00 AM");

    let noon = build_entry(&jane(), &timing(2025, 7, 4, 11, 45, 30), "P", &loc("", "", "", ""), &[], "");
    assert_eq!(format_timestamp(&noon.end_timestamp), "07/04/25 12:15 PM");
}

#[test]
fn test_timestamp_round_trips_through_sheet_format() {
    let ts = parse_timestamp("11/09/24 03:05 PM").unwrap();
    assert_eq!(format_timestamp(&ts), "11/09/24 03:05 PM");
}

#[test]
fn test_duration_bounds() {
    let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let t = NaiveTime::from_hms_opt(8, 0, 0).unwrap();

    assert!(Timing::new(d, t, 1).is_ok());
    assert!(Timing::new(d, t, 1440).is_ok());
    assert!(matches!(Timing::new(d, t, 0), Err(AppError::Validation(_))));
    assert!(matches!(Timing::new(d, t, 1441), Err(AppError::Validation(_))));
}

#[test]
fn test_composite_place_full() {
    assert_eq!(
        composite_place("Golden Gate Park", &loc("San Francisco", "CA", "94118", "United States")),
        "Golden Gate Park, San Francisco CA United States"
    );
}

#[test]
fn test_composite_place_missing_parts() {
    assert_eq!(
        composite_place("Place", &loc("", "CA", "", "USA")),
        "Place, CA USA"
    );
    assert_eq!(composite_place("Place", &loc("", "", "", "")), "Place,");
    assert_eq!(composite_place("Place", &loc("Town", "", "", "")), "Place, Town");
    assert_eq!(composite_place("", &loc("", "", "", "")), ",");
}

#[test]
fn test_composite_place_never_has_double_spaces() {
    let parts = ["", " ", "  ", "A", " B ", "C  D"];
    for name in parts {
        for city in parts {
            for state in parts {
                for country in parts {
                    let out = composite_place(name, &loc(city, state, "", country));
                    assert!(!out.contains("  "), "double space in {out:?}");
                    assert_eq!(out, out.trim(), "untrimmed {out:?}");
                }
            }
        }
    }
}

#[test]
fn test_activities_keep_order_and_duplicates() {
    let acts: Vec<String> = ["Hike", "Walk", "Hike"].iter().map(|s| s.to_string()).collect();
    assert_eq!(join_activities(&acts), "Hike, Walk, Hike");
    assert_eq!(join_activities(&[]), "");
}

#[test]
fn test_activities_must_come_from_vocabulary() {
    let vocab: Vec<String> = ["Walk", "Hike", "Garden", "Other"].iter().map(|s| s.to_string()).collect();

    assert!(validate_activities(&["Garden".to_string()], &vocab).is_ok());
    let err = validate_activities(&["Swim".to_string(), "walk".to_string()], &vocab).unwrap_err();
    assert!(matches!(err, AppError::Validation(ref m) if m.contains("Swim") && m.contains("walk")));
}

#[test]
fn test_row_has_seventeen_cells_in_wire_order() {
    let acts = vec!["Walk".to_string(), "Garden".to_string()];
    let entry = build_entry(
        &jane(),
        &timing(2025, 2, 3, 14, 5, 45),
        "Golden Gate Park",
        &loc("San Francisco", "CA", "94118", "United States"),
        &acts,
        "Saw a heron",
    );
    let row = entry.to_row();

    assert_eq!(row.len(), JOURNAL_COLUMNS.len());
    assert_eq!(
        row,
        vec![
            "",
            "Jane",
            "jane.doe@example.com",
            "02/03/25 02:05 PM",
            "45",
            "02/03/25 02:50 PM",
            "Golden Gate Park",
            "San Francisco",
            "CA",
            "94118",
            "United States",
            "Golden Gate Park, San Francisco CA United States",
            "",
            "",
            "",
            "Walk, Garden",
            "Saw a heron",
        ]
    );
}

#[test]
fn test_user_id_documented_example() {
    let now = Los_Angeles.with_ymd_and_hms(2025, 2, 3, 10, 0, 0).unwrap();
    assert_eq!(generate_user_id("john.doe@x.com", &now), "622025john0203");
}

#[test]
fn test_user_id_pads_short_emails() {
    let now = Los_Angeles.with_ymd_and_hms(2024, 11, 9, 8, 0, 0).unwrap();
    assert_eq!(generate_user_id("", &now), "622024xxxx1109");
    assert_eq!(generate_user_id("a.b@", &now), "622024abxx1109");
    assert_eq!(generate_user_id("AB-C9xyz@q.io", &now), "622024abc91109");
}

#[test]
fn test_user_id_shape() {
    let now = Los_Angeles.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    for email in ["", "x", "!!!", "Some.Body@Mail.com", "12345678"] {
        let id = generate_user_id(email, &now);
        assert_eq!(id.len(), 14, "{id}");
        assert!(id.starts_with("622025"));
        assert!(id.ends_with("0601"));
    }
}

#[test]
fn test_user_id_non_ascii_email_keeps_fourteen_chars() {
    let now = Los_Angeles.with_ymd_and_hms(2025, 2, 3, 10, 0, 0).unwrap();

    // 'İ' lowercases to 'i' plus a combining dot, which is not alphanumeric
    let id = generate_user_id("İabc@x.com", &now);
    assert_eq!(id, "622025iabc0203");

    for email in ["İİİİİ@x.com", "Éloïse@x.fr", "ΣΣ@x.gr", "ẞtraße@x.de"] {
        let id = generate_user_id(email, &now);
        assert_eq!(id.chars().count(), 14, "{id}");
        assert!(id.starts_with("622025"));
        assert!(id.ends_with("0203"));
    }
}

#[test]
fn test_identity_normalizes_email_and_name() {
    let id = Identity::new("  MiXed@Case.ORG ", "admin", "  ");
    assert_eq!(id.email, "mixed@case.org");
    assert_eq!(id.role, "admin");
    assert_eq!(id.display_name, "User");
}
