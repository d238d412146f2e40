use naturejournal::core::place::{JournalHistory, resolve_place};
use naturejournal::db::models::SheetTable;
use naturejournal::models::entry::JOURNAL_COLUMNS;
use naturejournal::models::place::{LocationFields, PlaceRecord, PlaceSelection};

fn record(name: &str, city: &str, state: &str, zip: &str, country: &str) -> PlaceRecord {
    PlaceRecord {
        place_name: name.to_string(),
        location: LocationFields {
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
            country: country.to_string(),
        },
    }
}

fn sample_history() -> JournalHistory {
    JournalHistory::new(vec![
        record("Golden Gate Park", "San Francisco", "CA", "94117", "United States"),
        record("Muir Woods", "Mill Valley", "CA", "94941", "United States"),
        record("", "Nowhere", "", "", ""),
        record("Golden Gate Park", "San Francisco", "CA", "94118", "United States"),
        record("Alum Rock", "San Jose", "CA", "95127", "United States"),
    ])
}

#[test]
fn test_existing_place_uses_last_matching_row() {
    let history = sample_history();
    let loc = resolve_place(
        &PlaceSelection::Existing("Golden Gate Park".into()),
        &history,
    );

    assert_eq!(loc.zip, "94118");
    assert_eq!(loc.city, "San Francisco");
    assert_eq!(loc.state, "CA");
    assert_eq!(loc.country, "United States");
}

#[test]
fn test_last_row_wins_regardless_of_earlier_rows() {
    let mut rows = Vec::new();
    for i in 0..50 {
        rows.push(record("Lake", "Old Town", "OR", &format!("{:05}", 97000 + i), "US"));
    }
    rows.push(record("Lake", "New Town", "WA", "98001", "US"));
    rows.push(record("Other", "Elsewhere", "NV", "89501", "US"));

    let loc = resolve_place(
        &PlaceSelection::Existing("Lake".into()),
        &JournalHistory::new(rows),
    );
    assert_eq!(loc.city, "New Town");
    assert_eq!(loc.zip, "98001");
}

#[test]
fn test_match_is_case_sensitive() {
    let history = sample_history();
    let loc = resolve_place(
        &PlaceSelection::Existing("golden gate park".into()),
        &history,
    );
    assert!(loc.is_empty());
}

#[test]
fn test_new_place_and_empty_selection_yield_empty_fields() {
    let history = sample_history();
    assert_eq!(
        resolve_place(&PlaceSelection::NewPlace, &history),
        LocationFields::default()
    );
    assert_eq!(
        resolve_place(&PlaceSelection::Empty, &history),
        LocationFields::default()
    );
}

#[test]
fn test_unknown_place_yields_empty_fields() {
    let loc = resolve_place(
        &PlaceSelection::Existing("Yosemite".into()),
        &sample_history(),
    );
    assert!(loc.is_empty());
}

#[test]
fn test_distinct_places_sorted_without_blanks_or_duplicates() {
    assert_eq!(
        sample_history().distinct_places(),
        vec!["Alum Rock", "Golden Gate Park", "Muir Woods"]
    );
}

#[test]
fn test_history_from_table_matches_columns_loosely() {
    let header = vec![
        " n_name ".to_string(),
        "ZIP".to_string(),
        "city".to_string(),
        "State ".to_string(),
        "COUNTRY".to_string(),
    ];
    let rows = vec![
        vec!["Park".into(), "02134".into(), "Boston".into(), "MA".into(), "US".into()],
        vec!["Park".into(), "02135".into(), "Brighton".into()],
    ];
    let history = JournalHistory::from_table(&SheetTable::new(header, rows));

    let loc = resolve_place(&PlaceSelection::Existing("Park".into()), &history);
    assert_eq!(loc.zip, "02135");
    assert_eq!(loc.city, "Brighton");
    // short row: missing cells read as empty
    assert_eq!(loc.state, "");
    assert_eq!(loc.country, "");
}

#[test]
fn test_history_from_canonical_journal_header() {
    let header: Vec<String> = JOURNAL_COLUMNS.iter().map(|c| c.to_string()).collect();
    let mut row = vec![String::new(); JOURNAL_COLUMNS.len()];
    row[6] = "Crissy Field".into();
    row[7] = "San Francisco".into();
    row[8] = "CA".into();
    row[9] = "94129".into();
    row[10] = "United States".into();

    let history = JournalHistory::from_table(&SheetTable::new(header, vec![row]));
    assert_eq!(history.len(), 1);
    assert_eq!(history.distinct_places(), vec!["Crissy Field"]);
    assert_eq!(
        history.last_for("Crissy Field").map(|r| r.location.zip.as_str()),
        Some("94129")
    );
}

#[test]
fn test_selection_parse_recognises_new_place_label() {
    assert_eq!(PlaceSelection::parse(""), PlaceSelection::Empty);
    assert_eq!(
        PlaceSelection::parse("-- Add New Place --"),
        PlaceSelection::NewPlace
    );
    assert_eq!(
        PlaceSelection::parse("Muir Woods"),
        PlaceSelection::Existing("Muir Woods".into())
    );
}

#[test]
fn test_selection_label_parses_back() {
    for selection in [
        PlaceSelection::Empty,
        PlaceSelection::NewPlace,
        PlaceSelection::Existing("Muir Woods".into()),
    ] {
        assert_eq!(PlaceSelection::parse(selection.label()), selection);
    }
    assert_eq!(PlaceSelection::NewPlace.label(), "-- Add New Place --");
}
