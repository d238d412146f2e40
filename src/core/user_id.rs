use chrono::{DateTime, Datelike, TimeZone};

/// Registration tag: `62` + YYYY + first four alphanumerics of the email
/// (lowercased, padded with `x`) + MMDD.
///
/// Not unique: two emails sharing a prefix and registering on the same day
/// get the same id.
pub fn generate_user_id<Tz: TimeZone>(email: &str, now: &DateTime<Tz>) -> String {
    // lowercase before counting: some letters lowercase to several chars
    let mut fragment: String = email
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .take(4)
        .collect();

    while fragment.chars().count() < 4 {
        fragment.push('x');
    }

    format!(
        "62{:04}{}{:02}{:02}",
        now.year(),
        fragment,
        now.month(),
        now.day()
    )
}
