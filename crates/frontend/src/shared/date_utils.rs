/// Utilities for date and time formatting
///
/// Dates are shown the Chilean way (`DD-MM-YYYY`), relative times and month
/// labels in Spanish.
use chrono::{DateTime, Utc};

const MONTHS_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Format ISO datetime string to DD-MM-YYYY HH:MM format
/// Example: "2024-03-15T14:02:26.123Z" -> "15-03-2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let time: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, time);
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to DD-MM-YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15-03-2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}-{}-{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// "Hace N minutos" relative to `now`; unparsable timestamps are returned as-is.
pub fn relative_time_at(timestamp: &str, now: DateTime<Utc>) -> String {
    let parsed = match DateTime::parse_from_rfc3339(timestamp) {
        Ok(ts) => ts.with_timezone(&Utc),
        Err(_) => return timestamp.to_string(),
    };

    let minutes = (now - parsed).num_minutes();
    if minutes < 1 {
        return "Hace un momento".to_string();
    }
    if minutes < 60 {
        return format!("Hace {} minuto{}", minutes, plural(minutes));
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("Hace {} hora{}", hours, plural(hours));
    }
    let days = hours / 24;
    format!("Hace {} día{}", days, plural(days))
}

pub fn relative_time(timestamp: &str) -> String {
    relative_time_at(timestamp, Utc::now())
}

fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

/// "2024-03" -> "mar 2024"
pub fn format_month(month_str: &str) -> String {
    let parsed = month_str
        .split_once('-')
        .and_then(|(y, m)| Some((y, m.get(..2).unwrap_or(m).parse::<usize>().ok()?)));
    match parsed {
        Some((year, month @ 1..=12)) => format!("{} {}", MONTHS_SHORT[month - 1], year),
        _ => month_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15-03-2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31-12-2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15-03-2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15-03-2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_month("marzo"), "marzo");
        assert_eq!(format_month("2024-13"), "2024-13");
    }

    #[test]
    fn test_relative_time() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(relative_time_at("2024-03-15T11:59:40Z", now), "Hace un momento");
        assert_eq!(relative_time_at("2024-03-15T11:59:00Z", now), "Hace 1 minuto");
        assert_eq!(relative_time_at("2024-03-15T11:15:00Z", now), "Hace 45 minutos");
        assert_eq!(relative_time_at("2024-03-15T09:00:00Z", now), "Hace 3 horas");
        assert_eq!(relative_time_at("2024-03-14T11:00:00Z", now), "Hace 1 día");
        assert_eq!(relative_time_at("2024-03-10T12:00:00Z", now), "Hace 5 días");
        assert_eq!(relative_time_at("ayer", now), "ayer");
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2024-03"), "mar 2024");
        assert_eq!(format_month("2023-12"), "dic 2023");
        assert_eq!(format_month("2024-09-01"), "sept 2024");
    }
}
