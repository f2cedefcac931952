use chrono::{DateTime, Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> DateTime<Local> {
    Local::now()
}

/// History timestamps as shown in the terminal.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
