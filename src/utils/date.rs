use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Date as printed in the document title block (DD/MM/YYYY).
pub fn display_date(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// Compact stamp used in derived output filenames (YYYYMMDD).
pub fn file_stamp(d: NaiveDate) -> String {
    d.format("%Y%m%d").to_string()
}
