use chrono::NaiveDate;

/// Builds the `tbs=cdr` query fragment restricting Google results to an
/// inclusive date range. Missing or malformed dates are a recoverable
/// condition: callers treat an empty directive as "no restriction".
pub fn google_date_range_directive(start_yyyy_mm_dd: &str, end_yyyy_mm_dd: &str) -> String {
    let parsed = NaiveDate::parse_from_str(start_yyyy_mm_dd, "%Y-%m-%d").and_then(|start| {
        NaiveDate::parse_from_str(end_yyyy_mm_dd, "%Y-%m-%d").map(|end| (start, end))
    });

    match parsed {
        Ok((start, end)) => format!(
            "tbs=cdr%3A1%2Ccd_min%3A{}%2Ccd_max%3A{}",
            encode_month_day_year(start),
            encode_month_day_year(end),
        ),
        Err(e) => {
            log::error!("Error generating date range directive: {}", e);
            String::new()
        }
    }
}

// Google expects M/D/YYYY without zero padding, slashes percent-encoded.
fn encode_month_day_year(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string().replace('/', "%2F")
}
