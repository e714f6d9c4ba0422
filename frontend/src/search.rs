use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

pub const MIN_TRAVELERS: u8 = 1;
pub const MAX_TRAVELERS: u8 = 10;
pub const DEFAULT_TRAVELERS: u8 = 2;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
    #[error("End date must be on or after the start date")]
    EndBeforeStart,
}

/// Raw hero form state, exactly as typed.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchForm {
    pub where_to: String,
    pub start: String,
    pub end: String,
    pub travelers: u8,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            where_to: String::new(),
            start: String::new(),
            end: String::new(),
            travelers: DEFAULT_TRAVELERS,
        }
    }
}

/// Clamps the travelers input, rounding fractions down. Anything unparsable
/// or below one counts as one traveler.
pub fn parse_travelers(input: &str) -> u8 {
    match input.trim().parse::<f64>() {
        Ok(n) if n >= MIN_TRAVELERS as f64 => n.floor().min(MAX_TRAVELERS as f64) as u8,
        _ => MIN_TRAVELERS,
    }
}

fn parse_date(input: &str) -> Result<Option<NaiveDate>, SearchError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map(Some)
        .map_err(|_| SearchError::InvalidDate(input.to_string()))
}

impl SearchForm {
    /// Label on the dates button.
    pub fn dates_label(&self) -> String {
        if !self.start.is_empty() && !self.end.is_empty() {
            format!("{} to {}", self.start, self.end)
        } else {
            "Add dates".to_string()
        }
    }

    pub fn to_query(&self) -> Result<SearchQuery, SearchError> {
        let start = parse_date(&self.start)?;
        let end = parse_date(&self.end)?;
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                return Err(SearchError::EndBeforeStart);
            }
        }

        let where_to = self.where_to.trim();
        Ok(SearchQuery {
            where_to: (!where_to.is_empty()).then(|| where_to.to_string()),
            start,
            end,
            travelers: self.travelers.clamp(MIN_TRAVELERS, MAX_TRAVELERS),
        })
    }
}

/// Query parameters of the destinations page.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    pub where_to: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub travelers: u8,
}

/// The destinations query string as typed into the address bar, values
/// still unparsed.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawSearchQuery {
    #[serde(rename = "where")]
    pub where_to: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub travelers: Option<String>,
}

impl From<RawSearchQuery> for SearchQuery {
    /// Lenient version of the hero form rules. Unusable dates are dropped
    /// instead of rejecting the whole query.
    fn from(raw: RawSearchQuery) -> Self {
        let date = |value: Option<String>| value.and_then(|v| parse_date(&v).ok().flatten());
        let start = date(raw.start);
        let end = date(raw.end).filter(|end| start.map_or(true, |start| *end >= start));
        let where_to = raw
            .where_to
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty());

        Self {
            where_to,
            start,
            end,
            travelers: raw
                .travelers
                .map_or(DEFAULT_TRAVELERS, |t| parse_travelers(&t)),
        }
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            where_to: None,
            start: None,
            end: None,
            travelers: DEFAULT_TRAVELERS,
        }
    }
}

impl SearchQuery {
    /// `where=..&start=..&end=..&travelers=N`, empty fields left out.
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if let Some(where_to) = &self.where_to {
            params.push(format!("where={}", urlencoding::encode(where_to)));
        }
        if let Some(start) = self.start {
            params.push(format!("start={}", start.format(DATE_FORMAT)));
        }
        if let Some(end) = self.end {
            params.push(format!("end={}", end.format(DATE_FORMAT)));
        }
        params.push(format!("travelers={}", self.travelers));
        params.join("&")
    }

    pub fn href(&self) -> String {
        format!("/destinations?{}", self.to_query_string())
    }

    /// Case-insensitive substring match against any of `fields`. An empty
    /// search matches everything.
    pub fn matches_place(&self, fields: &[&str]) -> bool {
        match &self.where_to {
            None => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                fields.iter().any(|f| f.to_lowercase().contains(&needle))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(where_to: &str, start: &str, end: &str, travelers: u8) -> SearchForm {
        SearchForm {
            where_to: where_to.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            travelers,
        }
    }

    #[test]
    fn default_form_only_carries_travelers() {
        let query = SearchForm::default().to_query().unwrap();
        assert_eq!(query.href(), "/destinations?travelers=2");
    }

    #[test]
    fn builds_params_in_order_and_encodes_place() {
        let query = form("  Goa & Kerala ", "2025-03-01", "2025-03-09", 4).to_query().unwrap();
        assert_eq!(
            query.to_query_string(),
            "where=Goa%20%26%20Kerala&start=2025-03-01&end=2025-03-09&travelers=4"
        );
    }

    #[test]
    fn blank_place_is_omitted() {
        let query = form("   ", "2025-03-01", "", 2).to_query().unwrap();
        assert_eq!(query.to_query_string(), "start=2025-03-01&travelers=2");
    }

    #[test]
    fn end_before_start_is_rejected() {
        assert_eq!(
            form("", "2025-03-09", "2025-03-01", 2).to_query(),
            Err(SearchError::EndBeforeStart)
        );
        assert!(form("", "2025-03-09", "2025-03-09", 2).to_query().is_ok());
    }

    #[test]
    fn malformed_date_is_rejected() {
        assert_eq!(
            form("", "03/01/2025", "", 2).to_query(),
            Err(SearchError::InvalidDate("03/01/2025".to_string()))
        );
    }

    #[test]
    fn travelers_are_clamped() {
        assert_eq!(parse_travelers("0"), 1);
        assert_eq!(parse_travelers("-3"), 1);
        assert_eq!(parse_travelers("abc"), 1);
        assert_eq!(parse_travelers(""), 1);
        assert_eq!(parse_travelers("7"), 7);
        assert_eq!(parse_travelers("42"), 10);
        assert_eq!(parse_travelers("2.5"), 2);
        assert_eq!(parse_travelers("0.5"), 1);
        assert_eq!(parse_travelers("99999999999999999999"), 10);
        assert_eq!(parse_travelers("NaN"), 1);
        assert_eq!(form("", "", "", 0).to_query().unwrap().travelers, 1);
    }

    #[test]
    fn dates_label() {
        assert_eq!(form("", "2025-03-01", "", 2).dates_label(), "Add dates");
        assert_eq!(
            form("", "2025-03-01", "2025-03-04", 2).dates_label(),
            "2025-03-01 to 2025-03-04"
        );
    }

    fn raw(where_to: Option<&str>, start: Option<&str>, end: Option<&str>, travelers: Option<&str>) -> RawSearchQuery {
        RawSearchQuery {
            where_to: where_to.map(str::to_string),
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            travelers: travelers.map(str::to_string),
        }
    }

    #[test]
    fn address_bar_travelers_are_clamped() {
        assert_eq!(SearchQuery::from(raw(None, None, None, Some("0"))).travelers, 1);
        assert_eq!(SearchQuery::from(raw(None, None, None, Some("42"))).travelers, 10);
        assert_eq!(SearchQuery::from(raw(None, None, None, None)).travelers, DEFAULT_TRAVELERS);
    }

    #[test]
    fn address_bar_inverted_range_keeps_only_start() {
        let query = SearchQuery::from(raw(None, Some("2025-03-09"), Some("2025-03-01"), None));
        assert_eq!(query.start, NaiveDate::from_ymd_opt(2025, 3, 9));
        assert_eq!(query.end, None);
    }

    #[test]
    fn address_bar_blank_or_bad_fields_are_dropped() {
        let query = SearchQuery::from(raw(Some("  Goa "), Some(""), Some("soon"), Some("3")));
        assert_eq!(
            query,
            SearchQuery {
                where_to: Some("Goa".to_string()),
                start: None,
                end: None,
                travelers: 3,
            }
        );
        assert_eq!(SearchQuery::from(raw(Some("   "), None, None, None)).where_to, None);
    }

    #[test]
    fn blank_date_does_not_fail_the_whole_query() {
        let raw: RawSearchQuery =
            serde_json::from_str(r#"{"where": "Goa", "start": "", "travelers": "3"}"#).unwrap();
        let query = SearchQuery::from(raw);
        assert_eq!(query.where_to.as_deref(), Some("Goa"));
        assert_eq!(query.start, None);
        assert_eq!(query.travelers, 3);
        assert_eq!(query.href(), "/destinations?where=Goa&travelers=3");
    }

    #[test]
    fn place_matching_ignores_case() {
        let query = SearchQuery {
            where_to: Some("kerala".to_string()),
            ..SearchQuery::default()
        };
        assert!(query.matches_place(&["Munnar", "Kerala, India"]));
        assert!(!query.matches_place(&["Dubai", "UAE"]));
        assert!(SearchQuery::default().matches_place(&["anything"]));
    }
}
