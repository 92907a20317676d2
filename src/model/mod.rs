//! Entities, request DTOs and the input coercion they share.

mod customer;
mod sales_order;

pub use customer::{Customer, CustomerDto};
pub use sales_order::{SalesOrder, SalesOrderDto};

/// A persisted record with a server-assigned identifier. `0` means not yet persisted.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Singular table-level name, used in logs and errors.
    const NAME: &'static str;

    fn id(&self) -> i32;

    fn set_id(&mut self, id: i32);

    fn is_persisted(&self) -> bool {
        self.id() > 0
    }
}

/// Lenient deserializers: JSON numbers or numeric strings, several date layouts.
pub(crate) mod coerce {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use std::fmt::Display;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString<T> {
        Number(T),
        String(String),
    }

    fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr,
        T::Err: Display,
    {
        match NumberOrString::<T>::deserialize(deserializer)? {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::String(s) => s.trim().parse().map_err(D::Error::custom),
        }
    }

    pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
        number(deserializer)
    }

    pub fn float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value: f64 = number(deserializer)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(D::Error::custom("value must be finite"))
        }
    }

    /// `YYYY-MM-DD`, RFC 3339 or a naive timestamp; the time part is dropped.
    pub fn date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(raw.trim()).ok_or_else(|| D::Error::custom(format!("invalid date: {}", raw)))
    }

    pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(d);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|dt| dt.date())
    }

    #[cfg(test)]
    mod tests {
        use super::parse_date;
        use chrono::NaiveDate;

        #[test]
        fn accepts_the_three_date_layouts() {
            let expected = NaiveDate::from_ymd_opt(2024, 5, 17);
            assert_eq!(parse_date("2024-05-17"), expected);
            assert_eq!(parse_date("2024-05-17T13:45:00.000Z"), expected);
            assert_eq!(parse_date("2024-05-17T13:45:00-03:00"), expected);
            assert_eq!(parse_date("2024-05-17T13:45:00"), expected);
        }

        #[test]
        fn rejects_garbage_dates() {
            assert_eq!(parse_date("17/05/2024"), None);
            assert_eq!(parse_date("2024-13-01"), None);
            assert_eq!(parse_date(""), None);
        }
    }
}
