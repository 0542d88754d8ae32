use chrono::{DateTime, Utc};
use serde_json::{Number, Value};

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS[.fff]Z`.
#[must_use]
pub fn timestamp_to_iso_utc(time: DateTime<Utc>) -> String {
    format!("{}Z", time.naive_utc().format("%Y-%m-%dT%H:%M:%S%.f"))
}

/// Integral values inside the `i64` range serialize as JSON integers.
#[must_use]
pub fn number_to_json(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        return Value::Number(Number::from(value as i64));
    }
    Number::from_f64(value).map_or(Value::Null, Value::Number)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn iso_timestamps_end_in_z() {
        let time = Utc
            .with_ymd_and_hms(2018, 8, 29, 13, 39, 0)
            .single()
            .expect("valid ts");
        assert_eq!(timestamp_to_iso_utc(time), "2018-08-29T13:39:00Z");
    }

    #[test]
    fn fractional_seconds_are_kept() {
        let time = Utc.timestamp_millis_opt(1_535_549_940_250).single().expect("valid ts");
        assert_eq!(timestamp_to_iso_utc(time), "2018-08-29T13:39:00.250Z");
    }

    #[test]
    fn integral_numbers_serialize_as_integers() {
        assert_eq!(number_to_json(3.0).to_string(), "3");
        assert_eq!(number_to_json(-2.0).to_string(), "-2");
        assert_eq!(number_to_json(2.5).to_string(), "2.5");
        assert_eq!(number_to_json(f64::NAN), Value::Null);
    }
}
