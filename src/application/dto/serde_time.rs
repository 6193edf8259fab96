//! RFC 3339 timestamps with a `Z` suffix. Sub-second digits are written only
//! when present, so stored microsecond values survive a round trip.
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => super::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(serde::de::Error::custom)
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "crate::application::dto::serde_time")]
        at: DateTime<Utc>,
        #[serde(with = "crate::application::dto::serde_time::option")]
        stop: Option<DateTime<Utc>>,
    }

    #[test]
    fn whole_seconds_have_no_fraction() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let json = serde_json::to_string(&Stamped { at, stop: None }).unwrap();
        assert_eq!(json, r#"{"at":"2024-01-01T10:00:00Z","stop":null}"#);
    }

    #[test]
    fn microseconds_survive_a_round_trip() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()
            + chrono::Duration::microseconds(123_456);
        let json = serde_json::to_string(&Stamped { at, stop: Some(at) }).unwrap();
        assert_eq!(
            json,
            r#"{"at":"2024-01-01T10:00:00.123456Z","stop":"2024-01-01T10:00:00.123456Z"}"#
        );

        let back: Stamped = serde_json::from_str(&json).unwrap();
        assert_eq!(back.at, at);
        assert_eq!(back.stop, Some(at));
    }
}
