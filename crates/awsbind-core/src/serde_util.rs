//! Serde helpers for the JSON protocols.

use chrono::{DateTime, Utc};

fn to_epoch(dt: &DateTime<Utc>) -> f64 {
    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_millis()) / 1000.0
}

fn from_epoch(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = (((secs - whole) * 1_000.0).round() as u32).min(999) * 1_000_000;
    DateTime::from_timestamp(whole as i64, nanos)
}

/// Timestamps as epoch seconds, fractional part allowed.
pub mod epoch_seconds {
    use super::*;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        if dt.timestamp_subsec_millis() == 0 {
            s.serialize_i64(dt.timestamp())
        } else {
            s.serialize_f64(to_epoch(dt))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let secs = f64::deserialize(d)?;
        from_epoch(secs).ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", secs)))
    }
}

/// Optional timestamps as epoch seconds.
pub mod option_epoch_seconds {
    use super::*;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => super::epoch_seconds::serialize(dt, s),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<f64>::deserialize(d)? {
            Some(secs) => from_epoch(secs)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {}", secs))),
            None => Ok(None),
        }
    }
}

/// Declare an enum for a string-valued wire field.
///
/// Values this version does not know are kept in an `Other` variant and
/// serialize back unchanged.
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value not known to this version of the crate.
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Other(value) => value.as_str(),
                }
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => $name::$variant, )+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(value.as_str()))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamped {
        #[serde(
            default,
            with = "option_epoch_seconds",
            skip_serializing_if = "Option::is_none"
        )]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn integer_and_fraction() {
        let s: Stamped = serde_json::from_str(r#"{"at":1440938160}"#).unwrap();
        assert_eq!(s.at.unwrap().to_rfc3339(), "2015-08-30T12:36:00+00:00");

        let s: Stamped = serde_json::from_str(r#"{"at":1440938160.25}"#).unwrap();
        assert_eq!(s.at.unwrap().timestamp_subsec_millis(), 250);
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"{"at":1440938160.25}"#);
    }

    #[test]
    fn absent_and_null() {
        let s: Stamped = serde_json::from_str("{}").unwrap();
        assert!(s.at.is_none());
        let s: Stamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert!(s.at.is_none());
        assert_eq!(serde_json::to_string(&s).unwrap(), "{}");
    }

    crate::string_enum! {
        enum Color {
            Red => "RED",
            Blue => "BLUE",
        }
    }

    #[test]
    fn string_enum_keeps_unknown_values() {
        let c: Color = serde_json::from_str(r#""RED""#).unwrap();
        assert_eq!(c, Color::Red);
        let c: Color = serde_json::from_str(r#""GREEN""#).unwrap();
        assert_eq!(c, Color::Other("GREEN".to_string()));
        assert_eq!(serde_json::to_string(&c).unwrap(), r#""GREEN""#);
        assert_eq!(Color::Blue.to_string(), "BLUE");
    }

    #[test]
    fn whole_seconds_serialize_as_integer() {
        let s = Stamped {
            at: DateTime::from_timestamp(1_600_000_000, 0),
        };
        assert_eq!(serde_json::to_string(&s).unwrap(), r#"{"at":1600000000}"#);
    }
}
