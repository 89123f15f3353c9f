use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A lenient JSON scalar that can deserialize from a number, a string, or null.
/// Panel APIs are inconsistent about quoting ports, counters and timestamps.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FlexValue {
    Number(i64),
    Text(String),
    #[default]
    Null,
}

impl FlexValue {
    /// Get as i64 if this is a number or a numeric string
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FlexValue::Number(n) => Some(*n),
            FlexValue::Text(s) => s.trim().parse().ok(),
            FlexValue::Null => None,
        }
    }

    /// Get the value as display text, `None` for null
    pub fn to_text(&self) -> Option<String> {
        match self {
            FlexValue::Number(n) => Some(n.to_string()),
            FlexValue::Text(s) => Some(s.clone()),
            FlexValue::Null => None,
        }
    }

    /// Text form with a fallback for null
    pub fn text_or(&self, fallback: &str) -> String {
        self.to_text().unwrap_or_else(|| fallback.to_string())
    }

    /// True for null and for the string forms panels use to mean "no value"
    pub fn is_blank(&self) -> bool {
        match self {
            FlexValue::Null => true,
            FlexValue::Text(s) => {
                let s = s.trim();
                s.is_empty() || s.eq_ignore_ascii_case("null")
            }
            FlexValue::Number(_) => false,
        }
    }
}

impl fmt::Display for FlexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlexValue::Number(n) => write!(f, "{}", n),
            FlexValue::Text(s) => write!(f, "{}", s),
            FlexValue::Null => write!(f, "null"),
        }
    }
}

impl Serialize for FlexValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FlexValue::Number(n) => serializer.serialize_i64(*n),
            FlexValue::Text(s) => serializer.serialize_str(s),
            FlexValue::Null => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for FlexValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct FlexValueVisitor;

        impl<'de> Visitor<'de> for FlexValueVisitor {
            type Value = FlexValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number, string, or null")
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexValue::Number(v))
            }

            // Values past i64::MAX keep their digits as text
            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(i64::try_from(v)
                    .map(FlexValue::Number)
                    .unwrap_or_else(|_| FlexValue::Text(v.to_string())))
            }

            // Some panels send counters as 2.0
            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
                let in_range = v >= i64::MIN as f64 && v < i64::MAX as f64;
                if v.fract() == 0.0 && in_range {
                    Ok(FlexValue::Number(v as i64))
                } else {
                    Ok(FlexValue::Text(v.to_string()))
                }
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexValue::Text(v.to_string()))
            }

            // Strings are kept verbatim so credentials like "007" survive
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexValue::Text(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexValue::Text(v))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexValue::Null)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexValue::Null)
            }
        }

        deserializer.deserialize_any(FlexValueVisitor)
    }
}
