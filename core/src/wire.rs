//! Serde adapters for the API's loosely typed numbers.
//!
//! The live API sends most numbers as JSON strings (`"id":"2"`,
//! `"price":"0.00"`). Each adapter accepts either form and always serializes a
//! plain JSON number. Use with `#[serde(with = "...")]`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<N> {
    Number(N),
    String(String),
}

pub mod int {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::NumberOrString;

    pub fn serialize<S: Serializer>(value: &u64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        match NumberOrString::<u64>::deserialize(d)? {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::String(s) => s.trim().parse().map_err(de::Error::custom),
        }
    }

    pub mod option {
        use serde::{Deserializer, Serializer};

        pub fn serialize<S: Serializer>(value: &Option<u64>, s: S) -> Result<S::Ok, S::Error> {
            match value {
                Some(n) => s.serialize_u64(*n),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
            super::super::optional(d, |s| s.parse())
        }
    }
}

pub mod signed {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::NumberOrString;

    pub fn serialize<S: Serializer>(value: &i64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
        match NumberOrString::<i64>::deserialize(d)? {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::String(s) => s.trim().parse().map_err(de::Error::custom),
        }
    }
}

pub mod float {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::NumberOrString;

    pub fn serialize<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        match NumberOrString::<f64>::deserialize(d)? {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::String(s) => s.trim().parse().map_err(de::Error::custom),
        }
    }
}

/// `null` and the empty string both mean absent.
fn optional<'de, D, N, E>(d: D, parse: impl Fn(&str) -> Result<N, E>) -> Result<Option<N>, D::Error>
where
    D: Deserializer<'de>,
    N: Deserialize<'de>,
    E: std::fmt::Display,
{
    match Option::<NumberOrString<N>>::deserialize(d)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::String(s)) => parse(s.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "super::int")]
        id: u64,
        #[serde(with = "super::float")]
        price: f64,
        #[serde(default, with = "super::int::option")]
        count: Option<u64>,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let a: Sample = serde_json::from_str(r#"{"id":7,"price":1.5,"count":3}"#).unwrap();
        let b: Sample = serde_json::from_str(r#"{"id":"7","price":"1.50","count":"3"}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.count, Some(3));
    }

    #[test]
    fn missing_null_and_blank_optional_are_absent() {
        let missing: Sample = serde_json::from_str(r#"{"id":1,"price":0}"#).unwrap();
        let null: Sample = serde_json::from_str(r#"{"id":1,"price":0,"count":null}"#).unwrap();
        let blank: Sample = serde_json::from_str(r#"{"id":1,"price":0,"count":""}"#).unwrap();
        assert_eq!(missing.count, None);
        assert_eq!(null.count, None);
        assert_eq!(blank.count, None);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        assert!(serde_json::from_str::<Sample>(r#"{"id":"abc","price":0}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"id":-1,"price":0}"#).is_err());
    }

    #[test]
    fn signed_accepts_negative_strings() {
        #[derive(Deserialize)]
        struct Code {
            #[serde(with = "super::signed")]
            code: i64,
        }
        let a: Code = serde_json::from_str(r#"{"code":"-3"}"#).unwrap();
        let b: Code = serde_json::from_str(r#"{"code":404}"#).unwrap();
        assert_eq!(a.code, -3);
        assert_eq!(b.code, 404);
        assert!(serde_json::from_str::<Code>(r#"{"code":"x"}"#).is_err());
    }

    #[test]
    fn serializes_plain_numbers() {
        let sample = Sample {
            id: 2,
            price: 4.99,
            count: None,
        };
        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["price"], 4.99);
        assert!(json["count"].is_null());
    }
}
