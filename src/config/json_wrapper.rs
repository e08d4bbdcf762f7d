use std::fmt;
use std::ops::Deref;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that is serialized as a JSON string.
///
/// Environment variables can only carry strings, so list-valued settings
/// such as `ROTATE__BENCH__SIZES='[100, 1000]'` are passed as JSON. Native
/// values (e.g. a TOML array) are accepted as well.
#[derive(Clone, PartialEq, Eq)]
pub struct JsonStrWrapper<T>(pub T);

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr<T> {
    Str(String),
    Native(T),
}

impl<T> Serialize for JsonStrWrapper<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let s = serde_json::to_string(&self.0)
            .map_err(serde::ser::Error::custom)?;

        serializer.serialize_str(&s)
    }
}

impl<'de, T> Deserialize<'de> for JsonStrWrapper<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        match Repr::<T>::deserialize(deserializer)? {
            Repr::Str(s) => serde_json::from_str(&s)
                .map(Self)
                .map_err(serde::de::Error::custom),
            Repr::Native(value) => Ok(Self(value)),
        }
    }
}

impl<T> Deref for JsonStrWrapper<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for JsonStrWrapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_string() {
        let value: JsonStrWrapper<Vec<usize>> =
            serde_json::from_str(r#""[1, 2, 3]""#).unwrap();

        assert_eq!(value.0, vec![1, 2, 3]);
    }

    #[test]
    fn parses_native_value() {
        let value: JsonStrWrapper<Vec<usize>> =
            serde_json::from_str("[4, 5]").unwrap();

        assert_eq!(*value, vec![4, 5]);
    }

    #[test]
    fn serializes_as_string() {
        let value = JsonStrWrapper(vec![7, 8]);

        let json = serde_json::to_string(&value).unwrap();

        assert_eq!(json, r#""[7,8]""#);
    }

    #[test]
    fn rejects_malformed_json() {
        let result: Result<JsonStrWrapper<Vec<usize>>, _> =
            serde_json::from_str(r#""[1, 2""#);

        assert!(result.is_err());
    }
}
