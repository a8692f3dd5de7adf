//! Serde glue: chart symbols travel as their Chinese text.

/// `Serialize` through `Display`.
macro_rules! impl_text_serialize {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }
    };
}

/// `Serialize` through `Display` and `Deserialize` through `FromStr`.
macro_rules! impl_text_serde {
    ($ty:ty) => {
        $crate::text_serde::impl_text_serialize!($ty);

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use impl_text_serde;
pub(crate) use impl_text_serialize;
