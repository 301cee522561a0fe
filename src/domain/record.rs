//! Record kinds stored in collections

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A value that can be stored as one element of a collection file.
pub trait Record: Serialize + DeserializeOwned + Clone + Debug {
    /// Human readable name of the record kind, used in messages.
    const KIND: &'static str;
}
