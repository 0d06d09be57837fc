/// Errors produced by the bag and its consumers.
///
/// Reading or deleting an absent key is never an error; only operations that
/// need a callable, a required key, or a JSON document can fail.
#[derive(Debug, thiserror::Error)]
pub enum BagError {
    /// A callable was required but the value was of another kind
    #[error("cannot call or protect a value of kind `{0}`")]
    NotCallable(&'static str),
    /// A key that had to be present was missing
    #[error("key not found: {0}")]
    KeyNotFound(String),
    /// The JSON document could not be parsed or produced
    #[cfg(feature = "serde")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// A bag can only be loaded from a JSON object
    #[cfg(feature = "serde")]
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}
