/// ABI JSON result type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while loading or querying an ABI.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document is not valid ABI JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// A type string or value could not be handled by the codec.
    #[error(transparent)]
    Abi(#[from] chainabi_enc::Error),
    /// No function or event with this name.
    #[error("invalid name: {0}")]
    InvalidName(String),
}
