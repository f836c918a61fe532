//! Origin normalization for the script header.

use url::{Origin, Url};

use crate::domain::AppError;

/// Reduce a URL to its `scheme://host[:port]` origin.
///
/// Paths, queries and fragments are dropped. URLs without a tuple origin (`file:`, `data:`, ...)
/// are rejected.
pub fn normalize_origin(raw: &str) -> Result<String, AppError> {
    let url = Url::parse(raw.trim()).map_err(|err| AppError::InvalidOrigin {
        value: raw.to_string(),
        reason: err.to_string(),
    })?;

    match url.origin() {
        origin @ Origin::Tuple(..) => Ok(origin.ascii_serialization()),
        Origin::Opaque(_) => Err(AppError::InvalidOrigin {
            value: raw.to_string(),
            reason: format!("scheme '{}' has no origin", url.scheme()),
        }),
    }
}
