//! Slider container constants and validation.
//!
//! The container is the top-level entity: identity, title, publication
//! status, an ordered slide collection, and one settings record. The
//! collections themselves are typed in [`crate::slide`] and
//! [`crate::settings`]; this module validates the container-level
//! scalars used by the admin CRUD surface.

use crate::error::CoreError;

/// Containers start as drafts and only render once published.
pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PUBLISHED: &str = "published";

/// Maximum length of a container title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Suffix appended to the title of a duplicated container.
pub const COPY_SUFFIX: &str = " (Copy)";

/// Validate a container title: non-empty after trimming, within the
/// maximum length.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Slider title must not be empty".to_string(),
        ));
    }
    if trimmed.len() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Slider title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a container status value.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if status == STATUS_DRAFT || status == STATUS_PUBLISHED {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown slider status '{status}'"
        )))
    }
}
