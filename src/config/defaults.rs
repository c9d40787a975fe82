//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn language() -> String {
        "en".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use crate::{build::dirs::DEFAULT_BUILD_DIR, utils::reading_time::DEFAULT_WORDS_PER_MINUTE};
    use std::path::PathBuf;

    pub fn output() -> PathBuf {
        DEFAULT_BUILD_DIR.into()
    }

    pub fn words_per_minute() -> u32 {
        DEFAULT_WORDS_PER_MINUTE
    }
}
