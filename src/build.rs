//! Site building pipeline.
//!
//! # Architecture
//!
//! ```text
//! Context<C>
//!     │
//!     ├── ContentLoader<C>  ──► Vec<C>              (load_content)
//!     │
//!     ├── PageProvider<C>   ──► Vec<Box<dyn Page>>  (generate_content_pages)
//!     │
//!     └── Page<C>           ──► <build>/<path>/<file_name>
//!                               + Location in SiteMap unless hidden
//! ```

mod assets;
mod content;
mod context;
pub mod dirs;
mod error;
mod location;
mod page;

pub use assets::IGNORED_RESOURCES;
pub use content::{Content, ContentKind, ContentLoader};
pub use context::Context;
pub use error::BuildError;
pub use location::{Location, SiteMap, SitemapPriority};
pub use page::{DEFAULT_FILE_NAME, Page, PageProvider};
