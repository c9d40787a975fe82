//! Content model and loaders.
//!
//! A site gathers every kind of content it knows about into one closed
//! enum `C: Content`. Individual kinds are pulled back out of that enum
//! through [`ContentKind`], so pages can ask the context for "all blog
//! posts" with a plain type parameter.
//!
//! ```ignore
//! enum SiteContent {
//!     Post(BlogPost),
//!     Note(Note),
//! }
//!
//! content_kind!(SiteContent::Post => BlogPost, SiteContent::Note => Note);
//!
//! let posts: Vec<&BlogPost> = context.content::<BlogPost>();
//! ```

use super::Context;
use crate::config::Site;
use async_trait::async_trait;
use std::path::Path;

/// A single piece of loaded content, for example a blog post.
pub trait Content: Send + Sync + 'static {
    /// Path of this content relative to the site root,
    /// which is also its place in the output folder.
    fn path(&self) -> &str;

    /// Folder holding resources shipped next to this content
    /// (images of a post bundle, for example).
    fn resources_folder(&self) -> Option<&Path> {
        None
    }

    /// Full URL of this content on the published site.
    fn url_in(&self, site: &Site) -> String {
        site.url_for(self.path())
    }
}

/// Typed access to one kind of content stored in the closed content enum `C`.
pub trait ContentKind<C>: Content + Sized {
    fn from_content(content: &C) -> Option<&Self>;

    fn from_content_mut(content: &mut C) -> Option<&mut Self>;
}

impl<C: Content> ContentKind<C> for C {
    #[inline]
    fn from_content(content: &C) -> Option<&Self> {
        Some(content)
    }

    #[inline]
    fn from_content_mut(content: &mut C) -> Option<&mut Self> {
        Some(content)
    }
}

/// Implement [`ContentKind`] for tuple variants of a content enum.
///
/// ```ignore
/// content_kind!(SiteContent::Post => BlogPost, SiteContent::Note => Note);
/// ```
#[macro_export]
macro_rules! content_kind {
    ($($enum:ident :: $variant:ident => $kind:ty),+ $(,)?) => {
        $(
            impl $crate::ContentKind<$enum> for $kind {
                #[allow(unreachable_patterns)]
                fn from_content(content: &$enum) -> Option<&Self> {
                    match content {
                        $enum::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }

                #[allow(unreachable_patterns)]
                fn from_content_mut(content: &mut $enum) -> Option<&mut Self> {
                    match content {
                        $enum::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

/// Produces content from an external source (files, APIs, ...).
///
/// Loaders get shared access to the context, so they can read its
/// directories and any content loaded by earlier loaders.
#[async_trait]
pub trait ContentLoader<C: Content>: Send + Sync {
    async fn load(&self, context: &Context<C>) -> anyhow::Result<Vec<C>>;
}
