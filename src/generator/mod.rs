//! Ready-made pages every site tends to need.
//!
//! | Page             | File          | Priority |
//! |------------------|---------------|----------|
//! | [`FeedPage`]     | `feed.xml`    | low      |
//! | [`RobotsPage`]   | `robots.txt`  | hidden   |
//! | [`SitemapPage`]  | `sitemap.xml` | hidden   |

pub mod robots;
pub mod rss;
pub mod sitemap;

pub use robots::RobotsPage;
pub use rss::{FeedEntry, FeedPage};
pub use sitemap::SitemapPage;
