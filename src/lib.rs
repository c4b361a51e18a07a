//! Reads the posts of a saved booru page and filters them with the site's
//! tag search syntax.

pub mod error;
pub mod page;
pub mod post;
pub mod query;
pub mod registry;

pub use error::{Error, Result};
pub use page::{html::HtmlPage, PageView, SourceElement};
pub use post::{Post, PostEntry, Rating, TagCategory, ViewingPost};
pub use query::{tags_match_filter, Query};
pub use registry::PostRegistry;
