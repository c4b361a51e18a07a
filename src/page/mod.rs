//! Access to the page the posts are read from.
//!
//! The rest of the crate only talks to these traits, so the same post model
//! works on a parsed HTML document ([`html::HtmlPage`]) and on hand-built
//! fixtures in tests.

pub mod html;

use crate::post::TagCategory;

/// One post element and the attributes it carries.
pub trait SourceElement {
    fn attr(&self, name: &str) -> Option<&str>;

    /// Text of the first descendant carrying `class`.
    fn descendant_text(&self, class: &str) -> Option<String>;
}

impl<T: SourceElement + ?Sized> SourceElement for &T {
    fn attr(&self, name: &str) -> Option<&str> {
        (**self).attr(name)
    }
    fn descendant_text(&self, class: &str) -> Option<String> {
        (**self).descendant_text(class)
    }
}

/// The current view: either a listing of many posts or a single post page.
pub trait PageView {
    type Element<'a>: SourceElement
    where
        Self: 'a;

    fn is_single_post_view(&self) -> bool;

    /// The subject of a single post view.
    fn viewing_element(&self) -> Option<Self::Element<'_>>;

    /// Listing entries in document order.
    fn listing_elements(&self) -> Vec<Self::Element<'_>>;

    /// Raw tag names listed under `category` on a single post view.
    fn tag_group(&self, category: TagCategory) -> Vec<String>;

    fn is_favorited(&self) -> bool;
    fn is_upvoted(&self, post_id: u32) -> bool;
    fn is_downvoted(&self, post_id: u32) -> bool;
}
