use log::{debug, warn};

use crate::{
    page::PageView,
    post::{Post, PostEntry, ViewingPost},
};

/// Owns a page and the posts read from it.
///
/// Posts are scanned on first access and kept until [`Self::invalidate_cache`]
/// is called. The registry does not notice page changes by itself.
#[derive(Debug)]
pub struct PostRegistry<S> {
    source: S,
    posts: Option<Vec<PostEntry>>,
}

impl<S: PageView> PostRegistry<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            posts: None,
        }
    }

    /// Posts of the current page, rescanned when `use_cache` is false or
    /// nothing is cached.
    pub fn fetch_posts(&mut self, use_cache: bool) -> &mut [PostEntry] {
        if !use_cache || self.posts.is_none() {
            self.posts = Some(self.scan());
        }
        self.posts.as_deref_mut().unwrap_or_default()
    }

    /// Drops the cached posts, call this after the page content changed.
    pub fn invalidate_cache(&mut self) {
        self.posts = None;
    }

    pub fn is_cached(&self) -> bool {
        self.posts.is_some()
    }

    /// The subject of a single post page, `None` on listings.
    pub fn viewing_post(&mut self) -> Option<&mut ViewingPost> {
        match self.fetch_posts(true) {
            [PostEntry::Viewing(viewing)] => Some(viewing),
            _ => None,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    fn scan(&self) -> Vec<PostEntry> {
        if self.source.is_single_post_view() {
            debug!("Scanning single post view");
            return self
                .source
                .viewing_element()
                .and_then(|element| match ViewingPost::from_page(&self.source, &element) {
                    Ok(post) => Some(PostEntry::Viewing(post)),
                    Err(e) => {
                        warn!("Skipping viewed post: {}", e);
                        None
                    }
                })
                .into_iter()
                .collect();
        }

        let elements = self.source.listing_elements();
        debug!("Scanning {} listing entries", elements.len());
        elements
            .iter()
            .enumerate()
            .filter_map(|(index, element)| match Post::from_element(element) {
                Ok(post) => Some(PostEntry::Basic(post)),
                Err(e) => {
                    warn!("Skipping listing entry {}: {}", index, e);
                    None
                }
            })
            .collect()
    }
}
