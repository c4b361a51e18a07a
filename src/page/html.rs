use std::{fs, path::Path};

use log::debug;
use scraper::{ElementRef, Html, Selector};

use super::{PageView, SourceElement};
use crate::{error::Result, post::TagCategory};

const VIEWING: &str = "#image-container";
const LISTING: &str = "#posts-container > .post-preview";
const SEARCH_TAG: &str = ".search-tag";
const FAVORITE_BUTTON: &str = "#add-to-favorites";
const UPVOTED_CLASS: &str = "score-positive";
const DOWNVOTED_CLASS: &str = "score-negative";

fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            debug!("Skipping selector {:?}: {:?}", css, e);
            None
        }
    }
}

fn has_class(element: ElementRef, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// A post element inside a parsed document.
#[derive(Debug, Clone, Copy)]
pub struct HtmlElement<'a>(ElementRef<'a>);

impl SourceElement for HtmlElement<'_> {
    fn attr(&self, name: &str) -> Option<&str> {
        self.0.value().attr(name)
    }

    fn descendant_text(&self, class: &str) -> Option<String> {
        let selector = selector(&format!(".{}", class))?;
        self.0
            .select(&selector)
            .next()
            .map(|e| e.text().collect::<String>())
    }
}

/// A saved listing or post page.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    document: Html,
}

impl HtmlPage {
    pub fn from_html(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading page {}", path.display());
        let html = fs::read_to_string(path)?;
        Ok(Self::from_html(&html))
    }

    fn first(&self, css: &str) -> Option<ElementRef<'_>> {
        let selector = selector(css)?;
        self.document.select(&selector).next()
    }
}

impl PageView for HtmlPage {
    type Element<'a> = HtmlElement<'a> where Self: 'a;

    fn is_single_post_view(&self) -> bool {
        self.first(VIEWING).is_some()
    }

    fn viewing_element(&self) -> Option<HtmlElement<'_>> {
        self.first(VIEWING).map(HtmlElement)
    }

    fn listing_elements(&self) -> Vec<HtmlElement<'_>> {
        let Some(selector) = selector(LISTING) else {
            return vec![];
        };
        self.document.select(&selector).map(HtmlElement).collect()
    }

    fn tag_group(&self, category: TagCategory) -> Vec<String> {
        let css = format!("#tag-list .{}-tag-list > *", category);
        let (Some(entries), Some(search_tag)) = (selector(&css), selector(SEARCH_TAG)) else {
            return vec![];
        };

        self.document
            .select(&entries)
            .map(|entry| {
                entry
                    .select(&search_tag)
                    .flat_map(|e| e.text())
                    .collect::<String>()
            })
            .collect()
    }

    fn is_favorited(&self) -> bool {
        let Some(button) = self.first(FAVORITE_BUTTON) else {
            return false;
        };
        button
            .value()
            .attr("style")
            .map(|style| {
                let style: String = style.chars().filter(|c| !c.is_whitespace()).collect();
                style.to_ascii_lowercase().contains("display:none")
            })
            .unwrap_or(false)
    }

    fn is_upvoted(&self, post_id: u32) -> bool {
        self.first(&format!("#post-vote-up-{}", post_id))
            .map(|e| has_class(e, UPVOTED_CLASS))
            .unwrap_or(false)
    }

    fn is_downvoted(&self, post_id: u32) -> bool {
        self.first(&format!("#post-vote-down-{}", post_id))
            .map(|e| has_class(e, DOWNVOTED_CLASS))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const LISTING_PAGE: &str = indoc! {r##"
        <html><body>
          <div id="posts-container">
            <article class="post-preview" data-id="1" data-tags="fox canine">
              <span class="post-score-faves">&#9829;12</span>
            </article>
            <div class="note">not a post</div>
            <article class="post-preview" data-id="2" data-tags="wolf"></article>
          </div>
          <article class="post-preview" data-id="3" data-tags="outside"></article>
        </body></html>
    "##};

    const POST_PAGE: &str = indoc! {r##"
        <html><body>
          <section id="tag-list">
            <ul class="artist-tag-list">
              <li><a class="search-tag" href="#">artist a</a></li>
            </ul>
            <ul class="species-tag-list">
              <li><a class="search-tag" href="#">fox</a><span class="post-count">3k</span></li>
              <li><a class="search-tag" href="#">red fox</a></li>
            </ul>
          </section>
          <section id="image-container" data-id="77" data-tags="fox red_fox artist_a"></section>
          <button id="add-to-favorites" style="display: none">Favorite</button>
          <a id="post-vote-up-77" class="post-vote-up-link score-positive">up</a>
          <a id="post-vote-down-77" class="post-vote-down-link score-neutral">down</a>
        </body></html>
    "##};

    #[test]
    fn listing_entries_are_direct_children_in_order() {
        let page = HtmlPage::from_html(LISTING_PAGE);
        assert!(!page.is_single_post_view());
        assert!(page.viewing_element().is_none());

        let ids: Vec<_> = page
            .listing_elements()
            .iter()
            .map(|e| e.attr("data-id").map(str::to_string))
            .collect();
        assert_eq!(ids, vec![Some("1".into()), Some("2".into())]);
    }

    #[test]
    fn reads_descendant_text() {
        let page = HtmlPage::from_html(LISTING_PAGE);
        let elements = page.listing_elements();
        assert_eq!(
            elements[0].descendant_text("post-score-faves").as_deref(),
            Some("\u{2665}12")
        );
        assert_eq!(elements[1].descendant_text("post-score-faves"), None);
    }

    #[test]
    fn reads_single_post_view() {
        let page = HtmlPage::from_html(POST_PAGE);
        assert!(page.is_single_post_view());
        let element = page.viewing_element().unwrap();
        assert_eq!(element.attr("data-id"), Some("77"));

        assert_eq!(page.tag_group(TagCategory::Artist), vec!["artist a"]);
        assert_eq!(page.tag_group(TagCategory::Species), vec!["fox", "red fox"]);
        assert!(page.tag_group(TagCategory::Lore).is_empty());
    }

    #[test]
    fn reads_interaction_state() {
        let page = HtmlPage::from_html(POST_PAGE);
        assert!(page.is_favorited());
        assert!(page.is_upvoted(77));
        assert!(!page.is_downvoted(77));
        assert!(!page.is_upvoted(78));

        let listing = HtmlPage::from_html(LISTING_PAGE);
        assert!(!listing.is_favorited());
    }
}
