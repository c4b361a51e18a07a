pub mod viewing;

use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use mime_guess::Mime;
use serde::Serialize;

pub use viewing::{TagCategory, TagGroups, ViewingPost};

use crate::{
    error::{Error, Result},
    page::SourceElement,
    query::{tags_match_filter, Query},
};

const ID: &str = "data-id";
const TAGS: &str = "data-tags";
const RATING: &str = "data-rating";
const FAV_COUNT: &str = "data-fav-count";
const SCORE: &str = "data-score";
const FILE_URL: &str = "data-file-url";
const SAMPLE_URL: &str = "data-large-file-url";
const PREVIEW_URL: &str = "data-preview-file-url";
const FILE_EXT: &str = "data-file-ext";
const UPLOADER_ID: &str = "data-uploader-id";
const UPLOADER_NAME: &str = "data-uploader";
const HAS_SOUND: &str = "data-has-sound";
const FLAGS: &str = "data-flags";

const FAVES_CLASS: &str = "post-score-faves";
const SCORE_CLASS: &str = "post-score-score";

#[derive(Serialize, Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Safe,
    Questionable,
    Explicit,
}

impl Rating {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "s" => Some(Self::Safe),
            "q" => Some(Self::Questionable),
            "e" => Some(Self::Explicit),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Safe => "s",
            Self::Questionable => "q",
            Self::Explicit => "e",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Safe => write!(f, "safe"),
            Self::Questionable => write!(f, "questionable"),
            Self::Explicit => write!(f, "explicit"),
        }
    }
}

/// Metadata of one post as it appeared on the page.
///
/// Everything except the visibility bit is fixed at construction. When the
/// page changes, build new posts instead of patching old ones.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    id: u32,
    tags: String,
    rating: Rating,
    favorites: Option<u32>,
    score: Option<i32>,
    file_url: String,
    sample_url: String,
    preview_url: String,
    file_extension: String,
    uploader_id: u32,
    uploader_name: String,
    has_sound: bool,
    flags: String,
    visible: bool,
}

impl Post {
    pub fn from_element(element: &impl SourceElement) -> Result<Self> {
        let rating = required(element, RATING)?;
        let rating = Rating::from_code(rating).ok_or_else(|| Error::InvalidAttribute {
            name: RATING,
            value: rating.to_string(),
        })?;

        // The count attributes are missing or blank on some layouts, the
        // score widget inside the element still has them.
        let favorites = counter(element, FAV_COUNT, FAVES_CLASS);
        let score = counter(element, SCORE, SCORE_CLASS);

        Ok(Self {
            id: required_number(element, ID)?,
            tags: required(element, TAGS)?.to_string(),
            rating,
            favorites,
            score,
            file_url: optional(element, FILE_URL),
            sample_url: optional(element, SAMPLE_URL),
            preview_url: optional(element, PREVIEW_URL),
            file_extension: optional(element, FILE_EXT),
            uploader_id: required_number(element, UPLOADER_ID)?,
            uploader_name: optional(element, UPLOADER_NAME),
            has_sound: element.attr(HAS_SOUND) == Some("true"),
            flags: optional(element, FLAGS),
            visible: true,
        })
    }

    /// Whether the post would show up when searching the site for `query`.
    pub fn tags_matches_filter(&self, query: &str) -> bool {
        tags_match_filter(query, &self.tags)
    }

    pub fn matches(&self, query: &Query) -> bool {
        query.matches(&self.tags)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
    pub fn set_visibility(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn id(&self) -> u32 {
        self.id
    }
    pub fn tags(&self) -> &str {
        &self.tags
    }
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags.split_whitespace()
    }
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag_list().any(|t| t == tag)
    }
    pub fn rating(&self) -> Rating {
        self.rating
    }
    pub fn favorites(&self) -> Option<u32> {
        self.favorites
    }
    pub fn score(&self) -> Option<i32> {
        self.score
    }

    pub fn file_url(&self) -> &str {
        &self.file_url
    }
    pub fn sample_url(&self) -> &str {
        &self.sample_url
    }
    pub fn preview_url(&self) -> &str {
        &self.preview_url
    }
    /// The site hides file links of some posts from anonymous users.
    pub fn is_restricted(&self) -> bool {
        self.file_url.is_empty()
    }

    pub fn file_extension(&self) -> &str {
        &self.file_extension
    }
    pub fn mime_type(&self) -> Option<Mime> {
        mime_guess::from_ext(&self.file_extension).first()
    }
    pub fn is_video(&self) -> bool {
        self.mime_type()
            .map(|mime| mime.type_() == "video")
            .unwrap_or(false)
    }

    pub fn uploader_id(&self) -> u32 {
        self.uploader_id
    }
    pub fn uploader_name(&self) -> &str {
        &self.uploader_name
    }

    pub fn has_sound(&self) -> bool {
        self.has_sound
    }
    pub fn flags(&self) -> &str {
        &self.flags
    }
    pub fn flag_list(&self) -> impl Iterator<Item = &str> {
        self.flags.split_whitespace()
    }
}

fn required<'a>(element: &'a impl SourceElement, name: &'static str) -> Result<&'a str> {
    element.attr(name).ok_or(Error::MissingAttribute(name))
}

fn required_number<T: FromStr>(element: &impl SourceElement, name: &'static str) -> Result<T> {
    let value = required(element, name)?;
    value.trim().parse().map_err(|_| Error::InvalidAttribute {
        name,
        value: value.to_string(),
    })
}

fn optional(element: &impl SourceElement, name: &str) -> String {
    element.attr(name).unwrap_or_default().to_string()
}

fn counter<T: FromStr>(element: &impl SourceElement, name: &str, class: &str) -> Option<T> {
    element
        .attr(name)
        .and_then(|value| value.trim().parse().ok())
        .or_else(|| {
            element
                .descendant_text(class)
                .and_then(|text| parse_counter(&text))
        })
}

/// Parses counter widgets such as `♥12` or `↑-3`.
fn parse_counter<T: FromStr>(text: &str) -> Option<T> {
    text.trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit() && c != '-')
        .trim()
        .parse()
        .ok()
}

/// A post from the current page. Single post pages produce a
/// [`PostEntry::Viewing`], listings produce [`PostEntry::Basic`] ones.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PostEntry {
    Basic(Post),
    Viewing(ViewingPost),
}

impl PostEntry {
    pub fn post(&self) -> &Post {
        match self {
            Self::Basic(post) => post,
            Self::Viewing(viewing) => viewing.post(),
        }
    }

    pub fn post_mut(&mut self) -> &mut Post {
        match self {
            Self::Basic(post) => post,
            Self::Viewing(viewing) => viewing.post_mut(),
        }
    }

    pub fn as_viewing(&self) -> Option<&ViewingPost> {
        match self {
            Self::Viewing(viewing) => Some(viewing),
            Self::Basic(_) => None,
        }
    }
}

impl Deref for PostEntry {
    type Target = Post;

    fn deref(&self) -> &Self::Target {
        self.post()
    }
}

impl DerefMut for PostEntry {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.post_mut()
    }
}
