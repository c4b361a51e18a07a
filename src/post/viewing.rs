use std::{
    fmt,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use serde::Serialize;

use super::Post;
use crate::{error::Result, page::PageView};

#[derive(Serialize, Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Artist,
    Character,
    Copyright,
    Species,
    General,
    Meta,
    Lore,
}

impl TagCategory {
    pub const ALL: [TagCategory; 7] = [
        Self::Artist,
        Self::Character,
        Self::Copyright,
        Self::Species,
        Self::General,
        Self::Meta,
        Self::Lore,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Character => "character",
            Self::Copyright => "copyright",
            Self::Species => "species",
            Self::General => "general",
            Self::Meta => "meta",
            Self::Lore => "lore",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TagCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| format!("unknown tag category `{}`", s))
    }
}

/// Tags of a single post split by category, in page order.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TagGroups {
    artist: Vec<String>,
    character: Vec<String>,
    copyright: Vec<String>,
    species: Vec<String>,
    general: Vec<String>,
    meta: Vec<String>,
    lore: Vec<String>,
}

impl TagGroups {
    pub fn get(&self, category: TagCategory) -> &[String] {
        match category {
            TagCategory::Artist => &self.artist,
            TagCategory::Character => &self.character,
            TagCategory::Copyright => &self.copyright,
            TagCategory::Species => &self.species,
            TagCategory::General => &self.general,
            TagCategory::Meta => &self.meta,
            TagCategory::Lore => &self.lore,
        }
    }

    fn get_mut(&mut self, category: TagCategory) -> &mut Vec<String> {
        match category {
            TagCategory::Artist => &mut self.artist,
            TagCategory::Character => &mut self.character,
            TagCategory::Copyright => &mut self.copyright,
            TagCategory::Species => &mut self.species,
            TagCategory::General => &mut self.general,
            TagCategory::Meta => &mut self.meta,
            TagCategory::Lore => &mut self.lore,
        }
    }

    pub fn from_page(page: &impl PageView) -> Self {
        let mut groups = Self::default();
        for category in TagCategory::ALL {
            *groups.get_mut(category) = page
                .tag_group(category)
                .iter()
                .map(|name| name.trim().replace(' ', "_"))
                .filter(|tag| !tag.is_empty())
                .collect();
        }
        groups
    }
}

/// The post shown on a single post page, with the details only that page
/// has: categorized tags and the current user's favorite and vote.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ViewingPost {
    #[serde(flatten)]
    post: Post,
    is_faved: bool,
    is_upvoted: bool,
    is_downvoted: bool,
    tag_groups: TagGroups,
}

impl ViewingPost {
    pub fn from_page<P: PageView>(page: &P, element: &P::Element<'_>) -> Result<Self> {
        let post = Post::from_element(element)?;
        let id = post.id();

        Ok(Self {
            is_faved: page.is_favorited(),
            is_upvoted: page.is_upvoted(id),
            is_downvoted: page.is_downvoted(id),
            tag_groups: TagGroups::from_page(page),
            post,
        })
    }

    pub fn post(&self) -> &Post {
        &self.post
    }
    pub fn post_mut(&mut self) -> &mut Post {
        &mut self.post
    }

    pub fn is_faved(&self) -> bool {
        self.is_faved
    }
    pub fn is_upvoted(&self) -> bool {
        self.is_upvoted
    }
    pub fn is_downvoted(&self) -> bool {
        self.is_downvoted
    }

    pub fn tag_groups(&self) -> &TagGroups {
        &self.tag_groups
    }

    pub fn tags_from_type(&self, category: TagCategory) -> &[String] {
        self.tag_groups.get(category)
    }

    /// Like [`Self::tags_from_type`], but an unknown name yields no tags.
    pub fn tags_from_type_name(&self, category: &str) -> &[String] {
        match category.parse::<TagCategory>() {
            Ok(category) => self.tags_from_type(category),
            Err(_) => &[],
        }
    }
}

impl Deref for ViewingPost {
    type Target = Post;

    fn deref(&self) -> &Self::Target {
        &self.post
    }
}

impl DerefMut for ViewingPost {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.post
    }
}
