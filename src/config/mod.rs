pub mod output_type;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use dotenv::dotenv;
use std::path::PathBuf;

use booru_filter::TagCategory;
pub use output_type::OutputType;

#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// Saved listing or post page
    #[arg(env = "PAGE")]
    page: PathBuf,
    /// Tag search, e.g. "fox -canine artist*"
    #[arg(short, long, env = "SEARCH", default_value = "", allow_hyphen_values = true)]
    search: String,
    /// How to print the posts
    #[arg(short, long, default_value_t = OutputType::default())]
    output: OutputType,
    /// List the posts the search hides instead of the ones it shows
    #[arg(long)]
    hidden: bool,
    /// Print one tag category of the viewed post
    #[arg(short, long)]
    category: Option<TagCategory>,
    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,
}

impl Config {
    /// Parse the configuration from the environment and command line arguments
    pub fn parse() -> Self {
        dotenv().ok();
        <Self as Parser>::parse()
    }
    /// Create a logger with the configured verbosity level
    pub fn init_logger(&self) {
        env_logger::Builder::new()
            .filter_level(self.verbose.log_level_filter())
            .format_target(false)
            .init();
    }

    pub fn page(&self) -> &PathBuf {
        &self.page
    }
    pub fn search(&self) -> &str {
        &self.search
    }
    pub const fn output(&self) -> OutputType {
        self.output
    }
    pub const fn hidden(&self) -> bool {
        self.hidden
    }
    pub const fn category(&self) -> Option<TagCategory> {
        self.category
    }

    /// Whether a post with the given search verdict should be listed
    pub const fn accept(&self, visible: bool) -> bool {
        visible != self.hidden()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_arguments() {
        let config = Config::try_parse_from([
            "booru-filter",
            "page.html",
            "-s",
            "-fox canine",
            "-o",
            "json",
            "--hidden",
            "-c",
            "species",
        ])
        .unwrap();

        assert_eq!(config.page(), &PathBuf::from("page.html"));
        assert_eq!(config.search(), "-fox canine");
        assert_eq!(config.output(), OutputType::Json);
        assert_eq!(config.category(), Some(TagCategory::Species));
        assert!(config.hidden());
        assert!(config.accept(false));
        assert!(!config.accept(true));
    }

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["booru-filter", "page.html"]).unwrap();
        assert_eq!(config.search(), "");
        assert_eq!(config.output(), OutputType::Table);
        assert_eq!(config.category(), None);
        assert!(!config.hidden());
        assert!(config.accept(true));
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(Config::try_parse_from(["booru-filter", "page.html", "-c", "nope"]).is_err());
    }
}
