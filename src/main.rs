mod config;
#[macro_use]
mod utils;

use std::error::Error;

use booru_filter::{HtmlPage, PostEntry, PostRegistry, Query};
use config::{Config, OutputType};
use log::{info, warn};

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    config.init_logger();
    info!("# Booru Filter #");
    info!("");

    let page = step!("Reading page", HtmlPage::from_file(config.page())?);
    let mut registry = PostRegistry::new(page);
    let query = Query::parse(config.search());

    let posts = step!("Filtering posts", {
        let posts = registry.fetch_posts(true);
        for post in posts.iter_mut() {
            let visible = post.matches(&query);
            post.set_visibility(visible);
        }
        posts
    });

    let total = posts.len();
    let visible = posts.iter().filter(|p| p.is_visible()).count();
    info!("{} posts, {} shown, {} hidden", total, visible, total - visible);
    info!("");

    let selected: Vec<&PostEntry> = posts
        .iter()
        .filter(|p| config.accept(p.is_visible()))
        .collect();
    match config.output() {
        OutputType::Ids => selected.iter().for_each(|p| println!("{}", p.id())),
        OutputType::Table => print_table(&selected),
        OutputType::Json => println!("{}", serde_json::to_string_pretty(&selected)?),
    }

    if let Some(category) = config.category() {
        match registry.viewing_post() {
            Some(post) => {
                info!("{} tags of post {}", category, post.id());
                for tag in post.tags_from_type(category) {
                    println!("{}", tag);
                }
            }
            None => warn!("{} is not a single post page", config.page().display()),
        }
    }

    Ok(())
}

fn print_table(posts: &[&PostEntry]) {
    let counter = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());

    let (mut id_width, mut ext_width) = (2_usize, 3_usize);
    for post in posts.iter() {
        id_width = post.id().to_string().len().max(id_width);
        ext_width = post.file_extension().len().max(ext_width);
    }

    println!(
        "+-{:-<id_width$}-+-{:-<12}-+-{:-<6}-+-{:-<6}-+-{:-<ext_width$}-+-{}------- - -",
        "", "", "", "", "", " Tags "
    );
    println!(
        "| {:id_width$} | {:12} | {:>6} | {:>6} | {:ext_width$} |",
        "Id", "Rating", "Score", "Favs", "Ext"
    );
    for post in posts.iter() {
        println!(
            "| {:id_width$} | {:12} | {:>6} | {:>6} | {:ext_width$} | {}",
            post.id(),
            post.rating().to_string(),
            counter(post.score().map(|s| s.to_string())),
            counter(post.favorites().map(|f| f.to_string())),
            post.file_extension(),
            post.tags()
        );
    }
    println!(
        "+-{}-+-{}-+-{}-+-{}-+-{}-+------------ - -",
        "-".repeat(id_width),
        "-".repeat(12),
        "-".repeat(6),
        "-".repeat(6),
        "-".repeat(ext_width)
    );
}
