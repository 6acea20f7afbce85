use anyhow::{bail, Context};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use crate::app::AppContext;
use crate::config::Config;
use crate::domain::{FeedItem, ItemDetails};
use crate::search::{SearchEvent, SearchHandle};

pub async fn search(
    ctx: &AppContext,
    query: &str,
    details: bool,
    json: bool,
    open_index: Option<usize>,
) -> anyhow::Result<()> {
    let url = ctx.config.feed.endpoint().url_for(query);
    let response = ctx.client.fetch(&url).await?;

    if json {
        let rows: Vec<ItemDetails> = response.items.iter().map(FeedItem::details).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if details {
        for item in &response.items {
            print_details(&item.details());
            println!();
        }
    } else if response.is_empty() {
        println!("No photos for {}", describe_query(query));
    } else {
        print_grid(&response.items);
    }

    if let Some(n) = open_index {
        let item = match n.checked_sub(1).and_then(|i| response.items.get(i)) {
            Some(item) => item,
            None => bail!("No item {} (found {})", n, response.len()),
        };
        open::that(&item.link).with_context(|| format!("Failed to open {}", item.link))?;
    }

    Ok(())
}

pub async fn browse(ctx: &AppContext) -> anyhow::Result<()> {
    let handle = ctx.start_search();
    let renderer = tokio::spawn(render_updates(handle.clone()));

    println!("Type a search and press Enter. An empty line shows the default feed, Ctrl-D quits.");
    handle.on_query_changed("");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        handle.on_query_changed(line.trim());
    }

    handle.shutdown();
    renderer.abort();
    Ok(())
}

pub fn show_config(ctx: &AppContext) -> anyhow::Result<()> {
    match Config::default_config_path() {
        Ok(path) => println!("Default config file: {}", path.display()),
        Err(e) => println!("Default config file: unavailable ({})", e),
    }

    let config = &ctx.config;
    println!("  feed.base_url      = {}", config.feed.base_url);
    println!("  feed.default_query = {}", config.feed.default_query);
    println!("  feed.escape_query  = {}", config.feed.escape_query);
    println!("  search.debounce_ms = {}", config.search.debounce_ms);
    println!("  http.timeout_secs  = {}", config.http.timeout_secs);
    Ok(())
}

async fn render_updates(handle: SearchHandle) {
    let mut state = handle.subscribe();
    let mut events = handle.events();
    let mut was_loading = false;

    loop {
        tokio::select! {
            changed = state.changed() => {
                if changed.is_err() {
                    break;
                }
                let is_loading = state.borrow_and_update().is_loading;
                if is_loading && !was_loading {
                    println!("Loading...");
                }
                was_loading = is_loading;
            }
            event = events.recv() => match event {
                Ok(SearchEvent::Loaded { query, count }) => {
                    println!("{} photos for {}", count, describe_query(&query));
                    print_grid(&handle.current_items().items);
                }
                Ok(SearchEvent::Failed { query, error }) => {
                    eprintln!("Search for {} failed: {}", describe_query(&query), error);
                }
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!("Renderer missed {} search events", missed);
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}

fn describe_query(query: &str) -> String {
    if query.is_empty() {
        "the default feed".to_string()
    } else {
        format!("{:?}", query)
    }
}

fn print_grid(items: &[FeedItem]) {
    for (i, item) in items.iter().enumerate() {
        println!(
            "{:>3}. {} - {} ({})",
            i + 1,
            item.title,
            item.parsed_author(),
            item.formatted_published_date()
        );
        println!("     {}", item.media_url());
    }
}

fn print_details(details: &ItemDetails) {
    println!("Title: {}", details.title);
    println!("Author: {}", details.author);
    println!("Published: {}", details.published);
    println!("Description: {}", details.description);
    println!("Dimensions: {}", details.dimensions_label());
    println!("Image: {}", details.image_url);
    println!("Link: {}", details.link);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_query() {
        assert_eq!(describe_query(""), "the default feed");
        assert_eq!(describe_query("owls"), "\"owls\"");
    }
}
