use crate::app::{AppContext, Result};
use crate::cli::FormatKind;
use crate::domain::{FeedItem, FeedState};
use crate::format::{format_compact_count, format_duration, format_elapsed_time};

/// Load up to `pages` pages and print every item.
pub async fn list_feed(ctx: &AppContext, pages: u32) -> Result<()> {
    let controller = ctx.feed_controller();

    controller.load_first_page().await;
    let mut state = controller.snapshot();

    while !state.is_error() && state.has_more() && state.current_page < pages {
        let before = state.current_page;
        controller.load_next_page().await;
        state = controller.snapshot();
        if state.current_page == before {
            break;
        }
    }

    if let Some(message) = state.error_message() {
        eprintln!("Error: {}", message);
    }

    if state.items.is_empty() {
        println!("No practice logs");
        return Ok(());
    }

    for item in &state.items {
        println!("{}", render_item(item));
    }
    println!("{}", summary(&state));

    Ok(())
}

pub fn run_format(kind: &FormatKind) -> String {
    match *kind {
        FormatKind::Duration { seconds } => format_duration(seconds),
        FormatKind::Count { value } => format_compact_count(value),
        FormatKind::Elapsed { epoch_millis } => format_elapsed_time(epoch_millis),
    }
}

fn render_item(item: &FeedItem) -> String {
    let mut out = format!("#{} {}", item.id, item.display_title());

    if let Some(subtitle) = item.display_subtitle() {
        out.push_str(&format!("\n    {}", subtitle));
    }
    // A book title is its own line unless it is already the headline.
    let has_headline = item.phrase_title.is_some() || item.music_title.is_some();
    if let Some(book) = item.book_title.as_deref().filter(|_| has_headline) {
        out.push_str(&format!("\n    {}", book));
    }

    let mut meta = vec![item.player_name.clone()];
    if let Some(duration) = item.duration_label() {
        meta.push(duration);
    }
    meta.push(item.views_label());
    meta.push(item.elapsed_label());
    out.push_str(&format!("\n    {}", meta.join(" | ")));

    out
}

fn summary(state: &FeedState) -> String {
    format!(
        "{} items, page {} of {}",
        state.items.len(),
        state.current_page,
        state.last_page
    )
}
