//! Mood selection and mood-entry commands.

use colored::Colorize;
use mindwell_application::view::SelectorScope;
use mindwell_core::entries::MOOD_OPTIONS;
use mindwell_core::page::Page;

use crate::app::AppContext;
use crate::commands::signed_in;
use crate::render;

/// `/pick <mood>` - select a mood in whichever selector the active page
/// shows (home or mood page).
pub async fn pick(ctx: &AppContext, args: &str) {
    if !signed_in(ctx).await {
        return;
    }

    let label = args.trim().to_lowercase();
    let Some(option) = MOOD_OPTIONS.iter().find(|option| option.label == label) else {
        let labels: Vec<&str> = MOOD_OPTIONS.iter().map(|option| option.label).collect();
        println!(
            "{}",
            format!("Pick one of: {}", labels.join(", ")).bright_black()
        );
        return;
    };

    let scope = match ctx.state.snapshot().await.current_page.as_str() {
        id if Page::from_id(id) == Some(Page::Mood) => SelectorScope::MoodPage,
        _ => SelectorScope::Home,
    };

    match ctx.mood.select(scope, option.label, option.emoji).await {
        Ok(view) => render::mood_selector(&view),
        Err(e) => render::error(&e),
    }
}

/// `/save [note]` - save a mood entry with the current selection.
pub async fn save(ctx: &AppContext, note: &str) {
    if !signed_in(ctx).await {
        return;
    }

    match ctx.mood.save_entry(note).await {
        Ok(notice) => {
            render::notice(&notice);
            // The visible history reloads after a successful save.
            let on_mood_page =
                Page::from_id(&ctx.state.snapshot().await.current_page) == Some(Page::Mood);
            if on_mood_page {
                render::mood_history(&ctx.mood.load_history().await);
            }
        }
        Err(e) => render::error(&e),
    }
}
