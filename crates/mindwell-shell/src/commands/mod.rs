//! Shell command dispatch.
//!
//! One handler per user action; each validates input, calls the matching
//! application service, and renders the resulting view models.

pub mod auth;
pub mod community;
pub mod journal;
pub mod meditation;
pub mod mood;

use colored::Colorize;

use crate::app::AppContext;
use crate::render;

/// Dispatches one line of input. Unknown commands get a dim nudge.
pub async fn dispatch(ctx: &AppContext, line: &str) {
    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or("").trim();

    match command {
        "/login" => auth::login(ctx, rest).await,
        "/signup" => auth::signup(ctx, rest).await,
        "/logout" => auth::logout(ctx).await,

        "/home" => show_page(ctx, "homePage").await,
        "/mood" => show_page(ctx, "moodPage").await,
        "/journal" => show_page(ctx, "journalPage").await,
        "/meditation" => show_page(ctx, "meditationPage").await,
        "/community" => show_page(ctx, "communityPage").await,
        "/profile" => show_page(ctx, "profilePage").await,

        "/pick" => mood::pick(ctx, rest).await,
        "/save" => mood::save(ctx, rest).await,
        "/write" => journal::write(ctx, rest).await,
        "/sessions" => meditation::sessions(ctx, rest).await,
        "/start" => meditation::start(ctx, rest).await,
        "/feed" => community::feed(ctx, rest).await,
        "/post" => community::post(ctx, rest).await,

        "/theme" => toggle_theme(ctx).await,
        "/help" => render::help(),
        _ => println!("{}", "Unknown command - /help lists everything.".bright_black()),
    }
}

/// True when a session is live; otherwise points at the auth commands.
pub(crate) async fn signed_in(ctx: &AppContext) -> bool {
    if ctx.auth.current_session().await.is_some() {
        return true;
    }
    println!(
        "{}",
        "Please sign in first - /login <email> <password>.".bright_black()
    );
    false
}

async fn show_page(ctx: &AppContext, id: &str) {
    if !signed_in(ctx).await {
        return;
    }
    match ctx.router.show_page(id).await {
        Some(view) => render::page(&view),
        None => println!("{}", "No such page.".bright_black()),
    }
}

async fn toggle_theme(ctx: &AppContext) {
    if !signed_in(ctx).await {
        return;
    }
    match ctx.state.toggle_theme().await {
        Ok(view) => render::theme(&view),
        Err(e) => render::error(&e),
    }
}
