//! Meditation catalog commands.

use colored::Colorize;
use mindwell_core::meditation::find_session;

use crate::app::AppContext;
use crate::commands::signed_in;
use crate::render;

/// `/sessions <category>` - browse a catalog category. Unrecognized
/// categories fall back to the recommended list.
pub async fn sessions(ctx: &AppContext, category: &str) {
    if !signed_in(ctx).await {
        return;
    }
    render::meditation(&ctx.meditation.load_sessions(category.trim()));
}

/// `/start <session name>` - record a started session.
pub async fn start(ctx: &AppContext, name: &str) {
    if !signed_in(ctx).await {
        return;
    }

    let Some(session) = find_session(name.trim()) else {
        println!(
            "{}",
            "No such session - /sessions <category> lists them.".bright_black()
        );
        return;
    };

    // A recording failure is logged, not surfaced.
    if let Some(notice) = ctx
        .meditation
        .start_session(session.name, session.duration_minutes)
        .await
    {
        render::notice(&notice);
    }
}
