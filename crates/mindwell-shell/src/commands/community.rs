//! Community feed commands (placeholder surface).

use crate::app::AppContext;
use crate::commands::signed_in;
use crate::render;

/// `/feed <category>` - switch the active topic chip.
pub async fn feed(ctx: &AppContext, category: &str) {
    if !signed_in(ctx).await {
        return;
    }
    render::community_chips(&ctx.community.load_posts(category.trim()));
}

/// `/post <text>` - share a post (confirmed, never persisted).
pub async fn post(ctx: &AppContext, content: &str) {
    if !signed_in(ctx).await {
        return;
    }

    match ctx.community.create_post(content) {
        Ok(notice) => render::notice(&notice),
        Err(e) => render::error(&e),
    }
}
