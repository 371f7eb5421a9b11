//! Journal commands.

use mindwell_core::page::Page;

use crate::app::AppContext;
use crate::commands::signed_in;
use crate::render;

/// `/write <text>` - save a journal entry.
pub async fn write(ctx: &AppContext, content: &str) {
    if !signed_in(ctx).await {
        return;
    }

    match ctx.journal.save_entry(content).await {
        Ok(notice) => {
            render::notice(&notice);
            let on_journal_page =
                Page::from_id(&ctx.state.snapshot().await.current_page) == Some(Page::Journal);
            if on_journal_page {
                render::journal_list(&ctx.journal.load_entries().await);
            }
        }
        Err(e) => render::error(&e),
    }
}
