//! Sign-in, sign-up, and sign-out commands.
//!
//! Successful auth changes are not rendered here: the session watch channel
//! drives the view transition in the main loop, exactly once per change.

use crate::app::AppContext;
use crate::render;

pub async fn login(ctx: &AppContext, args: &str) {
    let mut parts = args.split_whitespace();
    let email = parts.next().unwrap_or("");
    let password = parts.next().unwrap_or("");

    if let Err(e) = ctx.auth.sign_in(email, password).await {
        render::error(&e);
    }
}

pub async fn signup(ctx: &AppContext, args: &str) {
    let mut parts = args.split_whitespace();
    let name = parts.next().unwrap_or("");
    let email = parts.next().unwrap_or("");
    let password = parts.next().unwrap_or("");

    if let Err(e) = ctx.auth.sign_up(name, email, password).await {
        render::error(&e);
    }
}

pub async fn logout(ctx: &AppContext) {
    if let Err(e) = ctx.auth.sign_out().await {
        render::error(&e);
    }
}
