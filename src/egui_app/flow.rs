//! Startup and login flow
//!
//! The steps of one user action run strictly in order, each awaiting the
//! previous one:
//!
//! ```text
//! startup: restore → validate → resolve progression → (shell loads screen)
//! login:   authenticate → store → resolve progression → (shell loads screen)
//! ```

use crate::egui_app::context::AppContext;
use crate::egui_app::progression;
use crate::egui_app::storage::StorageError;
use crate::egui_app::types::ScreenId;
use crate::shared::AuthResponse;

/// Where the shell should go after a flow finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Login,
    Screen(ScreenId),
}

/// Resume a persisted session if the backend still accepts it.
pub async fn start(ctx: &AppContext) -> Landing {
    let Some(session) = ctx.store.restore() else {
        tracing::info!("No stored session; showing login");
        return Landing::Login;
    };

    if !ctx.store.validate(&session).await {
        ctx.store.clear();
        return Landing::Login;
    }

    ctx.sync_audio_with_profile();
    Landing::Screen(progression::resolve(&ctx.api, &ctx.store).await)
}

/// Adopt a fresh login or registration and pick the first screen.
pub async fn complete_auth(ctx: &AppContext, auth: AuthResponse) -> Result<ScreenId, StorageError> {
    ctx.store.set(auth.session, auth.profile)?;
    ctx.sync_audio_with_profile();
    Ok(progression::resolve(&ctx.api, &ctx.store).await)
}

pub fn logout(ctx: &AppContext) {
    tracing::info!("Logging out");
    ctx.store.clear();
}
