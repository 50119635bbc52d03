//! OAuth completion landing.
//!
//! The provider integration upstream finishes the token exchange and mints
//! the session before this handler runs; all that is left is to send the
//! browser to the dashboard.

use axum::response::Redirect;

/// `GET /api/auth/twitter/callback`
pub async fn twitter() -> Redirect { Redirect::to("/dashboard") }
