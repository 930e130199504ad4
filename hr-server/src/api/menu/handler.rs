//! Menu Handlers

use axum::{Extension, Json};
use shared::{MenuEntry, menu_for_role};

use crate::auth::CurrentUser;

/// Sidebar menu for the authenticated user, derived from the role alone
pub async fn menu(Extension(user): Extension<CurrentUser>) -> Json<Vec<MenuEntry>> {
    Json(menu_for_role(user.role))
}
