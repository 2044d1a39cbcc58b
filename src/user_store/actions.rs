//! Transitions of the user session store.

use crate::framework::AsyncPhase;
use crate::model::{AuthResponse, User, UserResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Login(AsyncPhase<AuthResponse>),
    Register(AsyncPhase<AuthResponse>),
    Logout(AsyncPhase<()>),
    GetUser(AsyncPhase<UserResponse>),
    Update(AsyncPhase<UserResponse>),
    /// Startup session check. Never records an error.
    CheckAuth(AsyncPhase<User>),
    SetAuthChecked(bool),
    SetUser(Option<User>),
    ClearError,
}
