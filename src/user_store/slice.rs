use super::actions::UserAction;
use crate::framework::{AsyncPhase, Rejection, Slice};
use crate::model::User;

pub const DEFAULT_LOGIN_ERROR: &str = "Ошибка входа";
pub const DEFAULT_REGISTER_ERROR: &str = "Ошибка регистрации";
pub const DEFAULT_LOGOUT_ERROR: &str = "Ошибка выхода";
pub const DEFAULT_GET_USER_ERROR: &str = "Не удалось получить пользователя";
pub const DEFAULT_UPDATE_ERROR: &str = "Ошибка обновления";

/// Who is signed in, and whether we have checked yet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub is_loading: bool,
    pub is_auth_checked: bool,
    pub user: Option<User>,
    pub error: Option<String>,
}

impl Slice for UserState {
    type Action = UserAction;

    fn reduce(&mut self, action: UserAction) {
        match action {
            UserAction::Login(phase) => self.finish(phase.map(|r| r.user), DEFAULT_LOGIN_ERROR),
            UserAction::Register(phase) => {
                self.finish(phase.map(|r| r.user), DEFAULT_REGISTER_ERROR)
            }
            UserAction::GetUser(phase) => {
                self.finish(phase.map(|r| r.user), DEFAULT_GET_USER_ERROR)
            }
            UserAction::Update(phase) => self.finish(phase.map(|r| r.user), DEFAULT_UPDATE_ERROR),
            UserAction::Logout(AsyncPhase::Pending) => self.start(),
            UserAction::Logout(AsyncPhase::Fulfilled(())) => {
                self.user = None;
                self.is_auth_checked = true;
                self.is_loading = false;
            }
            UserAction::Logout(AsyncPhase::Rejected(rejection)) => {
                self.fail(&rejection, DEFAULT_LOGOUT_ERROR)
            }
            UserAction::CheckAuth(AsyncPhase::Pending) => self.start(),
            UserAction::CheckAuth(AsyncPhase::Fulfilled(user)) => {
                self.user = Some(user);
                self.is_auth_checked = true;
                self.is_loading = false;
            }
            UserAction::CheckAuth(AsyncPhase::Rejected(_)) => {
                self.user = None;
                self.is_auth_checked = true;
                self.is_loading = false;
            }
            UserAction::SetAuthChecked(checked) => self.is_auth_checked = checked,
            UserAction::SetUser(user) => self.user = user,
            UserAction::ClearError => self.error = None,
        }
    }
}

impl UserState {
    fn start(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    /// Common tail of login, register, get-user and update.
    fn finish(&mut self, phase: AsyncPhase<User>, default_error: &str) {
        match phase {
            AsyncPhase::Pending => self.start(),
            AsyncPhase::Fulfilled(user) => {
                self.user = Some(user);
                self.is_loading = false;
            }
            AsyncPhase::Rejected(rejection) => self.fail(&rejection, default_error),
        }
    }

    fn fail(&mut self, rejection: &Rejection, default_error: &str) {
        self.is_loading = false;
        self.error = Some(rejection.reason_or(default_error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuthResponse, UserResponse};

    fn user() -> User {
        User::new("test@example.com", "Test User")
    }

    fn auth() -> AuthResponse {
        AuthResponse {
            success: true,
            user: user(),
            access_token: Some("Bearer access".into()),
            refresh_token: Some("refresh".into()),
        }
    }

    fn me() -> UserResponse {
        UserResponse {
            success: true,
            user: user(),
        }
    }

    fn run(actions: Vec<UserAction>) -> UserState {
        let mut state = UserState::default();
        for action in actions {
            state.reduce(action);
        }
        state
    }

    #[test]
    fn test_pending_sets_loading_and_clears_error() {
        for pending in [
            UserAction::Login(AsyncPhase::Pending),
            UserAction::Register(AsyncPhase::Pending),
            UserAction::Logout(AsyncPhase::Pending),
            UserAction::GetUser(AsyncPhase::Pending),
            UserAction::Update(AsyncPhase::Pending),
            UserAction::CheckAuth(AsyncPhase::Pending),
        ] {
            let mut state = UserState {
                error: Some("old".into()),
                ..Default::default()
            };
            state.reduce(pending.clone());
            assert!(state.is_loading, "{pending:?}");
            assert_eq!(state.error, None, "{pending:?}");
        }
    }

    #[test]
    fn test_fulfilled_sets_user() {
        for fulfilled in [
            UserAction::Login(AsyncPhase::Fulfilled(auth())),
            UserAction::Register(AsyncPhase::Fulfilled(auth())),
            UserAction::GetUser(AsyncPhase::Fulfilled(me())),
            UserAction::Update(AsyncPhase::Fulfilled(me())),
        ] {
            let state = run(vec![fulfilled.clone()]);
            assert!(!state.is_loading, "{fulfilled:?}");
            assert_eq!(state.user, Some(user()), "{fulfilled:?}");
            assert_eq!(state.error, None, "{fulfilled:?}");
        }
    }

    #[test]
    fn test_rejected_uses_operation_default() {
        let cases = [
            (UserAction::Login(AsyncPhase::Rejected(Rejection::empty())), DEFAULT_LOGIN_ERROR),
            (UserAction::Register(AsyncPhase::Rejected(Rejection::empty())), DEFAULT_REGISTER_ERROR),
            (UserAction::Logout(AsyncPhase::Rejected(Rejection::empty())), DEFAULT_LOGOUT_ERROR),
            (UserAction::GetUser(AsyncPhase::Rejected(Rejection::empty())), DEFAULT_GET_USER_ERROR),
            (UserAction::Update(AsyncPhase::Rejected(Rejection::empty())), DEFAULT_UPDATE_ERROR),
        ];
        for (action, expected) in cases {
            let state = run(vec![action]);
            assert!(!state.is_loading);
            assert_eq!(state.error.as_deref(), Some(expected));
        }
    }

    #[test]
    fn test_rejected_prefers_message() {
        let state = run(vec![
            UserAction::Login(AsyncPhase::Pending),
            UserAction::Login(AsyncPhase::Rejected(Rejection::with_message(
                "email or password are incorrect",
            ))),
        ]);
        assert_eq!(
            state.error.as_deref(),
            Some("email or password are incorrect")
        );
        assert_eq!(state.user, None);
    }

    #[test]
    fn test_logout_fulfilled_clears_user_and_marks_checked() {
        let state = run(vec![
            UserAction::Logout(AsyncPhase::Pending),
            UserAction::Login(AsyncPhase::Fulfilled(auth())),
            UserAction::Logout(AsyncPhase::Fulfilled(())),
        ]);
        assert!(!state.is_loading);
        assert_eq!(state.user, None);
        assert!(state.is_auth_checked);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_check_auth_fulfilled() {
        let state = run(vec![
            UserAction::CheckAuth(AsyncPhase::Pending),
            UserAction::CheckAuth(AsyncPhase::Fulfilled(user())),
        ]);
        assert!(!state.is_loading);
        assert!(state.is_auth_checked);
        assert_eq!(state.user, Some(user()));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_check_auth_rejected_never_sets_error() {
        let state = run(vec![
            UserAction::SetUser(Some(user())),
            UserAction::CheckAuth(AsyncPhase::Pending),
            UserAction::CheckAuth(AsyncPhase::Rejected(Rejection::with_message(
                "Unauthorized",
            ))),
        ]);
        assert!(!state.is_loading);
        assert!(state.is_auth_checked);
        assert_eq!(state.user, None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_sync_setters_touch_only_their_field() {
        let mut state = UserState {
            is_loading: true,
            is_auth_checked: false,
            user: None,
            error: Some("boom".into()),
        };

        state.reduce(UserAction::SetAuthChecked(true));
        assert!(state.is_auth_checked);
        assert_eq!(state.error.as_deref(), Some("boom"));

        state.reduce(UserAction::SetUser(Some(user())));
        assert_eq!(state.user, Some(user()));
        assert!(state.is_loading);

        state.reduce(UserAction::ClearError);
        assert_eq!(state.error, None);
        assert!(state.is_loading);
        assert!(state.is_auth_checked);
        assert_eq!(state.user, Some(user()));
    }
}
