use crate::api::{ApiError, BurgerApi, TokenStorage};
use crate::clients::slice_client::{track, SliceClient};
use crate::framework::StoreClient;
use crate::model::{AuthResponse, LoginData, RegisterData, User, UserUpdate};
use crate::user_store::{UserAction, UserError, UserState};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for the user session.
///
/// Owns the token handling: tokens from login and registration go into
/// [`TokenStorage`], logout clears them, and every authenticated call reads
/// the access token from there.
#[derive(Clone)]
pub struct UserClient {
    inner: StoreClient<UserState>,
    api: Arc<dyn BurgerApi>,
    tokens: Arc<dyn TokenStorage>,
}

impl UserClient {
    pub fn new(
        inner: StoreClient<UserState>,
        api: Arc<dyn BurgerApi>,
        tokens: Arc<dyn TokenStorage>,
    ) -> Self {
        Self { inner, api, tokens }
    }

    #[instrument(skip(self, data), fields(email = %data.email))]
    pub async fn login(&self, data: LoginData) -> Result<User, UserError> {
        let response = track(&self.inner, UserAction::Login, async {
            let response = self.api.login(data).await?;
            self.store_tokens(&response);
            Ok::<_, UserError>(response)
        })
        .await?;
        info!("Signed in");
        Ok(response.user)
    }

    #[instrument(skip(self, data), fields(email = %data.email))]
    pub async fn register(&self, data: RegisterData) -> Result<User, UserError> {
        let response = track(&self.inner, UserAction::Register, async {
            let response = self.api.register(data).await?;
            self.store_tokens(&response);
            Ok::<_, UserError>(response)
        })
        .await?;
        info!("Registered");
        Ok(response.user)
    }

    /// Ends the session on the server, then forgets both tokens.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), UserError> {
        track(&self.inner, UserAction::Logout, async {
            let refresh = self.tokens.refresh_token().unwrap_or_default();
            self.api.logout(&refresh).await?;
            self.tokens.clear();
            Ok::<_, UserError>(())
        })
        .await?;
        info!("Signed out");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self) -> Result<User, UserError> {
        let response = track(&self.inner, UserAction::GetUser, async {
            let token = self.tokens.access_token().ok_or(ApiError::Unauthorized)?;
            Ok::<_, UserError>(self.api.get_user(&token).await?)
        })
        .await?;
        Ok(response.user)
    }

    #[instrument(skip(self, update))]
    pub async fn update_user(&self, update: UserUpdate) -> Result<User, UserError> {
        let response = track(&self.inner, UserAction::Update, async {
            let token = self.tokens.access_token().ok_or(ApiError::Unauthorized)?;
            Ok::<_, UserError>(self.api.update_user(&token, update).await?)
        })
        .await?;
        Ok(response.user)
    }

    /// Startup check: is there a live session behind the stored token?
    ///
    /// Without a stored access token the check is rejected without a request.
    /// Either way `is_auth_checked` ends up `true` and no error is recorded.
    #[instrument(skip(self))]
    pub async fn check_auth(&self) -> Result<User, UserError> {
        track(&self.inner, UserAction::CheckAuth, async {
            let Some(token) = self.tokens.access_token() else {
                debug!("No stored access token");
                return Err(UserError::NoSession);
            };
            Ok(self.api.get_user(&token).await?.user)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn set_auth_checked(&self, checked: bool) -> Result<UserState, UserError> {
        self.dispatch(UserAction::SetAuthChecked(checked)).await
    }

    #[instrument(skip(self))]
    pub async fn set_user(&self, user: Option<User>) -> Result<UserState, UserError> {
        self.dispatch(UserAction::SetUser(user)).await
    }

    #[instrument(skip(self))]
    pub async fn clear_error(&self) -> Result<UserState, UserError> {
        self.dispatch(UserAction::ClearError).await
    }

    fn store_tokens(&self, response: &AuthResponse) {
        if let Some(access) = &response.access_token {
            self.tokens.set_access_token(access);
        }
        if let Some(refresh) = &response.refresh_token {
            self.tokens.set_refresh_token(refresh);
        }
    }
}

#[async_trait]
impl SliceClient<UserState> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &StoreClient<UserState> {
        &self.inner
    }
}
