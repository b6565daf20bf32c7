//! # User Client
//!
//! Account management and mock authentication over the User actor.
//! Lookups by email scan the actor's list; the store is small and in memory.
use crate::model::{AuthSession, Role, User, UserCreate, UserId, UserProfile, UserUpdate};
use crate::user_actor::UserError;
use async_trait::async_trait;
use store_actor::{ActorClient, ActorError, ResourceClient};
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: ActorError) -> Self::Error {
        match e {
            ActorError::NotFound { id, .. } => UserError::NotFound(id),
            other => other
                .into_entity::<UserError>()
                .unwrap_or_else(|e| UserError::ActorCommunication(e.to_string())),
        }
    }
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let email = email.trim();
        let users = self.list().await?;
        Ok(users
            .into_iter()
            .find(|user| user.email.eq_ignore_ascii_case(email)))
    }

    /// Creates an account with any role. Emails are unique.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        if self.find_by_email(&params.email).await?.is_some() {
            return Err(UserError::AlreadyExists(params.email.trim().to_string()));
        }
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Signs up a customer and logs them in.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<AuthSession, UserError> {
        let id = self
            .create_user(UserCreate {
                email: email.to_string(),
                password: password.to_string(),
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                role: Role::Customer,
            })
            .await?;
        let user = self
            .get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))?;
        info!(user_id = %id, "Registered");
        Ok(AuthSession::issue(user.profile()))
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, UserError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(UserError::Validation(
                "Email and password are required".into(),
            ));
        }
        match self.find_by_email(email).await? {
            Some(user) if user.password == password => {
                info!(user_id = %user.id, "Login successful");
                Ok(AuthSession::issue(user.profile()))
            }
            _ => {
                warn!("Login rejected");
                Err(UserError::InvalidCredentials)
            }
        }
    }

    /// Resolves a session token to the current profile.
    #[instrument(skip(self, token))]
    pub async fn verify_token(&self, token: &str) -> Result<UserProfile, UserError> {
        let id = AuthSession::token_user_id(token).ok_or(UserError::InvalidToken)?;
        self.get(id)
            .await?
            .map(|user| user.profile())
            .ok_or(UserError::InvalidToken)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<UserProfile, UserError> {
        debug!("Sending request");
        self.inner
            .update(id, update)
            .await
            .map(|user| user.profile())
            .map_err(Self::map_error)
    }
}
