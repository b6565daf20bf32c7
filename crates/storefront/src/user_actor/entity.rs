//! [`ActorEntity`] implementation for [`User`].

use super::error::UserError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use chrono::Utc;
use store_actor::ActorEntity;

pub const MIN_PASSWORD_LEN: usize = 6;

fn check_password(password: &str) -> Result<(), UserError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(UserError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for User {
    const KIND: &'static str = "User";

    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        let email = params.email.trim().to_string();
        if email.is_empty()
            || params.password.is_empty()
            || params.first_name.trim().is_empty()
            || params.last_name.trim().is_empty()
        {
            return Err(UserError::Validation("All fields are required".into()));
        }
        check_password(&params.password)?;

        Ok(User {
            id,
            email,
            password: params.password,
            first_name: params.first_name.trim().to_string(),
            last_name: params.last_name.trim().to_string(),
            role: params.role,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(password) = &update.password {
            check_password(password)?;
        }
        for name in [&update.first_name, &update.last_name].into_iter().flatten() {
            if name.trim().is_empty() {
                return Err(UserError::Validation("Name cannot be empty".into()));
            }
        }

        if let Some(first_name) = update.first_name {
            self.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name.trim().to_string();
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), UserError> {
        Ok(())
    }
}
