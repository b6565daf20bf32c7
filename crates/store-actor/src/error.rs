//! # Actor Errors
//!
//! Errors raised by the runtime itself. Failures coming out of entity hooks are
//! carried boxed in [`ActorError::Entity`] so clients can downcast them back to
//! the resource's own error type.

/// Errors that can occur while talking to a resource actor.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    #[error("actor closed")]
    Closed,
    #[error("actor dropped response channel")]
    Dropped,
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}

impl ActorError {
    /// Recovers the entity's own error type, if that is what failed.
    ///
    /// Returns the original error unchanged when it is not an
    /// [`ActorError::Entity`] wrapping an `E`.
    pub fn into_entity<E>(self) -> Result<E, ActorError>
    where
        E: std::error::Error + 'static,
    {
        match self {
            ActorError::Entity(inner) => match inner.downcast::<E>() {
                Ok(e) => Ok(*e),
                Err(other) => Err(ActorError::Entity(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error, PartialEq)]
    #[error("out of widgets")]
    struct WidgetError;

    #[test]
    fn test_into_entity_recovers_boxed_error() {
        let err = ActorError::Entity(Box::new(WidgetError));
        assert_eq!(err.into_entity::<WidgetError>().unwrap(), WidgetError);
    }

    #[test]
    fn test_into_entity_keeps_runtime_errors() {
        let err = ActorError::Closed;
        assert!(matches!(err.into_entity::<WidgetError>(), Err(ActorError::Closed)));

        let err = ActorError::Entity(Box::new(std::io::Error::other("disk")));
        assert!(matches!(err.into_entity::<WidgetError>(), Err(ActorError::Entity(_))));
    }

    #[test]
    fn test_not_found_message() {
        let err = ActorError::NotFound { kind: "Product", id: "product_9".into() };
        assert_eq!(err.to_string(), "Product not found: product_9");
    }
}
