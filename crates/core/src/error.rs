use crate::types::DbId;

/// Domain failures raised by pure logic, independent of transport.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No record of kind `entity` has this id.
    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: DbId },

    /// Input was rejected before any side effect happened.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// An invariant broke inside the service; never shown to clients.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = CoreError::NotFound {
            entity: "Video",
            id: 12,
        };
        assert_eq!(err.to_string(), "Video 12 does not exist");
        assert_eq!(
            CoreError::Validation("empty filename".into()).to_string(),
            "Invalid input: empty filename"
        );
    }
}
