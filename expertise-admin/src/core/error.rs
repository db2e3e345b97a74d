//! Admin error types

use expertise_client::ClientError;
use thiserror::Error;

use crate::ui::FormErrors;

#[derive(Debug, Error)]
pub enum AdminError {
    /// Client-side validation failed; nothing was sent
    #[error("Formulaire invalide: {0}")]
    Validation(FormErrors),

    /// Request to the API failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Action requires a selected entity
    #[error("Aucun élément sélectionné")]
    NoSelection,

    /// Dialog action while the dialog is closed
    #[error("La fenêtre {0} n'est pas ouverte")]
    DialogClosed(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdminError {
    /// Message suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Client(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

impl From<FormErrors> for AdminError {
    fn from(errors: FormErrors) -> Self {
        AdminError::Validation(errors)
    }
}

pub type AdminResult<T> = Result<T, AdminError>;
