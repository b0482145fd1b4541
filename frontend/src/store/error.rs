use thiserror::Error;

/// Failure of a store or config request.
///
/// `Display` is the text shown to the user in the error notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Banco de dados não configurado.")]
    NotConfigured,

    #[error("Falha de conexão: {0}")]
    Network(String),

    /// The store answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for StoreError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => StoreError::Decode(e.to_string()),
            other => StoreError::Network(other.to_string()),
        }
    }
}
