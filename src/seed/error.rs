use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Missing email or password")]
    MissingCredentials,
    #[error("Category '{0}' referenced by a product line does not exist")]
    UnknownCategory(String),
    #[error("Cannot seed products: no {0} available")]
    EmptyCatalog(&'static str),
    #[error("Failed to hash password for {email}: {message}")]
    PasswordHash { email: String, message: String },
}
