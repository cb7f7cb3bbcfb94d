use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::prompt::PromptError;
use crate::session::SessionError;
use crate::timer::TimerError;

/// Any error the cooking model can report.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Timer(#[from] TimerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
