use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("malformed XML at byte {offset}: {message}")]
    Xml { offset: usize, message: String },
    #[error("the document has no <registry> root element")]
    NotARegistry,
    #[error("<{element}> is missing its {what}")]
    Missing {
        element: &'static str,
        what: &'static str,
    },
    #[error("could not read the C declaration {0:?}")]
    CType(String),
    #[error("unknown API {0:?}")]
    UnknownApi(String),
    #[error("unknown profile {0:?}")]
    UnknownProfile(String),
    #[error("bad version {0:?}, expected MAJOR.MINOR")]
    BadVersion(String),
    #[error("no extension named {0}")]
    UnknownExtension(String),
    #[error("{0} is required but not defined in <commands>")]
    UnknownCommand(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
