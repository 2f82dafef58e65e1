use thiserror::Error;

pub type Result<T> = std::result::Result<T, DaylogError>;

#[derive(Error, Debug)]
pub enum DaylogError {
    #[error("Log source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::discover::Error> for DaylogError {
    fn from(err: gix::discover::Error) -> Self {
        DaylogError::GitDiscover(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for DaylogError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        DaylogError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for DaylogError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        DaylogError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for DaylogError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        DaylogError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for DaylogError {
    fn from(err: gix::object::commit::Error) -> Self {
        DaylogError::Commit(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for DaylogError {
    fn from(err: gix::objs::decode::Error) -> Self {
        DaylogError::ObjectDecode(Box::new(err))
    }
}
