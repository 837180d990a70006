// crates/engine/src/domain/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("configuration: {0}")]
  Config(String),

  #[error("no URL signing secret has been configured")]
  SecretNotSet,

  #[error("unknown style: {0}")]
  UnknownStyle(String),

  #[error("not a valid style name: {0}")]
  InvalidStyleName(String),

  #[error("request signature does not match")]
  InvalidSignature,

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Json(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
