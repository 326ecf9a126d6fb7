use std::fmt;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Data loading errors (fetch/parse of the JSON documents)
    Data(DataError),
    /// Report generation errors
    Report(ReportError),
    /// Other errors (wraps third-party errors without a better home)
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Data(e) => write!(f, "erro de dados: {}", e),
            AppError::Report(e) => write!(f, "erro de relatório: {}", e),
            AppError::Other(msg) => write!(f, "erro: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Data(e) => Some(e),
            AppError::Report(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// Data loading errors
#[derive(Debug)]
pub enum DataError {
    /// Network request failed
    RequestFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Server answered with a non-success status
    BadStatus {
        url: String,
        status: u16,
    },
    /// JSON body did not match the expected document shape
    JsonParseFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::RequestFailed { url, source } => {
                write!(f, "falha na requisição ({}): {}", url, source)
            }
            DataError::BadStatus { url, status } => {
                write!(f, "resposta HTTP {} ({})", status, url)
            }
            DataError::JsonParseFailed { url, source } => {
                write!(f, "formato de dados inválido ({}): {}", url, source)
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::RequestFailed { source, .. }
            | DataError::JsonParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            DataError::BadStatus { .. } => None,
        }
    }
}

/// Report generation errors
#[derive(Debug)]
pub enum ReportError {
    /// Writing the report document failed
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::WriteFailed { path, source } => {
                write!(f, "falha ao gravar relatório ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::WriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

// ========== conversions from common error types ==========

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        AppError::Data(DataError::RequestFailed {
            url,
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Data(DataError::JsonParseFailed {
            url: String::new(), // serde errors carry no URL
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Report(ReportError::WriteFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

// ========== convenience constructors ==========

impl AppError {
    /// Network request failure with the offending URL attached
    pub fn request_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Data(DataError::RequestFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// Non-success HTTP status
    pub fn bad_status(url: impl Into<String>, status: u16) -> Self {
        AppError::Data(DataError::BadStatus {
            url: url.into(),
            status,
        })
    }

    /// JSON shape mismatch with the offending URL attached
    pub fn json_parse_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Data(DataError::JsonParseFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// Report write failure with the target path attached
    pub fn report_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Report(ReportError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result alias ==========

/// Application result type
pub type AppResult<T> = Result<T, AppError>;
