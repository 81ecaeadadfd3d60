use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltonErrorKind {
    InvalidArgument,
    Io,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HaltonError {
    pub kind: HaltonErrorKind,
    pub msg: String,
}

impl HaltonError {
    pub fn new(kind: HaltonErrorKind, msg: &str) -> Self {
        HaltonError {
            kind,
            msg: String::from(msg),
        }
    }

    pub fn invalid_argument(msg: &str) -> Self {
        return Self::new(HaltonErrorKind::InvalidArgument, msg);
    }

    pub fn io(msg: &str) -> Self {
        return Self::new(HaltonErrorKind::Io, msg);
    }
}

impl fmt::Display for HaltonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            HaltonErrorKind::InvalidArgument => write!(f, "Invalid argument: {}", self.msg),
            HaltonErrorKind::Io => write!(f, "IO error: {}", self.msg),
        }
    }
}

impl std::error::Error for HaltonError {}

impl From<std::io::Error> for HaltonError {
    fn from(value: std::io::Error) -> Self {
        let msg = value.to_string();
        return HaltonError::io(&msg);
    }
}

impl From<serde_json::Error> for HaltonError {
    fn from(value: serde_json::Error) -> Self {
        let msg = value.to_string();
        return HaltonError::io(&msg);
    }
}
