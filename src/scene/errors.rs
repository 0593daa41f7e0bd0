//! Error types surfaced while loading the scene configuration.
use std::{fmt, io, path::PathBuf};

/// Failure modes of [`SceneConfig::load_from`](super::config::SceneConfig::load_from).
#[derive(Debug)]
pub enum SceneConfigError {
    Read { path: PathBuf, source: io::Error },
    Parse { path: PathBuf, source: toml::de::Error },
}

impl SceneConfigError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for SceneConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "Failed to read {} ({})", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "Failed to parse {} ({})", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SceneConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_names_path_and_cause() {
        let missing = SceneConfigError::read(
            "config/missing.toml",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let message = missing.to_string();
        assert!(message.contains("config/missing.toml"));
        assert!(message.contains("no such file"));
        assert!(missing.source().is_some());

        let parse_error = toml::from_str::<toml::Table>("world = [").unwrap_err();
        let invalid = SceneConfigError::parse("config/scene.toml", parse_error);
        assert!(invalid.to_string().starts_with("Failed to parse config/scene.toml"));
        assert!(matches!(invalid, SceneConfigError::Parse { .. }));
    }
}
