//! Wheel filename grammar.
//!
//! Built wheels carry their build matrix in the local version label:
//! `<pkg>-<version>+cu<cuda>torch<torch>-<python tag>-...`. Everything after
//! the torch version is ignored.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static WHEEL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.+)-([0-9.]+)\+cu(\d+)torch([0-9.]+)-")
        .expect("wheel filename pattern is valid")
});

/// Errors produced while parsing an artifact filename.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FilenameError {
    /// The filename does not carry a `<pkg>-<ver>+cu<N>torch<ver>-` label.
    #[error("'{file_name}' does not match <pkg>-<version>+cu<cuda>torch<torch>-<rest>")]
    NoMatch {
        /// The rejected filename.
        file_name: String,
    },
}

/// Metadata derived from a wheel filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelDescriptor {
    /// Distribution name (e.g. `mypkg`).
    pub package: String,
    /// Release version (e.g. `1.2.3`).
    pub version: String,
    /// CUDA variant digits (e.g. `121`). Kept as text so leading zeros survive.
    pub cuda: String,
    /// Torch version the wheel was built against (e.g. `2.1.0`).
    pub torch: String,
}

impl WheelDescriptor {
    /// Parse a wheel filename.
    ///
    /// The package name is greedy: `a-b-1.0+cu118torch2.0-x.whl` yields the
    /// package `a-b`. Only the first match is used.
    ///
    /// # Errors
    ///
    /// Returns [`FilenameError::NoMatch`] if the label is missing or malformed.
    pub fn parse(file_name: &str) -> Result<Self, FilenameError> {
        let caps = WHEEL_RE
            .captures(file_name)
            .ok_or_else(|| FilenameError::NoMatch {
                file_name: file_name.to_string(),
            })?;

        Ok(Self {
            package: caps[1].to_string(),
            version: caps[2].to_string(),
            cuda: caps[3].to_string(),
            torch: caps[4].to_string(),
        })
    }

    /// Directory names from the index root down to the package directory:
    /// `cu<cuda>`, `torch<torch>`, `<package>`.
    pub fn segments(&self) -> [String; 3] {
        [
            format!("cu{}", self.cuda),
            format!("torch{}", self.torch),
            self.package.clone(),
        ]
    }

    /// Package directory relative to the index root.
    pub fn target_dir(&self) -> PathBuf {
        self.segments().iter().collect()
    }
}

impl FromStr for WheelDescriptor {
    type Err = FilenameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
