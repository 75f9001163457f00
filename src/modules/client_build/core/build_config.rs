use serde::Serialize;

use crate::modules::client_build::core::plugin::Plugin;

pub const ESNEXT: &str = "esnext";

/// Minimum JavaScript feature level the bundle may assume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildTarget(String);

impl BuildTarget {
    pub fn new(target: impl Into<String>) -> Self {
        Self(target.into())
    }

    pub fn esnext() -> Self {
        Self::new(ESNEXT)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOptions {
    pub target: BuildTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
    pub plugins: Vec<Plugin>,
    pub build: BuildOptions,
}

impl BuildConfig {
    /// Build of the transcription web client.
    pub fn client() -> Self {
        Self {
            plugins: vec![Plugin::Tailwindcss, Plugin::Solid, Plugin::Pwa],
            build: BuildOptions {
                target: BuildTarget::esnext(),
            },
        }
    }
}
