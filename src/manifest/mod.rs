//! Build script scanning
//!
//! This module provides:
//! - The recognized configuration keyword set (a configuration value,
//!   extendable at the CLI)
//! - The Gradle build script scanner

mod gradle;

pub use gradle::{DroppedLiteral, GradleScanner, ScanOutcome};

/// Configuration keywords recognized by default
///
/// Dependency lines attached to any other keyword are ignored. The set can
/// be extended per run, never hardwired into the matching logic.
pub const DEFAULT_CONFIGURATIONS: [&str; 13] = [
    "implementation",
    "api",
    "compile",
    "compileOnly",
    "runtimeOnly",
    "testImplementation",
    "testCompile",
    "testCompileOnly",
    "testRuntimeOnly",
    "androidTestImplementation",
    "debugImplementation",
    "annotationProcessor",
    "kapt",
];

/// Scanner configuration: which configuration keywords mark a dependency line
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    keywords: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_CONFIGURATIONS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl ScannerConfig {
    /// Creates a configuration with exactly the given keywords
    pub fn new(keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// Extends the keyword set (builder pattern)
    pub fn with_extra_keywords(
        mut self,
        extra: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        for keyword in extra {
            let keyword = keyword.into();
            if !self.keywords.contains(&keyword) {
                self.keywords.push(keyword);
            }
        }
        self
    }

    /// Returns true if the keyword marks a dependency line
    pub fn is_recognized(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }
}
