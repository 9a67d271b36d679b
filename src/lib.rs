#![deny(missing_docs)]
#![allow(clippy::result_large_err)]

//! # bundlesign
//!
//! This is the library at the core of the `bundlesign` CLI. It exists as a
//! library for the sake of internal documentation/testing, and isn't intended
//! to be used by anyone else.
//!
//! The job: given a freshly built bundle and a platform, dig the signing
//! parameters out of a JSON preferences file (with CLI flags as fallbacks)
//! and drive the platform's own signing toolchain. We never touch the
//! cryptography ourselves; `xcrun`, `plutil`, and `codesign` do the real work.

use camino::Utf8PathBuf;
use tracing::warn;

use config::Prefs;
use errors::*;

pub mod config;
pub mod errors;
pub mod sign;

/// A platform we know how to (try to) sign bundles for
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Android packages
    Android,
    /// iOS app bundles
    Ios,
    /// macOS app bundles
    Macosx,
}

impl Platform {
    /// The platform's name, as spelled by `--target` and the preferences file
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Android => "android",
            Platform::Ios => "ios",
            Platform::Macosx => "macosx",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Everything one run of the signer was asked to do, assembled once from the
/// CLI and never mutated
#[derive(Debug, Clone)]
pub struct SignRequest {
    /// Bundle/package to sign
    pub file: Utf8PathBuf,
    /// Platform to sign for (no platform means nothing gets signed)
    pub target: Option<Platform>,
    /// Fallback bundle identifier (macOS/iOS)
    pub bundle: Option<String>,
    /// Fallback organisation identifier (macOS/iOS)
    pub organisation: Option<String>,
    /// Binary name substituted into the entitlements (macOS/iOS)
    pub binname: Option<String>,
    /// Path to the JSON preferences file
    pub prefs: Option<Utf8PathBuf>,
    /// Build directory the working entitlements file is written into
    pub builddir: Option<Utf8PathBuf>,
}

/// bundlesign's one job: load preferences, pick the platform handler, run it.
///
/// Build pipelines invoke us unconditionally as a post-build step, so a run
/// with no `--target` is a success that signs nothing. We warn about it
/// rather than staying silent, since a misspelled pipeline variable lands
/// you here too.
pub fn do_sign(req: &SignRequest) -> SignResult<()> {
    let prefs = Prefs::load(req.prefs.as_deref())?;
    let Some(target) = req.target else {
        warn!("no --target selected, {} was left unsigned", req.file);
        return Ok(());
    };
    match target {
        Platform::Ios => sign::ios::sign(req, prefs.platform(target)),
        Platform::Macosx => sign::macos::sign(req, prefs.platform(target)),
        Platform::Android => sign::android::sign(req, prefs.platform(target)),
    }
}
