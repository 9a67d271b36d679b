//! Codesigning Android packages.
//!
//! A no-op: apk/aab signing happens in the packaging step of the Android
//! pipeline, not here. The handler exists so `--target android` is a valid
//! thing for the build system to pass unconditionally.

use tracing::info;

use crate::config::PlatformPrefs;
use crate::errors::*;
use crate::SignRequest;

/// Nothing to do; Android bundles get signed during packaging
pub fn sign(req: &SignRequest, _prefs: &PlatformPrefs) -> SignResult<()> {
    info!("android bundles are signed at packaging time, skipping {}", req.file);
    Ok(())
}
