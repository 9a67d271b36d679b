//! Codesigning macOS bundles.
//!
//! Deliberately unfinished: macOS builds are currently signed by hand (or
//! not at all), so all we do is prove the SDK resolves and point at where
//! the entitlements template would come from.

use tracing::warn;

use crate::config::PlatformPrefs;
use crate::errors::*;
use crate::SignRequest;

use super::{show_sdk_path, ENTITLEMENTS_TEMPLATE};

/// The SDK name xcrun knows the macOS toolchain by
const MACOS_SDK: &str = "macosx";

/// Resolve the macOS SDK, but don't sign anything yet
pub fn sign(req: &SignRequest, _prefs: &PlatformPrefs) -> SignResult<()> {
    let sdk_dir = show_sdk_path(MACOS_SDK)?;
    let _entitlements = sdk_dir.join(ENTITLEMENTS_TEMPLATE);

    // TODO: rewrite the template and invoke codesign, the same way ios.rs does
    warn!("macOS signing isn't implemented yet, {} was left unsigned", req.file);
    Ok(())
}
