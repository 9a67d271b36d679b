//! Code/artifact signing support
//!
//! One submodule per platform. iOS is the only one that does real work right
//! now: it rewrites Apple's entitlements template and hands the result to
//! `codesign`. macOS stops after resolving the SDK, and Android is a no-op,
//! because their pipelines sign elsewhere (or not yet).
//!
//! Everything Apple-side goes through `xcrun`, which knows where the selected
//! Xcode keeps its SDKs and tools. We never hardcode SDK paths.

use axoprocess::Cmd;
use camino::Utf8PathBuf;

use crate::errors::*;

pub mod android;
pub mod ios;
pub mod macos;

/// Name of the template entitlements plist that ships inside Apple SDKs
pub(crate) const ENTITLEMENTS_TEMPLATE: &str = "Entitlements.plist";

const XCRUN: &str = "/usr/bin/xcrun";

/// Ask xcrun where the given SDK lives
pub(crate) fn show_sdk_path(sdk: &str) -> SignResult<Utf8PathBuf> {
    xcrun(&["--sdk", sdk, "--show-sdk-path"], format!("locate the {sdk} SDK"))
}

/// Ask xcrun where the given SDK's platform directory lives
pub(crate) fn show_sdk_platform_path(sdk: &str) -> SignResult<Utf8PathBuf> {
    xcrun(
        &["--sdk", sdk, "--show-sdk-platform-path"],
        format!("locate the {sdk} platform dir"),
    )
}

/// Ask xcrun for the path of one of the SDK's tools
pub(crate) fn find_tool(sdk: &str, tool: &str) -> SignResult<Utf8PathBuf> {
    xcrun(&["--sdk", sdk, "-f", tool], format!("locate {tool}"))
}

/// Run xcrun and capture the single path it prints.
///
/// xcrun terminates the path with a newline, so trim before using it.
fn xcrun(args: &[&str], summary: String) -> SignResult<Utf8PathBuf> {
    let mut cmd = Cmd::new(XCRUN, summary);
    for arg in args {
        cmd.arg(arg);
    }
    let output = cmd.output()?;
    let path = String::from_utf8(output.stdout).map_err(|details| {
        SignError::ToolOutputInvalidUtf8 {
            tool: XCRUN.to_owned(),
            details,
        }
    })?;
    Ok(Utf8PathBuf::from(path.trim()))
}
