//! Codesigning iOS bundles using Apple's builtin `codesign` tool.
//!
//! The entitlements an iOS app ships with start life as the template plist
//! inside the SDK, full of `$(...)` placeholders that Xcode would normally
//! fill in. Since we're running outside Xcode, we do the fill-in ourselves:
//! copy the template into the build dir, convert it to XML so it's editable,
//! substitute the identifiers as literal text, convert it back to binary,
//! and hand it to `codesign` along with the signing identity.
//!
//! The substitution is textual, not structural: we don't validate the plist
//! against its grammar, so a malformed template gets copied through as-is.

use axoasset::LocalAsset;
use axoprocess::Cmd;
use camino::Utf8Path;
use tracing::info;

use crate::config::PlatformPrefs;
use crate::errors::*;
use crate::SignRequest;

use super::{find_tool, show_sdk_path, show_sdk_platform_path, ENTITLEMENTS_TEMPLATE};

/// The SDK name xcrun knows the iOS toolchain by
const IOS_SDK: &str = "iphoneos";
/// Name of the working entitlements file we write into the build dir
const ENTITLEMENTS_FILE: &str = "Entitlements.xcent";

/// Sign an iOS bundle with rewritten entitlements
pub fn sign(req: &SignRequest, prefs: &PlatformPrefs) -> SignResult<()> {
    let organisation = effective(prefs.organisation.as_deref(), req.organisation.as_deref())
        .ok_or(SignError::MissingIdentifier {
            platform: "ios",
            key: "organisation",
            flag: "organisation",
        })?;
    let bundle_id = effective(prefs.bundleidentifier.as_deref(), req.bundle.as_deref()).ok_or(
        SignError::MissingIdentifier {
            platform: "ios",
            key: "bundleidentifier",
            flag: "bundle",
        },
    )?;
    // binname has no preferences key, and not every template mentions it
    let binname = req.binname.as_deref().unwrap_or_default();
    let identity = prefs
        .signature
        .as_deref()
        .ok_or(SignError::MissingSigningIdentity { platform: "ios" })?;
    let build_dir = req.builddir.as_deref().ok_or(SignError::MissingBuildDir)?;

    let sdk_dir = show_sdk_path(IOS_SDK)?;
    let template = sdk_dir.join(ENTITLEMENTS_TEMPLATE);
    let entitlements = build_dir.join(ENTITLEMENTS_FILE);

    // plutil lives in the platform's Developer dir, which isn't on PATH
    let platform_dir = show_sdk_platform_path(IOS_SDK)?;
    let plutil = find_tool(IOS_SDK, "plutil")?;
    let tool_path = format!("{platform_dir}/Developer/usr/bin:/Applications/Xcode.app/Contents/Developer/usr/bin:/usr/bin:/bin:/usr/sbin:/sbin");

    LocalAsset::copy_file_to_file(&template, &entitlements)?;
    convert_plist(&plutil, &tool_path, "xml1", &entitlements)?;

    let contents = LocalAsset::load_string(&entitlements)?;
    let rewritten = substitute_identifiers(&contents, organisation, bundle_id, binname);
    LocalAsset::write_new(&rewritten, &entitlements)?;

    convert_plist(&plutil, &tool_path, "binary1", &entitlements)?;

    info!("codesigning {}", req.file);
    Cmd::new("/usr/bin/codesign", "sign iOS bundle")
        .arg("--force")
        .arg("--sign")
        .arg(identity)
        .arg("--entitlements")
        .arg(&entitlements)
        .arg(&req.file)
        .stdout_to_stderr()
        .run()?;

    Ok(())
}

/// The preferences file wins; a CLI flag only fills the gap it leaves
fn effective<'a>(pref: Option<&'a str>, flag: Option<&'a str>) -> Option<&'a str> {
    pref.or(flag)
}

/// Flip a plist between its binary and XML encodings in place
fn convert_plist(
    plutil: &Utf8Path,
    tool_path: &str,
    encoding: &str,
    file: &Utf8Path,
) -> SignResult<()> {
    Cmd::new(plutil, format!("convert entitlements to {encoding}"))
        .env("PATH", tool_path)
        .arg("-convert")
        .arg(encoding)
        .arg(file)
        .stdout_to_stderr()
        .run()?;
    Ok(())
}

/// Rewrite the placeholder identifiers in an XML entitlements document.
///
/// `$(AppIdentifierPrefix)` becomes the organisation identifier plus a dot,
/// `$(CFBundleIdentifier)` the bundle identifier, and `$(binname)` the binary
/// name. Every literal occurrence is replaced; everything else is copied
/// through untouched, except that output lines always end in `\n` whatever
/// the template used.
fn substitute_identifiers(
    template: &str,
    organisation: &str,
    bundle_id: &str,
    binname: &str,
) -> String {
    let prefix = format!("{organisation}.");
    let mut out = String::with_capacity(template.len());
    for line in template.lines() {
        let line = line
            .replace("$(AppIdentifierPrefix)", &prefix)
            .replace("$(CFBundleIdentifier)", bundle_id)
            .replace("$(binname)", binname);
        out.push_str(&line);
        out.push('\n');
    }
    out
}
