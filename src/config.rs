//! Config types (for the signing preferences file)
//!
//! The preferences file is a JSON object with one block per platform:
//!
//! ```json
//! { "ios":    { "organisation": "ACME123", "bundleidentifier": "com.example.app", "signature": "iPhone Developer" },
//!   "macosx": {},
//!   "android": {} }
//! ```
//!
//! Every block and every key is optional. Keys we don't recognize are kept
//! around verbatim so a block always contains exactly what the file said.

use std::collections::BTreeMap;

use axoasset::SourceFile;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::errors::SignResult;
use crate::Platform;

/// Contents of the signing preferences file
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Prefs {
    /// Preferences for signing Android bundles
    #[serde(default)]
    pub android: PlatformPrefs,
    /// Preferences for signing iOS bundles
    #[serde(default)]
    pub ios: PlatformPrefs,
    /// Preferences for signing macOS bundles
    #[serde(default)]
    pub macosx: PlatformPrefs,
}

/// One platform's block of the preferences file
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct PlatformPrefs {
    /// Organisation identifier (team id) prepended to bundle identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation: Option<String>,
    /// Reverse-DNS bundle identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundleidentifier: Option<String>,
    /// Signing identity to hand to the platform's signing tool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Any keys we don't have a use for (yet), preserved as-is
    #[serde(flatten)]
    pub other: BTreeMap<String, String>,
}

impl Prefs {
    /// Load signing preferences from disk.
    ///
    /// A missing path (or no path at all) is fine and yields empty prefs;
    /// builds without anything to sign shouldn't need a preferences file.
    /// A file that exists but isn't valid JSON is a hard error.
    pub fn load(prefs_path: Option<&Utf8Path>) -> SignResult<Prefs> {
        let Some(path) = prefs_path else {
            return Ok(Prefs::default());
        };
        if !path.is_file() {
            return Ok(Prefs::default());
        }
        let src = SourceFile::load_local(path)?;
        Ok(src.deserialize_json()?)
    }

    /// Get the block for the given platform
    pub fn platform(&self, platform: Platform) -> &PlatformPrefs {
        match platform {
            Platform::Android => &self.android,
            Platform::Ios => &self.ios,
            Platform::Macosx => &self.macosx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    fn load_str(json: &str) -> SignResult<Prefs> {
        let src = SourceFile::new("fake-prefs.json", json.to_owned());
        Ok(src.deserialize_json()?)
    }

    #[test]
    fn ios_only_file_leaves_other_platforms_empty() {
        let prefs = load_str(
            r#"{ "ios": { "organisation": "ACME123", "bundleidentifier": "com.example.app", "signature": "iPhone Developer: Jane" } }"#,
        )
        .unwrap();
        assert_eq!(prefs.ios.organisation.as_deref(), Some("ACME123"));
        assert_eq!(prefs.ios.bundleidentifier.as_deref(), Some("com.example.app"));
        assert_eq!(prefs.ios.signature.as_deref(), Some("iPhone Developer: Jane"));
        assert!(prefs.ios.other.is_empty());

        assert!(prefs.android.organisation.is_none());
        assert!(prefs.android.bundleidentifier.is_none());
        assert!(prefs.android.signature.is_none());
        assert!(prefs.android.other.is_empty());
        assert!(prefs.macosx.organisation.is_none());
        assert!(prefs.macosx.bundleidentifier.is_none());
        assert!(prefs.macosx.signature.is_none());
        assert!(prefs.macosx.other.is_empty());
    }

    #[test]
    fn unrecognized_keys_are_kept() {
        let prefs = load_str(
            r#"{ "ios": { "signature": "iPhone Distribution", "provisioningprofile": "deadbeef" } }"#,
        )
        .unwrap();
        assert_eq!(
            prefs.ios.other.get("provisioningprofile").map(String::as_str),
            Some("deadbeef")
        );
    }

    #[test]
    fn missing_file_is_empty_prefs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-prefs.json");
        let path = Utf8Path::from_path(&path).unwrap();
        let prefs = Prefs::load(Some(path)).unwrap();
        assert!(prefs.ios.signature.is_none());
        assert!(prefs.android.other.is_empty());
        assert!(prefs.macosx.other.is_empty());
    }

    #[test]
    fn no_path_is_empty_prefs() {
        let prefs = Prefs::load(None).unwrap();
        assert!(prefs.ios.organisation.is_none());
    }

    #[test]
    fn real_file_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{ "macosx": { "signature": "Developer ID Application" } }"#)
            .unwrap();
        let path = Utf8Path::from_path(&path).unwrap();
        let prefs = Prefs::load(Some(path)).unwrap();
        assert_eq!(
            prefs.macosx.signature.as_deref(),
            Some("Developer ID Application")
        );
        assert!(prefs.ios.signature.is_none());
    }

    #[test]
    fn malformed_json_is_fatal() {
        assert!(load_str("{ not json ").is_err());
    }
}
