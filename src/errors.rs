//! Errors!

use miette::Diagnostic;
use thiserror::Error;

/// A Result returned by bundlesign
pub type SignResult<T> = std::result::Result<T, SignError>;

/// An Error/Diagnostic returned by bundlesign
#[derive(Debug, Error, Diagnostic)]
#[non_exhaustive]
pub enum SignError {
    /// Axoasset returned an error (I/O error, or a bad preferences file)
    #[error(transparent)]
    #[diagnostic(transparent)]
    Axoasset(#[from] axoasset::AxoassetError),

    /// A subprocess we ran failed to launch or exited non-zero
    #[error(transparent)]
    #[diagnostic(transparent)]
    Axoprocess(#[from] axoprocess::AxoprocessError),

    /// An identifier the iOS signer needs was configured nowhere
    #[error("no {key} configured for {platform}")]
    #[diagnostic(help(
        "set `{key}` in the `{platform}` section of your preferences file, or pass --{flag}"
    ))]
    MissingIdentifier {
        /// platform block the key was looked up in
        platform: &'static str,
        /// the preferences key
        key: &'static str,
        /// the CLI flag that can supply a fallback
        flag: &'static str,
    },

    /// No signing identity to hand to codesign
    #[error("no signing identity configured for {platform}")]
    #[diagnostic(help(
        "set `signature` in the `{platform}` section of your preferences file"
    ))]
    MissingSigningIdentity {
        /// platform block the identity was looked up in
        platform: &'static str,
    },

    /// The signer needs somewhere to write the working entitlements file
    #[error("no build directory to write entitlements into")]
    #[diagnostic(help("pass --builddir with your build output directory"))]
    MissingBuildDir,

    /// A tool we asked for a path printed something that isn't utf8
    #[error("{tool} printed a non-utf8 path")]
    ToolOutputInvalidUtf8 {
        /// the tool we invoked
        tool: String,
        /// the underlying conversion error
        #[source]
        details: std::string::FromUtf8Error,
    },
}
