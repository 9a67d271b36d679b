//! All the clap stuff for parsing/documenting the cli

use camino::Utf8PathBuf;
use clap::{
    builder::{PossibleValuesParser, TypedValueParser},
    Parser, ValueEnum,
};
use tracing::level_filters::LevelFilter;

/// Sign an application bundle as a post-build step.
///
/// Signing parameters come from a JSON preferences file keyed by platform;
/// the identifier flags below are fallbacks for when the file doesn't supply
/// them. Build systems are expected to invoke this unconditionally after
/// every build, so a run without `--target` succeeds and signs nothing.
#[derive(Parser, Clone, Debug)]
#[clap(version, about, long_about = None)]
pub struct Cli {
    /// Bundle/package to sign
    pub file: Utf8PathBuf,

    /// Platform to sign for
    #[clap(long, value_enum)]
    pub target: Option<SignTarget>,

    /// Bundle identifier (macOS/iOS)
    ///
    /// Used only when the preferences file has no `bundleidentifier`
    #[clap(long)]
    pub bundle: Option<String>,

    /// Organisation identifier (macOS/iOS)
    ///
    /// Used only when the preferences file has no `organisation`
    #[clap(long)]
    pub organisation: Option<String>,

    /// Binary name to substitute into the entitlements (macOS/iOS)
    #[clap(long)]
    pub binname: Option<String>,

    /// JSON preferences file with per-platform signing parameters
    #[clap(long)]
    pub prefs: Option<Utf8PathBuf>,

    /// Build directory the working entitlements file is written into
    #[clap(long)]
    pub builddir: Option<Utf8PathBuf>,

    /// How verbose logging should be (log level)
    #[clap(long)]
    #[clap(default_value_t = LevelFilter::WARN)]
    #[clap(value_parser = PossibleValuesParser::new(["off", "error", "warn", "info", "debug", "trace"]).map(|s| s.parse::<LevelFilter>().expect("possible values are valid")))]
    #[clap(help_heading = "GLOBAL OPTIONS", global = true)]
    pub verbose: LevelFilter,

    /// The format of the output
    #[clap(long, value_enum)]
    #[clap(default_value_t = OutputFormat::Human)]
    #[clap(help_heading = "GLOBAL OPTIONS", global = true)]
    pub output_format: OutputFormat,
}

/// A platform we can sign for
#[derive(ValueEnum, Copy, Clone, Debug)]
pub enum SignTarget {
    /// macOS app bundles
    Macosx,
    /// iOS app bundles
    Ios,
    /// Android packages (signed at packaging time, so this is a no-op)
    Android,
}

impl SignTarget {
    /// Convert the application version of this enum to the library version
    pub fn to_lib(self) -> bundlesign::Platform {
        match self {
            SignTarget::Macosx => bundlesign::Platform::Macosx,
            SignTarget::Ios => bundlesign::Platform::Ios,
            SignTarget::Android => bundlesign::Platform::Android,
        }
    }
}

/// Style of output we should produce
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// Machine-readable JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_sane() {
        Cli::command().debug_assert();
    }

    #[test]
    fn known_targets_parse() {
        for (value, platform) in [
            ("macosx", bundlesign::Platform::Macosx),
            ("ios", bundlesign::Platform::Ios),
            ("android", bundlesign::Platform::Android),
        ] {
            let cli = Cli::try_parse_from(["bundlesign", "out/MyApp.app", "--target", value])
                .unwrap();
            assert_eq!(cli.target.unwrap().to_lib(), platform);
        }
    }

    #[test]
    fn unknown_target_is_rejected() {
        let res = Cli::try_parse_from(["bundlesign", "out/MyApp.app", "--target", "windows"]);
        assert!(res.is_err());
    }

    #[test]
    fn target_is_optional() {
        let cli = Cli::try_parse_from(["bundlesign", "out/MyApp.app"]).unwrap();
        assert!(cli.target.is_none());
    }
}
