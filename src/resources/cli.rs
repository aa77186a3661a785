/// Command-line arguments parsed at startup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Enables the diagnostic log file and the debug overlay.
    /// Usage: `cargo run -- -d`
    pub debug: bool,
}

impl CliArgs {
    /// Parses the process arguments. On an unknown flag clap prints the
    /// error and exits the process.
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    /// Parses an explicit argument list, program name first.
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        command()
            .try_get_matches_from(args)
            .map(|matches| Self::from_matches(&matches))
    }

    fn from_matches(matches: &clap::ArgMatches) -> Self {
        Self {
            debug: matches.is_present("debug"),
        }
    }
}

fn command() -> clap::Command<'static> {
    clap::Command::new("daycycle").arg(
        clap::Arg::new("debug")
            .short('d')
            .help("Enable debug mode, which logs to a temporary file"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = CliArgs::try_parse_from(["daycycle"]).unwrap();
        assert!(!cli.debug);
    }

    #[test]
    fn test_debug_flag() {
        assert!(CliArgs::try_parse_from(["daycycle", "-d"]).unwrap().debug);
    }

    #[test]
    fn test_only_short_flag_accepted() {
        assert!(CliArgs::try_parse_from(["daycycle", "--debug"]).is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(CliArgs::try_parse_from(["daycycle", "--load", "save"]).is_err());
    }

    #[test]
    fn test_no_positional_arguments() {
        assert!(CliArgs::try_parse_from(["daycycle", "dawn"]).is_err());
    }
}
