use std::ffi::OsString;
use colored::*;

use clap::{App, ArgMatches};
use crate::report::profile::{self, Profile, DEFAULT_PROFILE};

pub struct DumpConfig {
    pub profile: String,
    pub wide: bool,
    pub no_headers: bool,
    pub list_profiles: bool,
    pub verbosity: u64,
}

impl DumpConfig {
    pub fn new() -> Result<DumpConfig, &'static str> {
        let yaml = load_yaml!("clap_config.yml");
        let matches = App::from_yaml(yaml).get_matches();

        DumpConfig::from_matches(&matches)
    }

    /*
     * Same as new() but with explicit arguments, argv[0] included.
     * Help and version requests are reported as errors here.
     */
    pub fn from_args<I, T>(args: I) -> Result<DumpConfig, &'static str>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let yaml = load_yaml!("clap_config.yml");
        let matches = match App::from_yaml(yaml).get_matches_from_safe(args) {
            Ok(matches) => matches,
            Err(_e) => return Err("failed to parse command line arguments"),
        };

        DumpConfig::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<DumpConfig, &'static str> {
        let mut dump_config = DumpConfig::default();

        if matches.is_present("profile") {
            match matches.value_of("profile") {
                Some(name) => dump_config.profile = name.trim().to_string(),
                None => return Err("please give a profile name to --profile"),
            }
        }

        dump_config.wide = matches.is_present("wide");
        dump_config.no_headers = matches.is_present("no_headers");
        dump_config.list_profiles = matches.is_present("list_profiles");
        dump_config.verbosity = matches.occurrences_of("verbose");

        Ok(dump_config)
    }

    /*
     * Check whether arguments in dump_config are legal or not.
     */
    pub fn verify_args(dump_config: &DumpConfig) -> bool {
        if dump_config.profile.len() == 0 {
            eprintln!("{} empty profile name", "error:".bright_red());
            return false;
        }

        if profile::find_profile(&dump_config.profile).is_none() {
            eprintln!("{} unknown profile {}, try --list-profiles",
                      "error:".bright_red(), dump_config.profile);
            return false;
        }

        true
    }

    /*
     * The selected profile with --wide and --no-headers applied.
     * Falls back to the default profile for an unknown name.
     */
    pub fn resolve_profile(&self) -> Profile {
        let mut selected = profile::find_profile(&self.profile)
            .unwrap_or_else(profile::default_profile);

        if self.wide {
            selected = selected.with_wide_values();
        }

        if self.no_headers {
            selected = selected.without_headers();
        }

        selected
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        DumpConfig {
            profile: String::from(DEFAULT_PROFILE),
            wide: false,
            no_headers: false,
            list_profiles: false,
            verbosity: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::catalog::CatalogRevision;
    use crate::report::format::ValueWidth;

    fn setup_dump_config(profile: &str, wide: bool,
                         no_headers: bool) -> DumpConfig {
        DumpConfig {
            profile: String::from(profile),
            wide,
            no_headers,
            list_profiles: false,
            verbosity: 0,
        }
    }

    #[test]
    fn test_from_args_no_arguments() {
        let dump_config = DumpConfig::from_args(vec!["ioctl_dump"]).unwrap();

        assert_eq!(dump_config.profile, DEFAULT_PROFILE);
        assert_eq!(dump_config.wide, false);
        assert_eq!(dump_config.no_headers, false);
        assert_eq!(dump_config.list_profiles, false);
        assert_eq!(dump_config.verbosity, 0);
    }

    #[test]
    fn test_from_args_all_flags() {
        let args = vec!["ioctl_dump", "--profile", "classic", "--wide",
                        "--no-headers", "--list-profiles", "-vv"];
        let dump_config = DumpConfig::from_args(args).unwrap();

        assert_eq!(dump_config.profile, "classic");
        assert_eq!(dump_config.wide, true);
        assert_eq!(dump_config.no_headers, true);
        assert_eq!(dump_config.list_profiles, true);
        assert_eq!(dump_config.verbosity, 2);
    }

    #[test]
    fn test_from_args_short_profile() {
        let args = vec!["ioctl_dump", "-p", "minimal", "-w"];
        let dump_config = DumpConfig::from_args(args).unwrap();

        assert_eq!(dump_config.profile, "minimal");
        assert_eq!(dump_config.wide, true);
    }

    #[test]
    fn test_from_args_unknown_flag() {
        let args = vec!["ioctl_dump", "--bogus"];

        assert!(DumpConfig::from_args(args).is_err());
    }

    #[test]
    fn test_from_args_profile_missing_value() {
        let args = vec!["ioctl_dump", "--profile"];

        assert!(DumpConfig::from_args(args).is_err());
    }

    #[test]
    fn test_verify_args_normal() {
        let dump_config = setup_dump_config("wide", false, false);

        assert_eq!(DumpConfig::verify_args(&dump_config), true);
    }

    #[test]
    fn test_verify_args_unknown_profile() {
        let dump_config = setup_dump_config("latest", false, false);

        assert_eq!(DumpConfig::verify_args(&dump_config), false);
    }

    #[test]
    fn test_verify_args_empty_profile() {
        let dump_config = setup_dump_config("", false, false);

        assert_eq!(DumpConfig::verify_args(&dump_config), false);
    }

    #[test]
    fn test_resolve_profile_overrides() {
        let dump_config = setup_dump_config("classic", true, true);
        let profile = dump_config.resolve_profile();

        assert_eq!(profile.name, "classic");
        assert_eq!(profile.revision, CatalogRevision::Classic);
        assert_eq!(profile.style.value_width, ValueWidth::Long);
        assert_eq!(profile.style.headers, false);
    }

    #[test]
    fn test_resolve_profile_default() {
        let dump_config = DumpConfig::default();
        let profile = dump_config.resolve_profile();

        assert_eq!(profile, profile::default_profile());
    }
}
