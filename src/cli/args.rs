//! CLI argument definitions
//!
//! The argument stream is interpreted by [`crate::interpreter`], since action
//! flags may follow the targets they apply to. The declaration below only
//! drives the usage text.

use clap::{Arg, ArgAction, ArgGroup, Command};

/// Describe the command line accepted by the binary.
pub fn usage_command(program: &str) -> Command {
    Command::new("levenshtein")
        .bin_name(program.to_owned())
        .about("Compute the Levenshtein distance between SOURCE and each TARGET.")
        .override_usage(format!(
            "{program} [[-c|--cutoff CUTOFF]|[-d|--distance]|[-b|--best]] SOURCE TARGETS..."
        ))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::Help)
                .help("Print this message and exit"),
        )
        .arg(
            Arg::new("cutoff")
                .short('c')
                .long("cutoff")
                .value_name("CUTOFF")
                .value_parser(clap::value_parser!(usize))
                .help(
                    "Print only the TARGETs whose Levenshtein distance is less or equal to \
                     CUTOFF, separated by newline characters. A higher number means more tolerance.",
                ),
        )
        .arg(
            Arg::new("distance")
                .short('d')
                .long("distance")
                .action(ArgAction::SetTrue)
                .help(
                    "Print the Levenshtein distance of each TARGET, separated by newline \
                     characters. This is the default.",
                ),
        )
        .arg(
            Arg::new("best")
                .short('b')
                .long("best")
                .action(ArgAction::SetTrue)
                .help(
                    "Print the best match among TARGETS. If there are several qualifying \
                     TARGETs, they are printed all separated by newlines.",
                ),
        )
        .group(
            ArgGroup::new("action")
                .args(["cutoff", "distance", "best"])
                .multiple(false),
        )
        .arg(
            Arg::new("source")
                .value_name("SOURCE")
                .required(true)
                .help("String every TARGET is compared against"),
        )
        .arg(
            Arg::new("targets")
                .value_name("TARGETS")
                .required(true)
                .num_args(1..)
                .help("Candidate strings"),
        )
}

/// Render the usage text for `program`.
pub fn render_usage(program: &str) -> String {
    usage_command(program).render_help().to_string()
}
