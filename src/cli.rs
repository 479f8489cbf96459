use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "fitcalc",
    about = "Print distance, mean speed and calories for the built-in workout sessions"
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        let cli = Cli::try_parse_from(["fitcalc"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.quiet, 0);
    }

    #[test]
    fn counts_repeated_flags() {
        let cli = Cli::try_parse_from(["fitcalc", "-vv", "-q"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.quiet, 1);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["fitcalc", "running.csv"]).is_err());
    }
}
