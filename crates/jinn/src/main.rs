//! Jinn CLI - React view and Redux duck generator

use clap::Parser;
use ducks_core::{GenerateArgs, ProductConfig};
use std::process::ExitCode;

/// Jinn product configuration
#[derive(Clone)]
pub struct JinnConfig;

impl ProductConfig for JinnConfig {
    fn name(&self) -> &'static str {
        "jinn"
    }

    fn display_name(&self) -> &'static str {
        "Jinn"
    }

    fn rc_file_name(&self) -> &'static str {
        ".jinnrc"
    }

    fn rc_flag(&self) -> &'static str {
        "-j"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for generating React views and Redux ducks"
    }
}

const EXAMPLES: &str = "\
Examples:
  jinn -v Map -p -s         generate a Map component as a package with a story file
  jinn -v Button func -a    generate a Button functional component with all options
  jinn -v Cart class -c     generate a Cart class component with css modules
  jinn -d App               generate an App duck";

#[derive(Parser, Debug)]
#[command(name = "jinn")]
#[command(about = "CLI for generating React views and Redux ducks")]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Generate a .jinnrc file with view and state paths
    #[arg(short = 'j', long = "init")]
    pub init: bool,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = JinnConfig;

    let result = if args.init {
        ducks_core::write_rc(&config, &args.generate).await
    } else {
        ducks_core::run(&config, args.generate).await
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ducks_core::report_error(&config, &err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_init_flag() {
        let args = Args::try_parse_from(["jinn", "-j"]).unwrap();
        assert!(args.init);
        assert!(args.generate.view.is_none());
    }

    #[test]
    fn test_product_identity() {
        assert_eq!(JinnConfig.rc_file_name(), ".jinnrc");
        assert_eq!(JinnConfig.rc_flag(), "-j");
    }
}
