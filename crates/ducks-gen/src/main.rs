//! ducks-gen CLI - the `.genrc` flavour of the view and duck generator

use clap::Parser;
use ducks_core::{GenerateArgs, ProductConfig};
use std::process::ExitCode;

/// ducks-gen product configuration
#[derive(Clone)]
pub struct GenConfig;

impl ProductConfig for GenConfig {
    fn name(&self) -> &'static str {
        "ducks-gen"
    }

    fn display_name(&self) -> &'static str {
        "Gen"
    }

    fn rc_file_name(&self) -> &'static str {
        ".genrc"
    }

    fn rc_flag(&self) -> &'static str {
        "-g"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for generating React views and Redux ducks from a .genrc layout"
    }
}

const EXAMPLES: &str = "\
Examples:
  ducks-gen -v Button func -a    generate a Button functional component with all options
  ducks-gen -v Cart class -c     generate a Cart class component with css modules
  ducks-gen -d App -r            generate an App duck with reselect selectors";

#[derive(Parser, Debug)]
#[command(name = "ducks-gen")]
#[command(about = "CLI for generating React views and Redux ducks from a .genrc layout")]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Generate a .genrc file with view and state paths
    #[arg(short = 'g', long = "init")]
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
    let config = GenConfig;

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
        let args = Args::try_parse_from(["ducks-gen", "-g", "--root", "/tmp/shop"]).unwrap();
        assert!(args.init);
        assert_eq!(
            args.generate.root.as_deref(),
            Some(std::path::Path::new("/tmp/shop"))
        );
    }

    #[test]
    fn test_product_identity() {
        assert_eq!(GenConfig.rc_file_name(), ".genrc");
        assert_eq!(GenConfig.rc_flag(), "-g");
    }
}
