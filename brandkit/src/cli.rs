use brandkit_core::Color;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "brandkit", version, about = "Generate Microsoft 365 branding assets from two brand colors and a logo")]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the images and script into an output directory
    Generate(GenerateArgs),
    /// Print the derived palette as JSON
    Palette(ColorArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ColorArgs {
    /// Primary brand color, e.g. #0078D4
    #[arg(long)]
    pub primary: Option<Color>,

    /// Secondary brand color, e.g. #106EBE
    #[arg(long)]
    pub secondary: Option<Color>,

    /// TOML file with defaults for any of these options
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub colors: ColorArgs,

    /// Logo image, ideally a PNG with transparency
    #[arg(long, value_name = "PATH")]
    pub logo: Option<PathBuf>,

    /// Directory the bundle is written to
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_generate() {
        let cli = Cli::try_parse_from([
            "brandkit", "generate", "--primary", "#FFFF00", "--logo", "logo.png", "-o", "out", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.colors.primary, Some(Color::rgb(0xff, 0xff, 0)));
        assert_eq!(args.colors.secondary, None);
        assert_eq!(args.logo, Some(PathBuf::from("logo.png")));
        assert_eq!(args.out, Some(PathBuf::from("out")));
    }

    #[test]
    fn rejects_bad_color() {
        assert!(Cli::try_parse_from(["brandkit", "palette", "--primary", "blue"]).is_err());
    }
}
