use anyhow::{Context, Result};
use brandkit_core::{files, Palette, MIN_TEXT_CONTRAST};
use brandkit_render::decode_logo;
use chrono::Utc;
use clap::Parser;

mod bundle;
mod cli;
mod config;
mod generate;

use cli::{Cli, ColorArgs, Command, GenerateArgs};
use config::{ConfigLayer, Settings};
use generate::{generate, GenerationRequest};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Generate(args) => run_generate(args).await,
        Command::Palette(args) => run_palette(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

async fn run_generate(args: GenerateArgs) -> Result<()> {
    let settings = Settings::resolve(ConfigLayer::from(&args), args.colors.config.as_deref())?;

    let logo = match &settings.logo {
        Some(path) => Some(
            decode_logo(path)
                .await
                .with_context(|| format!("failed to load logo {}", path.display()))?,
        ),
        None => {
            log::warn!("no logo given; {} will be missing from the bundle", files::SQUARE_LOGO);
            None
        }
    };

    let request = GenerationRequest {
        primary: settings.primary,
        secondary: settings.secondary,
        logo,
    };
    let generated_at = Utc::now();
    let set = tokio::task::spawn_blocking(move || generate(&request, generated_at))
        .await
        .context("generation task panicked")??;

    let written = bundle::write_bundle(&set, &settings.output_dir).await?;
    log::info!(
        "wrote {} files to {} at {} (primary {}, secondary {})",
        written.len(),
        settings.output_dir.display(),
        set.generated_at.to_rfc3339(),
        set.palette.primary,
        set.palette.secondary
    );
    Ok(())
}

fn run_palette(args: ColorArgs) -> Result<()> {
    let settings = Settings::resolve(ConfigLayer::from(&args), args.config.as_deref())?;
    let palette = Palette::derive(settings.primary, settings.secondary);

    println!("{}", serde_json::to_string_pretty(&palette)?);

    let contrast = palette.primary_contrast();
    let verdict = if contrast < MIN_TEXT_CONTRAST { "below" } else { "meets" };
    println!(
        "primary {} on {}: {:.2}:1 ({} the {}:1 minimum)",
        palette.primary, palette.background, contrast, verdict, MIN_TEXT_CONTRAST
    );
    Ok(())
}
