use brandkit_core::{files, Palette};
use chrono::{DateTime, SecondsFormat, Utc};
use handlebars::Handlebars;
use serde_json::json;
use thiserror::Error;

const TEMPLATE_NAME: &str = "apply_branding";
const TEMPLATE: &str = include_str!("../templates/apply_branding.ps1.hbs");

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("invalid script template: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("failed to render script: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("failed to build script context: {0}")]
    Context(#[from] serde_json::Error),
}

/// Handlebars-backed renderer for `ApplyBranding.ps1`.
pub struct ScriptEmitter {
    handlebars: Handlebars<'static>,
}

impl ScriptEmitter {
    pub fn new() -> Result<Self, ScriptError> {
        let mut handlebars = Handlebars::new();
        // PowerShell, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);
        handlebars.register_template_string(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { handlebars })
    }

    /// Renders the script. The script reads the images from its own
    /// directory by their bundle names; nothing here touches the filesystem.
    pub fn emit(&self, palette: &Palette, generated_at: DateTime<Utc>) -> Result<String, ScriptError> {
        let local = |name: &str| format!(".\\{name}");
        let context = json!({
            "generated_at": generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            "palette": serde_json::to_value(palette)?,
            "paths": {
                "banner_light": local(files::BANNER_LIGHT),
                "banner_dark": local(files::BANNER_DARK),
                "background_desktop_light": local(files::BACKGROUND_DESKTOP_LIGHT),
                "background_desktop_dark": local(files::BACKGROUND_DESKTOP_DARK),
                "background_mobile_light": local(files::BACKGROUND_MOBILE_LIGHT),
                "background_mobile_dark": local(files::BACKGROUND_MOBILE_DARK),
                "square_logo": local(files::SQUARE_LOGO),
            },
        });

        let script = self.handlebars.render(TEMPLATE_NAME, &context)?;
        log::debug!("emitted {} ({} bytes)", files::SCRIPT, script.len());
        Ok(script)
    }
}

/// One-shot helper around [`ScriptEmitter`].
pub fn emit_script(palette: &Palette, generated_at: DateTime<Utc>) -> Result<String, ScriptError> {
    ScriptEmitter::new()?.emit(palette, generated_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandkit_core::Color;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
    }

    fn default_script() -> String {
        emit_script(&Palette::default(), at()).unwrap()
    }

    #[test]
    fn embeds_primary_and_background() {
        let script = default_script();
        assert!(script.contains("background-color: #0078D4"));
        assert!(script.contains("BackgroundColor = \"#f3f2f1\""));
    }

    #[test]
    fn hover_styles_use_primary_dark() {
        let script = default_script();
        assert!(script.contains("background-color: #003c98 !important;"));
        assert!(script.contains("color: #003c98 !important;"));
    }

    #[test]
    fn logs_seed_colors() {
        let script = default_script();
        assert!(script.contains("Write-Host \"Primary Color: #0078D4\""));
        assert!(script.contains("Write-Host \"Secondary Color: #106EBE\""));
    }

    #[test]
    fn stamps_iso_timestamp() {
        assert!(default_script().contains("# Date: 2024-05-17T09:30:00.000Z"));
    }

    #[test]
    fn references_every_image_by_bundle_name() {
        let script = default_script();
        for name in [
            files::BANNER_LIGHT,
            files::BANNER_DARK,
            files::BACKGROUND_DESKTOP_LIGHT,
            files::BACKGROUND_DESKTOP_DARK,
            files::BACKGROUND_MOBILE_LIGHT,
            files::BACKGROUND_MOBILE_DARK,
            files::SQUARE_LOGO,
        ] {
            assert!(script.contains(&format!("ReadAllBytes(\".\\{name}\")")), "{name}");
        }
    }

    #[test]
    fn connects_and_disconnects() {
        let script = default_script();
        let connect = script.find("Connect-MgGraph").unwrap();
        let update = script.find("Update-MgOrganizationBranding").unwrap();
        let disconnect = script.find("Disconnect-MgGraph").unwrap();
        assert!(connect < update && update < disconnect);
        assert!(!script.contains("{{"));
    }

    #[test]
    fn output_is_deterministic() {
        let palette = Palette::derive(Color::parse_hex("#8764b8").unwrap(), Color::rgb(0, 0xb7, 0xc3));
        let emitter = ScriptEmitter::new().unwrap();
        assert_eq!(emitter.emit(&palette, at()).unwrap(), emitter.emit(&palette, at()).unwrap());
    }
}
