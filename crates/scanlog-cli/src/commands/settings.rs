//! Show or change operator settings.

use scanlog_core::settings::Theme;

use crate::app::AppContext;
use crate::cli::{SettingsArgs, SettingsCommands};
use crate::helpers::parse_bool;
use crate::ui::{badge, styled, styles, Badge};

pub fn handle_settings(ctx: &AppContext, args: &SettingsArgs) -> anyhow::Result<()> {
    match args.command {
        SettingsCommands::Show { json } => handle_show(ctx, json),
        SettingsCommands::Set { ref key, ref value } => handle_set(ctx, key, value),
    }
}

fn handle_show(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let (settings, _storage) = ctx.open_settings()?;
    let ui = ctx.ui_context(json, None);

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    let label = |text: &str| styled(text, styles::DIM, ui.color);
    println!("{} {}", label("sound:"), settings.enable_sound);
    println!("{} {}", label("vibration:"), settings.enable_vibration);
    println!("{} {}", label("autofocus:"), settings.auto_focus);
    println!("{} {}", label("notifications:"), settings.show_notifications);
    println!("{} {}", label("theme:"), settings.theme);
    Ok(())
}

fn handle_set(ctx: &AppContext, key: &str, value: &str) -> anyhow::Result<()> {
    let (mut settings, mut storage) = ctx.open_settings()?;

    let rendered = match key {
        "sound" => {
            settings.enable_sound = parse_bool(value)?;
            settings.enable_sound.to_string()
        }
        "vibration" => {
            settings.enable_vibration = parse_bool(value)?;
            settings.enable_vibration.to_string()
        }
        "autofocus" => {
            settings.auto_focus = parse_bool(value)?;
            settings.auto_focus.to_string()
        }
        "notifications" => {
            settings.show_notifications = parse_bool(value)?;
            settings.show_notifications.to_string()
        }
        "theme" => {
            settings.theme = value.parse::<Theme>()?;
            settings.theme.to_string()
        }
        other => {
            return Err(anyhow::anyhow!(
                "Unknown setting: {} (use sound, vibration, autofocus, notifications, theme)",
                other
            ));
        }
    };

    // Persisted immediately; settings mutations are never batched.
    settings.save(&mut storage)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        let message = format!("{} = {}", key, rendered);
        println!("{}", badge(&ui, Badge::Ok, &message));
    }
    Ok(())
}
