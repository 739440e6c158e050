//! Config subcommand handlers.

use dialoguer::{Input, Select};
use secrecy::SecretString;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, Profile};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

const REDACTED: &str = "********";

// ── Table row ───────────────────────────────────────────────────────

#[derive(Serialize)]
struct ProfileSummary {
    name: String,
    default: bool,
    api_url: String,
    token_source: &'static str,
    timeout: Option<u64>,
}

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Profile")]
    name: String,
    #[tabled(rename = "Default")]
    default: &'static str,
    #[tabled(rename = "API URL")]
    api_url: String,
    #[tabled(rename = "Token")]
    token_source: &'static str,
}

impl From<&ProfileSummary> for ProfileRow {
    fn from(p: &ProfileSummary) -> Self {
        Self {
            name: p.name.clone(),
            default: if p.default { "*" } else { "" },
            api_url: p.api_url.clone(),
            token_source: p.token_source,
        }
    }
}

fn token_source(profile: &Profile) -> &'static str {
    if profile.token_env.is_some() {
        "env"
    } else if profile.token.is_some() {
        "plaintext"
    } else {
        "keyring"
    }
}

fn summarize(cfg: &Config) -> Vec<ProfileSummary> {
    let default = cfg.default_profile.as_deref().unwrap_or("default");
    let mut rows: Vec<_> = cfg
        .profiles
        .iter()
        .map(|(name, p)| ProfileSummary {
            name: name.clone(),
            default: name == default,
            api_url: p.api_url.clone().unwrap_or_else(|| "(public API)".into()),
            token_source: token_source(p),
            timeout: p.timeout,
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Copy of the config with plaintext tokens masked.
fn redacted(cfg: &Config) -> Config {
    let mut cfg = cfg.clone();
    for profile in cfg.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some(REDACTED.into());
        }
    }
    cfg
}

fn store_in_keyring(profile_name: &str, token: &SecretString) -> Result<(), CliError> {
    netsite_config::store_token(profile_name, token).map_err(|e| CliError::Validation {
        field: "keyring".into(),
        reason: format!("failed to store token in keyring: {e}"),
    })
}

fn read_token() -> Result<SecretString, CliError> {
    let token = rpassword::prompt_password("Access token: ").map_err(prompt_err)?;
    if token.is_empty() {
        return Err(CliError::Validation {
            field: "token".into(),
            reason: "token cannot be empty".into(),
        });
    }
    Ok(SecretString::from(token))
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),

        ConfigCommand::Show => {
            let cfg = redacted(&config::load_config()?);
            let out = output::render_single(
                &global.output,
                &cfg,
                |c| toml::to_string_pretty(c).unwrap_or_else(|e| format!("<unrenderable: {e}>")),
                |c| c.default_profile.clone().unwrap_or_default(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Set { key, value } => set(&key, value, global),

        ConfigCommand::Profiles => {
            let cfg = config::load_config()?;
            if cfg.profiles.is_empty() {
                output::print_warning(
                    "No profiles configured. Run: netsite config init",
                    &global.color,
                );
                return Ok(());
            }
            let out = output::render_list(
                &global.output,
                &summarize(&cfg),
                |p| ProfileRow::from(p),
                |p| p.name.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config()?;
            cfg.profile(&name)?;
            cfg.default_profile = Some(name.clone());
            config::save_config(&cfg)?;
            output::print_success(
                &format!("Default profile set to '{name}'"),
                &global.color,
                global.quiet,
            );
            Ok(())
        }

        ConfigCommand::SetToken { profile } => {
            let cfg = config::load_config()?;
            let profile_name = profile.unwrap_or_else(|| config::active_profile_name(global, &cfg));
            cfg.profile(&profile_name)?;

            let token = read_token()?;
            store_in_keyring(&profile_name, &token)?;
            output::print_success(
                &format!("Token stored in system keyring for profile '{profile_name}'"),
                &global.color,
                global.quiet,
            );
            Ok(())
        }
    }
}

// ── Init: interactive wizard ────────────────────────────────────────

fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let config_path = config::config_path();
    eprintln!("netsite configuration wizard");
    eprintln!("   Config path: {}\n", config_path.display());

    let mut cfg = config::load_config()?;

    // 1. Profile name
    let profile_name: String = Input::new()
        .with_prompt("Profile name")
        .default("default".into())
        .interact_text()
        .map_err(prompt_err)?;

    // 2. API URL (blank keeps the public endpoint)
    let api_url: String = Input::new()
        .with_prompt("API URL (leave empty for api.netlify.com)")
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)?;

    // 3. Token storage
    let choices = &[
        "Store in system keyring (recommended)",
        "Read from an environment variable",
        "Save to config file (plaintext)",
    ];
    let selection = Select::new()
        .with_prompt("Where should the access token come from?")
        .items(choices)
        .default(0)
        .interact()
        .map_err(prompt_err)?;

    let mut profile = Profile {
        api_url: (!api_url.trim().is_empty()).then(|| api_url.trim().to_owned()),
        ..Profile::default()
    };

    match selection {
        0 => {
            let token = read_token()?;
            store_in_keyring(&profile_name, &token)?;
            eprintln!("   Token stored in system keyring");
        }
        1 => {
            let var: String = Input::new()
                .with_prompt("Environment variable")
                .default("NETLIFY_AUTH_TOKEN".into())
                .interact_text()
                .map_err(prompt_err)?;
            profile.token_env = Some(var);
        }
        _ => {
            let token = rpassword::prompt_password("Access token: ").map_err(prompt_err)?;
            profile.token = Some(token);
        }
    }

    cfg.profiles.insert(profile_name.clone(), profile);
    cfg.default_profile = Some(profile_name.clone());
    let written = config::save_config(&cfg)?;

    output::print_success(
        &format!("Configuration written to {}", written.display()),
        &global.color,
        global.quiet,
    );
    eprintln!("  Active profile: {profile_name}");
    eprintln!("\n  Try it: netsite site import <SITE_ID>");
    Ok(())
}

// ── Set <key> <value> ───────────────────────────────────────────────

fn set(key: &str, value: String, global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = config::load_config()?;
    let profile_name = config::active_profile_name(global, &cfg);
    let profile = cfg.profiles.entry(profile_name.clone()).or_default();

    match key {
        "api_url" | "api-url" => profile.api_url = Some(value),
        "token_env" | "token-env" => profile.token_env = Some(value),
        "ca_cert" | "ca-cert" => profile.ca_cert = Some(value.into()),
        "timeout" => {
            profile.timeout = Some(value.parse().map_err(|_| CliError::Validation {
                field: "timeout".into(),
                reason: "must be a number (seconds)".into(),
            })?);
        }
        "token" => {
            return Err(CliError::Validation {
                field: "token".into(),
                reason: "use 'netsite config set-token' to store tokens".into(),
            });
        }
        other => {
            return Err(CliError::Validation {
                field: other.into(),
                reason: format!(
                    "unknown config key '{other}'. Valid keys: api_url, token_env, ca_cert, timeout"
                ),
            });
        }
    }

    config::save_config(&cfg)?;
    output::print_success(
        &format!("Set {key} on profile '{profile_name}'"),
        &global.color,
        global.quiet,
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> Config {
        let mut cfg = Config {
            default_profile: Some("work".into()),
            ..Config::default()
        };
        cfg.profiles.insert(
            "work".into(),
            Profile {
                token: Some("secret".into()),
                ..Profile::default()
            },
        );
        cfg.profiles.insert(
            "ci".into(),
            Profile {
                api_url: Some("https://api.example.test".into()),
                token_env: Some("CI_TOKEN".into()),
                timeout: Some(10),
                ..Profile::default()
            },
        );
        cfg
    }

    #[test]
    fn show_masks_plaintext_tokens() {
        let cfg = redacted(&config());
        assert_eq!(cfg.profiles["work"].token.as_deref(), Some(REDACTED));
        assert_eq!(cfg.profiles["ci"].token, None);
    }

    #[test]
    fn profiles_are_sorted_and_marked() {
        let rows = summarize(&config());
        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["ci", "work"]);

        assert!(!rows[0].default);
        assert_eq!(rows[0].token_source, "env");
        assert_eq!(rows[0].api_url, "https://api.example.test");

        assert!(rows[1].default);
        assert_eq!(rows[1].token_source, "plaintext");
        assert_eq!(rows[1].api_url, "(public API)");
    }
}
