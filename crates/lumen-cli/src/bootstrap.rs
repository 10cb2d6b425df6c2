use anyhow::Context;
use lumen_config::LumenConfig;

use crate::cli::GlobalFlags;

/// Load `.env` and layered config, then apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LumenConfig> {
    let mut config = LumenConfig::load_with_dotenv().context("failed to load configuration")?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

/// Flags beat every config layer.
fn apply_overrides(config: &mut LumenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(locale) = &flags.locale {
        config.general.locale.clone_from(locale);
    }
    if let Some(journal) = &flags.journal {
        config.general.journal_path.clone_from(journal);
    }
    config.validate().context("invalid command-line override")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(locale: Option<&str>, journal: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            locale: locale.map(str::to_string),
            journal: journal.map(PathBuf::from),
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config = LumenConfig::default();
        apply_overrides(&mut config, &flags(Some("ja"), Some("/tmp/j.jsonl"))).unwrap();
        assert_eq!(config.general.locale, "ja");
        assert_eq!(config.general.journal_path, PathBuf::from("/tmp/j.jsonl"));
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let mut config = LumenConfig::default();
        apply_overrides(&mut config, &flags(None, None)).unwrap();
        assert_eq!(config, LumenConfig::default());
    }

    #[test]
    fn unsupported_locale_flag_is_an_error() {
        let mut config = LumenConfig::default();
        let err = apply_overrides(&mut config, &flags(Some("tlh"), None)).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported locale 'tlh'"));
    }
}
