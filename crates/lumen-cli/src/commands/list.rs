use lumen_core::entities::DrinkEntry;
use lumen_i18n::{Localizer, MessageKey};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lumen list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let drinks = ctx.drinks(args.today);
    if drinks.is_empty() && !flags.quiet {
        eprintln!("{}", ctx.translator.text(MessageKey::LogEmpty, &[]));
    }
    output(&limit(drinks, args.limit), flags.format)
}

fn limit(mut drinks: Vec<DrinkEntry>, limit: Option<usize>) -> Vec<DrinkEntry> {
    if let Some(limit) = limit {
        drinks.truncate(limit);
    }
    drinks
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use lumen_core::enums::DrinkKind;

    use super::*;

    fn entry(id: &str) -> DrinkEntry {
        DrinkEntry {
            id: id.into(),
            kind: DrinkKind::Beer,
            volume_ml: 330.0,
            abv_percent: 5.0,
            alcohol_grams: 13.02,
            timestamp: Utc.with_ymd_and_hms(2026, 2, 8, 21, 0, 0).unwrap(),
        }
    }

    #[test]
    fn limit_keeps_newest() {
        let drinks = vec![entry("drk-00000003"), entry("drk-00000002"), entry("drk-00000001")];
        let kept = limit(drinks, Some(2));
        let ids: Vec<&str> = kept.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["drk-00000003", "drk-00000002"]);
    }

    #[test]
    fn no_limit_keeps_all() {
        assert_eq!(limit(vec![entry("a"), entry("b")], None).len(), 2);
    }
}
