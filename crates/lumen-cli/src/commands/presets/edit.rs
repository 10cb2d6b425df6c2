use lumen_core::entities::{CustomQuickAdd, NewQuickAdd};
use lumen_core::enums::DrinkKind;
use lumen_store::StoreError;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Fields given on the command line; `None` keeps the stored value.
pub struct Changes<'a> {
    pub label: Option<&'a str>,
    pub kind: Option<&'a str>,
    pub volume: Option<f64>,
    pub abv: Option<f64>,
}

impl Changes<'_> {
    fn is_empty(&self) -> bool {
        self.label.is_none() && self.kind.is_none() && self.volume.is_none() && self.abv.is_none()
    }
}

pub fn run(id: &str, changes: &Changes<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    anyhow::ensure!(
        !changes.is_empty(),
        "nothing to edit: pass --label, --kind, --volume or --abv"
    );
    let current = ctx
        .quick_adds
        .list()?
        .into_iter()
        .find(|q| q.id == id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
    let updated = ctx.quick_adds.update(id, merge(&current, changes)?)?;
    tracing::info!(id, label = %updated.label, "quick-add updated");
    output(&updated, flags.format)
}

fn merge(current: &CustomQuickAdd, changes: &Changes<'_>) -> anyhow::Result<NewQuickAdd> {
    let kind: DrinkKind = match changes.kind {
        Some(raw) => parse_enum(raw, "kind")?,
        None => current.kind,
    };
    Ok(NewQuickAdd::new(
        changes.label.unwrap_or(&current.label),
        kind,
        changes.volume.unwrap_or(current.volume_ml),
        changes.abv.unwrap_or(current.abv_percent),
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn current() -> CustomQuickAdd {
        CustomQuickAdd {
            id: "qad-1".into(),
            label: "Hazy IPA".into(),
            kind: DrinkKind::Beer,
            volume_ml: 440.0,
            abv_percent: 6.5,
        }
    }

    #[test]
    fn omitted_fields_keep_stored_values() {
        let changes = Changes {
            label: None,
            kind: None,
            volume: None,
            abv: Some(5.2),
        };
        let merged = merge(&current(), &changes).unwrap();
        assert_eq!(merged, NewQuickAdd::new("Hazy IPA", DrinkKind::Beer, 440.0, 5.2));
    }

    #[test]
    fn kind_is_parsed_when_given() {
        let changes = Changes {
            label: Some("House red"),
            kind: Some("wine"),
            volume: Some(175.0),
            abv: Some(13.0),
        };
        let merged = merge(&current(), &changes).unwrap();
        assert_eq!(merged, NewQuickAdd::new("House red", DrinkKind::Wine, 175.0, 13.0));
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let changes = Changes {
            label: None,
            kind: Some("mead"),
            volume: None,
            abv: None,
        };
        assert!(merge(&current(), &changes).is_err());
    }

    #[test]
    fn no_changes_is_empty() {
        let changes = Changes {
            label: None,
            kind: None,
            volume: None,
            abv: None,
        };
        assert!(changes.is_empty());
    }
}
