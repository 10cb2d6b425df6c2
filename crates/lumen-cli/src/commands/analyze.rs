use lumen_core::entities::{BRAIN_REGIONS, ImpactAnalysis};
use lumen_i18n::{Localizer, MessageKey};
use lumen_impact::{SessionStats, analyze_consumption};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::root_commands::AnalyzeArgs;
use crate::context::AppContext;
use crate::output::output;

/// One display row per region, in region-table order.
#[derive(Debug, Serialize)]
pub struct RegionRow {
    pub region: String,
    pub impact: f64,
    pub severity: String,
    pub effect: String,
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: ImpactAnalysis,
    pub session: SessionStats,
}

/// Handle `lumen analyze`.
pub fn handle(args: &AnalyzeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let drinks = ctx.drinks(args.today);
    let analysis = analyze_consumption(&drinks, &ctx.translator);
    tracing::debug!(
        drinks = drinks.len(),
        total_grams = analysis.total_grams,
        overall = analysis.overall_impact,
        "analysis complete"
    );

    match flags.format {
        OutputFormat::Table => output(&region_rows(&analysis, &ctx.translator), flags.format),
        OutputFormat::Json | OutputFormat::Raw => output(
            &AnalyzeResponse {
                analysis,
                session: SessionStats::from_drinks(&drinks),
            },
            flags.format,
        ),
    }
}

fn region_rows(analysis: &ImpactAnalysis, localizer: &impl Localizer) -> Vec<RegionRow> {
    BRAIN_REGIONS
        .iter()
        .filter_map(|region| analysis.region(region.id))
        .map(|impact| RegionRow {
            region: localizer.text(MessageKey::region(impact.region), &[]),
            impact: (impact.impact * 100.0).round() / 100.0,
            severity: impact.impact_word.clone(),
            effect: impact.effect_text.clone(),
            color: impact.color.as_str(),
        })
        .collect()
}
