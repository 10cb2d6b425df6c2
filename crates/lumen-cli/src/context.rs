use lumen_config::LumenConfig;
use lumen_core::entities::DrinkEntry;
use lumen_i18n::Translator;
use lumen_store::{DrinkJournal, DrinkLog, GoalStore, QuickAddStore};
use serde::Serialize;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: LumenConfig,
    pub translator: Translator,
    pub log: DrinkLog,
    pub quick_adds: QuickAddStore,
    pub goals: GoalStore,
}

/// Where the goal in effect was taken from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalSource {
    Flag,
    Stored,
    Config,
}

impl AppContext {
    /// Resolve the locale and open the journal named in `config`. Quick-adds
    /// and the stored goal live beside the journal.
    pub fn init(config: LumenConfig) -> anyhow::Result<Self> {
        let translator = Translator::new(config.general.locale()?);
        let log = DrinkLog::open(DrinkJournal::new(config.general.journal_path.clone()))?;
        let quick_adds = QuickAddStore::new(config.general.quick_adds_path());
        let goals = GoalStore::new(config.general.goal_path());
        Ok(Self {
            config,
            translator,
            log,
            quick_adds,
            goals,
        })
    }

    /// The daily goal in effect: `flag`, then the stored goal, then
    /// `general.daily_goal_grams`.
    pub fn daily_goal(&self, flag: Option<f64>) -> anyhow::Result<Option<(f64, GoalSource)>> {
        if let Some(goal) = flag.filter(|g| *g > 0.0) {
            return Ok(Some((goal, GoalSource::Flag)));
        }
        if let Some(stored) = self.goals.get()? {
            return Ok(Some((stored.goal_grams, GoalSource::Stored)));
        }
        Ok(self.config.general.daily_goal().map(|g| (g, GoalSource::Config)))
    }

    /// Logged drinks, newest first, optionally limited to the current UTC day.
    pub fn drinks(&self, today_only: bool) -> Vec<DrinkEntry> {
        let today = chrono::Utc::now().date_naive();
        self.log
            .entries()
            .iter()
            .filter(|d| !today_only || d.timestamp.date_naive() == today)
            .cloned()
            .collect()
    }
}
