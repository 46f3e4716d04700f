//! Interactive journaling session
//!
//! A `Session` is the explicit context passed to every interactive
//! operation: it owns the journal and the user's current selections.

use crate::application::compose::ComposeService;
use crate::application::report::{JourneyReport, WeeklyChain};
use crate::domain::{
    ComposeMode, Composition, FlowKind, FlowStep, GuidedFlow, Journal, JournalEntry,
    MilestoneThresholds, Mood, SummaryEngine, Theme, Tone,
};
use crate::error::Result;
use crate::infrastructure::{Config, EntrySource};
use chrono::{Local, NaiveDateTime};

pub struct Session {
    journal: Journal,
    mood: Mood,
    tone: Tone,
    mode: ComposeMode,
    thresholds: MilestoneThresholds,
    flow: Option<GuidedFlow>,
    composer: ComposeService,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Session {
            journal: Journal::new(),
            mood: config.default_mood,
            tone: Tone::Neutral,
            mode: config.compose_mode,
            thresholds: config.thresholds(),
            flow: None,
            composer: ComposeService::new(config.seed),
        }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn entries(&self) -> &[JournalEntry] {
        self.journal.entries()
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    /// Tone recorded on entries from multi-step flows
    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.tone = tone;
    }

    pub fn mode(&self) -> ComposeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ComposeMode) {
        self.mode = mode;
    }

    /// Compose a reply to `text` and save it as a chat entry
    pub fn say(&mut self, text: &str) -> Composition {
        let (composition, entry) = self
            .composer
            .execute_and_record(text, self.mode, self.mood);
        self.journal.append(entry);
        composition
    }

    /// Save a directly submitted reflection
    pub fn submit(&mut self, tone: Tone, theme: Theme, text: &str) -> &JournalEntry {
        self.journal
            .append(JournalEntry::new(text, tone, theme, self.mood));
        &self.journal.entries()[self.journal.len() - 1]
    }

    /// Start a flow, replacing any flow already in progress
    pub fn start_flow(&mut self, kind: FlowKind, theme: Theme) -> FlowStep {
        let flow = GuidedFlow::start(kind, theme, self.tone, self.mood);
        let step = flow.current();
        self.flow = Some(flow);
        step
    }

    pub fn in_flow(&self) -> bool {
        self.flow.is_some()
    }

    /// Answer the current flow prompt. A completed flow is saved to the
    /// journal and cleared. `None` when no flow is running.
    pub fn answer(&mut self, text: &str, now: NaiveDateTime) -> Option<FlowStep> {
        let flow = self.flow.as_mut()?;
        let step = flow.answer(text, now);
        if let FlowStep::Complete(entry) = &step {
            self.journal.append(entry.clone());
            self.flow = None;
        }
        Some(step)
    }

    /// Abandon the running flow; returns whether one was running
    pub fn cancel_flow(&mut self) -> bool {
        self.flow.take().is_some()
    }

    pub fn engine(&self) -> SummaryEngine {
        SummaryEngine::new(self.entries())
    }

    pub fn report(&self) -> JourneyReport {
        JourneyReport::build(self.entries(), self.thresholds)
    }

    pub fn weekly_chain(&self) -> Option<WeeklyChain> {
        WeeklyChain::build(self.entries(), Local::now().naive_local())
    }

    /// Replace the whole journal with the entries of `source`
    pub fn load(&mut self, source: &impl EntrySource) -> Result<usize> {
        let entries = source.load_entries()?;
        let count = entries.len();
        let previous = self.journal.replace(entries);
        tracing::info!(
            source = %source.describe(),
            replaced = previous.len(),
            loaded = count,
            "journal replaced"
        );
        Ok(count)
    }
}
