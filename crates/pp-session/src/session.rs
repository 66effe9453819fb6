//! Generation pipeline for one session.

use std::time::Instant;

use pp_acquire::{Acquirer, ModelClient, SamplingParams};
use tracing::{debug, info};

use crate::context::SessionContext;
use crate::scheduler::{Decision, Scheduler, Trigger};
use crate::settings::{Fingerprint, GenerationSettings, compose_prompt};

/// Summary of a completed generation cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub trigger: Trigger,
    /// Generation number after the cycle.
    pub generation: u64,
    /// Fallback notice, `None` when the model produced the structure.
    pub notice: Option<String>,
}

/// Scheduler, acquirer and renderer wired around one [`SessionContext`].
#[derive(Debug)]
pub struct Session<C> {
    acquirer: Acquirer<C>,
    scheduler: Scheduler,
    context: SessionContext,
}

impl<C: ModelClient> Session<C> {
    pub fn new(acquirer: Acquirer<C>, scheduler: Scheduler) -> Self {
        Self {
            acquirer,
            scheduler,
            context: SessionContext::new(),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SessionContext {
        &mut self.context
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    pub fn acquirer(&self) -> &Acquirer<C> {
        &self.acquirer
    }

    /// Evaluate the scheduler after an interaction event.
    ///
    /// Runs a generation cycle when one is due.
    pub fn on_event(&mut self, settings: &GenerationSettings, now: Instant) -> Option<CycleReport> {
        let fingerprint = settings.fingerprint();
        let decision = self.scheduler.evaluate(&mut self.context, &fingerprint, now);
        debug!(?decision, "Scheduler evaluated");
        self.run_if_due(decision, settings, fingerprint)
    }

    /// Generate immediately. Returns `None` when the prompt is blank.
    pub fn generate_now(
        &mut self,
        settings: &GenerationSettings,
        now: Instant,
    ) -> Option<CycleReport> {
        let fingerprint = settings.fingerprint();
        let decision = self
            .scheduler
            .manual_trigger(&mut self.context, &fingerprint, now);
        self.run_if_due(decision, settings, fingerprint)
    }

    fn run_if_due(
        &mut self,
        decision: Decision,
        settings: &GenerationSettings,
        fingerprint: Fingerprint,
    ) -> Option<CycleReport> {
        match decision {
            Decision::Generate(trigger) => Some(self.run(trigger, settings, fingerprint)),
            Decision::Idle | Decision::Pending | Decision::Disabled => None,
        }
    }

    fn run(
        &mut self,
        trigger: Trigger,
        settings: &GenerationSettings,
        fingerprint: Fingerprint,
    ) -> CycleReport {
        let prompt = compose_prompt(settings);
        let sampling = SamplingParams {
            temperature: settings.temperature,
            ..self.acquirer.sampling()
        };

        let acquisition =
            self.acquirer
                .acquire_with(&prompt, settings.color_scheme, settings.layout, sampling);
        let notice = acquisition.notice();
        let fallback = acquisition.is_fallback();
        let structure = acquisition.into_structure();
        let markup = pp_renderer::render(&structure);

        let artifact = self.context.commit(fingerprint, structure, markup, fallback);
        info!(
            trigger = trigger.as_str(),
            generation = artifact.generation,
            fallback,
            sections = artifact.structure.sections.len(),
            "Website generated"
        );

        CycleReport {
            trigger,
            generation: artifact.generation,
            notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use pp_acquire::{OfflineClient, ScriptedClient};
    use pp_schema::{ColorScheme, Layout};
    use pretty_assertions::assert_eq;

    const REPLY: &str = r#"{"title": "Crust", "sections": [{"type": "hero", "title": "Bread"}]}"#;

    fn settings(prompt: &str) -> GenerationSettings {
        GenerationSettings {
            prompt: prompt.to_owned(),
            ..GenerationSettings::default()
        }
    }

    #[test]
    fn test_on_event_generates_and_commits() {
        let client = ScriptedClient::new().with_reply(REPLY);
        let mut session = Session::new(Acquirer::new(client), Scheduler::default());

        let report = session.on_event(&settings("A bakery"), Instant::now()).unwrap();
        assert_eq!(
            report,
            CycleReport {
                trigger: Trigger::Automatic,
                generation: 1,
                notice: None,
            }
        );

        let artifact = session.context().artifact().unwrap();
        assert_eq!(artifact.structure.title, "Crust");
        assert!(artifact.markup.contains(">Bread</h1>"));
        assert!(!artifact.fallback);
    }

    #[test]
    fn test_unchanged_settings_do_not_regenerate() {
        let client = ScriptedClient::new().with_reply(REPLY).with_reply(REPLY);
        let mut session = Session::new(Acquirer::new(client), Scheduler::default());
        let s = settings("A bakery");
        let start = Instant::now();

        assert!(session.on_event(&s, start).is_some());
        assert!(session.on_event(&s, start + Duration::from_secs(10)).is_none());
        assert_eq!(session.acquirer().client().call_count(), 1);
    }

    #[test]
    fn test_request_uses_composed_prompt_and_temperature() {
        let client = ScriptedClient::new().with_reply(REPLY);
        let mut session = Session::new(Acquirer::new(client), Scheduler::default());
        let mut s = settings("A bakery");
        s.temperature = 0.3;
        s.color_scheme = ColorScheme::Secondary;

        let _ = session.generate_now(&s, Instant::now());

        let requests = session.acquirer().client().requests();
        assert_eq!(requests.len(), 1);
        assert!((requests[0].sampling.temperature - 0.3).abs() < f32::EPSILON);
        assert_eq!(requests[0].sampling.max_output_tokens, 4096);
        assert!(requests[0].text.contains("User Request: A bakery\n\nAdditional Requirements:"));
        assert!(requests[0].text.contains(r#"color scheme "secondary""#));
    }

    #[test]
    fn test_generate_now_with_blank_prompt_is_disabled() {
        let client = ScriptedClient::new();
        let mut session = Session::new(Acquirer::new(client), Scheduler::default());

        assert!(session.generate_now(&settings(" "), Instant::now()).is_none());
        assert_eq!(session.acquirer().client().call_count(), 0);
        assert_eq!(session.context().generation_count(), 0);
    }

    #[test]
    fn test_offline_session_reports_fallback() {
        let mut session = Session::new(
            Acquirer::new(OfflineClient::default()),
            Scheduler::new(false, Duration::ZERO),
        );
        let mut s = settings("Restaurant site");
        s.layout = Layout::Centered;

        assert!(session.on_event(&s, Instant::now()).is_none());
        let report = session.generate_now(&s, Instant::now()).unwrap();
        assert_eq!(report.trigger, Trigger::Manual);
        assert!(report.notice.unwrap().contains("no API key configured"));
        assert!(session.context().artifact().unwrap().fallback);
    }
}
