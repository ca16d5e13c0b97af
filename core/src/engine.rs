//! The course engine — the single owner of all course state.
//!
//! RULES:
//!   - One engine instance per session, constructed explicitly and passed
//!     by reference to whoever drives it. No globals.
//!   - Commands in, events out. The engine never touches a rendering
//!     surface.
//!   - All delayed output flows through the sequencer; a module switch or
//!     restart cancels every pending emission, so stale playback can never
//!     surface.
//!   - All randomness flows through the per-demo RNG streams derived from
//!     the master seed. Same seed + same command script ⇒ same events.

use crate::{
    certificate, charts,
    chatbot::{self, ChatAuthor, Personality, StoreType},
    clock::{hms, CourseClock},
    command::UiCommand,
    event::CourseEvent,
    fraud::{self, FraudControls},
    module::ModuleId,
    pricing::{self, PricingControls},
    recommend::{self, Algorithm, RecommendationWeights},
    rng::{DemoRng, DemoSlot, RngBank},
    scripted::{self, ShoppingScenario},
    sequencer::Sequencer,
    types::{Millis, Seconds, SessionId},
};
use serde::Serialize;

/// Millisecond spacing of countdown ticks.
const TICK_INTERVAL: Millis = 1000;

pub struct CourseEngine {
    pub session_id: SessionId,
    clock: CourseClock,
    sequencer: Sequencer,
    current: Option<ModuleId>,
    selected_case: Option<String>,
    selected_exercise: Option<String>,
    now: Millis,
    last_tick: Millis,
    recommend_rng: DemoRng,
    metrics_rng: DemoRng,
    chat_rng: DemoRng,
}

/// A serializable summary of where the session stands, for drivers and
/// IPC peers.
#[derive(Debug, Clone, Serialize)]
pub struct UiState {
    pub session_id: SessionId,
    pub module: Option<ModuleId>,
    pub progress: f64,
    pub remaining: Seconds,
    pub timer_display: String,
    pub completed: bool,
    pub pending_emissions: usize,
}

impl CourseEngine {
    pub fn new(session_id: SessionId, seed: u64) -> Self {
        let bank = RngBank::new(seed);
        Self {
            session_id,
            clock: CourseClock::new(),
            sequencer: Sequencer::new(),
            current: None,
            selected_case: None,
            selected_exercise: None,
            now: 0,
            last_tick: 0,
            recommend_rng: bank.for_demo(DemoSlot::Recommendation),
            metrics_rng: bank.for_demo(DemoSlot::Metrics),
            chat_rng: bank.for_demo(DemoSlot::Chat),
        }
    }

    // ── Command processing ───────────────────────────────────────────────

    /// Apply one UI command. Unknown targets are silent no-ops; whatever
    /// is due right now (including zero-delay scheduled output) is
    /// returned immediately.
    pub fn handle(&mut self, command: UiCommand) -> Vec<CourseEvent> {
        let mut events = match command {
            UiCommand::Start => self.start(),
            UiCommand::GoToModule { id } => match ModuleId::parse(&id) {
                Some(module) => self.enter_module(module),
                None => {
                    log::debug!("ignoring navigation to unknown module {id:?}");
                    Vec::new()
                }
            },
            UiCommand::ShowCaseStudy { id } => {
                self.selected_case = Some(id.clone());
                vec![CourseEvent::CaseStudySelected { id }]
            }
            UiCommand::ShowExercise { id } => {
                self.selected_exercise = Some(id.clone());
                vec![CourseEvent::ExerciseSelected { id }]
            }
            UiCommand::Restart => self.restart(),
            UiCommand::RunAgentSimulation => {
                let run = self.sequencer.begin_run();
                let script = scripted::agent_script(run);
                self.sequencer.schedule_script(run, self.now, script);
                Vec::new()
            }
            UiCommand::RunShoppingSimulation { scenario } => {
                match ShoppingScenario::parse(&scenario) {
                    Some(scenario) => {
                        let run = self.sequencer.begin_run();
                        let script = scripted::shopping_script(run, scenario);
                        self.sequencer.schedule_script(run, self.now, script);
                    }
                    None => log::debug!("ignoring unknown shopping scenario {scenario:?}"),
                }
                Vec::new()
            }
            UiCommand::PokeEnvironment { element } => vec![CourseEvent::EnvironmentNote {
                text: scripted::environment_note(&element),
            }],
            UiCommand::ConfigureChat {
                store_type,
                personality,
            } => vec![CourseEvent::ChatMessage {
                author: ChatAuthor::Bot,
                text: chatbot::welcome(
                    StoreType::parse(&store_type),
                    Personality::parse(&personality),
                ),
            }],
            UiCommand::Chat { text } => self.chat(text),
            UiCommand::RunRecommendation {
                algorithm,
                price_weight,
                rating_weight,
                similarity_weight,
            } => {
                let weights = RecommendationWeights::from_sliders(
                    price_weight,
                    rating_weight,
                    similarity_weight,
                );
                let items = recommend::rank(
                    &weights,
                    Algorithm::parse(&algorithm),
                    &mut self.recommend_rng,
                );
                let metrics = recommend::accuracy_metrics(&mut self.metrics_rng);
                vec![CourseEvent::RecommendationsReady { items, metrics }]
            }
            UiCommand::RunFraudDetection {
                amount_threshold,
                velocity_sensitivity,
                location_risk,
                device_trust,
            } => {
                let controls = FraudControls::from_sliders(
                    amount_threshold,
                    velocity_sensitivity,
                    location_risk,
                    device_trust,
                );
                let run = self.sequencer.begin_run();
                let script = fraud::feed_script(run, &controls);
                self.sequencer.schedule_script(run, self.now, script);
                Vec::new()
            }
            UiCommand::RunPriceOptimization {
                demand_sensitivity,
                competition_weight,
                min_margin,
            } => {
                let controls = PricingControls::from_sliders(
                    demand_sensitivity,
                    competition_weight,
                    min_margin,
                );
                let (cards, summary) = pricing::optimize(&controls);
                vec![CourseEvent::PricesOptimized { cards, summary }]
            }
            UiCommand::RequestCertificate { completed_on } => {
                if self.clock.completed {
                    vec![CourseEvent::CertificateReady {
                        certificate: certificate::issue(self.clock.elapsed(), completed_on),
                    }]
                } else {
                    log::debug!("certificate requested before completion; ignoring");
                    Vec::new()
                }
            }
        };

        // Release anything scheduled for "right now" synchronously.
        events.extend(self.sequencer.take_due(self.now));
        events
    }

    /// Advance engine time, interleaving due scheduled emissions with
    /// 1-second countdown ticks in chronological order.
    pub fn advance(&mut self, ms: Millis) -> Vec<CourseEvent> {
        let mut events = Vec::new();
        let target = self.now.saturating_add(ms);

        loop {
            let mut next = target;
            if let Some(due) = self.sequencer.next_due() {
                next = next.min(due);
            }
            if self.clock.running {
                next = next.min(self.last_tick + TICK_INTERVAL);
            }
            self.now = next.min(target).max(self.now);

            events.extend(self.sequencer.take_due(self.now));
            while self.clock.running && self.now >= self.last_tick + TICK_INTERVAL {
                self.last_tick += TICK_INTERVAL;
                events.extend(self.timer_tick());
            }
            // A tick may itself schedule zero-delay emissions (module entry
            // choreography on completion); release those in order too.
            events.extend(self.sequencer.take_due(self.now));

            if self.now >= target {
                break;
            }
        }
        events
    }

    // ── State access ─────────────────────────────────────────────────────

    pub fn current_module(&self) -> Option<ModuleId> {
        self.current
    }

    /// Progress through the course: 0 before the first module.
    pub fn progress(&self) -> f64 {
        self.current.map(|m| m.progress()).unwrap_or(0.0)
    }

    pub fn remaining(&self) -> Seconds {
        self.clock.remaining
    }

    pub fn is_completed(&self) -> bool {
        self.clock.completed
    }

    pub fn selected_case_study(&self) -> Option<&str> {
        self.selected_case.as_deref()
    }

    pub fn selected_exercise(&self) -> Option<&str> {
        self.selected_exercise.as_deref()
    }

    pub fn state(&self) -> UiState {
        UiState {
            session_id: self.session_id.clone(),
            module: self.current,
            progress: self.progress(),
            remaining: self.clock.remaining,
            timer_display: hms(self.clock.remaining),
            completed: self.clock.completed,
            pending_emissions: self.sequencer.pending_len(),
        }
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn start(&mut self) -> Vec<CourseEvent> {
        if self.current.is_some() {
            log::debug!("start requested but the course is already underway");
            return Vec::new();
        }
        self.clock.start();
        self.last_tick = self.now;
        let mut events = vec![CourseEvent::CourseStarted];
        events.extend(self.enter_module(ModuleId::Fundamentals));
        events
    }

    fn enter_module(&mut self, module: ModuleId) -> Vec<CourseEvent> {
        // Abort everything still in flight for the previous view.
        self.sequencer.cancel_all();
        self.current = Some(module);

        let mut events = vec![CourseEvent::ModuleEntered {
            module,
            progress: module.progress(),
            label: module.progress_label(),
        }];

        let run = self.sequencer.begin_run();
        for cue in crate::animation::cues_for(module) {
            let at = self.now + cue.start;
            self.sequencer
                .schedule(run, at, CourseEvent::Reveal { run, cue });
        }

        match module {
            ModuleId::Commerce => events.push(CourseEvent::ChartReady {
                chart: charts::inventory_chart(),
            }),
            ModuleId::Future => events.push(CourseEvent::ChartReady {
                chart: charts::impact_chart(),
            }),
            _ => {}
        }
        events
    }

    fn restart(&mut self) -> Vec<CourseEvent> {
        self.sequencer.cancel_all();
        self.clock.reset();
        self.current = None;
        self.selected_case = None;
        self.selected_exercise = None;
        self.last_tick = self.now;
        vec![
            CourseEvent::CourseRestarted,
            CourseEvent::TimerUpdated {
                remaining: self.clock.remaining,
                display: hms(self.clock.remaining),
            },
        ]
    }

    fn chat(&mut self, text: String) -> Vec<CourseEvent> {
        let Some(reply) = chatbot::reply(&text, &mut self.chat_rng) else {
            return Vec::new();
        };
        let events = vec![CourseEvent::ChatMessage {
            author: ChatAuthor::User,
            text: text.trim().to_string(),
        }];
        let run = self.sequencer.begin_run();
        self.sequencer.schedule(
            run,
            self.now + chatbot::REPLY_DELAY,
            CourseEvent::ChatMessage {
                author: ChatAuthor::Bot,
                text: reply,
            },
        );
        events
    }

    fn timer_tick(&mut self) -> Vec<CourseEvent> {
        let outcome = self.clock.tick();
        let mut events = vec![CourseEvent::TimerUpdated {
            remaining: outcome.remaining,
            display: hms(outcome.remaining),
        }];
        if outcome.just_completed {
            log::info!("session {}: course completed", self.session_id);
            events.push(CourseEvent::CourseCompleted {
                elapsed_display: hms(self.clock.elapsed()),
            });
            // Completion lands the learner on the closing module.
            events.extend(self.enter_module(ModuleId::Future));
        }
        events
    }
}
