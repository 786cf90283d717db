//! Main egui application — composes the chat panel and the session runtime.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, TopBottomPanel};

use coach_core::event_bus::EventBus;
use coach_core::ports::CompletionPort;
use coach_core::session::Session;
use coach_platform::host;
use coach_platform::llm::OpenAiCompatClient;
use coach_types::config::CoachConfig;
use coach_ui::panels::chat;
use coach_ui::state::UiState;
use coach_ui::theme;

/// The main application state
pub struct CoachApp {
    ui_state: UiState,
    event_bus: EventBus,
    runtime: Option<SessionRuntime>,
    /// Copy of the startup config for the top bar. Rendering must never
    /// borrow the session: a submit holds it mutably across the await.
    config: Option<CoachConfig>,
    /// Set when the credential is missing; the app renders a fatal error
    /// screen and never accepts input
    config_error: Option<String>,
    first_frame: bool,
}

struct SessionRuntime {
    session: Rc<RefCell<Session>>,
    llm: Rc<dyn CompletionPort>,
}

impl CoachApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let event_bus = EventBus::new();
        let mut ui_state = UiState::new();

        let (runtime, config, config_error) =
            match CoachConfig::with_api_key(host::api_key_from_host()) {
                Ok(config) => {
                    let llm: Rc<dyn CompletionPort> =
                        Rc::new(OpenAiCompatClient::new(config.llm.clone()));
                    let session = Session::new(config.clone(), event_bus.clone());
                    ui_state.seed_transcript(session.conversation().all());
                    (
                        Some(SessionRuntime {
                            session: Rc::new(RefCell::new(session)),
                            llm,
                        }),
                        Some(config),
                        None,
                    )
                }
                Err(e) => {
                    log::error!("startup refused: {}", e);
                    (None, None, Some(e.to_string()))
                }
            };

        Self {
            ui_state,
            event_bus,
            runtime,
            config,
            config_error,
            first_frame: true,
        }
    }

    /// Dispatch a user message to the session runtime (async)
    fn dispatch_message(&self, text: String, ctx: &egui::Context) {
        let Some(runtime) = &self.runtime else {
            return;
        };
        let session = runtime.session.clone();
        let llm = runtime.llm.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = {
                let mut session = session.borrow_mut();
                session.submit(&text, llm.as_ref()).await
            };
            if let Err(e) = result {
                // already surfaced to the UI through the event bus
                log::error!("turn failed: {}", e);
            }
            ctx.request_repaint();
        });
    }

    fn render_config_error(ctx: &egui::Context, message: &str) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.3);
                ui.heading(
                    RichText::new("Gym Coach could not start")
                        .color(theme::ERROR)
                        .strong(),
                );
                ui.add_space(8.0);
                ui.label(RichText::new(message).color(theme::TEXT_PRIMARY));
            });
        });
    }
}

impl eframe::App for CoachApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        if let Some(message) = &self.config_error {
            Self::render_config_error(ctx, message);
            return;
        }

        // Drain events from the session runtime
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Gym Coach")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                if let Some(config) = &self.config {
                    ui.label(
                        RichText::new(format!(
                            "Provider: {} | Model: {} | Phase: {}",
                            config.llm.provider.label(),
                            config.llm.model,
                            self.ui_state.phase.label()
                        ))
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                    );
                }
            });
        });

        // ── Chat panel ───────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            if let Some(user_msg) = chat::chat_panel(ui, &mut self.ui_state) {
                self.dispatch_message(user_msg, ctx);
            }
        });
    }
}
