//! Freeform Curve Editor.
//!
//! Interaktiver Editor für Freiform-Kurven: Polylines, Bezier- und
//! Lagrange-Kurven per Klick aufbauen, selektieren und verschieben.

use eframe::egui;
use freeform_curve_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Freeform Curve Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([960.0, 720.0])
                .with_title("Freeform Curve Editor"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Freeform Curve Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            if let Err(e) = self.state.options.save_to_file(&EditorOptions::config_path()) {
                log::warn!("Optionen konnten nicht gespeichert werden: {:#}", e);
            }
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state);
        let toolbar_events = ui::render_toolbar(ctx, &self.state);
        self.process_events(toolbar_events);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                // Erst alle Mutationen anwenden, dann zeichnen: der Render-Pass
                // sieht nie einen halb aktualisierten Kurvenzustand.
                let viewport_events = self.input.collect_viewport_events(ui, &response, rect);
                self.process_events(viewport_events);

                render::paint_scene(ui.painter(), rect, &self.state.scene, &self.state.options);
            });

        if ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
