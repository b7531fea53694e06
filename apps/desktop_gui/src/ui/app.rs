//! Planner screen: egui rendering over the reducer-owned state.

use client_core::JourneyTotals;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::protocol::JourneyStep;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{reduce, Effect, PlannerEvent, PlannerState};

pub struct PlannerApp {
    cmd_tx: Sender<BackendCommand>,
    event_rx: Receiver<PlannerEvent>,
    state: PlannerState,
}

impl PlannerApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, event_rx: Receiver<PlannerEvent>) -> Self {
        let mut app = Self {
            cmd_tx,
            event_rx,
            state: PlannerState::default(),
        };
        // The catalog is fetched exactly once, at startup.
        dispatch_backend_command(
            &app.cmd_tx,
            BackendCommand::LoadRoutes,
            &mut app.state.error,
        );
        app
    }

    fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            if let Some(effect) = reduce(&mut self.state, event) {
                self.run_effect(effect);
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::SubmitPlan(request) => {
                let queued = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::GeneratePlan { request },
                    &mut self.state.error,
                );
                if !queued {
                    // Nothing will come back for this attempt; reopen the
                    // submit affordance.
                    self.state.in_flight = false;
                }
            }
        }
    }

    fn submit(&mut self) {
        if let Some(effect) = reduce(&mut self.state, PlannerEvent::SubmitRequested) {
            self.run_effect(effect);
        }
    }

    fn show_loading_screen(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.spinner();
            ui.add_space(8.0);
            ui.label("Loading routes...");
            if let Some(message) = &self.state.error {
                ui.add_space(8.0);
                ui.colored_label(egui::Color32::from_rgb(200, 60, 60), message);
            }
        });
    }

    fn show_planner_screen(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| ui.heading("Journey Management"));
        ui.add_space(8.0);

        self.show_form(ui);

        if let Some(message) = &self.state.error {
            ui.add_space(6.0);
            ui.colored_label(egui::Color32::from_rgb(200, 60, 60), message);
        }

        if let Some(plan) = &self.state.plan {
            if plan.is_displayable() {
                ui.add_space(12.0);
                show_totals(ui, plan.totals());
                ui.add_space(8.0);
                show_plan_table(ui, plan.steps());
            }
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        let route_names: Vec<String> = self
            .state
            .routes
            .iter()
            .map(|route| route.name.clone())
            .collect();
        let mut submit_clicked = false;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.vertical(|ui| {
                    ui.label("Route");
                    egui::ComboBox::from_id_salt("route_select")
                        .width(220.0)
                        .selected_text(self.state.selected_route.as_str())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut self.state.selected_route,
                                String::new(),
                                "",
                            );
                            for name in &route_names {
                                ui.selectable_value(
                                    &mut self.state.selected_route,
                                    name.clone(),
                                    name.as_str(),
                                );
                            }
                        });
                });

                ui.vertical(|ui| {
                    ui.label("Start Location");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.state.start_location)
                            .hint_text("Depot")
                            .desired_width(220.0),
                    );
                });

                ui.vertical(|ui| {
                    ui.label("Start Time (HH:MM)");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.state.start_time)
                            .hint_text("08:00")
                            .desired_width(120.0),
                    );
                });

                ui.vertical(|ui| {
                    // Keep the button on the field baseline.
                    ui.label("");
                    ui.horizontal(|ui| {
                        submit_clicked = ui
                            .add_enabled(
                                !self.state.in_flight,
                                egui::Button::new("Generate Journey Plan"),
                            )
                            .clicked();
                        if self.state.in_flight {
                            ui.spinner();
                        }
                    });
                });
            });
        });

        if submit_clicked {
            self.submit();
        }
    }
}

fn show_totals(ui: &mut egui::Ui, totals: JourneyTotals) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong("Total Distance:");
            ui.label(format!("{:.1} km", totals.distance_km));
            ui.add_space(24.0);
            ui.strong("Total Time:");
            ui.label(format!("{} hours", totals.time_hours));
        });
    });
}

fn show_plan_table(ui: &mut egui::Ui, steps: &[JourneyStep]) {
    ui.vertical_centered(|ui| ui.heading("Journey Plan"));
    ui.add_space(4.0);
    egui::ScrollArea::vertical().max_height(380.0).show(ui, |ui| {
        egui::Grid::new("journey_plan_table")
            .striped(true)
            .min_col_width(96.0)
            .show(ui, |ui| {
                ui.strong("Start Location");
                ui.strong("Stop Location");
                ui.strong("Start Time");
                ui.strong("Stop Time");
                ui.strong("Distance (km)");
                ui.strong("Time Used (min)");
                ui.end_row();

                for step in steps {
                    ui.label(&step.start_location);
                    ui.label(&step.stop_location);
                    ui.label(&step.start_time);
                    ui.label(&step.stop_time);
                    ui.label(format!("{}", step.km));
                    ui.label(format!("{}", step.time_used));
                    ui.end_row();
                }
            });
    });
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events();

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.routes_loading {
                self.show_loading_screen(ui);
            } else {
                self.show_planner_screen(ui);
            }
        });

        // Worker events arrive between frames; poll at a relaxed cadence.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
