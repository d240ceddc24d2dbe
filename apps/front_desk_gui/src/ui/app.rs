use std::time::Duration;

use egui::{RichText, TextEdit};
use log_core::{ClockReading, ClockSampler, LogAction, LogState, SystemClock};
use shared::domain::VisitorField;
use tracing::debug;

const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Placeholder shown in the Time Out column until a visitor logs out.
const NO_TIME_OUT: &str = "\u{2014}";

pub struct FrontDeskApp {
    state: LogState,
    clock: SystemClock,
    sampler: ClockSampler,
    /// Disables the submit button while a submission is being applied.
    submitting: bool,
}

impl FrontDeskApp {
    pub fn new() -> Self {
        Self {
            state: LogState::new(),
            clock: SystemClock,
            sampler: ClockSampler::start(),
            submitting: false,
        }
    }

    fn dispatch(&mut self, action: LogAction) {
        self.state.apply(action, &self.clock);
    }

    fn show_clock_panel(&self, ui: &mut egui::Ui) {
        let reading = self.sampler.latest();

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                for (index, day) in WEEKDAYS.iter().enumerate() {
                    if index == reading.weekday {
                        ui.label(
                            RichText::new(*day)
                                .strong()
                                .color(ui.visuals().hyperlink_color),
                        );
                    } else {
                        ui.weak(*day);
                    }
                }
            });
            ui.add_space(8.0);
            ui.label(RichText::new(formatted_time(&reading)).size(42.0).strong());
            ui.label(RichText::new(&reading.meridiem).size(18.0));
            ui.add_space(10.0);
            ui.label(RichText::new(&reading.date).size(20.0).strong());
        });
    }

    fn show_visitor_table(&mut self, ui: &mut egui::Ui) {
        let mut pending: Option<LogAction> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("visitor_table")
                .striped(true)
                .num_columns(9)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    for header in [
                        "#", "Date", "Full Name", "Company", "Phone", "Purpose", "Time In",
                        "Time Out", "Action",
                    ] {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for (index, record) in self.state.visitors.iter().enumerate() {
                        ui.label((index + 1).to_string());
                        ui.label(&record.date);
                        ui.label(record.full_name());
                        ui.label(&record.company);
                        ui.label(&record.phone);
                        ui.label(&record.purpose);
                        ui.label(&record.log_in_time);
                        if record.is_logged_out() {
                            ui.label(&record.log_out_time);
                        } else {
                            ui.label(NO_TIME_OUT);
                        }
                        if record.is_logged_out() {
                            // Departure is set-once; no action remains.
                            ui.label("");
                        } else if ui.button("Log Out").clicked() {
                            pending = Some(LogAction::LogOut { index });
                        }
                        ui.end_row();
                    }
                });

            if self.state.visitors.is_empty() {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.weak("No visitors yet");
                });
            }
        });

        if let Some(action) = pending {
            self.dispatch(action);
        }
    }

    fn show_sign_in_modal(&mut self, ctx: &egui::Context) {
        let mut open = true;
        let mut edits: Vec<LogAction> = Vec::new();
        let mut submit_clicked = false;

        egui::Window::new("Log In")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .default_width(360.0)
            .open(&mut open)
            .show(ctx, |ui| {
                for field in VisitorField::ALL {
                    let mut value = self.state.draft.field(field).to_string();
                    let response = ui.add(
                        TextEdit::singleline(&mut value)
                            .hint_text(field.label())
                            .desired_width(f32::INFINITY),
                    );
                    if response.changed() {
                        edits.push(LogAction::UpdateField { field, value });
                    }
                    if let Some(message) = self.state.errors.get(field) {
                        ui.colored_label(ui.visuals().error_fg_color, message);
                    }
                    ui.add_space(6.0);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.submitting {
                        "Submitting..."
                    } else {
                        "Submit"
                    };
                    if ui
                        .add_enabled(!self.submitting, egui::Button::new(label))
                        .clicked()
                    {
                        submit_clicked = true;
                    }
                });
            });

        for edit in edits {
            self.dispatch(edit);
        }

        if submit_clicked {
            self.submitting = true;
            if let Err(err) = self.state.submit(&self.clock) {
                debug!(missing = err.field_errors().len(), "submission rejected");
            }
            self.submitting = false;
        }

        if !open {
            self.dispatch(LogAction::HideModal);
        }
    }
}

impl Default for FrontDeskApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for FrontDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keep the clock display live without a per-frame busy loop.
        ctx.request_repaint_after(Duration::from_millis(250));

        egui::SidePanel::left("clock_panel")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                self.show_clock_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Tracking and Integrating Management of Visitor Logs");
            ui.add_space(8.0);
            if ui.button("Log In").clicked() {
                self.dispatch(LogAction::ShowModal);
            }
            ui.add_space(12.0);
            ui.separator();
            self.show_visitor_table(ui);
        });

        if self.state.modal_visible {
            self.show_sign_in_modal(ctx);
        }
    }
}

/// "HH:MM:SS" as the large digits of the clock widget.
fn formatted_time(reading: &ClockReading) -> String {
    format!(
        "{}:{}:{}",
        reading.hours, reading.minutes, reading.seconds
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn clock_digits_join_with_colons() {
        let now = chrono::Local
            .with_ymd_and_hms(2026, 8, 31, 13, 4, 5)
            .single()
            .expect("unambiguous local time");
        let reading = ClockReading::from_datetime(now);
        assert_eq!(formatted_time(&reading), "01:04:05");
    }
}
