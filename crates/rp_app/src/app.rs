use eframe::egui::{
    self, Align, Key, Layout, Modifiers, RichText, ScrollArea, TopBottomPanel, ViewportCommand,
};
use log::info;

use crate::actions::{dispatch, AppAction};
use crate::egui_theme::{apply_base_theme, TRANSLATED, UNTRANSLATED};
use crate::state::{message_row_labels, AppState};

pub fn launch(state: AppState) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("rst2po")
            .with_inner_size([state.prefs.window_width, state.prefs.window_height]),
        ..Default::default()
    };
    eframe::run_native(
        "rst2po",
        options,
        Box::new(|cc| {
            apply_base_theme(&cc.egui_ctx);
            Box::new(PairingApp::new(state))
        }),
    )
}

pub struct PairingApp {
    state: AppState,
    pending: Vec<AppAction>,
    /// Scroll both lists to their selected rows on the next frame.
    follow_selection: bool,
}

impl PairingApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            pending: Vec::new(),
            follow_selection: true,
        }
    }

    fn run_action(&mut self, action: AppAction) {
        let moves_selection = matches!(
            action,
            AppAction::PairParagraph(_)
                | AppAction::PairSelected
                | AppAction::ClearMessage(_)
                | AppAction::Undo
                | AppAction::Redo
        );
        // Errors are already recorded on the state for the status bar.
        if dispatch(&mut self.state, action).is_ok() && moves_selection {
            self.follow_selection = true;
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (save, undo, redo, pair) = ctx.input_mut(|i| {
            (
                i.consume_key(Modifiers::COMMAND, Key::S),
                i.consume_key(Modifiers::COMMAND, Key::Z),
                i.consume_key(Modifiers::COMMAND, Key::Y),
                i.consume_key(Modifiers::COMMAND, Key::Enter),
            )
        });
        if save {
            self.pending.push(AppAction::Save);
        }
        if undo {
            self.pending.push(AppAction::Undo);
        }
        if redo {
            self.pending.push(AppAction::Redo);
        }
        if pair {
            self.pending.push(AppAction::PairSelected);
        }
    }

    fn draw_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Save (Ctrl-S)").clicked() {
                    ui.close_menu();
                    self.pending.push(AppAction::Save);
                }
                if ui.button("Save as...").clicked() {
                    ui.close_menu();
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("PO", &["po"])
                        .save_file()
                    {
                        self.pending.push(AppAction::SaveAsPath(path));
                    }
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.close_menu();
                    self.pending.push(AppAction::Quit);
                }
            });

            ui.menu_button("Edit", |ui| {
                let can_undo = self.state.history.can_undo();
                let can_redo = self.state.history.can_redo();
                if ui
                    .add_enabled(can_undo, egui::Button::new("Undo (Ctrl-Z)"))
                    .clicked()
                {
                    ui.close_menu();
                    self.pending.push(AppAction::Undo);
                }
                if ui
                    .add_enabled(can_redo, egui::Button::new("Redo (Ctrl-Y)"))
                    .clicked()
                {
                    ui.close_menu();
                    self.pending.push(AppAction::Redo);
                }
                if ui.button("Pair selected (Ctrl-Enter)").clicked() {
                    ui.close_menu();
                    self.pending.push(AppAction::PairSelected);
                }
            });
        });
    }

    fn draw_messages(&mut self, ui: &mut egui::Ui) {
        let session = &self.state.session;
        ui.heading(format!("Messages ({})", session.catalog().messages.len()));
        ui.separator();

        ScrollArea::vertical()
            .id_source("messages")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for index in 0..session.catalog().messages.len() {
                    let Some(labels) = message_row_labels(session, index) else {
                        continue;
                    };
                    let selected = session.selected_message() == Some(index);
                    let color = if session.catalog().messages[index].is_translated() {
                        TRANSLATED
                    } else {
                        UNTRANSLATED
                    };
                    ui.horizontal(|ui| {
                        if ui
                            .button(index.to_string())
                            .on_hover_text("Clear msgstr")
                            .clicked()
                        {
                            self.pending.push(AppAction::ClearMessage(index));
                        }
                        let text = format!("{}\n{}", labels[0], labels[1]);
                        let row = ui.vertical(|ui| {
                            let head = ui.selectable_label(selected, text);
                            let body = ui.selectable_label(
                                selected,
                                RichText::new(&labels[2]).color(color),
                            );
                            head.clicked() || body.clicked()
                        });
                        if row.inner {
                            self.pending.push(AppAction::SelectMessage(index));
                        }
                        if selected && self.follow_selection {
                            row.response.scroll_to_me(Some(Align::Center));
                        }
                    });
                    ui.separator();
                }
            });
    }

    fn draw_paragraphs(&mut self, ui: &mut egui::Ui) {
        let session = &self.state.session;
        ui.heading(format!("Paragraphs ({})", session.paragraphs().len()));
        ui.separator();

        ScrollArea::vertical()
            .id_source("paragraphs")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, paragraph) in session.paragraphs().iter().enumerate() {
                    let selected = session.selected_paragraph() == Some(index);
                    ui.horizontal(|ui| {
                        if ui
                            .button(index.to_string())
                            .on_hover_text("Pair with the selected message")
                            .clicked()
                        {
                            self.pending.push(AppAction::PairParagraph(index));
                        }
                        let label = ui.selectable_label(selected, paragraph.text());
                        if label.clicked() {
                            self.pending.push(AppAction::SelectParagraph(index));
                        }
                        if selected && self.follow_selection {
                            label.scroll_to_me(Some(Align::Center));
                        }
                    });
                    ui.separator();
                }
            });
    }

    fn draw_status(&mut self, ui: &mut egui::Ui) {
        let counts = self.state.counts();
        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
            ui.add(
                egui::ProgressBar::new(self.state.translation_ratio())
                    .desired_width(180.0)
                    .text(format!("{}/{}", counts.translated, counts.messages)),
            );
            ui.label(format!("{} paragraphs", counts.paragraphs));
            if self.state.dirty {
                ui.label("modified");
            }
            if let Some(err) = &self.state.error {
                ui.colored_label(ui.visuals().error_fg_color, err.as_str());
            } else {
                ui.label(RichText::new(&self.state.file_status).small());
            }
        });
    }
}

impl eframe::App for PairingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        TopBottomPanel::top("menu").show(ctx, |ui| {
            self.draw_menu(ui);
        });

        TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.draw_status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns| {
                self.draw_messages(&mut columns[0]);
                self.draw_paragraphs(&mut columns[1]);
            });
        });
        self.follow_selection = false;

        for action in std::mem::take(&mut self.pending) {
            self.run_action(action);
        }

        if self.state.quit_requested {
            info!("quit");
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}
