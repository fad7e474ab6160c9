use crossbeam_channel::{bounded, Receiver, Sender};
use eframe::egui;
use thiserror::Error;
use turtle_core::{Command, COMMAND_BUTTONS};

use crate::controller::orchestration::{
    apply_queued_commands, dispatch_command, COMMAND_QUEUE_CAPACITY,
};
use crate::ui::canvas::TurtleCanvas;

const BUTTON_ROW_SPACING: f32 = 6.0;

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub background: egui::Color32,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            title: "Turtle Graphics".to_string(),
            window_width: 800.0,
            window_height: 600.0,
            background: egui::Color32::WHITE,
        }
    }
}

impl StartupConfig {
    pub fn validate(&self) -> Result<(), LaunchError> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(self.window_width) || !usable(self.window_height) {
            return Err(LaunchError::InvalidWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("invalid window size {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
    #[error("failed to create the graphics window: {0}")]
    Window(String),
}

pub struct TurtleGuiApp {
    cmd_tx: Sender<Command>,
    cmd_rx: Receiver<Command>,
    canvas: TurtleCanvas,
    status: String,
}

impl TurtleGuiApp {
    pub fn new(config: &StartupConfig) -> Self {
        let (cmd_tx, cmd_rx) = bounded::<Command>(COMMAND_QUEUE_CAPACITY);
        Self {
            cmd_tx,
            cmd_rx,
            canvas: TurtleCanvas::new(config.background),
            status: "Ready".to_string(),
        }
    }

    pub fn canvas(&self) -> &TurtleCanvas {
        &self.canvas
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    fn press(&mut self, command: Command) {
        dispatch_command(&self.cmd_tx, command);
    }

    fn process_queued_commands(&mut self) {
        let events = apply_queued_commands(&self.cmd_rx, self.canvas.turtle_mut());
        if let Some(last) = events.last() {
            self.status = last.status_line();
        }
    }

    fn show_button_row(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("command_buttons").show(ctx, |ui| {
            ui.add_space(BUTTON_ROW_SPACING);
            ui.horizontal(|ui| {
                for button in COMMAND_BUTTONS {
                    if ui.button(button.label).clicked() {
                        self.press(button.command);
                    }
                }
                ui.separator();
                ui.label(self.status());
            });
            ui.add_space(BUTTON_ROW_SPACING);
        });
    }

    fn show_canvas(&self, ctx: &egui::Context) {
        let canvas = self.canvas();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(canvas.background()))
            .show(ctx, |ui| {
                canvas.show(ui);
            });
    }
}

impl eframe::App for TurtleGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Bottom panel first so this frame's clicks land before the canvas paints.
        self.show_button_row(ctx);
        self.process_queued_commands();
        self.show_canvas(ctx);
    }
}

pub fn launch(config: StartupConfig) -> Result<(), LaunchError> {
    config.validate()?;

    tracing::info!(
        title = %config.title,
        width = config.window_width,
        height = config.window_height,
        "opening turtle graphics window"
    );

    let app_name = config.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| Ok(Box::new(TurtleGuiApp::new(&config)))),
    )
    .map_err(|err| LaunchError::Window(err.to_string()))
}
