use std::time::Instant;

use eframe::egui;
use eframe::egui::ViewportBuilder;
use tokio::runtime::Runtime;

use super::screens::{InventoryScreen, SplashScreen, UiAction};
use super::theme::APP_TITLE;
use crate::controller::InventoryController;

/// egui shell around the controller. Owns the runtime the controller's
/// requests are driven on.
pub struct InventoryApp {
    controller: InventoryController,
    runtime: Runtime,
    /// Requests queued last frame, run once the spinner frame is on screen.
    pending: Vec<UiAction>,
    pending_drawn: bool,
}

impl InventoryApp {
    pub fn new(controller: InventoryController, runtime: Runtime) -> Self {
        Self {
            controller,
            runtime,
            pending: Vec::new(),
            pending_drawn: false,
        }
    }

    fn run_pending(&mut self) {
        for action in std::mem::take(&mut self.pending) {
            InventoryScreen::apply(&mut self.controller, &self.runtime, action);
        }
        self.pending_drawn = false;
    }
}

impl eframe::App for InventoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.runtime.block_on(self.controller.tick(now));

        if self.controller.splash().is_showing() {
            SplashScreen::show(ctx, self.controller.splash(), now);
            ctx.request_repaint();
            return;
        }

        if self.pending_drawn {
            self.run_pending();
        }

        let busy = !self.pending.is_empty();
        let actions = InventoryScreen::show(ctx, &mut self.controller, busy);
        if busy {
            self.pending_drawn = true;
        }

        for action in actions {
            if action.sends_request() {
                self.pending.push(action);
            } else {
                InventoryScreen::apply(&mut self.controller, &self.runtime, action);
            }
        }

        if !self.pending.is_empty() {
            ctx.request_repaint();
        }
    }
}

pub fn launch_gui(app: InventoryApp) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
