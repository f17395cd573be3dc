/**
 * Pantheon Game Client - Main Entry Point
 *
 * Loads the client config, fetches the app configuration from the server and
 * opens the window. Without an app configuration the client cannot do
 * anything useful, so a failed fetch opens an error window instead.
 */
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use pantheon::egui_app::theme::styles;
use pantheon::egui_app::{
    fetch_app_config, logging, views, AppContext, AppState, ClientConfig, FileStorage, ScreenRegistry,
};

/// How often the window wakes up to collect background results
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::load()?;
    logging::init(config.log_filter());
    tracing::info!("Starting client against {}", config.server_url());

    let runtime = tokio::runtime::Runtime::new()?;
    let http = reqwest::Client::new();

    let app: Box<dyn eframe::App> = match runtime.block_on(fetch_app_config(&http, &config)) {
        Ok(app_config) => {
            let storage = Arc::new(FileStorage::new(config.storage_path()));
            let ctx = AppContext::new(config, app_config, http, storage, runtime.handle().clone());
            let mut state = AppState::new(ctx, ScreenRegistry::standard());
            state.begin();
            Box::new(PantheonApp { state })
        }
        Err(e) => {
            tracing::error!("Failed to load app configuration: {}", e);
            Box::new(FatalApp {
                message: format!("Failed to load app configuration: {}", e),
            })
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pantheon",
        options,
        Box::new(move |cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(app)
        }),
    )?;

    drop(runtime);
    Ok(())
}

struct PantheonApp {
    state: AppState,
}

impl eframe::App for PantheonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint_after(POLL_INTERVAL);
    }
}

struct FatalApp {
    message: String,
}

impl eframe::App for FatalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        views::render_fatal(ctx, &self.message);
    }
}
