/**
 * Cafe Catalog desktop client - main entry point
 *
 * Loads configuration, starts the stored-session check and hands the
 * window over to eframe.
 */
use eframe::egui;
use tracing_subscriber::EnvFilter;

use cafe_catalog::client::theme::styles;
use cafe_catalog::client::{views, AppState, Config};

struct CatalogApp {
    state: AppState,
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_alert(ctx, &mut self.state);

        ctx.request_repaint();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut state = AppState::new(Config::new())?;
    state.start();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([480.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Cafe Catalog",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(CatalogApp { state }))
        }),
    )?;
    Ok(())
}
