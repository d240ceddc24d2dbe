mod ui;

use clap::Parser;
use egui::ViewportBuilder;
use tracing_subscriber::EnvFilter;

use crate::ui::FrontDeskApp;

const APP_TITLE: &str = "TIMELOG Front Desk";

#[derive(Debug, Parser)]
#[command(name = "front_desk_gui", about = "Front-desk visitor sign-in kiosk")]
struct Args {
    /// Window title override.
    #[arg(long)]
    title: Option<String>,

    /// Launch fullscreen for kiosk use.
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let title = args.title.unwrap_or_else(|| APP_TITLE.to_string());
    tracing::info!(%title, fullscreen = args.fullscreen, "starting front desk");

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([860.0, 540.0])
            .with_fullscreen(args.fullscreen),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(FrontDeskApp::new()))),
    )
}
