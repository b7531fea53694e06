use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use url::Url;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::reducer::PlannerEvent;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the journey-planning service.
    #[arg(long, default_value = "http://127.0.0.1:8443")]
    server_url: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    Url::parse(&args.server_url)
        .with_context(|| format!("invalid --server-url '{}'", args.server_url))?;
    let server_url = args.server_url.trim_end_matches('/').to_string();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (event_tx, event_rx) = bounded::<PlannerEvent>(64);
    backend_bridge::runtime::launch(server_url, cmd_rx, event_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Journey Planner")
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Journey Planner",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::app::PlannerApp::new(cmd_tx, event_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run desktop shell: {err}"))
}
