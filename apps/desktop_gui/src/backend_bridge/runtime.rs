//! Worker thread bridging the UI command queue to the planning service.

use client_core::{CatalogError, PlannerClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::reducer::PlannerEvent;

/// Spawns the backend worker: a dedicated thread owning a tokio runtime and
/// the HTTP client. Commands are processed strictly in order, so the worker
/// never has more than one request outstanding.
pub fn launch(
    server_url: String,
    cmd_rx: Receiver<BackendCommand>,
    event_tx: Sender<PlannerEvent>,
) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                // Report through the catalog-load path so the loading
                // indicator terminates instead of spinning forever.
                let _ = event_tx.try_send(PlannerEvent::CatalogLoaded(Err(
                    CatalogError::Runtime(err),
                )));
                return;
            }
        };

        runtime.block_on(async move {
            let client = PlannerClient::new(server_url);
            while let Ok(cmd) = cmd_rx.recv() {
                let event = match cmd {
                    BackendCommand::LoadRoutes => {
                        let result = client.fetch_routes().await;
                        if let Err(err) = &result {
                            tracing::warn!(error = ?err, "route catalog load failed");
                        }
                        PlannerEvent::CatalogLoaded(result)
                    }
                    BackendCommand::GeneratePlan { request } => {
                        match client.request_plan(&request).await {
                            Ok(steps) => PlannerEvent::SubmitSucceeded(steps),
                            Err(err) => {
                                tracing::warn!(error = ?err, "journey plan request failed");
                                PlannerEvent::SubmitFailed(err)
                            }
                        }
                    }
                };
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });
    });
}
