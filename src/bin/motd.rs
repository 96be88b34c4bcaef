//! Message-of-the-day service: serves one plain-text data file.

use std::sync::Arc;
use webapp_exercises::apps::motd::{self, MotdState};
use webapp_exercises::{config, logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;
    logger::init(&cfg)?;

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        builder.worker_threads(workers);
    }
    let runtime = builder.build()?;

    runtime.block_on(async {
        let state = Arc::new(MotdState::load(&cfg.motd.file).await?);
        let service = move |req| {
            let state = Arc::clone(&state);
            async move { motd::handle(req, &state).await }
        };
        server::run("motd", cfg, service).await
    })
}
