mod wiring;

use crate::{
    cli, context, rest,
    satis::{self, RepoStore},
};
use anyhow::Result;
use std::path::Path;
use tokio_util::sync::CancellationToken;

const JOB_QUEUE_CAPACITY: usize = 64;

pub struct App {
    pub ctx: context::Context,
}

impl App {
    pub fn from_cli() -> Result<(Self, cli::Cli)> {
        let cli = crate::cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::init(ctx.config.log_file.as_deref().map(Path::new));

        Ok((Self { ctx }, cli))
    }
}

pub async fn run_daemon(app: App) -> Result<()> {
    let cfg = &app.ctx.config;
    log::info!("🚀 Starting satis-api");
    log::info!("🌐 REST API: http://{}", cfg.api_listen);
    log::info!("🔗 Public host: {}", cfg.host);
    log::info!("📂 Db: {}", cfg.db_path);
    log::info!("📦 Web output: {}", cfg.web_path);
    if cfg.username.is_empty() || cfg.api_token.is_empty() {
        log::warn!("🔓 update-package webhook is not protected by credentials");
    }
    if let Some(path) = cfg.log_file.as_deref() {
        log::info!("📝 Log file: {}", path);
    }

    let shutdown = CancellationToken::new();

    // Job processor
    let processor = wiring::build_processor(&app.ctx);
    let (store, jobs) = satis::SatisClient::channel(JOB_QUEUE_CAPACITY);
    let processor_shutdown = shutdown.clone();
    let mut processor_handle =
        tokio::task::spawn_blocking(move || processor.run(jobs, processor_shutdown));

    if !cfg.skip_initial_generate {
        match store.generate_static_web().await {
            Ok(()) => log::info!("✅ Initial static web generated"),
            Err(e) => log::error!("Initial static web generation failed: {}", e),
        }
    }

    // REST
    let api_addr = cfg.api_listen;
    let state = rest::AppState::new(store, wiring::resource_settings(&app.ctx));
    let rest_shutdown = shutdown.clone();

    let mut rest_handle =
        tokio::spawn(async move { rest::serve(api_addr, state, rest_shutdown).await });

    let mut rest_result = None;
    let mut processor_result = None;
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            log::info!("🧨 Ctrl-C received, shutting down");
        }
        res = &mut rest_handle => rest_result = Some(res),
        res = &mut processor_handle => processor_result = Some(res),
    }

    // The processor exits once the REST state (the last job sender) is dropped.
    shutdown.cancel();
    let rest_result = match rest_result {
        Some(res) => res,
        None => rest_handle.await,
    };
    let processor_result = match processor_result {
        Some(res) => res,
        None => processor_handle.await,
    };

    let mut fatal_error: Option<anyhow::Error> = None;

    match rest_result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            log::error!("REST server error: {:#}", e);
            fatal_error = Some(e);
        }
        Err(e) => {
            log::error!("REST task error: {}", e);
            fatal_error = Some(e.into());
        }
    }
    if let Err(e) = processor_result {
        log::error!("Job processor error: {}", e);
        fatal_error.get_or_insert(e.into());
    }

    if let Some(e) = fatal_error {
        return Err(e);
    }

    log::info!("✅ Shutdown complete");
    Ok(())
}

pub async fn run() -> Result<()> {
    let (app, cli) = App::from_cli()?;

    if let Some(cmd) = &cli.cmd {
        // one-shot command mode
        cmd.run(&app.ctx).await?;
        return Ok(());
    }

    run_daemon(app).await
}
