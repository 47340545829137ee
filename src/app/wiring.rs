use crate::{context, rest, satis};

pub fn build_processor(ctx: &context::Context) -> satis::JobProcessor {
    let cfg = &ctx.config;
    let db = satis::RepoDb::new(&cfg.db_path);
    let generator = satis::Generator::new(&cfg.satis_bin, &cfg.config_path, &cfg.web_path)
        .with_name(&cfg.name)
        .with_homepage(&cfg.homepage);
    log::info!("📄 Satis config: {}", generator.config_path().display());
    satis::JobProcessor::new(db, generator)
}

pub fn resource_settings(ctx: &context::Context) -> rest::ResourceSettings {
    rest::ResourceSettings {
        host: ctx.config.host.clone(),
        username: ctx.config.username.clone(),
        api_token: ctx.config.api_token.clone(),
    }
}
