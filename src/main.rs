use anyhow::Context;
use chrono::Utc;
use slack_daylog::config::load_settings;
use slack_daylog::export::Exporter;
use slack_daylog::logging::Timer;
use slack_daylog::slack::SlackClient;
use slack_daylog::storage::LogArchive;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize rustls crypto provider
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Initialize tracing; stdout is reserved for the saved path
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("slack_daylog=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let timer = Timer::new("daylog_run");

    // Configuration errors abort before any Slack call
    let settings = load_settings().context("Failed to load configuration")?;
    let window = settings
        .export
        .window(Utc::now())
        .context("Failed to resolve export date")?;
    tracing::info!(
        date = %window.date_label(),
        channels = settings.slack.channel_ids.len(),
        output_dir = %settings.export.output_dir.display(),
        "✅ Configuration loaded"
    );

    let slack_client =
        SlackClient::new(&settings.slack).context("Failed to create Slack client")?;

    let mut exporter = Exporter::new(&slack_client);
    let document = exporter
        .run(&settings.slack.channel_ids, &window)
        .await;

    let archive = LogArchive::new(settings.export.output_dir.clone());
    let path = archive
        .write(document.date(), &document.render())
        .await
        .with_context(|| format!("Failed to write log to {}", archive.base_path().display()))?;

    tracing::info!(
        lines = document.lines().len(),
        users_resolved = exporter.names().len(),
        duration_ms = timer.elapsed_ms(),
        "🚀 Export complete"
    );
    println!("Saved: {}", path.display());

    Ok(())
}
