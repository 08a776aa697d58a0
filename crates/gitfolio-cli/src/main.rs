use clap::Parser;
use gitfolio_api::GitHubClient;
use gitfolio_core::{
    Config, FilePreferenceStore, GitHubSource, Locale, MemoryPreferenceStore, Portfolio,
    PreferenceStore,
};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gitfolio")]
#[command(version, about = "GitHub portfolio in your terminal", long_about = None)]
struct Cli {
    /// GitHub login whose repositories are shown
    #[arg(short, long)]
    owner: Option<String>,

    /// Display language: pt-BR or en-US
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Photo to show instead of the GitHub avatar (file path or URL)
    #[arg(long)]
    avatar: Option<String>,

    /// Config file to read instead of the default one
    #[arg(short, long, env = "GITFOLIO_CONFIG")]
    config: Option<PathBuf>,
}

impl Cli {
    /// CLI flags win over whatever the file said
    fn apply_to(&self, config: &mut Config) {
        if let Some(owner) = &self.owner {
            config.github.owner = owner.clone();
        }
        if let Some(locale) = self.locale {
            config.ui.locale = locale;
        }
        if let Some(avatar) = &self.avatar {
            config.ui.local_avatar = Some(avatar.clone());
        }
    }
}

/// Logs go to a file; the terminal belongs to the UI
fn log_writer() -> BoxMakeWriter {
    let file = dirs::cache_dir()
        .map(|dir| dir.join("gitfolio"))
        .and_then(|dir| {
            std::fs::create_dir_all(&dir).ok()?;
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join("gitfolio.log"))
                .ok()
        });

    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(std::io::sink),
    }
}

fn preference_store() -> Box<dyn PreferenceStore> {
    match FilePreferenceStore::open_default() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!("Preferences unavailable, theme will not persist: {}", e);
            Box::new(MemoryPreferenceStore::new())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gitfolio=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_writer())
                .with_ansi(false),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_to(&mut config);

    tracing::info!(
        "Starting gitfolio for {} ({})",
        config.github.owner,
        config.ui.locale
    );

    let client = GitHubClient::with_base_url(config.github.api_url.clone())?;
    let source = Arc::new(GitHubSource::new(client, config.github.owner.clone()));

    let mut portfolio = Portfolio::new(config.ui.locale, preference_store());
    portfolio.set_local_photo_hint(config.ui.local_avatar.clone());

    gitfolio_tui::run_tui(portfolio, config.github.owner, source).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "gitfolio",
            "--owner",
            "rust-lang",
            "--locale",
            "en-US",
            "--avatar",
            "me.png",
        ]);

        let mut config = Config::default();
        cli.apply_to(&mut config);

        assert_eq!(config.github.owner, "rust-lang");
        assert_eq!(config.ui.locale, Locale::EnUs);
        assert_eq!(config.ui.local_avatar.as_deref(), Some("me.png"));
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::parse_from(["gitfolio"]);

        let mut config = Config::default();
        config.github.owner = "from-file".to_string();
        cli.apply_to(&mut config);

        assert_eq!(config.github.owner, "from-file");
        assert_eq!(config.ui.locale, Locale::PtBr);
    }

    #[test]
    fn test_bad_locale_rejected() {
        assert!(Cli::try_parse_from(["gitfolio", "--locale", "fr-FR"]).is_err());
    }
}
