//! PizzaCount CLI — command-line client for the pizza counting server.
//!
//! Set PIZZACOUNT_API_URL (or API_URL). See `ClientConfig::from_env` for the rest.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use pizzacount_api_client::ApiClient;
use pizzacount_cli::{init_tracing, result_page, write_output, TerminalResultArea, TerminalText};
use pizzacount_core::{ClientConfig, FileSelection, Locale, MediaKind, ReportFormat, SelectedFile};
use pizzacount_ui::{DisplayTargets, SubmitStatus, UploadController};

#[derive(Parser)]
#[command(name = "pizzacount", about = "Count pizzas in an image or video")]
struct Cli {
    /// UI language: en or ru (overrides PIZZACOUNT_LOCALE)
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image or video and show the processed result
    Upload {
        /// Path to the file to upload
        file: PathBuf,
        /// Write an HTML page with the rendered result
        #[arg(long, value_name = "PATH")]
        html: Option<PathBuf>,
        /// Download the processed image or video
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
        /// Print the rendered result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Download the processing history report
    Report {
        /// Report format
        #[arg(value_enum)]
        format: ReportArg,
        /// Output path (defaults to the server's file name)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportArg {
    Pdf,
    Excel,
}

impl From<ReportArg> for ReportFormat {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Pdf => ReportFormat::Pdf,
            ReportArg::Excel => ReportFormat::Excel,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("Invalid client configuration")?;
    if let Some(locale) = cli.locale.as_deref() {
        let locale = Locale::parse(locale)
            .ok_or_else(|| anyhow::anyhow!("Unknown locale '{}'. Use en or ru", locale))?;
        config = config.with_locale(locale);
    }

    let client = ApiClient::new(config).context("Failed to create API client")?;

    match cli.command {
        Commands::Upload {
            file,
            html,
            save,
            json,
        } => upload(client, file, html, save, json).await,
        Commands::Report { format, out } => {
            let format = ReportFormat::from(format);
            let bytes = client.download_report(format).await?;
            let out = out.unwrap_or_else(|| PathBuf::from(format.file_name()));
            write_output(&out, &bytes)?;
            println!("Saved report to {}", out.display());
            Ok(())
        }
    }
}

async fn upload(
    client: ApiClient,
    file: PathBuf,
    html: Option<PathBuf>,
    save: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let selected = SelectedFile::from_path(&file)?;
    if selected.kind() == MediaKind::Unknown {
        tracing::warn!(
            file_name = %selected.file_name,
            "Extension is not a known image or video type; the server may reject it"
        );
    }
    let selection = FileSelection::single(selected);

    let base_url = client.base_url().to_string();
    let label = Arc::new(TerminalText::new("File"));
    let result = Arc::new(TerminalResultArea::new(base_url.clone()));
    let stats = Arc::new(TerminalText::new("Stats"));

    let controller = UploadController::from_client(
        client.clone(),
        DisplayTargets {
            label: label.clone(),
            result: result.clone(),
            stats: stats.clone(),
        },
    );

    controller.update_label(&selection);
    let status = controller.submit_and_render(&selection).await;
    let view = result.current();

    if json {
        let out = serde_json::json!({ "view": view, "stats": stats.text() });
        println!("{}", serde_json::to_string_pretty(&out).context("Serialize result")?);
    }

    if let Some(path) = html {
        write_output(&path, result_page(&view, &stats.text(), &base_url).as_bytes())?;
        println!("Saved page to {}", path.display());
    }

    match status {
        SubmitStatus::Failed(err) => Err(anyhow::Error::new(err).context("Upload failed")),
        SubmitStatus::Rendered(_) => {
            if let Some(path) = save {
                match view.media_src() {
                    Some(src) => {
                        let bytes = client.fetch_asset(src).await?;
                        write_output(&path, &bytes)?;
                        println!("Saved result to {}", path.display());
                    }
                    None => tracing::warn!("Server returned no media to save"),
                }
            }
            Ok(())
        }
        SubmitStatus::NoFile | SubmitStatus::Superseded => Ok(()),
    }
}
