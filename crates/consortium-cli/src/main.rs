//! Consortium bootstrap CLI: anchors a DID per stakeholder and writes the
//! per-domain configuration files.
use clap::Parser;
use log::info;
use std::path::PathBuf;

use consortium_core::config::load_config;
use consortium_core::writer::write_configs;
use consortium_sidetree::client::HttpSidetreeDidClient;
use consortium_sidetree::create::create_config;

/// Command-line and environment configuration. Resolved once here; the
/// pipeline receives explicit values only.
#[derive(Parser, Debug)]
#[command(
    name = "create-config",
    about = "Creates the consortium and stakeholder configuration files for a Sidetree-anchored DID network.",
    version
)]
struct Cli {
    /// URL of the Sidetree node used to anchor stakeholder DIDs.
    #[arg(long, env = "CONSORTIUM_CLI_SIDETREE_URL")]
    sidetree_url: String,
    /// Path to the consortium configuration document.
    #[arg(long, env = "CONSORTIUM_CLI_CONFIG_FILE")]
    config_file: PathBuf,
    /// Directory the per-domain files are written into.
    #[arg(long, short = 'o', env = "CONSORTIUM_CLI_OUTPUT_DIRECTORY", default_value = ".")]
    output_directory: PathBuf,
    /// Use the system certificate pool for TLS server verification.
    #[arg(long, env = "CONSORTIUM_CLI_TLS_SYSTEMCERTPOOL")]
    tls_systemcertpool: bool,
    /// Additional root CA certificates (PEM) trusted for TLS.
    #[arg(long, env = "CONSORTIUM_CLI_TLS_CACERTS")]
    tls_cacerts: Vec<PathBuf>,
}

/// Builds the HTTP transport with the requested TLS trust configuration.
fn http_client(cli: &Cli) -> Result<reqwest::Client, Box<dyn std::error::Error>> {
    let mut builder =
        reqwest::Client::builder().tls_built_in_root_certs(cli.tls_systemcertpool);
    for path in &cli.tls_cacerts {
        let pem = std::fs::read(path)?;
        builder = builder.add_root_certificate(reqwest::Certificate::from_pem(&pem)?);
    }
    Ok(builder.build()?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = load_config(&cli.config_file)?;
    let client = HttpSidetreeDidClient::with_client(&cli.sidetree_url, http_client(&cli)?);

    let outputs = create_config(&config, &client).await?;
    write_configs(&cli.output_directory, &outputs)?;

    info!(
        "wrote {} config files to {}",
        outputs.len(),
        cli.output_directory.display()
    );
    Ok(())
}
