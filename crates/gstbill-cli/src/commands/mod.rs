//! CLI subcommands.

pub mod batch;
pub mod calc;
pub mod config;
pub mod process;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::debug;

use gstbill_core::models::config::PdfConfig;
use gstbill_core::{open_source, GstbillConfig, TemplateTag};

/// Template selection on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TemplateArg {
    /// Labelled-field documents
    Generic,
    /// IDFC FIRST Bank approval letters
    Idfc,
}

impl From<TemplateArg> for TemplateTag {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Generic => TemplateTag::Generic,
            TemplateArg::Idfc => TemplateTag::IdfcFirstBank,
        }
    }
}

/// Load the configuration from `--config`, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<GstbillConfig> {
    if let Some(path) = config_path {
        return Ok(GstbillConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(GstbillConfig::from_file(&default_path)?)
    } else {
        Ok(GstbillConfig::default())
    }
}

/// Decode a document's pages on the blocking pool.
pub async fn decode_pages(path: PathBuf, pdf: PdfConfig) -> anyhow::Result<Vec<String>> {
    let pages = tokio::task::spawn_blocking(move || -> gstbill_core::Result<Vec<String>> {
        let source = open_source(&path, &pdf)?;
        debug!("Decoding {} pages from {}", source.page_count(), path.display());
        Ok(source.pages()?)
    })
    .await??;

    Ok(pages)
}
