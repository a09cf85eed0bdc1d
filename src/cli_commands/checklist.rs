use std::path::PathBuf;

use clap::Args;

use truststack_console::model::ItemStatus;
use truststack_console::remote::ReportFormat;

#[derive(Args)]
pub(crate) struct ChecklistArgs {
    pub(crate) project_id: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ItemArgs {
    pub(crate) project_id: String,
    pub(crate) item_id: String,
    /// One of not_started, in_progress, implemented, not_applicable, risk_accepted
    #[arg(long)]
    pub(crate) status: Option<ItemStatus>,
    #[arg(long)]
    pub(crate) owner: Option<String>,
    #[arg(long)]
    pub(crate) notes: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct UploadArgs {
    pub(crate) project_id: String,
    pub(crate) item_id: String,
    pub(crate) file: PathBuf,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ReportArgs {
    pub(crate) project_id: String,
    #[arg(long, value_enum, default_value_t = ReportFormat::Html)]
    pub(crate) format: ReportFormat,
    /// Write the report here instead of stdout
    #[arg(short = 'o', long)]
    pub(crate) output: Option<PathBuf>,
    /// Print the download link only
    #[arg(long)]
    pub(crate) url: bool,
}
