use clap::Subcommand;

pub(crate) mod checklist;
pub(crate) mod packs;
pub(crate) mod projects;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List projects
    Projects(ListArgs),

    /// Create a project
    Create(projects::CreateArgs),

    /// Show a project: metadata, selected packs and progress
    Show(projects::ShowArgs),

    /// Edit a project's name or description
    Edit(projects::EditArgs),

    /// Delete a project (asks for confirmation unless --yes)
    Delete(projects::DeleteArgs),

    /// List the pack catalog
    Packs(ListArgs),

    /// Show metadata for one pack version
    Pack(packs::PackArgs),

    /// Latest packs grouped by domain
    Learn(ListArgs),

    /// Add a pack to a project at its latest version, or remove it if selected
    Toggle(packs::ToggleArgs),

    /// Change the version of a selected pack
    #[command(name = "set-version")]
    SetVersion(packs::SetVersionArgs),

    /// List a project's checklist
    Checklist(checklist::ChecklistArgs),

    /// Show or update one checklist item
    Item(checklist::ItemArgs),

    /// Upload an evidence file for a checklist item
    Upload(checklist::UploadArgs),

    /// Print a report link or download the report
    Report(checklist::ReportArgs),

    /// List industries from the taxonomy
    Industries(ListArgs),

    /// Interactive console for one project
    Open(OpenArgs),
}

#[derive(clap::Args)]
pub(crate) struct ListArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(clap::Args)]
pub(crate) struct OpenArgs {
    pub(crate) project_id: String,
    /// Write logs to this file (logging is off otherwise)
    #[arg(long, value_name = "PATH", env = "TRUSTSTACK_LOG_FILE")]
    pub(crate) log_file: Option<std::path::PathBuf>,
}
