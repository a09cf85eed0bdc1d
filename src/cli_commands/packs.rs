use clap::Args;

#[derive(Args)]
pub(crate) struct PackArgs {
    /// Pack as domain/pack_id
    pub(crate) pack: String,
    /// Version to show (defaults to the latest published)
    #[arg(long)]
    pub(crate) version: Option<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ToggleArgs {
    pub(crate) project_id: String,
    /// Pack as domain/pack_id
    pub(crate) pack: String,
}

#[derive(Args)]
pub(crate) struct SetVersionArgs {
    pub(crate) project_id: String,
    /// Pack as domain/pack_id
    pub(crate) pack: String,
    pub(crate) version: String,
}
