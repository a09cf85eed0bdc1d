use clap::Args;

#[derive(Args)]
pub(crate) struct CreateArgs {
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) description: Option<String>,
    #[arg(long)]
    pub(crate) industry: String,
    #[arg(long)]
    pub(crate) segment: String,
    #[arg(long = "use-case")]
    pub(crate) use_case: String,
    /// Selected pack as domain/pack_id@version (repeatable)
    #[arg(long = "pack", value_name = "PACK")]
    pub(crate) packs: Vec<String>,
    /// Scoping answer as key=value; values are parsed as JSON when possible (repeatable)
    #[arg(long = "answer", value_name = "KEY=VALUE")]
    pub(crate) answers: Vec<String>,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ShowArgs {
    pub(crate) project_id: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct EditArgs {
    pub(crate) project_id: String,
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// New description; an empty value clears it
    #[arg(long)]
    pub(crate) description: Option<String>,
}

#[derive(Args)]
pub(crate) struct DeleteArgs {
    pub(crate) project_id: String,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub(crate) yes: bool,
}
