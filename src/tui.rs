use anyhow::Result;

use crate::remote::ApiClient;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub project_id: String,
}

/// Opens the interactive console for one project. Requires a TTY.
pub fn run(client: ApiClient, opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(client, opts)
}
