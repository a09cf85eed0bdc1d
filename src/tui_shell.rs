use anyhow::Result;

use crate::remote::ApiClient;
use crate::tui::TuiRunOptions;

mod app;
mod input;
mod modal;
mod style;
mod worker;

pub(crate) fn run(client: ApiClient, opts: TuiRunOptions) -> Result<()> {
    app::run(client, opts)
}
