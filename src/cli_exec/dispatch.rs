use super::checklist::{
    handle_checklist_command, handle_item_command, handle_report_command, handle_upload_command,
};
use super::packs::{
    handle_industries_command, handle_learn_command, handle_pack_command, handle_packs_command,
    handle_set_version_command, handle_toggle_command,
};
use super::projects::{
    handle_create_command, handle_delete_command, handle_edit_command, handle_projects_command,
    handle_show_command,
};
use super::*;

pub(super) fn handle_command(client: ApiClient, command: Commands) -> Result<()> {
    match command {
        Commands::Projects(args) => handle_projects_command(&client, args.json)?,
        Commands::Create(args) => handle_create_command(&client, args)?,
        Commands::Show(args) => handle_show_command(client, args)?,
        Commands::Edit(args) => handle_edit_command(client, args)?,
        Commands::Delete(args) => handle_delete_command(client, args)?,
        Commands::Packs(args) => handle_packs_command(&client, args.json)?,
        Commands::Pack(args) => handle_pack_command(&client, args)?,
        Commands::Learn(args) => handle_learn_command(&client, args.json)?,
        Commands::Toggle(args) => handle_toggle_command(client, args)?,
        Commands::SetVersion(args) => handle_set_version_command(client, args)?,
        Commands::Checklist(args) => handle_checklist_command(client, args)?,
        Commands::Item(args) => handle_item_command(client, args)?,
        Commands::Upload(args) => handle_upload_command(client, args)?,
        Commands::Report(args) => handle_report_command(&client, args)?,
        Commands::Industries(args) => handle_industries_command(&client, args.json)?,
        Commands::Open(args) => truststack_console::tui::run(
            client,
            truststack_console::tui::TuiRunOptions {
                project_id: args.project_id,
            },
        )?,
    }
    Ok(())
}
