use super::*;

impl App {
    pub(in crate::tui_shell) fn new(client: ApiClient, project_id: &str) -> Self {
        let worker = Worker::new(client.clone(), project_id);
        Self {
            client,
            view: ProjectView::new(project_id),
            worker,
            focus: Focus::Packs,
            form_field: FormField::Name,
            pack_row: 0,
            learn_scroll: 0,
            item_row: 0,
            modal: None,
            last_result: None,
            closing: false,
            quit: false,
        }
    }

    pub(super) fn load(client: ApiClient, opts: TuiRunOptions) -> Self {
        let mut app = App::new(client, &opts.project_id);
        let reqs = app.view.mount();
        app.dispatch(reqs);
        app.push_output(format!(
            "Loading {} from {}",
            opts.project_id,
            app.client.api_base()
        ));
        app
    }
}
