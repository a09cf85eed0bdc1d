use std::collections::VecDeque;

use crate::remote::ConsoleApi;

use super::execute::execute;
use super::request::Request;
use super::view::ProjectView;

/// Runs a `ProjectView` against an API one request at a time, following up on
/// every response until the queue drains.
pub struct Session<A: ConsoleApi> {
    api: A,
    view: ProjectView,
}

impl<A: ConsoleApi> Session<A> {
    pub fn new(api: A, project_id: impl Into<String>) -> Self {
        Self {
            api,
            view: ProjectView::new(project_id),
        }
    }

    /// Creates the session and performs the initial load.
    pub fn open(api: A, project_id: impl Into<String>) -> Self {
        let mut session = Self::new(api, project_id);
        session.dispatch(ProjectView::mount);
        session
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &ProjectView {
        &self.view
    }

    /// Applies an intent and runs everything it triggers. Returns the number of
    /// requests executed.
    pub fn dispatch<F>(&mut self, intent: F) -> usize
    where
        F: FnOnce(&mut ProjectView) -> Vec<Request>,
    {
        let first = intent(&mut self.view);
        self.run(first)
    }

    pub fn run(&mut self, requests: Vec<Request>) -> usize {
        let mut queue: VecDeque<Request> = requests.into();
        let mut executed = 0;
        while let Some(req) = queue.pop_front() {
            let resp = execute(&self.api, self.view.project_id(), req);
            executed += 1;
            queue.extend(self.view.apply(resp));
        }
        executed
    }
}
