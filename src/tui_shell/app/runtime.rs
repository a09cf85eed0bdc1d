use std::io::IsTerminal;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use super::*;

type ConsoleTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns raw mode and the alternate screen; both are undone on drop, including
/// when the loop unwinds.
struct ScreenGuard {
    terminal: ConsoleTerminal,
}

impl ScreenGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(err).context("enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(err) => {
                execute!(io::stdout(), LeaveAlternateScreen).ok();
                disable_raw_mode().ok();
                return Err(err).context("create terminal");
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen).ok();
        self.terminal.show_cursor().ok();
    }
}

pub(in crate::tui_shell) fn run(client: ApiClient, opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("the console requires an interactive terminal (TTY)");
    }

    tracing::info!(project_id = %opts.project_id, api_base = client.api_base(), "opening console");
    let mut screen = ScreenGuard::enter()?;
    screen.terminal.clear().ok();

    let mut app = App::load(client, opts);
    let res = event_loop::run_loop(&mut screen.terminal, &mut app);
    drop(screen);

    if let Some(d) = app.view.deleted() {
        tracing::info!(project_id = %d.project_id, "console closed after deletion");
    }
    res
}
