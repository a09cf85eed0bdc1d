use super::*;

mod key_dispatch;

use self::key_dispatch::handle_key;

const TICK: Duration = Duration::from_millis(50);

/// Draws after every pump so worker responses show up without a key press.
pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.quit {
        app.pump();
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw console")?;

        if !event::poll(TICK).context("poll terminal events")? {
            continue;
        }
        if let Event::Key(k) = event::read().context("read terminal event")?
            && k.kind == KeyEventKind::Press
        {
            handle_key(app, k);
        }
    }
    Ok(())
}
