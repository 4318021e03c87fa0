//! Terminal UI for pass-the-device play.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument, warn};

use crate::config::Config;
use app::App;

/// Runs the interactive game until the players quit.
#[instrument(skip(config))]
pub fn run_tui(config: &Config) -> Result<()> {
    let theme = config.theme().resolve()?;

    info!("Starting Tally Toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            if let Err(restore) = restore_terminal(None) {
                error!(error = %restore, "Terminal restore failed");
            }
            return Err(e).context("Failed to create terminal");
        }
    };

    let mut app = App::new(*config.show_hints());
    let result = event_loop(&mut terminal, &mut app, &theme);
    let restored = restore_terminal(Some(&mut terminal));

    match &result {
        Ok(()) => info!(scores = ?app.engine().scores(), "TUI exited"),
        Err(e) => error!(error = %e, "TUI failed"),
    }
    result.and(restored)
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even if an earlier one fails; the first error is returned.
fn restore_terminal(terminal: Option<&mut Terminal<CrosstermBackend<io::Stdout>>>) -> Result<()> {
    let mut steps = vec![
        disable_raw_mode().context("Failed to disable raw mode"),
        execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen"),
    ];
    if let Some(terminal) = terminal {
        steps.push(terminal.show_cursor().context("Failed to show cursor"));
    }
    first_error(steps)
}

fn first_error(steps: Vec<Result<()>>) -> Result<()> {
    let mut first = None;
    for step in steps {
        if let Err(e) = step {
            warn!(error = %e, "Terminal restore step failed");
            first.get_or_insert(e);
        }
    }
    first.map_or(Ok(()), Err)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    theme: &crate::config::Theme,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app, theme))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            debug!(code = ?key.code, "Key pressed");
            app.handle_key(key.code);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_first_error_ok_when_all_steps_succeed() {
        assert!(first_error(vec![Ok(()), Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_first_error_keeps_earliest_failure() {
        let err = first_error(vec![
            Err(anyhow!("raw mode")),
            Ok(()),
            Err(anyhow!("cursor")),
        ])
        .expect_err("restore should fail");
        assert_eq!(err.to_string(), "raw mode");
    }

    #[test]
    fn test_first_error_reports_late_failure() {
        let err = first_error(vec![Ok(()), Err(anyhow!("alternate screen"))])
            .expect_err("restore should fail");
        assert_eq!(err.to_string(), "alternate screen");
    }
}
