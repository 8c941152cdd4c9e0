//! main.rs
//! Entry point for fuzzy-filer (ff)
//!
//! The picker draws on stderr; the selected path is printed on stdout so it can be captured,
//! e.g. `cd "$(ff)"` or `vim "$(ff)"`.

use fuzzy_filer::app::Session;
use fuzzy_filer::config::Config;
use fuzzy_filer::core::terminal;
use fuzzy_filer::logging;
use fuzzy_filer::utils::cli::{CliAction, handle_args};

fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stderr = std::io::stderr();
        let _ = crossterm::execute!(
            stderr,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[fuzzy-filer] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let CliAction::RunApp {
        start,
        config_path,
        no_preview,
    } = handle_args()
    else {
        return Ok(());
    };

    logging::init();

    let mut config = Config::load(&config_path);
    if no_preview {
        config.disable_preview();
    }

    let mut session = match Session::new(&config, &start) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("[fuzzy-filer] Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(path) = terminal::run_terminal(&mut session)? {
        println!("{}", path.display());
    }
    Ok(())
}
