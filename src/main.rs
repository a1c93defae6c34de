use clap::Parser;
use stressmark::app::{App, AppEvent};
use stressmark::config::Config;
use stressmark::stress::StressTable;
use stressmark::{logging, ui::TuiManager};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    logging::init(config.log_file.as_deref())?;

    // Loaded once; the app only ever reads it
    let table = match &config.dict {
        Some(path) => StressTable::load(path)?,
        None => StressTable::builtin()?,
    };
    log::info!("dictionary ready with {} entries", table.len());

    let mut app = App::new(table, config.layout_mode());
    if let Some(path) = &config.file {
        app.handle_event(AppEvent::LoadFile(path.clone()));
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
