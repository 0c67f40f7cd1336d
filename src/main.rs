//! zenmodes - Priority senders policies for Do Not Disturb modes
//!
//! This is the binary entry point. All policy logic lives in the workspace crates.

mod cli;
mod render;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use zenmodes_app::config::{init_config_dir, load_settings, modes_file_path, Settings};
use zenmodes_app::{FileModesStore, PolicyStore, PrioritySendersController};
use zenmodes_core::logging;

use cli::{Args, Command};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let project = args
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let (settings, config_error) = match load_settings(&project) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    logging::init(&settings.logging.filter)?;

    if let Some(e) = config_error {
        tracing::warn!("{}; using default settings", e);
        eprintln!("warning: {}; using default settings", e);
    }

    match args.command {
        Command::Init => {
            init_config_dir(&project)?;
            println!("Initialized {}", project.join(".zenmodes").display());
        }
        Command::List => {
            let store = FileModesStore::open(modes_file_path(&project, &settings))?;
            let modes = store.modes();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&render::mode_list(modes))?);
            } else {
                print!("{}", render::render_mode_list(modes));
            }
        }
        Command::Show { mode, category } => {
            let store = FileModesStore::open(modes_file_path(&project, &settings))?;
            let policy = store.policy(&mode)?;
            let mut controller = PrioritySendersController::new(category, store.people().clone());
            controller.update_state(&policy)?;
            print_screen(&store, &mode, &controller, args.json)?;
        }
        Command::Click {
            mode,
            category,
            option,
        } => {
            if !option.is_valid_for(category) {
                return Err(eyre!("Option {} does not apply to {}", option, category));
            }

            let mut store = FileModesStore::open(modes_file_path(&project, &settings))?;
            // Held until the store drops, so a concurrent click waits for this one
            store.lock_for_update()?;
            let policy = store.policy(&mode)?;
            let mut controller = PrioritySendersController::new(category, store.people().clone());
            controller.update_state(&policy)?;

            // Hidden options cannot be clicked on the real screen either
            if !controller.visible_options().any(|o| o.key == option) {
                return Err(eyre!(
                    "Option {} is not shown on the {} screen of {}",
                    option,
                    category,
                    mode
                ));
            }

            let saved = controller.on_option_clicked(&mut store, &mode, option)?;
            tracing::info!("Clicked {} on {} {}: saved {}", option, mode, category, saved);
            print_screen(&store, &mode, &controller, args.json)?;
        }
    }

    Ok(())
}

fn print_screen<D>(
    store: &FileModesStore,
    mode_id: &str,
    controller: &PrioritySendersController<D>,
    json: bool,
) -> Result<()>
where
    D: zenmodes_app::PeopleDirectory,
{
    let mode = store
        .mode(mode_id)
        .ok_or_else(|| eyre!("Mode not found: {}", mode_id))?;
    let view = render::screen_view(mode, controller);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::render_screen(&view));
    }
    Ok(())
}
