use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use portfolio_theme::{
    LeafPath, StyleSheet, ThemeMode, ThemeRuntime, editor::editor_sections, settings::Settings,
    storage::FileStorage,
};

const USAGE: &str = "usage: portfolio-theme [dark|light] [--edit] [--theme]";

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("portfolio_theme=info"),
    )
    .init();

    log::info!(
        "portfolio-theme v{} starting (RUST_LOG={})",
        env!("CARGO_PKG_VERSION"),
        std::env::var("RUST_LOG").unwrap_or_else(|_| "<default: info>".into()),
    );

    let mut settings = Settings::load();
    let mut interactive = false;
    let mut print_theme = false;
    for argument in std::env::args().skip(1) {
        match argument.as_str() {
            "--edit" => interactive = true,
            "--theme" => print_theme = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }
            other => match other.parse::<ThemeMode>() {
                Ok(mode) => settings.mode = mode,
                Err(error) => {
                    log::error!("[startup] {error}");
                    eprintln!("{USAGE}");
                    return ExitCode::FAILURE;
                }
            },
        }
    }

    let storage = Rc::new(FileStorage::in_configuration_directory());
    log::info!("[startup] storage path: {}", storage.path().display());
    let mut runtime = ThemeRuntime::new(storage, &settings, StyleSheet::new());

    if interactive && let Err(error) = run_editor(&mut runtime) {
        log::error!("[editor] failed to read commands: {error}");
        return ExitCode::FAILURE;
    }

    print!("{}", runtime.target().to_css());
    if print_theme {
        print_theme_object(&runtime);
    }
    ExitCode::SUCCESS
}

fn print_theme_object(runtime: &ThemeRuntime<StyleSheet>) {
    match serde_json::to_string_pretty(runtime.theme()) {
        Ok(json) => println!("{json}"),
        Err(error) => log::error!("[startup] failed to serialize theme: {error}"),
    }
}

/// Sleeps until every pending edit has passed its quiet period, then commits.
fn settle(runtime: &mut ThemeRuntime<StyleSheet>) {
    if let Some(deadline) = runtime.next_deadline() {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
    }
    runtime.tick(Instant::now());
}

fn run_editor(runtime: &mut ThemeRuntime<StyleSheet>) -> io::Result<()> {
    runtime.open_editor();
    let mut stdout = io::stdout();

    for line in io::stdin().lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["set", key, text] => match key.parse::<LeafPath>() {
                Ok(path) => {
                    let outcome = runtime.edit(path, text, Instant::now());
                    let shown = runtime.editor().input_text(path).unwrap_or_default();
                    writeln!(stdout, "{path}: {outcome:?} ({shown})")?;
                }
                Err(error) => writeln!(stdout, "{error}")?,
            },
            ["blur", key] => match key.parse::<LeafPath>() {
                Ok(path) => {
                    if runtime.finish_editing(path) {
                        let shown = runtime.editor().input_text(path).unwrap_or_default();
                        writeln!(stdout, "{path}: reverted to {shown}")?;
                    }
                }
                Err(error) => writeln!(stdout, "{error}")?,
            },
            ["reset"] => runtime.reset_colors(),
            ["mode"] => runtime.toggle_mode(),
            ["cursor", "on"] => runtime.set_custom_cursor_enabled(true),
            ["cursor", "off"] => runtime.set_custom_cursor_enabled(false),
            ["fields"] => {
                settle(runtime);
                for section in editor_sections(runtime.mode(), runtime.custom_cursor_enabled()) {
                    writeln!(stdout, "{}", section.title)?;
                    for field in section.fields {
                        let shown = runtime.editor().input_text(field.path).unwrap_or_default();
                        let alpha = if runtime.editor().is_alpha(field.path) { " α" } else { "" };
                        writeln!(stdout, "  {:<18} {:<28} {shown}{alpha}", field.label, field.path)?;
                    }
                }
            }
            ["show"] => {
                settle(runtime);
                write!(stdout, "{}", runtime.target().to_css())?;
            }
            ["theme"] => {
                settle(runtime);
                print_theme_object(runtime);
            }
            _ => writeln!(stdout, "unknown command: {line}")?,
        }
        runtime.tick(Instant::now());
    }

    settle(runtime);
    runtime.close_editor();
    Ok(())
}
