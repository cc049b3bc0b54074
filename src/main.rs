use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

use snapwin::config::{FilePreferences, PreferenceStore, Preferences};
use snapwin::domain::{core::Rect, direction::Direction, frame::generate, padding::apply_padding};
use snapwin::platform::ScreenDescriptor;

/// Directional window tiling
#[derive(Parser, Debug)]
#[command(name = "snapwin", version, about)]
struct Cli {
    /// Preferences file (defaults to <config dir>/snapwin/preferences.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Move the focused window to a placement on the screen under the cursor
    Apply {
        /// Placement name, e.g. left-half or top-right-quarter
        direction: Direction,
    },

    /// Print the rectangle a placement would produce, without touching any window
    #[command(after_long_help = r#"Examples:
  snapwin plan left-third --screen 0,0,1920,1080 --padding 10
  snapwin plan center --screen 1920,0,2560,1440 --window 0,0,800,600"#)]
    Plan {
        direction: Direction,

        /// Display rectangle as X,Y,W,H
        #[arg(long, value_parser = parse_rect)]
        screen: Rect,

        /// Area left after taskbar/menu bar as X,Y,W,H (defaults to --screen)
        #[arg(long, value_parser = parse_rect)]
        visible: Option<Rect>,

        /// Current window rectangle as X,Y,W,H (only used by center)
        #[arg(long, value_parser = parse_rect)]
        window: Option<Rect>,

        /// Gap override; otherwise read from the preferences file
        #[arg(long, value_parser = parse_padding)]
        padding: Option<f64>,
    },

    /// List all placement names
    List,
}

fn parse_rect(value: &str) -> Result<Rect, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("invalid number in '{value}': {err}"))?;

    match parts.as_slice() {
        &[x, y, w, h] if w >= 0.0 && h >= 0.0 => Ok(Rect::new(x, y, w, h)),
        &[_, _, _, _] => Err(format!("'{value}' has a negative width or height")),
        _ => Err(format!("expected X,Y,W,H but got '{value}'")),
    }
}

fn parse_padding(value: &str) -> Result<f64, String> {
    let padding = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid number '{value}': {err}"))?;
    Preferences::validate_padding(padding).map_err(|err| err.to_string())
}

fn preferences(config: Option<PathBuf>) -> Option<FilePreferences> {
    config
        .or_else(Preferences::default_path)
        .map(FilePreferences::new)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("snapwin=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            for direction in Direction::iter().filter(|d| d.has_mapping()) {
                println!("{direction}");
            }
            ExitCode::SUCCESS
        }
        Command::Plan {
            direction,
            screen,
            visible,
            window,
            padding,
        } => {
            let padding = padding.unwrap_or_else(|| {
                preferences(cli.config)
                    .map_or(Preferences::DEFAULT_PADDING, |prefs| prefs.window_padding())
            });
            let screen = ScreenDescriptor::new(screen, visible.unwrap_or(screen));
            let usable = screen.usable_frame();
            let current = window.unwrap_or(usable);

            let Some(unpadded) = generate(current, usable, direction) else {
                eprintln!("Direction '{direction}' has no placement");
                return ExitCode::FAILURE;
            };
            let padded = apply_padding(unpadded, direction, padding);

            println!("usable:   {usable}");
            println!("unpadded: {unpadded}");
            println!("padded:   {padded}");
            ExitCode::SUCCESS
        }
        Command::Apply { direction } => apply(direction, cli.config),
    }
}

#[cfg(windows)]
fn apply(direction: Direction, config: Option<PathBuf>) -> ExitCode {
    use snapwin::app::Resizer;
    use snapwin::config::StaticPreferences;
    use snapwin::platform::win32::{
        enable_dpi_awareness, CursorScreenResolver, ForegroundWindowProvider,
    };

    enable_dpi_awareness();

    let result = match preferences(config) {
        Some(prefs) => Resizer::new(prefs).resize_focused_window(
            &ForegroundWindowProvider,
            &CursorScreenResolver,
            direction,
        ),
        None => Resizer::new(StaticPreferences::default())
            .resize_focused_window(&ForegroundWindowProvider, &CursorScreenResolver, direction),
    };

    match result {
        Ok(outcome) => {
            println!("{}", outcome.target());
            ExitCode::SUCCESS
        }
        Err(err) if err.is_invalid_request() => {
            eprintln!("Nothing to do: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Resize failed: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(windows))]
fn apply(direction: Direction, _config: Option<PathBuf>) -> ExitCode {
    eprintln!("Cannot apply '{direction}': no window binding is available on this platform");
    ExitCode::FAILURE
}
