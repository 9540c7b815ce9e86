mod app;
mod config;
mod error;
mod feedback;
mod input;
mod layout;
mod model;
mod newsletter;
mod state;
mod style;
mod view;

use app::Folio;
use clap::Parser;
use config::Config;
use eframe::egui;
use error::ContentError;
use model::Book;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// A paginated essay book with page-turn navigation.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Read the book from this TOML file instead of the built-in one
    #[arg(long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Turn pages without the page-turn sound
    #[arg(long)]
    mute: bool,

    /// Length of a page turn in milliseconds
    #[arg(long, value_name = "MS")]
    transition_ms: Option<u64>,

    /// Write the default config file (if missing) and exit
    #[arg(long)]
    write_default_config: bool,
}

/// Load the configured book, falling back to the built-in one.
/// The second value is a message for the status line when the fallback was used.
fn load_book(path: Option<&PathBuf>) -> Result<(Book, Option<String>), ContentError> {
    let Some(path) = path else {
        return Ok((Book::embedded()?, None));
    };
    match Book::load(path) {
        Ok(book) => {
            tracing::info!(path = %path.display(), pages = book.len(), "loaded book");
            Ok((book, None))
        }
        Err(err) => {
            tracing::warn!(%err, "falling back to the built-in book");
            Ok((Book::embedded()?, Some(err.to_string())))
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if cli.write_default_config {
        match Config::create_default() {
            Ok(path) => println!("{}", path.display()),
            Err(err) => {
                eprintln!("Failed to write config: {}", err);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    let mut config = Config::load();
    if cli.mute {
        config.sound.enabled = false;
    }
    if let Some(ms) = cli.transition_ms {
        config.navigation.transition_ms = ms;
    }
    if cli.content.is_some() {
        config.content.path = cli.content;
    }

    let (book, startup_error) = load_book(config.content.path.as_ref())
        .map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([480.0, 480.0])
            .with_title(&book.title),
        ..Default::default()
    };

    let title = book.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(Folio::new(book, &config, startup_error)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["folio", "--mute", "--transition-ms", "750", "--content", "b.toml"]);
        assert!(cli.mute);
        assert_eq!(cli.transition_ms, Some(750));
        assert_eq!(cli.content, Some(PathBuf::from("b.toml")));
        assert!(!cli.write_default_config);
    }

    #[test]
    fn test_load_book_falls_back() {
        let (book, err) = load_book(Some(&PathBuf::from("/nonexistent/folio.toml"))).unwrap();
        assert_eq!(book.len(), 9);
        assert!(err.is_some());

        let (_, err) = load_book(None).unwrap();
        assert!(err.is_none());
    }
}
