//! Coinpocket CLI: crypto watchlist in the terminal
//!
//! Commands run on a controller thread; the main thread answers popups.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{info, warn};

use coinpocket::config::popup::CONFIRM_TIMEOUT_SECS;
use coinpocket::data::{CommitOutcome, FavoritesStore, RemoveOutcome, SettingKey, ToggleOutcome};
use coinpocket::host::{spawn_feedback_worker, ChannelPopup, FeedbackChannel, HostCapabilities};
use coinpocket::storage::FileStorage;

use coinpocket_app::config::providers::OPENWEATHER_API_KEY_ENV;
use coinpocket_app::error::{AppError, Result};
use coinpocket_app::providers::{CoinGeckoProvider, OpenWeatherProvider, QuoteSource};
use coinpocket_app::screens::{
    format_price, CryptoScreen, FavoritesScreen, LocationScreen, ProfileView, SettingsScreen,
};
use coinpocket_app::terminal::{EnvInitData, FixedLocation, LogHaptics, TerminalPopup};

#[derive(Parser)]
#[command(name = "coinpocket", about = "Crypto prices and watchlist", version)]
struct Cli {
    /// Directory holding the synced key/value store
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// OpenWeather API key
    #[arg(long, global = true, env = OPENWEATHER_API_KEY_ENV, hide_env_values = true)]
    weather_api_key: Option<String>,

    /// Seconds to wait for a popup answer before treating it as dismissed
    #[arg(long, global = true, default_value_t = CONFIRM_TIMEOUT_SECS)]
    confirm_timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Top assets by market cap
    Prices,
    /// Show or edit the favorites list
    Favorites {
        #[command(subcommand)]
        action: Option<FavoritesAction>,
    },
    /// Show or edit app settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// Current weather at a location
    Weather {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List favorites with current prices
    List,
    /// Add or remove an asset (adding asks for confirmation)
    Toggle { id: String },
    /// Remove an asset after confirmation
    Remove { id: String },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print current settings
    Show,
    /// Change a setting and save it
    Set {
        /// hapticEnabled or notificationsEnabled
        key: SettingKey,
        /// true or false
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let storage = match &cli.data_dir {
        Some(dir) => FileStorage::with_dir(dir)?,
        None => FileStorage::new()?,
    };
    info!("Using storage at {}", storage.dir().display());

    let (feedback, feedback_rx) = FeedbackChannel::new();
    let feedback_worker = spawn_feedback_worker(feedback_rx, Arc::new(LogHaptics))?;
    let (popup, popup_rx) = ChannelPopup::with_timeout(Duration::from_secs(cli.confirm_timeout));

    let mut host = HostCapabilities::new()
        .with_storage(Arc::new(storage))
        .with_popup(Arc::new(popup))
        .with_haptics(Arc::new(feedback))
        .with_init_data(Arc::new(EnvInitData::from_env()));
    if let Command::Weather { lat, lon } = cli.command {
        host = host.with_location(Arc::new(FixedLocation::new(lat, lon)));
    }

    let terminal = TerminalPopup::new(popup_rx)?;

    // The host moves into the controller; popups end once it is dropped
    let controller = std::thread::Builder::new()
        .name("controller".into())
        .spawn(move || run(cli, host))?;
    terminal.run();

    let result = controller
        .join()
        .map_err(|_| AppError::Config("Controller thread panicked".into()))?;
    if feedback_worker.join().is_err() {
        warn!("Feedback worker panicked");
    }

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: Cli, host: HostCapabilities) -> Result<()> {
    match cli.command {
        Command::Prices => {
            let source: Arc<dyn QuoteSource> = Arc::new(CoinGeckoProvider::new()?);
            let favorites = Arc::new(FavoritesStore::load(host.clone()));
            let mut screen = CryptoScreen::new(host, source, favorites);
            screen.activate();
            print_profile(&screen.profile());
            if let Some(error) = screen.error() {
                return Err(AppError::Config(error.to_string()));
            }
            for row in screen.rows() {
                let star = if row.is_favorite { "*" } else { " " };
                println!(
                    "{star} {:<14} {:<6} {:>14} {:>9}",
                    row.quote.id,
                    row.quote.ticker(),
                    format_price(row.quote.current_price),
                    row.quote.change_label()
                );
            }
        }

        Command::Favorites { action } => {
            let source: Arc<dyn QuoteSource> = Arc::new(CoinGeckoProvider::new()?);
            let favorites = Arc::new(FavoritesStore::load(host));
            match action.unwrap_or(FavoritesAction::List) {
                FavoritesAction::List => {
                    let mut screen = FavoritesScreen::new(source, favorites);
                    screen.activate();
                    if screen.has_no_favorites() {
                        println!("No favorites yet. Add coins from the prices list.");
                    }
                    for quote in screen.quotes() {
                        println!(
                            "{:<14} {:<6} {:>14} {:>9}",
                            quote.id,
                            quote.ticker(),
                            format_price(quote.current_price),
                            quote.change_label()
                        );
                    }
                }
                FavoritesAction::Toggle { id } => {
                    let quote = source
                        .by_ids(std::slice::from_ref(&id))?
                        .into_iter()
                        .next()
                        .ok_or_else(|| AppError::Config(format!("Unknown asset: {id}")))?;
                    match favorites.toggle(&quote) {
                        ToggleOutcome::Added => println!("Added {}", quote.name),
                        ToggleOutcome::Removed => println!("Removed {}", quote.name),
                        ToggleOutcome::Declined => println!("Cancelled"),
                    }
                }
                FavoritesAction::Remove { id } => {
                    let mut screen = FavoritesScreen::new(source, favorites);
                    match screen.remove(&id) {
                        RemoveOutcome::Removed => println!("Removed {id}"),
                        RemoveOutcome::Declined => println!("Cancelled"),
                        RemoveOutcome::NotFavorite => println!("{id} is not a favorite"),
                    }
                }
            }
        }

        Command::Settings { action } => {
            let mut screen = SettingsScreen::new(host);
            match action.unwrap_or(SettingsAction::Show) {
                SettingsAction::Show => {
                    print_profile(&screen.account());
                    let settings = screen.settings();
                    for key in SettingKey::ALL {
                        let state = if settings.get(key) { "on" } else { "off" };
                        println!("{:<18} {state}", key.label());
                    }
                }
                SettingsAction::Set { key, value } => {
                    screen.edit(key, value);
                    match screen.save() {
                        CommitOutcome::Saved => println!("{} set to {value}", key.label()),
                        CommitOutcome::Unchanged => println!("{} already {value}", key.label()),
                        CommitOutcome::Failed => {
                            return Err(AppError::Config("Failed to save settings".into()))
                        }
                    }
                }
            }
        }

        Command::Weather { .. } => {
            let weather = Arc::new(OpenWeatherProvider::new(cli.weather_api_key)?);
            let mut screen = LocationScreen::new(host, weather);
            screen.request_location();
            if let Some(error) = screen.location_error() {
                return Err(AppError::Location(error.to_string()));
            }
            if let Some(location) = screen.location() {
                println!("Location: {:.4}, {:.4}", location.latitude, location.longitude);
            }
            if let Some(error) = screen.weather_error() {
                return Err(AppError::Config(error.to_string()));
            }
            if let Some(weather) = screen.weather() {
                println!(
                    "{}: {}°C, {}",
                    weather.location_name,
                    weather.temperature,
                    weather.headline()
                );
                println!(
                    "Feels like {}°C, humidity {}%, wind {} m/s",
                    weather.feels_like, weather.humidity, weather.wind_speed
                );
            }
        }
    }
    Ok(())
}

fn print_profile(profile: &ProfileView) {
    let premium = if profile.is_premium { " (premium)" } else { "" };
    println!("{}{premium} · {}", profile.display_name, profile.subtitle);
}
