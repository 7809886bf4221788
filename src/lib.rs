//! Terminal teaching games.
//!
//! The heart of the crate is [`list::LinkedList`], a singly linked list of
//! integers that the [`game`] module wraps in a small scoring game. The
//! [`rps`] and [`todo`] modules are independent companions, and [`cli`]
//! renders all three in a terminal.
pub mod game;
pub mod list;
pub mod rps;
pub mod todo;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payload carried by every list node.
pub type Value = i32;
/// Accumulated game points.
pub type Score = u32;
/// Player level, starting at 1.
pub type Level = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for computer opponents and tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// LINKED LIST GAME PARAMETERS
// Points per successful operation: BASE_POINTS · difficulty + size bonus.
// ============================================================================
/// Points awarded for any successful operation before multipliers.
pub const BASE_POINTS: Score = 10;
/// Every this many nodes in the list adds this many bonus points.
pub const SIZE_BONUS_STEP: usize = 5;
/// Score required to advance one level.
pub const POINTS_PER_LEVEL: Score = 100;
/// Difficulty tracks level but saturates here.
pub const MAX_DIFFICULTY: Score = 5;
/// Smallest value a player may submit.
pub const VALUE_MIN: Value = 0;
/// Largest value a player may submit.
pub const VALUE_MAX: Value = 999;
/// Nodes every new game starts with.
pub const SEED_VALUES: [Value; 3] = [5, 10, 15];
/// How long a renderer should keep a feedback message on screen.
pub const FEEDBACK_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(3);

// ============================================================================
// TODO PERSISTENCE
// ============================================================================
/// Key under which the serialized todo list lives in a key-value store.
pub const TODO_STORAGE_KEY: &str = "todos";
/// Default on-disk store for the todo list.
pub const TODO_STORAGE_PATH: &str = "arcade.json";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file. The terminal
/// only gets WARN and above since the games themselves draw on stdout.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
