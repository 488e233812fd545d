//! Core modules for emotion-avatar

pub mod stemmer;
pub mod keyword_index;
pub mod classifier;
pub mod debounce;
pub mod controller;
pub mod script;
pub mod terminal;
pub mod driver;

pub use stemmer::{stem, tokenize};
pub use keyword_index::{KeywordIndex, KeywordEntry};
pub use classifier::Classifier;
pub use debounce::Debouncer;
pub use controller::AvatarController;
pub use script::{parse_script, load_script, replay, ReplaySummary};
pub use terminal::TerminalSurface;
pub use driver::drive_lines;
