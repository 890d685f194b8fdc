pub mod loader;

pub use loader::{load_datasets, load_events, load_meetings};
