pub mod state;

pub use state::{Control, InputEvent, InputState};
