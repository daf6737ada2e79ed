mod presentation;
mod sample_markings;
mod session;

pub use session::run_tui;
