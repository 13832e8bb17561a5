pub mod console;
pub mod presenter;

pub use console::Console;
pub use presenter::Presenter;
