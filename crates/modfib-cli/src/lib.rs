//! # modfib-cli
//!
//! Symbol alphabets, colored orbit rendering, summary output, and shell
//! completion.

pub mod alphabet;
pub mod completion;
pub mod output;
pub mod presenter;
pub mod render;
pub mod ui;

pub use alphabet::Alphabet;
pub use presenter::CLIPresenter;
pub use render::OrbitRenderer;
