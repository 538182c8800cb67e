//! Terminal rendering module.
//!
//! A small rendering layer for the Jospel board. It avoids widget/layout
//! libraries and instead renders into a simple framebuffer that is flushed to
//! a terminal backend.
//!
//! - [`game_view`]: pure mapping from a session snapshot or final report to a framebuffer
//! - [`renderer`]: raw-mode/alternate-screen handling and frame output via crossterm
//! - [`report_json`]: the final report as JSON for headless runs

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod report_json;

pub use jospel_core as core;
pub use jospel_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, PromptView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
pub use report_json::{report_to_json, LineMessage, ReportMessage};
