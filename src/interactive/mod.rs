//! Interactive TUI interface
//!
//! Full-screen word ladder explorer built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui};
