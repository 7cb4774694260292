// TUI widget modules, one per screen zone.

pub mod entry;
pub mod header;
pub mod participants;
pub mod quit_confirm;
pub mod status_bar;
