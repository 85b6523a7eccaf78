mod build;
mod list;

pub use build::handle_build_command;
pub use list::handle_list_command;
