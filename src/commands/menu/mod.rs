pub mod aggregate;
pub mod command;
pub mod labels;
pub mod layout;
pub mod render;

pub use aggregate::{group_commands, GroupedCommands};
pub use command::MenuCommand;
pub use labels::CategoryLabelMap;
pub use layout::{ColumnLayout, MenuStyle};
pub use render::{build_menu, MenuContext, MenuRenderer};
