use clap::Subcommand;

pub mod list;
pub mod show;
pub mod status;
pub mod theme;
pub mod vm;

#[cfg(test)]
mod stub;

#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the backend is authenticated against Azure
    Status(status::StatusArgs),
    /// List resources, optionally filtered
    List(list::ListArgs),
    /// Show the details of one resource
    Show(show::ShowArgs),
    /// Start, stop or restart a virtual machine
    Vm(vm::VmArgs),
    /// Print or toggle the persisted theme
    Theme(theme::ThemeArgs),
}
