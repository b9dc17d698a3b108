//! Product configuration trait for CLI binaries
//!
//! Each generator binary (jinn, ducks-gen) implements this trait to pick its
//! identity and the name of the rc file it reads. Planning, rendering and
//! writing are shared.

/// Configuration trait for different CLI products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the binary and the rc file)
    fn name(&self) -> &'static str;

    /// Human-readable display name, also the log prefix
    fn display_name(&self) -> &'static str;

    /// File name of the rc file at the project root (e.g. `.jinnrc`)
    fn rc_file_name(&self) -> &'static str;

    /// Flag that writes the rc file, shown in hints
    fn rc_flag(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;
}
