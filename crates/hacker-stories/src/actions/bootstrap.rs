//! Bootstrap actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Sent once by `main`: load the stored term and run the first search
    Start,
}
