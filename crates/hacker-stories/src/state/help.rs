//! Help Panel State

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpState {
    /// First visible line of the binding list
    pub scroll: usize,
}
