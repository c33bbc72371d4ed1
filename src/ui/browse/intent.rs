use crate::mvi::Intent;
use crate::view::Tab;

/// Grid geometry travels with each move so the reducer stays pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseIntent {
    SelectTab { tab: Tab },
    NextTab,
    /// Previous card, wrapping to the last one.
    MoveLeft { len: usize },
    /// Next card, wrapping to the first one.
    MoveRight { len: usize },
    /// Card one row up. No-op on the first row.
    MoveUp { columns: usize },
    /// Card one row down. No-op when no card sits below.
    MoveDown { len: usize, columns: usize },
    /// Keep the selection inside a list that may have shrunk.
    Clamp { len: usize },
}

impl Intent for BrowseIntent {}
