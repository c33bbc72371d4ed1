//! Reducer for the session selection.

use crate::mvi::Reducer;

use super::intent::SelectionIntent;
use super::state::SelectionState;

/// Pure and total: catalog membership is checked by the caller before
/// dispatching.
pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SelectionIntent::ToggleFavorite { id } => {
                let SelectionState {
                    mut favorites,
                    cart,
                } = state;
                match favorites.iter().position(|fav| *fav == id) {
                    Some(index) => {
                        favorites.remove(index);
                    }
                    None => favorites.push(id),
                }
                SelectionState { favorites, cart }
            }
            SelectionIntent::AddToCart { id } => {
                let SelectionState {
                    favorites,
                    mut cart,
                } = state;
                cart.push(id);
                SelectionState { favorites, cart }
            }
        }
    }
}
