use crate::mvi::Reducer;
use crate::ui::browse::intent::BrowseIntent;
use crate::ui::browse::state::BrowseState;

pub struct BrowseReducer;

impl Reducer for BrowseReducer {
    type State = BrowseState;
    type Intent = BrowseIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowseIntent::SelectTab { tab } if tab == state.tab => state,
            BrowseIntent::SelectTab { tab } => BrowseState { tab, selected: 0 },
            BrowseIntent::NextTab => BrowseState {
                tab: state.tab.next(),
                selected: 0,
            },
            BrowseIntent::MoveLeft { len } => {
                let selected = if len == 0 {
                    0
                } else if state.selected == 0 {
                    len - 1
                } else {
                    state.selected.min(len) - 1
                };
                BrowseState { selected, ..state }
            }
            BrowseIntent::MoveRight { len } => {
                let selected = if state.selected + 1 >= len {
                    0
                } else {
                    state.selected + 1
                };
                BrowseState { selected, ..state }
            }
            BrowseIntent::MoveUp { columns } => {
                let columns = columns.max(1);
                let selected = if state.selected >= columns {
                    state.selected - columns
                } else {
                    state.selected
                };
                BrowseState { selected, ..state }
            }
            BrowseIntent::MoveDown { len, columns } => {
                let columns = columns.max(1);
                let selected = if state.selected + columns < len {
                    state.selected + columns
                } else {
                    state.selected
                };
                BrowseState { selected, ..state }
            }
            BrowseIntent::Clamp { len } => BrowseState {
                selected: state.selected.min(len.saturating_sub(1)),
                ..state
            },
        }
    }
}
