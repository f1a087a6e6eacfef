use crate::ui::mvi::Reducer;
use crate::ui::nav::intent::NavIntent;
use crate::ui::nav::state::NavState;

pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::Open(screen) if screen == state.current => state,
            NavIntent::Open(screen) => {
                let NavState {
                    current,
                    mut back_stack,
                } = state;
                back_stack.push(current);
                NavState {
                    current: screen,
                    back_stack,
                }
            }
            NavIntent::Back => {
                let NavState {
                    current,
                    mut back_stack,
                } = state;
                match back_stack.pop() {
                    Some(previous) => NavState {
                        current: previous,
                        back_stack,
                    },
                    None => NavState {
                        current,
                        back_stack,
                    },
                }
            }
        }
    }
}
