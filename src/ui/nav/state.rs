use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Joke,
    Counter,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Joke => "Joke",
            Screen::Counter => "Counter",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavState {
    pub current: Screen,
    /// Screens to return to, most recent last.
    pub back_stack: Vec<Screen>,
}

impl UiState for NavState {}

impl NavState {
    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }
}
