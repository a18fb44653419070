/// UI chrome state.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
