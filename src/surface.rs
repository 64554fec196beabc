use crate::render::BoardModel;

/// Where the board view draws. Injected into `BoardView` at construction.
pub trait Surface {
    /// Replaces whatever was displayed before with `model`.
    fn show_board(&self, model: &BoardModel);

    /// Blocking, user-facing notification.
    fn notify(&self, message: &str);
}
