//! Component trait shared by every piece of the screen.
//!
//! Components are stateless renderers over [`App`]: they translate input into
//! state changes or [`Effect`]s and draw themselves from the current state.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

use aistudio_types::Effect;

use crate::app::App;

pub(crate) trait Component {
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App);
}
