//! Cross-slice state mutations.
//!
//! Feature reducers and overlays return these mutations to request changes
//! outside their own slice. The main reducer applies them in order.

use folio_core::router::ViewState;
use folio_core::theme::Theme;

#[derive(Debug, PartialEq)]
pub enum StateMutation {
    /// Route to a view. Always collapses the fullscreen player.
    Navigate(ViewState),
    Focus(crate::state::Focus),
    SetTheme(Theme),
    SetFollowed(bool),
}
