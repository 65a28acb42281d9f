//! Plain-text portfolio export.

use folio_core::export;

pub fn run() {
    print!("{}", export::render_text());
}
