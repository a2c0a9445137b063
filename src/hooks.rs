//! UI affordances around the chat surface.
//!
//! Two small callbacks the host runs when the server-driven view re-renders:
//! resetting the message input after a send, and pinning the message list to
//! its latest entry. Both are best-effort; a missing element only logs.

use wasm_bindgen::JsCast;
use web_sys::Element;

/// Selector for the chat form's text input.
pub const MESSAGE_INPUT_SELECTOR: &str = "input[name=message]";

/// Clear and refocus the message input under `form`.
///
/// Run after the server re-renders the chat form, so a sent message leaves
/// behind an empty, focused input.
pub fn reset_message_input(form: &Element) {
    let input = match form.query_selector(MESSAGE_INPUT_SELECTOR) {
        Ok(Some(element)) => element,
        _ => {
            log::debug!("no message input found under chat form");
            return;
        }
    };
    let Some(input) = input.dyn_ref::<web_sys::HtmlInputElement>() else {
        log::debug!("message input is not an input element");
        return;
    };

    input.set_value("");
    if input.focus().is_err() {
        log::debug!("could not focus message input");
    }
}

/// Pin a message list to its latest entry.
///
/// Run when a newly delivered message element mounts; scrolls the element's
/// parent by its visible height.
pub fn pin_messages_to_latest(message: &Element) {
    let Some(parent) = message.parent_element() else {
        log::debug!("mounted message has no parent to scroll");
        return;
    };
    parent.set_scroll_top(parent.client_height());
}
