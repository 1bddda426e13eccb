use gloo::console;

/// Console logging with a component tag, so messages from the hooks and
/// services are easy to tell apart in the browser console.
pub struct Logger;

impl Logger {
    pub fn info(component: &str, message: &str) {
        console::info!(format!("[{component}] {message}"));
    }

    pub fn warn(component: &str, message: &str) {
        console::warn!(format!("[{component}] {message}"));
    }

    pub fn error(component: &str, message: &str) {
        console::error!(format!("[{component}] {message}"));
    }
}
