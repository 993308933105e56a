use derive_more::Display;
use std::{cell::RefCell, collections::VecDeque};

/// Entries kept in the in-memory log before the oldest are evicted.
pub const LOG_CAPACITY: usize = 256;

///
/// Level
///

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Display)]
pub enum Level {
    Debug, // least severe
    Info,
    Ok,
    Warn,
    Error, // most severe
}

///
/// Topic
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Actor,
    Config,
    Init,
    Page,
    Render,
}

///
/// LogEntry
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogEntry {
    pub crate_name: String,
    pub topic: Option<String>,
    pub level: Level,
    pub message: String,
}

thread_local! {
    static LOG: RefCell<VecDeque<LogEntry>> = const { RefCell::new(VecDeque::new()) };
}

#[macro_export]
macro_rules! log {
    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner Some(&$topic.to_string()), $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner None::<&str>, $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // INTERNAL
    // =========================================
    (@inner $topic:expr, $level:expr, $fmt:expr $(, $arg:expr)*) => {{
        let topic_opt: Option<&str> = $topic;
        let message = format!($fmt $(, $arg)*);

        $crate::log::__emit(env!("CARGO_PKG_NAME"), topic_opt, $level, message);
    }};
}

/// Snapshot of the in-memory log, oldest first.
#[must_use]
pub fn entries() -> Vec<LogEntry> {
    LOG.with(|log| log.borrow().iter().cloned().collect())
}

pub fn clear() {
    LOG.with(|log| log.borrow_mut().clear());
}

///
/// Helpers
///

#[doc(hidden)]
pub fn __emit(crate_name: &str, topic: Option<&str>, level: Level, message: String) {
    let final_msg = if let Some(t) = topic {
        format!("[{t}] {message}")
    } else {
        message.clone()
    };

    write_line(crate_name, level, &final_msg);

    LOG.with(|log| {
        let mut log = log.borrow_mut();
        if log.len() == LOG_CAPACITY {
            log.pop_front();
        }
        log.push_back(LogEntry {
            crate_name: crate_name.to_string(),
            topic: topic.map(str::to_string),
            level,
            message,
        });
    });
}

#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
fn write_line(crate_name: &str, level: Level, msg: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let label = level.to_string().to_uppercase();
    let line = JsValue::from_str(&format!("{label:^5}|{crate_name}| {msg}"));
    match level {
        Level::Debug => console::debug_1(&line),
        Level::Info | Level::Ok => console::log_1(&line),
        Level::Warn => console::warn_1(&line),
        Level::Error => console::error_1(&line),
    }
}

#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
fn write_line(crate_name: &str, level: Level, msg: &str) {
    let (color, reset) = match level {
        Level::Ok => ("\x1b[32m", "\x1b[0m"),
        Level::Info => ("\x1b[34m", "\x1b[0m"),
        Level::Warn => ("\x1b[33m", "\x1b[0m"),
        Level::Error => ("\x1b[31m", "\x1b[0m"),
        Level::Debug => ("", ""),
    };

    let label = format!("{color}{:^5}{reset}", level.to_string().to_uppercase());
    println!("{label}|{crate_name:^9}| {msg}");
}

///
/// TESTS
///
