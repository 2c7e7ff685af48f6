//! `tracing` output routed to the browser console.

use std::io;

use tracing::Level;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and hands it to `console` on drop.
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end();
        if line.is_empty() {
            return;
        }
        let msg = JsValue::from_str(line);
        if line.contains("ERROR") {
            web_sys::console::error_1(&msg);
        } else if line.contains("WARN") {
            web_sys::console::warn_1(&msg);
        } else {
            web_sys::console::log_1(&msg);
        }
    }
}

pub fn init(max_level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(ConsoleWriter::default)
        .without_time()
        .with_ansi(false)
        .with_target(true)
        .try_init();
}

pub fn parse_level(s: &str) -> Level {
    match s.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
