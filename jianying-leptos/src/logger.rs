use std::sync::{Arc, Mutex};

use cfg_if::cfg_if;
use indexmap::IndexMap;
use tracing::span;
use tracing_subscriber::fmt::format::{PrettyVisitor, Writer};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use wasm_bindgen::prelude::*;

/// Writes tracing events to the browser console, prefixed with the
/// currently entered spans.
pub struct WASMTracingLayer {
    spans: Arc<Mutex<IndexMap<span::Id, String>>>,
    config: WASMTracingConfig,
}

pub struct WASMTracingConfig {
    pub target: bool,
    pub line: bool,
    /// Spans from other crates are left out of the prefix.
    pub span_target_prefix: &'static str,
}

impl Default for WASMTracingConfig {
    fn default() -> Self {
        Self {
            target: false,
            line: false,
            span_target_prefix: "jianying",
        }
    }
}

/// Installs the global subscriber. Calling it again keeps the first one.
pub fn init() {
    cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            let subscriber = tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt::with(
                tracing_subscriber::Registry::default(),
                WASMTracingLayer::new(WASMTracingConfig::default()),
            );

            if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
                web_sys::console::log_1(&format!("failed to install console logger: {}", err).into());
            }
        } else {
            let result = tracing_subscriber::fmt()
                .with_file(true)
                .with_line_number(true)
                .with_max_level(tracing::Level::TRACE)
                .try_init();

            if let Err(err) = result {
                tracing::debug!("logger already installed: {}", err);
            }
        }
    }
}

impl WASMTracingLayer {
    pub fn new(config: WASMTracingConfig) -> Self {
        Self {
            spans: Arc::new(Mutex::new(IndexMap::new())),
            config,
        }
    }

    fn spans_prefix(&self) -> String {
        let Ok(spans) = self.spans.lock() else {
            return String::new();
        };
        if spans.is_empty() {
            return String::new();
        }
        let joined = spans.values().cloned().collect::<Vec<String>>().join(", ");
        format!(" {}", joined)
    }
}

fn level_style(level: tracing::Level) -> &'static str {
    match level {
        tracing::Level::TRACE => "color: dodgerblue; background: #444",
        tracing::Level::DEBUG => "color: lawngreen; background: #444",
        tracing::Level::INFO => "color: whitesmoke; background: #444",
        tracing::Level::WARN => "color: orange; background: #444",
        tracing::Level::ERROR => "color: red; background: #444",
    }
}

impl<S: tracing::Subscriber + for<'a> LookupSpan<'a>> tracing_subscriber::Layer<S>
    for WASMTracingLayer
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let spans = self.spans_prefix();

        let mut value = String::new();
        event.record(&mut PrettyVisitor::new(Writer::new(&mut value), true));

        let meta = event.metadata();
        let level = *meta.level();
        let target = if self.config.target {
            format!(" {}", meta.target())
        } else {
            String::new()
        };
        let origin = if self.config.line || level <= tracing::Level::WARN {
            meta.file()
                .and_then(|file| meta.line().map(|ln| format!(" {}:{}", file, ln)))
                .unwrap_or_default()
        } else {
            String::new()
        };

        log5(
            format!("%c{level}%c{spans}%c{target}{origin}%c: {value}"),
            level_style(level),
            "color: inherit; font-weight: bold",
            "color: gray; font-style: italic",
            "color: inherit",
        );
    }

    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, _ctx: Context<'_, S>) {
        let meta = attrs.metadata();
        if !meta.target().starts_with(self.config.span_target_prefix) {
            return;
        }

        let mut body = String::new();
        attrs.record(&mut PrettyVisitor::new(Writer::new(&mut body), true));

        let name = meta.name();
        let output = match (name.is_empty(), body.is_empty()) {
            (false, true) => name.to_string(),
            (false, false) => format!("{} = {}", name, body),
            (true, false) => body,
            (true, true) => String::from("{}"),
        };

        if let Ok(mut spans) = self.spans.lock() {
            spans.insert(id.clone(), output);
        }
    }

    fn on_exit(&self, id: &span::Id, _ctx: Context<'_, S>) {
        if let Ok(mut spans) = self.spans.lock() {
            spans.swap_remove(id);
        }
    }

    fn on_close(&self, id: span::Id, _ctx: Context<'_, S>) {
        if let Ok(mut spans) = self.spans.lock() {
            spans.swap_remove(&id);
        }
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn log5(message1: String, message2: &str, message3: &str, message4: &str, message5: &str);
}
