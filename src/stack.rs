//! Stack capture with this crate's own frames elided.
//!
//! Frames are tagged with their origin crate (first path segment of the
//! demangled symbol) when captured; filtering works on that tag, so the result
//! does not depend on where the sources were built from.

use crate::config::FactoryConfig;
use smallvec::SmallVec;

/// Origin tag of frames that belong to this crate.
pub const CRATE_ORIGIN: &str = env!("CARGO_CRATE_NAME");

const UNKNOWN: &str = "<unknown>";

/// One captured frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub symbol: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub col: Option<u32>,
    pub origin: Option<String>,
}

impl Frame {
    fn unknown() -> Self {
        Self {
            symbol: None,
            file: None,
            line: None,
            col: None,
            origin: None,
        }
    }

    fn from_symbol(sym: &backtrace::BacktraceSymbol) -> Self {
        // `{:#}` drops the trailing `::h<hash>`
        let symbol = sym.name().map(|n| format!("{n:#}"));
        let origin = symbol.as_deref().and_then(origin_of).map(str::to_owned);
        Self {
            symbol,
            file: sym.filename().map(|p| p.display().to_string()),
            line: sym.lineno(),
            col: sym.colno(),
            origin,
        }
    }

    /// `symbol (file:line:col)`, the form used in `stacktrace`.
    pub fn describe(&self) -> String {
        let symbol = self.symbol.as_deref().unwrap_or(UNKNOWN);
        let Some(file) = &self.file else {
            return symbol.to_owned();
        };
        match (self.line, self.col) {
            (Some(l), Some(c)) => format!("{symbol} ({file}:{l}:{c})"),
            (Some(l), None) => format!("{symbol} ({file}:{l})"),
            _ => format!("{symbol} ({file})"),
        }
    }
}

// 类型前缀：`<dyn errs::..>`、`<&mut errs::..>`、`<[errs::..]>` 等
const TYPE_PREFIXES: [&str; 8] = ["<", "[", "&", "mut ", "dyn ", "impl ", "*const ", "*mut "];

/// Crate a symbol belongs to, e.g. `errs` for `<errs::fault::Fault as Clone>::clone`
/// or `<&mut errs::fault::Fault as Debug>::fmt`.
pub fn origin_of(symbol: &str) -> Option<&str> {
    let mut s = symbol;
    while let Some(rest) = TYPE_PREFIXES.iter().find_map(|p| s.strip_prefix(p)) {
        s = rest;
    }
    let end = s
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    let (head, rest) = s.split_at(end);
    (!head.is_empty() && rest.starts_with("::")).then_some(head)
}

/// Description part of a textual frame line (`    at <description>`).
///
/// Frame lines are indented; an unindented `at ...` belongs to a multi-line
/// header.
fn frame_line(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if trimmed.len() == line.len() {
        return None;
    }
    trimmed.strip_prefix("at ")
}

fn symbol_of(desc: &str) -> &str {
    desc.find(" (").map_or(desc, |i| &desc[..i])
}

#[derive(Clone, Debug)]
pub struct StackFilter {
    hidden: SmallVec<[String; 2]>,
    limit: usize,
}

impl Default for StackFilter {
    fn default() -> Self {
        Self::from_config(&FactoryConfig::default())
    }
}

impl StackFilter {
    pub fn from_config(cfg: &FactoryConfig) -> Self {
        let mut hidden: SmallVec<[String; 2]> = SmallVec::new();
        hidden.push(CRATE_ORIGIN.to_owned());
        for o in &cfg.hidden_origins {
            if !hidden.contains(o) {
                hidden.push(o.clone());
            }
        }
        Self {
            hidden,
            limit: cfg.stack_trace_limit,
        }
    }

    pub fn is_hidden(&self, origin: &str) -> bool {
        self.hidden.iter().any(|h| h == origin)
    }

    fn hides(&self, frame: &Frame) -> bool {
        frame.origin.as_deref().is_some_and(|o| self.is_hidden(o))
    }

    fn hides_line(&self, line: &str) -> bool {
        frame_line(line)
            .and_then(|d| origin_of(symbol_of(d)))
            .is_some_and(|o| self.is_hidden(o))
    }

    /// Capture the current stack, innermost first, without hidden frames.
    ///
    /// Everything inside the first hidden frame (the capture machinery) is
    /// dropped too; at most `stack_trace_limit` frames are kept.
    pub fn capture_frames(&self) -> Vec<Frame> {
        let bt = backtrace::Backtrace::new();
        let mut raw = Vec::new();
        for frame in bt.frames() {
            let symbols = frame.symbols();
            if symbols.is_empty() {
                raw.push(Frame::unknown());
            }
            for sym in symbols {
                raw.push(Frame::from_symbol(sym));
            }
        }
        let start = match raw.iter().position(|f| self.hides(f)) {
            Some(i) => i,
            None => {
                tracing::trace!(frames = raw.len(), "no symbolized frames from this crate; keeping capture as-is");
                raw.iter()
                    .take_while(|f| f.origin.as_deref() == Some("backtrace"))
                    .count()
            }
        };
        raw.into_iter()
            .skip(start)
            .filter(|f| !self.hides(f))
            .take(self.limit)
            .collect()
    }

    /// Capture a stack text: `header` then one `    at ...` line per frame.
    pub fn capture(&self, header: &str) -> String {
        let mut out = String::from(header);
        for f in self.capture_frames() {
            out.push_str("\n    at ");
            out.push_str(&f.describe());
        }
        out
    }

    /// Drop hidden frame lines from an existing stack text; header lines stay.
    pub fn scrub(&self, stack: &str) -> String {
        stack
            .lines()
            .filter(|l| !self.hides_line(l))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Frame descriptions of a stack text, innermost first, hidden ones removed.
    pub fn frames(&self, stack: &str) -> Vec<String> {
        stack
            .lines()
            .filter(|l| !self.hides_line(l))
            .filter_map(frame_line)
            .map(|d| d.trim_end().to_owned())
            .collect()
    }
}
