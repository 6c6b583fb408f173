use crate::interpreter::lexer::Spanned;

/// Log target used for all trace records.
pub const TRACE_TARGET: &str = "exprtree::trace";

/// Emits a human-readable record of the parser's progress.
///
/// Records are written through the `log` facade at `debug` level, indented by
/// the current rule depth. A disabled tracer does nothing and never touches
/// the token stream, so tracing cannot change what is parsed.
#[derive(Debug, Default, Clone)]
pub struct Tracer {
    enabled: bool,
    depth:   usize,
}

impl Tracer {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled,
               depth: 0 }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enter(&mut self, rule: &str, lookahead: &Spanned) {
        if !self.enabled {
            return;
        }
        log::debug!(target: TRACE_TARGET,
                    "{:indent$}enter   {rule}, LT(1)={}",
                    "",
                    describe(lookahead),
                    indent = self.depth * 2);
        self.depth += 1;
    }

    pub fn exit(&mut self, rule: &str, lookahead: &Spanned) {
        if !self.enabled {
            return;
        }
        self.depth = self.depth.saturating_sub(1);
        log::debug!(target: TRACE_TARGET,
                    "{:indent$}exit    {rule}, LT(1)={}",
                    "",
                    describe(lookahead),
                    indent = self.depth * 2);
    }

    pub fn consume(&self, token: &Spanned) {
        if !self.enabled {
            return;
        }
        log::debug!(target: TRACE_TARGET,
                    "{:indent$}consume {} at {}..{}",
                    "",
                    describe(token),
                    token.span.start,
                    token.span.end,
                    indent = self.depth * 2);
    }
}

fn describe(spanned: &Spanned) -> String {
    format!("{} {}", spanned.token.kind_name(), spanned.token)
}
