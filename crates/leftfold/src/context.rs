//! Pipeline configuration

/// Default limit on the number of operators in one expression.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Hard ceiling on the operator limit.
///
/// Evaluation, `Display` and drop all recurse once per operator; a deeper
/// tree can exhaust the stack no matter what the context asks for.
pub const MAX_DEPTH_CEILING: usize = 8192;

/// Configuration for a tokenize/build/evaluate run.
///
/// Passed by reference through the pipeline. Holds no state between calls,
/// so one context can drive any number of independent expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalContext {
    /// Maximum number of operators, which is also the tree depth.
    /// Values above [`MAX_DEPTH_CEILING`] are clamped when building.
    pub max_depth: usize,

    /// Whether to trace each pipeline stage to stderr
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit, clamped to
    /// [`MAX_DEPTH_CEILING`].
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: max_depth.min(MAX_DEPTH_CEILING),
            ..Default::default()
        }
    }

    /// The operator limit the tree builder enforces.
    pub fn depth_limit(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_CEILING)
    }

    /// Enable or disable stage tracing.
    pub fn traced(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = EvalContext::new();
        assert_eq!(ctx.max_depth, DEFAULT_MAX_DEPTH);
        assert!(!ctx.trace);
    }

    #[test]
    fn test_custom_depth_keeps_defaults() {
        let ctx = EvalContext::with_max_depth(3).traced(true);
        assert_eq!(ctx.max_depth, 3);
        assert!(ctx.trace);
    }

    #[test]
    fn test_depth_limit_is_clamped() {
        assert_eq!(
            EvalContext::with_max_depth(usize::MAX).max_depth,
            MAX_DEPTH_CEILING
        );

        let ctx = EvalContext {
            max_depth: usize::MAX,
            trace: false,
        };
        assert_eq!(ctx.depth_limit(), MAX_DEPTH_CEILING);
        assert_eq!(EvalContext::new().depth_limit(), DEFAULT_MAX_DEPTH);
    }
}
