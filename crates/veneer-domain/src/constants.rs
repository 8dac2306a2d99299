//! Domain layer constants

// ============================================================================
// DECORATOR MARKERS
// ============================================================================

/// Name of the global decorator marker carried by every decorator type
pub const ANY_DECORATOR_MARKER: &str = "Decorator";

/// Marker for decorators that apply uniformly to every specialization of a template
pub const GENERIC_DECORATOR_MARKER: &str = "GenericDecorator";

/// Marker for decorators bound to one closed capability
pub const SPECIFIC_DECORATOR_MARKER: &str = "SpecificDecorator";

// ============================================================================
// TEMPLATE MATCHING
// ============================================================================

/// Number of type parameters an open template target must declare by default
pub const DEFAULT_OPEN_TEMPLATE_ARITY: usize = 2;
