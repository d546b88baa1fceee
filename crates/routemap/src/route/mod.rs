/// Route module for template compilation, generation and matching
///
/// Contains pure functional components with no shared state:
/// - `token` - classify one template segment
/// - `compiler` - template → validated token list
/// - `render` - tokens + params → canonical path
/// - `matcher` - tokens + runtime path → params

pub mod compiler;
pub mod matcher;
pub mod render;
pub mod token;

// Re-export commonly used types
pub use compiler::compile;
pub use matcher::{find_match, match_rule};
pub use render::render;
pub use token::{classify_segment, Token, WILDCARD_KEY};
