// Design tokens for the Open Brain AI site.
// Reactive color scales keyed off the theme signal, plus spacing,
// typography, and animation constants.

pub mod animation;
pub mod color;
pub mod spacing;
pub mod typography;

pub use animation::*;
pub use color::*;
pub use spacing::*;
pub use typography::*;
