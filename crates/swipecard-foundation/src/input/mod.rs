pub mod normalizer;
pub mod types;

pub use normalizer::PointerNormalizer;
pub use types::{PointerEvent, PointerEventKind, PointerInput, PointerSource};

pub mod prelude {
    pub use super::normalizer::PointerNormalizer;
    pub use super::types::{PointerEvent, PointerEventKind, PointerInput, PointerSource};
}
