pub mod halton;

pub use halton::create_halton_sequence;
pub use halton::HaltonParams;
pub use halton::HaltonSequence;
