pub const DOUBLE_ONE_MINUS_EPSILON: f64 = 0.99999999999999989;
pub const FLOAT_ONE_MINUS_EPSILON: f32 = 0.99999994;

#[cfg(not(feature = "float-as-double"))]
mod detail {
    use super::*;

    pub const ONE_MINUS_EPSILON: f32 = FLOAT_ONE_MINUS_EPSILON;
}

#[cfg(feature = "float-as-double")]
mod detail {
    use super::*;

    pub const ONE_MINUS_EPSILON: f64 = DOUBLE_ONE_MINUS_EPSILON;
}

pub use detail::*;
