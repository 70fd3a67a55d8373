pub mod max_bounds;
pub mod padding;
pub mod stop;
