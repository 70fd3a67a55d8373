pub mod geometry;
pub mod props;
pub mod stop;
