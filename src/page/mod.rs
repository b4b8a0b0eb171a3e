//! Page identity derived from the output path.

mod route;

pub use route::PageRoute;
