pub mod change_kernel;
pub mod sitemap;
