pub mod export_route;
pub mod home_route;
pub mod results_route;
pub mod search_route;
