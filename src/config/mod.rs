// Configuration for path instances and route tables

pub mod routes;
pub mod yml_settings;

pub use routes::{Route, RouteTable};
pub use yml_settings::{PathInstanceConfig, RouteSettings, RoutesFile};
