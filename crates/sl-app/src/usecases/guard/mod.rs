pub mod enter_route;

pub use enter_route::EnterRoute;
