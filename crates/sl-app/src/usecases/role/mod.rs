pub mod select_role;

pub use select_role::SelectRole;
