pub mod entities;
pub mod ports;

pub use entities::Role;
pub use ports::RoleRepository;
