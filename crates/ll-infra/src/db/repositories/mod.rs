mod menu_repo;

pub use menu_repo::DieselMenuRepository;
