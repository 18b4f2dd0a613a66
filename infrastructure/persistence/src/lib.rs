pub mod db;
pub mod notifier;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod favorite {
    pub mod entity;
    pub mod repository;
}
