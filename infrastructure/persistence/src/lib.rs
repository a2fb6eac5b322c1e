pub mod db;
pub mod catalog {
    pub mod cache;
    pub mod cursor;
    pub mod entity;
    pub mod in_memory;
    pub mod repository;
}
pub mod cart {
    pub mod file;
    pub mod in_memory;
}
