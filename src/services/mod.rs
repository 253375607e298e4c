pub mod media;
pub mod probe;
pub mod storage;
pub mod thumbnail_service;
