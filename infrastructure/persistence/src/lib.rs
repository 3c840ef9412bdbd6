pub mod scan_session {
    pub mod repository;
}
