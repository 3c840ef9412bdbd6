pub mod error;
pub mod health {
    pub mod routes;
}
pub mod scan {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod scanner {
    pub mod routes;
}
pub mod security;
pub mod session {
    pub mod routes;
}
pub mod tags;
