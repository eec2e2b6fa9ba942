pub mod models;
pub mod pipeline;
pub mod render;
pub mod routes;
