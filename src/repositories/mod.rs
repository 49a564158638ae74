//! Repositorios de acceso a datos
//!
//! Un repositorio por entidad sobre la capa genérica de `table`.

pub mod assignment_repository;
pub mod customer_repository;
pub mod dispatcher_repository;
pub mod driver_repository;
pub mod employee_repository;
pub mod invoice_repository;
pub mod location_repository;
pub mod order_repository;
pub mod route_repository;
pub mod table;
pub mod truck_repository;
