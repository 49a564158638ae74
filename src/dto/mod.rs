//! DTOs de la API
//!
//! Los campos JSON siguen la convención camelCase del frontend.

pub mod assignment_dto;
pub mod common;
pub mod customer_dto;
pub mod dispatcher_dto;
pub mod driver_dto;
pub mod employee_dto;
pub mod invoice_dto;
pub mod location_dto;
pub mod order_dto;
pub mod route_dto;
pub mod truck_dto;
