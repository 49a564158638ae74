//! Tabla `orders`: pedidos de envío ligados a cliente y ruta
//!
//! Se implementa la variante más reciente del esquema: la fila referencia
//! `dispatcher_id` y la FK a `route` borra en cascada.

use super::{table_columns, Table};

table_columns!(OrderColumn {
    OrderId => "order_id", Text;
    CustomerId => "customer_id", Text;
    Weight => "weight", Real;
    RouteId => "route_id", Text;
    OrderDate => "order_date", Date;
    DepartureTime => "departure_time", Text;
    ArrivalTime => "arrival_time", Text;
    InvoiceId => "invoice_id", Text;
    DispatcherId => "dispatcher_id", Text;
});

pub struct Order;

impl Table for Order {
    type Column = OrderColumn;

    const NAME: &'static str = "orders";
    const KEY: OrderColumn = OrderColumn::OrderId;

    const CREATE: &'static str = r#"
        CREATE TABLE orders (
            order_id CHAR(6) PRIMARY KEY,
            customer_id CHAR(6) NOT NULL,
            weight DOUBLE PRECISION,
            route_id CHAR(6) NOT NULL REFERENCES route ON DELETE CASCADE,
            order_date DATE,
            departure_time CHAR(5),
            arrival_time CHAR(5),
            invoice_id CHAR(6),
            dispatcher_id CHAR(6)
        )
    "#;

    const DROP_DEPENDENTS: &'static [&'static str] = &["assigned"];

    const SEED: &'static [&'static str] = &[
        "INSERT INTO orders (order_id, customer_id, weight, route_id, order_date, departure_time, arrival_time, invoice_id, dispatcher_id) \
         VALUES ('o00001', 'c00001', 150, 'r00002', DATE '2025-04-22', '06:00', '12:22', 'i00001', 'd00001')",
        "INSERT INTO orders (order_id, customer_id, weight, route_id, order_date, departure_time, arrival_time, invoice_id, dispatcher_id) \
         VALUES ('o00002', 'c00002', 100, 'r00001', DATE '2025-03-29', '16:00', NULL, 'i00002', 'd00001')",
        "INSERT INTO orders (order_id, customer_id, weight, route_id, order_date, departure_time, arrival_time, invoice_id, dispatcher_id) \
         VALUES ('o00003', 'c00001', 300, 'r00001', DATE '2025-04-01', '10:00', '22:00', NULL, 'd00002')",
    ];
}
