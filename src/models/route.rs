//! Tabla `route`: par origen/destino con distancia de viaje

use super::{table_columns, Table};

table_columns!(RouteColumn {
    RouteId => "route_id", Text;
    Origin => "origin", Text;
    Destination => "destination", Text;
    Distance => "distance", Real;
});

pub struct Route;

impl Table for Route {
    type Column = RouteColumn;

    const NAME: &'static str = "route";
    const KEY: RouteColumn = RouteColumn::RouteId;

    const CREATE: &'static str = r#"
        CREATE TABLE route (
            route_id CHAR(6) PRIMARY KEY,
            origin VARCHAR(30) NOT NULL,
            destination VARCHAR(30) NOT NULL,
            distance DOUBLE PRECISION
        )
    "#;

    // orders referencia route; assigned referencia orders
    const DROP_DEPENDENTS: &'static [&'static str] = &["assigned", "orders"];

    const SEED: &'static [&'static str] = &[
        "INSERT INTO route (route_id, origin, destination, distance) \
         VALUES ('r00001', '49.25761407, -123.23615578', '49.27048682, -123.15760743', 10)",
        "INSERT INTO route (route_id, origin, destination, distance) \
         VALUES ('r00002', '49.22764848, -123.06627330', '49.13373432, -122.83702854', 35)",
        "INSERT INTO route (route_id, origin, destination, distance) \
         VALUES ('r00003', '43.69039231, -79.28855125', '43.65886249, -79.48819193', 22)",
    ];
}
