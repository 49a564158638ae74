//! Tabla `location`: almacenes y patios identificados por coordenada

use super::{table_columns, Table};

table_columns!(LocationColumn {
    Coordinate => "coordinate", Text;
    City => "city", Text;
    Address => "address", Text;
    Capacity => "capacity", Integer;
    TrucksParked => "trucks_parked", Integer;
    CloseTime => "close_time", Text;
    OpenTime => "open_time", Text;
});

pub struct Location;

impl Table for Location {
    type Column = LocationColumn;

    const NAME: &'static str = "location";
    const KEY: LocationColumn = LocationColumn::Coordinate;

    const CREATE: &'static str = r#"
        CREATE TABLE location (
            coordinate VARCHAR(30) PRIMARY KEY,
            city CHAR(6),
            address VARCHAR(40) NOT NULL,
            capacity INTEGER,
            trucks_parked INTEGER,
            close_time CHAR(5),
            open_time CHAR(5)
        )
    "#;

    const DROP_DEPENDENTS: &'static [&'static str] = &[];

    // Las coordenadas semilla coinciden con los orígenes de las rutas
    // para que el join pedidos-rutas-ubicaciones tenga filas que devolver.
    const SEED: &'static [&'static str] = &[
        "INSERT INTO location (coordinate, city, address, capacity, trucks_parked, close_time, open_time) \
         VALUES ('49.25761407, -123.23615578', 'VANCVR', '2329 West Mall, Vancouver', 20, 5, '22:00', '06:00')",
        "INSERT INTO location (coordinate, city, address, capacity, trucks_parked, close_time, open_time) \
         VALUES ('49.22764848, -123.06627330', 'VANCVR', '5898 Victoria Dr, Vancouver', 12, 3, '21:00', '07:00')",
    ];
}
