//! Tabla `truck`

use super::{table_columns, Table};

table_columns!(TruckColumn {
    PlateNumber => "plate_number", Text;
    Model => "model", Text;
    Mileage => "mileage", Real;
    Status => "status", Text;
    ParkedAt => "parked_at", Text;
});

pub struct Truck;

impl Table for Truck {
    type Column = TruckColumn;

    const NAME: &'static str = "truck";
    const KEY: TruckColumn = TruckColumn::PlateNumber;

    const CREATE: &'static str = r#"
        CREATE TABLE truck (
            plate_number CHAR(6) PRIMARY KEY,
            model VARCHAR(30),
            mileage DOUBLE PRECISION,
            status VARCHAR(20),
            parked_at VARCHAR(30)
        )
    "#;

    const DROP_DEPENDENTS: &'static [&'static str] = &["assigned", "driver_drives"];

    const SEED: &'static [&'static str] = &[
        "INSERT INTO truck (plate_number, model, mileage, status, parked_at) \
         VALUES ('t00001', 'Volvo FH16', 182000, 'parked', '49.25761407, -123.23615578')",
        "INSERT INTO truck (plate_number, model, mileage, status, parked_at) \
         VALUES ('t00002', 'Freightliner Cascadia', 96000, 'en route', NULL)",
    ];
}
