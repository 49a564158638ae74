//! Tabla `driver`

use super::{table_columns, Table};

table_columns!(DriverColumn {
    EmployeeId => "employee_id", Text;
    LicenseId => "license_id", Text;
    HoursDriven => "hours_driven", Real;
});

pub struct Driver;

impl Table for Driver {
    type Column = DriverColumn;

    const NAME: &'static str = "driver";
    const KEY: DriverColumn = DriverColumn::EmployeeId;

    const CREATE: &'static str = r#"
        CREATE TABLE driver (
            employee_id CHAR(6) PRIMARY KEY REFERENCES employee,
            license_id VARCHAR(20),
            hours_driven DOUBLE PRECISION
        )
    "#;

    const DROP_DEPENDENTS: &'static [&'static str] = &["driver_drives"];

    const SEED: &'static [&'static str] = &[
        "INSERT INTO driver (employee_id, license_id, hours_driven) \
         VALUES ('e00003', 'DL-553200', 120.5)",
    ];
}
