//! Tablas de asociación `driver_drives` y `assigned`
//!
//! Ambas tienen clave primaria compuesta; sus borrados por clave se
//! implementan en `assignment_repository` en lugar de la capa genérica.

use super::{table_columns, Table};

table_columns!(DriverDrivesColumn {
    PlateNumber => "plate_number", Text;
    EmployeeId => "employee_id", Text;
});

pub struct DriverDrives;

impl Table for DriverDrives {
    type Column = DriverDrivesColumn;

    const NAME: &'static str = "driver_drives";
    const KEY: DriverDrivesColumn = DriverDrivesColumn::PlateNumber;

    const CREATE: &'static str = r#"
        CREATE TABLE driver_drives (
            plate_number CHAR(6) REFERENCES truck,
            employee_id CHAR(6) REFERENCES driver,
            PRIMARY KEY (plate_number, employee_id)
        )
    "#;

    const DROP_DEPENDENTS: &'static [&'static str] = &[];

    const SEED: &'static [&'static str] = &[
        "INSERT INTO driver_drives (plate_number, employee_id) VALUES ('t00001', 'e00003')",
    ];
}

table_columns!(AssignedColumn {
    PlateNumber => "plate_number", Text;
    EmployeeId => "employee_id", Text;
    OrderId => "order_id", Text;
});

pub struct Assigned;

impl Table for Assigned {
    type Column = AssignedColumn;

    const NAME: &'static str = "assigned";
    const KEY: AssignedColumn = AssignedColumn::PlateNumber;

    const CREATE: &'static str = r#"
        CREATE TABLE assigned (
            plate_number CHAR(6) REFERENCES truck,
            employee_id CHAR(6) REFERENCES employee,
            order_id CHAR(6) REFERENCES orders ON DELETE CASCADE,
            PRIMARY KEY (plate_number, employee_id, order_id)
        )
    "#;

    const DROP_DEPENDENTS: &'static [&'static str] = &[];

    const SEED: &'static [&'static str] = &[
        "INSERT INTO assigned (plate_number, employee_id, order_id) \
         VALUES ('t00001', 'e00003', 'o00001')",
    ];
}
