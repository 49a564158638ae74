//! Tabla `employee`: superclase de despachadores y conductores

use super::{table_columns, Table};

table_columns!(EmployeeColumn {
    EmployeeId => "employee_id", Text;
    Sin => "sin", Text;
    PhoneNumber => "phone_number", Text;
    Email => "email", Text;
    WorkLocation => "work_location", Text;
});

pub struct Employee;

impl Table for Employee {
    type Column = EmployeeColumn;

    const NAME: &'static str = "employee";
    const KEY: EmployeeColumn = EmployeeColumn::EmployeeId;

    const CREATE: &'static str = r#"
        CREATE TABLE employee (
            employee_id CHAR(6) PRIMARY KEY,
            sin CHAR(9),
            phone_number VARCHAR(20),
            email VARCHAR(40),
            work_location VARCHAR(30)
        )
    "#;

    const DROP_DEPENDENTS: &'static [&'static str] =
        &["assigned", "driver_drives", "driver", "dispatcher"];

    const SEED: &'static [&'static str] = &[
        "INSERT INTO employee (employee_id, sin, phone_number, email, work_location) \
         VALUES ('e00001', '755200331', '604-555-0170', 'p.brar@freightline.example', '49.25761407, -123.23615578')",
        "INSERT INTO employee (employee_id, sin, phone_number, email, work_location) \
         VALUES ('e00002', '810443992', '604-555-0188', 'l.martel@freightline.example', '49.22764848, -123.06627330')",
        "INSERT INTO employee (employee_id, sin, phone_number, email, work_location) \
         VALUES ('e00003', '629117405', '604-555-0142', 'j.okafor@freightline.example', '49.25761407, -123.23615578')",
    ];
}
