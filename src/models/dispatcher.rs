//! Tabla `dispatcher`

use super::{table_columns, Table};

table_columns!(DispatcherColumn {
    DispatcherId => "dispatcher_id", Text;
    EmployeeId => "employee_id", Text;
});

pub struct Dispatcher;

impl Table for Dispatcher {
    type Column = DispatcherColumn;

    const NAME: &'static str = "dispatcher";
    const KEY: DispatcherColumn = DispatcherColumn::DispatcherId;

    const CREATE: &'static str = r#"
        CREATE TABLE dispatcher (
            dispatcher_id CHAR(6) PRIMARY KEY,
            employee_id CHAR(6) NOT NULL REFERENCES employee
        )
    "#;

    const DROP_DEPENDENTS: &'static [&'static str] = &[];

    const SEED: &'static [&'static str] = &[
        "INSERT INTO dispatcher (dispatcher_id, employee_id) VALUES ('d00001', 'e00001')",
        "INSERT INTO dispatcher (dispatcher_id, employee_id) VALUES ('d00002', 'e00002')",
    ];
}
