//! Tabla `customer`

use super::{table_columns, Table};

table_columns!(CustomerColumn {
    CustomerId => "customer_id", Text;
    PhoneNumber => "phone_number", Text;
    Email => "email", Text;
    Name => "name", Text;
});

pub struct Customer;

impl Table for Customer {
    type Column = CustomerColumn;

    const NAME: &'static str = "customer";
    const KEY: CustomerColumn = CustomerColumn::CustomerId;

    const CREATE: &'static str = r#"
        CREATE TABLE customer (
            customer_id CHAR(6) PRIMARY KEY,
            phone_number VARCHAR(20),
            email VARCHAR(40),
            name VARCHAR(30)
        )
    "#;

    const DROP_DEPENDENTS: &'static [&'static str] = &[];

    const SEED: &'static [&'static str] = &[
        "INSERT INTO customer (customer_id, phone_number, email, name) \
         VALUES ('c00001', '604-555-0101', 'nora.chen@example.com', 'Nora Chen')",
        "INSERT INTO customer (customer_id, phone_number, email, name) \
         VALUES ('c00002', '604-555-0139', 'sam.oduya@example.com', 'Sam Oduya')",
    ];
}
