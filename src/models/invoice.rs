//! Tabla `invoice`

use super::{table_columns, Table};

table_columns!(InvoiceColumn {
    InvoiceId => "invoice_id", Text;
    IssueDate => "issue_date", Date;
    Status => "status", Text;
    OrderId => "order_id", Text;
});

pub struct Invoice;

impl Table for Invoice {
    type Column = InvoiceColumn;

    const NAME: &'static str = "invoice";
    const KEY: InvoiceColumn = InvoiceColumn::InvoiceId;

    const CREATE: &'static str = r#"
        CREATE TABLE invoice (
            invoice_id CHAR(6) PRIMARY KEY,
            issue_date DATE,
            status VARCHAR(20),
            order_id CHAR(6)
        )
    "#;

    const DROP_DEPENDENTS: &'static [&'static str] = &[];

    const SEED: &'static [&'static str] = &[
        "INSERT INTO invoice (invoice_id, issue_date, status, order_id) \
         VALUES ('i00001', DATE '2025-04-20', 'paid', 'o00001')",
        "INSERT INTO invoice (invoice_id, issue_date, status, order_id) \
         VALUES ('i00002', DATE '2025-03-27', 'pending', 'o00002')",
    ];
}
