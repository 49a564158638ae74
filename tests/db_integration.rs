//! Pruebas de integración contra PostgreSQL.
//!
//! Requieren `DATABASE_URL`; sin ella cada prueba se salta. Todo el ciclo
//! de vida va en una sola función porque las tablas son compartidas y el
//! runner ejecuta pruebas en paralelo.

use serde_json::{json, Value};
use sqlx::PgPool;

use freight_logistics::config::database::DatabaseConfig;
use freight_logistics::database::DatabaseConnection;
use freight_logistics::query::{Condition, Filter};
use freight_logistics::repositories::assignment_repository::AssignmentRepository;
use freight_logistics::repositories::customer_repository::CustomerRepository;
use freight_logistics::repositories::dispatcher_repository::DispatcherRepository;
use freight_logistics::repositories::driver_repository::DriverRepository;
use freight_logistics::repositories::employee_repository::EmployeeRepository;
use freight_logistics::repositories::invoice_repository::InvoiceRepository;
use freight_logistics::repositories::location_repository::LocationRepository;
use freight_logistics::repositories::order_repository::{NewOrder, OrderRepository};
use freight_logistics::repositories::route_repository::RouteRepository;
use freight_logistics::repositories::truck_repository::TruckRepository;
use freight_logistics::models::order::OrderColumn;
use freight_logistics::models::route::RouteColumn;

async fn test_pool() -> Option<PgPool> {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL not set, skipping integration test");
        return None;
    }
    let config = DatabaseConfig::default();
    Some(config.create_test_pool().await.expect("test database"))
}

fn first_column(rows: &[Vec<Value>]) -> Vec<&str> {
    rows.iter().filter_map(|row| row[0].as_str()).collect()
}

#[tokio::test]
async fn test_connection_round_trip() {
    let Some(pool) = test_pool().await else { return };
    let connection = DatabaseConnection::from_pool(pool);

    assert!(connection.check().await);

    let value = connection
        .with_connection(|mut conn| async move {
            let row: (i32,) = sqlx::query_as("SELECT 41 + 1")
                .fetch_one(&mut *conn)
                .await?;
            Ok(row.0)
        })
        .await
        .unwrap();
    assert_eq!(value, 42);
}

#[tokio::test]
async fn test_full_lifecycle() {
    let Some(pool) = test_pool().await else { return };

    let routes = RouteRepository::new(pool.clone());
    let locations = LocationRepository::new(pool.clone());
    let customers = CustomerRepository::new(pool.clone());
    let employees = EmployeeRepository::new(pool.clone());
    let dispatchers = DispatcherRepository::new(pool.clone());
    let drivers = DriverRepository::new(pool.clone());
    let trucks = TruckRepository::new(pool.clone());
    let invoices = InvoiceRepository::new(pool.clone());
    let orders = OrderRepository::new(pool.clone());
    let assignments = AssignmentRepository::new(pool.clone());

    // Recreación y semillas; la segunda llamada verifica idempotencia
    assert!(routes.initialize().await);
    assert!(routes.initialize().await);
    assert!(locations.initialize().await);
    assert!(customers.initialize().await);
    assert!(employees.initialize().await);
    assert!(dispatchers.initialize().await);
    assert!(drivers.initialize().await);
    assert!(trucks.initialize().await);
    assert!(invoices.initialize().await);
    assert!(orders.initialize().await);
    assert!(assignments.initialize_driver_drives().await);
    assert!(assignments.initialize_assigned().await);

    let seeded = routes.fetch_all().await;
    assert_eq!(seeded.len(), 3);
    assert!(first_column(&seeded).contains(&"r00001"));

    // Inserción nueva y rechazo por clave más larga que CHAR(6)
    assert!(
        routes
            .insert("r00010", "49.25761407, -123.23615578", "43.0, -79.0", Some(80.0))
            .await
    );
    assert!(
        !routes
            .insert("r000010", "0.0, 0.0", "1.0, 1.0", Some(1.0))
            .await
    );

    let long_routes = routes
        .select_where(&Filter::new(
            Condition::<RouteColumn>::parse("distance", ">=", "20").unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(long_routes.len(), 3); // r00002, r00003, r00010

    assert!(
        orders
            .insert(NewOrder {
                order_id: "o00010".to_string(),
                customer_id: "c00001".to_string(),
                weight: Some(500.0),
                route_id: "r00010".to_string(),
                order_date: Some(chrono::NaiveDate::from_ymd_opt(2025, 4, 22).unwrap()),
                departure_time: Some("05:30".to_string()),
                arrival_time: None,
                invoice_id: None,
                dispatcher_id: Some("d00001".to_string()),
            })
            .await
    );

    // Pedido sobre ruta inexistente: la FK lo rechaza y se colapsa a false
    assert!(
        !orders
            .insert(NewOrder {
                order_id: "o00011".to_string(),
                customer_id: "c00001".to_string(),
                weight: Some(10.0),
                route_id: "r99999".to_string(),
                order_date: None,
                departure_time: None,
                arrival_time: None,
                invoice_id: None,
                dispatcher_id: None,
            })
            .await
    );

    // Conteo por cliente, descendente
    let counts = orders.count_by_customer().await;
    assert_eq!(counts, vec![vec![json!("c00001"), json!(3)], vec![json!("c00002"), json!(1)]]);

    // 2025-04-22 es la única fecha con más de un pedido
    let departures = orders.earliest_departure_per_busy_date().await;
    assert_eq!(departures, vec![vec![json!("2025-04-22"), json!("05:30")]]);

    // Peso contra el promedio de la propia fecha: o00001 (150 < 325) queda fuera
    let heavy = orders.above_average_weight().await;
    let heavy_ids = first_column(&heavy);
    assert!(heavy_ids.contains(&"o00010"));
    assert!(heavy_ids.contains(&"o00002"));
    assert!(heavy_ids.contains(&"o00003"));
    assert!(!heavy_ids.contains(&"o00001"));

    // Join pedidos-rutas-ubicaciones, descendente por distancia
    let long_haul = orders.long_haul(20.0).await;
    assert_eq!(first_column(&long_haul), vec!["o00010", "o00001"]);
    // r00010 comparte origen con r00001, la dirección viene del join
    assert_eq!(long_haul[0][7], json!("2329 West Mall, Vancouver"));

    // Proyección de columnas elegidas
    let projected = orders
        .project(&[OrderColumn::OrderId, OrderColumn::Weight])
        .await
        .unwrap();
    assert_eq!(projected.len(), 4);
    assert!(projected.iter().all(|row| row.len() == 2));

    // Update de un atributo con coerción de fecha y lectura de vuelta
    assert!(
        orders
            .update_attribute("o00002", "orderDate", "2025-05-05")
            .await
            .unwrap()
    );
    let moved = orders
        .select_where(&Filter::new(
            Condition::<OrderColumn>::parse("orderDate", "=", "2025-05-05").unwrap(),
        ))
        .await
        .unwrap();
    assert_eq!(first_column(&moved), vec!["o00002"]);
    assert_eq!(moved[0][4], json!("2025-05-05"));

    // Atributo fuera de la allow-list y fecha mal formada
    assert!(orders.update_attribute("o00002", "password", "x").await.is_err());
    assert!(
        orders
            .update_attribute("o00002", "orderDate", "2025-13-40")
            .await
            .is_err()
    );

    // Borrado de ruta: los pedidos que la referencian caen en cascada
    assert!(routes.delete("r00001").await);
    let remaining = orders.fetch_all().await;
    let remaining_ids = first_column(&remaining);
    assert_eq!(remaining_ids.len(), 2);
    assert!(remaining_ids.contains(&"o00001"));
    assert!(remaining_ids.contains(&"o00010"));

    // Borrar una clave inexistente no es éxito
    assert!(!routes.delete("r00001").await);

    // Claves compuestas de las tablas de asociación
    assert!(assignments.insert_driver_drives("t00002", "e00003").await);
    assert!(assignments.delete_driver_drives("t00002", "e00003").await);
    assert!(assignments.insert_assigned("t00001", "e00003", "o00010").await);
    assert!(assignments.delete_assigned("t00001", "e00003", "o00010").await);
}
